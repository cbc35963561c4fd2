//! Achievement log persistence
//!
//! Mastered achievements are appended to a plain text log, one name per line.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;

/// Durable record of mastered achievements
pub trait AchievementStore {
    /// Record one mastered achievement
    fn save(&mut self, name: &str) -> Result<(), PersistenceError>;

    /// Every name recorded so far, oldest first
    fn load_all(&self) -> Result<Vec<String>, PersistenceError>;
}

/// Appends names to a text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AchievementStore for FileStore {
    fn save(&mut self, name: &str) -> Result<(), PersistenceError> {
        let write_err = |source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{name}").map_err(write_err)?;
        log::debug!("Appended '{name}' to {}", self.path.display());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<String>, PersistenceError> {
        let read_err = |source| PersistenceError::Read {
            path: self.path.clone(),
            source,
        };
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            // No log yet means nothing mastered
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(read_err(e)),
        };

        let mut names = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(read_err)?;
            let line = line.trim();
            if !line.is_empty() {
                names.push(line.to_string());
            }
        }
        Ok(names)
    }
}

/// In-memory store for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Vec<String>,
}

impl MemoryStore {
    pub fn with_entries(entries: &[&str]) -> Self {
        Self {
            saved: entries.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn saved(&self) -> &[String] {
        &self.saved
    }
}

impl AchievementStore for MemoryStore {
    fn save(&mut self, name: &str) -> Result<(), PersistenceError> {
        self.saved.push(name.to_string());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<String>, PersistenceError> {
        Ok(self.saved.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("achievements.log");
        let mut store = FileStore::new(&path);

        assert!(store.load_all().unwrap().is_empty());
        store.save("Survivor").unwrap();
        store.save("Sharp Shooter").unwrap();

        assert_eq!(
            FileStore::new(&path).load_all().unwrap(),
            vec!["Survivor".to_string(), "Sharp Shooter".to_string()]
        );
    }

    #[test]
    fn test_file_store_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("achievements.log");
        std::fs::write(&path, "Survivor\n\n  Sharp Shooter  \n").unwrap();

        assert_eq!(
            FileStore::new(&path).load_all().unwrap(),
            vec!["Survivor".to_string(), "Sharp Shooter".to_string()]
        );
    }

    #[test]
    fn test_file_store_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let mut store = FileStore::new(dir.path());
        let err = store.save("Survivor").unwrap_err();
        assert!(matches!(err, PersistenceError::Write { .. }));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::with_entries(&["Survivor"]);
        store.save("Enemy Exterminator").unwrap();
        assert_eq!(store.load_all().unwrap().len(), 2);
    }
}
