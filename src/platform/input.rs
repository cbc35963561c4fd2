//! Keyboard command mapping

use crate::sim::Direction;

/// Shown when a key maps to no command
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Use W, A, S, D, F, or P.";

/// Player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Fire,
    Pause,
}

impl Command {
    /// Key that issues this command
    pub fn key(&self) -> char {
        match self {
            Command::Move(Direction::Up) => 'W',
            Command::Move(Direction::Left) => 'A',
            Command::Move(Direction::Down) => 'S',
            Command::Move(Direction::Right) => 'D',
            Command::Fire => 'F',
            Command::Pause => 'P',
        }
    }
}

/// Map a key to a command (case-insensitive)
pub fn parse_command(key: char) -> Option<Command> {
    match key.to_ascii_uppercase() {
        'W' => Some(Command::Move(Direction::Up)),
        'A' => Some(Command::Move(Direction::Left)),
        'S' => Some(Command::Move(Direction::Down)),
        'D' => Some(Command::Move(Direction::Right)),
        'F' => Some(Command::Fire),
        'P' => Some(Command::Pause),
        _ => None,
    }
}
