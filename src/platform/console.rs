//! Terminal frontend for the headless driver

use super::{LogSink, RenderSink, StatSink};
use crate::renderer::AsciiRenderer;
use crate::sim::Entity;

/// Prints log lines immediately and the board every few frames
#[derive(Debug)]
pub struct ConsoleFrontend {
    renderer: AsciiRenderer,
    /// Print every Nth frame (0 = never)
    render_every: u64,
    /// Latest stat values in first-seen order
    stats: Vec<(String, String)>,
}

impl ConsoleFrontend {
    pub fn new(width: i32, height: i32, render_every: u64) -> Self {
        Self {
            renderer: AsciiRenderer::new(width, height),
            render_every,
            stats: Vec::new(),
        }
    }

    pub fn stat(&self, key: &str) -> Option<&str> {
        self.stats
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// "Score: 50 | Health: 90 | ..."
    pub fn stat_line(&self) -> String {
        self.stats
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl LogSink for ConsoleFrontend {
    fn log(&mut self, line: &str) {
        println!("{line}");
    }
}

impl RenderSink for ConsoleFrontend {
    fn render(&mut self, frame: &[Entity]) {
        self.renderer.render(frame);
        if self.render_every > 0 && self.renderer.frames() % self.render_every == 0 {
            println!("{}", self.renderer.last_frame());
            println!("{}", self.stat_line());
        }
    }
}

impl StatSink for ConsoleFrontend {
    fn set_stat(&mut self, key: &str, value: &str) {
        match self.stats.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.stats.push((key.to_string(), value.to_string())),
        }
    }
}
