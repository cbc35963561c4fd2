//! Platform abstraction layer
//!
//! The game talks to the outside world through three sinks (log lines, render
//! frames, stat values) and receives single-character commands.

pub mod console;
pub mod input;

pub use console::ConsoleFrontend;
pub use input::{Command, INVALID_INPUT_MESSAGE, parse_command};

use crate::sim::Entity;

/// User-facing log output; fire-and-forget
pub trait LogSink {
    fn log(&mut self, line: &str);
}

/// Receives the visible entities (ship included) once per tick
pub trait RenderSink {
    fn render(&mut self, frame: &[Entity]);
}

/// Receives named stat values once per tick
pub trait StatSink {
    fn set_stat(&mut self, key: &str, value: &str);
}

/// Everything the game controller writes to
pub trait Frontend: LogSink + RenderSink + StatSink {}

impl<T: LogSink + RenderSink + StatSink + ?Sized> Frontend for T {}
