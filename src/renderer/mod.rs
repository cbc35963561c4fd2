//! Text rendering module
//!
//! Draws render snapshots as character grids for terminals and logs.

pub mod ascii;

pub use ascii::{AsciiRenderer, draw_frame};
