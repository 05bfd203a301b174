// src/backends/mod.rs
// Declares output backends and defines the common `Driver` trait.

pub mod buffer;
pub mod console;

pub use buffer::BufferDriver;
pub use console::ConsoleDriver;

use anyhow::Result;

/// Sink for the character stream produced by the `Renderer`.
///
/// Calls arrive in strict row-major order: `put_char` for each column of a
/// row, then `end_row`, and a single `present` once the frame is complete.
pub trait Driver {
    /// Emits one cell of the current row.
    fn put_char(&mut self, c: char) -> Result<()>;

    /// Terminates the current row.
    fn end_row(&mut self) -> Result<()>;

    /// Flushes everything drawn so far to the underlying output.
    fn present(&mut self) -> Result<()>;
}
