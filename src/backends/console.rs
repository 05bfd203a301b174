// src/backends/console.rs

use crate::backends::Driver;

use anyhow::{Context, Result};
use log::{debug, trace};
use std::io::{self, BufWriter, Stdout, Write};

/// Writes the rendering as plain text to any `Write`, stdout by default.
///
/// Output is buffered; nothing is guaranteed to reach the writer until
/// `present` is called.
pub struct ConsoleDriver<W: Write = Stdout> {
    out: BufWriter<W>,
    utf8_buf: [u8; 4],
    rows_written: usize,
}

impl ConsoleDriver<Stdout> {
    /// Creates a driver on the process's standard output.
    pub fn stdout() -> Self {
        debug!("Creating ConsoleDriver on stdout.");
        ConsoleDriver::new(io::stdout())
    }
}

impl<W: Write> ConsoleDriver<W> {
    pub fn new(writer: W) -> Self {
        ConsoleDriver {
            out: BufWriter::new(writer),
            utf8_buf: [0u8; 4],
            rows_written: 0,
        }
    }

    /// Number of rows terminated so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes and returns the wrapped writer.
    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|e| e.into_error())
            .context("ConsoleDriver: Failed to flush buffered output")
    }
}

impl<W: Write> Driver for ConsoleDriver<W> {
    fn put_char(&mut self, c: char) -> Result<()> {
        let encoded = c.encode_utf8(&mut self.utf8_buf);
        self.out
            .write_all(encoded.as_bytes())
            .context("ConsoleDriver: Failed to write cell")
    }

    fn end_row(&mut self) -> Result<()> {
        self.out
            .write_all(b"\n")
            .context("ConsoleDriver: Failed to write newline")?;
        self.rows_written += 1;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        trace!("ConsoleDriver: Presenting {} rows.", self.rows_written);
        self.out
            .flush()
            .context("ConsoleDriver: Failed to flush output")
    }
}
