// src/backends/buffer.rs

use crate::backends::Driver;

use anyhow::Result;

/// Collects the rendering into an in-memory `String`.
#[derive(Debug, Default, Clone)]
pub struct BufferDriver {
    text: String,
    presented: bool,
}

impl BufferDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the buffer for a `width x height` frame.
    pub fn with_frame_capacity(width: usize, height: usize) -> Self {
        BufferDriver {
            text: String::with_capacity(width.saturating_add(1).saturating_mul(height)),
            presented: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether `present` has been called since the last write.
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Driver for BufferDriver {
    fn put_char(&mut self, c: char) -> Result<()> {
        self.text.push(c);
        self.presented = false;
        Ok(())
    }

    fn end_row(&mut self) -> Result<()> {
        self.text.push('\n');
        self.presented = false;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.presented = true;
        Ok(())
    }
}
