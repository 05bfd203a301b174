// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer` walks a raster in row-major order, maps every pixel onto
//! the `Viewport`, asks its `EscapeTime` evaluator for an iteration count and
//! hands the matching palette character to a `Driver`. It knows nothing about
//! where the characters end up; `ConsoleDriver` prints them and `BufferDriver`
//! collects them.

use crate::backends::{BufferDriver, ConsoleDriver, Driver};
use crate::density::{Density, Palette};
use crate::escape::{EscapeTime, Mandelbrot};
use crate::viewport::Viewport;

use anyhow::{ensure, Result};
use log::{debug, trace};

/// Pixel dimensions and iteration budget of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterSize {
    pub width: usize,
    pub height: usize,
    pub max_iter: u32,
}

impl RasterSize {
    pub fn new(width: usize, height: usize, max_iter: u32) -> Self {
        RasterSize {
            width,
            height,
            max_iter,
        }
    }

    /// Fails for zero-sized rasters, which have no pixel-to-plane mapping.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "raster must be at least 1x1, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

/// Translates escape-time samples into a character raster.
///
/// The `Renderer` holds no per-frame state; every pixel is computed
/// independently of every other.
pub struct Renderer<E: EscapeTime = Mandelbrot> {
    viewport: Viewport,
    palette: Palette,
    evaluator: E,
}

impl Renderer<Mandelbrot> {
    /// A renderer over the default viewport and palette.
    pub fn new() -> Self {
        Renderer::with_evaluator(Mandelbrot)
    }
}

impl Default for Renderer<Mandelbrot> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EscapeTime> Renderer<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Renderer {
            viewport: Viewport::default(),
            palette: Palette::default(),
            evaluator,
        }
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn into_evaluator(self) -> E {
        self.evaluator
    }

    /// Draws one frame through `driver`.
    ///
    /// Emits `raster.width` characters followed by `end_row` for each of the
    /// `raster.height` rows, then calls `present` once.
    pub fn draw(&mut self, raster: RasterSize, driver: &mut dyn Driver) -> Result<()> {
        raster.validate()?;
        self.viewport.validate()?;

        debug!(
            "Renderer: Drawing {}x{} frame, max_iter {}, viewport {:?}",
            raster.width, raster.height, raster.max_iter, self.viewport
        );

        for row in 0..raster.height {
            trace!("Renderer: Drawing row {}", row);
            for col in 0..raster.width {
                let (x0, y0) = self.viewport.point(col, row, raster.width, raster.height);
                let iter = self.evaluator.escape_time(x0, y0, raster.max_iter);
                let density = Density::classify(iter, raster.max_iter);
                driver.put_char(self.palette.glyph(density))?;
            }
            driver.end_row()?;
        }

        driver.present()?;
        debug!("Renderer: Frame complete ({} pixels).", raster.pixel_count());
        Ok(())
    }
}

/// Renders the default viewport to standard output.
pub fn render(width: usize, height: usize, max_iter: u32) -> Result<()> {
    let mut driver = ConsoleDriver::stdout();
    Renderer::new().draw(RasterSize::new(width, height, max_iter), &mut driver)
}

/// Renders the default viewport into a `String`.
pub fn render_to_string(width: usize, height: usize, max_iter: u32) -> Result<String> {
    let mut driver = BufferDriver::with_frame_capacity(width, height);
    Renderer::new().draw(RasterSize::new(width, height, max_iter), &mut driver)?;
    Ok(driver.into_string())
}
