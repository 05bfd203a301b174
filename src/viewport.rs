// src/viewport.rs

//! Maps pixel coordinates onto a rectangle of the complex plane.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// A rectangular region of the complex plane, `[xmin, xmax] x [ymin, ymax]`.
///
/// Pixel `(col, row)` of a `width x height` raster samples the top-left corner
/// of its cell, so `xmax` and `ymax` themselves are never sampled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            xmin: -2.5,
            xmax: 1.0,
            ymin: -1.0,
            ymax: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Viewport {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Checks that all bounds are finite and both ranges are non-empty.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.xmin.is_finite()
                && self.xmax.is_finite()
                && self.ymin.is_finite()
                && self.ymax.is_finite(),
            "viewport bounds must be finite: {:?}",
            self
        );
        ensure!(
            self.xmin < self.xmax,
            "viewport x range is empty: xmin {} >= xmax {}",
            self.xmin,
            self.xmax
        );
        ensure!(
            self.ymin < self.ymax,
            "viewport y range is empty: ymin {} >= ymax {}",
            self.ymin,
            self.ymax
        );
        Ok(())
    }

    /// Complex sample point `(x0, y0)` for pixel `(col, row)`.
    ///
    /// `width` and `height` must be non-zero; the `Renderer` checks this once
    /// per frame rather than on every pixel.
    #[inline]
    pub fn point(&self, col: usize, row: usize, width: usize, height: usize) -> (f64, f64) {
        // Multiply before dividing to keep the exact rounding of the reference formula.
        let x0 = self.xmin + (self.xmax - self.xmin) * col as f64 / width as f64;
        let y0 = self.ymin + (self.ymax - self.ymin) * row as f64 / height as f64;
        (x0, y0)
    }
}
