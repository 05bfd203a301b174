// src/escape/mod.rs

//! Escape-time evaluation of the Mandelbrot iteration `z = z^2 + c`.
//!
//! The evaluator is a pure function of the sample point and the iteration cap.
//! The `EscapeTime` trait is the seam the `Renderer` calls through, so a frame
//! can be driven by the real evaluator or by any closure with the same shape.

/// Squared magnitude above which an orbit is considered to have escaped (|z| > 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Returns the number of iterations before the orbit of `(x0, y0)` escapes,
/// or `max_iter` if it stays bounded for the whole budget.
///
/// A return value of `max_iter` does not distinguish a point in the set from
/// one that escapes on the very last step.
pub fn mandelbrot(x0: f64, y0: f64, max_iter: u32) -> u32 {
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut iteration = 0;

    while iteration < max_iter {
        let x2 = x * x;
        let y2 = y * y;

        if x2 + y2 > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }

        let x_next = x2 - y2 + x0;
        y = 2.0 * x * y + y0;
        x = x_next;

        iteration += 1;
    }

    max_iter
}

/// Something that can classify a complex sample point by escape time.
pub trait EscapeTime {
    /// Iterations before escape, capped at `max_iter`.
    fn escape_time(&mut self, x0: f64, y0: f64, max_iter: u32) -> u32;
}

/// The standard Mandelbrot evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mandelbrot;

impl EscapeTime for Mandelbrot {
    #[inline]
    fn escape_time(&mut self, x0: f64, y0: f64, max_iter: u32) -> u32 {
        mandelbrot(x0, y0, max_iter)
    }
}

impl<F> EscapeTime for F
where
    F: FnMut(f64, f64, u32) -> u32,
{
    fn escape_time(&mut self, x0: f64, y0: f64, max_iter: u32) -> u32 {
        self(x0, y0, max_iter)
    }
}
