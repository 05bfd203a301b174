// src/lib.rs

//! ASCII-art rendering of the Mandelbrot set.
//!
//! Each pixel of a raster is mapped onto a fixed viewport of the complex
//! plane, classified by escape time, and drawn as one of four density
//! characters.

pub mod backends;
pub mod config;
pub mod density;
pub mod escape;
pub mod renderer;
pub mod viewport;

pub use escape::mandelbrot;
pub use renderer::{render, render_to_string, RasterSize, Renderer};
