// src/main.rs

use mandel_term::{
    backends::ConsoleDriver,
    config::CONFIG,
    renderer::{RasterSize, Renderer},
};

use anyhow::Context;
use log::info;

/// Main entry point for the `mandel-term` application.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the picture. Default filter is
    // "warn" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    info!("Starting mandel-term...");
    info!("Configuration: {:?}", *CONFIG);

    let raster = RasterSize::from(CONFIG.raster);
    let mut renderer = Renderer::new()
        .viewport(CONFIG.viewport)
        .palette(CONFIG.palette);
    let mut driver = ConsoleDriver::stdout();

    renderer
        .draw(raster, &mut driver)
        .context("Failed to render frame")?;

    info!("mandel-term exited successfully.");
    Ok(())
}
