// tests/render_output.rs

use mandel_term::backends::BufferDriver;
use mandel_term::config::{Config, CONFIG_PATH_ENV};
use mandel_term::{mandelbrot, render_to_string, RasterSize, Renderer};
use std::fs;
use std::process::Command;

const ALPHABET: [char; 4] = [' ', '.', '+', '*'];

const SNAPSHOT_24X8_30: &str = concat!(
    "                .+      \n",
    "               .**      \n",
    "             .******    \n",
    "         +*+.*******.   \n",
    "    ***************+    \n",
    "         +*+.*******.   \n",
    "             .******    \n",
    "               .**      \n",
);

fn assert_frame_shape(text: &str, width: usize, height: usize) {
    assert!(text.ends_with('\n'), "frame must end with a newline");
    let lines: Vec<&str> = text.split_terminator('\n').collect();
    assert_eq!(lines.len(), height);
    for (row, line) in lines.iter().enumerate() {
        assert_eq!(line.chars().count(), width, "row {} has wrong width", row);
        assert!(
            line.chars().all(|c| ALPHABET.contains(&c)),
            "row {} contains a character outside the alphabet: {:?}",
            row,
            line
        );
    }
}

#[test]
fn frame_shape_for_various_sizes() {
    for &(width, height, max_iter) in &[(1, 1, 1), (4, 2, 10), (17, 5, 33), (80, 24, 100)] {
        let text = render_to_string(width, height, max_iter).unwrap();
        assert_frame_shape(&text, width, height);
    }
}

#[test]
fn small_frame_snapshot() {
    assert_eq!(render_to_string(24, 8, 30).unwrap(), SNAPSHOT_24X8_30);
}

#[test]
fn rendering_is_deterministic() {
    let first = render_to_string(60, 20, 200).unwrap();
    let second = render_to_string(60, 20, 200).unwrap();
    assert_eq!(first, second);
}

#[test]
fn renderer_with_buffer_driver_matches_render_to_string() {
    let mut driver = BufferDriver::new();
    Renderer::new()
        .draw(RasterSize::new(24, 8, 30), &mut driver)
        .unwrap();
    assert_eq!(driver.as_str(), SNAPSHOT_24X8_30);
}

#[test]
fn known_points() {
    assert_eq!(mandelbrot(0.0, 0.0, 1000), 1000);
    assert_eq!(mandelbrot(-1.0, 0.0, 1000), 1000);
    assert_eq!(mandelbrot(10.0, 10.0, 1000), 1);
}

#[test]
fn binary_renders_configured_frame_to_stdout() {
    let dir = std::env::temp_dir().join(format!("mandel-term-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.json");
    fs::write(
        &path,
        r#"{"raster": {"width": 24, "height": 8, "max_iter": 30}}"#,
    )
    .unwrap();
    assert!(Config::load_from_path(&path).is_ok());

    let output = Command::new(env!("CARGO_BIN_EXE_mandel-term"))
        .env(CONFIG_PATH_ENV, &path)
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    fs::remove_dir_all(&dir).ok();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), SNAPSHOT_24X8_30);
}
