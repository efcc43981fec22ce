//! CLI integration tests for the `pixelmark inspect` command.
//!
//! Verifies text and JSON metadata output, and that inspect reports on
//! files the apply workflow would reject.

use std::path::PathBuf;
use std::process::Command;

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

/// Get the path to the pixelmark binary.
fn pixelmark_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pixelmark"))
}

/// Run `pixelmark inspect` and return (stdout, stderr, exit code).
fn run_inspect(args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(pixelmark_binary())
        .arg("inspect")
        .args(args)
        .output()
        .expect("Failed to execute pixelmark");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code())
}

#[test]
fn test_inspect_rgb_text_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.png");
    RgbImage::from_pixel(8, 6, Rgb([1, 2, 3])).save(&path).unwrap();
    let path = path.display().to_string();

    let (stdout, _, code) = run_inspect(&[&path]);
    assert_eq!(code, Some(0));
    assert!(stdout.contains(&format!("{}: 8x6", path)));
    assert!(stdout.contains("color type: rgb8"));
    assert!(stdout.contains("bit depth:  24"));
    assert!(stdout.contains("channels:   3"));
    assert!(stdout.contains("alpha:      no"));
}

#[test]
fn test_inspect_rgba_json_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mark.png");
    RgbaImage::from_pixel(3, 5, Rgba([0, 0, 0, 128])).save(&path).unwrap();
    let path = path.display().to_string();

    let (stdout, _, code) = run_inspect(&[&path, "--json"]);
    assert_eq!(code, Some(0));

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["path"], path.as_str());
    assert_eq!(json["width"], 3);
    assert_eq!(json["height"], 5);
    assert_eq!(json["color_type"], "rgba8");
    assert_eq!(json["bit_depth"], 32);
    assert_eq!(json["channels"], 4);
    assert_eq!(json["alpha"], true);
}

#[test]
fn test_inspect_reports_formats_apply_rejects() {
    // grayscale decodes fine for inspect even though apply rejects it
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gray.png");
    GrayImage::from_pixel(2, 2, Luma([9])).save(&path).unwrap();
    let path = path.display().to_string();

    let (stdout, _, code) = run_inspect(&[&path, "--json"]);
    assert_eq!(code, Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["color_type"], "l8");
    assert_eq!(json["channels"], 1);
    assert_eq!(json["alpha"], false);
}

#[test]
fn test_inspect_missing_file() {
    let (_, stderr, code) = run_inspect(&["ghost.png"]);
    assert_eq!(code, Some(2));
    assert!(stderr.contains("The file ghost.png doesn't exist."));
}

#[test]
fn test_inspect_undecodable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("junk.png");
    std::fs::write(&path, b"not an image at all").unwrap();
    let path = path.display().to_string();

    let (_, stderr, code) = run_inspect(&[&path]);
    assert_eq!(code, Some(2));
    assert!(stderr.contains("couldn't be read as an image"));
}
