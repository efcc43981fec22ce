//! Image loading and pre-composite validation
//!
//! The compositor only works on 8-bit RGB and RGBA pixels, so loading
//! enforces that contract up front: the file must exist, decode, carry at
//! least 3 color components, and be 24 or 32-bit. Everything downstream can
//! then assume `Rgb8`/`Rgba8` semantics.

use std::fmt;
use std::path::Path;

use image::{ColorType, GenericImageView, RgbaImage};
use serde::Serialize;

use crate::error::MarkError;

/// Which of the two inputs an image is; appears in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Source,
    Watermark,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRole::Source => write!(f, "image"),
            ImageRole::Watermark => write!(f, "watermark"),
        }
    }
}

/// A decoded image together with the color type the decoder reported.
///
/// Pixels are held as `RgbaImage` regardless of the on-disk format; the
/// decoder-reported `ColorType` decides whether alpha-channel masking is
/// offered.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pixels: RgbaImage,
    color: ColorType,
}

impl LoadedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Whether the on-disk pixel format carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.color.has_alpha()
    }

    pub fn color(&self) -> ColorType {
        self.color
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Metadata about a decodable image file, for the `inspect` command.
#[derive(Debug, Clone, Serialize)]
pub struct ImageInfo {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub color_type: String,
    pub bit_depth: u16,
    pub channels: u8,
    pub alpha: bool,
}

/// Decode an image file without the component/depth checks.
///
/// Used by `inspect`, which reports on files `apply` would reject.
pub fn probe_image(path: &Path) -> Result<ImageInfo, MarkError> {
    let decoded = open_image(path)?;
    let color = decoded.color();
    let (width, height) = decoded.dimensions();
    Ok(ImageInfo {
        path: path.display().to_string(),
        width,
        height,
        color_type: color_type_name(color).to_string(),
        bit_depth: color.bits_per_pixel(),
        channels: color.channel_count(),
        alpha: color.has_alpha(),
    })
}

/// Load and validate an image for compositing.
///
/// # Errors
///
/// * [`MarkError::FileNotFound`] if the file does not exist
/// * [`MarkError::Decode`] if the codec cannot read it
/// * [`MarkError::ColorComponents`] for images with fewer than 3 channels
/// * [`MarkError::ColorDepth`] for anything other than 24/32-bit pixels
pub fn load_image(path: &Path, role: ImageRole) -> Result<LoadedImage, MarkError> {
    let decoded = open_image(path)?;
    let color = decoded.color();

    if color.channel_count() < 3 {
        return Err(MarkError::ColorComponents { role });
    }
    if color.bits_per_pixel() != 24 && color.bits_per_pixel() != 32 {
        return Err(MarkError::ColorDepth { role });
    }

    Ok(LoadedImage { pixels: decoded.to_rgba8(), color })
}

fn open_image(path: &Path) -> Result<image::DynamicImage, MarkError> {
    if !path.exists() {
        return Err(MarkError::FileNotFound { path: path.display().to_string() });
    }
    image::open(path)
        .map_err(|e| MarkError::Decode { path: path.display().to_string(), message: e.to_string() })
}

/// Short lowercase name for a color type (e.g. "rgb8", "rgba8").
fn color_type_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "l8",
        ColorType::La8 => "la8",
        ColorType::Rgb8 => "rgb8",
        ColorType::Rgba8 => "rgba8",
        ColorType::L16 => "l16",
        ColorType::La16 => "la16",
        ColorType::Rgb16 => "rgb16",
        ColorType::Rgba16 => "rgba16",
        ColorType::Rgb32F => "rgb32f",
        ColorType::Rgba32F => "rgba32f",
        _ => "unknown",
    }
}
