//! Blend configuration and text-input parsers
//!
//! `BlendConfig` is the immutable value the compositor consumes. The parse
//! functions validate the raw strings collected from flags or prompts; each
//! failure maps to exactly one [`MarkError`] variant so the CLI can report
//! the same message no matter where the value came from.

use std::sync::OnceLock;

use image::Rgb;
use regex::Regex;

use crate::error::MarkError;

/// Where the watermark is drawn on the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// One instance at a fixed top-left offset.
    Single { x: u32, y: u32 },
    /// Tiled across the whole source via modulo indexing.
    Grid,
}

/// Which transparency mechanism suppresses watermark pixels.
///
/// The variants are mutually exclusive by construction: the watermark's own
/// alpha channel, one designated color, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transparency {
    /// No masking; only the equality short-circuit can suppress blending.
    #[default]
    None,
    /// Watermark pixels with alpha 0 are invisible.
    Alpha,
    /// Watermark pixels matching this RGB exactly are invisible.
    Color(Rgb<u8>),
}

/// Immutable blend parameters, constructed once from validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendConfig {
    pub transparency: Transparency,
    /// Blend weight percent applied to the watermark color, 0-100.
    pub weight: u8,
    pub placement: Placement,
}

impl BlendConfig {
    pub fn new(transparency: Transparency, weight: u8, placement: Placement) -> Self {
        debug_assert!(weight <= 100);
        Self { transparency, weight, placement }
    }
}

/// The placement method keyword, before a position is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMethod {
    Single,
    Grid,
}

fn color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+ \d+ \d+$").expect("valid regex"))
}

fn position_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d+ -?\d+$").expect("valid regex"))
}

/// Parse the blend weight: an integer string in 0..=100.
pub fn parse_weight(input: &str) -> Result<u8, MarkError> {
    let weight: i64 = input.parse().map_err(|_| MarkError::PercentageNotInteger)?;
    if weight < 0 || weight > 100 {
        return Err(MarkError::PercentageOutOfRange);
    }
    Ok(weight as u8)
}

/// Parse a transparency color: three space-separated integers 0..=255.
pub fn parse_transparency_color(input: &str) -> Result<Rgb<u8>, MarkError> {
    if !color_re().is_match(input) {
        return Err(MarkError::InvalidColorInput);
    }
    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(input.split(' ')) {
        // \d+ admits values past 255 (and past u32); both are out of range
        let value: u32 = part.parse().map_err(|_| MarkError::InvalidColorInput)?;
        if value > 255 {
            return Err(MarkError::InvalidColorInput);
        }
        *slot = value as u8;
    }
    Ok(Rgb(channels))
}

/// Parse the placement method keyword: literal `single` or `grid`.
pub fn parse_placement_method(input: &str) -> Result<PlacementMethod, MarkError> {
    match input {
        "single" => Ok(PlacementMethod::Single),
        "grid" => Ok(PlacementMethod::Grid),
        _ => Err(MarkError::InvalidPlacementMethod),
    }
}

/// Parse a single-placement position: two space-separated integers, each
/// within the legal range derived from the image dimensions.
///
/// `max_x`/`max_y` are `source - watermark` per axis, the largest offsets
/// that keep the watermark fully inside the source.
pub fn parse_position(input: &str, max_x: u32, max_y: u32) -> Result<(u32, u32), MarkError> {
    if !position_re().is_match(input) {
        return Err(MarkError::InvalidPositionInput);
    }
    let mut parts = input.split(' ');
    let x: i64 = parse_coord(parts.next())?;
    let y: i64 = parse_coord(parts.next())?;
    if x < 0 || x > i64::from(max_x) || y < 0 || y > i64::from(max_y) {
        return Err(MarkError::PositionOutOfRange);
    }
    Ok((x as u32, y as u32))
}

fn parse_coord(part: Option<&str>) -> Result<i64, MarkError> {
    part.ok_or(MarkError::InvalidPositionInput)?
        .parse()
        .map_err(|_| MarkError::InvalidPositionInput)
}
