//! The per-pixel watermark compositing pass
//!
//! A pure function over two read-only buffers: no validation, no IO, no
//! shared state. Callers guarantee the watermark fits inside the source and
//! that a `Single` offset keeps it fully in bounds.

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::config::{BlendConfig, Placement, Transparency};

/// Composite `watermark` over `source` according to `config`.
///
/// The output always has the source's dimensions and is opaque RGB; source
/// alpha is ignored. For each pixel the watermark contributes either nothing
/// (outside a `Single` rectangle, transparent, or identical to the base
/// color) or a per-channel linear blend weighted by `config.weight`.
///
/// A watermark pixel whose RGB equals the base pixel is always treated as
/// transparent, whatever mechanism is configured. The blend itself uses
/// truncating integer division per channel.
pub fn composite(source: &RgbaImage, watermark: &RgbaImage, config: &BlendConfig) -> RgbImage {
    let (src_w, src_h) = source.dimensions();
    let (wm_w, wm_h) = watermark.dimensions();
    let weight = u32::from(config.weight);

    let mut out = RgbImage::new(src_w, src_h);
    for y in 0..src_h {
        for x in 0..src_w {
            let base = source.get_pixel(x, y);
            let mark = match config.placement {
                Placement::Grid => Some(watermark.get_pixel(x % wm_w, y % wm_h)),
                Placement::Single { x: mx, y: my } => {
                    if x >= mx && x < mx + wm_w && y >= my && y < my + wm_h {
                        Some(watermark.get_pixel(x - mx, y - my))
                    } else {
                        None
                    }
                }
            };

            let color = match mark {
                Some(w) if !rgb_equal(w, base) && !is_transparent(w, config.transparency) => {
                    Rgb([
                        blend_channel(w[0], base[0], weight),
                        blend_channel(w[1], base[1], weight),
                        blend_channel(w[2], base[2], weight),
                    ])
                }
                _ => Rgb([base[0], base[1], base[2]]),
            };
            out.put_pixel(x, y, color);
        }
    }
    out
}

/// RGB equality; alpha never participates in the comparison.
fn rgb_equal(a: &Rgba<u8>, b: &Rgba<u8>) -> bool {
    a.0[..3] == b.0[..3]
}

fn is_transparent(w: &Rgba<u8>, transparency: Transparency) -> bool {
    match transparency {
        Transparency::None => false,
        Transparency::Alpha => w[3] == 0,
        Transparency::Color(c) => w.0[..3] == c.0,
    }
}

/// `(weight * mark + (100 - weight) * base) / 100`, truncating.
fn blend_channel(mark: u8, base: u8, weight: u32) -> u8 {
    ((weight * u32::from(mark) + (100 - weight) * u32::from(base)) / 100) as u8
}
