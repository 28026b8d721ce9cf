extern crate image as image_rs;

use image_rs::{Rgb, RgbImage};

use crate::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColormapMode {
    /// Invert then normalize, then pseudo-color. Used for depth, where near
    /// should read as hot.
    InvertedPseudoColor,
    /// Normalize then pseudo-color.
    PseudoColor,
    /// Normalize, keep grayscale.
    Grayscale,
}

/// Ordered dispatch table: the first needle contained in the item key wins,
/// so order is significant when key names collide.
pub const COLORMAP_TABLE: &[(&str, ColormapMode)] = &[
    ("depth", ColormapMode::InvertedPseudoColor),
    ("diff", ColormapMode::PseudoColor),
    ("shadows", ColormapMode::Grayscale),
];

pub fn mode_for_key(key: &str) -> Option<ColormapMode> {
    COLORMAP_TABLE
        .iter()
        .find(|(needle, _)| key.contains(needle))
        .map(|&(_, mode)| mode)
}

pub fn apply(image: &RgbImage, mode: ColormapMode) -> RgbImage {
    let mut gray = normalized_intensity(image);
    if let ColormapMode::InvertedPseudoColor = mode {
        for value in gray.iter_mut() {
            *value = 255 - *value;
        }
    }

    let (width, height) = image.dimensions();
    let mut out = RgbImage::new(width, height);
    for (pixel, &value) in out.pixels_mut().zip(gray.iter()) {
        *pixel = match mode {
            ColormapMode::Grayscale => Rgb([value, value, value]),
            ColormapMode::PseudoColor | ColormapMode::InvertedPseudoColor => jet(value),
        };
    }
    out
}

/// Channel-averaged intensity scaled so the maximum maps to 255. An all-zero
/// image stays all-zero.
fn normalized_intensity(image: &RgbImage) -> Vec<u8> {
    let gray = image
        .pixels()
        .map(|p| (p[0] as Float + p[1] as Float + p[2] as Float) / 3.0)
        .collect::<Vec<Float>>();
    let max = gray.iter().cloned().fold(0.0, Float::max);
    match max > 0.0 {
        true => gray
            .iter()
            .map(|&v| (v / max * 255.0) as u8)
            .collect::<Vec<u8>>(),
        false => vec![0u8; gray.len()],
    }
}

/// Classic jet ramp over a 0..255 intensity.
pub fn jet(value: u8) -> Rgb<u8> {
    let t = value as Float / 255.0;
    let r = (1.5 - (4.0 * t - 3.0).abs()).max(0.0).min(1.0);
    let g = (1.5 - (4.0 * t - 2.0).abs()).max(0.0).min(1.0);
    let b = (1.5 - (4.0 * t - 1.0).abs()).max(0.0).min(1.0);
    Rgb([(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8])
}
