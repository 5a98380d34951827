//! Canvas normalizer: fit an arbitrary source image to the fixed cover size.
//!
//! Two policies exist and the caller always picks one. `pad` letterboxes,
//! preserving aspect ratio and filling the border with a colour sampled from
//! the source so the padding blends with its dominant tone. `stretch`
//! rescales non-uniformly and may distort. Both return an image of exactly
//! the requested target size for any source with dimensions >= 1.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, Rgba, RgbaImage};

use crate::TargetSize;

/// How a source image is fitted to the target dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitPolicy {
    /// Letterbox: preserve aspect ratio, fill the remainder with a sampled
    /// background colour. Never crops.
    #[default]
    Pad,
    /// Non-uniform scale straight to the target. Never pads, may distort.
    Stretch,
}

/// Normalize `source` to exactly `target` using the chosen policy.
pub fn normalize(source: &DynamicImage, target: TargetSize, policy: FitPolicy) -> DynamicImage {
    match policy {
        FitPolicy::Pad => pad(source, target),
        FitPolicy::Stretch => stretch(source, target),
    }
}

/// Letterbox `source` onto a `target`-sized canvas.
pub fn pad(source: &DynamicImage, target: TargetSize) -> DynamicImage {
    let rgba = source.to_rgba8();
    let ratio = f64::min(
        target.width as f64 / rgba.width() as f64,
        target.height as f64 / rgba.height() as f64,
    );
    let new_w = ((rgba.width() as f64 * ratio).round() as u32).max(1);
    let new_h = ((rgba.height() as f64 * ratio).round() as u32).max(1);
    let resized = imageops::resize(&rgba, new_w, new_h, FilterType::Lanczos3);

    let bg = sample_background(source);
    let mut canvas = RgbaImage::from_pixel(
        target.width,
        target.height,
        Rgba([bg[0], bg[1], bg[2], 255]),
    );
    let offset_x = (target.width.saturating_sub(new_w)) / 2;
    let offset_y = (target.height.saturating_sub(new_h)) / 2;
    imageops::overlay(&mut canvas, &resized, offset_x as i64, offset_y as i64);

    restore_mode(canvas, source)
}

/// Scale `source` to exactly `target`, ignoring aspect ratio.
pub fn stretch(source: &DynamicImage, target: TargetSize) -> DynamicImage {
    let rgba = source.to_rgba8();
    let resized = imageops::resize(&rgba, target.width, target.height, FilterType::Lanczos3);
    restore_mode(resized, source)
}

/// The source's dominant tone: an area-average downsample to a single pixel.
pub fn sample_background(source: &DynamicImage) -> Rgb<u8> {
    let rgb = source.to_rgb8();
    let one = imageops::resize(&rgb, 1, 1, FilterType::Triangle);
    *one.get_pixel(0, 0)
}

// Recognized colour modes survive the round-trip; anything else becomes
// truecolor. Paletted sources decode as truecolor in this stack, so they
// re-encode the same way.
fn restore_mode(out: RgbaImage, original: &DynamicImage) -> DynamicImage {
    let out = DynamicImage::ImageRgba8(out);
    match original {
        DynamicImage::ImageRgba8(_) => out,
        DynamicImage::ImageRgb8(_) => DynamicImage::ImageRgb8(out.to_rgb8()),
        DynamicImage::ImageLuma8(_) => DynamicImage::ImageLuma8(out.to_luma8()),
        _ => DynamicImage::ImageRgb8(out.to_rgb8()),
    }
}
