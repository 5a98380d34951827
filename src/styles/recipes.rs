//! Shared drawing recipes used by the cover styles.
//!
//! Every helper mutates an explicit canvas handle. Translucent shapes are
//! painted onto a scratch layer and alpha-composited so they blend with
//! whatever is already on the canvas instead of overwriting it.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::filter::gaussian_blur_f32;
use imageproc::rect::Rect;

/// A transparent scratch layer matching `canvas`.
pub fn layer_like(canvas: &RgbaImage) -> RgbaImage {
    RgbaImage::from_pixel(canvas.width(), canvas.height(), Rgba([0, 0, 0, 0]))
}

/// Alpha-composite `layer` over `canvas` at the origin.
pub fn composite(canvas: &mut RgbaImage, layer: &RgbaImage) {
    imageops::overlay(canvas, layer, 0, 0);
}

/// Fill `canvas` with a vertical gradient computed per row from `shade`,
/// which maps the normalized row position (0.0 at the top) to a colour.
pub fn vertical_gradient_fn(canvas: &mut RgbaImage, shade: impl Fn(f32) -> Rgb<u8>) {
    let height = canvas.height();
    let denom = height.saturating_sub(1).max(1) as f32;
    for y in 0..height {
        let Rgb([r, g, b]) = shade(y as f32 / denom);
        let row = Rgba([r, g, b, 255]);
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, row);
        }
    }
}

/// Linear vertical gradient from `top` to `bottom`.
pub fn vertical_gradient(canvas: &mut RgbaImage, top: Rgb<u8>, bottom: Rgb<u8>) {
    vertical_gradient_fn(canvas, |t| {
        Rgb([
            lerp(top[0], bottom[0], t),
            lerp(top[1], bottom[1], t),
            lerp(top[2], bottom[2], t),
        ])
    });
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).round() as u8
}

/// Soft glow: a translucent disc, blurred, composited over the canvas.
pub fn glow_blob(
    canvas: &mut RgbaImage,
    center: (i32, i32),
    radius: i32,
    color: Rgb<u8>,
    alpha: u8,
    sigma: f32,
) {
    let mut layer = layer_like(canvas);
    draw_filled_circle_mut(
        &mut layer,
        center,
        radius,
        Rgba([color[0], color[1], color[2], alpha]),
    );
    let blurred = gaussian_blur_f32(&layer, sigma.max(0.1));
    composite(canvas, &blurred);
}

// Paints the rounded-rect silhouette with raw pixel writes; callers wrap it
// in a layer when the colour is translucent.
fn paint_rounded(layer: &mut RgbaImage, rect: Rect, radius: i32, color: Rgba<u8>) {
    let w = rect.width() as i32;
    let h = rect.height() as i32;
    let r = radius.clamp(0, (w / 2).min(h / 2));
    let (x, y) = (rect.left(), rect.top());

    if w > 2 * r {
        draw_filled_rect_mut(
            layer,
            Rect::at(x + r, y).of_size((w - 2 * r) as u32, h as u32),
            color,
        );
    }
    if h > 2 * r && r > 0 {
        draw_filled_rect_mut(
            layer,
            Rect::at(x, y + r).of_size(r as u32, (h - 2 * r) as u32),
            color,
        );
        draw_filled_rect_mut(
            layer,
            Rect::at(x + w - r, y + r).of_size(r as u32, (h - 2 * r) as u32),
            color,
        );
    }
    if r > 0 {
        draw_filled_circle_mut(layer, (x + r, y + r), r, color);
        draw_filled_circle_mut(layer, (x + w - 1 - r, y + r), r, color);
        draw_filled_circle_mut(layer, (x + r, y + h - 1 - r), r, color);
        draw_filled_circle_mut(layer, (x + w - 1 - r, y + h - 1 - r), r, color);
    }
}

/// Filled rounded rectangle, blended onto the canvas.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, rect: Rect, radius: i32, color: Rgba<u8>) {
    let mut layer = layer_like(canvas);
    paint_rounded(&mut layer, rect, radius, color);
    composite(canvas, &layer);
}

/// Rounded rectangle with an outline of `stroke` pixels and an optional
/// interior fill.
pub fn outline_rounded_rect(
    canvas: &mut RgbaImage,
    rect: Rect,
    radius: i32,
    outline: Rgba<u8>,
    stroke: i32,
    fill: Option<Rgba<u8>>,
) {
    let mut layer = layer_like(canvas);
    paint_rounded(&mut layer, rect, radius, outline);
    let inner_w = rect.width() as i32 - 2 * stroke;
    let inner_h = rect.height() as i32 - 2 * stroke;
    if inner_w > 0 && inner_h > 0 {
        let inner = Rect::at(rect.left() + stroke, rect.top() + stroke)
            .of_size(inner_w as u32, inner_h as u32);
        // Transparent paint erases, leaving only the outline band.
        let interior = fill.unwrap_or(Rgba([0, 0, 0, 0]));
        paint_rounded(&mut layer, inner, (radius - stroke).max(0), interior);
    }
    composite(canvas, &layer);
}

/// Nearest-neighbour down/up-scale for a retro pixelated look.
pub fn pixelate(image: &RgbaImage, factor: f32) -> RgbaImage {
    let factor = factor.clamp(0.05, 0.5);
    let (w, h) = image.dimensions();
    let down_w = ((w as f32 * factor) as u32).max(1);
    let down_h = ((h as f32 * factor) as u32).max(1);
    let small = imageops::resize(image, down_w, down_h, FilterType::Nearest);
    imageops::resize(&small, w, h, FilterType::Nearest)
}

/// Scale `image` to fit within `max_w` x `max_h`, preserving aspect ratio.
pub fn fit_within(
    image: &DynamicImage,
    max_w: u32,
    max_h: u32,
    filter: FilterType,
) -> RgbaImage {
    let rgba = image.to_rgba8();
    let scale = f32::min(
        max_w as f32 / rgba.width().max(1) as f32,
        max_h as f32 / rgba.height().max(1) as f32,
    );
    let new_w = ((rgba.width() as f32 * scale) as u32).max(1);
    let new_h = ((rgba.height() as f32 * scale) as u32).max(1);
    imageops::resize(&rgba, new_w, new_h, filter)
}

/// Paste `image` so its centre lands on (cx, cy).
pub fn paste_center(canvas: &mut RgbaImage, image: &RgbaImage, cx: i32, cy: i32) {
    let x = cx - image.width() as i32 / 2;
    let y = cy - image.height() as i32 / 2;
    imageops::overlay(canvas, image, x as i64, y as i64);
}

/// A straight line segment of the given thickness, drawn as stacked
/// single-pixel offsets.
pub fn thick_line(
    canvas: &mut RgbaImage,
    start: (f32, f32),
    end: (f32, f32),
    thickness: i32,
    color: Rgba<u8>,
) {
    for offset in 0..thickness.max(1) {
        let dy = (offset - thickness / 2) as f32;
        imageproc::drawing::draw_line_segment_mut(
            canvas,
            (start.0, start.1 + dy),
            (end.0, end.1 + dy),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_match_requested_colours() {
        let mut canvas = RgbaImage::new(10, 50);
        vertical_gradient(&mut canvas, Rgb([0, 0, 0]), Rgb([200, 100, 50]));
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(0, 49), &Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn pixelate_preserves_dimensions() {
        let image = RgbaImage::from_pixel(101, 43, Rgba([1, 2, 3, 255]));
        let out = pixelate(&image, 0.2);
        assert_eq!(out.dimensions(), (101, 43));
    }

    #[test]
    fn fit_within_respects_bounds() {
        let logo = DynamicImage::ImageRgba8(RgbaImage::new(500, 100));
        let fitted = fit_within(&logo, 64, 64, FilterType::Nearest);
        assert!(fitted.width() <= 64);
        assert!(fitted.height() <= 64);
        assert_eq!(fitted.width(), 64);
    }

    #[test]
    fn rounded_rect_fills_centre_but_not_corner() {
        let mut canvas = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        let fill = Rgba([255, 0, 0, 255]);
        fill_rounded_rect(&mut canvas, Rect::at(10, 10).of_size(80, 80), 20, fill);
        assert_eq!(canvas.get_pixel(50, 50), &fill);
        // The extreme corner sits outside the rounded silhouette.
        assert_eq!(canvas.get_pixel(10, 10), &Rgba([0, 0, 0, 255]));
    }
}
