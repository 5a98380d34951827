//! Classic cover: blue gradient, accent strip with a fading overlay, logo or
//! mascot badge, centered text block, tagline chip.

use image::imageops::FilterType;
use image::{Rgb, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_circle_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::font::FontLibrary;
use crate::layout;
use crate::styles::{recipes, CoverText, StyleAssets, ACCENT_WIDTH};
use crate::TargetSize;

pub(super) fn draw(
    text: &CoverText<'_>,
    assets: &StyleAssets,
    fonts: &FontLibrary,
    target: TargetSize,
) -> RgbaImage {
    let (w, h) = (target.width, target.height);
    let mut img = RgbaImage::new(w, h);
    recipes::vertical_gradient(&mut img, Rgb([12, 34, 68]), Rgb([42, 94, 148]));

    // Accent strip, then a translucent overlay that fades towards the bottom.
    draw_filled_rect_mut(
        &mut img,
        Rect::at(0, 0).of_size(ACCENT_WIDTH, h),
        Rgba([28, 90, 180, 255]),
    );
    let mut accent = RgbaImage::new(ACCENT_WIDTH, h);
    let denom = h.saturating_sub(1).max(1) as f32;
    for y in 0..h {
        let fade = (160.0 - 160.0 * y as f32 / denom) as i32;
        let overlay = Rgba([40, 140, 255, fade.max(40) as u8]);
        for x in 0..ACCENT_WIDTH {
            accent.put_pixel(x, y, overlay);
        }
    }

    // Prefer a fetched logo on the strip; fall back to the mascot badge.
    if let Some(logo) = assets.logos.first() {
        let max_w = (ACCENT_WIDTH as f32 * 0.62) as u32;
        let fitted = recipes::fit_within(logo, max_w, h / 2, FilterType::Lanczos3);
        recipes::paste_center(&mut accent, &fitted, ACCENT_WIDTH as i32 / 2, h as i32 / 2);
    } else if assets.mascot {
        draw_mascot(&mut accent, (ACCENT_WIDTH as i32 / 2, h as i32 / 2));
    }
    recipes::composite(&mut img, &accent);

    let title_font = fonts.sized(46.0);
    let subtitle_font = fonts.sized(22.0);
    let tagline_font = fonts.sized(18.0);
    let label_font = fonts.sized(20.0);

    let text_x = ACCENT_WIDTH as i32 + 48;
    let text_width = (w as i32 - text_x - 48).max(0) as u32;

    let block = layout::unbounded_block(
        text.title,
        text.subtitle,
        &title_font,
        &subtitle_font,
        text_width,
    );
    let start_y = (h as i32 - block.height as i32) / 2;
    layout::draw_block(
        &mut img,
        &block,
        &title_font,
        &subtitle_font,
        text_x,
        start_y,
        Rgba([255, 255, 255, 255]),
        Rgba([220, 230, 250, 255]),
    );

    if let Some(tagline) = text.tagline {
        let (tw, th) = tagline_font.measure(tagline);
        let chip = Rect::at(text_x, h as i32 - th as i32 - 40).of_size(tw + 30, th + 16);
        recipes::fill_rounded_rect(&mut img, chip, 16, Rgba([36, 110, 210, 255]));
        tagline_font.draw(
            &mut img,
            text_x + 16,
            h as i32 - th as i32 - 32,
            Rgba([255, 255, 255, 255]),
            tagline,
        );
    }

    let label = text.label.to_uppercase();
    let (lw, lh) = label_font.measure(&label);
    label_font.draw(
        &mut img,
        (ACCENT_WIDTH as i32 - lw as i32) / 2,
        h as i32 - lh as i32 - 28,
        Rgba([255, 255, 255, 220]),
        &label,
    );

    img
}

// Stylised cat badge drawn from primitives, used when no logo is supplied.
fn draw_mascot(accent: &mut RgbaImage, center: (i32, i32)) {
    let (cx, cy) = center;
    let mut layer = recipes::layer_like(accent);

    let head_radius = 88;
    let face = Rgba([6, 8, 14, 255]);
    let rim = Rgba([255, 255, 255, 40]);

    // Ears behind the head outline.
    let left_ear = [
        Point::new(cx - head_radius + 26, cy - head_radius + 20),
        Point::new(cx - head_radius - 22, cy - head_radius - 42),
        Point::new(cx - head_radius + 60, cy - head_radius - 6),
    ];
    let right_ear = [
        Point::new(cx + head_radius - 26, cy - head_radius + 20),
        Point::new(cx + head_radius + 22, cy - head_radius - 42),
        Point::new(cx + head_radius - 60, cy - head_radius - 6),
    ];
    draw_polygon_mut(&mut layer, &left_ear, face);
    draw_polygon_mut(&mut layer, &right_ear, face);

    draw_filled_ellipse_mut(&mut layer, (cx, cy), head_radius, head_radius, face);
    for r in 0..3 {
        draw_hollow_circle_mut(&mut layer, (cx, cy), head_radius - r, rim);
    }

    // Eyes with pupils.
    let eye_y = cy - 16;
    for dx in [-46, 46] {
        draw_filled_ellipse_mut(
            &mut layer,
            (cx + dx, eye_y),
            16,
            14,
            Rgba([245, 249, 255, 235]),
        );
        draw_filled_ellipse_mut(&mut layer, (cx + dx, eye_y), 5, 6, face);
    }

    // Muzzle.
    draw_filled_ellipse_mut(&mut layer, (cx, cy + 19), 8, 7, Rgba([235, 240, 255, 190]));

    // Whiskers, mirrored left/right.
    let whisker = Rgba([200, 215, 255, 120]);
    for (sx, sy, ex, ey) in [(-84, -8, -12, -22), (-84, 12, -12, 26)] {
        recipes::thick_line(
            &mut layer,
            ((cx + sx) as f32, (cy + sy) as f32),
            ((cx + ex) as f32, (cy + ey) as f32),
            3,
            whisker,
        );
        recipes::thick_line(
            &mut layer,
            ((cx - sx) as f32, (cy + sy) as f32),
            ((cx - ex) as f32, (cy + ey) as f32),
            3,
            whisker,
        );
    }

    recipes::composite(accent, &layer);
}
