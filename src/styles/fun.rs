//! Fun cover: vibrant gradient, blurred spotlights, centered title, seeded
//! confetti kept clear of the title, corner logos nudged away from it.
//!
//! Only the title is rendered; subtitles and captions are intentionally
//! dropped by this layout. Logos are pasted unscaled beyond the fit bound so
//! brand artwork keeps its proportions.

use image::imageops::FilterType;
use image::{Rgb, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::filter::gaussian_blur_f32;
use imageproc::point::Point;
use imageproc::rect::Rect;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::font::FontLibrary;
use crate::layout;
use crate::styles::{recipes, CoverText, StyleAssets};
use crate::TargetSize;

const CONFETTI_SEED: u64 = 31415;

pub(super) fn draw(
    text: &CoverText<'_>,
    assets: &StyleAssets,
    fonts: &FontLibrary,
    target: TargetSize,
) -> RgbaImage {
    let (w, h) = (target.width, target.height);
    let mut img = RgbaImage::new(w, h);
    recipes::vertical_gradient_fn(&mut img, |t| {
        Rgb([
            (30.0 + 80.0 * (1.0 - t)) as u8,
            (50.0 + 90.0 * t) as u8,
            (100.0 + 40.0 * (0.5 - (0.5 - t).abs())) as u8,
        ])
    });

    // Soft spotlight discs.
    let mut spots = recipes::layer_like(&img);
    draw_filled_ellipse_mut(&mut spots, (320, 120), 200, 200, Rgba([255, 200, 120, 60]));
    draw_filled_ellipse_mut(&mut spots, (810, 320), 230, 200, Rgba([98, 213, 255, 70]));
    let spots = gaussian_blur_f32(&spots, 36.0);
    recipes::composite(&mut img, &spots);

    // Centered title with a drop shadow; its bounding box keeps the
    // confetti and logos clear.
    let title_font = fonts.sized(54.0);
    let max_title_width = (w as f32 * 0.78) as u32;
    let lines = layout::wrap(text.title, &title_font, max_title_width);
    let spacing = 8;
    let mut total_h = 0;
    for (i, line) in lines.iter().enumerate() {
        total_h += title_font.measure(line).1 as i32;
        if i + 1 < lines.len() {
            total_h += spacing;
        }
    }
    let mut bbox = (w as i32, h as i32, 0, 0);
    let mut y = (h as i32 - total_h) / 2;
    for line in &lines {
        let (lw, lh) = title_font.measure(line);
        let x = (w as i32 - lw as i32) / 2;
        title_font.draw(&mut img, x + 3, y + 3, Rgba([0, 0, 0, 120]), line);
        title_font.draw(&mut img, x, y, Rgba([255, 255, 255, 255]), line);
        bbox.0 = bbox.0.min(x);
        bbox.1 = bbox.1.min(y);
        bbox.2 = bbox.2.max(x + lw as i32);
        bbox.3 = bbox.3.max(y + lh as i32);
        y += lh as i32 + spacing;
    }

    // Confetti, seeded, skipping anything near the title box.
    let mut confetti = recipes::layer_like(&img);
    let mut rng = StdRng::seed_from_u64(CONFETTI_SEED);
    let palette = [
        Rgba([255, 255, 255, 180]),
        Rgba([124, 92, 255, 170]),
        Rgba([98, 213, 255, 170]),
        Rgba([255, 160, 160, 170]),
        Rgba([180, 255, 180, 170]),
    ];
    for _ in 0..140 {
        let cx = rng.gen_range(0..w as i32);
        let cy = rng.gen_range(0..h as i32);
        if cx >= bbox.0 - 12 && cx <= bbox.2 + 12 && cy >= bbox.1 - 12 && cy <= bbox.3 + 12 {
            continue;
        }
        let size = [3, 4, 5, 6][rng.gen_range(0..4)];
        let color = palette[rng.gen_range(0..palette.len())];
        match rng.gen_range(0..3) {
            0 => draw_filled_rect_mut(
                &mut confetti,
                Rect::at(cx, cy).of_size(size as u32, size as u32),
                color,
            ),
            1 => draw_filled_ellipse_mut(
                &mut confetti,
                (cx + size / 2, cy + size / 2),
                size / 2 + 1,
                size / 2 + 1,
                color,
            ),
            _ => draw_polygon_mut(
                &mut confetti,
                &[
                    Point::new(cx, cy + size),
                    Point::new(cx + size, cy),
                    Point::new(cx + size * 2, cy + size),
                    Point::new(cx + size, cy + size * 2),
                ],
                color,
            ),
        }
    }
    recipes::composite(&mut img, &confetti);

    // Label pill.
    let label_font = fonts.sized(18.0);
    let label = text.label.to_uppercase();
    let (lw, lh) = label_font.measure(&label);
    recipes::fill_rounded_rect(
        &mut img,
        Rect::at(40, 34).of_size(lw + 26, lh + 18),
        12,
        Rgba([0, 0, 0, 90]),
    );
    label_font.draw(&mut img, 53, 43, Rgba([200, 220, 255, 255]), &label);

    // Corner logos, nudged vertically if they would sit on the title.
    let slots = [
        (w as i32 - 150, 36),
        (w as i32 - 160, h as i32 - 160),
        (60, h as i32 - 150),
    ];
    for ((lx, ly), logo) in slots.iter().zip(assets.logos.iter().take(3)) {
        let fitted = recipes::fit_within(logo, 104, 104, FilterType::Lanczos3);
        let (fw, fh) = (fitted.width() as i32, fitted.height() as i32);
        let mut ly = *ly;
        let overlaps = !(lx + fw < bbox.0 || *lx > bbox.2 || ly + fh < bbox.1 || ly > bbox.3);
        if overlaps {
            ly = if ly < h as i32 / 2 {
                (bbox.1 - fh - 20).max(16)
            } else {
                (bbox.3 + 20).min(h as i32 - fh - 16)
            };
        }
        image::imageops::overlay(&mut img, &fitted, *lx as i64, ly as i64);
    }

    img
}
