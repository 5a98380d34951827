//! Pixel cover: retro gradient, grid, seeded starfield and platform blocks,
//! drop-shadow text, everything pixelated except the crisp logo sprites.

use image::imageops::FilterType;
use image::{Rgb, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::font::FontLibrary;
use crate::layout;
use crate::styles::{recipes, CoverText, StyleAssets};
use crate::TargetSize;

const STARFIELD_SEED: u64 = 42;

pub(super) fn draw(
    text: &CoverText<'_>,
    assets: &StyleAssets,
    fonts: &FontLibrary,
    target: TargetSize,
) -> RgbaImage {
    let (w, h) = (target.width, target.height);

    // The whole background, text included, is built on one layer so it can
    // be pixelated in a single pass at the end.
    let mut bg = RgbaImage::new(w, h);
    recipes::vertical_gradient(&mut bg, Rgb([16, 20, 40]), Rgb([6, 8, 18]));

    // Subtle pixel grid.
    let mut grid = recipes::layer_like(&bg);
    let grid_color = Rgba([255, 255, 255, 18]);
    for x in (0..w).step_by(10) {
        draw_line_segment_mut(&mut grid, (x as f32, 0.0), (x as f32, h as f32), grid_color);
    }
    for y in (0..h).step_by(10) {
        draw_line_segment_mut(&mut grid, (0.0, y as f32), (w as f32, y as f32), grid_color);
    }
    recipes::composite(&mut bg, &grid);

    // Starfield, seeded so the sky is stable between runs.
    let mut stars = recipes::layer_like(&bg);
    let mut rng = StdRng::seed_from_u64(STARFIELD_SEED);
    let palette = [
        Rgba([220, 230, 255, 180]),
        Rgba([170, 190, 255, 150]),
        Rgba([255, 255, 255, 200]),
    ];
    for _ in 0..120 {
        let x = rng.gen_range(0..w) as i32;
        let y = rng.gen_range(0..h) as i32;
        let size = if rng.gen_bool(0.5) { 1 } else { 2 };
        let color = palette[rng.gen_range(0..palette.len())];
        draw_filled_rect_mut(&mut stars, Rect::at(x, y).of_size(size, size), color);
    }
    recipes::composite(&mut bg, &stars);

    // Ground platform blocks.
    let mut blocks = recipes::layer_like(&bg);
    for i in 0..8 {
        let bx = 40 + i * 52;
        let by = h as i32 - 80 - (i % 3) * 8;
        draw_filled_rect_mut(
            &mut blocks,
            Rect::at(bx, by).of_size(40, 14),
            Rgba([40, 80, 160, 200]),
        );
        draw_hollow_rect_mut(
            &mut blocks,
            Rect::at(bx, by).of_size(40, 14),
            Rgba([120, 180, 255, 220]),
        );
        draw_filled_rect_mut(
            &mut blocks,
            Rect::at(bx + 8, by - 10).of_size(12, 12),
            Rgba([100, 160, 255, 200]),
        );
    }
    recipes::composite(&mut bg, &blocks);

    let label_font = fonts.sized(18.0);
    let title_font = fonts.sized(46.0);
    let subtitle_font = fonts.sized(22.0);
    let caption_font = fonts.sized(18.0);

    // Blocky label badge.
    let label = text.label.to_uppercase();
    let (lw, lh) = label_font.measure(&label);
    let (lx, ly) = (64, 50);
    let badge = Rect::at(lx, ly).of_size(lw + 28, lh + 14);
    let mut badge_layer = recipes::layer_like(&bg);
    draw_filled_rect_mut(&mut badge_layer, badge, Rgba([30, 30, 60, 200]));
    for inset in 0..4 {
        let outline = Rect::at(lx + inset, ly + inset)
            .of_size(lw + 28 - 2 * inset as u32, lh + 14 - 2 * inset as u32);
        draw_hollow_rect_mut(&mut badge_layer, outline, Rgba([150, 200, 255, 220]));
    }
    recipes::composite(&mut bg, &badge_layer);
    label_font.draw(&mut bg, lx + 14, ly + 7, Rgba([180, 210, 255, 255]), &label);

    // Title and subtitle with a blocky drop shadow.
    let text_x = 64;
    let max_w = 600;
    let mut ty = 140;
    for line in layout::wrap(text.title, &title_font, max_w) {
        title_font.draw(&mut bg, text_x + 4, ty + 4, Rgba([0, 0, 0, 120]), &line);
        title_font.draw(&mut bg, text_x, ty, Rgba([255, 255, 255, 255]), &line);
        ty += title_font.measure(&line).1 as i32 + 6;
    }
    if let Some(subtitle) = text.subtitle {
        ty += 6;
        for line in layout::wrap(subtitle, &subtitle_font, max_w) {
            subtitle_font.draw(&mut bg, text_x + 3, ty + 3, Rgba([0, 0, 0, 90]), &line);
            subtitle_font.draw(&mut bg, text_x, ty, Rgba([220, 230, 250, 255]), &line);
            ty += subtitle_font.measure(&line).1 as i32 + 4;
        }
    }

    if let Some(caption) = text.tagline {
        let cy = h as i32 - 54;
        let (cw, ch) = caption_font.measure(caption);
        let plate = Rect::at(text_x - 8, cy - 6).of_size(cw + 22, ch + 12);
        let mut plate_layer = recipes::layer_like(&bg);
        draw_filled_rect_mut(&mut plate_layer, plate, Rgba([30, 70, 140, 200]));
        for inset in 0..3 {
            let outline = Rect::at(text_x - 8 + inset, cy - 6 + inset)
                .of_size(cw + 22 - 2 * inset as u32, ch + 12 - 2 * inset as u32);
            draw_hollow_rect_mut(&mut plate_layer, outline, Rgba([140, 200, 255, 220]));
        }
        recipes::composite(&mut bg, &plate_layer);
        caption_font.draw(&mut bg, text_x, cy, Rgba([255, 255, 255, 255]), caption);
    }

    let mut img = recipes::pixelate(&bg, 0.2);

    // Logos stay crisp: composited after pixelation, nearest-neighbour
    // scaled so they read as sprites.
    let slots = [(760, 100), (860, 140), (820, 220)];
    for ((sx, sy), logo) in slots.iter().zip(assets.logos.iter().take(3)) {
        let sprite = recipes::fit_within(logo, 64, 64, FilterType::Nearest);
        let (sw, sh) = sprite.dimensions();
        let mut shadow = recipes::layer_like(&img);
        draw_filled_rect_mut(
            &mut shadow,
            Rect::at(sx + 5, sy + 5).of_size(sw.max(3) - 2, sh.max(3) - 2),
            Rgba([0, 0, 0, 100]),
        );
        recipes::composite(&mut img, &shadow);
        image::imageops::overlay(&mut img, &sprite, *sx as i64, *sy as i64);
    }

    img
}
