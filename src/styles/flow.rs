//! Flow cover: blurred jittered paths with glowing nodes, bounded text
//! block, caption chip, a single logo inside a glow node.

use image::imageops::FilterType;
use image::{Rgb, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use imageproc::filter::gaussian_blur_f32;
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::Rng;

use crate::font::FontLibrary;
use crate::layout;
use crate::styles::{recipes, CoverText, StyleAssets};
use crate::TargetSize;

pub(super) fn draw(
    text: &CoverText<'_>,
    assets: &StyleAssets,
    fonts: &FontLibrary,
    target: TargetSize,
    rng: &mut StdRng,
) -> RgbaImage {
    let (w, h) = (target.width, target.height);
    let mut img = RgbaImage::new(w, h);
    recipes::vertical_gradient(&mut img, Rgb([14, 20, 44]), Rgb([6, 10, 24]));

    // Flow paths: jittered polylines, softened with a light blur.
    let mut paths = recipes::layer_like(&img);
    let colors = [
        Rgba([98, 213, 255, 130]),
        Rgba([124, 92, 255, 130]),
        Rgba([120, 200, 255, 110]),
    ];
    for (i, color) in colors.iter().enumerate() {
        let y0 = 60 + i as i32 * 80;
        let mut points: Vec<(f32, f32)> = Vec::new();
        let mut x = -40i32;
        while x < w as i32 + 40 {
            let jitter = rng.gen_range(-20..=20);
            points.push((x as f32, (y0 + jitter) as f32));
            x += 40;
        }
        for pair in points.windows(2) {
            recipes::thick_line(&mut paths, pair[0], pair[1], 3, *color);
        }
    }
    let paths = gaussian_blur_f32(&paths, 2.0);
    recipes::composite(&mut img, &paths);

    // Nodes along the paths.
    for i in 0..5 {
        let nx = 200 + i * 140;
        let ny = 90 + (i % 3) * 60;
        recipes::glow_blob(&mut img, (nx, ny), 16, Rgb([120, 200, 255]), 80, 10.0);
        draw_filled_circle_mut(&mut img, (nx, ny), 8, Rgba([220, 240, 255, 255]));
    }

    let label_font = fonts.sized(18.0);
    let title_font = fonts.sized(48.0);
    let subtitle_font = fonts.sized(22.0);
    let caption_font = fonts.sized(18.0);

    let label = text.label.to_uppercase();
    let (lw, lh) = label_font.measure(&label);
    recipes::fill_rounded_rect(
        &mut img,
        Rect::at(64, 56).of_size(lw + 28, lh + 16),
        12,
        Rgba([30, 40, 80, 210]),
    );
    label_font.draw(&mut img, 78, 64, Rgba([179, 200, 255, 255]), &label);

    let text_x = 64;
    let max_w = 560;
    let top_y = 120;
    let chip_h = if text.tagline.is_some() { 30 } else { 0 };
    let bottom_limit = h as i32 - (chip_h + 40);
    let block = layout::layout_block(
        text.title,
        text.subtitle,
        &title_font,
        &subtitle_font,
        max_w,
        (bottom_limit - top_y).max(0) as u32,
    );
    let ty = layout::draw_block(
        &mut img,
        &block,
        &title_font,
        &subtitle_font,
        text_x,
        top_y,
        Rgba([255, 255, 255, 255]),
        Rgba([220, 230, 250, 255]),
    );

    if let Some(caption) = text.tagline {
        let (cw, ch) = caption_font.measure(caption);
        let chip_y = (ty + 10).max(h as i32 - ch as i32 - 38).min(h as i32 - ch as i32 - 26);
        recipes::fill_rounded_rect(
            &mut img,
            Rect::at(text_x, chip_y).of_size(cw + 24, ch + 16),
            12,
            Rgba([36, 110, 210, 220]),
        );
        caption_font.draw(
            &mut img,
            text_x + 12,
            chip_y + 8,
            Rgba([255, 255, 255, 255]),
            caption,
        );
    }

    // Logo inside a highlighted node on the right.
    if let Some(logo) = assets.logos.first() {
        let (cx, cy) = (w as i32 - 140, 120);
        recipes::glow_blob(&mut img, (cx, cy + 20), 60, Rgb([124, 92, 255]), 70, 18.0);
        let fitted = recipes::fit_within(logo, 108, 108, FilterType::Lanczos3);
        recipes::paste_center(&mut img, &fitted, cx, cy);
    }

    img
}
