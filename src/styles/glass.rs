//! Glass cover: blurred aurora streaks behind a translucent panel, bounded
//! text block, caption chip, glowing logos.

use image::imageops::FilterType;
use image::{Rgb, Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::filter::gaussian_blur_f32;
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
    recipes::vertical_gradient(&mut img, Rgb([15, 22, 48]), Rgb([8, 10, 22]));

    // Aurora streaks: diagonal quads, heavily blurred.
    let mut streaks = recipes::layer_like(&img);
    draw_polygon_mut(
        &mut streaks,
        &[
            Point::new(0, 200),
            Point::new(380, 80),
            Point::new(420, 140),
            Point::new(40, 260),
        ],
        Rgba([124, 92, 255, 70]),
    );
    draw_polygon_mut(
        &mut streaks,
        &[
            Point::new(280, 280),
            Point::new(720, 140),
            Point::new(760, 200),
            Point::new(320, 340),
        ],
        Rgba([98, 213, 255, 60]),
    );
    let streaks = gaussian_blur_f32(&streaks, 30.0);
    recipes::composite(&mut img, &streaks);

    // Glass panel behind the text.
    let panel_x = 56 + ACCENT_WIDTH as i32 - 30;
    let panel_w = (w as i32 - panel_x - 56).max(1) as u32;
    recipes::outline_rounded_rect(
        &mut img,
        Rect::at(panel_x, 90).of_size(panel_w, 220),
        22,
        Rgba([255, 255, 255, 40]),
        2,
        Some(Rgba([255, 255, 255, 26])),
    );

    let label_font = fonts.sized(18.0);
    let title_font = fonts.sized(48.0);
    let subtitle_font = fonts.sized(22.0);
    let caption_font = fonts.sized(18.0);

    // Label pill.
    let label = text.label.to_uppercase();
    let (lw, lh) = label_font.measure(&label);
    let (lx, ly) = (64, 56);
    recipes::fill_rounded_rect(
        &mut img,
        Rect::at(lx, ly).of_size(lw + 28, lh + 16),
        12,
        Rgba([60, 46, 107, 200]),
    );
    label_font.draw(&mut img, lx + 14, ly + 8, Rgba([179, 200, 255, 255]), &label);

    let text_x = ACCENT_WIDTH as i32 + 48;
    let max_w = (w as i32 - text_x - 48).max(0) as u32;
    let top_y = 110;
    // Leave room at the bottom for the caption chip when one is present.
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

    // Primary logo, and an optional secondary one, each on a glow blob.
    if let Some(primary) = assets.logos.first() {
        let center = (210, 140);
        recipes::glow_blob(&mut img, (center.0, center.1 + 40), 70, Rgb([124, 92, 255]), 60, 22.0);
        let fitted = recipes::fit_within(primary, 120, 120, FilterType::Lanczos3);
        recipes::paste_center(&mut img, &fitted, center.0, center.1);

        if let Some(secondary) = assets.logos.get(1) {
            let center = (360, 150);
            recipes::glow_blob(&mut img, (center.0, center.1 + 20), 50, Rgb([98, 213, 255]), 55, 18.0);
            let fitted = recipes::fit_within(secondary, 88, 88, FilterType::Lanczos3);
            recipes::paste_center(&mut img, &fitted, center.0, center.1);
        }
    }

    img
}
