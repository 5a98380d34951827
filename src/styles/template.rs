//! Template cover: purple gradient, soft accent blobs, label pill, bounded
//! text block with caption, accent underline, outlined icon cards.

use image::imageops::FilterType;
use image::{Rgb, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::font::{FontFace, FontLibrary};
use crate::layout;
use crate::styles::{recipes, CoverText, StyleAssets};
use crate::TargetSize;

pub(super) fn draw(
    text: &CoverText<'_>,
    assets: &StyleAssets,
    fonts: &FontLibrary,
    target: TargetSize,
) -> RgbaImage {
    let (w, h) = (target.width, target.height);
    let mut img = RgbaImage::new(w, h);
    recipes::vertical_gradient(&mut img, Rgb([43, 30, 91]), Rgb([27, 15, 59]));

    // Soft translucent blobs in the top-right corner.
    let mut blobs = recipes::layer_like(&img);
    draw_filled_ellipse_mut(&mut blobs, (810, 60), 210, 220, Rgba([124, 92, 255, 46]));
    draw_filled_ellipse_mut(&mut blobs, (750, 90), 210, 210, Rgba([98, 213, 255, 40]));
    recipes::composite(&mut img, &blobs);

    let label_font = fonts.sized(18.0);
    let title_font = fonts.sized(54.0);
    let subtitle_font = fonts.sized(26.0);
    let caption_font = fonts.sized(20.0);

    // Fixed-size label pill.
    let (pill_x, pill_y, pill_w, pill_h) = (64, 64, 146, 46);
    recipes::fill_rounded_rect(
        &mut img,
        Rect::at(pill_x, pill_y).of_size(pill_w, pill_h),
        12,
        Rgba([60, 46, 107, 204]),
    );
    let label = text.label.to_uppercase();
    let (_, lh) = label_font.measure(&label);
    label_font.draw(
        &mut img,
        pill_x + 16,
        pill_y + (pill_h as i32 - lh as i32) / 2,
        Rgba([179, 200, 255, 255]),
        &label,
    );

    let text_x = 64;
    let max_w = 600;
    let top_y = 170;
    // Keep a bottom margin free for the caption.
    let bottom_limit = h as i32 - 90;
    let block = layout::layout_block(
        text.title,
        text.subtitle,
        &title_font,
        &subtitle_font,
        max_w,
        (bottom_limit - top_y).max(0) as u32,
    );
    let mut y = layout::draw_block(
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
        let (_, ch) = caption_font.measure(caption);
        y = (y + 12).max(270).min(h as i32 - ch as i32 - 24);
        caption_font.draw(&mut img, text_x, y, Rgba([196, 215, 255, 255]), caption);
    }

    // Accent underline.
    let mut underline = recipes::layer_like(&img);
    draw_filled_rect_mut(
        &mut underline,
        Rect::at(64, 303).of_size(356, 4),
        Rgba([124, 92, 255, 153]),
    );
    recipes::composite(&mut img, &underline);

    // Icon cards on the right.
    let (c1x, c1y) = (720, 120);
    recipes::outline_rounded_rect(
        &mut img,
        Rect::at(c1x, c1y).of_size(100, 100),
        20,
        Rgba([124, 92, 255, 255]),
        3,
        Some(Rgba([60, 46, 107, 255])),
    );
    if let Some(logo) = assets.logos.first() {
        let fitted = recipes::fit_within(logo, 72, 72, FilterType::Lanczos3);
        recipes::paste_center(&mut img, &fitted, c1x + 50, c1y + 50);
    } else {
        draw_centered_caption(&mut img, &caption_font, "Icon 1", c1x + 50, c1y + 58);
    }

    let (c2x, c2y) = (850, 208);
    recipes::outline_rounded_rect(
        &mut img,
        Rect::at(c2x, c2y).of_size(100, 100),
        20,
        Rgba([98, 213, 255, 255]),
        3,
        Some(Rgba([60, 46, 107, 255])),
    );
    draw_centered_caption(&mut img, &caption_font, "Icon 2", c2x + 50, c2y + 58);

    img
}

fn draw_centered_caption(img: &mut RgbaImage, font: &FontFace, text: &str, cx: i32, cy: i32) {
    let (tw, th) = font.measure(text);
    font.draw(
        img,
        cx - tw as i32 / 2,
        cy - th as i32 / 2,
        Rgba([196, 215, 255, 255]),
        text,
    );
}
