//! Text layout engine: greedy wrapping, ellipsizing, and block layout.
//!
//! Layout is pure: everything here measures through a [`FontFace`] and
//! produces line lists and heights without touching pixels. Rendering the
//! result is a separate step ([`draw_block`]) that takes the canvas as an
//! explicit handle.

use image::{Rgba, RgbaImage};

use crate::font::FontFace;

/// Vertical spacing between consecutive lines inside a block.
pub const LINE_SPACING: u32 = 6;
/// Gap between the title block and the subtitle block.
pub const BLOCK_GAP: u32 = 16;

const ELLIPSIS: &str = "\u{2026}";

/// Greedy word-wrap of `text` to `max_width` pixels.
///
/// Words never get split: a single word wider than `max_width` is kept whole
/// on its own line and simply overflows. Empty input yields no lines.
pub fn wrap(text: &str, font: &FontFace, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if font.width(&candidate) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate `text` with a trailing ellipsis so it fits `max_width`.
///
/// Text that already fits is returned unchanged. Otherwise trailing
/// characters are removed until text plus ellipsis fit; if nothing fits the
/// bare ellipsis is returned.
pub fn ellipsize(text: &str, font: &FontFace, max_width: u32) -> String {
    if text.is_empty() || font.width(text) <= max_width {
        return text.to_string();
    }
    let ellipsis_width = font.width(ELLIPSIS);
    let mut kept = text.to_string();
    while !kept.is_empty() && font.width(&kept) + ellipsis_width > max_width {
        kept.pop();
    }
    if kept.is_empty() {
        ELLIPSIS.to_string()
    } else {
        format!("{kept}{ELLIPSIS}")
    }
}

/// Wrapped lines for a title block plus optional subtitle block, and the
/// total pixel height they occupy.
#[derive(Debug, Clone)]
pub struct BlockLayout {
    pub title_lines: Vec<String>,
    pub subtitle_lines: Vec<String>,
    pub height: u32,
}

fn lines_height(lines: &[String], font: &FontFace) -> u32 {
    let mut height = 0;
    for (idx, line) in lines.iter().enumerate() {
        height += font.measure(line).1;
        if idx + 1 < lines.len() {
            height += LINE_SPACING;
        }
    }
    height
}

fn stacked_height(
    title_lines: &[String],
    subtitle_lines: &[String],
    title_font: &FontFace,
    subtitle_font: &FontFace,
) -> u32 {
    let gap = if subtitle_lines.is_empty() { 0 } else { BLOCK_GAP };
    lines_height(title_lines, title_font) + gap + lines_height(subtitle_lines, subtitle_font)
}

/// Lay out a title and optional subtitle within `max_width`, bounded to
/// `available` pixels of height.
///
/// Overflow handling, in order: subtitle lines are dropped from the end
/// until the block fits, then the last title line is ellipsized repeatedly.
/// An ellipsized relayout is only accepted when it strictly reduces the
/// total height; otherwise the loop stops, which keeps pathological inputs
/// (zero-width bounds, very tall glyphs) from cycling forever.
pub fn layout_block(
    title: &str,
    subtitle: Option<&str>,
    title_font: &FontFace,
    subtitle_font: &FontFace,
    max_width: u32,
    available: u32,
) -> BlockLayout {
    let mut title_lines = wrap(title, title_font, max_width);
    let mut subtitle_lines = match subtitle {
        Some(text) => wrap(text, subtitle_font, max_width),
        None => Vec::new(),
    };

    let mut height = stacked_height(&title_lines, &subtitle_lines, title_font, subtitle_font);

    while !subtitle_lines.is_empty() && height > available {
        subtitle_lines.pop();
        height = stacked_height(&title_lines, &subtitle_lines, title_font, subtitle_font);
    }

    while height > available && !title_lines.is_empty() {
        if let Some(last) = title_lines.last_mut() {
            *last = ellipsize(last, title_font, max_width);
        }
        let new_height =
            stacked_height(&title_lines, &subtitle_lines, title_font, subtitle_font);
        if new_height >= height {
            break;
        }
        height = new_height;
    }

    BlockLayout {
        title_lines,
        subtitle_lines,
        height,
    }
}

/// Lay out a block with no vertical bound, for styles that center the whole
/// block on the canvas.
pub fn unbounded_block(
    title: &str,
    subtitle: Option<&str>,
    title_font: &FontFace,
    subtitle_font: &FontFace,
    max_width: u32,
) -> BlockLayout {
    layout_block(title, subtitle, title_font, subtitle_font, max_width, u32::MAX)
}

/// Render a laid-out block left-anchored at `(x, top_y)` and return the Y
/// coordinate immediately below the last drawn line, so callers can place
/// further content (a caption chip, for instance) without overlap.
#[allow(clippy::too_many_arguments)]
pub fn draw_block(
    canvas: &mut RgbaImage,
    block: &BlockLayout,
    title_font: &FontFace,
    subtitle_font: &FontFace,
    x: i32,
    top_y: i32,
    title_fill: Rgba<u8>,
    subtitle_fill: Rgba<u8>,
) -> i32 {
    let mut y = top_y;
    for (idx, line) in block.title_lines.iter().enumerate() {
        title_font.draw(canvas, x, y, title_fill, line);
        y += title_font.measure(line).1 as i32;
        if idx + 1 < block.title_lines.len() {
            y += LINE_SPACING as i32;
        }
    }
    if !block.subtitle_lines.is_empty() {
        y += BLOCK_GAP as i32;
        for (idx, line) in block.subtitle_lines.iter().enumerate() {
            subtitle_font.draw(canvas, x, y, subtitle_fill, line);
            y += subtitle_font.measure(line).1 as i32;
            if idx + 1 < block.subtitle_lines.len() {
                y += LINE_SPACING as i32;
            }
        }
    }
    y
}
