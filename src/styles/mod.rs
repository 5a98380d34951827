//! Cover styles and their dispatch.
//!
//! Styles are a closed set of drawing recipes identified by [`StyleId`].
//! Parsing an identifier goes through [`StyleId::from_str`], which rejects
//! anything outside the set, and [`render`] is the single dispatch point
//! from identifier to drawing routine.

pub mod recipes;

mod classic;
mod flow;
mod fun;
mod glass;
mod pixel;
mod template;

use std::fmt;
use std::str::FromStr;

use image::{DynamicImage, RgbaImage};
use rand::rngs::StdRng;
use rand::Rng;

use crate::font::FontLibrary;
use crate::{Error, TargetSize};

/// Width of the accent strip used by the classic and glass layouts.
pub const ACCENT_WIDTH: u32 = 280;

/// Text content placed on a cover.
#[derive(Debug, Clone)]
pub struct CoverText<'a> {
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub tagline: Option<&'a str>,
    pub label: &'a str,
}

/// Optional imagery placed on a cover.
#[derive(Debug, Default)]
pub struct StyleAssets {
    /// Fetched logos, in the order given on the command line.
    pub logos: Vec<DynamicImage>,
    /// Draw the stylised cat mascot badge when no logo is available
    /// (classic style only).
    pub mascot: bool,
}

/// Identifier of a cover style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleId {
    Classic,
    Template,
    Pixel,
    Glass,
    Flow,
    Fun,
}

impl StyleId {
    pub const ALL: [StyleId; 6] = [
        StyleId::Classic,
        StyleId::Template,
        StyleId::Pixel,
        StyleId::Glass,
        StyleId::Flow,
        StyleId::Fun,
    ];

    /// Styles eligible for random selection. Pixel stays opt-in only.
    pub const ROTATION: [StyleId; 5] = [
        StyleId::Classic,
        StyleId::Template,
        StyleId::Glass,
        StyleId::Flow,
        StyleId::Fun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleId::Classic => "classic",
            StyleId::Template => "template",
            StyleId::Pixel => "pixel",
            StyleId::Glass => "glass",
            StyleId::Flow => "flow",
            StyleId::Fun => "fun",
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(StyleId::Classic),
            "template" => Ok(StyleId::Template),
            "pixel" => Ok(StyleId::Pixel),
            "glass" => Ok(StyleId::Glass),
            "flow" => Ok(StyleId::Flow),
            "fun" => Ok(StyleId::Fun),
            other => Err(Error::UnknownStyle(other.to_string())),
        }
    }
}

/// Pick a style from the rotation set.
pub fn pick_random(rng: &mut StdRng) -> StyleId {
    StyleId::ROTATION[rng.gen_range(0..StyleId::ROTATION.len())]
}

/// Render `style` onto a fresh `target`-sized canvas.
pub fn render(
    style: StyleId,
    text: &CoverText<'_>,
    assets: &StyleAssets,
    fonts: &FontLibrary,
    target: TargetSize,
    rng: &mut StdRng,
) -> RgbaImage {
    match style {
        StyleId::Classic => classic::draw(text, assets, fonts, target),
        StyleId::Template => template::draw(text, assets, fonts, target),
        StyleId::Pixel => pixel::draw(text, assets, fonts, target),
        StyleId::Glass => glass::draw(text, assets, fonts, target),
        StyleId::Flow => flow::draw(text, assets, fonts, target, rng),
        StyleId::Fun => fun::draw(text, assets, fonts, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn sample_text() -> CoverText<'static> {
        CoverText {
            title: "A Very Long Title That Will Definitely Need To Wrap Across Several Lines For The Banner",
            subtitle: Some("A subtitle that describes the article in a sentence"),
            tagline: Some("Published 01 Mar 2025"),
            label: "blog.dev",
        }
    }

    #[test]
    fn unknown_style_is_rejected() {
        let err = "vaporwave".parse::<StyleId>();
        assert!(matches!(err, Err(Error::UnknownStyle(_))));
    }

    #[test]
    fn every_identifier_round_trips() {
        for style in StyleId::ALL {
            assert_eq!(style.name().parse::<StyleId>().ok(), Some(style));
        }
    }

    #[test]
    fn rotation_excludes_pixel() {
        assert!(!StyleId::ROTATION.contains(&StyleId::Pixel));
    }

    #[test]
    fn every_style_renders_at_target_size() {
        let fonts = FontLibrary::bundled();
        let text = sample_text();
        let target = TargetSize::default();
        let mut rng = StdRng::seed_from_u64(1);
        for style in StyleId::ALL {
            let cover = render(style, &text, &StyleAssets::default(), &fonts, target, &mut rng);
            assert_eq!(cover.dimensions(), (1000, 420), "style {style}");
        }
    }

    #[test]
    fn styles_render_with_logo_and_without_optional_text() {
        let fonts = FontLibrary::bundled();
        let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            300,
            120,
            image::Rgba([255, 0, 0, 255]),
        ));
        let assets = StyleAssets {
            logos: vec![logo.clone(), logo],
            mascot: true,
        };
        let text = CoverText {
            title: "Short",
            subtitle: None,
            tagline: None,
            label: "blog.dev",
        };
        let target = TargetSize::default();
        let mut rng = StdRng::seed_from_u64(2);
        for style in StyleId::ALL {
            let cover = render(style, &text, &assets, &fonts, target, &mut rng);
            assert_eq!(cover.dimensions(), (1000, 420), "style {style}");
        }
    }
}
