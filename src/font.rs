//! Font resolution and text measurement.
//!
//! Candidate font paths are injected configuration rather than module-level
//! constants: callers build a [`FontConfig`] (or take the default platform
//! list), and [`FontLibrary::resolve`] walks it once per invocation. A face
//! bundled into the binary guarantees that resolution always succeeds, so
//! text rendering never becomes a fatal error.

use std::fs;
use std::path::PathBuf;

use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use log::debug;

// Guaranteed fallback, compiled into the binary.
static BUNDLED_FACE: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");

/// Ordered list of candidate font files to try before the bundled fallback.
#[derive(Debug, Clone)]
pub struct FontConfig {
    pub candidates: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                PathBuf::from("/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf"),
                PathBuf::from(r"C:\Windows\Fonts\segoeuib.ttf"),
                PathBuf::from(r"C:\Windows\Fonts\seguisb.ttf"),
                PathBuf::from(r"C:\Windows\Fonts\arialbd.ttf"),
                PathBuf::from("/Library/Fonts/Arial Bold.ttf"),
            ],
        }
    }
}

/// A resolved font family, shared by every text size used on a cover.
#[derive(Debug, Clone)]
pub struct FontLibrary {
    face: FontArc,
}

impl FontLibrary {
    /// Resolve the first readable, parseable candidate; fall back to the
    /// bundled face when none loads.
    pub fn resolve(config: &FontConfig) -> Self {
        for candidate in &config.candidates {
            let bytes = match fs::read(candidate) {
                Ok(bytes) => bytes,
                Err(_) => continue,
            };
            match FontArc::try_from_vec(bytes) {
                Ok(face) => {
                    debug!("Resolved font from {}", candidate.display());
                    return Self { face };
                }
                Err(err) => {
                    debug!("Skipping unparseable font {}: {}", candidate.display(), err);
                    continue;
                }
            }
        }
        debug!("No font candidate loaded; using bundled face");
        Self::bundled()
    }

    /// The face compiled into the binary. Parsing a fixed asset cannot fail
    /// at runtime.
    pub fn bundled() -> Self {
        let face = FontArc::try_from_slice(BUNDLED_FACE).expect("bundled font is valid");
        Self { face }
    }

    /// A handle for measuring and drawing text at the given pixel size.
    pub fn sized(&self, px: f32) -> FontFace {
        FontFace {
            font: self.face.clone(),
            scale: PxScale::from(px),
        }
    }
}

/// A font at a fixed pixel size: the measurement primitive the layout
/// engine builds on, plus glyph rasterisation onto an explicit canvas.
#[derive(Debug, Clone)]
pub struct FontFace {
    font: FontArc,
    scale: PxScale,
}

impl FontFace {
    /// Pixel width and height of the rendered bounding box of `text`.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let (w, h) = text_size(self.scale, &self.font, text);
        (w.max(0) as u32, h.max(0) as u32)
    }

    /// Width-only convenience used by the wrap loop.
    pub fn width(&self, text: &str) -> u32 {
        self.measure(text).0
    }

    /// Draw `text` onto `canvas` with its top-left corner at (x, y).
    pub fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
        draw_text_mut(canvas, color, x, y, self.scale, &self.font, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_face_always_resolves() {
        let config = FontConfig {
            candidates: vec![PathBuf::from("/definitely/not/a/font.ttf")],
        };
        let library = FontLibrary::resolve(&config);
        let face = library.sized(24.0);
        let (w, h) = face.measure("hello");
        assert!(w > 0);
        assert!(h > 0);
    }

    #[test]
    fn empty_string_measures_zero_width() {
        let face = FontLibrary::bundled().sized(24.0);
        assert_eq!(face.width(""), 0);
    }

    #[test]
    fn wider_text_measures_wider() {
        let face = FontLibrary::bundled().sized(24.0);
        assert!(face.width("wide wide wide") > face.width("w"));
    }
}
