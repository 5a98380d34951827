//! Covergen
//!
//! A procedural cover-image generator for blog-style articles. Covers are
//! fixed-size 1000x420 PNG banners composed from gradients, decorative
//! shapes, and a wrapped title/subtitle block; an audit mode sweeps an
//! article tree and repairs covers whose dimensions have drifted.
//!
//! # Features
//!
//! - **Text Layout Engine**: greedy word-wrap, ellipsizing, and block layout
//!   with deterministic overflow handling
//! - **Canvas Normalizer**: letterbox (`pad`) or non-uniform (`stretch`)
//!   resizing of arbitrary sources to the exact target size
//! - **Styles**: a tagged set of drawing recipes dispatched explicitly
//!
//! # Example
//!
//! ```no_run
//! use covergen::font::{FontConfig, FontLibrary};
//! use covergen::styles::{self, CoverText, StyleAssets, StyleId};
//! use covergen::TargetSize;
//! use rand::SeedableRng;
//!
//! # fn main() -> covergen::Result<()> {
//! let fonts = FontLibrary::resolve(&FontConfig::default());
//! let text = CoverText {
//!     title: "Getting Started With Infrastructure Pipelines",
//!     subtitle: Some("A practical walkthrough"),
//!     tagline: Some("Published 01 Mar 2025"),
//!     label: "blog.dev",
//! };
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let cover = styles::render(
//!     StyleId::Classic,
//!     &text,
//!     &StyleAssets::default(),
//!     &fonts,
//!     TargetSize::default(),
//!     &mut rng,
//! );
//! image::DynamicImage::ImageRgba8(cover).to_rgb8().save("main.png")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod article;
pub mod audit;
pub mod canvas;
pub mod compact;
pub mod fetch;
pub mod font;
pub mod layout;
pub mod output;
pub mod styles;

/// Fixed output dimensions for every cover
///
/// Every drawing routine and both normalizer policies produce exactly these
/// dimensions. The default is the 1000x420 banner size used across the
/// article tree.
///
/// # Examples
///
/// ```
/// let size = covergen::TargetSize::default();
/// assert_eq!(size.width, 1000);
/// assert_eq!(size.height, 420);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl Default for TargetSize {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 420,
        }
    }
}
