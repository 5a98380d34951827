//! Audit and repair cover images across an article tree.
//!
//! The sweep walks `posts/**/assets` (or a single article), reads each
//! cover's dimensions without decoding the full image, and reports anything
//! that is not exactly the target size. With `fix` enabled the offenders are
//! rewritten in place through the canvas normalizer, after a timestamped
//! backup copy.

use std::path::{Path, PathBuf};

use glob::glob;
use url::Url;

use crate::article::{find_article_markdown, parse_front_matter};
use crate::canvas::{self, FitPolicy};
use crate::output;
use crate::{Error, Result, TargetSize};

/// Placeholder file name reported when an expected cover is absent.
pub const MISSING_PLACEHOLDER: &str = "(cover png missing)";

/// What to audit and how to repair it.
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// Restrict the sweep to one article directory or markdown file.
    pub article: Option<String>,
    /// Inspect a specific image file name instead of auto-detecting.
    pub image: Option<String>,
    /// Target the cover declared in front matter, falling back to
    /// `assets/main.png`.
    pub front_matter: bool,
    /// Rewrite non-conforming images in place.
    pub fix: bool,
    /// Normalizer policy used when fixing.
    pub policy: FitPolicy,
    /// Write a backup copy before fixing.
    pub backup: bool,
}

/// One repaired cover.
#[derive(Debug, Clone)]
pub struct FixedCover {
    pub path: PathBuf,
    pub original: (u32, u32),
    pub backup: Option<PathBuf>,
}

/// Outcome of a sweep.
#[derive(Debug, Default)]
pub struct AuditReport {
    pub checked: usize,
    pub conforming: usize,
    pub non_conforming: Vec<(PathBuf, (u32, u32))>,
    pub errored: Vec<(PathBuf, String)>,
    pub missing: Vec<PathBuf>,
    pub fixed: Vec<FixedCover>,
}

/// Run the audit under `root` and, when requested, fix what it finds.
pub fn run(root: &Path, options: &AuditOptions, target: TargetSize) -> Result<AuditReport> {
    let (images, missing) = collect_targets(root, options)?;

    let mut report = AuditReport {
        checked: images.len(),
        missing,
        ..AuditReport::default()
    };

    for path in images {
        match image::image_dimensions(&path) {
            Ok(size) if size == (target.width, target.height) => report.conforming += 1,
            Ok(size) => report.non_conforming.push((path, size)),
            Err(err) => report.errored.push((path, err.to_string())),
        }
    }

    if options.fix {
        for (path, size) in report.non_conforming.clone() {
            let backup = if options.backup {
                Some(output::backup_by_copy(&path)?)
            } else {
                None
            };
            fix_image(&path, options.policy, target)?;
            report.fixed.push(FixedCover {
                path,
                original: size,
                backup,
            });
        }
    }

    Ok(report)
}

/// Normalize a single image file in place.
pub fn fix_image(path: &Path, policy: FitPolicy, target: TargetSize) -> Result<()> {
    let source = image::open(path)?;
    let corrected = canvas::normalize(&source, target, policy);
    corrected
        .save(path)
        .map_err(|e| Error::Output(format!("Failed to rewrite {}: {e}", path.display())))
}

/// Map a front-matter cover URL back to a local path under `root`.
///
/// `raw.githubusercontent.com` URLs drop the owner/repo/branch segments;
/// anything else falls back to the path after a `/main/` segment.
pub fn path_from_cover_url(cover_url: &str, root: &Path) -> Option<PathBuf> {
    let parsed = Url::parse(cover_url).ok()?;
    if !parsed.scheme().starts_with("http") {
        return None;
    }
    let host = parsed.host_str().unwrap_or_default();
    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();
    if host.contains("raw.githubusercontent.com") && segments.len() >= 4 {
        return Some(root.join(segments[3..].join("/")));
    }
    if let Some((_, rel)) = parsed.path().split_once("/main/") {
        return Some(root.join(rel));
    }
    None
}

// Ranking used when auto-detecting which PNG in an assets dir is the cover.
fn cover_priority(path: &Path) -> (u8, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let rank = if name == "main.png" {
        0
    } else if name.starts_with("main") {
        1
    } else if name.contains("cover") {
        2
    } else {
        3
    };
    (rank, name)
}

fn select_asset_images(
    assets_dir: &Path,
    image_name: Option<&str>,
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    if !assets_dir.is_dir() {
        return (Vec::new(), Vec::new());
    }
    if let Some(name) = image_name {
        let candidate = assets_dir.join(name);
        if candidate.exists() {
            return (vec![candidate], Vec::new());
        }
        return (Vec::new(), vec![candidate]);
    }

    let mut pngs: Vec<PathBuf> = std::fs::read_dir(assets_dir)
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("png"))
                .unwrap_or(false)
        })
        .collect();
    pngs.sort_by_key(|p| cover_priority(p));
    match pngs.into_iter().next() {
        Some(best) => (vec![best], Vec::new()),
        None => (Vec::new(), vec![assets_dir.join(MISSING_PLACEHOLDER)]),
    }
}

fn front_matter_target(
    article_dir: &Path,
    assets_dir: &Path,
    repo_root: &Path,
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let markdown = find_article_markdown(article_dir);
    let meta = parse_front_matter(markdown.as_deref());
    if let Some(cover_url) = meta.get("cover_image") {
        if let Some(local) = path_from_cover_url(cover_url, repo_root) {
            if local.exists() {
                return (vec![local], Vec::new());
            }
        }
    }
    let fallback = assets_dir.join("main.png");
    if fallback.exists() {
        return (vec![fallback], Vec::new());
    }
    (Vec::new(), vec![assets_dir.join(MISSING_PLACEHOLDER)])
}

fn enumerate_article_assets(
    posts_root: &Path,
    options: &AuditOptions,
) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut images = Vec::new();
    let mut missing = Vec::new();
    let repo_root = posts_root.parent().unwrap_or(posts_root).to_path_buf();

    let pattern = posts_root.join("**").join("assets");
    let Ok(entries) = glob(&pattern.to_string_lossy()) else {
        return (images, missing);
    };
    let mut assets_dirs: Vec<PathBuf> = entries.filter_map(|e| e.ok()).collect();
    assets_dirs.sort();

    for assets_dir in assets_dirs {
        let Some(article_dir) = assets_dir.parent().map(Path::to_path_buf) else {
            continue;
        };
        if !article_dir.is_dir() || find_article_markdown(&article_dir).is_none() {
            continue;
        }
        if options.front_matter && options.image.is_none() {
            let (found, not_found) = front_matter_target(&article_dir, &assets_dir, &repo_root);
            images.extend(found);
            missing.extend(not_found);
            continue;
        }
        let (found, not_found) = select_asset_images(&assets_dir, options.image.as_deref());
        images.extend(found);
        missing.extend(not_found);
    }
    (images, missing)
}

fn resolve_article_root(article: &str, root: &Path) -> Result<PathBuf> {
    let mut target = PathBuf::from(article);
    if target.is_relative() {
        target = root.join(target);
    }
    if target.is_file() {
        return Ok(target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")));
    }
    if target.is_dir() {
        return Ok(target);
    }
    Err(Error::ArticleNotFound(article.to_string()))
}

fn collect_targets(
    root: &Path,
    options: &AuditOptions,
) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    if let Some(article) = &options.article {
        let article_root = resolve_article_root(article, root)?;
        let assets_dir = article_root.join("assets");
        if assets_dir.is_dir() {
            if options.front_matter && options.image.is_none() {
                return Ok(front_matter_target(&article_root, &assets_dir, root));
            }
            return Ok(select_asset_images(&assets_dir, options.image.as_deref()));
        }
        // Treat the path as a container of articles (e.g. posts/2025).
        return Ok(enumerate_article_assets(&article_root, options));
    }
    Ok(enumerate_article_assets(&root.join("posts"), options))
}
