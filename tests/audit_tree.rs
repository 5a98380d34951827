use std::fs;
use std::path::{Path, PathBuf};

use covergen::audit::{self, AuditOptions};
use covergen::canvas::FitPolicy;
use covergen::TargetSize;
use image::{Rgb, RgbImage};

fn write_article(root: &Path, rel: &str, front_matter: Option<&str>) -> PathBuf {
    let dir = root.join(rel);
    fs::create_dir_all(dir.join("assets")).expect("mkdir assets");
    let name = dir.file_name().unwrap().to_string_lossy().into_owned();
    let body = match front_matter {
        Some(fm) => format!("---\n{fm}\n---\n\n# {name}\n"),
        None => format!("# {name}\n"),
    };
    fs::write(dir.join(format!("{name}.md")), body).expect("write markdown");
    dir
}

fn write_cover(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join("assets").join(name);
    let img = RgbImage::from_pixel(width, height, Rgb([120, 60, 60]));
    img.save(&path).expect("save cover");
    path
}

#[test]
fn audit_reports_and_fixes_non_conforming_covers() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();

    let good = write_article(root, "posts/2025/good-article", None);
    write_cover(&good, "main.png", 1000, 420);

    let bad = write_article(root, "posts/2025/bad-article", None);
    let bad_cover = write_cover(&bad, "main.png", 800, 300);

    let options = AuditOptions {
        backup: true,
        ..AuditOptions::default()
    };
    let report = audit::run(root, &options, TargetSize::default()).expect("audit");
    assert_eq!(report.checked, 2);
    assert_eq!(report.conforming, 1);
    assert_eq!(report.non_conforming.len(), 1);
    assert_eq!(report.non_conforming[0].0, bad_cover);
    assert_eq!(report.non_conforming[0].1, (800, 300));
    assert!(report.fixed.is_empty());

    // Now fix it and verify the rewrite plus the backup copy.
    let fix_options = AuditOptions {
        fix: true,
        backup: true,
        policy: FitPolicy::Pad,
        ..AuditOptions::default()
    };
    let report = audit::run(root, &fix_options, TargetSize::default()).expect("audit --fix");
    assert_eq!(report.fixed.len(), 1);
    let fixed = &report.fixed[0];
    assert_eq!(fixed.original, (800, 300));
    let backup = fixed.backup.as_ref().expect("backup recorded");
    assert!(backup.exists());
    assert_eq!(
        image::image_dimensions(backup).expect("backup dims"),
        (800, 300)
    );
    assert_eq!(
        image::image_dimensions(&bad_cover).expect("fixed dims"),
        (1000, 420)
    );

    // A second sweep finds nothing left to fix.
    let report = audit::run(root, &options, TargetSize::default()).expect("re-audit");
    assert_eq!(report.conforming, 2);
    assert!(report.non_conforming.is_empty());
}

#[test]
fn audit_detects_missing_covers_and_picks_best_candidate() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();

    // No PNG at all in this one.
    write_article(root, "posts/empty-article", None);

    // Several PNGs; main.png must win the ranking.
    let multi = write_article(root, "posts/multi-article", None);
    write_cover(&multi, "aaa.png", 10, 10);
    let main = write_cover(&multi, "main.png", 1000, 420);
    write_cover(&multi, "cover-alt.png", 20, 20);

    let report = audit::run(root, &AuditOptions::default(), TargetSize::default()).expect("audit");
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.checked, 1);
    assert_eq!(report.conforming, 1);
    // Only the ranked winner was inspected.
    assert!(report.non_conforming.is_empty());
    assert!(main.exists());
}

#[test]
fn front_matter_mode_follows_cover_image_url() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();

    let fm = "title: Demo\ncover_image: https://raw.githubusercontent.com/owner/repo/main/posts/fm-article/assets/banner.png";
    let article = write_article(root, "posts/fm-article", Some(fm));
    let banner = write_cover(&article, "banner.png", 640, 480);
    // A decoy main.png that front-matter mode must not pick.
    write_cover(&article, "main.png", 1000, 420);

    let options = AuditOptions {
        front_matter: true,
        ..AuditOptions::default()
    };
    let report = audit::run(root, &options, TargetSize::default()).expect("audit");
    assert_eq!(report.checked, 1);
    assert_eq!(report.non_conforming.len(), 1);
    assert_eq!(report.non_conforming[0].0, banner);
}

#[test]
fn single_article_scope_limits_the_sweep() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();

    let one = write_article(root, "posts/one", None);
    write_cover(&one, "main.png", 500, 500);
    let two = write_article(root, "posts/two", None);
    write_cover(&two, "main.png", 500, 500);

    let options = AuditOptions {
        article: Some("posts/one".to_string()),
        ..AuditOptions::default()
    };
    let report = audit::run(root, &options, TargetSize::default()).expect("audit");
    assert_eq!(report.checked, 1);
    assert_eq!(report.non_conforming.len(), 1);
    assert!(report.non_conforming[0].0.starts_with(&one));
}

#[test]
fn corrupt_cover_lands_in_the_error_bucket() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let root = tmp.path();

    let article = write_article(root, "posts/corrupt", None);
    fs::write(article.join("assets/main.png"), b"definitely not a png").expect("write junk");

    let report = audit::run(root, &AuditOptions::default(), TargetSize::default()).expect("audit");
    assert_eq!(report.errored.len(), 1);
    assert_eq!(report.conforming, 0);
}
