//! Article resolution and front-matter metadata.
//!
//! An article is a directory containing a markdown file and an `assets/`
//! subdirectory for its cover. Front matter is the leading `---`-delimited
//! key/value block of the markdown file. The parser is line-based: values
//! are plain trimmed strings with surrounding quotes stripped, comment
//! lines and non-`key: value` lines are skipped.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{Error, Result};

/// A resolved article: its directory and, when present, its markdown file.
#[derive(Debug, Clone)]
pub struct Article {
    pub dir: PathBuf,
    pub markdown: Option<PathBuf>,
}

/// Resolve an `--article` argument (file or directory, absolute or relative
/// to `root`) to an [`Article`].
pub fn resolve_article(arg: &str, root: &Path) -> Result<Article> {
    let mut target = PathBuf::from(arg);
    if target.is_relative() {
        target = root.join(target);
    }

    if target.is_file() {
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        return Ok(Article {
            dir,
            markdown: Some(target),
        });
    }
    if target.is_dir() {
        let markdown = find_article_markdown(&target);
        return Ok(Article {
            dir: target,
            markdown,
        });
    }
    Err(Error::ArticleNotFound(arg.to_string()))
}

/// The article's markdown file: `<dirname>.md` when present, otherwise the
/// first `*.md` in name order.
pub fn find_article_markdown(dir: &Path) -> Option<PathBuf> {
    if let Some(name) = dir.file_name() {
        let preferred = dir.join(format!("{}.md", name.to_string_lossy()));
        if preferred.is_file() {
            return Some(preferred);
        }
    }
    let mut markdowns: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("md"))
                .unwrap_or(false)
        })
        .collect();
    markdowns.sort();
    markdowns.into_iter().next()
}

/// Parse the front-matter block of `markdown`, if any.
///
/// Missing files, files without a leading `---`, and blocks without a
/// closing `---` all yield an empty map rather than an error.
pub fn parse_front_matter(markdown: Option<&Path>) -> HashMap<String, String> {
    let mut data = HashMap::new();
    let Some(path) = markdown else {
        return data;
    };
    let Ok(text) = fs::read_to_string(path) else {
        return data;
    };

    let mut lines = text.lines();
    match lines.next() {
        Some(first) if first.trim() == "---" => {}
        _ => return data,
    }

    let mut block = Vec::new();
    let mut closed = false;
    for raw in lines {
        if raw.trim() == "---" {
            closed = true;
            break;
        }
        block.push(raw);
    }
    if !closed {
        return data;
    }

    for raw in block {
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = raw.split_once(':') else {
            continue;
        };
        let cleaned = value.trim().trim_matches(|c| c == '\'' || c == '"');
        data.insert(key.trim().to_string(), cleaned.to_string());
    }
    data
}

/// Derive a display title from a directory slug: separators become spaces
/// and each word is capitalised.
pub fn fallback_title(slug: &str) -> String {
    let words: Vec<String> = slug
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect();
    if words.is_empty() {
        slug.to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Format an ISO-8601 / RFC 3339 date as `01 Mar 2025`. Values that do not
/// parse are passed through unchanged.
pub fn friendly_date(value: &str) -> String {
    let cleaned = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(cleaned) {
        return parsed.format("%d %b %Y").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(cleaned, "%Y-%m-%dT%H:%M:%S") {
        return parsed.format("%d %b %Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(cleaned, "%Y-%m-%d") {
        return parsed.format("%d %b %Y").to_string();
    }
    value.to_string()
}

/// Pick the tagline chip text: an explicit override, else the publish date,
/// else the series name, else the first tag.
pub fn build_tagline(
    metadata: &HashMap<String, String>,
    explicit: Option<&str>,
) -> Option<String> {
    if let Some(text) = explicit.filter(|t| !t.is_empty()) {
        return Some(text.to_string());
    }
    if let Some(date) = metadata.get("date").filter(|d| !d.trim().is_empty()) {
        return Some(format!("Published {}", friendly_date(date)));
    }
    if let Some(series) = metadata.get("series").filter(|s| !s.is_empty()) {
        return Some(series.clone());
    }
    if let Some(tags) = metadata.get("tags").filter(|t| !t.is_empty()) {
        return tags.split(',').next().map(|tag| tag.trim().to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_markdown(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("create markdown");
        file.write_all(contents.as_bytes()).expect("write markdown");
        path
    }

    #[test]
    fn front_matter_strips_quotes_and_skips_comments() {
        let dir = tempfile::tempdir().expect("tempdir");
        let md = write_markdown(
            dir.path(),
            "post.md",
            "---\ntitle: 'Quoted Title'\n# a comment\ndescription: \"Sub\"\nnot a pair\ndate: 2025-03-01\n---\nbody\n",
        );
        let meta = parse_front_matter(Some(&md));
        assert_eq!(meta.get("title").map(String::as_str), Some("Quoted Title"));
        assert_eq!(meta.get("description").map(String::as_str), Some("Sub"));
        assert_eq!(meta.get("date").map(String::as_str), Some("2025-03-01"));
        assert!(!meta.contains_key("not a pair"));
    }

    #[test]
    fn unclosed_front_matter_yields_empty_map() {
        let dir = tempfile::tempdir().expect("tempdir");
        let md = write_markdown(dir.path(), "post.md", "---\ntitle: Oops\nno closing fence\n");
        assert!(parse_front_matter(Some(&md)).is_empty());
    }

    #[test]
    fn body_without_front_matter_yields_empty_map() {
        let dir = tempfile::tempdir().expect("tempdir");
        let md = write_markdown(dir.path(), "post.md", "# Heading\n\nJust text.\n");
        assert!(parse_front_matter(Some(&md)).is_empty());
    }

    #[test]
    fn prefers_markdown_named_after_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let article_dir = dir.path().join("my-post");
        fs::create_dir(&article_dir).expect("mkdir");
        write_markdown(&article_dir, "aaa.md", "first");
        let preferred = write_markdown(&article_dir, "my-post.md", "preferred");
        assert_eq!(find_article_markdown(&article_dir), Some(preferred));
    }

    #[test]
    fn fallback_title_from_slug() {
        assert_eq!(fallback_title("my_first-post"), "My First Post");
        assert_eq!(fallback_title("2025"), "2025");
    }

    #[test]
    fn friendly_date_formats_and_passes_through() {
        assert_eq!(friendly_date("2025-03-01"), "01 Mar 2025");
        assert_eq!(friendly_date("2025-03-01T09:30:00Z"), "01 Mar 2025");
        assert_eq!(friendly_date("next tuesday"), "next tuesday");
    }

    #[test]
    fn tagline_priority_order() {
        let mut meta = HashMap::new();
        meta.insert("tags".to_string(), "devops, azure".to_string());
        assert_eq!(build_tagline(&meta, None).as_deref(), Some("devops"));

        meta.insert("series".to_string(), "Pipelines 101".to_string());
        assert_eq!(build_tagline(&meta, None).as_deref(), Some("Pipelines 101"));

        meta.insert("date".to_string(), "2025-03-01".to_string());
        assert_eq!(
            build_tagline(&meta, None).as_deref(),
            Some("Published 01 Mar 2025")
        );

        assert_eq!(
            build_tagline(&meta, Some("Hands-on")).as_deref(),
            Some("Hands-on")
        );
    }

    #[test]
    fn missing_article_path_is_an_error() {
        let err = resolve_article("does/not/exist", Path::new("/tmp"));
        assert!(matches!(err, Err(Error::ArticleNotFound(_))));
    }
}
