//! Compact text mode: shrink title, subtitle, and tagline into short,
//! punchy variants for dense cover layouts.

/// Compacted replacement text for a cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactText {
    pub title: String,
    pub subtitle: Option<String>,
    pub tagline: Option<String>,
}

const STOP_WORDS: [&str; 11] = [
    "the", "for", "and", "with", "using", "your", "in", "to", "of", "a", "an",
];

/// Compact a title/subtitle/tagline triple.
///
/// Known product keywords in the title win (joined with ` + `, max three);
/// otherwise the first words of the segment before a dash or colon are kept.
pub fn compact(
    title: &str,
    subtitle: Option<&str>,
    tagline: Option<&str>,
) -> CompactText {
    fn add(label: &'static str, keywords: &mut Vec<&'static str>) {
        if !keywords.contains(&label) {
            keywords.push(label);
        }
    }

    let low = title.to_lowercase();
    let mut keywords: Vec<&'static str> = Vec::new();

    if low.contains("vs code") || low.contains("vscode") {
        add("VS Code", &mut keywords);
    }
    if low.contains("copilot") {
        add("Copilot", &mut keywords);
    }
    if low.contains("model context protocol") || low.contains("mcp") {
        add("MCP", &mut keywords);
    }
    if low.contains("github") {
        add("GitHub", &mut keywords);
    }
    if low.contains("azure") {
        add("Azure", &mut keywords);
    }
    if low.contains("terraform") {
        add("Terraform", &mut keywords);
    }
    if low.contains("agent") {
        add("Agent Mode", &mut keywords);
    }
    if low.contains("ai") && !low.contains("copilot") {
        add("AI", &mut keywords);
    }

    let compact_title = if keywords.is_empty() {
        let base = title
            .split(['-', '|', ':', '\u{2013}', '\u{2014}'])
            .next()
            .unwrap_or(title)
            .trim();
        let words: Vec<&str> = tokens(base).into_iter().filter(|w| w.len() > 1).collect();
        if words.is_empty() {
            title.chars().take(24).collect()
        } else {
            words[..words.len().min(4)].join(" ")
        }
    } else {
        keywords[..keywords.len().min(3)].join(" + ")
    };

    let compact_subtitle = subtitle.and_then(|sub| {
        let sub_low = sub.to_lowercase();
        if ["quick", "easy", "setup", "guide", "start"]
            .iter()
            .any(|tok| sub_low.contains(tok))
        {
            Some("Quick Setup".to_string())
        } else if sub_low.contains("agent") {
            Some("Agent Mode Ready".to_string())
        } else {
            let kept: Vec<&str> = tokens(sub)
                .into_iter()
                .filter(|t| !STOP_WORDS.contains(&t.to_lowercase().as_str()))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(kept[..kept.len().min(3)].join(" "))
            }
        }
    });

    let compact_tagline = match tagline {
        Some(tag) if tag.chars().count() <= 18 => Some(tag.to_string()),
        _ => Some("Quick Start".to_string()),
    };

    CompactText {
        title: compact_title,
        subtitle: compact_subtitle,
        tagline: compact_tagline,
    }
}

// Alphanumeric (plus '+') runs, everything else is a separator.
fn tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '+'))
        .filter(|t| !t.is_empty())
        .collect()
}
