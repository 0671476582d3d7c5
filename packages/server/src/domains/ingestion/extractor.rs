//! Field extraction for classified messages.
//!
//! Each extractor strips the recognized prefix and splits the remainder into
//! a draft record. There is no error path; missing pieces fall back to
//! defaults or stay empty.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDEA_STRIP: Regex = Regex::new(r"(?i)^\s*idea[:-]\s*").unwrap();
    static ref PERSON_STRIP: Regex = Regex::new(r"(?i)^\s*(contact|person)[:-]\s*").unwrap();
    static ref TOOL_STRIP: Regex = Regex::new(r"(?i)^\s*tool[:-]\s*").unwrap();
    // Loose phone shape: three digits, anything, four digits
    static ref PHONE_PATTERN: Regex = Regex::new(r"\d{3}.*\d{4}").unwrap();
}

/// Draft idea parsed from a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub summary: Option<String>,
}

/// Draft person parsed from a message body.
///
/// Parsing is positional over comma-separated parts: part 0 is the name,
/// parts 3/4/5 are company/role/location. Phone and email are found by
/// scanning all parts. When a middle field is omitted the later positions
/// shift and misassign. Known limitation of the comma format, kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
}

/// Draft tool parsed from a message body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolDraft {
    pub name: String,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Extract an idea: first line is the title, the rest is the summary.
pub fn extract_idea(text: &str) -> IdeaDraft {
    let rest = IDEA_STRIP.replace(text, "");
    let mut lines = rest.lines();

    let title = lines
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or("Untitled Idea")
        .to_string();

    let summary = lines.collect::<Vec<_>>().join("\n");
    let summary = summary.trim();

    IdeaDraft {
        title,
        summary: (!summary.is_empty()).then(|| summary.to_string()),
    }
}

/// Extract a person from comma-separated parts.
pub fn extract_person(text: &str) -> PersonDraft {
    let rest = PERSON_STRIP.replace(text, "");
    let parts: Vec<&str> = rest.split(',').map(str::trim).collect();

    let name = parts
        .first()
        .filter(|p| !p.is_empty())
        .unwrap_or(&"Unknown")
        .to_string();

    let phone = parts
        .iter()
        .find(|p| PHONE_PATTERN.is_match(p))
        .map(|p| p.to_string());
    let email = parts
        .iter()
        .find(|p| p.contains('@'))
        .map(|p| p.to_string());

    PersonDraft {
        name,
        phone,
        email,
        company: positional(&parts, 3),
        role: positional(&parts, 4),
        location: positional(&parts, 5),
    }
}

/// Extract a tool from pipe-separated parts.
///
/// A message classified Tool by the media fallback carries no prefix; the
/// strip regex simply doesn't match and the raw text is split.
pub fn extract_tool(text: &str) -> ToolDraft {
    let rest = TOOL_STRIP.replace(text, "");
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();

    let name = parts
        .first()
        .filter(|p| !p.is_empty())
        .unwrap_or(&"Unknown Tool")
        .to_string();

    ToolDraft {
        name,
        url: positional(&parts, 1),
        description: positional(&parts, 2),
    }
}

fn positional(parts: &[&str], index: usize) -> Option<String> {
    parts
        .get(index)
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
}
