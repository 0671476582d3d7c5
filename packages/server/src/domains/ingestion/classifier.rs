use lazy_static::lazy_static;
use regex::Regex;

/// What kind of record an inbound message should become.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Idea,
    Person,
    Tool,
    Unknown,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Idea => "idea",
            MessageKind::Person => "person",
            MessageKind::Tool => "tool",
            MessageKind::Unknown => "unknown",
        }
    }
}

lazy_static! {
    static ref IDEA_PREFIX: Regex = Regex::new(r"(?i)^\s*idea[:-]").unwrap();
    static ref PERSON_PREFIX: Regex = Regex::new(r"(?i)^\s*(contact|person)[:-]").unwrap();
    static ref TOOL_PREFIX: Regex = Regex::new(r"(?i)^\s*tool[:-]").unwrap();
}

/// Classify an inbound message from its text and media-presence flag.
///
/// Rules apply in order, first match wins:
/// 1. `idea:` / `idea-` prefix
/// 2. `contact:` / `person:` prefix
/// 3. `tool:` prefix
/// 4. any attached media falls back to Tool
/// 5. otherwise Unknown
///
/// Always returns a value; there is no error path.
pub fn classify(text: &str, has_media: bool) -> MessageKind {
    if IDEA_PREFIX.is_match(text) {
        MessageKind::Idea
    } else if PERSON_PREFIX.is_match(text) {
        MessageKind::Person
    } else if TOOL_PREFIX.is_match(text) {
        MessageKind::Tool
    } else if has_media {
        MessageKind::Tool
    } else {
        MessageKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_prefix() {
        assert_eq!(classify("idea: build a widget", false), MessageKind::Idea);
        assert_eq!(classify("idea- build a widget", false), MessageKind::Idea);
        assert_eq!(classify("IDEA: shouty", false), MessageKind::Idea);
        assert_eq!(classify("  idea: leading space", false), MessageKind::Idea);
    }

    #[test]
    fn test_person_prefix() {
        assert_eq!(classify("person: Jane Doe", false), MessageKind::Person);
        assert_eq!(classify("contact: Jane Doe", false), MessageKind::Person);
        assert_eq!(classify("Contact- Jane", false), MessageKind::Person);
    }

    #[test]
    fn test_tool_prefix() {
        assert_eq!(classify("tool: Figma", false), MessageKind::Tool);
        assert_eq!(classify("TOOL-Figma", false), MessageKind::Tool);
    }

    #[test]
    fn test_first_match_wins() {
        // An idea prefix beats the media fallback
        assert_eq!(classify("idea: has a photo too", true), MessageKind::Idea);
    }

    #[test]
    fn test_media_fallback_is_tool() {
        assert_eq!(classify("check this out", true), MessageKind::Tool);
        assert_eq!(classify("", true), MessageKind::Tool);
    }

    #[test]
    fn test_unrecognized_is_unknown() {
        assert_eq!(classify("just some text", false), MessageKind::Unknown);
        assert_eq!(classify("", false), MessageKind::Unknown);
        // Prefix must be at the start
        assert_eq!(classify("my idea: too late", false), MessageKind::Unknown);
        // Prefix needs its colon/dash
        assert_eq!(classify("idea without colon", false), MessageKind::Unknown);
    }
}
