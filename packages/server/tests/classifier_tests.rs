//! Unit tests for inbound message classification.

use server_core::domains::ingestion::{classify, MessageKind};

#[test]
fn idea_prefix_wins_case_insensitively() {
    for text in ["idea: x", "Idea: x", "IDEA- x", "  idea:x", "\tidea-x"] {
        assert_eq!(classify(text, false), MessageKind::Idea, "text: {:?}", text);
    }
}

#[test]
fn person_and_contact_prefixes_match() {
    for text in ["person: Jane", "contact: Jane", "Person- Jane", "CONTACT:Jane"] {
        assert_eq!(classify(text, false), MessageKind::Person, "text: {:?}", text);
    }
}

#[test]
fn tool_prefix_matches() {
    for text in ["tool: Figma", "Tool-Figma", " tool:x"] {
        assert_eq!(classify(text, false), MessageKind::Tool, "text: {:?}", text);
    }
}

#[test]
fn unprefixed_text_without_media_is_unknown() {
    for text in [
        "",
        "hello there",
        "ideas: plural is not the prefix",
        "my idea: embedded",
        "toolbox",
        "person without separator",
    ] {
        assert_eq!(classify(text, false), MessageKind::Unknown, "text: {:?}", text);
    }
}

#[test]
fn media_turns_unknown_into_tool() {
    assert_eq!(classify("", true), MessageKind::Tool);
    assert_eq!(classify("hello there", true), MessageKind::Tool);
}

#[test]
fn media_does_not_override_a_prefix() {
    assert_eq!(classify("idea: with photo", true), MessageKind::Idea);
    assert_eq!(classify("contact: Jane", true), MessageKind::Person);
}
