//! Unit tests for field extraction from classified messages.

use server_core::domains::ingestion::{extract_idea, extract_person, extract_tool};

#[test]
fn idea_splits_title_and_summary() {
    let draft = extract_idea("idea: Build a widget\nMakes widgets");
    assert_eq!(draft.title, "Build a widget");
    assert_eq!(draft.summary.as_deref(), Some("Makes widgets"));
}

#[test]
fn idea_without_summary() {
    let draft = extract_idea("idea-Just the title");
    assert_eq!(draft.title, "Just the title");
    assert_eq!(draft.summary, None);
}

#[test]
fn idea_blank_body_defaults_title() {
    let draft = extract_idea("idea:   ");
    assert_eq!(draft.title, "Untitled Idea");
    assert_eq!(draft.summary, None);
}

#[test]
fn idea_keeps_later_newlines_in_summary() {
    let draft = extract_idea("IDEA: Title\nfirst\n\nsecond");
    assert_eq!(draft.title, "Title");
    assert_eq!(draft.summary.as_deref(), Some("first\n\nsecond"));
}

#[test]
fn person_extracts_name_phone_email() {
    let draft = extract_person("person: Jane Doe, 555-123-4567, jane@x.com");
    assert_eq!(draft.name, "Jane Doe");
    assert!(draft.phone.as_deref().unwrap().contains("555-123-4567"));
    assert_eq!(draft.email.as_deref(), Some("jane@x.com"));
}

#[test]
fn person_positional_tail_fields() {
    let draft = extract_person(
        "contact: Sam Lee, (612) 555-0147, sam@lee.dev, Initech, CTO, St Paul",
    );
    assert_eq!(draft.name, "Sam Lee");
    assert_eq!(draft.phone.as_deref(), Some("(612) 555-0147"));
    assert_eq!(draft.email.as_deref(), Some("sam@lee.dev"));
    assert_eq!(draft.company.as_deref(), Some("Initech"));
    assert_eq!(draft.role.as_deref(), Some("CTO"));
    assert_eq!(draft.location.as_deref(), Some("St Paul"));
}

#[test]
fn person_name_only() {
    let draft = extract_person("person: Jane");
    assert_eq!(draft.name, "Jane");
    assert_eq!(draft.phone, None);
    assert_eq!(draft.email, None);
    assert_eq!(draft.company, None);
}

#[test]
fn person_empty_gets_unknown_name() {
    let draft = extract_person("contact:");
    assert_eq!(draft.name, "Unknown");
}

#[test]
fn tool_splits_on_pipes() {
    let draft = extract_tool("tool: Figma|https://figma.com|design tool");
    assert_eq!(draft.name, "Figma");
    assert_eq!(draft.url.as_deref(), Some("https://figma.com"));
    assert_eq!(draft.description.as_deref(), Some("design tool"));
}

#[test]
fn tool_trims_pipe_parts() {
    let draft = extract_tool("tool: Figma | https://figma.com | design tool ");
    assert_eq!(draft.name, "Figma");
    assert_eq!(draft.url.as_deref(), Some("https://figma.com"));
    assert_eq!(draft.description.as_deref(), Some("design tool"));
}

#[test]
fn tool_media_fallback_uses_raw_text_as_name() {
    let draft = extract_tool("saw this on a poster");
    assert_eq!(draft.name, "saw this on a poster");
    assert_eq!(draft.url, None);
    assert_eq!(draft.description, None);
}

#[test]
fn tool_empty_body_defaults_name() {
    let draft = extract_tool("tool:");
    assert_eq!(draft.name, "Unknown Tool");
}
