//! Integration tests for the parsing module.
//!
//! Fixtures (`.md`) and their expected output (`.html`) are co-located in
//! `fixtures/`. Expected files hold the serialized tree on a single line.


use pretty_assertions::assert_eq;

use crate::parsing::{
    ParseError,
    blocks::{BlockKind, classify, segment},
    render,
};

// Fixture-based tests

#[test]
fn fixture_simple_paragraph() {
    assert_fixture("simple_paragraph");
}

#[test]
fn fixture_inline_formatting() {
    assert_fixture("inline_formatting");
}

#[test]
fn fixture_code_fence() {
    assert_fixture("code_fence");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_nested_quote() {
    assert_fixture("nested_quote");
}

#[test]
fn fixture_links_and_images() {
    assert_fixture("links_and_images");
}

#[test]
fn fixture_nested_ordered_list() {
    assert_fixture("nested_ordered_list");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let root = render(&md).unwrap();
    invariants::check(&root);

    assert_eq!(root.to_html(), expected.trim_end());
}

// Invariant tests

/// Every block of a document classifies as one of the known kinds, and the
/// rendered tree has one top-level child per non-empty block.
#[test]
fn one_child_per_block() {
    let md = "# Title\n\nIntro.\n\n- a\n- b\n\n1. x\n\n> q\n\n```\ncode\n```";
    let kinds: Vec<_> = segment(md).into_iter().map(classify).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading,
            BlockKind::Paragraph,
            BlockKind::UnorderedList,
            BlockKind::OrderedList,
            BlockKind::Quote,
            BlockKind::Code,
        ]
    );

    let root = render(md).unwrap();
    invariants::check(&root);
    assert_eq!(root.children().len(), kinds.len());
}

/// Deeply nested quotes recurse once per level without failing.
#[test]
fn deep_quote_nesting() {
    const DEPTH: usize = 64;

    let mut md = String::from("x");
    for _ in 0..DEPTH {
        md = quote(&format!("{md}\n\nx"));
    }

    let root = render(&md).unwrap();
    invariants::check(&root);
    assert_eq!(root.to_html().matches("<blockquote>").count(), DEPTH);
}

fn quote(text: &str) -> String {
    text.lines()
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Documents share no state, so they can be rendered from many threads.
#[test]
fn concurrent_rendering() {
    let docs: Vec<String> = (0..8)
        .map(|i| format!("# Page {i}\n\nBody **{i}**"))
        .collect();

    let rendered: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = docs
            .iter()
            .map(|doc| s.spawn(move || render(doc).unwrap().to_html()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, html) in rendered.iter().enumerate() {
        assert_eq!(
            html,
            &format!("<div><h1>Page {i}</h1><p>Body <b>{i}</b></p></div>")
        );
    }
}

/// A failure anywhere in the document means no tree at all.
#[test]
fn failure_returns_no_partial_tree() {
    let result = render("# Fine\n\nStill fine\n\n`unterminated");
    assert!(matches!(result, Err(ParseError::Inline(_))));
}
