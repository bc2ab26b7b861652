use std::sync::OnceLock;

use regex::Regex;

fn blank_line_run() -> &'static Regex {
    static BLANK_LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    BLANK_LINE_REGEX.get_or_init(|| Regex::new(r"\n{2,}").expect("Invalid blank line regex"))
}

/// Splits a document into blocks on runs of two or more newlines.
///
/// Each block is trimmed. Blocks that trim to nothing are kept, so callers see
/// exactly one entry per separator-delimited region.
pub fn segment(document: &str) -> Vec<&str> {
    blank_line_run().split(document).map(str::trim).collect()
}

/// True when `text` still contains a blank-line separated structure.
pub fn has_blank_line_run(text: &str) -> bool {
    blank_line_run().is_match(text)
}
