use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("no level-1 heading (`# Title`) found")]
    NoTitleFound,
}

fn title_line() -> &'static Regex {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    TITLE_REGEX.get_or_init(|| Regex::new(r"(?m)^# (.+)$").expect("Invalid title regex"))
}

/// Returns the text of the first `# Title` line in a document.
///
/// Only a single `#` followed by a space counts; `## Sub` lines are skipped.
pub fn extract_title(document: &str) -> Result<String, TitleError> {
    title_line()
        .captures(document)
        .map(|caps| caps[1].trim_end_matches('\r').to_string())
        .ok_or(TitleError::NoTitleFound)
}
