use std::sync::OnceLock;

use regex::Regex;

/// ATX heading block type, `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    fn opener() -> &'static Regex {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_REGEX.get_or_init(|| Regex::new(r"^#{1,6}\s").expect("Invalid heading regex"))
    }

    fn prefix() -> &'static Regex {
        static HEADING_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
        HEADING_PREFIX_REGEX
            .get_or_init(|| Regex::new(r"^#{1,6}\s+").expect("Invalid heading prefix regex"))
    }

    /// One to six `#` followed by whitespace.
    pub fn matches(block: &str) -> bool {
        Self::opener().is_match(block)
    }

    /// Removes the `#` run and the whitespace after it.
    pub fn strip(block: &str) -> &str {
        match Self::prefix().find(block) {
            Some(m) => &block[m.end()..],
            None => block,
        }
    }
}
