use std::sync::OnceLock;

use regex::Regex;

/// Bullet list block type, items marked with `-`, `*` or `+`.
pub struct UnorderedList;

impl UnorderedList {
    fn marker() -> &'static Regex {
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_REGEX.get_or_init(|| Regex::new(r"^[-*+]\s").expect("Invalid bullet regex"))
    }

    fn prefix() -> &'static Regex {
        static BULLET_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
        BULLET_PREFIX_REGEX
            .get_or_init(|| Regex::new(r"^[-*+]\s+").expect("Invalid bullet prefix regex"))
    }

    pub fn matches(block: &str) -> bool {
        super::every_line(block, |line| Self::marker().is_match(line))
    }

    pub fn strip(block: &str) -> String {
        strip_each_line(block, Self::prefix())
    }
}

/// Numbered list block type, items marked with `<digits>. `.
///
/// Numbers are not checked for order or starting value.
pub struct OrderedList;

impl OrderedList {
    fn marker() -> &'static Regex {
        static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
        NUMBER_REGEX.get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid number regex"))
    }

    fn prefix() -> &'static Regex {
        static NUMBER_PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
        NUMBER_PREFIX_REGEX
            .get_or_init(|| Regex::new(r"^\d+\.\s+").expect("Invalid number prefix regex"))
    }

    pub fn matches(block: &str) -> bool {
        super::every_line(block, |line| Self::marker().is_match(line))
    }

    pub fn strip(block: &str) -> String {
        strip_each_line(block, Self::prefix())
    }
}

fn strip_each_line(block: &str, prefix: &Regex) -> String {
    block
        .lines()
        .map(|line| match prefix.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
