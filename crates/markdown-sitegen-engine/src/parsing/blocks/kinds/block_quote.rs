/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// Every quoted line starts with this exact prefix.
    pub const PREFIX: &'static str = "> ";

    /// True when every line of a non-empty block carries the prefix.
    pub fn matches(block: &str) -> bool {
        super::every_line(block, |line| line.starts_with(Self::PREFIX))
    }

    /// Drops the prefix from each quoted line.
    ///
    /// Lines without the prefix are dropped entirely rather than kept as-is.
    pub fn strip(block: &str) -> String {
        block
            .lines()
            .filter_map(|line| line.strip_prefix(Self::PREFIX))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
