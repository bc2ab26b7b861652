/// Fenced code block type. The whole block must open and close with a fence.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn matches(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// Removes the opening and closing fence, then trims the body.
    pub fn strip(block: &str) -> &str {
        let body = block.strip_prefix(Self::BACKTICKS).unwrap_or(block);
        let body = body.strip_suffix(Self::BACKTICKS).unwrap_or(body);
        body.trim()
    }
}
