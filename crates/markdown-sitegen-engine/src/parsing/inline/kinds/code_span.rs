/// Code span inline type with owned delimiter constant.
///
/// Code is split out after emphasis, so a `*` inside backticks is still
/// treated as an emphasis delimiter.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
