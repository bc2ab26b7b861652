/// The syntactic kind of a block.
///
/// The set is closed; every dispatch over it is an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// The fallback when no other block syntax matches.
    Paragraph,
    /// `#` to `######` followed by whitespace.
    Heading,
    /// Opens and closes with a ```` ``` ```` fence.
    Code,
    /// Every line starts with `> `.
    Quote,
    /// Every line starts with `<digits>. `.
    OrderedList,
    /// Every line starts with `-`, `*` or `+` and a space.
    UnorderedList,
}

/// A block with its markup removed, ready for nesting or inline parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedBlock {
    pub kind: BlockKind,
    pub text: String,
}
