use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a block into exactly one [`BlockKind`].
///
/// The block is trimmed first. Precedence, first match wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
pub fn classify(block: &str) -> BlockKind {
    let block = block.trim();

    if Heading::matches(block) {
        BlockKind::Heading
    } else if CodeFence::matches(block) {
        BlockKind::Code
    } else if BlockQuote::matches(block) {
        BlockKind::Quote
    } else if UnorderedList::matches(block) {
        BlockKind::UnorderedList
    } else if OrderedList::matches(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}
