use super::{
    classify::classify,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{BlockKind, StrippedBlock},
};

/// Classifies a block and removes its block-level markup.
pub fn strip(block: &str) -> StrippedBlock {
    let block = block.trim();
    let kind = classify(block);

    let text = match kind {
        BlockKind::Heading => Heading::strip(block).to_string(),
        BlockKind::Code => CodeFence::strip(block).to_string(),
        BlockKind::Quote => BlockQuote::strip(block),
        BlockKind::UnorderedList => UnorderedList::strip(block),
        BlockKind::OrderedList => OrderedList::strip(block),
        BlockKind::Paragraph => block.to_string(),
    };

    StrippedBlock { kind, text }
}
