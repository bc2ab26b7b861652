//! Block-specific types that own their markup. Classification and stripping
//! call into these; no block syntax is hardcoded elsewhere.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};

/// True when `block` has at least one line and `pred` holds for all of them.
fn every_line(block: &str, pred: impl Fn(&str) -> bool) -> bool {
    let mut lines = block.lines().peekable();
    lines.peek().is_some() && lines.all(pred)
}
