pub mod blocks;
pub mod document;
pub mod inline;

use thiserror::Error;

use crate::html::NodeError;
use inline::InlineError;

pub use document::{markdown_to_html, parse_block, render, span_to_node};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid inline markdown: {0}")]
    Inline(#[from] InlineError),
    #[error("invalid HTML node: {0}")]
    Node(#[from] NodeError),
}

#[cfg(test)]
mod tests;
