//! # Inline Parsing
//!
//! Turns one run of block text into an ordered sequence of [`TextSpan`]s.
//!
//! ## Passes
//!
//! Tokenizing runs a fixed pipeline; each pass only rewrites the `Plain` spans
//! produced so far and passes every other span through untouched:
//!
//! 1. `**` pairs become `Bold`
//! 2. `*` pairs become `Italic`
//! 3. `` ` `` pairs become `Code`
//! 4. `![alt](url)` becomes `Image`
//! 5. `[text](url)` (not preceded by `!`) becomes `Link`
//!
//! Passes 1-3 are delimiter-balanced splits: an unterminated delimiter is an
//! error, not literal text. Because the splits are sequential, overlapping
//! emphasis such as `*a**b*` is not given any special meaning.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`parser`**: `tokenize()` entry point and the individual passes

pub mod kinds;
pub mod parser;
pub mod types;

use thiserror::Error;

pub use parser::tokenize;
pub use types::{SpanKind, TextSpan};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InlineError {
    #[error("unbalanced `{delimiter}` delimiter in: {text}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}
