//! # Inline Kinds
//!
//! Inline-specific types that own their syntax. The parser refers to these
//! constants and patterns; it never hardcodes `**`, `` ` `` or a link regex.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIMITER = "**"`
//! - **`Emphasis`**: `DELIMITER = "*"`
//! - **`CodeSpan`**: `TICK = "`"`
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern, rejected after `!`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::{Image, Link};
