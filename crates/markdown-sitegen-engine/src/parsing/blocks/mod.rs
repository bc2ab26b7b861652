//! # Block Parsing
//!
//! Splits a document into blocks and prepares each one for HTML construction.
//!
//! ## Phases
//!
//! 1. **Segmentation** (`segment`): the document is cut on blank-line runs and
//!    each piece trimmed
//! 2. **Classification** (`classify`): each block gets exactly one `BlockKind`
//! 3. **Stripping** (`strip`): block markup (`#`, fences, `> `, list markers)
//!    is removed, leaving the inner text
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`, `StrippedBlock`
//! - **`kinds`**: Block-specific types that own their syntax (Heading, CodeFence, BlockQuote, lists)
//! - **`segment`**: `segment()` and blank-line detection
//! - **`classify`**: `classify()` precedence rules
//! - **`strip`**: `strip()` dispatch per kind
//!
//! ## Key Invariants
//!
//! - Classification only looks at the trimmed block
//! - Stripped quote or list text may itself contain blank lines; the assembler
//!   re-segments it recursively

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod strip;
pub mod types;

pub use classify::classify;
pub use segment::{has_blank_line_run, segment};
pub use strip::strip;
pub use types::{BlockKind, StrippedBlock};
