pub mod html;
pub mod io;
pub mod parsing;
pub mod site;
pub mod title;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode, LeafNode, NodeError, ParentNode};
pub use io::IoError;
pub use parsing::{ParseError, markdown_to_html, parse_block, render};
pub use site::{BuildSummary, SiteError, SiteLayout, Template};
pub use title::{TitleError, extract_title};
