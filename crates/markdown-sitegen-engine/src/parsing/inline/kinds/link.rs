use std::sync::OnceLock;

use regex::Regex;

/// Inline image, `![alt](url)`.
///
/// Neither the alt text nor the url may contain brackets or parentheses.
pub struct Image;

impl Image {
    pub const MARKER: char = '!';

    pub fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
        })
    }
}

/// Inline link, `[text](url)`.
pub struct Link;

impl Link {
    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
        })
    }

    /// A match starting right after `!` belongs to the image syntax.
    pub fn is_image_marker_before(text: &str, start: usize) -> bool {
        text[..start].ends_with(Image::MARKER)
    }
}
