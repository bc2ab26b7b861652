use std::path::Path;

use crate::io;

use super::SiteError;

/// A page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    /// Fails with [`SiteError::MissingPlaceholder`] unless both placeholders
    /// appear at least once.
    pub fn new(source: impl Into<String>) -> Result<Self, SiteError> {
        let source = source.into();
        for placeholder in [Self::TITLE, Self::CONTENT] {
            if !source.contains(placeholder) {
                return Err(SiteError::MissingPlaceholder(placeholder));
            }
        }
        Ok(Self { source })
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        Self::new(io::read_path(path)?)
    }

    /// Substitutes every placeholder occurrence.
    ///
    /// Inserted text is never re-scanned, so a title or page that happens to
    /// contain a placeholder is left as written.
    pub fn apply(&self, title: &str, content: &str) -> String {
        self.source
            .split(Self::CONTENT)
            .map(|piece| piece.replace(Self::TITLE, title))
            .collect::<Vec<_>>()
            .join(content)
    }
}
