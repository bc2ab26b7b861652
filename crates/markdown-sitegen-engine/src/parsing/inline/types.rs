/// The formatting of a [`TextSpan`].
///
/// Only links and images carry a target, so a `Plain` span can never have one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A contiguous run of inline text with a single formatting kind.
///
/// For links `text` is the label; for images it is the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }

    /// Target of a link or image.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            SpanKind::Plain | SpanKind::Bold | SpanKind::Italic | SpanKind::Code => None,
        }
    }
}
