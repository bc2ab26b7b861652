use regex::Regex;

use super::{
    InlineError,
    kinds::{CodeSpan, Emphasis, Image, Link, Strong},
    types::{SpanKind, TextSpan},
};

/// Tokenizes inline markdown into a sequence of [`TextSpan`]s.
///
/// # Returns
/// Spans in source order. Empty runs are never emitted, so an empty input
/// yields an empty vector and text without markup yields a single `Plain` span.
///
/// # Errors
/// [`InlineError::UnbalancedDelimiter`] when a `**`, `*` or `` ` `` run is
/// left open.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimited(spans, Strong::DELIMITER, SpanKind::Bold)?;
    let spans = split_delimited(spans, Emphasis::DELIMITER, SpanKind::Italic)?;
    let spans = split_delimited(spans, CodeSpan::TICK, SpanKind::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Splits every `Plain` span on `delimiter`.
///
/// Segments at even positions stay plain, segments at odd positions (those
/// enclosed by a delimiter pair) take `kind`. An even segment count means a
/// delimiter was never closed.
pub fn split_delimited(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let segments: Vec<&str> = span.text.split(delimiter).collect();
        if segments.len() % 2 == 0 {
            return Err(InlineError::UnbalancedDelimiter {
                delimiter,
                text: span.text,
            });
        }

        for (i, segment) in segments.into_iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            let segment_kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                kind.clone()
            };
            out.push(TextSpan::new(segment, segment_kind));
        }
    }

    Ok(out)
}

/// Extracts `![alt](url)` images from `Plain` spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(spans, Image::pattern(), |_, _| true, |alt, url| {
        TextSpan::image(alt, url)
    })
}

/// Extracts `[text](url)` links from `Plain` spans.
///
/// A match directly after `!` is left as plain text; it is image syntax that
/// the image pass could not consume.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_pattern(
        spans,
        Link::pattern(),
        |text, start| !Link::is_image_marker_before(text, start),
        |label, url| TextSpan::link(label, url),
    )
}

/// Replaces each accepted match of `pattern` with the span built by `make`
/// from its two captures, keeping the text around matches as `Plain` spans.
fn split_pattern(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    accept: impl Fn(&str, usize) -> bool,
    make: impl Fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    // Helper to push the text between matches
    fn push_plain(out: &mut Vec<TextSpan>, text: &str) {
        if !text.is_empty() {
            out.push(TextSpan::plain(text));
        }
    }

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.text.as_str();
        let mut last_end = 0;

        for caps in pattern.captures_iter(text) {
            let Some(full) = caps.get(0) else { continue };
            if !accept(text, full.start()) {
                continue;
            }
            push_plain(&mut out, &text[last_end..full.start()]);
            out.push(make(&caps[1], &caps[2]));
            last_end = full.end();
        }

        push_plain(&mut out, &text[last_end..]);
    }

    out
}
