//! # Document Assembly
//!
//! Builds the HTML tree from markdown blocks. Each block is stripped, then
//! either re-segmented recursively (when its inner text still contains blank
//! lines, as in multi-paragraph quotes) or tokenized into inline leaves.
//!
//! Recursion depth equals the nesting depth of the document. There is no
//! explicit limit.

use crate::html::{Attributes, HtmlNode, LeafNode, NodeError, ParentNode};

use super::{
    ParseError,
    blocks::{BlockKind, StrippedBlock, has_blank_line_run, segment, strip},
    inline::{SpanKind, TextSpan, tokenize},
};

/// Renders a whole document into a single `div` node.
///
/// Blocks that trim to nothing (e.g. after trailing blank lines) are skipped,
/// so a document with no content fails with [`NodeError::EmptyChildren`].
pub fn render(document: &str) -> Result<HtmlNode, ParseError> {
    let children = parse_blocks(document)?;
    Ok(ParentNode::wrap("div", children)?.into())
}

/// Renders a document straight to its HTML string.
pub fn markdown_to_html(document: &str) -> Result<String, ParseError> {
    Ok(render(document)?.to_html())
}

/// Parses one block into the nodes that represent it.
///
/// Usually a single node; a nested structure inside a block kind that has no
/// wrapper element (paragraph, heading, code) yields its nested nodes as-is.
pub fn parse_block(block: &str) -> Result<Vec<HtmlNode>, ParseError> {
    let stripped = strip(block);
    log::debug!(
        "parsing {:?} block ({} bytes of inner text)",
        stripped.kind,
        stripped.text.len()
    );

    if has_blank_line_run(&stripped.text) {
        parse_nested(stripped)
    } else {
        parse_flat(stripped).map(|node| vec![node])
    }
}

/// Segments `text` and parses every non-empty block in order.
fn parse_blocks(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    let mut nodes = Vec::new();
    for block in segment(text) {
        if block.is_empty() {
            continue;
        }
        nodes.extend(parse_block(block)?);
    }
    Ok(nodes)
}

fn parse_nested(stripped: StrippedBlock) -> Result<Vec<HtmlNode>, ParseError> {
    let StrippedBlock { kind, text } = stripped;

    match kind {
        BlockKind::Quote => {
            let nested = parse_blocks(&text)?;
            Ok(vec![ParentNode::wrap("blockquote", nested)?.into()])
        }
        BlockKind::UnorderedList => Ok(vec![nested_list("ul", &text)?]),
        BlockKind::OrderedList => Ok(vec![nested_list("ol", &text)?]),
        BlockKind::Paragraph | BlockKind::Heading | BlockKind::Code => parse_blocks(&text),
    }
}

fn parse_flat(stripped: StrippedBlock) -> Result<HtmlNode, ParseError> {
    let StrippedBlock { kind, text } = stripped;

    let node = match kind {
        // Heading level is not carried through; every heading is an h1
        BlockKind::Heading => ParentNode::wrap("h1", inline_nodes(&text)?)?,
        BlockKind::Code => {
            let code = ParentNode::wrap("code", inline_nodes(&text)?)?;
            ParentNode::wrap("pre", vec![code.into()])?
        }
        BlockKind::Quote => ParentNode::wrap("blockquote", inline_nodes(&text)?)?,
        BlockKind::UnorderedList => flat_list("ul", &text)?,
        BlockKind::OrderedList => flat_list("ol", &text)?,
        BlockKind::Paragraph => ParentNode::wrap("p", inline_nodes(&text)?)?,
    };

    Ok(node.into())
}

/// Re-parses every non-blank line as its own block inside an `li`.
fn nested_list(tag: &str, text: &str) -> Result<HtmlNode, ParseError> {
    let items = text
        .lines()
        .map(str::trim)
        // Blank separator lines are not items
        .filter(|line| !line.is_empty())
        .map(|line| -> Result<HtmlNode, ParseError> {
            Ok(ParentNode::wrap("li", parse_block(line)?)?.into())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::wrap(tag, items)?.into())
}

/// Tokenizes every line into an `li`.
fn flat_list(tag: &str, text: &str) -> Result<ParentNode, ParseError> {
    let items = text
        .lines()
        .map(|line| -> Result<HtmlNode, ParseError> {
            Ok(ParentNode::wrap("li", inline_nodes(line.trim())?)?.into())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::wrap(tag, items)?)
}

fn inline_nodes(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    tokenize(text)?
        .into_iter()
        .map(|span| span_to_node(span).map_err(ParseError::from))
        .collect()
}

/// Maps a text span to the leaf node that renders it.
pub fn span_to_node(span: TextSpan) -> Result<HtmlNode, NodeError> {
    let TextSpan { text, kind } = span;

    let leaf = match kind {
        SpanKind::Plain => LeafNode::text(text)?,
        SpanKind::Bold => LeafNode::new(Some("b"), text, Attributes::new())?,
        SpanKind::Italic => LeafNode::new(Some("i"), text, Attributes::new())?,
        SpanKind::Code => LeafNode::new(Some("code"), text, Attributes::new())?,
        SpanKind::Link { url } => {
            LeafNode::new(Some("a"), text, Attributes::new().with("href", url))?
        }
        SpanKind::Image { url } => {
            LeafNode::void("img", Attributes::new().with("src", url).with("alt", text))?
        }
    };

    Ok(leaf.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(md: &str) -> String {
        markdown_to_html(md).unwrap()
    }

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            html("# Hi\n\nThis is **bold** and *italic* and `code`."),
            "<div><h1>Hi</h1><p>This is <b>bold</b> and <i>italic</i> and <code>code</code>.</p></div>"
        );
    }

    #[test]
    fn image_paragraph() {
        assert_eq!(
            html("![alt](img.png)"),
            r#"<div><p><img src="img.png" alt="alt"></p></div>"#
        );
    }

    #[test]
    fn every_heading_level_is_h1() {
        assert_eq!(html("### Third"), "<div><h1>Third</h1></div>");
    }

    #[test]
    fn code_block_wraps_pre_and_code() {
        assert_eq!(
            html("```\nlet x = 1;\n```"),
            "<div><pre><code>let x = 1;</code></pre></div>"
        );
    }

    #[test]
    fn flat_quote() {
        assert_eq!(
            html("> quoted **text**\n> more"),
            "<div><blockquote>quoted <b>text</b>\nmore</blockquote></div>"
        );
    }

    #[test]
    fn flat_lists_tokenize_each_item() {
        assert_eq!(
            html("- one\n- *two*"),
            "<div><ul><li>one</li><li><i>two</i></li></ul></div>"
        );
        assert_eq!(
            html("1. [a](a.html)\n2. b"),
            r#"<div><ol><li><a href="a.html">a</a></li><li>b</li></ol></div>"#
        );
    }

    #[test]
    fn multi_paragraph_quote_nests_blocks() {
        assert_eq!(
            html("> first\n> \n> second"),
            "<div><blockquote><p>first</p><p>second</p></blockquote></div>"
        );
    }

    #[test]
    fn nested_quote_inside_quote() {
        assert_eq!(
            html("> > a\n> > \n> > b\n> \n> c"),
            "<div><blockquote><blockquote><p>a</p><p>b</p></blockquote><p>c</p></blockquote></div>"
        );
    }

    #[test]
    fn list_with_blank_item_reparses_each_line() {
        assert_eq!(
            html("- # Big\n- \n- small"),
            "<div><ul><li><h1>Big</h1></li><li><p>small</p></li></ul></div>"
        );
    }

    #[test]
    fn ordered_list_with_blank_item_reparses_each_line() {
        assert_eq!(
            html("1. a\n2. \n3. **b**"),
            "<div><ol><li><p>a</p></li><li><p><b>b</b></p></li></ol></div>"
        );
    }

    #[test]
    fn trailing_blank_lines_are_ignored() {
        assert_eq!(html("text\n\n\n"), "<div><p>text</p></div>");
    }

    #[test]
    fn empty_document_has_no_children() {
        assert_eq!(
            render(""),
            Err(ParseError::Node(NodeError::EmptyChildren("div".to_string())))
        );
    }

    #[test]
    fn unbalanced_delimiter_propagates() {
        assert!(matches!(
            render("# ok\n\nbroken **bold"),
            Err(ParseError::Inline(_))
        ));
    }

    #[test]
    fn link_without_label_fails() {
        assert_eq!(
            render("[](nowhere)"),
            Err(ParseError::Node(NodeError::EmptyValue))
        );
    }

    #[test]
    fn span_mapping() {
        let cases = [
            (TextSpan::plain("x"), "x"),
            (TextSpan::new("x", SpanKind::Bold), "<b>x</b>"),
            (TextSpan::new("x", SpanKind::Italic), "<i>x</i>"),
            (TextSpan::new("x", SpanKind::Code), "<code>x</code>"),
            (TextSpan::link("x", "u"), r#"<a href="u">x</a>"#),
            (TextSpan::image("x", "u"), r#"<img src="u" alt="x">"#),
        ];
        for (span, expected) in cases {
            assert_eq!(span_to_node(span).unwrap().to_html(), expected);
        }
    }
}
