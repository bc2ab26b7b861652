use insta::assert_snapshot;
use markdown_sitegen_engine::{
    HtmlNode, ParseError, extract_title, markdown_to_html, parse_block, render,
};

fn html(md: &str) -> String {
    markdown_to_html(md).unwrap()
}

#[test]
fn release_notes_page() {
    let md = "# Release notes\n\nVersion **2.0** ships *today*.\n\n- faster `render`\n- [changelog](/changes.html)\n\n1. download\n2. install\n";
    assert_snapshot!(html(md), @r#"<div><h1>Release notes</h1><p>Version <b>2.0</b> ships <i>today</i>.</p><ul><li>faster <code>render</code></li><li><a href="/changes.html">changelog</a></li></ul><ol><li>download</li><li>install</li></ol></div>"#);
}

#[test]
fn quote_with_paragraph_and_list() {
    let md = "> Intro\n> \n> - a\n> - b";
    assert_snapshot!(html(md), @"<div><blockquote><p>Intro</p><ul><li>a</li><li>b</li></ul></blockquote></div>");
}

#[test]
fn quote_inside_quote() {
    let md = "> Outer\n> \n> > Inner";
    assert_snapshot!(html(md), @"<div><blockquote><p>Outer</p><blockquote>Inner</blockquote></blockquote></div>");
}

#[test]
fn bullet_item_with_blank_item_splits_into_paragraphs() {
    let md = "- a\n- \n- b";
    assert_snapshot!(html(md), @"<div><ul><li><p>a</p></li><li><p>b</p></li></ul></div>");
}

#[test]
fn image_next_to_link() {
    let md = "![logo](/logo.png)[home](/)";
    assert_snapshot!(html(md), @r#"<div><p><img src="/logo.png" alt="logo"><a href="/">home</a></p></div>"#);
}

#[test]
fn single_block_parse() {
    let nodes = parse_block("## Sub *title*").unwrap();
    let rendered: Vec<String> = nodes.iter().map(HtmlNode::to_html).collect();
    assert_snapshot!(rendered.join(""), @"<h1>Sub <i>title</i></h1>");
}

#[test]
fn tree_structure_matches_blocks() {
    let root = render("# A\n\nb\n\n- c").unwrap();
    let tags: Vec<_> = root.children().iter().filter_map(HtmlNode::tag).collect();
    assert_eq!(root.tag(), Some("div"));
    assert_eq!(tags, vec!["h1", "p", "ul"]);
}

#[test]
fn unbalanced_markup_is_an_error() {
    let err = render("# Fine\n\nnot **fine").unwrap_err();
    assert!(matches!(err, ParseError::Inline(_)));
    assert_snapshot!(err.to_string(), @"invalid inline markdown: unbalanced `**` delimiter in: not **fine");
}

#[test]
fn title_comes_from_first_h1_line() {
    let md = "Preamble\n\n# The Title\n\n## Later";
    assert_eq!(extract_title(md).unwrap(), "The Title");
}

#[test]
fn link_and_image_attributes_are_readable() {
    let root = render("[docs](/docs.html) ![logo](/logo.png)").unwrap();
    let paragraph = &root.children()[0];
    let link = &paragraph.children()[0];
    let image = &paragraph.children()[2];

    assert_eq!(link.attributes().get("href"), Some("/docs.html"));
    assert_eq!(image.attributes().get("src"), Some("/logo.png"));
    assert_eq!(image.attributes().get("alt"), Some("logo"));
    assert_eq!(image.attributes().get("href"), None);
}
