//! HTML rendering of node sequences
//!
//! Nodes are turned back into a `pulldown-cmark` event stream and written
//! with its HTML writer, so output matches what the markdown would render
//! to directly. The trailing newline after the last block is dropped.

use crate::models::Node;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, HeadingLevel, LinkType, Tag};

/// Render a sequence of sibling nodes to an HTML string.
///
/// # Example
/// ```
/// use challenge_parser::models::Node;
/// use challenge_parser::parser::render;
///
/// let html = render(&[Node::paragraph("a < b"), Node::paragraph("c")]);
/// assert_eq!(html, "<p>a &lt; b</p>\n<p>c</p>");
/// ```
pub fn render(nodes: &[Node]) -> String {
    let mut events = Vec::new();
    for node in nodes {
        push_events(node, true, &mut events);
    }

    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out.truncate(out.trim_end_matches('\n').len());
    out
}

fn is_block(node: &Node) -> bool {
    matches!(
        node,
        Node::Root { .. }
            | Node::Heading { .. }
            | Node::Paragraph { .. }
            | Node::ThematicBreak
            | Node::Code { .. }
            | Node::List { .. }
            | Node::ListItem { .. }
            | Node::Blockquote { .. }
    )
}

/// Append the events for `node`. `block` is true when the parent holds flow
/// content, which decides whether raw HTML is a block or inline.
fn push_events<'a>(node: &'a Node, block: bool, events: &mut Vec<Event<'a>>) {
    match node {
        Node::Root { children } => {
            for child in children {
                push_events(child, true, events);
            }
        }
        Node::Heading { depth, children } => {
            let level = HeadingLevel::try_from(usize::from(*depth)).unwrap_or(HeadingLevel::H6);
            let tag = Tag::Heading {
                level,
                id: None,
                classes: Vec::new(),
                attrs: Vec::new(),
            };
            wrap(tag, children, false, events);
        }
        Node::Paragraph { children } => wrap(Tag::Paragraph, children, false, events),
        Node::Text { value } => events.push(Event::Text(CowStr::Borrowed(value))),
        Node::ThematicBreak => events.push(Event::Rule),
        Node::Emphasis { children } => wrap(Tag::Emphasis, children, false, events),
        Node::Strong { children } => wrap(Tag::Strong, children, false, events),
        Node::Delete { children } => wrap(Tag::Strikethrough, children, false, events),
        Node::InlineCode { value } => events.push(Event::Code(CowStr::Borrowed(value))),
        Node::Code { lang, value } => {
            let kind = match lang {
                Some(lang) => CodeBlockKind::Fenced(CowStr::Borrowed(lang)),
                None => CodeBlockKind::Indented,
            };
            let tag = Tag::CodeBlock(kind);
            let end = tag.to_end();
            events.push(Event::Start(tag));
            if !value.is_empty() {
                events.push(Event::Text(CowStr::from(format!("{}\n", value))));
            }
            events.push(Event::End(end));
        }
        Node::List {
            ordered,
            start,
            children,
        } => {
            let start = if *ordered { Some(start.unwrap_or(1)) } else { None };
            wrap(Tag::List(start), children, true, events);
        }
        Node::ListItem { children } => {
            // Tight items hold inline content directly
            let flow = children.iter().any(is_block);
            wrap(Tag::Item, children, flow, events);
        }
        Node::Blockquote { children } => wrap(Tag::BlockQuote(None), children, true, events),
        Node::Link {
            url,
            title,
            children,
        } => {
            let tag = Tag::Link {
                link_type: LinkType::Inline,
                dest_url: CowStr::Borrowed(url),
                title: CowStr::Borrowed(title.as_deref().unwrap_or_default()),
                id: CowStr::Borrowed(""),
            };
            wrap(tag, children, false, events);
        }
        Node::Image { url, title, alt } => {
            let tag = Tag::Image {
                link_type: LinkType::Inline,
                dest_url: CowStr::Borrowed(url),
                title: CowStr::Borrowed(title.as_deref().unwrap_or_default()),
                id: CowStr::Borrowed(""),
            };
            let end = tag.to_end();
            events.push(Event::Start(tag));
            events.push(Event::Text(CowStr::Borrowed(alt)));
            events.push(Event::End(end));
        }
        Node::Break => events.push(Event::HardBreak),
        Node::Html { value } if block => {
            let tag = Tag::HtmlBlock;
            let end = tag.to_end();
            events.push(Event::Start(tag));
            events.push(Event::Html(CowStr::from(format!("{}\n", value))));
            events.push(Event::End(end));
        }
        Node::Html { value } => events.push(Event::InlineHtml(CowStr::Borrowed(value))),
    }
}

fn wrap<'a>(tag: Tag<'a>, children: &'a [Node], block: bool, events: &mut Vec<Event<'a>>) {
    let end = tag.to_end();
    events.push(Event::Start(tag));
    for child in children {
        push_events(child, block, events);
    }
    events.push(Event::End(end));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_markdown;
    use pulldown_cmark::{Options, Parser};

    fn md(source: &str) -> String {
        render(parse_markdown(source).children())
    }

    /// Direct pulldown-cmark output for the same source
    fn direct(source: &str) -> String {
        let mut out = String::new();
        html::push_html(
            &mut out,
            Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH),
        );
        out.trim_end_matches('\n').to_string()
    }

    #[test]
    fn test_single_paragraph() {
        assert_eq!(md("What is 1+1?"), "<p>What is 1+1?</p>");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_blocks_joined_with_newline() {
        assert_eq!(md("one\n\ntwo\n"), "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn test_inline_markup() {
        assert_eq!(
            md("Use `<div>` and **bold** or _em_ ~~gone~~"),
            "<p>Use <code>&lt;div&gt;</code> and <strong>bold</strong> or <em>em</em> <del>gone</del></p>"
        );
    }

    #[test]
    fn test_code_block() {
        assert_eq!(
            md("```html\n<p>x</p>\n```\n"),
            "<pre><code class=\"language-html\">&lt;p&gt;x&lt;/p&gt;\n</code></pre>"
        );
    }

    #[test]
    fn test_empty_code_block() {
        assert_eq!(md("```\n```\n"), "<pre><code></code></pre>");
    }

    #[test]
    fn test_tight_list() {
        assert_eq!(md("- a\n- b\n"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    }

    #[test]
    fn test_nested_list() {
        assert_eq!(
            md("- a\n  - b\n"),
            "<ul>\n<li>a\n<ul>\n<li>b</li>\n</ul>\n</li>\n</ul>"
        );
    }

    #[test]
    fn test_ordered_list_start() {
        assert_eq!(md("2. b\n3. c\n"), "<ol start=\"2\">\n<li>b</li>\n<li>c</li>\n</ol>");
    }

    #[test]
    fn test_link_and_image() {
        assert_eq!(
            md("[a](https://a.dev?x=1&y=2) ![cat](c.png \"Cat\")"),
            "<p><a href=\"https://a.dev?x=1&amp;y=2\">a</a> <img src=\"c.png\" alt=\"cat\" title=\"Cat\" /></p>"
        );
    }

    #[test]
    fn test_hard_break_and_rule() {
        assert_eq!(md("a\\\nb"), "<p>a<br />\nb</p>");
        assert_eq!(md("a\n\n***\n\nb"), "<p>a</p>\n<hr />\n<p>b</p>");
    }

    #[test]
    fn test_matches_direct_rendering() {
        let sources = [
            "Say \"hi\" & <b>wave</b>\n",
            "- a\n  - b\n",
            "```\n```\n",
            "> quoted\n>\n> twice\n",
            "1. one\n\n2. two\n",
            "<div>\nraw\n</div>\n\nafter\n",
            "line one\nline two\n",
            "# Title\n\n    indented code\n",
        ];
        for source in sources {
            assert_eq!(md(source), direct(source), "source {:?}", source);
        }
    }
}
