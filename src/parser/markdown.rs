//! Markdown front end
//!
//! Builds a [`Node`] tree from `pulldown-cmark` events. Adjacent text runs
//! and soft breaks are folded into a single `Text` value so that a marker
//! heading always carries its literal as one text node.

use crate::models::Node;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// Parse markdown source into a `Node::Root` tree.
///
/// # Example
/// ```
/// use challenge_parser::parser::parse_markdown;
/// use challenge_parser::models::Node;
///
/// let tree = parse_markdown("## --text--\n\nWhat is 1+1?\n");
/// assert_eq!(tree.children()[0], Node::heading(2, "--text--"));
/// assert_eq!(tree.children()[1], Node::paragraph("What is 1+1?"));
/// ```
pub fn parse_markdown(source: &str) -> Node {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);
    let mut builder = TreeBuilder::new();
    for event in parser {
        builder.push(event);
    }
    builder.finish()
}

/// An open element while events are being folded into a tree
enum Frame {
    Open(Node),
    /// Element this tree does not model; its children are spliced into the parent
    Transparent(Vec<Node>),
}

struct TreeBuilder {
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::Open(Node::root(Vec::new()))],
        }
    }

    fn push(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.stack.push(open_frame(tag)),
            Event::End(_) => self.close(),
            Event::Text(text) => self.add_text(&text),
            Event::Code(code) => self.append(Node::InlineCode {
                value: code.to_string(),
            }),
            Event::Html(html) => {
                if let Some(Frame::Open(Node::Html { value })) = self.stack.last_mut() {
                    value.push_str(&html);
                } else {
                    self.append(Node::Html {
                        value: html.to_string(),
                    });
                }
            }
            Event::InlineHtml(html) => self.append(Node::Html {
                value: html.to_string(),
            }),
            Event::SoftBreak => self.add_text("\n"),
            Event::HardBreak => self.append(Node::Break),
            Event::Rule => self.append(Node::ThematicBreak),
            // Footnotes, task markers and math are not modeled
            _ => {}
        }
    }

    fn close(&mut self) {
        // The root frame is never closed by an event
        if self.stack.len() < 2 {
            return;
        }
        match self.stack.pop() {
            Some(Frame::Open(node)) => self.append(finish_node(node)),
            Some(Frame::Transparent(children)) => {
                for child in children {
                    self.append(child);
                }
            }
            None => {}
        }
    }

    fn add_text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::Open(Node::Code { value, .. })) | Some(Frame::Open(Node::Html { value })) => {
                value.push_str(text)
            }
            Some(Frame::Open(Node::Image { alt, .. })) => alt.push_str(text),
            _ => self.append(Node::text(text)),
        }
    }

    fn append(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(Frame::Open(parent)) => {
                if let Node::Image { alt, .. } = parent {
                    alt.push_str(&node.plain_text());
                } else if let Some(children) = parent.children_mut() {
                    push_child(children, node);
                }
            }
            Some(Frame::Transparent(children)) => push_child(children, node),
            None => {}
        }
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close();
        }
        match self.stack.pop() {
            Some(Frame::Open(root)) => root,
            Some(Frame::Transparent(children)) => Node::root(children),
            None => Node::root(Vec::new()),
        }
    }
}

/// Append a child, merging consecutive text runs
fn push_child(children: &mut Vec<Node>, node: Node) {
    if let Node::Text { value } = &node {
        if let Some(Node::Text { value: last }) = children.last_mut() {
            last.push_str(value);
            return;
        }
    }
    children.push(node);
}

fn open_frame(tag: Tag<'_>) -> Frame {
    let node = match tag {
        Tag::Paragraph => Node::Paragraph {
            children: Vec::new(),
        },
        Tag::Heading { level, .. } => Node::Heading {
            depth: heading_depth(level),
            children: Vec::new(),
        },
        Tag::BlockQuote(_) => Node::Blockquote {
            children: Vec::new(),
        },
        Tag::CodeBlock(kind) => Node::Code {
            lang: match kind {
                CodeBlockKind::Fenced(info) => info
                    .split_whitespace()
                    .next()
                    .map(|lang| lang.to_string()),
                CodeBlockKind::Indented => None,
            },
            value: String::new(),
        },
        Tag::HtmlBlock => Node::Html {
            value: String::new(),
        },
        Tag::List(start) => Node::List {
            ordered: start.is_some(),
            start,
            children: Vec::new(),
        },
        Tag::Item => Node::ListItem {
            children: Vec::new(),
        },
        Tag::Emphasis => Node::Emphasis {
            children: Vec::new(),
        },
        Tag::Strong => Node::Strong {
            children: Vec::new(),
        },
        Tag::Strikethrough => Node::Delete {
            children: Vec::new(),
        },
        Tag::Link {
            dest_url, title, ..
        } => Node::Link {
            url: dest_url.to_string(),
            title: non_empty(&title),
            children: Vec::new(),
        },
        Tag::Image {
            dest_url, title, ..
        } => Node::Image {
            url: dest_url.to_string(),
            title: non_empty(&title),
            alt: String::new(),
        },
        _ => return Frame::Transparent(Vec::new()),
    };
    Frame::Open(node)
}

/// Trim the trailing line break block-level literals carry in the event stream
fn finish_node(node: Node) -> Node {
    match node {
        Node::Code { lang, value } => Node::Code {
            lang,
            value: value.trim_end_matches('\n').to_string(),
        },
        Node::Html { value } => Node::Html {
            value: value.trim_end_matches('\n').to_string(),
        },
        other => other,
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
