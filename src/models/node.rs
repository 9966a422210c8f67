use serde::{Deserialize, Serialize};

/// A node in a parsed markdown document tree.
///
/// The shape follows mdast: container nodes own their `children`, leaf nodes
/// carry a `value`. Serializes as `{"type": "heading", "depth": 2, ...}` so
/// trees can be dumped and inspected as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Root {
        children: Vec<Node>,
    },
    Heading {
        depth: u8,
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    Text {
        value: String,
    },
    ThematicBreak,
    Emphasis {
        children: Vec<Node>,
    },
    Strong {
        children: Vec<Node>,
    },
    Delete {
        children: Vec<Node>,
    },
    InlineCode {
        value: String,
    },
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        value: String,
    },
    List {
        ordered: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<u64>,
        children: Vec<Node>,
    },
    ListItem {
        children: Vec<Node>,
    },
    Blockquote {
        children: Vec<Node>,
    },
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        children: Vec<Node>,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        alt: String,
    },
    Break,
    Html {
        value: String,
    },
}

impl Node {
    /// Wrap a sequence of nodes in a fresh root.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    pub fn heading(depth: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            depth,
            children: vec![Node::text(text)],
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph {
            children: vec![Node::text(text)],
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Child nodes, or an empty slice for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children }
            | Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Blockquote { children }
            | Node::Link { children, .. } => children,
            Node::Text { .. }
            | Node::ThematicBreak
            | Node::InlineCode { .. }
            | Node::Code { .. }
            | Node::Image { .. }
            | Node::Break
            | Node::Html { .. } => &[],
        }
    }

    /// Mutable access to child nodes; `None` for leaves.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children }
            | Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Blockquote { children }
            | Node::Link { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Literal value carried by leaf nodes (`Text`, `InlineCode`, `Code`, `Html`).
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text { value }
            | Node::InlineCode { value }
            | Node::Code { value, .. }
            | Node::Html { value } => Some(value),
            _ => None,
        }
    }

    pub fn is_thematic_break(&self) -> bool {
        matches!(self, Node::ThematicBreak)
    }

    pub fn heading_depth(&self) -> Option<u8> {
        match self {
            Node::Heading { depth, .. } => Some(*depth),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Image { alt, .. } => out.push_str(alt),
        Node::Break => out.push('\n'),
        _ => {
            if let Some(value) = node.value() {
                out.push_str(value);
            }
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}
