//! Region selection over sibling nodes
//!
//! A region is the run of siblings following a marker heading, up to the
//! next region heading of the same or a higher level (or the end of the
//! sequence). All functions return owned copies; the input is never touched.

use crate::models::{is_region_heading, MarkerKind, MarkerSet, Node};

/// Nodes strictly between the `kind` marker and the end of its region.
///
/// Returns an empty vector when the marker is absent.
pub fn between(nodes: &[Node], markers: &MarkerSet, kind: MarkerKind) -> Vec<Node> {
    let Some(start) = position_of(nodes, markers, kind) else {
        return Vec::new();
    };
    let depth = nodes[start].heading_depth().unwrap_or(1);

    let rest = &nodes[start + 1..];
    let end = rest
        .iter()
        .position(|node| ends_region(node, markers, depth))
        .unwrap_or(rest.len());

    rest[..end].to_vec()
}

/// Nodes preceding the `kind` marker. Empty when the marker is absent.
pub fn before(nodes: &[Node], markers: &MarkerSet, kind: MarkerKind) -> Vec<Node> {
    match position_of(nodes, markers, kind) {
        Some(start) => nodes[..start].to_vec(),
        None => Vec::new(),
    }
}

/// Depth-first search for the first node (including `node` itself) matching `predicate`
pub fn find<'a, F>(node: &'a Node, predicate: F) -> Option<&'a Node>
where
    F: Fn(&Node) -> bool + Copy,
{
    if predicate(node) {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|child| find(child, predicate))
}

/// Partition `nodes` into groups separated by thematic breaks.
///
/// Breaks are dropped. There is always at least one group; leading, trailing
/// or doubled breaks produce empty groups.
pub fn split_on_thematic_break(nodes: &[Node]) -> Vec<Vec<Node>> {
    let mut groups = vec![Vec::new()];
    for node in nodes {
        if node.is_thematic_break() {
            groups.push(Vec::new());
        } else if let Some(current) = groups.last_mut() {
            current.push(node.clone());
        }
    }
    groups
}

fn position_of(nodes: &[Node], markers: &MarkerSet, kind: MarkerKind) -> Option<usize> {
    nodes
        .iter()
        .position(|node| markers.classify(node) == Some(kind))
}

fn ends_region(node: &Node, markers: &MarkerSet, depth: u8) -> bool {
    match node.heading_depth() {
        Some(d) if d <= depth => markers.classify(node).is_some() || is_region_heading(node),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Vec<Node> {
        vec![
            Node::heading(1, "--description--"),
            Node::paragraph("intro"),
            Node::heading(1, "--questions--"),
            Node::heading(2, "--text--"),
            Node::paragraph("prompt"),
            Node::heading(2, "--answers--"),
            Node::paragraph("a"),
            Node::heading(3, "--feedback--"),
            Node::paragraph("why"),
            Node::heading(2, "--video-solution--"),
            Node::paragraph("1"),
            Node::heading(1, "--hints--"),
            Node::paragraph("hint"),
        ]
    }

    #[test]
    fn test_between_stops_at_same_level_marker() {
        let markers = MarkerSet::default();
        let region = between(&doc(), &markers, MarkerKind::Questions);
        assert_eq!(region.len(), 8);
        assert_eq!(region[0], Node::heading(2, "--text--"));
        assert_eq!(region[7], Node::paragraph("1"));
    }

    #[test]
    fn test_between_skips_deeper_markers() {
        let markers = MarkerSet::default();
        let answers = between(&doc(), &markers, MarkerKind::Answers);
        assert_eq!(
            answers,
            vec![
                Node::paragraph("a"),
                Node::heading(3, "--feedback--"),
                Node::paragraph("why"),
            ]
        );
    }

    #[test]
    fn test_between_runs_to_end() {
        let markers = MarkerSet::default();
        let nodes = vec![Node::heading(2, "--video-solution--"), Node::paragraph("3")];
        assert_eq!(
            between(&nodes, &markers, MarkerKind::VideoSolution),
            vec![Node::paragraph("3")]
        );
    }

    #[test]
    fn test_between_ignores_plain_headings() {
        let markers = MarkerSet::default();
        let nodes = vec![
            Node::heading(2, "--text--"),
            Node::heading(2, "Not a marker"),
            Node::paragraph("body"),
        ];
        assert_eq!(between(&nodes, &markers, MarkerKind::Text).len(), 2);
    }

    #[test]
    fn test_missing_marker_is_empty() {
        let markers = MarkerSet::default();
        let nodes = vec![Node::paragraph("x")];
        assert!(between(&nodes, &markers, MarkerKind::Questions).is_empty());
        assert!(before(&nodes, &markers, MarkerKind::Feedback).is_empty());
    }

    #[test]
    fn test_before() {
        let markers = MarkerSet::default();
        let nodes = vec![
            Node::paragraph("answer"),
            Node::heading(3, "--feedback--"),
            Node::paragraph("feedback"),
        ];
        assert_eq!(
            before(&nodes, &markers, MarkerKind::Feedback),
            vec![Node::paragraph("answer")]
        );
    }

    #[test]
    fn test_find_is_depth_first() {
        let tree = Node::root(doc());
        let found = find(&tree, |n| n.value() == Some("why"));
        assert_eq!(found, Some(&Node::text("why")));
        assert!(find(&tree, |n| n.value() == Some("nope")).is_none());
    }

    #[test]
    fn test_split_on_thematic_break() {
        let nodes = vec![
            Node::paragraph("1"),
            Node::ThematicBreak,
            Node::paragraph("2"),
            Node::paragraph("2b"),
        ];
        let groups = split_on_thematic_break(&nodes);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], vec![Node::paragraph("1")]);
        assert_eq!(groups[1].len(), 2);
    }

    #[test]
    fn test_split_edge_breaks() {
        assert_eq!(split_on_thematic_break(&[]), vec![Vec::<Node>::new()]);
        let groups = split_on_thematic_break(&[Node::paragraph("1"), Node::ThematicBreak]);
        assert_eq!(groups.len(), 2);
        assert!(groups[1].is_empty());
    }
}
