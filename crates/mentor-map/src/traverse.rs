//! Depth-first traversal and lookup over a [`KnowledgeNode`] tree.
//!
//! All searches are pre-order: a node is visited before its children, and
//! children in display order.

use mentor_core::entities::KnowledgeNode;

/// Pre-order iterator yielding `(depth, node)`; the root has depth 0.
pub struct Preorder<'a> {
    stack: Vec<(usize, &'a KnowledgeNode)>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a KnowledgeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

#[must_use]
pub fn preorder(root: &KnowledgeNode) -> Preorder<'_> {
    Preorder {
        stack: vec![(0, root)],
    }
}

/// First node with `id`, in pre-order.
#[must_use]
pub fn find<'a>(root: &'a KnowledgeNode, id: &str) -> Option<&'a KnowledgeNode> {
    preorder(root).map(|(_, node)| node).find(|node| node.id == id)
}

pub fn find_mut<'a>(node: &'a mut KnowledgeNode, id: &str) -> Option<&'a mut KnowledgeNode> {
    if node.id == id {
        return Some(node);
    }
    node.children
        .iter_mut()
        .find_map(|child| find_mut(child, id))
}

#[must_use]
pub fn contains(root: &KnowledgeNode, id: &str) -> bool {
    find(root, id).is_some()
}

/// The node whose direct children include `id`. `None` for the root or unknown ids.
#[must_use]
pub fn parent_of<'a>(root: &'a KnowledgeNode, id: &str) -> Option<&'a KnowledgeNode> {
    preorder(root)
        .map(|(_, node)| node)
        .find(|node| node.children.iter().any(|child| child.id == id))
}

/// Ids from the root down to `id`, inclusive. Empty if `id` is absent.
#[must_use]
pub fn path_to(root: &KnowledgeNode, id: &str) -> Vec<String> {
    fn walk(node: &KnowledgeNode, id: &str, path: &mut Vec<String>) -> bool {
        path.push(node.id.clone());
        if node.id == id || node.children.iter().any(|child| walk(child, id, path)) {
            return true;
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(root, id, &mut path);
    path
}

#[must_use]
pub fn node_count(root: &KnowledgeNode) -> usize {
    preorder(root).count()
}

/// Remove the first node with `id` below `root` and return it with its subtree.
///
/// The root itself is never detached.
pub fn detach(root: &mut KnowledgeNode, id: &str) -> Option<KnowledgeNode> {
    if let Some(position) = root.children.iter().position(|child| child.id == id) {
        return Some(root.children.remove(position));
    }
    root.children
        .iter_mut()
        .find_map(|child| detach(child, id))
}

#[cfg(test)]
mod tests {
    use mentor_core::enums::NodeKind;
    use pretty_assertions::assert_eq;

    use super::*;

    fn tree() -> KnowledgeNode {
        KnowledgeNode::new("root", "Root", NodeKind::Topic).with_children([
            KnowledgeNode::new("a", "A", NodeKind::Subtopic).with_children([
                KnowledgeNode::new("a1", "A1", NodeKind::Concept),
                KnowledgeNode::new("a2", "A2", NodeKind::Concept),
            ]),
            KnowledgeNode::new("b", "B", NodeKind::Subtopic),
        ])
    }

    #[test]
    fn preorder_visits_parent_before_children_in_order() {
        let tree = tree();
        let visited: Vec<(usize, &str)> = preorder(&tree)
            .map(|(depth, node)| (depth, node.id.as_str()))
            .collect();
        assert_eq!(
            visited,
            vec![(0, "root"), (1, "a"), (2, "a1"), (2, "a2"), (1, "b")]
        );
    }

    #[test]
    fn find_and_contains() {
        let tree = tree();
        assert_eq!(find(&tree, "a2").map(|n| n.label.as_str()), Some("A2"));
        assert!(contains(&tree, "root"));
        assert!(!contains(&tree, "missing"));
    }

    #[test]
    fn find_mut_allows_in_place_edit() {
        let mut tree = tree();
        find_mut(&mut tree, "b").unwrap().label = "Bee".into();
        assert_eq!(find(&tree, "b").unwrap().label, "Bee");
    }

    #[test]
    fn parent_lookup() {
        let tree = tree();
        assert_eq!(parent_of(&tree, "a1").map(|n| n.id.as_str()), Some("a"));
        assert!(parent_of(&tree, "root").is_none());
    }

    #[test]
    fn path_to_node() {
        let tree = tree();
        assert_eq!(path_to(&tree, "a2"), vec!["root", "a", "a2"]);
        assert!(path_to(&tree, "zzz").is_empty());
    }

    #[test]
    fn detach_removes_subtree() {
        let mut tree = tree();
        let detached = detach(&mut tree, "a").unwrap();
        assert_eq!(detached.children.len(), 2);
        assert_eq!(node_count(&tree), 2);
        assert!(detach(&mut tree, "root").is_none());
    }
}
