//! Behavior of the insight merge against the knowledge tree.

use std::borrow::Cow;

use mentor_core::entities::{InsightRecord, KnowledgeNode};
use mentor_core::enums::NodeKind;
use mentor_map::traverse::{self, find, node_count, parent_of};
use mentor_map::{TreeMerger, curriculum, merge_insights};
use pretty_assertions::assert_eq;

fn base() -> KnowledgeNode {
    KnowledgeNode::new("toan-12", "Toán 12", NodeKind::Topic).with_children([
        KnowledgeNode::new("giai-tich-12", "Giải tích 12", NodeKind::Subtopic),
        KnowledgeNode::new("hinh-hoc-12", "Hình học 12", NodeKind::Subtopic)
            .with_children([KnowledgeNode::new("vecto", "Vectơ", NodeKind::Concept)]),
    ])
}

fn insight(id: &str, parent: Option<&str>, label: &str) -> InsightRecord {
    InsightRecord::new(id, parent, label, NodeKind::Concept)
}

fn child_ids(node: &KnowledgeNode) -> Vec<&str> {
    node.children.iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn empty_insights_borrow_base() {
    let base = base();
    let merged = merge_insights(&base, &[]);
    assert!(matches!(merged, Cow::Borrowed(_)));
    assert!(std::ptr::eq(&*merged, &base));
}

#[test]
fn base_is_not_mutated() {
    let base = base();
    let snapshot = base.clone();
    let _ = merge_insights(
        &base,
        &[
            insight("n1", Some("giai-tich-12"), "N1"),
            insight("vecto", Some("giai-tich-12"), "moved"),
            insight("toan-12", None, "renamed root"),
        ],
    );
    assert_eq!(base, snapshot);
}

#[test]
fn insight_attaches_under_existing_parent() {
    let base = base();
    let merged = merge_insights(&base, &[insight("n1", Some("vecto"), "N1")]);
    assert_eq!(parent_of(&merged, "n1").map(|p| p.id.as_str()), Some("vecto"));
}

#[test]
fn unknown_parent_falls_back_to_root() {
    let base = base();
    let merged = merge_insights(&base, &[insight("n1", Some("does-not-exist-7f3a"), "N1")]);
    assert_eq!(child_ids(&merged), vec!["giai-tich-12", "hinh-hoc-12", "n1"]);
}

#[test]
fn null_parent_attaches_to_root() {
    let base = base();
    let merged = merge_insights(&base, &[insight("n1", None, "N1")]);
    assert_eq!(merged.children.last().map(|c| c.id.as_str()), Some("n1"));
}

#[test]
fn several_orphans_each_land_on_root() {
    let base = base();
    let merged = merge_insights(
        &base,
        &[
            insight("o1", Some("ghost"), "O1"),
            insight("o2", Some("ghost"), "O2"),
        ],
    );
    assert_eq!(
        child_ids(&merged),
        vec!["giai-tich-12", "hinh-hoc-12", "o1", "o2"]
    );
}

#[test]
fn dangling_parent_replaces_same_id_root_child_in_place() {
    let base = base();
    let merged = merge_insights(
        &base,
        &[
            insight("x", Some("ghost"), "first"),
            insight("y", Some("ghost"), "Y"),
            insight("x", Some("ghost"), "second"),
        ],
    );
    assert_eq!(
        child_ids(&merged),
        vec!["giai-tich-12", "hinh-hoc-12", "x", "y"]
    );
    assert_eq!(find(&merged, "x").unwrap().label, "second");
}

#[test]
fn insight_without_color_gets_default_highlight() {
    let base = base();
    let merged = merge_insights(&base, &[insight("n1", None, "N1")]);
    assert_eq!(
        find(&merged, "n1").unwrap().color.as_deref(),
        Some(mentor_map::merge::DEFAULT_HIGHLIGHT_COLOR)
    );
    assert_eq!(mentor_map::merge::DEFAULT_HIGHLIGHT_COLOR, "#fcd34d");
}

#[test]
fn same_id_same_parent_replaces_in_place() {
    let base = base();
    let first = merge_insights(
        &base,
        &[
            insight("n1", Some("giai-tich-12"), "first"),
            insight("n2", Some("giai-tich-12"), "sibling"),
        ],
    )
    .into_owned();
    let second = merge_insights(&first, &[insight("n1", Some("giai-tich-12"), "second")]);

    let parent = find(&second, "giai-tich-12").unwrap();
    assert_eq!(child_ids(parent), vec!["n1", "n2"]);
    assert_eq!(parent.children[0].label, "second");
    assert_eq!(node_count(&second), node_count(&first));
}

#[test]
fn same_id_twice_in_one_batch_keeps_one_node() {
    let base = base();
    let merged = merge_insights(
        &base,
        &[
            insight("n1", Some("giai-tich-12"), "first"),
            insight("n1", Some("giai-tich-12"), "second"),
        ],
    );
    let parent = find(&merged, "giai-tich-12").unwrap();
    assert_eq!(parent.children.len(), 1);
    assert_eq!(parent.children[0].label, "second");
}

#[test]
fn end_to_end_scenario() {
    let base = KnowledgeNode::new("toan-12", "Toán 12", NodeKind::Topic).with_children([
        KnowledgeNode::new("giai-tich-12", "Giải tích 12", NodeKind::Subtopic),
    ]);

    let first = merge_insights(
        &base,
        &[insight("new-1", Some("giai-tich-12"), "Weak: limits")],
    )
    .into_owned();
    let parent = find(&first, "giai-tich-12").unwrap();
    assert_eq!(parent.children.len(), 1);
    let node = &parent.children[0];
    assert_eq!(node.id, "new-1");
    assert_eq!(node.label, "Weak: limits");
    assert_eq!(node.kind, NodeKind::Concept);
    assert!(node.children.is_empty());

    let second = merge_insights(
        &first,
        &[insight("new-1", Some("giai-tich-12"), "Updated label")],
    );
    let parent = find(&second, "giai-tich-12").unwrap();
    assert_eq!(parent.children.len(), 1);
    assert_eq!(parent.children[0].label, "Updated label");
}

#[test]
fn chained_insights_resolve_regardless_of_batch_order() {
    let base = base();
    let merged = merge_insights(
        &base,
        &[
            insight("grandchild", Some("child"), "GC"),
            insight("child", Some("giai-tich-12"), "C"),
        ],
    );
    assert_eq!(
        traverse::path_to(&merged, "grandchild"),
        vec!["toan-12", "giai-tich-12", "child", "grandchild"]
    );
}

#[test]
fn existing_id_under_other_parent_moves_and_keeps_children() {
    let base = base();
    let merged = merge_insights(&base, &[insight("hinh-hoc-12", Some("giai-tich-12"), "moved")]);

    assert_eq!(
        parent_of(&merged, "hinh-hoc-12").map(|p| p.id.as_str()),
        Some("giai-tich-12")
    );
    assert_eq!(child_ids(&merged), vec!["giai-tich-12"]);
    assert_eq!(
        parent_of(&merged, "vecto").map(|p| p.id.as_str()),
        Some("hinh-hoc-12")
    );
    assert_eq!(node_count(&merged), node_count(&base));
}

#[test]
fn replacing_static_node_keeps_its_children() {
    let base = base();
    let merged = merge_insights(&base, &[insight("hinh-hoc-12", None, "Geometry (weak)")]);
    let node = find(&merged, "hinh-hoc-12").unwrap();
    assert_eq!(node.label, "Geometry (weak)");
    assert_eq!(child_ids(node), vec!["vecto"]);
    assert_eq!(child_ids(&merged), vec!["giai-tich-12", "hinh-hoc-12"]);
}

#[test]
fn self_parent_attaches_to_root() {
    let base = base();
    let merged = merge_insights(&base, &[insight("loop", Some("loop"), "L")]);
    assert_eq!(merged.children.last().map(|c| c.id.as_str()), Some("loop"));
    assert_eq!(node_count(&merged), node_count(&base) + 1);
}

#[test]
fn insight_for_root_updates_root_fields() {
    let base = base();
    let merged = merge_insights(&base, &[insight("toan-12", None, "Math 12")]);
    assert_eq!(merged.label, "Math 12");
    assert_eq!(child_ids(&merged), vec!["giai-tich-12", "hinh-hoc-12"]);
}

#[test]
fn ids_stay_unique_after_merge() {
    let base = curriculum::grade_12();
    let merged = TreeMerger::new("#ff9800").merge(
        &base,
        &[
            insight("cuc-tri", Some("hinh-hoc-12"), "moved extrema"),
            insight("new-a", Some("cuc-tri"), "A"),
            insight("new-b", Some("ghost"), "B"),
            insight("new-a", Some("tiem-can"), "A again"),
        ],
    );
    assert!(curriculum::validate(&merged).is_ok());
    assert_eq!(
        parent_of(&merged, "new-a").map(|p| p.id.as_str()),
        Some("tiem-can")
    );
    assert_eq!(find(&merged, "new-b").unwrap().color.as_deref(), Some("#ff9800"));
}
