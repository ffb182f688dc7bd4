//! The mastery threshold is identical on the canvas, the outline, and the detail card.

use mentor_core::entities::{KnowledgeNode, ProgressEntry};
use mentor_core::enums::{MasteryStatus, NodeKind};
use mentor_map::ProgressOverlay;
use mentor_map::view::{Expansion, node_detail, outline, radial_layout};
use rstest::rstest;

fn tree() -> KnowledgeNode {
    KnowledgeNode::new("root", "Root", NodeKind::Topic)
        .with_children([KnowledgeNode::new("n", "Node", NodeKind::Concept)])
}

fn overlay(score: Option<f64>) -> ProgressOverlay {
    ProgressOverlay::from_entries(
        score.map(|s| ProgressEntry::new("n", s, s).expect("valid score")),
    )
}

#[rstest]
#[case(None, MasteryStatus::NotStarted)]
#[case(Some(0.0), MasteryStatus::NotStarted)]
#[case(Some(1.0), MasteryStatus::Learning)]
#[case(Some(79.0), MasteryStatus::Learning)]
#[case(Some(80.0), MasteryStatus::Mastered)]
#[case(Some(100.0), MasteryStatus::Mastered)]
fn every_surface_agrees(#[case] score: Option<f64>, #[case] expected: MasteryStatus) {
    let tree = tree();
    let progress = overlay(score);

    let canvas = radial_layout(&tree, &progress, &Expansion::all(), 200.0);
    let placed = canvas.node("n").expect("node placed");
    assert_eq!(placed.status, expected, "radial canvas");
    assert_eq!(placed.color, expected.color(), "radial canvas color");

    let rows = outline(&tree, &progress, &Expansion::all());
    let row = rows.iter().find(|r| r.id == "n").expect("row present");
    assert_eq!(row.status, expected, "learning path outline");

    let detail = node_detail(&tree, "n", &progress).expect("detail");
    assert_eq!(detail.status, expected, "node detail card");
    assert_eq!(detail.status_label, expected.label(), "node detail label");
}
