//! The authored curriculum tree and loading of custom trees.

use std::collections::HashSet;
use std::path::Path;

use mentor_core::entities::KnowledgeNode;
use mentor_core::enums::NodeKind::{Concept, Subtopic, Topic};

use crate::error::TreeError;
use crate::traverse;

/// Id of the built-in curriculum root.
pub const ROOT_ID: &str = "toan-12";

/// Grade 12 mathematics, the tree the mind map ships with.
#[must_use]
pub fn grade_12() -> KnowledgeNode {
    KnowledgeNode::new(ROOT_ID, "Toán 12", Topic).with_children([
        KnowledgeNode::new("giai-tich-12", "Giải tích 12", Subtopic).with_children([
            KnowledgeNode::new("ung-dung-dao-ham", "Ứng dụng đạo hàm", Subtopic).with_children([
                KnowledgeNode::new("tinh-don-dieu", "Tính đơn điệu", Concept)
                    .with_description("Sign of f'(x) decides where f increases or decreases.")
                    .with_recommendations(["Build a sign table for f'(x)"]),
                KnowledgeNode::new("cuc-tri", "Cực trị", Concept)
                    .with_description("Local maxima and minima of a function.")
                    .with_recommendations([
                        "Apply the first derivative test",
                        "Check f''(x) at critical points",
                    ]),
                KnowledgeNode::new("max-min", "GTLN và GTNN", Concept)
                    .with_description("Largest and smallest values on an interval."),
                KnowledgeNode::new("tiem-can", "Tiệm cận", Concept)
                    .with_description("Horizontal and vertical asymptotes."),
            ]),
            KnowledgeNode::new("nguyen-ham-tich-phan", "Nguyên hàm và tích phân", Subtopic)
                .with_children([
                    KnowledgeNode::new("nguyen-ham", "Nguyên hàm", Concept),
                    KnowledgeNode::new("tich-phan", "Tích phân", Concept),
                    KnowledgeNode::new("ung-dung-tich-phan", "Ứng dụng tích phân", Concept)
                        .with_description("Areas and volumes of revolution."),
                ]),
        ]),
        KnowledgeNode::new("hinh-hoc-12", "Hình học 12", Subtopic).with_children([
            KnowledgeNode::new("toa-do-khong-gian", "Tọa độ trong không gian", Subtopic)
                .with_children([
                    KnowledgeNode::new("vecto-khong-gian", "Vectơ trong không gian", Concept),
                    KnowledgeNode::new("phuong-trinh-mat-phang", "Phương trình mặt phẳng", Concept),
                    KnowledgeNode::new(
                        "phuong-trinh-duong-thang",
                        "Phương trình đường thẳng",
                        Concept,
                    ),
                ]),
        ]),
        KnowledgeNode::new("thong-ke-xac-suat", "Thống kê và xác suất", Subtopic).with_children([
            KnowledgeNode::new("xac-suat-co-dieu-kien", "Xác suất có điều kiện", Concept),
            KnowledgeNode::new("so-dac-trung-mau-ghep-nhom", "Số đặc trưng mẫu ghép nhóm", Concept),
        ]),
    ])
}

/// Parse a tree document and check that every id is non-empty and unique.
///
/// # Errors
///
/// Returns `TreeError::Json` for malformed documents, `TreeError::EmptyId` or
/// `TreeError::DuplicateId` for trees that break the id invariant.
pub fn from_json_str(raw: &str) -> Result<KnowledgeNode, TreeError> {
    let tree: KnowledgeNode = serde_json::from_str(raw)?;
    validate(&tree)?;
    Ok(tree)
}

/// Read and parse a tree document from disk.
///
/// # Errors
///
/// Returns `TreeError::Io` if the file cannot be read, otherwise as
/// [`from_json_str`].
pub fn from_path(path: &Path) -> Result<KnowledgeNode, TreeError> {
    let raw = std::fs::read_to_string(path)?;
    from_json_str(&raw)
}

/// Check the id invariant over a whole tree.
///
/// # Errors
///
/// Returns the first violation found in pre-order.
pub fn validate(tree: &KnowledgeNode) -> Result<(), TreeError> {
    if tree.id.is_empty() {
        return Err(TreeError::EmptyId {
            parent: String::from("<root>"),
        });
    }
    let mut seen = HashSet::new();
    for (_, node) in traverse::preorder(tree) {
        if !seen.insert(node.id.as_str()) {
            return Err(TreeError::DuplicateId(node.id.clone()));
        }
        if node.children.iter().any(|child| child.id.is_empty()) {
            return Err(TreeError::EmptyId {
                parent: node.id.clone(),
            });
        }
    }
    Ok(())
}
