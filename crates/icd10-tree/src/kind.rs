//! Node kinds of the ICD-10 classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role of a node within the classification forest.
///
/// Every node carries exactly one kind, fixed at construction. The kind
/// determines where a node can sit in the hierarchy: chapters are roots,
/// blocks group categories inside a chapter, and subcategories refine a
/// category.
///
/// The serialized form uses lowercase tags (`"chapter"`, `"block"`, ...),
/// matching the kind attribute of the upstream classification data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    /// Top-level grouping, identified by a Roman numeral (e.g. `VIII`).
    Chapter,
    /// Grouping of categories, identified by a code range (e.g. `H60-H62`).
    Block,
    /// Three-character classification unit (e.g. `H60`).
    Category,
    /// Finer-grained unit under a category, written with a separator after
    /// the third character (e.g. `H60.1`).
    Subcategory,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodeKind::Chapter => "chapter",
            CodeKind::Block => "block",
            CodeKind::Category => "category",
            CodeKind::Subcategory => "subcategory",
        };
        f.write_str(name)
    }
}
