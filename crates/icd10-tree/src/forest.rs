//! The in-memory classification forest.
//!
//! This module materializes the pre-parsed serialized nodes into the
//! immutable forest every query runs against: arena-owned nodes, ordered
//! chapter roots, and the code-to-node name index. The forest is built
//! once at initialization and never mutated, so it can be shared across
//! any number of concurrent readers without locking.

use std::collections::HashMap;

use tracing::info;

use crate::kind::CodeKind;
use crate::raw::RawCode;

/// Identifier of a node within a [`CodeForest`].
///
/// `NodeId`s are plain arena indices: cheap to copy, only meaningful for
/// the forest that produced them. Because the arena is filled in
/// pre-order, a node's id doubles as its position in the flattened
/// pre-order code list (see [`NodeId::index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in pre-order over the whole forest.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One entry of the classification tree.
#[derive(Debug, Clone)]
pub struct CodeNode {
    code: String,
    description: String,
    kind: CodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl CodeNode {
    /// Code identifier in canonical form.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description, verbatim from the source data.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Node kind.
    pub fn kind(&self) -> CodeKind {
        self.kind
    }

    /// Owning node, `None` for chapters.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Immediate children in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The immutable in-memory classification forest.
///
/// Nodes live in a single arena filled strictly in pre-order: every node
/// precedes its descendants, subtrees appear in document order, and
/// chapters appear in their fixed presentation order. The arena position
/// of a node is therefore its global pre-order ordinal; positional
/// queries rely on this invariant.
///
/// # Example
///
/// ```rust
/// use icd10_tree::{parse_forest, CodeForest, CodeKind};
///
/// let json = r#"[{
///     "type": "chapter",
///     "name": "VI",
///     "description": "Diseases of the nervous system",
///     "children": [
///         { "type": "block", "name": "G10-G14",
///           "description": "Systemic atrophies primarily affecting the central nervous system" }
///     ]
/// }]"#;
///
/// let forest = CodeForest::from_raw(parse_forest(json).unwrap());
/// let block = forest.resolve("G10-G14").unwrap();
/// assert_eq!(forest.node(block).kind(), CodeKind::Block);
/// assert_eq!(forest.node(block).parent(), forest.resolve("VI"));
/// ```
pub struct CodeForest {
    /// Arena of nodes in pre-order.
    nodes: Vec<CodeNode>,
    /// Chapter roots in presentation order.
    roots: Vec<NodeId>,
    /// Canonical code to node.
    index: HashMap<String, NodeId>,
}

impl CodeForest {
    /// Materializes the forest from its pre-parsed serialized form.
    ///
    /// The input is trusted, previously validated classification data, so
    /// construction itself cannot fail. Each node registers itself in the
    /// name index as it is built, before its children are attached.
    pub fn from_raw(roots: Vec<RawCode>) -> Self {
        let mut forest = CodeForest {
            nodes: Vec::new(),
            roots: Vec::with_capacity(roots.len()),
            index: HashMap::new(),
        };
        for raw in roots {
            let id = forest.insert(raw, None);
            forest.roots.push(id);
        }
        info!(
            nodes = forest.len(),
            chapters = forest.roots.len(),
            "built classification forest"
        );
        forest
    }

    fn insert(&mut self, raw: RawCode, parent: Option<NodeId>) -> NodeId {
        // The full classification is tens of thousands of nodes, well
        // within u32 range.
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(CodeNode {
            code: raw.name.clone(),
            description: raw.description,
            kind: raw.kind,
            parent,
            children: Vec::with_capacity(raw.children.len()),
        });
        self.index.insert(raw.name, id);
        for child in raw.children {
            let child_id = self.insert(child, Some(id));
            self.nodes[id.index()].children.push(child_id);
        }
        id
    }

    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the forest contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Chapter roots in presentation order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The node behind `id`.
    ///
    /// `id` must have been produced by this forest.
    pub fn node(&self, id: NodeId) -> &CodeNode {
        &self.nodes[id.index()]
    }

    /// Looks up a node by its exact canonical code.
    pub fn resolve(&self, code: &str) -> Option<NodeId> {
        self.index.get(code).copied()
    }

    /// Iterates over all nodes in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &CodeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: CodeKind, name: &str, children: Vec<RawCode>) -> RawCode {
        RawCode {
            kind,
            name: name.to_string(),
            description: format!("{name} description"),
            children,
        }
    }

    /// Two chapters:
    ///
    /// ```text
    /// I                 II
    /// └── A00-A09       └── B00-B09
    ///     ├── A00           └── B00
    ///     │   ├── A00.0
    ///     │   └── A00.1
    ///     └── A01
    /// ```
    fn sample_forest() -> CodeForest {
        CodeForest::from_raw(vec![
            raw(
                CodeKind::Chapter,
                "I",
                vec![raw(
                    CodeKind::Block,
                    "A00-A09",
                    vec![
                        raw(
                            CodeKind::Category,
                            "A00",
                            vec![
                                raw(CodeKind::Subcategory, "A00.0", vec![]),
                                raw(CodeKind::Subcategory, "A00.1", vec![]),
                            ],
                        ),
                        raw(CodeKind::Category, "A01", vec![]),
                    ],
                )],
            ),
            raw(
                CodeKind::Chapter,
                "II",
                vec![raw(
                    CodeKind::Block,
                    "B00-B09",
                    vec![raw(CodeKind::Category, "B00", vec![])],
                )],
            ),
        ])
    }

    #[test]
    fn test_build_counts_every_node() {
        let forest = sample_forest();
        assert_eq!(forest.len(), 9);
        assert!(!forest.is_empty());
        assert_eq!(forest.roots().len(), 2);
    }

    #[test]
    fn test_roots_keep_presentation_order() {
        let forest = sample_forest();
        let codes: Vec<&str> = forest
            .roots()
            .iter()
            .map(|&id| forest.node(id).code())
            .collect();
        assert_eq!(codes, vec!["I", "II"]);
    }

    #[test]
    fn test_name_index_covers_every_node() {
        let forest = sample_forest();
        for (id, node) in forest.iter() {
            assert_eq!(forest.resolve(node.code()), Some(id));
        }
        assert_eq!(forest.resolve("Z99"), None);
    }

    #[test]
    fn test_parent_links() {
        let forest = sample_forest();

        let chapter = forest.resolve("I").unwrap();
        let block = forest.resolve("A00-A09").unwrap();
        let category = forest.resolve("A00").unwrap();
        let subcategory = forest.resolve("A00.0").unwrap();

        assert_eq!(forest.node(chapter).parent(), None);
        assert_eq!(forest.node(block).parent(), Some(chapter));
        assert_eq!(forest.node(category).parent(), Some(block));
        assert_eq!(forest.node(subcategory).parent(), Some(category));
    }

    #[test]
    fn test_children_keep_document_order() {
        let forest = sample_forest();
        let block = forest.resolve("A00-A09").unwrap();
        let codes: Vec<&str> = forest
            .node(block)
            .children()
            .iter()
            .map(|&id| forest.node(id).code())
            .collect();
        assert_eq!(codes, vec!["A00", "A01"]);
    }

    #[test]
    fn test_arena_order_is_pre_order() {
        let forest = sample_forest();
        let codes: Vec<&str> = forest.iter().map(|(_, node)| node.code()).collect();
        assert_eq!(
            codes,
            vec!["I", "A00-A09", "A00", "A00.0", "A00.1", "A01", "II", "B00-B09", "B00"]
        );
    }

    #[test]
    fn test_node_id_index_matches_pre_order_position() {
        let forest = sample_forest();
        for (expected, (id, _)) in forest.iter().enumerate() {
            assert_eq!(id.index(), expected);
        }
        // A parent always precedes its children.
        for (id, node) in forest.iter() {
            for &child in node.children() {
                assert!(id.index() < child.index());
            }
        }
    }

    #[test]
    fn test_leaf_detection() {
        let forest = sample_forest();
        assert!(forest.node(forest.resolve("A00.0").unwrap()).is_leaf());
        assert!(forest.node(forest.resolve("A01").unwrap()).is_leaf());
        assert!(!forest.node(forest.resolve("A00").unwrap()).is_leaf());
        assert!(!forest.node(forest.resolve("I").unwrap()).is_leaf());
    }

    #[test]
    fn test_descriptions_kept_verbatim() {
        let forest = sample_forest();
        let id = forest.resolve("A00").unwrap();
        assert_eq!(forest.node(id).description(), "A00 description");
        assert_eq!(forest.node(id).kind(), CodeKind::Category);
    }

    #[test]
    fn test_empty_forest() {
        let forest = CodeForest::from_raw(vec![]);
        assert!(forest.is_empty());
        assert_eq!(forest.len(), 0);
        assert!(forest.roots().is_empty());
    }
}
