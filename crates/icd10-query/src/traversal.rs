//! Hierarchy traversal and relation queries.
//!
//! Everything here is fail-fast: an input that does not resolve after
//! separator normalization is reported as [`QueryError::UnknownCode`]
//! and no partial result is ever returned. Returned codes are always in
//! canonical form.
//!
//! [`QueryError::UnknownCode`]: crate::QueryError::UnknownCode

use icd10_tree::NodeId;

use crate::error::QueryResult;
use crate::store::Icd10;

impl Icd10 {
    /// Returns the description of `code`, verbatim from the source data.
    pub fn get_description(&self, code: &str) -> QueryResult<&str> {
        let id = self.require(code)?;
        Ok(self.forest.node(id).description())
    }

    /// Returns the canonical code of the parent, `None` for chapters.
    pub fn get_parent(&self, code: &str) -> QueryResult<Option<String>> {
        let id = self.require(code)?;
        Ok(self
            .forest
            .node(id)
            .parent()
            .map(|parent| self.forest.node(parent).code().to_string()))
    }

    /// Returns the immediate children in document order; empty for
    /// leaves.
    pub fn get_children(&self, code: &str) -> QueryResult<Vec<String>> {
        let id = self.require(code)?;
        Ok(self
            .forest
            .node(id)
            .children()
            .iter()
            .map(|&child| self.forest.node(child).code().to_string())
            .collect())
    }

    /// True iff `code` resolves to a node without children.
    pub fn is_leaf(&self, code: &str) -> QueryResult<bool> {
        let id = self.require(code)?;
        Ok(self.forest.node(id).is_leaf())
    }

    /// Returns the chain of ancestors, nearest first, ending at the root
    /// chapter. Empty for chapters.
    pub fn get_ancestors(&self, code: &str) -> QueryResult<Vec<String>> {
        let id = self.require(code)?;
        let mut ancestors = Vec::new();
        let mut current = self.forest.node(id).parent();
        while let Some(parent) = current {
            let node = self.forest.node(parent);
            ancestors.push(node.code().to_string());
            current = node.parent();
        }
        Ok(ancestors)
    }

    /// Returns every node below `code` in pre-order: each parent before
    /// its own descendants, siblings in document order. Empty for leaves.
    pub fn get_descendants(&self, code: &str) -> QueryResult<Vec<String>> {
        let id = self.require(code)?;
        let mut descendants = Vec::new();
        // Explicit worklist; pushed in reverse so document order pops
        // first.
        let mut stack: Vec<NodeId> = self
            .forest
            .node(id)
            .children()
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(current) = stack.pop() {
            let node = self.forest.node(current);
            descendants.push(node.code().to_string());
            stack.extend(node.children().iter().rev());
        }
        Ok(descendants)
    }

    /// True iff `a` is a proper ancestor of `b`.
    ///
    /// A node is never its own ancestor, even when the two codes are
    /// different writings of the same node.
    pub fn is_ancestor(&self, a: &str, b: &str) -> QueryResult<bool> {
        let a_id = self.require(a)?;
        let b_id = self.require(b)?;
        if a_id == b_id {
            return Ok(false);
        }
        let mut current = self.forest.node(b_id).parent();
        while let Some(parent) = current {
            if parent == a_id {
                return Ok(true);
            }
            current = self.forest.node(parent).parent();
        }
        Ok(false)
    }

    /// True iff `a` is a proper descendant of `b`; the mirror of
    /// [`is_ancestor`](Self::is_ancestor).
    pub fn is_descendant(&self, a: &str, b: &str) -> QueryResult<bool> {
        self.is_ancestor(b, a)
    }

    /// Returns the nearest node that lies on both codes' own-plus-ancestor
    /// chains; a code counts as its own nearest common ancestor when one
    /// input subsumes the other. `None` when the codes sit under
    /// different chapters.
    pub fn get_nearest_common_ancestor(&self, a: &str, b: &str) -> QueryResult<Option<String>> {
        let chain_a = self.chain(self.require(a)?);
        let chain_b = self.chain(self.require(b)?);
        let (longer, shorter) = if chain_b.len() > chain_a.len() {
            (chain_b, chain_a)
        } else {
            (chain_a, chain_b)
        };
        for id in longer {
            if shorter.contains(&id) {
                return Ok(Some(self.forest.node(id).code().to_string()));
            }
        }
        Ok(None)
    }

    /// Own-plus-ancestors chain, nearest first.
    fn chain(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = vec![id];
        let mut current = self.forest.node(id).parent();
        while let Some(parent) = current {
            chain.push(parent);
            current = self.forest.node(parent).parent();
        }
        chain
    }
}
