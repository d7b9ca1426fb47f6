//! Global ordering queries over the flattened classification.
//!
//! The flattening is the pre-order traversal of the whole forest:
//! chapters in their fixed presentation order, depth-first, children in
//! document order. Both renderings of the list (dotted and dotless) are
//! computed once when the store is built; a code's ordinal is the arena
//! position of its node, so every lookup here is constant-time.

use crate::error::QueryResult;
use crate::store::Icd10;

impl Icd10 {
    /// Returns a copy of the full pre-order code list in canonical
    /// (dotted) form.
    pub fn get_all_codes(&self) -> Vec<String> {
        self.all_codes.clone()
    }

    /// Returns a copy of the full pre-order code list with the separator
    /// stripped.
    pub fn get_all_codes_without_dots(&self) -> Vec<String> {
        self.all_codes_no_dots.clone()
    }

    /// Returns the 0-based position of `code` in the flattened pre-order
    /// list.
    pub fn get_index(&self, code: &str) -> QueryResult<usize> {
        // The arena is filled in pre-order, so the node's slot is its
        // ordinal; every valid code is present by construction.
        let id = self.require(code)?;
        Ok(id.index())
    }

    /// Returns the code at the same ordinal position from the dotless
    /// list (`H60.1` -> `H601`; codes without a separator pass through).
    pub fn remove_dot(&self, code: &str) -> QueryResult<String> {
        Ok(self.all_codes_no_dots[self.get_index(code)?].clone())
    }

    /// Returns the code at the same ordinal position from the canonical
    /// dotted list (`H601` -> `H60.1`).
    pub fn add_dot(&self, code: &str) -> QueryResult<String> {
        Ok(self.all_codes[self.get_index(code)?].clone())
    }
}
