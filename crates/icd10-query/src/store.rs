//! The ICD-10 query store: construction, code normalization, and the
//! validity/classification predicates.

use std::io::Read;
use std::path::Path;

use icd10_tree::{
    load_forest, parse_forest, read_forest, CodeForest, CodeKind, LoadError, NodeId, RawCode,
};
use tracing::debug;

use crate::error::{QueryError, QueryResult};

/// Read-only query handle over the ICD-10 classification.
///
/// An `Icd10` owns the classification forest plus the two flattened
/// pre-order code lists (dotted and dotless), both computed eagerly at
/// construction. After that nothing is ever mutated, so a store can be
/// shared across threads without locking.
///
/// Codes may be passed with or without the conventional separator:
/// `"H60.1"` and `"H601"` name the same node everywhere.
///
/// # Example
///
/// ```rust
/// use icd10_query::Icd10;
///
/// let data = r#"[{
///     "type": "chapter",
///     "name": "VIII",
///     "description": "Diseases of the ear and mastoid process",
///     "children": [{
///         "type": "block",
///         "name": "H60-H62",
///         "description": "Diseases of external ear",
///         "children": [{
///             "type": "category",
///             "name": "H60",
///             "description": "Otitis externa",
///             "children": [{
///                 "type": "subcategory",
///                 "name": "H60.1",
///                 "description": "Cellulitis of external ear"
///             }]
///         }]
///     }]
/// }]"#;
///
/// let icd = Icd10::from_json_str(data).unwrap();
///
/// assert!(icd.is_valid_code("H601"));
/// assert!(icd.is_subcategory("H601"));
/// assert_eq!(icd.get_description("H60.1").unwrap(), "Cellulitis of external ear");
/// assert_eq!(
///     icd.get_ancestors("H601").unwrap(),
///     vec!["H60", "H60-H62", "VIII"]
/// );
/// ```
pub struct Icd10 {
    pub(crate) forest: CodeForest,
    /// Pre-order code list in canonical (dotted) form.
    pub(crate) all_codes: Vec<String>,
    /// The same list with the separator stripped.
    pub(crate) all_codes_no_dots: Vec<String>,
}

impl Icd10 {
    /// Wraps an already built forest and computes the flattened code
    /// lists.
    pub fn new(forest: CodeForest) -> Self {
        let mut all_codes = Vec::with_capacity(forest.len());
        let mut all_codes_no_dots = Vec::with_capacity(forest.len());
        for (_, node) in forest.iter() {
            all_codes.push(node.code().to_string());
            all_codes_no_dots.push(strip_dot(node.code()));
        }
        debug!(codes = all_codes.len(), "flattened classification codes");
        Self {
            forest,
            all_codes,
            all_codes_no_dots,
        }
    }

    /// Builds the store straight from pre-parsed serialized nodes.
    pub fn from_raw(roots: Vec<RawCode>) -> Self {
        Self::new(CodeForest::from_raw(roots))
    }

    /// Parses a serialized forest from a JSON string and builds the store.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(Self::from_raw(parse_forest(json)?))
    }

    /// Reads a serialized forest from a reader and builds the store.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(Self::from_raw(read_forest(reader)?))
    }

    /// Loads a serialized forest from a file on disk and builds the store.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self::from_raw(load_forest(path)?))
    }

    /// The underlying forest.
    pub fn forest(&self) -> &CodeForest {
        &self.forest
    }

    /// Returns the canonical form of `code`.
    ///
    /// Categories and subcategories are conventionally written either with
    /// or without a separator after the third character (`H601` vs
    /// `H60.1`); the form with the separator is canonical. The input is
    /// returned unchanged when it is shorter than four characters, already
    /// carries the separator, or when inserting one does not produce a
    /// known code — validity is not checked here. Pure, total, and
    /// idempotent.
    pub fn canonicalize(&self, code: &str) -> String {
        match dotted_candidate(code) {
            Some(candidate) if self.forest.resolve(&candidate).is_some() => candidate,
            _ => code.to_string(),
        }
    }

    /// True iff `code` names a node, in either the dotted or the dotless
    /// writing.
    pub fn is_valid_code(&self, code: &str) -> bool {
        self.resolve(code).is_some()
    }

    /// The kind of the node `code` resolves to, `None` for unresolvable
    /// codes.
    pub fn code_kind(&self, code: &str) -> Option<CodeKind> {
        self.resolve(code).map(|id| self.forest.node(id).kind())
    }

    /// True iff `code` resolves to a chapter. Never fails; false for
    /// unresolvable codes.
    pub fn is_chapter(&self, code: &str) -> bool {
        self.code_kind(code) == Some(CodeKind::Chapter)
    }

    /// True iff `code` resolves to a block. Never fails.
    pub fn is_block(&self, code: &str) -> bool {
        self.code_kind(code) == Some(CodeKind::Block)
    }

    /// True iff `code` resolves to a category. Never fails.
    pub fn is_category(&self, code: &str) -> bool {
        self.code_kind(code) == Some(CodeKind::Category)
    }

    /// True iff `code` resolves to a subcategory. Never fails.
    pub fn is_subcategory(&self, code: &str) -> bool {
        self.code_kind(code) == Some(CodeKind::Subcategory)
    }

    /// True iff `code` resolves to a category or a subcategory. Never
    /// fails.
    pub fn is_category_or_subcategory(&self, code: &str) -> bool {
        matches!(
            self.code_kind(code),
            Some(CodeKind::Category | CodeKind::Subcategory)
        )
    }

    /// True iff `code` resolves to a chapter or a block. Never fails.
    pub fn is_chapter_or_block(&self, code: &str) -> bool {
        matches!(
            self.code_kind(code),
            Some(CodeKind::Chapter | CodeKind::Block)
        )
    }

    /// Resolves a code to its node, accepting both writings. Does not
    /// allocate when the exact form is already canonical.
    pub(crate) fn resolve(&self, code: &str) -> Option<NodeId> {
        if let Some(id) = self.forest.resolve(code) {
            return Some(id);
        }
        dotted_candidate(code).and_then(|candidate| self.forest.resolve(&candidate))
    }

    /// Resolves `code` or reports it as unknown, carrying the code as the
    /// caller wrote it.
    pub(crate) fn require(&self, code: &str) -> QueryResult<NodeId> {
        self.resolve(code)
            .ok_or_else(|| QueryError::UnknownCode(code.to_string()))
    }
}

/// The separator-inserted candidate form of `code`, if one can exist.
///
/// `None` when the code is shorter than four characters, already carries
/// the separator at position 3, or cannot be split there (which no valid
/// code can).
fn dotted_candidate(code: &str) -> Option<String> {
    if code.len() < 4 || !code.is_char_boundary(3) || code.as_bytes()[3] == b'.' {
        return None;
    }
    Some(format!("{}.{}", &code[..3], &code[3..]))
}

/// Removes the separator from a dotted code (`H60.1` -> `H601`); other
/// codes pass through unchanged.
pub(crate) fn strip_dot(code: &str) -> String {
    if code.len() > 4 && code.as_bytes()[3] == b'.' {
        format!("{}{}", &code[..3], &code[4..])
    } else {
        code.to_string()
    }
}
