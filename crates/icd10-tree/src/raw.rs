//! Serialized representation of the classification forest.
//!
//! The classification ships as a nested document produced by an external
//! generation step: every node carries a kind tag, its code, its
//! description, and its children in document order. [`RawCode`] is that
//! shape, and the functions in this module deserialize a whole forest of
//! them from JSON. This is the only contract the library has with the
//! data source; [`CodeForest`](crate::CodeForest) consumes the result.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LoadError;
use crate::kind::CodeKind;

/// One node of the serialized classification forest.
///
/// # Example
///
/// ```rust
/// use icd10_tree::{parse_forest, CodeKind};
///
/// let json = r#"[{
///     "type": "category",
///     "name": "G10",
///     "description": "Huntington disease"
/// }]"#;
///
/// let roots = parse_forest(json).unwrap();
/// assert_eq!(roots[0].kind, CodeKind::Category);
/// assert_eq!(roots[0].name, "G10");
/// assert!(roots[0].children.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCode {
    /// Node kind tag.
    #[serde(rename = "type")]
    pub kind: CodeKind,
    /// Code identifier in canonical form (e.g. `H60.1`).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Ordered child nodes, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawCode>,
}

/// Parses a serialized forest from a JSON string.
///
/// The top level of the document is the ordered list of chapters.
pub fn parse_forest(json: &str) -> Result<Vec<RawCode>, LoadError> {
    let roots: Vec<RawCode> = serde_json::from_str(json)?;
    debug!(chapters = roots.len(), "parsed classification forest");
    Ok(roots)
}

/// Reads a serialized forest from an arbitrary reader.
pub fn read_forest<R: Read>(reader: R) -> Result<Vec<RawCode>, LoadError> {
    let roots: Vec<RawCode> = serde_json::from_reader(reader)?;
    debug!(chapters = roots.len(), "parsed classification forest");
    Ok(roots)
}

/// Loads a serialized forest from a file on disk.
pub fn load_forest<P: AsRef<Path>>(path: P) -> Result<Vec<RawCode>, LoadError> {
    let file = File::open(path)?;
    read_forest(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {
            "type": "chapter",
            "name": "VI",
            "description": "Diseases of the nervous system",
            "children": [
                {
                    "type": "block",
                    "name": "G10-G14",
                    "description": "Systemic atrophies primarily affecting the central nervous system",
                    "children": [
                        { "type": "category", "name": "G10", "description": "Huntington disease" }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_forest_nested() {
        let roots = parse_forest(SAMPLE).unwrap();
        assert_eq!(roots.len(), 1);

        let chapter = &roots[0];
        assert_eq!(chapter.kind, CodeKind::Chapter);
        assert_eq!(chapter.name, "VI");
        assert_eq!(chapter.children.len(), 1);

        let block = &chapter.children[0];
        assert_eq!(block.kind, CodeKind::Block);
        assert_eq!(block.name, "G10-G14");
        assert_eq!(block.children[0].name, "G10");
    }

    #[test]
    fn test_parse_forest_children_default_to_empty() {
        let roots = parse_forest(
            r#"[{ "type": "category", "name": "G10", "description": "Huntington disease" }]"#,
        )
        .unwrap();
        assert!(roots[0].children.is_empty());
    }

    #[test]
    fn test_parse_forest_rejects_unknown_kind_tag() {
        let result = parse_forest(
            r#"[{ "type": "division", "name": "VI", "description": "x" }]"#,
        );
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_forest_rejects_missing_name() {
        let result = parse_forest(r#"[{ "type": "chapter", "description": "x" }]"#);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_serialize_round_trip() {
        let roots = parse_forest(SAMPLE).unwrap();
        let json = serde_json::to_string(&roots).unwrap();
        let reparsed = parse_forest(&json).unwrap();
        assert_eq!(roots, reparsed);
    }

    #[test]
    fn test_load_forest_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let roots = load_forest(file.path()).unwrap();
        assert_eq!(roots[0].name, "VI");
    }

    #[test]
    fn test_load_forest_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_forest(dir.path().join("missing.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
