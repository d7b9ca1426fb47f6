//! # icd10-query
//!
//! Code lookup and hierarchy queries over the ICD-10 classification.
//!
//! This crate is the query engine of the workspace: it wraps the
//! immutable forest built by [`icd10-tree`] behind [`Icd10`], a read-only
//! handle exposing validity checks, kind classification, hierarchy
//! traversal, and global pre-order indexing. Codes may be passed with or
//! without the conventional separator (`H60.1` vs `H601`).
//!
//! ## Quick Start
//!
//! ```rust
//! use icd10_query::Icd10;
//!
//! let data = r#"[{
//!     "type": "chapter",
//!     "name": "VIII",
//!     "description": "Diseases of the ear and mastoid process",
//!     "children": [{
//!         "type": "block",
//!         "name": "H60-H62",
//!         "description": "Diseases of external ear",
//!         "children": [{
//!             "type": "category",
//!             "name": "H60",
//!             "description": "Otitis externa",
//!             "children": [{
//!                 "type": "subcategory",
//!                 "name": "H60.1",
//!                 "description": "Cellulitis of external ear"
//!             }]
//!         }]
//!     }]
//! }]"#;
//!
//! let icd = Icd10::from_json_str(data).unwrap();
//!
//! assert!(icd.is_valid_code("H601"));
//! assert_eq!(icd.get_description("H60.1").unwrap(), "Cellulitis of external ear");
//! assert_eq!(icd.get_parent("H60").unwrap(), Some("H60-H62".to_string()));
//! assert_eq!(icd.get_index("VIII").unwrap(), 0);
//! assert_eq!(icd.add_dot("H601").unwrap(), "H60.1");
//! ```
//!
//! ## Query surface
//!
//! | Operation | Unknown code | Returns |
//! |-----------|--------------|---------|
//! | `is_valid_code`, `is_chapter`, `is_block`, `is_category`, `is_subcategory`, `is_chapter_or_block`, `is_category_or_subcategory` | `false` | `bool` |
//! | `code_kind` | `None` | `Option<CodeKind>` |
//! | `canonicalize` | input unchanged | `String` |
//! | `get_description`, `get_parent`, `get_children`, `is_leaf` | `Err(UnknownCode)` | node attributes |
//! | `get_ancestors`, `get_descendants`, `is_ancestor`, `is_descendant`, `get_nearest_common_ancestor` | `Err(UnknownCode)` | hierarchy relations |
//! | `get_all_codes`, `get_all_codes_without_dots`, `get_index`, `add_dot`, `remove_dot` | `Err(UnknownCode)` (lists never fail) | global pre-order |
//!
//! Predicates never fail, so callers can probe arbitrary strings without
//! pre-validating. Everything that must return data about a specific node
//! fails fast with the offending code instead of returning partial
//! results.
//!
//! ## Concurrency
//!
//! An [`Icd10`] is immutable after construction — the forest, the name
//! index, and both flattened code lists are all fixed inside
//! [`Icd10::new`]. Share it by reference across as many threads as
//! needed; no locking is involved anywhere.
//!
//! [`icd10-tree`]: https://docs.rs/icd10-tree

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod ordering;
mod store;
mod traversal;

pub use error::{QueryError, QueryResult};
pub use store::Icd10;

// Re-export the tree types consumers need alongside the store.
pub use icd10_tree::{CodeForest, CodeKind, CodeNode, LoadError, NodeId, RawCode};
