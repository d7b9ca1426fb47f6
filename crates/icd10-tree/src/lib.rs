//! # icd10-tree
//!
//! In-memory tree model of the ICD-10 classification.
//!
//! This crate turns the serialized classification forest (chapters,
//! blocks, categories, subcategories) into an immutable in-memory
//! structure: arena-owned nodes with non-owning parent back-references,
//! ordered chapter roots, and a code-to-node name index. It is the leaf
//! crate of the workspace; [`icd10-query`] builds every lookup operation
//! on top of it.
//!
//! ## Node kinds
//!
//! | Kind | Identified by | Example |
//! |------|---------------|---------|
//! | Chapter | Roman numeral | `VIII` |
//! | Block | Code range | `H60-H62` |
//! | Category | Three characters | `H60` |
//! | Subcategory | Separator after the third character | `H60.1` |
//!
//! ## Usage
//!
//! ```rust
//! use icd10_tree::{parse_forest, CodeForest};
//!
//! let json = r#"[{
//!     "type": "chapter",
//!     "name": "VIII",
//!     "description": "Diseases of the ear and mastoid process",
//!     "children": [{
//!         "type": "block",
//!         "name": "H60-H62",
//!         "description": "Diseases of external ear"
//!     }]
//! }]"#;
//!
//! let forest = CodeForest::from_raw(parse_forest(json).unwrap());
//! assert_eq!(forest.len(), 2);
//!
//! let block = forest.resolve("H60-H62").unwrap();
//! assert_eq!(forest.node(block).description(), "Diseases of external ear");
//! ```
//!
//! ## Lifecycle
//!
//! The forest is built once at initialization and never mutated. All
//! derived views (the name index, the pre-order arena ordering) are fixed
//! at build time, so a `CodeForest` can be shared freely across threads.
//! Producing the serialized data from the upstream classification source
//! is an external concern; the only contract with it is the [`RawCode`]
//! shape.
//!
//! [`icd10-query`]: https://docs.rs/icd10-query

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod forest;
mod kind;
mod raw;

pub use error::LoadError;
pub use forest::{CodeForest, CodeNode, NodeId};
pub use kind::CodeKind;
pub use raw::{load_forest, parse_forest, read_forest, RawCode};
