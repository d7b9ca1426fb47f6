//! Error types for loading serialized classification data.

use thiserror::Error;

/// Errors that can occur while loading a serialized classification forest.
///
/// These surface defects in the external data source (an unreadable file,
/// malformed JSON, an unrecognized kind tag). Once a forest has been
/// built, no query operation can produce a `LoadError`.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data source could not be read.
    #[error("failed to read classification data: {0}")]
    Io(#[from] std::io::Error),

    /// The data is not a well-formed classification forest.
    #[error("malformed classification data: {0}")]
    Parse(#[from] serde_json::Error),
}
