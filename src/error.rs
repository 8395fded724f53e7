//! Error types for loader operations.

use thiserror::Error;

/// Failure of a single [`load`](crate::loader::DependencyLoader::load) call.
///
/// Both kinds are fatal to the call and carry the underlying error
/// intact; the host decides whether to skip the file, log, or abort.
/// Malformed individual declaration strings are not errors — they are
/// dropped during normalization.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The manifest file is missing or unreadable.
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest content is not syntactically valid TOML.
    #[error("invalid TOML in manifest: {0}")]
    Parse(#[from] toml::de::Error),
}
