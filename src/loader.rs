//! The host-facing loader contract.
//!
//! A host discovers candidate files, asks each registered loader
//! whether it applies via [`DependencyLoader::can_load`], and invokes
//! [`DependencyLoader::load`] only when it does. Loaders are stateless
//! per call, so a host may run many `load` calls concurrently.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A dependency extracted from a manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name. Never empty.
    pub name: String,
    /// Version specifier: comparator-prefixed version tokens joined by
    /// commas (e.g. `">=1.0,<2.0"`), or the empty string when the
    /// declaration carried no constraint. Opaque — never compared or
    /// resolved here.
    pub version: String,
}

/// Trait for manifest dependency loaders.
#[async_trait]
pub trait DependencyLoader: Send + Sync {
    /// Check whether this loader handles the given file path.
    ///
    /// Decided purely from the path, without touching the filesystem.
    fn can_load(&self, path: &Path) -> bool;

    /// Read and parse the manifest, returning its declared dependencies
    /// in declaration order.
    ///
    /// Every call re-reads and re-parses the file; nothing is cached.
    async fn load(&self, path: &Path) -> Result<Vec<Dependency>, LoadError>;
}
