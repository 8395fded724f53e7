//! Loader for `pyproject.toml` manifests (PEP 621 `[project]` table).

use std::path::Path;

use async_trait::async_trait;
use toml::Value;

use crate::error::LoadError;
use crate::loader::{Dependency, DependencyLoader};
use crate::requirement::Requirement;

/// The manifest filename this loader recognizes.
pub const MANIFEST_FILENAME: &str = "pyproject.toml";

/// Loader for the declared dependencies of a `pyproject.toml` file.
///
/// Reads exactly `project.dependencies`; other dependency sources
/// (`[project.optional-dependencies]`, tool-specific tables) are out
/// of scope.
#[derive(Debug, Default)]
pub struct PyprojectLoader;

impl PyprojectLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DependencyLoader for PyprojectLoader {
    fn can_load(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == MANIFEST_FILENAME)
    }

    async fn load(&self, path: &Path) -> Result<Vec<Dependency>, LoadError> {
        let content = tokio::fs::read_to_string(path).await?;
        let manifest: Value = toml::from_str(&content)?;
        let dependencies = extract_dependencies(&manifest);
        tracing::debug!(
            path = %path.display(),
            count = dependencies.len(),
            "parsed manifest dependencies"
        );
        Ok(dependencies)
    }
}

/// Walk to `project.dependencies` and normalize each declaration.
///
/// An absent `project` table, an absent `dependencies` key, or a
/// wrong-typed node all yield the empty sequence; only syntactically
/// invalid TOML is an error, and that is raised by the parse step
/// before this walk runs.
fn extract_dependencies(manifest: &Value) -> Vec<Dependency> {
    let declarations = manifest
        .get("project")
        .and_then(Value::as_table)
        .and_then(|project| project.get("dependencies"))
        .and_then(Value::as_array);

    let mut dependencies = Vec::new();
    for declaration in declarations.into_iter().flatten() {
        let Some(raw) = declaration.as_str() else {
            continue;
        };
        match map_dependency(raw) {
            Some(dependency) => dependencies.push(dependency),
            None => tracing::trace!("skipping unparseable declaration: {raw:?}"),
        }
    }
    dependencies
}

/// Normalize one raw declaration string, or `None` when no package name
/// can be extracted. Extras and environment markers are parsed but do
/// not surface in the record.
fn map_dependency(raw: &str) -> Option<Dependency> {
    let requirement = Requirement::parse_loose(raw)?;
    let version = requirement.version_spec();
    Some(Dependency {
        name: requirement.name,
        version,
    })
}
