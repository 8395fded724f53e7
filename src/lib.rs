//! Dependency loader for `pyproject.toml` manifests.
//!
//! This crate extracts the declared dependencies of a PEP 621
//! `[project]` table and normalizes each entry into a name plus
//! version-specifier record. A host aggregating dependency information
//! across many file formats drives it through the two-method
//! [`loader::DependencyLoader`] contract: `can_load` to route files,
//! `load` to extract.

pub mod error;
pub mod loader;
pub mod loaders;
pub mod requirement;
