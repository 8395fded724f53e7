//! Loader implementations, one module per manifest format.

pub mod pyproject;
