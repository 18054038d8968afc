//! Facet factory tests
//!
//! Each test drives one factory directly against hand-built descriptors:
//! - Annotation factories and their target features
//! - Element type inference and spec loading
//! - Method claiming and filtering
//! - Configuration mismatches reported as diagnostics

mod tests_annotations;
mod tests_collections;
mod tests_methods;
