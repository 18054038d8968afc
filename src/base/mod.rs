//! Foundation types for the reflector.
//!
//! This module provides the primitives used throughout the metamodel pipeline:
//! - [`FeatureType`], [`FeatureTypes`] - Reflective shapes a facet factory applies to
//! - [`TypeName`] - Shared, cheaply clonable fully-qualified type name
//! - [`Identifier`] - Structural key for types, members and parameters
//! - [`WhenTo`] - Timing of conditional behaviour
//! - Domain constants (system type names, complementary method prefixes)
//! - Naming helpers (natural names, plurals, short names)
//!
//! This module has NO dependencies on other modules of this crate.

pub mod constants;
mod feature;
mod identifier;
pub mod naming;
mod when;

use std::sync::Arc;

pub use feature::{FeatureType, FeatureTypes};
pub use identifier::Identifier;
pub use when::WhenTo;

/// A fully-qualified type name, e.g. `System.Int32` or `Demo.Customer`.
pub type TypeName = Arc<str>;
