//! # nakedobjects-metamodel
//!
//! Reflector and metamodel core for a naked objects framework: turns
//! annotated domain types into a closed, queryable model of specifications
//! and facets.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! reflector → Rounds of introspection, parallel or sequential; freeze and publish
//!   ↓
//! factory   → Facet factory pipeline, method removal, factory context
//!   ↓
//! meta      → Facets, specification builders, frozen specs, Metamodel, ordering
//!   ↓
//! reflect   → Type/member/parameter descriptors, attributes, TypeRegistry
//!   ↓
//! base      → Identifier, FeatureType, WhenTo, naming, well-known names
//! ```

// ============================================================================
// MODULES (dependency order: base → reflect → meta → factory → reflector)
// ============================================================================

/// Foundation types: Identifier, FeatureType, WhenTo, naming conventions
pub mod base;

/// Reflection input: descriptors and the type registry
pub mod reflect;

/// Metamodel: facets, specifications, the published cache
pub mod meta;

/// Facet factories and the ordered pipeline
pub mod factory;

/// Reflector: builds and publishes the metamodel
pub mod reflector;

/// Errors that abort reflection
pub mod error;

/// Configuration mismatches reported during reflection
pub mod diagnostics;

// Re-export the types most callers need
pub use base::{FeatureType, FeatureTypes, Identifier, TypeName, WhenTo};
pub use diagnostics::{ReflectDiagnostic, Severity};
pub use error::ReflectError;
pub use factory::{FacetFactories, FacetFactory, default_factories};
pub use meta::{Facet, FacetKind, Metamodel, MetamodelError, Specification, TypeSpec};
pub use reflect::{TypeDescriptor, TypeRef, TypeRegistry};
pub use reflector::{ReflectMode, Reflection, Reflector, ReflectorConfig};
