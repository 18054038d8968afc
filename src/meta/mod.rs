//! Metamodel - facets, specifications and the published cache.
//!
//! This module defines what reflection produces: mutable builders that
//! facet factories decorate, and the immutable specifications they freeze
//! into.
//!
//! ## Key Types
//!
//! - [`Facet`] - A typed unit of metadata; at most one per [`FacetKind`] per spec
//! - [`FacetMap`] - Facets of one specification with a [`FacetPolicy`] for replacement
//! - [`Specification`], [`SpecificationBuilder`] - Read and write access to a spec
//! - [`TypeSpecBuilder`] - Pending, introspected, then frozen into a [`TypeSpec`]
//! - [`SpecMap`], [`BuildMap`] - Copy-on-write maps threaded through the pipeline
//! - [`Metamodel`] - The published cache, with optional process-wide install
//! - [`MemberOrderComparator`] - Total order over members by `MemberOrder` sequence

mod builder;
mod error;
mod facet;
mod facet_map;
mod immutable;
mod metamodel;
mod order;
#[cfg(feature = "serde")]
mod persist;
mod spec;
mod value;

pub use builder::{
    ActionSpecBuilder, AssociationSpecBuilder, BuildState, ParameterSpecBuilder, TypeSpecBuilder,
};
pub use error::MetamodelError;
pub use facet::{
    CollectionShape, Facet, FacetKind, FacetSource, LifecycleEvent, MethodBinding, TypeOfSource,
    ValidationMethod,
};
pub use facet_map::{FacetMap, FacetPolicies, FacetPolicy};
pub use immutable::{ActionSpec, AssociationKind, AssociationSpec, ParameterSpec, SpecKind, TypeSpec};
pub use metamodel::{BuildMap, Metamodel, SpecMap};
pub use order::{MemberOrderComparator, compare_sequences};
pub use spec::{SpecHolder, Specification, SpecificationBuilder};
pub use value::{ValueKind, ValueSemantics};
