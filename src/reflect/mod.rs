//! Reflected input model: what the reflector introspects.
//!
//! Domain types are described by [`TypeDescriptor`]s registered in a
//! [`TypeRegistry`]. A descriptor carries everything the facet factories need
//! to know about a type: its kind, its annotations ([`Attribute`]), its
//! properties and its methods (optionally with an invocation thunk).
//!
//! ## Key Types
//!
//! - [`TypeRef`]: A reference to a type: named, array, or generic instantiation
//! - [`TypeDescriptor`]: One introspectable type
//! - [`PropertyDescriptor`], [`MethodDescriptor`], [`ParameterDescriptor`]: Members
//! - [`Attribute`]: Annotations understood by the default factory pipeline
//! - [`TypeRegistry`]: Name → descriptor lookup, pre-seeded with system types

mod attributes;
mod registry;
mod types;

pub use attributes::{Annotated, Attribute};
pub use registry::{RegistryError, TypeRegistry};
pub use types::{
    DomainObject, Invocation, MethodDescriptor, MethodThunk, ParameterDescriptor,
    PropertyDescriptor, TypeDescriptor, TypeKind, TypeRef,
};
