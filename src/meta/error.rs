//! Error types for metamodel operations.

use thiserror::Error;

use crate::base::{Identifier, TypeName};

/// Errors raised by specifications and the published metamodel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetamodelError {
    /// No specification is cached under this type name.
    #[error("no specification for type '{0}'")]
    NotFound(TypeName),

    /// A facet was added to or removed from a frozen specification.
    #[error("specification '{0}' is frozen and cannot be modified")]
    Frozen(Identifier),

    /// A builder was frozen twice.
    #[error("specification '{0}' has already been frozen")]
    AlreadyFrozen(Identifier),

    /// A builder was frozen before every factory processed it.
    #[error("specification '{0}' cannot be frozen before introspection completes")]
    NotIntrospected(Identifier),

    /// A process-wide metamodel was installed twice.
    #[error("a metamodel has already been installed for this process")]
    AlreadyInstalled,

    /// An imperative facet was invoked without an invocation thunk.
    #[error("method '{0}' has no invocation thunk bound")]
    Unbound(Identifier),

    /// Metamodel (de)serialisation failed.
    #[cfg(feature = "serde")]
    #[error("metamodel serialisation error: {0}")]
    Serialization(String),
}

impl MetamodelError {
    pub fn not_found(name: impl Into<TypeName>) -> Self {
        Self::NotFound(name.into())
    }
}
