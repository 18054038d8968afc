//! Errors that abort reflection.

use thiserror::Error;

use crate::base::TypeName;
use crate::meta::MetamodelError;
use crate::reflect::RegistryError;

/// A failure that prevents the metamodel from being published.
///
/// Configuration mismatches are not errors; they are reported as
/// diagnostics and the affected facet is skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReflectError {
    /// A referenced type is not registered.
    #[error("cannot introspect '{0}': type is not registered")]
    UnknownType(TypeName),

    /// Two descriptors were registered under one name.
    #[error("type '{0}' is registered more than once")]
    DuplicateType(TypeName),

    /// The worker pool for parallel reflection could not be built.
    #[error("failed to build reflection thread pool: {0}")]
    ThreadPool(String),

    #[error(transparent)]
    Metamodel(#[from] MetamodelError),
}

impl From<RegistryError> for ReflectError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::UnknownType(name) => ReflectError::UnknownType(name),
            RegistryError::DuplicateType(name) => ReflectError::DuplicateType(name),
        }
    }
}

impl ReflectError {
    pub fn unknown_type(name: impl Into<TypeName>) -> Self {
        Self::UnknownType(name.into())
    }
}
