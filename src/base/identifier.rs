//! Structural identifiers for types, members and parameters.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use super::TypeName;

/// Stable structural key for a type, member, or action parameter.
///
/// Equality, hashing and ordering are over all components, so two identifiers
/// are equal iff type name, member name, parameter types and parameter index
/// all match. Ordering puts a type before its members and compares members of
/// the same type by name, which gives the name-based fallback order used when
/// sorting members.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    type_name: TypeName,
    member_name: Option<SmolStr>,
    parameter_types: Arc<[TypeName]>,
    parameter_index: Option<usize>,
}

impl Identifier {
    /// Identifier of a type.
    pub fn for_type(type_name: impl Into<TypeName>) -> Self {
        Self {
            type_name: type_name.into(),
            member_name: None,
            parameter_types: Arc::from([]),
            parameter_index: None,
        }
    }

    /// Identifier of a property or collection.
    pub fn for_field(type_name: impl Into<TypeName>, member_name: impl Into<SmolStr>) -> Self {
        Self {
            type_name: type_name.into(),
            member_name: Some(member_name.into()),
            parameter_types: Arc::from([]),
            parameter_index: None,
        }
    }

    /// Identifier of an action (or any method) including its parameter types.
    pub fn for_method(
        type_name: impl Into<TypeName>,
        member_name: impl Into<SmolStr>,
        parameter_types: impl IntoIterator<Item = TypeName>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            member_name: Some(member_name.into()),
            parameter_types: parameter_types.into_iter().collect(),
            parameter_index: None,
        }
    }

    /// Identifier of the `index`-th parameter of this action.
    pub fn parameter(&self, index: usize) -> Self {
        Self {
            parameter_index: Some(index),
            ..self.clone()
        }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }

    pub fn parameter_types(&self) -> &[TypeName] {
        &self.parameter_types
    }

    pub fn parameter_index(&self) -> Option<usize> {
        self.parameter_index
    }

    /// True for a type-level identifier.
    pub fn is_type(&self) -> bool {
        self.member_name.is_none()
    }

    /// The identifier of the owning type.
    pub fn owner(&self) -> Identifier {
        Identifier::for_type(self.type_name.clone())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)?;
        let Some(member) = &self.member_name else {
            return Ok(());
        };
        write!(f, "#{member}")?;
        if !self.parameter_types.is_empty() || self.parameter_index.is_some() {
            write!(f, "({})", self.parameter_types.join(","))?;
        }
        if let Some(index) = self.parameter_index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}
