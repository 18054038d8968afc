//! Frozen, read-only specifications published in the metamodel.
//!
//! Cross-references between specifications (superclass, return types,
//! element types, owners) are stored as type names and resolved against a
//! [`Metamodel`] on demand, so cyclic type graphs need no shared ownership.

use std::sync::Arc;

use super::facet::{Facet, FacetKind};
use super::facet_map::FacetMap;
use super::metamodel::Metamodel;
use super::spec::immutable_specification;
use crate::base::{Identifier, TypeName, naming};

/// What a type specification describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecKind {
    Object,
    Value,
    Collection,
    Service,
}

/// Whether an association is a single reference or a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssociationKind {
    OneToOne,
    OneToMany,
}

// ============================================================================
// TYPE SPECIFICATION
// ============================================================================

/// Immutable specification of one domain type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSpec {
    pub(crate) identifier: Identifier,
    pub(crate) facets: FacetMap,
    pub(crate) kind: SpecKind,
    pub(crate) superclass: Option<TypeName>,
    pub(crate) interfaces: Vec<TypeName>,
    pub(crate) fields: Vec<Arc<AssociationSpec>>,
    pub(crate) actions: Vec<Arc<ActionSpec>>,
}

impl TypeSpec {
    pub fn full_name(&self) -> &TypeName {
        self.identifier.type_name()
    }

    pub fn short_name(&self) -> &str {
        naming::short_name(self.full_name())
    }

    pub fn kind(&self) -> SpecKind {
        self.kind
    }

    pub fn is_collection(&self) -> bool {
        self.kind == SpecKind::Collection
    }

    pub fn is_service(&self) -> bool {
        self.kind == SpecKind::Service
    }

    pub fn is_value(&self) -> bool {
        self.kind == SpecKind::Value
    }

    pub fn superclass(&self) -> Option<&TypeName> {
        self.superclass.as_ref()
    }

    pub fn interfaces(&self) -> &[TypeName] {
        &self.interfaces
    }

    /// All associations in member order.
    pub fn fields(&self) -> &[Arc<AssociationSpec>] {
        &self.fields
    }

    pub fn properties(&self) -> impl Iterator<Item = &Arc<AssociationSpec>> {
        self.fields.iter().filter(|f| f.kind == AssociationKind::OneToOne)
    }

    pub fn collections(&self) -> impl Iterator<Item = &Arc<AssociationSpec>> {
        self.fields.iter().filter(|f| f.kind == AssociationKind::OneToMany)
    }

    /// All actions in member order.
    pub fn actions(&self) -> &[Arc<ActionSpec>] {
        &self.actions
    }

    pub fn get_field(&self, name: &str) -> Option<&Arc<AssociationSpec>> {
        self.fields.iter().find(|f| f.identifier.member_name() == Some(name))
    }

    pub fn get_action(&self, name: &str) -> Option<&Arc<ActionSpec>> {
        self.actions.iter().find(|a| a.identifier.member_name() == Some(name))
    }

    pub fn superclass_spec(&self, metamodel: &Metamodel) -> Option<Arc<TypeSpec>> {
        self.superclass
            .as_deref()
            .and_then(|name| metamodel.try_get(name).cloned())
    }

    pub fn interface_specs(&self, metamodel: &Metamodel) -> Vec<Arc<TypeSpec>> {
        self.interfaces
            .iter()
            .filter_map(|name| metamodel.try_get(name).cloned())
            .collect()
    }

    /// Element type of a collection specification.
    pub fn element_type(&self) -> Option<&TypeName> {
        element_type_of(&self.facets)
    }

    /// Whether this type is `other`, inherits from it, or implements it.
    pub fn is_of_type(&self, other: &str, metamodel: &Metamodel) -> bool {
        if self.full_name().as_ref() == other {
            return true;
        }
        let mut pending: Vec<&TypeName> = self.superclass.iter().chain(&self.interfaces).collect();
        let mut seen: Vec<&str> = vec![self.full_name().as_ref()];
        while let Some(name) = pending.pop() {
            if name.as_ref() == other {
                return true;
            }
            if seen.contains(&name.as_ref()) {
                continue;
            }
            seen.push(name.as_ref());
            if let Some(spec) = metamodel.try_get(name) {
                pending.extend(spec.superclass.iter().chain(&spec.interfaces));
            }
        }
        false
    }
}

// ============================================================================
// MEMBER SPECIFICATIONS
// ============================================================================

/// Immutable specification of a property or collection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssociationSpec {
    pub(crate) identifier: Identifier,
    pub(crate) facets: FacetMap,
    pub(crate) kind: AssociationKind,
    pub(crate) return_type: TypeName,
}

impl AssociationSpec {
    pub fn kind(&self) -> AssociationKind {
        self.kind
    }

    pub fn is_collection(&self) -> bool {
        self.kind == AssociationKind::OneToMany
    }

    pub fn owner(&self) -> &TypeName {
        self.identifier.type_name()
    }

    pub fn return_type(&self) -> &TypeName {
        &self.return_type
    }

    pub fn element_type(&self) -> Option<&TypeName> {
        element_type_of(&self.facets)
    }

    pub fn owner_spec(&self, metamodel: &Metamodel) -> Option<Arc<TypeSpec>> {
        metamodel.try_get(self.owner()).cloned()
    }

    pub fn return_spec(&self, metamodel: &Metamodel) -> Option<Arc<TypeSpec>> {
        metamodel.try_get(&self.return_type).cloned()
    }

    pub fn element_spec(&self, metamodel: &Metamodel) -> Option<Arc<TypeSpec>> {
        self.element_type()
            .and_then(|name| metamodel.try_get(name).cloned())
    }
}

/// Immutable specification of an action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionSpec {
    pub(crate) identifier: Identifier,
    pub(crate) facets: FacetMap,
    pub(crate) return_type: Option<TypeName>,
    pub(crate) parameters: Vec<Arc<ParameterSpec>>,
}

impl ActionSpec {
    pub fn owner(&self) -> &TypeName {
        self.identifier.type_name()
    }

    /// Return type, `None` for `void` actions.
    pub fn return_type(&self) -> Option<&TypeName> {
        self.return_type.as_ref()
    }

    pub fn parameters(&self) -> &[Arc<ParameterSpec>] {
        &self.parameters
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn element_type(&self) -> Option<&TypeName> {
        element_type_of(&self.facets)
    }

    pub fn owner_spec(&self, metamodel: &Metamodel) -> Option<Arc<TypeSpec>> {
        metamodel.try_get(self.owner()).cloned()
    }

    pub fn return_spec(&self, metamodel: &Metamodel) -> Option<Arc<TypeSpec>> {
        self.return_type
            .as_deref()
            .and_then(|name| metamodel.try_get(name).cloned())
    }

    pub fn element_spec(&self, metamodel: &Metamodel) -> Option<Arc<TypeSpec>> {
        self.element_type()
            .and_then(|name| metamodel.try_get(name).cloned())
    }
}

/// Immutable specification of an action parameter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSpec {
    pub(crate) identifier: Identifier,
    pub(crate) facets: FacetMap,
    pub(crate) index: usize,
    pub(crate) parameter_type: TypeName,
}

impl ParameterSpec {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn parameter_type(&self) -> &TypeName {
        &self.parameter_type
    }

    pub fn spec(&self, metamodel: &Metamodel) -> Option<Arc<TypeSpec>> {
        metamodel.try_get(&self.parameter_type).cloned()
    }
}

immutable_specification!(TypeSpec, AssociationSpec, ActionSpec, ParameterSpec);

fn element_type_of(facets: &FacetMap) -> Option<&TypeName> {
    match facets.get(FacetKind::ElementType) {
        Some(Facet::ElementType(name)) => Some(name),
        _ => match facets.get(FacetKind::TypeOf) {
            Some(Facet::TypeOf { element_type, .. }) => Some(element_type),
            _ => None,
        },
    }
}

impl TypeSpec {
    /// Visit the facet maps of this type, its members and their parameters.
    pub(crate) fn for_each_facet_map(&mut self, mut visit: impl FnMut(&mut FacetMap)) {
        visit(&mut self.facets);
        for field in &mut self.fields {
            visit(&mut Arc::make_mut(field).facets);
        }
        for action in &mut self.actions {
            let action = Arc::make_mut(action);
            visit(&mut action.facets);
            for parameter in &mut action.parameters {
                visit(&mut Arc::make_mut(parameter).facets);
            }
        }
    }
}
