//! Type-level factories that only remove methods from action discovery.

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::{FeatureTypes, constants};
use crate::error::ReflectError;
use crate::meta::{BuildMap, TypeSpecBuilder};
use crate::reflect::{Annotated, Attribute, MethodDescriptor, TypeDescriptor};

fn remove_matching(
    ty: &TypeDescriptor,
    remover: &mut dyn MethodRemover,
    predicate: impl Fn(&MethodDescriptor) -> bool,
) {
    let matching: Vec<&MethodDescriptor> = ty.methods.iter().filter(|m| predicate(m)).collect();
    remover.remove_methods(&ty.full_name, &matching);
}

// ============================================================================
// ITERATOR FILTERING
// ============================================================================

/// Removes `GetEnumerator` from enumerable domain types.
pub struct IteratorFilteringFacetFactory {
    position: u32,
}

impl IteratorFilteringFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for IteratorFilteringFacetFactory {
    fn name(&self) -> &'static str {
        "IteratorFiltering"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::OBJECTS
    }

    fn process_type(
        &self,
        _cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        remover: &mut dyn MethodRemover,
        _spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        let enumerable = ty.kind.is_collection()
            || ty.implements(constants::IENUMERABLE)
            || ty.implements(constants::IENUMERABLE_OF_T);
        if enumerable {
            remove_matching(ty, remover, |m| m.name == constants::GET_ENUMERATOR);
        }
        Ok(metamodel)
    }
}

// ============================================================================
// SYSTEM CLASS METHOD FILTERING
// ============================================================================

/// Removes the methods every type inherits from `System.Object`.
pub struct SystemClassMethodFilteringFacetFactory {
    position: u32,
}

impl SystemClassMethodFilteringFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for SystemClassMethodFilteringFacetFactory {
    fn name(&self) -> &'static str {
        "SystemClassMethodFiltering"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::OBJECTS
    }

    fn process_type(
        &self,
        _cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        remover: &mut dyn MethodRemover,
        _spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        remove_matching(ty, remover, |m| {
            constants::SYSTEM_METHODS.contains(&m.name.as_str())
        });
        Ok(metamodel)
    }
}

// ============================================================================
// IGNORED METHODS
// ============================================================================

/// Removes static methods and methods annotated `Ignore`.
pub struct RemoveIgnoredMethodsFacetFactory {
    position: u32,
}

impl RemoveIgnoredMethodsFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for RemoveIgnoredMethodsFacetFactory {
    fn name(&self) -> &'static str {
        "RemoveIgnoredMethods"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::OBJECTS
    }

    fn process_type(
        &self,
        _cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        remover: &mut dyn MethodRemover,
        _spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        remove_matching(ty, remover, |m| {
            m.is_static || m.has_attribute(|a| matches!(a, Attribute::Ignore))
        });
        Ok(metamodel)
    }
}
