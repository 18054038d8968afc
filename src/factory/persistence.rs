//! Persistence-related annotations.

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::FeatureTypes;
use crate::error::ReflectError;
use crate::meta::{AssociationSpecBuilder, BuildMap, Facet, TypeSpecBuilder};
use crate::reflect::{Annotated, Attribute, PropertyDescriptor, TypeDescriptor};

// ============================================================================
// PROGRAM PERSISTABLE ONLY
// ============================================================================

/// `[ProgramPersistableOnly]`: instances may only be saved by code.
pub struct ProgramPersistableOnlyFacetFactory {
    position: u32,
}

impl ProgramPersistableOnlyFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for ProgramPersistableOnlyFacetFactory {
    fn name(&self) -> &'static str {
        "ProgramPersistableOnly"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::OBJECTS
    }

    fn process_type(
        &self,
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        if ty.has_attribute(|a| matches!(a, Attribute::ProgramPersistableOnly)) {
            cx.add_facet(spec, Facet::ProgramPersistableOnly)?;
        }
        Ok(metamodel)
    }
}

// ============================================================================
// IMMUTABLE
// ============================================================================

/// `[Immutable(when)]` on a type.
pub struct ImmutableAnnotationFacetFactory {
    position: u32,
}

impl ImmutableAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for ImmutableAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "ImmutableAnnotation"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::OBJECTS
    }

    fn process_type(
        &self,
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        let when = ty.find_attribute(|a| match a {
            Attribute::Immutable(when) => Some(*when),
            _ => None,
        });
        if let Some(when) = when {
            cx.add_facet(spec, Facet::Immutable(when))?;
        }
        Ok(metamodel)
    }
}

// ============================================================================
// NOT PERSISTED
// ============================================================================

/// `[NotPersisted]` on a type, property or collection.
pub struct NotPersistedAnnotationFacetFactory {
    position: u32,
}

impl NotPersistedAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

fn is_not_persisted<A: Annotated>(annotated: &A) -> bool {
    annotated.has_attribute(|a| matches!(a, Attribute::NotPersisted))
}

impl FacetFactory for NotPersistedAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "NotPersistedAnnotation"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::OBJECTS.union(FeatureTypes::PROPERTIES_AND_COLLECTIONS)
    }

    fn process_type(
        &self,
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        if is_not_persisted(ty) {
            cx.add_facet(spec, Facet::NotPersisted)?;
        }
        Ok(metamodel)
    }

    fn process_property(
        &self,
        cx: &FactoryContext<'_>,
        _ty: &TypeDescriptor,
        property: &PropertyDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut AssociationSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        if is_not_persisted(property) {
            cx.add_facet(spec, Facet::NotPersisted)?;
        }
        Ok(metamodel)
    }
}
