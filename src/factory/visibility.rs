//! `Hidden`, `ScaffoldColumn` and `Disabled` annotations.

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::{FeatureTypes, WhenTo};
use crate::error::ReflectError;
use crate::meta::{ActionSpecBuilder, AssociationSpecBuilder, BuildMap, Facet, SpecificationBuilder};
use crate::reflect::{Annotated, Attribute, MethodDescriptor, PropertyDescriptor, TypeDescriptor};

// ============================================================================
// HIDDEN
// ============================================================================

/// `[Hidden(when)]`, falling back to `[ScaffoldColumn(show)]`.
pub struct HiddenAnnotationFacetFactory {
    position: u32,
}

impl HiddenAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn hidden_when<A: Annotated>(member: &A) -> Option<WhenTo> {
        member
            .find_attribute(|a| match a {
                Attribute::Hidden(when) => Some(*when),
                _ => None,
            })
            .or_else(|| {
                member.find_attribute(|a| match a {
                    Attribute::ScaffoldColumn(show) => {
                        Some(if *show { WhenTo::Never } else { WhenTo::Always })
                    }
                    _ => None,
                })
            })
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        if let Some(when) = Self::hidden_when(member) {
            cx.add_facet(spec, Facet::Hidden(when))?;
        }
        Ok(())
    }
}

impl FacetFactory for HiddenAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "HiddenAnnotation"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::PROPERTIES_COLLECTIONS_AND_ACTIONS
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
        Self::process(cx, property, spec)?;
        Ok(metamodel)
    }

    fn process_method(
        &self,
        cx: &FactoryContext<'_>,
        _ty: &TypeDescriptor,
        method: &MethodDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut ActionSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        Self::process(cx, method, spec)?;
        Ok(metamodel)
    }
}

// ============================================================================
// DISABLED
// ============================================================================

/// `[Disabled(when)]`.
pub struct DisabledAnnotationFacetFactory {
    position: u32,
}

impl DisabledAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        let when = member.find_attribute(|a| match a {
            Attribute::Disabled(when) => Some(*when),
            _ => None,
        });
        if let Some(when) = when {
            cx.add_facet(spec, Facet::Disabled(when))?;
        }
        Ok(())
    }
}

impl FacetFactory for DisabledAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "DisabledAnnotation"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::PROPERTIES_COLLECTIONS_AND_ACTIONS
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
        Self::process(cx, property, spec)?;
        Ok(metamodel)
    }

    fn process_method(
        &self,
        cx: &FactoryContext<'_>,
        _ty: &TypeDescriptor,
        method: &MethodDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut ActionSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        Self::process(cx, method, spec)?;
        Ok(metamodel)
    }
}
