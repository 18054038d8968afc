//! Typical display length: derived from the member's type, or annotated.

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::FeatureTypes;
use crate::error::ReflectError;
use crate::meta::{
    ActionSpecBuilder, AssociationSpecBuilder, BuildMap, Facet, FacetSource, ParameterSpecBuilder,
    SpecificationBuilder, ValueKind,
};
use crate::reflect::{Annotated, Attribute, MethodDescriptor, PropertyDescriptor, TypeDescriptor, TypeRef};

/// Length used for `byte[]` members.
const BYTE_ARRAY_LENGTH: u32 = 20;

fn typical_length_attribute<A: Annotated>(annotated: &A) -> Option<u32> {
    annotated.find_attribute(|a| match a {
        Attribute::TypicalLength(length) => Some(*length),
        _ => None,
    })
}

// ============================================================================
// DERIVED FROM TYPE
// ============================================================================

/// Copies the typical length of a member's type onto the member. A type's
/// own `TypicalLength` annotation wins over its value semantics.
pub struct TypicalLengthDerivedFromTypeFacetFactory {
    position: u32,
}

impl TypicalLengthDerivedFromTypeFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    pub fn length_of(cx: &FactoryContext<'_>, ty: &TypeRef) -> Option<u32> {
        match ty {
            TypeRef::Array(_) if ty.is_byte_array() => Some(BYTE_ARRAY_LENGTH),
            TypeRef::Array(_) => None,
            TypeRef::Generic { .. } => None,
            TypeRef::Named(name) => {
                let descriptor = cx.registry().resolve(name).ok()?;
                typical_length_attribute(&**descriptor).or_else(|| {
                    ValueKind::for_type(name, descriptor.kind).map(ValueKind::typical_length)
                })
            }
        }
    }

    fn process<S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        ty: &TypeRef,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        if let Some(length) = Self::length_of(cx, ty) {
            cx.add_facet(
                spec,
                Facet::TypicalLength {
                    length,
                    source: FacetSource::DerivedFromType,
                },
            )?;
        }
        Ok(())
    }
}

impl FacetFactory for TypicalLengthDerivedFromTypeFacetFactory {
    fn name(&self) -> &'static str {
        "TypicalLengthDerivedFromType"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::PROPERTIES
            .union(FeatureTypes::ACTIONS)
            .union(FeatureTypes::ACTION_PARAMETERS)
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
        Self::process(cx, &property.ty, spec)?;
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
        if let Some(return_type) = &method.return_type {
            Self::process(cx, return_type, spec)?;
        }
        Ok(metamodel)
    }

    fn process_param(
        &self,
        cx: &FactoryContext<'_>,
        method: &MethodDescriptor,
        index: usize,
        spec: &mut ParameterSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        if let Some(parameter) = method.parameters.get(index) {
            Self::process(cx, &parameter.ty, spec)?;
        }
        Ok(metamodel)
    }
}

// ============================================================================
// ANNOTATION
// ============================================================================

/// `[TypicalLength(n)]` on a property or parameter.
pub struct TypicalLengthAnnotationFacetFactory {
    position: u32,
}

impl TypicalLengthAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        if let Some(length) = typical_length_attribute(member) {
            cx.add_facet(
                spec,
                Facet::TypicalLength {
                    length,
                    source: FacetSource::Annotation,
                },
            )?;
        }
        Ok(())
    }
}

impl FacetFactory for TypicalLengthAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "TypicalLengthAnnotation"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::PROPERTIES_AND_ACTION_PARAMETERS
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

    fn process_param(
        &self,
        cx: &FactoryContext<'_>,
        method: &MethodDescriptor,
        index: usize,
        spec: &mut ParameterSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        if let Some(parameter) = method.parameters.get(index) {
            Self::process(cx, parameter, spec)?;
        }
        Ok(metamodel)
    }
}
