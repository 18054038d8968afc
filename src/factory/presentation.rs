//! Presentation annotations: `MultiLine`, `PresentationHint`, `NotNavigable`.

use std::sync::Arc;

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::FeatureTypes;
use crate::diagnostics::codes;
use crate::error::ReflectError;
use crate::meta::{
    ActionSpecBuilder, AssociationSpecBuilder, BuildMap, Facet, ParameterSpecBuilder,
    SpecificationBuilder, TypeSpecBuilder,
};
use crate::reflect::{Annotated, Attribute, MethodDescriptor, PropertyDescriptor, TypeDescriptor, TypeRef};

// ============================================================================
// MULTI LINE
// ============================================================================

/// `[MultiLine(lines, width)]`. On properties and parameters only string
/// members qualify.
pub struct MultiLineAnnotationFacetFactory {
    position: u32,
}

impl MultiLineAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn multi_line<A: Annotated>(member: &A) -> Option<Facet> {
        member.find_attribute(|a| match a {
            Attribute::MultiLine { lines, width } => Some(Facet::MultiLine {
                lines: *lines,
                width: *width,
            }),
            _ => None,
        })
    }

    fn process_string_member<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        ty: &TypeRef,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        let Some(facet) = Self::multi_line(member) else {
            return Ok(());
        };
        if cx.is_string(ty) {
            cx.add_facet(spec, facet)?;
        } else {
            cx.warn(
                spec.identifier(),
                codes::MULTILINE_ON_NON_STRING,
                format!("MultiLine annotation on member of type {ty}; ignored"),
            );
        }
        Ok(())
    }
}

impl FacetFactory for MultiLineAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "MultiLineAnnotation"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::EVERYTHING_BUT_COLLECTIONS
    }

    fn process_type(
        &self,
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        if let Some(facet) = Self::multi_line(ty) {
            cx.add_facet(spec, facet)?;
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
        Self::process_string_member(cx, property, &property.ty, spec)?;
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
        if let Some(facet) = Self::multi_line(method) {
            cx.add_facet(spec, facet)?;
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
            Self::process_string_member(cx, parameter, &parameter.ty, spec)?;
        }
        Ok(metamodel)
    }
}

// ============================================================================
// PRESENTATION HINT
// ============================================================================

/// `[PresentationHint(hint)]` on anything.
pub struct PresentationHintAnnotationFacetFactory {
    position: u32,
}

impl PresentationHintAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        let hint = member.find_attribute(|a| match a {
            Attribute::PresentationHint(hint) => Some(Arc::clone(hint)),
            _ => None,
        });
        if let Some(hint) = hint {
            cx.add_facet(spec, Facet::PresentationHint(hint))?;
        }
        Ok(())
    }
}

impl FacetFactory for PresentationHintAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "PresentationHintAnnotation"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::EVERYTHING
    }

    fn process_type(
        &self,
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        Self::process(cx, ty, spec)?;
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

// ============================================================================
// NOT NAVIGABLE
// ============================================================================

/// `[NotNavigable]` on a type, or on a property or the property's type.
pub struct NotNavigableAnnotationFacetFactory {
    position: u32,
}

impl NotNavigableAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

fn is_not_navigable<A: Annotated>(annotated: &A) -> bool {
    annotated.has_attribute(|a| matches!(a, Attribute::NotNavigable))
}

impl FacetFactory for NotNavigableAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "NotNavigableAnnotation"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::OBJECTS_AND_PROPERTIES
    }

    fn process_type(
        &self,
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        if is_not_navigable(ty) {
            cx.add_facet(spec, Facet::NotNavigable)?;
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
        let on_type = cx
            .registry()
            .resolve_ref(&property.ty)
            .is_ok_and(|descriptor| is_not_navigable(&**descriptor));
        if on_type || is_not_navigable(property) {
            cx.add_facet(spec, Facet::NotNavigable)?;
        }
        Ok(metamodel)
    }
}
