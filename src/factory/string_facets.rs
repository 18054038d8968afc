//! String entry constraints: `MaxLength`/`StringLength`, `Mask`, `RegEx`.

use std::sync::Arc;

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::FeatureTypes;
use crate::diagnostics::codes;
use crate::error::ReflectError;
use crate::meta::{
    AssociationSpecBuilder, BuildMap, Facet, ParameterSpecBuilder, SpecificationBuilder,
    TypeSpecBuilder,
};
use crate::reflect::{Annotated, Attribute, MethodDescriptor, PropertyDescriptor, TypeDescriptor, TypeRef};

// ============================================================================
// MAX LENGTH
// ============================================================================

/// `[MaxLength(n)]`, or `[StringLength(n)]` when no `MaxLength` is present.
pub struct MaxLengthAnnotationFacetFactory {
    position: u32,
}

impl MaxLengthAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        let length = member
            .find_attribute(|a| match a {
                Attribute::MaxLength(length) => Some(*length),
                _ => None,
            })
            .or_else(|| {
                member.find_attribute(|a| match a {
                    Attribute::StringLength(length) => Some(*length),
                    _ => None,
                })
            });
        if let Some(length) = length {
            cx.add_facet(spec, Facet::MaxLength(length))?;
        }
        Ok(())
    }
}

impl FacetFactory for MaxLengthAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "MaxLengthAnnotation"
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

// ============================================================================
// MASK
// ============================================================================

/// `[Mask(mask)]` on a type, property or parameter.
pub struct MaskAnnotationFacetFactory {
    position: u32,
}

impl MaskAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        let mask = member.find_attribute(|a| match a {
            Attribute::Mask(mask) => Some(Arc::clone(mask)),
            _ => None,
        });
        if let Some(mask) = mask {
            cx.add_facet(spec, Facet::Mask(mask))?;
        }
        Ok(())
    }
}

impl FacetFactory for MaskAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "MaskAnnotation"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::OBJECTS.union(FeatureTypes::PROPERTIES_AND_ACTION_PARAMETERS)
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
// REGEX
// ============================================================================

/// `[RegEx(pattern, message, case_sensitive)]` on string members only.
pub struct RegExAnnotationFacetFactory {
    position: u32,
}

impl RegExAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        ty: &TypeRef,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        let regex = member.find_attribute(|a| match a {
            Attribute::RegEx {
                pattern,
                message,
                case_sensitive,
            } => Some(Facet::RegEx {
                pattern: Arc::clone(pattern),
                message: message.clone(),
                case_sensitive: *case_sensitive,
            }),
            _ => None,
        });
        let Some(facet) = regex else {
            return Ok(());
        };
        if cx.is_string(ty) {
            cx.add_facet(spec, facet)?;
        } else {
            cx.warn(
                spec.identifier(),
                codes::REGEX_ON_NON_STRING,
                format!("RegEx annotation on member of type {ty}; ignored"),
            );
        }
        Ok(())
    }
}

impl FacetFactory for RegExAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "RegExAnnotation"
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
        Self::process(cx, property, &property.ty, spec)?;
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
            Self::process(cx, parameter, &parameter.ty, spec)?;
        }
        Ok(metamodel)
    }
}
