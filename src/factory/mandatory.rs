//! `Required` / `Optionally` annotations and the mandatory default.

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::FeatureTypes;
use crate::diagnostics::codes;
use crate::error::ReflectError;
use crate::meta::{AssociationSpecBuilder, BuildMap, Facet, FacetSource, ParameterSpecBuilder, Specification};
use crate::reflect::{Annotated, Attribute, MethodDescriptor, PropertyDescriptor, TypeDescriptor};

// ============================================================================
// REQUIRED
// ============================================================================

pub struct RequiredAnnotationFacetFactory {
    position: u32,
}

impl RequiredAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

fn annotated_mandatory(mandatory: bool) -> Facet {
    Facet::Mandatory {
        mandatory,
        source: FacetSource::Annotation,
    }
}

impl FacetFactory for RequiredAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "RequiredAnnotation"
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
        if property.has_attribute(|a| matches!(a, Attribute::Required)) {
            cx.add_facet(spec, annotated_mandatory(true))?;
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
        let required = method
            .parameters
            .get(index)
            .is_some_and(|p| p.has_attribute(|a| matches!(a, Attribute::Required)));
        if required {
            cx.add_facet(spec, annotated_mandatory(true))?;
        }
        Ok(metamodel)
    }
}

// ============================================================================
// OPTIONALLY
// ============================================================================

/// `[Optionally]`. A value that can never be null (primitive or enum)
/// cannot be optional; the annotation is reported and ignored.
pub struct OptionalAnnotationFacetFactory {
    position: u32,
}

impl OptionalAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for OptionalAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "OptionalAnnotation"
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
        if !property.has_attribute(|a| matches!(a, Attribute::Optionally)) {
            return Ok(metamodel);
        }
        if cx.is_primitive_or_enum(&property.ty) {
            cx.warn(
                spec.identifier(),
                codes::OPTIONAL_ON_PRIMITIVE,
                format!("Optionally annotation on non-nullable property of type {}; ignored", property.ty),
            );
        } else {
            cx.add_facet(spec, annotated_mandatory(false))?;
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
        let Some(parameter) = method.parameters.get(index) else {
            return Ok(metamodel);
        };
        if !parameter.has_attribute(|a| matches!(a, Attribute::Optionally)) {
            return Ok(metamodel);
        }
        if cx.is_primitive_or_enum(&parameter.ty) {
            cx.warn(
                spec.identifier(),
                codes::OPTIONAL_ON_PRIMITIVE,
                format!(
                    "Optionally annotation on non-nullable parameter '{}' of type {}; ignored",
                    parameter.name, parameter.ty
                ),
            );
        } else {
            cx.add_facet(spec, annotated_mandatory(false))?;
        }
        Ok(metamodel)
    }
}

// ============================================================================
// DEFAULT
// ============================================================================

/// Properties and parameters without a `Mandatory` facet are mandatory.
pub struct MandatoryDefaultFacetFactory {
    position: u32,
}

impl MandatoryDefaultFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

fn default_mandatory() -> Facet {
    Facet::Mandatory {
        mandatory: true,
        source: FacetSource::Default,
    }
}

impl FacetFactory for MandatoryDefaultFacetFactory {
    fn name(&self) -> &'static str {
        "MandatoryDefault"
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
        _property: &PropertyDescriptor,
        _remover: &mut dyn MethodRemover,
        spec: &mut AssociationSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        cx.add_default(spec, default_mandatory())?;
        Ok(metamodel)
    }

    fn process_param(
        &self,
        cx: &FactoryContext<'_>,
        _method: &MethodDescriptor,
        _index: usize,
        spec: &mut ParameterSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        cx.add_default(spec, default_mandatory())?;
        Ok(metamodel)
    }
}
