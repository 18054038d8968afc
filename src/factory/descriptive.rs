//! `Named`, `DescribedAs` and `Plural` annotations.

use std::sync::Arc;

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::FeatureTypes;
use crate::error::ReflectError;
use crate::meta::{
    ActionSpecBuilder, AssociationSpecBuilder, BuildMap, Facet, FacetSource, ParameterSpecBuilder,
    SpecificationBuilder, TypeSpecBuilder,
};
use crate::reflect::{Annotated, Attribute, MethodDescriptor, PropertyDescriptor, TypeDescriptor};

/// Replaces the inferred names and descriptions with annotated ones.
/// `Plural` only applies to types.
pub struct DescriptiveAnnotationFacetFactory {
    position: u32,
}

impl DescriptiveAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        for attribute in member.attributes() {
            let facet = match attribute {
                Attribute::Named(name) => Facet::Named {
                    name: Arc::clone(name),
                    source: FacetSource::Annotation,
                },
                Attribute::DescribedAs(description) => Facet::DescribedAs {
                    description: Arc::clone(description),
                    source: FacetSource::Annotation,
                },
                _ => continue,
            };
            cx.add_facet(spec, facet)?;
        }
        Ok(())
    }
}

impl FacetFactory for DescriptiveAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "DescriptiveAnnotation"
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
        let plural = ty.find_attribute(|a| match a {
            Attribute::Plural(plural) => Some(Arc::clone(plural)),
            _ => None,
        });
        if let Some(plural) = plural {
            cx.add_facet(
                spec,
                Facet::Plural {
                    plural,
                    source: FacetSource::Annotation,
                },
            )?;
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
