//! Inferred names and empty descriptions for every feature.

use std::sync::Arc;

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::{FeatureTypes, naming};
use crate::error::ReflectError;
use crate::meta::{
    ActionSpecBuilder, AssociationSpecBuilder, BuildMap, Facet, FacetSource, ParameterSpecBuilder,
    SpecificationBuilder, TypeSpecBuilder,
};
use crate::reflect::{MethodDescriptor, PropertyDescriptor, TypeDescriptor};

/// Runs first so every specification has a name, a description and (for
/// types) a plural; annotation factories later replace them.
pub struct FallbackFacetFactory {
    position: u32,
}

impl FallbackFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

fn add_names<S: SpecificationBuilder + ?Sized>(
    cx: &FactoryContext<'_>,
    spec: &mut S,
    name: &str,
) -> Result<(), ReflectError> {
    cx.add_facet(
        spec,
        Facet::Named {
            name: Arc::from(naming::natural_name(name)),
            source: FacetSource::Inferred,
        },
    )?;
    cx.add_facet(
        spec,
        Facet::DescribedAs {
            description: Arc::from(""),
            source: FacetSource::Default,
        },
    )?;
    Ok(())
}

impl FacetFactory for FallbackFacetFactory {
    fn name(&self) -> &'static str {
        "Fallback"
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
        let short = naming::short_name(&ty.full_name);
        add_names(cx, spec, short)?;
        cx.add_facet(
            spec,
            Facet::Plural {
                plural: Arc::from(naming::plural_name(&naming::natural_name(short))),
                source: FacetSource::Inferred,
            },
        )?;
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
        add_names(cx, spec, &property.name)?;
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
        add_names(cx, spec, &method.name)?;
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
            add_names(cx, spec, &parameter.name)?;
        }
        Ok(metamodel)
    }
}
