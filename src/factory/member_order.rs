//! `MemberOrder(name, sequence)` annotation.

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::FeatureTypes;
use crate::error::ReflectError;
use crate::meta::{ActionSpecBuilder, AssociationSpecBuilder, BuildMap, Facet, SpecificationBuilder};
use crate::reflect::{Annotated, Attribute, MethodDescriptor, PropertyDescriptor, TypeDescriptor};

pub struct MemberOrderAnnotationFacetFactory {
    position: u32,
}

impl MemberOrderAnnotationFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        spec: &mut S,
    ) -> Result<(), ReflectError> {
        let order = member.find_attribute(|a| match a {
            Attribute::MemberOrder { name, sequence } => Some(Facet::MemberOrder {
                name: name.clone(),
                sequence: sequence.clone(),
            }),
            _ => None,
        });
        if let Some(facet) = order {
            cx.add_facet(spec, facet)?;
        }
        Ok(())
    }
}

impl FacetFactory for MemberOrderAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "MemberOrderAnnotation"
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
