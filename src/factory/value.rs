//! Value semantics for system value types and enums.

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::FeatureTypes;
use crate::error::ReflectError;
use crate::meta::{BuildMap, Facet, SpecKind, TypeSpecBuilder, ValueKind, ValueSemantics};
use crate::reflect::TypeDescriptor;

pub struct ValueFacetFactory {
    position: u32,
}

impl ValueFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for ValueFacetFactory {
    fn name(&self) -> &'static str {
        "Value"
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
        if let Some(kind) = ValueKind::for_type(&ty.full_name, ty.kind) {
            spec.set_kind(SpecKind::Value);
            cx.add_facet(spec, Facet::Value(ValueSemantics::for_kind(kind)))?;
        }
        Ok(metamodel)
    }
}
