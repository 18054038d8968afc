//! Collection shape and element-type inference.

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::{FeatureTypes, TypeName, constants};
use crate::error::ReflectError;
use crate::meta::{
    ActionSpecBuilder, AssociationSpecBuilder, BuildMap, CollectionShape, Facet, SpecKind,
    SpecificationBuilder, TypeOfSource, TypeSpecBuilder,
};
use crate::reflect::{
    Annotated, Attribute, MethodDescriptor, PropertyDescriptor, TypeDescriptor, TypeKind, TypeRef,
};

// ============================================================================
// COLLECTION TYPES
// ============================================================================

/// Marks collection types: arrays, generic and non-generic collections.
///
/// A collection type's own element type is unknown (the specification is
/// shared by every instantiation), so it is recorded as `System.Object`.
pub struct CollectionFacetFactory {
    position: u32,
}

impl CollectionFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for CollectionFacetFactory {
    fn name(&self) -> &'static str {
        "Collection"
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
        let (shape, source) = match ty.kind {
            TypeKind::Array => (CollectionShape::Array, Some(TypeOfSource::Array)),
            TypeKind::Collection { generic: true } => {
                (CollectionShape::Generic, Some(TypeOfSource::Generics))
            }
            TypeKind::Collection { generic: false } => (CollectionShape::NonGeneric, None),
            _ => return Ok(metamodel),
        };

        spec.set_kind(SpecKind::Collection);
        cx.add_facet(spec, Facet::Collection(shape))?;
        if let Some(source) = source {
            cx.add_facet(
                spec,
                Facet::TypeOf {
                    element_type: TypeName::from(constants::OBJECT),
                    source,
                },
            )?;
        }
        Ok(metamodel)
    }
}

// ============================================================================
// ELEMENT TYPES
// ============================================================================

/// Infers the element type of collection-valued properties and actions.
///
/// An explicit `TypeOf` annotation wins over an array element type, which
/// wins over the first generic argument. The element type's specification
/// is loaded so it is introspected in a later round.
pub struct TypeOfFacetFactory {
    position: u32,
}

impl TypeOfFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    fn process<A: Annotated, S: SpecificationBuilder + ?Sized>(
        cx: &FactoryContext<'_>,
        member: &A,
        ty: &TypeRef,
        spec: &mut S,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        let annotated = member.find_attribute(|a| match a {
            Attribute::TypeOf(element) => Some(element.clone()),
            _ => None,
        });
        let inferred = annotated
            .map(|element| (element, TypeOfSource::Annotation))
            .or_else(|| {
                ty.array_element()
                    .map(|element| (element.clone(), TypeOfSource::Array))
            })
            .or_else(|| {
                ty.generic_args()
                    .first()
                    .map(|element| (element.clone(), TypeOfSource::Generics))
            });

        let Some((element, source)) = inferred else {
            return Ok(metamodel);
        };
        let element_type = element.spec_key();
        cx.add_facet(
            spec,
            Facet::TypeOf {
                element_type: element_type.clone(),
                source,
            },
        )?;
        cx.add_facet(spec, Facet::ElementType(element_type))?;
        cx.load_spec(&element, metamodel)
    }
}

impl FacetFactory for TypeOfFacetFactory {
    fn name(&self) -> &'static str {
        "TypeOf"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::COLLECTIONS_AND_ACTIONS
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
        Self::process(cx, property, &property.ty, spec, metamodel)
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
        match &method.return_type {
            Some(ty) if cx.registry().is_collection(ty) => {
                Self::process(cx, method, ty, spec, metamodel)
            }
            _ => Ok(metamodel),
        }
    }
}
