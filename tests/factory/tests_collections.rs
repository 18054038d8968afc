use naked::base::{Identifier, TypeName, constants};
use naked::factory::{CollectionFacetFactory, FacetFactory, TypeOfFacetFactory};
use naked::meta::{
    ActionSpecBuilder, AssociationKind, AssociationSpecBuilder, BuildMap, CollectionShape, Facet,
    FacetKind, SpecKind, Specification, TypeOfSource, TypeSpecBuilder,
};
use naked::reflect::{
    Attribute, MethodDescriptor, PropertyDescriptor, TypeDescriptor, TypeRef, TypeRegistry,
};
use rstest::rstest;

use crate::helpers::reflect_helpers::{FactoryHarness, RecordingRemover};

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_system_types();
    registry
        .register_all([
            TypeDescriptor::class("Demo.Customer"),
            TypeDescriptor::class("Demo.Order"),
            TypeDescriptor::class("Demo.Other"),
        ])
        .unwrap();
    registry
}

fn process_collection_property(property: PropertyDescriptor) -> (AssociationSpecBuilder, BuildMap) {
    let harness = FactoryHarness::new(registry());
    let ty = TypeDescriptor::class("Demo.Customer").with_property(property.clone());
    let mut spec = AssociationSpecBuilder::new(
        Identifier::for_field("Demo.Customer", property.name.clone()),
        AssociationKind::OneToMany,
        property.ty.spec_key(),
    );
    let metamodel = TypeOfFacetFactory::new(15)
        .process_property(
            &harness.cx(),
            &ty,
            &property,
            &mut RecordingRemover::default(),
            &mut spec,
            BuildMap::new(),
        )
        .unwrap();
    (spec, metamodel)
}

#[test]
fn test_generic_collection_element_type() {
    let property = PropertyDescriptor::new(
        "Orders",
        TypeRef::generic(constants::ILIST_OF_T, [TypeRef::named("Demo.Order")]),
    );
    let (spec, metamodel) = process_collection_property(property);

    assert_eq!(
        spec.get_facet(FacetKind::TypeOf),
        Some(&Facet::TypeOf {
            element_type: "Demo.Order".into(),
            source: TypeOfSource::Generics,
        })
    );
    assert_eq!(
        spec.get_facet(FacetKind::ElementType),
        Some(&Facet::ElementType("Demo.Order".into()))
    );
    assert!(metamodel.contains_key("Demo.Order"));
    assert_eq!(metamodel.pending(), vec![TypeName::from("Demo.Order")]);
}

#[test]
fn test_array_element_type() {
    let property = PropertyDescriptor::new("Orders", TypeRef::array_of(TypeRef::named("Demo.Order")));
    let (spec, metamodel) = process_collection_property(property);

    assert!(matches!(
        spec.get_facet(FacetKind::TypeOf),
        Some(Facet::TypeOf { source: TypeOfSource::Array, .. })
    ));
    assert_eq!(
        spec.get_facet(FacetKind::ElementType),
        Some(&Facet::ElementType("Demo.Order".into()))
    );
    assert_eq!(metamodel.pending(), vec![TypeName::from("Demo.Order")]);
}

#[test]
fn test_annotation_beats_generic_inference() {
    let property = PropertyDescriptor::new(
        "Orders",
        TypeRef::generic(constants::ILIST_OF_T, [TypeRef::named("Demo.Other")]),
    )
    .with_attribute(Attribute::TypeOf(TypeRef::named("Demo.Order")));
    let (spec, metamodel) = process_collection_property(property);

    assert_eq!(
        spec.get_facet(FacetKind::TypeOf),
        Some(&Facet::TypeOf {
            element_type: "Demo.Order".into(),
            source: TypeOfSource::Annotation,
        })
    );
    assert_eq!(
        spec.get_facet(FacetKind::ElementType),
        Some(&Facet::ElementType("Demo.Order".into()))
    );
    assert!(metamodel.contains_key("Demo.Order"));
}

#[rstest]
#[case(TypeRef::array_of(TypeRef::named("Demo.Order")), TypeOfSource::Array)]
#[case(TypeRef::generic(constants::ILIST_OF_T, [TypeRef::named("Demo.Order")]), TypeOfSource::Generics)]
fn test_action_return_element_type(#[case] return_type: TypeRef, #[case] source: TypeOfSource) {
    let harness = FactoryHarness::new(registry());
    let method = MethodDescriptor::new("RecentOrders").returning(return_type.clone());
    let ty = TypeDescriptor::class("Demo.Customer").with_method(method.clone());
    let mut spec = ActionSpecBuilder::new(
        method.identifier(&TypeName::from("Demo.Customer")),
        Some(return_type.spec_key()),
    );

    let metamodel = TypeOfFacetFactory::new(15)
        .process_method(
            &harness.cx(),
            &ty,
            &method,
            &mut RecordingRemover::default(),
            &mut spec,
            BuildMap::new(),
        )
        .unwrap();

    assert_eq!(
        spec.get_facet(FacetKind::TypeOf),
        Some(&Facet::TypeOf {
            element_type: "Demo.Order".into(),
            source,
        })
    );
    assert_eq!(
        spec.get_facet(FacetKind::ElementType),
        Some(&Facet::ElementType("Demo.Order".into()))
    );
    assert_eq!(metamodel.pending(), vec![TypeName::from("Demo.Order")]);
}

#[test]
fn test_collection_type_is_reclassified() {
    let harness = FactoryHarness::new(registry());
    let descriptor = harness.registry.resolve(constants::LIST_OF_T).unwrap().clone();
    let mut spec = TypeSpecBuilder::new(constants::LIST_OF_T, SpecKind::Object);

    CollectionFacetFactory::new(4)
        .process_type(
            &harness.cx(),
            &descriptor,
            &mut RecordingRemover::default(),
            &mut spec,
            BuildMap::new(),
        )
        .unwrap();

    assert_eq!(spec.kind(), SpecKind::Collection);
    assert_eq!(
        spec.get_facet(FacetKind::Collection),
        Some(&Facet::Collection(CollectionShape::Generic))
    );
}
