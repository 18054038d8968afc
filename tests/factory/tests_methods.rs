use naked::base::{FeatureType, constants};
use naked::diagnostics::codes;
use naked::factory::{
    CallbackMethodsFacetFactory, FacetFactory, IteratorFilteringFacetFactory,
    RemoveIgnoredMethodsFacetFactory, SystemClassMethodFilteringFacetFactory,
    ValidateObjectFacetFactory, default_factories,
};
use naked::meta::{BuildMap, Facet, FacetKind, LifecycleEvent, SpecKind, Specification, TypeSpecBuilder};
use naked::reflect::{
    Attribute, MethodDescriptor, ParameterDescriptor, PropertyDescriptor, TypeDescriptor, TypeRef,
    TypeRegistry,
};

use crate::helpers::reflect_helpers::{FactoryHarness, RecordingRemover};

fn run_type_factory(
    factory: &dyn FacetFactory,
    harness: &FactoryHarness,
    ty: &TypeDescriptor,
) -> (TypeSpecBuilder, RecordingRemover) {
    let mut spec = TypeSpecBuilder::new(ty.full_name.clone(), SpecKind::Object);
    let mut remover = RecordingRemover::default();
    factory
        .process_type(&harness.cx(), ty, &mut remover, &mut spec, BuildMap::new())
        .unwrap();
    (spec, remover)
}

#[test]
fn test_enumerable_type_loses_get_enumerator() {
    let harness = FactoryHarness::new(TypeRegistry::with_system_types());
    let ty = TypeDescriptor::class("Demo.OrderBatch")
        .implementing(TypeRef::generic(constants::IENUMERABLE_OF_T, [TypeRef::named("Demo.Order")]))
        .with_method(MethodDescriptor::new(constants::GET_ENUMERATOR))
        .with_method(MethodDescriptor::new("Ship"));

    let (_, remover) = run_type_factory(&IteratorFilteringFacetFactory::new(1), &harness, &ty);
    assert_eq!(remover.removed, vec![constants::GET_ENUMERATOR]);
}

#[test]
fn test_plain_type_keeps_get_enumerator() {
    let harness = FactoryHarness::new(TypeRegistry::with_system_types());
    let ty = TypeDescriptor::class("Demo.Order").with_method(MethodDescriptor::new(constants::GET_ENUMERATOR));

    let (_, remover) = run_type_factory(&IteratorFilteringFacetFactory::new(1), &harness, &ty);
    assert!(remover.removed.is_empty());
}

#[test]
fn test_system_and_ignored_methods_are_removed() {
    let harness = FactoryHarness::new(TypeRegistry::with_system_types());
    let ty = TypeDescriptor::class("Demo.Order")
        .with_method(MethodDescriptor::new("ToString").returning(constants::STRING))
        .with_method(MethodDescriptor::new("GetHashCode").returning(constants::INT32))
        .with_method(MethodDescriptor::new("Load").as_static())
        .with_method(MethodDescriptor::new("Audit").with_attribute(Attribute::Ignore))
        .with_method(MethodDescriptor::new("Ship"));

    let (_, system) = run_type_factory(&SystemClassMethodFilteringFacetFactory::new(2), &harness, &ty);
    let (_, ignored) = run_type_factory(&RemoveIgnoredMethodsFacetFactory::new(3), &harness, &ty);

    assert_eq!(system.removed, vec!["ToString", "GetHashCode"]);
    assert_eq!(ignored.removed, vec!["Load", "Audit"]);
}

#[test]
fn test_callbacks_are_bound_and_claimed() {
    let harness = FactoryHarness::new(TypeRegistry::with_system_types());
    let ty = TypeDescriptor::class("Demo.Order")
        .with_method(MethodDescriptor::new("Persisting"))
        .with_method(MethodDescriptor::new("Updated"))
        .with_method(
            MethodDescriptor::new("Deleted").with_parameter(ParameterDescriptor::new("reason", constants::STRING)),
        );

    let (spec, remover) = run_type_factory(&CallbackMethodsFacetFactory::new(6), &harness, &ty);

    assert!(spec.contains_facet(FacetKind::Callback(LifecycleEvent::Persisting)));
    assert!(spec.contains_facet(FacetKind::Callback(LifecycleEvent::Updated)));
    assert!(!spec.contains_facet(FacetKind::Callback(LifecycleEvent::Deleted)));
    assert_eq!(remover.removed, vec!["Persisting", "Updated"]);
}

#[test]
fn test_validate_object_skips_mismatched_method() {
    let harness = FactoryHarness::new(TypeRegistry::with_system_types());
    let ty = TypeDescriptor::class("Demo.Customer")
        .with_property(PropertyDescriptor::new("FirstName", constants::STRING))
        .with_method(
            MethodDescriptor::new("Validate")
                .returning(constants::STRING)
                .with_parameter(ParameterDescriptor::new("firstName", constants::STRING)),
        )
        .with_method(
            MethodDescriptor::new("Validate")
                .returning(constants::STRING)
                .with_parameter(ParameterDescriptor::new("surname", constants::STRING)),
        );

    let (spec, remover) = run_type_factory(&ValidateObjectFacetFactory::new(7), &harness, &ty);

    let Some(Facet::ValidateObject(methods)) = spec.get_facet(FacetKind::ValidateObject) else {
        panic!("expected a ValidateObject facet");
    };
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].parameter_names, vec!["firstname"]);
    assert_eq!(remover.removed.len(), 2);

    let diagnostics = harness.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].has_code(codes::VALIDATE_PARAMETER_MISMATCH));
}

#[test]
fn test_default_pipeline_feature_masks() {
    let factories = default_factories();
    let object_factories = factories.for_feature(FeatureType::Object).count();
    let parameter_factories: Vec<_> = factories
        .for_feature(FeatureType::ActionParameter)
        .map(|f| f.name())
        .collect();

    assert!(object_factories > 10);
    assert_eq!(parameter_factories.first(), Some(&"Fallback"));
    assert_eq!(parameter_factories.last(), Some(&"MandatoryDefault"));
}
