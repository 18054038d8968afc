use std::any::Any;
use std::fs;

use naked::meta::{Facet, FacetKind, Metamodel};
use naked::reflect::{MethodDescriptor, TypeDescriptor, TypeRegistry};
use naked::{ReflectMode, Reflector, ReflectorConfig, Specification};

use crate::helpers::domain_fixtures::DEMO_REGISTRY;
use crate::helpers::reflect_helpers::reflect_demo;

#[test]
fn test_json_round_trip_through_file() {
    let reflection = reflect_demo(ReflectMode::Parallel);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metamodel.json");

    fs::write(&path, reflection.metamodel.to_json().unwrap()).unwrap();
    let json = fs::read_to_string(&path).unwrap();
    let loaded = Metamodel::from_json(&json, &DEMO_REGISTRY).unwrap();

    assert_eq!(loaded.len(), reflection.metamodel.len());
    assert_eq!(loaded.all_specifications(), reflection.metamodel.all_specifications());
}

#[test]
fn test_loaded_bindings_are_rebound() {
    let mut registry = TypeRegistry::with_system_types();
    registry
        .register(
            TypeDescriptor::class("Demo.Counter").with_method(
                MethodDescriptor::new("Next")
                    .returning("System.Int32")
                    .with_body(|_, _| Some(Box::new(7_i32) as Box<dyn Any + Send>)),
            ),
        )
        .unwrap();
    let reflection = Reflector::with_default_factories(
        registry.clone(),
        ReflectorConfig::new().with_root("Demo.Counter"),
    )
    .reflect()
    .unwrap();

    let json = reflection.metamodel.to_json().unwrap();
    let loaded = Metamodel::from_json(&json, &registry).unwrap();
    let counter = loaded.get_specification("Demo.Counter").unwrap();
    let next = counter.get_action("Next").unwrap();

    let Some(Facet::ActionInvocation { binding, .. }) = next.get_facet(FacetKind::ActionInvocation)
    else {
        panic!("missing invocation facet");
    };
    assert!(binding.is_bound());
    let result = binding.invoke(&(), &[]).unwrap().unwrap();
    assert_eq!(result.downcast_ref::<i32>(), Some(&7));

    let unbound = Metamodel::from_json(&json, &TypeRegistry::with_system_types()).unwrap();
    let action = unbound.get_specification("Demo.Counter").unwrap();
    let facet = action.get_action("Next").unwrap().get_facet(FacetKind::ActionInvocation);
    assert!(matches!(facet, Some(Facet::ActionInvocation { binding, .. }) if !binding.is_bound()));
}
