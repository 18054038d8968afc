use naked::base::constants;
use naked::diagnostics::codes;
use naked::reflect::{PropertyDescriptor, TypeDescriptor, TypeRef, TypeRegistry};
use naked::{ReflectError, ReflectMode, Reflector, ReflectorConfig, Severity};
use rstest::rstest;

use crate::helpers::reflect_helpers::reflect_demo;

#[rstest]
#[case(ReflectMode::Sequential)]
#[case(ReflectMode::Parallel)]
fn test_unknown_type_is_fatal(#[case] mode: ReflectMode) {
    let mut registry = TypeRegistry::with_system_types();
    registry
        .register(
            TypeDescriptor::class("Demo.Invoice")
                .with_property(PropertyDescriptor::new("Payer", TypeRef::named("Demo.Missing"))),
        )
        .unwrap();

    let result = Reflector::with_default_factories(
        registry,
        ReflectorConfig::new().with_root("Demo.Invoice").with_mode(mode),
    )
    .reflect();

    assert_eq!(result.unwrap_err(), ReflectError::unknown_type("Demo.Missing"));
}

#[test]
fn test_unknown_root_is_fatal() {
    let result = Reflector::with_default_factories(
        TypeRegistry::with_system_types(),
        ReflectorConfig::new().with_root("Demo.Nowhere"),
    )
    .reflect();
    assert!(matches!(result, Err(ReflectError::UnknownType(name)) if name.as_ref() == "Demo.Nowhere"));
}

#[test]
fn test_empty_config_publishes_empty_metamodel() {
    let reflection = Reflector::with_default_factories(TypeRegistry::with_system_types(), ReflectorConfig::new())
        .reflect()
        .unwrap();
    assert!(reflection.metamodel.is_empty());
    assert!(reflection.diagnostics.is_empty());
}

#[test]
fn test_mismatches_are_reported_not_fatal() {
    let reflection = reflect_demo(ReflectMode::Parallel);
    let found: Vec<_> = reflection
        .diagnostics
        .iter()
        .filter_map(|d| d.code.as_deref())
        .collect();

    assert_eq!(
        found.iter().filter(|c| **c == codes::OPTIONAL_ON_PRIMITIVE).count(),
        2
    );
    assert_eq!(
        found.iter().filter(|c| **c == codes::VALIDATE_PARAMETER_MISMATCH).count(),
        1
    );
    assert!(
        reflection
            .diagnostics
            .iter()
            .all(|d| d.severity == Severity::Warning && d.code.is_some())
    );
    assert!(reflection.metamodel.contains(constants::INT32));
}
