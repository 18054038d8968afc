use naked::base::{Identifier, TypeName, WhenTo, constants};
use naked::diagnostics::codes;
use naked::factory::{
    DescriptiveAnnotationFacetFactory, FacetFactory, FallbackFacetFactory, HiddenAnnotationFacetFactory,
    MandatoryDefaultFacetFactory, OptionalAnnotationFacetFactory, RegExAnnotationFacetFactory,
};
use naked::meta::{
    ActionSpecBuilder, AssociationKind, AssociationSpecBuilder, BuildMap, Facet, FacetKind, FacetPolicies,
    FacetPolicy, FacetSource, ParameterSpecBuilder, Specification,
};
use naked::reflect::{Attribute, MethodDescriptor, ParameterDescriptor, PropertyDescriptor, TypeDescriptor, TypeRegistry};
use rstest::rstest;

use crate::helpers::reflect_helpers::{FactoryHarness, RecordingRemover};

fn property_spec(owner: &str, property: &PropertyDescriptor) -> AssociationSpecBuilder {
    AssociationSpecBuilder::new(
        Identifier::for_field(owner, property.name.clone()),
        AssociationKind::OneToOne,
        property.ty.spec_key(),
    )
}

fn parameter_spec(owner: &str, method: &MethodDescriptor, index: usize) -> ParameterSpecBuilder {
    let identifier = method.identifier(&TypeName::from(owner));
    ParameterSpecBuilder::new(&identifier, index, method.parameters[index].ty.spec_key())
}

#[test]
fn test_hidden_action_gets_facet_without_removal() {
    let harness = FactoryHarness::new(TypeRegistry::with_system_types());
    let method = MethodDescriptor::new("SomeAction").with_attribute(Attribute::Hidden(WhenTo::Always));
    let ty = TypeDescriptor::class("Demo.Customer").with_method(method.clone());
    let mut spec = ActionSpecBuilder::new(method.identifier(&ty.full_name), None);
    let mut remover = RecordingRemover::default();

    HiddenAnnotationFacetFactory::new(10)
        .process_method(&harness.cx(), &ty, &method, &mut remover, &mut spec, BuildMap::new())
        .unwrap();

    assert_eq!(spec.get_facet(FacetKind::Hidden), Some(&Facet::Hidden(WhenTo::Always)));
    assert_eq!(spec.hidden(), Some(WhenTo::Always));
    assert!(remover.removed.is_empty());
}

#[test]
fn test_optional_on_primitive_parameter_is_reported() {
    let harness = FactoryHarness::new(TypeRegistry::with_system_types());
    let method = MethodDescriptor::new("Order").with_parameter(
        ParameterDescriptor::new("count", constants::INT32).with_attribute(Attribute::Optionally),
    );
    let mut spec = parameter_spec("Demo.Customer", &method, 0);

    OptionalAnnotationFacetFactory::new(13)
        .process_param(&harness.cx(), &method, 0, &mut spec, BuildMap::new())
        .unwrap();

    assert!(!spec.contains_facet(FacetKind::Mandatory));
    let diagnostics = harness.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].has_code(codes::OPTIONAL_ON_PRIMITIVE));
    assert_eq!(diagnostics[0].identifier, *spec.identifier());
}

#[test]
fn test_optional_then_default_keeps_optional() {
    let harness = FactoryHarness::new(TypeRegistry::with_system_types());
    let cx = harness.cx();
    let method = MethodDescriptor::new("Rename").with_parameter(
        ParameterDescriptor::new("name", constants::STRING).with_attribute(Attribute::Optionally),
    );
    let mut spec = parameter_spec("Demo.Customer", &method, 0);

    let metamodel = OptionalAnnotationFacetFactory::new(13)
        .process_param(&cx, &method, 0, &mut spec, BuildMap::new())
        .unwrap();
    MandatoryDefaultFacetFactory::new(28)
        .process_param(&cx, &method, 0, &mut spec, metamodel)
        .unwrap();

    assert!(!spec.is_mandatory());
    assert!(spec.contains_facet(FacetKind::Mandatory));
    assert!(harness.diagnostics().is_empty());
}

#[rstest]
#[case(constants::STRING, true)]
#[case(constants::INT32, false)]
fn test_regex_only_on_strings(#[case] type_name: &str, #[case] accepted: bool) {
    let harness = FactoryHarness::new(TypeRegistry::with_system_types());
    let property = PropertyDescriptor::new("Code", type_name).with_attribute(Attribute::RegEx {
        pattern: "^[A-Z]+$".into(),
        message: None,
        case_sensitive: true,
    });
    let ty = TypeDescriptor::class("Demo.Product").with_property(property.clone());
    let mut spec = property_spec("Demo.Product", &property);

    RegExAnnotationFacetFactory::new(25)
        .process_property(
            &harness.cx(),
            &ty,
            &property,
            &mut RecordingRemover::default(),
            &mut spec,
            BuildMap::new(),
        )
        .unwrap();

    assert_eq!(spec.contains_facet(FacetKind::RegEx), accepted);
    let diagnostics = harness.diagnostics();
    assert_eq!(diagnostics.is_empty(), accepted);
    if !accepted {
        assert!(diagnostics[0].has_code(codes::REGEX_ON_NON_STRING));
    }
}

#[rstest]
#[case(FacetPolicy::Replace, "Display name", FacetSource::Annotation)]
#[case(FacetPolicy::KeepExisting, "Full Name", FacetSource::Inferred)]
fn test_named_facet_policy(
    #[case] policy: FacetPolicy,
    #[case] expected_name: &str,
    #[case] expected_source: FacetSource,
) {
    let mut harness = FactoryHarness::new(TypeRegistry::with_system_types());
    harness.policies = FacetPolicies::new().with(FacetKind::Named, policy);
    let cx = harness.cx();
    let property = PropertyDescriptor::new("FullName", constants::STRING)
        .with_attribute(Attribute::Named("Display name".into()));
    let ty = TypeDescriptor::class("Demo.Customer").with_property(property.clone());
    let mut spec = property_spec("Demo.Customer", &property);
    let mut remover = RecordingRemover::default();

    let metamodel = FallbackFacetFactory::new(0)
        .process_property(&cx, &ty, &property, &mut remover, &mut spec, BuildMap::new())
        .unwrap();
    DescriptiveAnnotationFacetFactory::new(22)
        .process_property(&cx, &ty, &property, &mut remover, &mut spec, metamodel)
        .unwrap();

    assert_eq!(
        spec.get_facet(FacetKind::Named),
        Some(&Facet::Named {
            name: expected_name.into(),
            source: expected_source,
        })
    );
}
