use naked::base::{WhenTo, constants};
use naked::meta::{AssociationKind, Facet, FacetKind, FacetPolicy, FacetSource, SpecKind, Specification};
use naked::reflect::{PropertyDescriptor, TypeDescriptor, TypeRef, TypeRegistry};
use naked::{ReflectMode, Reflector, ReflectorConfig};

use crate::helpers::domain_fixtures::{CUSTOMER, DEMO_REGISTRY, ORDER, PRODUCT, REPOSITORY};
use crate::helpers::reflect_helpers::{demo_config, reflect_demo};

#[test]
fn test_fields_in_member_order() {
    let metamodel = reflect_demo(ReflectMode::Parallel).metamodel;
    let customer = metamodel.get_specification(CUSTOMER).unwrap();
    let names: Vec<_> = customer
        .fields()
        .iter()
        .filter_map(|f| f.identifier().member_name())
        .collect();
    assert_eq!(names, vec!["Name", "Orders", "Age", "Email", "Id", "Notes", "Status"]);
    assert_eq!(customer.collections().count(), 1);
}

#[test]
fn test_complementary_methods_are_not_actions() {
    let metamodel = reflect_demo(ReflectMode::Parallel).metamodel;
    let customer = metamodel.get_specification(CUSTOMER).unwrap();
    let actions: Vec<_> = customer
        .actions()
        .iter()
        .filter_map(|a| a.identifier().member_name())
        .collect();
    assert_eq!(actions, vec!["PlaceOrder", "Archive"]);
}

#[test]
fn test_action_and_parameter_facets() {
    let metamodel = reflect_demo(ReflectMode::Sequential).metamodel;
    let customer = metamodel.get_specification(CUSTOMER).unwrap();
    let place = customer.get_action("PlaceOrder").unwrap();

    assert!(place.contains_facet(FacetKind::ActionInvocation));
    assert!(place.contains_facet(FacetKind::HideForContext));
    assert_eq!(place.return_spec(&metamodel).unwrap().full_name().as_ref(), ORDER);
    assert_eq!(place.parameter_count(), 2);

    let product = &place.parameters()[0];
    assert!(product.contains_facet(FacetKind::Choices));
    assert_eq!(product.spec(&metamodel).unwrap().full_name().as_ref(), PRODUCT);
    assert!(product.is_mandatory());

    let quantity = &place.parameters()[1];
    assert!(quantity.contains_facet(FacetKind::Default));
    assert_eq!(quantity.name(), Some("How many"));
    assert_eq!(
        quantity.get_facet(FacetKind::TypicalLength),
        Some(&Facet::TypicalLength {
            length: 11,
            source: FacetSource::DerivedFromType,
        })
    );
    assert_eq!(
        quantity.get_facet(FacetKind::Mandatory),
        Some(&Facet::Mandatory {
            mandatory: true,
            source: FacetSource::Default,
        })
    );

    let archive = customer.get_action("Archive").unwrap();
    assert_eq!(archive.hidden(), Some(WhenTo::Always));
}

#[test]
fn test_property_facets() {
    let metamodel = reflect_demo(ReflectMode::Parallel).metamodel;
    let customer = metamodel.get_specification(CUSTOMER).unwrap();

    let name = customer.get_field("Name").unwrap();
    assert_eq!(name.get_facet(FacetKind::MaxLength), Some(&Facet::MaxLength(40)));
    assert!(name.contains_facet(FacetKind::Validate));
    assert!(name.is_mandatory());

    let email = customer.get_field("Email").unwrap();
    assert!(!email.is_mandatory());
    assert!(email.contains_facet(FacetKind::RegEx));

    let id = customer.get_field("Id").unwrap();
    assert_eq!(id.get_facet(FacetKind::Disabled), Some(&Facet::Disabled(WhenTo::Always)));
    assert_eq!(id.hidden(), Some(WhenTo::Always));

    assert!(customer.get_field("Secret").is_none());
    assert_eq!(
        customer.get_facet(FacetKind::Plural),
        Some(&Facet::Plural {
            plural: "Clients".into(),
            source: FacetSource::Annotation,
        })
    );
    assert!(customer.contains_facet(FacetKind::ValidateObject));
}

#[test]
fn test_service_actions() {
    let metamodel = reflect_demo(ReflectMode::Parallel).metamodel;
    let repository = metamodel.get_specification(REPOSITORY).unwrap();
    assert_eq!(repository.kind(), SpecKind::Service);

    let all = repository.get_action("AllCustomers").unwrap();
    assert_eq!(all.element_spec(&metamodel).unwrap().full_name().as_ref(), CUSTOMER);

    let product = metamodel.get_specification(PRODUCT).unwrap();
    assert_eq!(product.get_facet(FacetKind::Immutable), Some(&Facet::Immutable(WhenTo::Always)));
}

#[test]
fn test_keep_existing_policy_preserves_inferred_names() {
    let reflection = Reflector::with_default_factories(
        DEMO_REGISTRY.clone(),
        demo_config(ReflectMode::Parallel).with_policy(FacetKind::Named, FacetPolicy::KeepExisting),
    )
    .reflect()
    .unwrap();
    let customer = reflection.metamodel.get_specification(CUSTOMER).unwrap();
    let place = customer.get_action("PlaceOrder").unwrap();

    assert_eq!(place.name(), Some("Place Order"));
    assert_eq!(place.parameters()[1].name(), Some("Quantity"));
}

#[test]
fn test_byte_array_property_is_scalar() {
    let mut registry = TypeRegistry::with_system_types();
    registry
        .register(TypeDescriptor::class("Demo.Document").with_property(PropertyDescriptor::new(
            "Photo",
            TypeRef::array_of(TypeRef::named(constants::BYTE)),
        )))
        .unwrap();
    let reflection = Reflector::with_default_factories(
        registry,
        ReflectorConfig::new().with_root("Demo.Document"),
    )
    .reflect()
    .unwrap();

    let document = reflection.metamodel.get_specification("Demo.Document").unwrap();
    let photo = document.get_field("Photo").unwrap();
    assert_eq!(photo.kind(), AssociationKind::OneToOne);
    assert!(!photo.contains_facet(FacetKind::TypeOf));
    assert!(photo.element_type().is_none());
    assert_eq!(
        photo.get_facet(FacetKind::TypicalLength),
        Some(&Facet::TypicalLength {
            length: 20,
            source: FacetSource::DerivedFromType,
        })
    );
    assert_eq!(document.collections().count(), 0);
}
