use naked::ReflectMode;
use naked::base::constants;
use naked::meta::SpecKind;

use crate::helpers::domain_fixtures::{CUSTOMER, ORDER, ORDER_LINE, PRODUCT, STATUS};
use crate::helpers::reflect_helpers::reflect_demo;

#[test]
fn test_mutual_references_resolve() {
    let metamodel = reflect_demo(ReflectMode::Parallel).metamodel;
    let customer = metamodel.get_specification(CUSTOMER).unwrap();
    let order = metamodel.get_specification(ORDER).unwrap();

    let orders = customer.get_field("Orders").unwrap();
    assert!(orders.is_collection());
    assert_eq!(orders.element_spec(&metamodel).unwrap().full_name().as_ref(), ORDER);

    let back = order.get_field("Customer").unwrap();
    assert_eq!(back.return_spec(&metamodel).unwrap().full_name().as_ref(), CUSTOMER);
    assert_eq!(back.owner_spec(&metamodel).unwrap().full_name().as_ref(), ORDER);
}

#[test]
fn test_self_reference_resolves() {
    let metamodel = reflect_demo(ReflectMode::Sequential).metamodel;
    let product = metamodel.get_specification(PRODUCT).unwrap();
    let replacement = product.get_field("Replacement").unwrap();
    assert_eq!(replacement.return_spec(&metamodel).unwrap(), product);
}

#[test]
fn test_transitively_referenced_types_are_loaded() {
    let metamodel = reflect_demo(ReflectMode::Parallel).metamodel;
    for name in [
        ORDER_LINE,
        STATUS,
        constants::ARRAY,
        constants::ENUM,
        constants::OBJECT,
        constants::ILIST_OF_T,
        constants::IQUERYABLE_OF_T,
        constants::IENUMERABLE,
    ] {
        assert!(metamodel.contains(name), "missing specification for {name}");
    }
    assert!(!metamodel.contains(constants::GUID));
}

#[test]
fn test_kinds_and_hierarchy() {
    let metamodel = reflect_demo(ReflectMode::Parallel).metamodel;
    let status = metamodel.get_specification(STATUS).unwrap();
    assert_eq!(status.kind(), SpecKind::Value);
    assert!(status.fields().is_empty());
    assert!(status.is_of_type(constants::OBJECT, &metamodel));

    let list = metamodel.get_specification(constants::ILIST_OF_T).unwrap();
    assert!(list.is_collection());
    assert!(list.is_of_type(constants::IENUMERABLE, &metamodel));

    let line = metamodel.get_specification(ORDER_LINE).unwrap();
    assert_eq!(
        line.superclass_spec(&metamodel).unwrap().full_name().as_ref(),
        constants::OBJECT
    );
    assert!(!line.is_of_type(CUSTOMER, &metamodel));
}
