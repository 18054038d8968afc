use naked::ReflectMode;
use naked::meta::{Metamodel, MetamodelError, SpecKind, Specification};

use crate::helpers::domain_fixtures::{CUSTOMER, ORDER};
use crate::helpers::reflect_helpers::reflect_demo;

#[test]
fn test_lookup_by_name_and_identifier() {
    let metamodel = reflect_demo(ReflectMode::Sequential).metamodel;
    let customer = metamodel.get_specification(CUSTOMER).unwrap();
    assert_eq!(customer.kind(), SpecKind::Object);

    let field = customer.get_field("Orders").unwrap();
    let owner = metamodel.get_specification_for(field.identifier()).unwrap();
    assert_eq!(owner.full_name(), customer.full_name());
}

#[test]
fn test_unknown_name_is_not_found() {
    let metamodel = reflect_demo(ReflectMode::Sequential).metamodel;
    assert_eq!(
        metamodel.get_specification("Demo.Unknown").unwrap_err(),
        MetamodelError::NotFound("Demo.Unknown".into())
    );
    assert!(metamodel.try_get("Demo.Unknown").is_none());
}

#[test]
fn test_all_specifications_sorted_by_name() {
    let metamodel = reflect_demo(ReflectMode::Sequential).metamodel;
    let names: Vec<_> = metamodel
        .all_specifications()
        .iter()
        .map(|spec| spec.full_name().clone())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), metamodel.len());
}

#[test]
fn test_install_publishes_once() {
    let metamodel = reflect_demo(ReflectMode::Sequential).metamodel;
    let installed = metamodel.clone().install().unwrap();

    assert!(installed.contains(ORDER));
    assert!(Metamodel::global().is_some_and(|global| global.contains(CUSTOMER)));
    assert_eq!(metamodel.install().unwrap_err(), MetamodelError::AlreadyInstalled);
}
