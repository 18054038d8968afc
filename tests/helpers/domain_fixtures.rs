//! A small order-taking domain used across integration tests.

use std::sync::Arc;

use naked::base::{WhenTo, constants};
use naked::reflect::{
    Attribute, MethodDescriptor, ParameterDescriptor, PropertyDescriptor, TypeDescriptor, TypeRef,
    TypeRegistry,
};
use once_cell::sync::Lazy;

pub const CUSTOMER: &str = "Demo.Customer";
pub const ORDER: &str = "Demo.Order";
pub const ORDER_LINE: &str = "Demo.OrderLine";
pub const PRODUCT: &str = "Demo.Product";
pub const STATUS: &str = "Demo.Status";
pub const REPOSITORY: &str = "Demo.CustomerRepository";

fn string() -> TypeRef {
    TypeRef::named(constants::STRING)
}

fn int() -> TypeRef {
    TypeRef::named(constants::INT32)
}

fn list_of(element: &str) -> TypeRef {
    TypeRef::generic(constants::ILIST_OF_T, [TypeRef::named(element)])
}

pub fn customer() -> TypeDescriptor {
    TypeDescriptor::class(CUSTOMER)
        .with_attribute(Attribute::Plural("Clients".into()))
        .with_property(
            PropertyDescriptor::new("Name", string())
                .with_attribute(Attribute::member_order("1"))
                .with_attribute(Attribute::MaxLength(40)),
        )
        .with_property(
            PropertyDescriptor::new("Email", string())
                .with_attribute(Attribute::Optionally)
                .with_attribute(Attribute::RegEx {
                    pattern: "^.+@.+$".into(),
                    message: Some("Not an email address".into()),
                    case_sensitive: false,
                }),
        )
        .with_property(
            PropertyDescriptor::new("Orders", list_of(ORDER)).with_attribute(Attribute::member_order("3")),
        )
        .with_property(PropertyDescriptor::new("Status", TypeRef::named(STATUS)))
        .with_property(PropertyDescriptor::new("Age", int()).with_attribute(Attribute::Optionally))
        .with_property(
            PropertyDescriptor::new("Notes", string())
                .with_attribute(Attribute::MultiLine { lines: 3, width: 40 }),
        )
        .with_property(
            PropertyDescriptor::read_only("Id", int()).with_attribute(Attribute::Hidden(WhenTo::Always)),
        )
        .with_property(PropertyDescriptor::new("Secret", string()).with_attribute(Attribute::Ignore))
        .with_method(
            MethodDescriptor::new("PlaceOrder")
                .returning(ORDER)
                .with_parameter(ParameterDescriptor::new("product", TypeRef::named(PRODUCT)))
                .with_parameter(
                    ParameterDescriptor::new("quantity", int())
                        .with_attribute(Attribute::Optionally)
                        .with_attribute(Attribute::Named("How many".into())),
                )
                .with_attribute(Attribute::member_order("1")),
        )
        .with_method(MethodDescriptor::new("Choices0PlaceOrder").returning(list_of(PRODUCT)))
        .with_method(MethodDescriptor::new("Default1PlaceOrder").returning(int()))
        .with_method(MethodDescriptor::new("HidePlaceOrder").returning(constants::BOOLEAN))
        .with_method(
            MethodDescriptor::new("ValidateName")
                .returning(string())
                .with_parameter(ParameterDescriptor::new("name", string())),
        )
        .with_method(MethodDescriptor::new("Archive").with_attribute(Attribute::hidden()))
        .with_method(MethodDescriptor::new("Created"))
        .with_method(
            MethodDescriptor::new("Validate")
                .returning(string())
                .with_parameter(ParameterDescriptor::new("name", string()))
                .with_parameter(ParameterDescriptor::new("email", string())),
        )
        .with_method(
            MethodDescriptor::new("Validate")
                .returning(string())
                .with_parameter(ParameterDescriptor::new("nickname", string())),
        )
        .with_method(MethodDescriptor::new("ToString").returning(string()))
        .with_method(MethodDescriptor::new("Create").returning(CUSTOMER).as_static())
        .with_method(MethodDescriptor::new("Internal").with_attribute(Attribute::Ignore))
}

pub fn order() -> TypeDescriptor {
    TypeDescriptor::class(ORDER)
        .with_property(PropertyDescriptor::new("Customer", TypeRef::named(CUSTOMER)))
        .with_property(PropertyDescriptor::new("Lines", TypeRef::array_of(TypeRef::named(ORDER_LINE))))
        .with_property(PropertyDescriptor::read_only("Total", constants::DECIMAL))
        .with_method(MethodDescriptor::new("Cancel"))
}

pub fn order_line() -> TypeDescriptor {
    TypeDescriptor::class(ORDER_LINE)
        .with_property(PropertyDescriptor::new("Order", TypeRef::named(ORDER)))
        .with_property(PropertyDescriptor::new("Quantity", int()))
}

pub fn product() -> TypeDescriptor {
    TypeDescriptor::class(PRODUCT)
        .with_attribute(Attribute::Immutable(WhenTo::Always))
        .with_property(PropertyDescriptor::new("Name", string()))
        .with_property(PropertyDescriptor::new("Replacement", TypeRef::named(PRODUCT)))
}

pub fn status() -> TypeDescriptor {
    TypeDescriptor::enumeration(STATUS)
}

pub fn repository() -> TypeDescriptor {
    TypeDescriptor::class(REPOSITORY)
        .with_method(
            MethodDescriptor::new("FindCustomer")
                .returning(CUSTOMER)
                .with_parameter(ParameterDescriptor::new("name", string())),
        )
        .with_method(
            MethodDescriptor::new("AllCustomers")
                .returning(TypeRef::generic(constants::IQUERYABLE_OF_T, [TypeRef::named(CUSTOMER)])),
        )
}

/// A fresh registry holding the demo domain and the system types.
pub fn demo_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_system_types();
    registry
        .register_all([customer(), order(), order_line(), product(), status(), repository()])
        .expect("demo types register once");
    registry
}

/// The demo registry, built once and shared.
pub static DEMO_REGISTRY: Lazy<Arc<TypeRegistry>> = Lazy::new(|| Arc::new(demo_registry()));
