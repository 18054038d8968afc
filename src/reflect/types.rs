//! Type, property, method and parameter descriptors.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use super::attributes::{Annotated, Attribute};
use crate::base::{Identifier, TypeName, constants};

// ============================================================================
// TYPE REFERENCES
// ============================================================================

/// A reference to a type as it appears in a member signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    /// A plain named type, e.g. `Demo.Order`.
    Named(TypeName),
    /// An array, e.g. `Demo.Order[]`.
    Array(Box<TypeRef>),
    /// A generic instantiation, e.g. ``IList`1<Demo.Order>``.
    Generic {
        definition: TypeName,
        args: Vec<TypeRef>,
    },
}

impl TypeRef {
    pub fn named(name: impl Into<TypeName>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn array_of(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    pub fn generic(definition: impl Into<TypeName>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        TypeRef::Generic {
            definition: definition.into(),
            args: args.into_iter().collect(),
        }
    }

    /// The name under which this type's specification is cached.
    ///
    /// Arrays share the `System.Array` specification and generic
    /// instantiations share the specification of their definition.
    pub fn spec_key(&self) -> TypeName {
        match self {
            TypeRef::Named(name) => name.clone(),
            TypeRef::Array(_) => TypeName::from(constants::ARRAY),
            TypeRef::Generic { definition, .. } => definition.clone(),
        }
    }

    /// Element type of an array reference.
    pub fn array_element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Generic arguments, empty for non-generic references.
    pub fn generic_args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Generic { args, .. } => args,
            _ => &[],
        }
    }

    /// True when this names `System.String`.
    pub fn is_string(&self) -> bool {
        matches!(self, TypeRef::Named(name) if name.as_ref() == constants::STRING)
    }

    /// `byte[]` is a scalar blob, not a collection of bytes.
    pub fn is_byte_array(&self) -> bool {
        matches!(
            self.array_element(),
            Some(TypeRef::Named(name)) if name.as_ref() == constants::BYTE
        )
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::Array(element) => write!(f, "{element}[]"),
            TypeRef::Generic { definition, args } => {
                write!(f, "{definition}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::named(name)
    }
}

// ============================================================================
// TYPE DESCRIPTORS
// ============================================================================

/// The broad shape of a reflected type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
    Primitive,
    String,
    Array,
    Collection { generic: bool },
}

impl TypeKind {
    pub fn is_primitive(self) -> bool {
        matches!(self, TypeKind::Primitive)
    }

    pub fn is_enum(self) -> bool {
        matches!(self, TypeKind::Enum)
    }

    pub fn is_string(self) -> bool {
        matches!(self, TypeKind::String)
    }

    pub fn is_collection(self) -> bool {
        matches!(self, TypeKind::Array | TypeKind::Collection { .. })
    }
}

/// An introspectable type.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    pub full_name: TypeName,
    pub kind: TypeKind,
    pub base_type: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub attributes: Vec<Attribute>,
    pub properties: Vec<PropertyDescriptor>,
    pub methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    pub fn new(full_name: impl Into<TypeName>, kind: TypeKind) -> Self {
        Self {
            full_name: full_name.into(),
            kind,
            base_type: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// A domain class deriving from `System.Object`.
    pub fn class(full_name: impl Into<TypeName>) -> Self {
        Self::new(full_name, TypeKind::Class).with_base(TypeRef::named(constants::OBJECT))
    }

    pub fn interface(full_name: impl Into<TypeName>) -> Self {
        Self::new(full_name, TypeKind::Interface)
    }

    pub fn enumeration(full_name: impl Into<TypeName>) -> Self {
        Self::new(full_name, TypeKind::Enum).with_base(TypeRef::named(constants::ENUM))
    }

    pub fn with_base(mut self, base: TypeRef) -> Self {
        self.base_type = Some(base);
        self
    }

    pub fn implementing(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn identifier(&self) -> Identifier {
        Identifier::for_type(self.full_name.clone())
    }

    pub fn find_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// All methods with the given name, in declaration order.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDescriptor> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    pub fn find_method<'a>(&'a self, name: &'a str) -> Option<&'a MethodDescriptor> {
        self.methods_named(name).next()
    }

    /// Whether the type declares the given interface.
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces
            .iter()
            .any(|i| i.spec_key().as_ref() == interface)
    }
}

impl Annotated for TypeDescriptor {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

// ============================================================================
// MEMBERS
// ============================================================================

/// A reflected property.
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    pub name: SmolStr,
    pub ty: TypeRef,
    pub has_getter: bool,
    pub has_setter: bool,
    pub attributes: Vec<Attribute>,
}

impl PropertyDescriptor {
    /// A read-write property.
    pub fn new(name: impl Into<SmolStr>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            has_getter: true,
            has_setter: true,
            attributes: Vec::new(),
        }
    }

    /// A property with a getter only.
    pub fn read_only(name: impl Into<SmolStr>, ty: impl Into<TypeRef>) -> Self {
        Self {
            has_setter: false,
            ..Self::new(name, ty)
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

impl Annotated for PropertyDescriptor {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// A reflected method parameter.
#[derive(Clone, Debug)]
pub struct ParameterDescriptor {
    pub name: SmolStr,
    pub ty: TypeRef,
    pub attributes: Vec<Attribute>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<SmolStr>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

impl Annotated for ParameterDescriptor {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// A domain object as seen by an invocation thunk.
pub type DomainObject = dyn Any + Send + Sync;

/// Result of invoking a method: `None` for `void` or a null return.
pub type Invocation = Option<Box<dyn Any + Send>>;

/// Callable body of a reflected method: `(target, arguments) -> result`.
pub type MethodThunk = Arc<dyn Fn(&DomainObject, &[&DomainObject]) -> Invocation + Send + Sync>;

/// A reflected method.
#[derive(Clone)]
pub struct MethodDescriptor {
    pub name: SmolStr,
    pub return_type: Option<TypeRef>,
    pub parameters: Vec<ParameterDescriptor>,
    pub is_static: bool,
    pub attributes: Vec<Attribute>,
    pub body: Option<MethodThunk>,
}

impl MethodDescriptor {
    /// A `void` instance method without parameters.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters: Vec::new(),
            is_static: false,
            attributes: Vec::new(),
            body: None,
        }
    }

    pub fn returning(mut self, ty: impl Into<TypeRef>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_body(
        mut self,
        body: impl Fn(&DomainObject, &[&DomainObject]) -> Invocation + Send + Sync + 'static,
    ) -> Self {
        self.body = Some(Arc::new(body));
        self
    }

    /// Display names of the parameter types, as used in identifiers.
    pub fn parameter_types(&self) -> Vec<TypeName> {
        self.parameters
            .iter()
            .map(|p| TypeName::from(p.ty.to_string()))
            .collect()
    }

    /// Structural identifier of this method on `owner`.
    pub fn identifier(&self, owner: &TypeName) -> Identifier {
        Identifier::for_method(owner.clone(), self.name.clone(), self.parameter_types())
    }
}

impl Annotated for MethodDescriptor {
    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("return_type", &self.return_type)
            .field("parameters", &self.parameters)
            .field("is_static", &self.is_static)
            .field("attributes", &self.attributes)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}
