//! Type registry: resolves type names to descriptors.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::types::{MethodThunk, TypeDescriptor, TypeKind, TypeRef};
use crate::base::{Identifier, TypeName, constants};

/// Errors raised while registering or resolving types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A type name that no descriptor was registered for.
    #[error("unknown type '{0}'")]
    UnknownType(TypeName),

    /// A second descriptor registered under an existing name.
    #[error("type '{0}' is already registered")]
    DuplicateType(TypeName),
}

/// The set of types the reflector may introspect.
///
/// This plays the role of runtime reflection: every type reachable from a
/// root (property types, parameter and return types, element types, base
/// types and interfaces) must resolve here, otherwise introspection fails.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: FxHashMap<TypeName, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the system value and collection types.
    pub fn with_system_types() -> Self {
        let mut registry = Self::new();

        registry.insert(TypeDescriptor::new(constants::OBJECT, TypeKind::Class));
        registry.insert(
            TypeDescriptor::new(constants::ENUM, TypeKind::Class)
                .with_base(TypeRef::named(constants::OBJECT)),
        );
        registry.insert(TypeDescriptor::new(constants::STRING, TypeKind::String));

        for name in [
            constants::BOOLEAN,
            constants::BYTE,
            constants::SBYTE,
            constants::CHAR,
            constants::INT16,
            constants::INT32,
            constants::INT64,
            constants::UINT16,
            constants::UINT32,
            constants::UINT64,
            constants::SINGLE,
            constants::DOUBLE,
        ] {
            registry.insert(TypeDescriptor::new(name, TypeKind::Primitive));
        }

        for name in [
            constants::DECIMAL,
            constants::DATE_TIME,
            constants::TIME_SPAN,
            constants::GUID,
            constants::COLOR,
        ] {
            registry.insert(TypeDescriptor::new(name, TypeKind::Struct));
        }

        for name in [constants::IMAGE, constants::FILE_ATTACHMENT] {
            registry.insert(
                TypeDescriptor::new(name, TypeKind::Class)
                    .with_base(TypeRef::named(constants::OBJECT)),
            );
        }

        registry.insert(TypeDescriptor::new(
            constants::IENUMERABLE,
            TypeKind::Collection { generic: false },
        ));
        registry.insert(
            TypeDescriptor::new(constants::ARRAY, TypeKind::Array)
                .implementing(TypeRef::named(constants::IENUMERABLE)),
        );

        for name in [
            constants::IENUMERABLE_OF_T,
            constants::ICOLLECTION_OF_T,
            constants::ILIST_OF_T,
            constants::LIST_OF_T,
            constants::ISET_OF_T,
            constants::IQUERYABLE_OF_T,
        ] {
            registry.insert(
                TypeDescriptor::new(name, TypeKind::Collection { generic: true })
                    .implementing(TypeRef::named(constants::IENUMERABLE)),
            );
        }

        registry
    }

    fn insert(&mut self, descriptor: TypeDescriptor) {
        self.types
            .insert(descriptor.full_name.clone(), Arc::new(descriptor));
    }

    /// Register a domain type.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<(), RegistryError> {
        if self.types.contains_key(&descriptor.full_name) {
            return Err(RegistryError::DuplicateType(descriptor.full_name));
        }
        self.insert(descriptor);
        Ok(())
    }

    /// Register several domain types, stopping at the first duplicate.
    pub fn register_all(
        &mut self,
        descriptors: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Result<(), RegistryError> {
        descriptors
            .into_iter()
            .try_for_each(|descriptor| self.register(descriptor))
    }

    /// Look up a descriptor by full name.
    pub fn resolve(&self, name: &str) -> Result<&Arc<TypeDescriptor>, RegistryError> {
        self.types
            .get(name)
            .ok_or_else(|| RegistryError::UnknownType(TypeName::from(name)))
    }

    /// Look up the descriptor backing a type reference's specification.
    pub fn resolve_ref(&self, ty: &TypeRef) -> Result<&Arc<TypeDescriptor>, RegistryError> {
        self.resolve(&ty.spec_key())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Kind of the type behind a reference, if registered.
    pub fn kind_of(&self, ty: &TypeRef) -> Option<TypeKind> {
        self.resolve_ref(ty).ok().map(|d| d.kind)
    }

    /// Whether a reference denotes a collection (array or collection type).
    /// `byte[]` is treated as a single value.
    pub fn is_collection(&self, ty: &TypeRef) -> bool {
        if ty.is_byte_array() {
            return false;
        }
        matches!(ty, TypeRef::Array(_)) || self.kind_of(ty).is_some_and(TypeKind::is_collection)
    }

    /// Find the invocation thunk of a method by its structural identifier.
    pub fn method_thunk(&self, method: &Identifier) -> Option<MethodThunk> {
        let owner = self.types.get(method.type_name())?;
        let name = method.member_name()?;
        owner
            .methods_named(name)
            .find(|m| m.parameter_types().as_slice() == method.parameter_types())
            .and_then(|m| m.body.clone())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate all registered descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TypeDescriptor>> {
        self.types.values()
    }
}
