//! Shared context handed to every facet factory invocation.

use parking_lot::Mutex;

use crate::base::{Identifier, TypeName, constants};
use crate::diagnostics::DiagnosticCollector;
use crate::error::ReflectError;
use crate::meta::{BuildMap, Facet, FacetPolicies, SpecKind, SpecificationBuilder, ValueKind};
use crate::reflect::{TypeDescriptor, TypeKind, TypeRef, TypeRegistry};

/// What a factory may consult besides the feature it is processing.
///
/// Shared by reference across worker threads during parallel reflection.
pub struct FactoryContext<'a> {
    registry: &'a TypeRegistry,
    policies: &'a FacetPolicies,
    services: &'a [TypeName],
    diagnostics: &'a Mutex<DiagnosticCollector>,
}

impl<'a> FactoryContext<'a> {
    pub fn new(
        registry: &'a TypeRegistry,
        policies: &'a FacetPolicies,
        services: &'a [TypeName],
        diagnostics: &'a Mutex<DiagnosticCollector>,
    ) -> Self {
        Self {
            registry,
            policies,
            services,
            diagnostics,
        }
    }

    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Add a facet under the replacement policy configured for its kind.
    pub fn add_facet<S>(&self, spec: &mut S, facet: Facet) -> Result<bool, ReflectError>
    where
        S: SpecificationBuilder + ?Sized,
    {
        let policy = self.policies.policy_for(facet.kind());
        Ok(spec.add_facet_with(facet, policy)?)
    }

    /// Add a facet only when none of its kind is present.
    pub fn add_default<S>(&self, spec: &mut S, facet: Facet) -> Result<bool, ReflectError>
    where
        S: SpecificationBuilder + ?Sized,
    {
        Ok(spec.add_facet_if_absent(facet)?)
    }

    /// Report a configuration mismatch; the caller skips the facet.
    pub fn warn(&self, identifier: &Identifier, code: &str, message: impl Into<std::sync::Arc<str>>) {
        self.diagnostics.lock().warn(identifier, code, message);
    }

    pub fn kind_of(&self, ty: &TypeRef) -> Option<TypeKind> {
        self.registry.kind_of(ty)
    }

    /// Primitive or enum: cannot be null, so `Optionally` is meaningless.
    pub fn is_primitive_or_enum(&self, ty: &TypeRef) -> bool {
        self.kind_of(ty)
            .is_some_and(|kind| kind.is_primitive() || kind.is_enum())
    }

    pub fn is_string(&self, ty: &TypeRef) -> bool {
        ty.is_string()
    }

    /// The kind of specification a descriptor becomes.
    pub fn spec_kind(&self, descriptor: &TypeDescriptor) -> SpecKind {
        if self.services.contains(&descriptor.full_name) {
            SpecKind::Service
        } else if descriptor.kind.is_collection() || descriptor.kind == TypeKind::Array {
            SpecKind::Collection
        } else if ValueKind::for_type(&descriptor.full_name, descriptor.kind).is_some() {
            SpecKind::Value
        } else {
            SpecKind::Object
        }
    }

    /// Make sure a builder exists for `ty` (and for the types it is built
    /// from). A new builder is left pending for a later round.
    pub fn load_spec(&self, ty: &TypeRef, mut metamodel: BuildMap) -> Result<BuildMap, ReflectError> {
        match ty {
            TypeRef::Array(element) => {
                metamodel = self.load_named(&TypeName::from(constants::ARRAY), metamodel)?;
                self.load_spec(element, metamodel)
            }
            TypeRef::Generic { definition, args } => {
                metamodel = self.load_named(definition, metamodel)?;
                for arg in args {
                    metamodel = self.load_spec(arg, metamodel)?;
                }
                Ok(metamodel)
            }
            TypeRef::Named(name) => self.load_named(name, metamodel),
        }
    }

    fn load_named(&self, name: &TypeName, mut metamodel: BuildMap) -> Result<BuildMap, ReflectError> {
        if metamodel.contains_key(name) {
            return Ok(metamodel);
        }
        let descriptor = self.registry.resolve(name)?;
        let kind = self.spec_kind(descriptor);
        tracing::trace!(type_name = %name, ?kind, "Loaded specification");
        metamodel.get_or_create_builder(name, kind);
        Ok(metamodel)
    }
}
