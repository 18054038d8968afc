//! Runs the facet pipeline over one type and its members.

use crate::base::{FeatureType, Identifier, TypeName, constants};
use crate::error::ReflectError;
use crate::factory::{FacetFactories, FactoryContext, MethodPool, MethodRemover};
use crate::meta::{
    ActionSpecBuilder, AssociationKind, AssociationSpecBuilder, BuildMap, ParameterSpecBuilder,
    SpecKind, TypeSpecBuilder,
};
use crate::reflect::{Annotated, Attribute, MethodDescriptor, TypeDescriptor, TypeRef};

/// Whether `name` follows a complementary method convention such as
/// `HideName` or `Choices0Place`.
fn is_complementary_name(name: &str) -> bool {
    constants::COMPLEMENTARY_PREFIXES
        .iter()
        .any(|prefix| name.len() > prefix.len() && name.starts_with(prefix))
}

fn is_ignored<A: Annotated>(member: &A) -> bool {
    member.has_attribute(|a| matches!(a, Attribute::Ignore))
}

/// Introspects pending builders. Holds no state of its own, so one
/// instance is shared by every worker in a round.
pub(crate) struct Introspector<'a> {
    cx: &'a FactoryContext<'a>,
    factories: &'a FacetFactories,
}

impl<'a> Introspector<'a> {
    pub(crate) fn new(cx: &'a FactoryContext<'a>, factories: &'a FacetFactories) -> Self {
        Self { cx, factories }
    }

    /// Introspect the builder for `name` and return the map with the
    /// introspected builder (and any newly referenced, pending builders).
    pub(crate) fn introspect(&self, name: &TypeName, mut metamodel: BuildMap) -> Result<BuildMap, ReflectError> {
        let descriptor = self.cx.registry().resolve(name)?;
        let mut spec = match metamodel.get(name) {
            Some(builder) => TypeSpecBuilder::clone(builder),
            None => TypeSpecBuilder::new(name.clone(), self.cx.spec_kind(descriptor)),
        };
        tracing::trace!(type_name = %name, kind = ?spec.kind(), "Introspecting");

        spec.set_superclass(descriptor.base_type.as_ref().map(TypeRef::spec_key));
        spec.set_interfaces(descriptor.interfaces.iter().map(TypeRef::spec_key).collect());
        for supertype in descriptor.base_type.iter().chain(&descriptor.interfaces) {
            metamodel = self.cx.load_spec(supertype, metamodel)?;
        }

        let mut pool = MethodPool::new();
        for factory in self.factories.for_feature(FeatureType::Object) {
            metamodel = factory.process_type(self.cx, descriptor, &mut pool, &mut spec, metamodel)?;
        }

        if matches!(spec.kind(), SpecKind::Object | SpecKind::Service) {
            let (fields, next) = self.introspect_associations(descriptor, &mut pool, metamodel)?;
            let (actions, next) = self.introspect_actions(descriptor, &mut pool, next)?;
            metamodel = next;
            spec.set_members(fields, actions);
        }

        spec.mark_introspected();
        metamodel.insert(name.clone(), spec);
        Ok(metamodel)
    }

    fn introspect_associations(
        &self,
        descriptor: &TypeDescriptor,
        pool: &mut MethodPool,
        mut metamodel: BuildMap,
    ) -> Result<(Vec<AssociationSpecBuilder>, BuildMap), ReflectError> {
        let mut fields = Vec::new();
        for property in descriptor
            .properties
            .iter()
            .filter(|p| p.has_getter && !is_ignored(*p))
        {
            let (feature, kind) = if self.cx.registry().is_collection(&property.ty) {
                (FeatureType::Collection, AssociationKind::OneToMany)
            } else {
                (FeatureType::Property, AssociationKind::OneToOne)
            };
            let mut field = AssociationSpecBuilder::new(
                Identifier::for_field(descriptor.full_name.clone(), property.name.clone()),
                kind,
                property.ty.spec_key(),
            );
            metamodel = self.cx.load_spec(&property.ty, metamodel)?;
            for factory in self.factories.for_feature(feature) {
                metamodel =
                    factory.process_property(self.cx, descriptor, property, pool, &mut field, metamodel)?;
            }
            fields.push(field);
        }
        Ok((fields, metamodel))
    }

    /// Principal methods are processed before prefix-named ones so a
    /// member claims its complementary methods before they can be taken
    /// for actions.
    fn introspect_actions(
        &self,
        descriptor: &TypeDescriptor,
        pool: &mut MethodPool,
        mut metamodel: BuildMap,
    ) -> Result<(Vec<ActionSpecBuilder>, BuildMap), ReflectError> {
        let (principal, complementary): (Vec<_>, Vec<_>) = descriptor
            .methods
            .iter()
            .partition(|m| !is_complementary_name(&m.name));

        let mut actions = Vec::new();
        for method in principal.into_iter().chain(complementary) {
            if pool.is_removed(&descriptor.full_name, method) {
                continue;
            }
            let (action, next) = self.introspect_action(descriptor, method, pool, metamodel)?;
            metamodel = next;
            actions.push(action);
        }
        Ok((actions, metamodel))
    }

    fn introspect_action(
        &self,
        descriptor: &TypeDescriptor,
        method: &MethodDescriptor,
        pool: &mut MethodPool,
        mut metamodel: BuildMap,
    ) -> Result<(ActionSpecBuilder, BuildMap), ReflectError> {
        let identifier = method.identifier(&descriptor.full_name);
        let mut action =
            ActionSpecBuilder::new(identifier.clone(), method.return_type.as_ref().map(TypeRef::spec_key));
        action.set_parameters(
            method
                .parameters
                .iter()
                .enumerate()
                .map(|(index, p)| ParameterSpecBuilder::new(&identifier, index, p.ty.spec_key()))
                .collect(),
        );

        if let Some(return_type) = &method.return_type {
            metamodel = self.cx.load_spec(return_type, metamodel)?;
        }
        for parameter in &method.parameters {
            metamodel = self.cx.load_spec(&parameter.ty, metamodel)?;
        }

        for factory in self.factories.for_feature(FeatureType::Action) {
            metamodel = factory.process_method(self.cx, descriptor, method, pool, &mut action, metamodel)?;
        }
        for (index, parameter) in action.parameters_mut().iter_mut().enumerate() {
            for factory in self.factories.for_feature(FeatureType::ActionParameter) {
                metamodel = factory.process_param(self.cx, method, index, parameter, metamodel)?;
            }
        }
        Ok((action, metamodel))
    }
}
