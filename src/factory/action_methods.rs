//! Action invocation and the complementary methods of actions.
//!
//! For an action `Place(a, b)` the conventions are `HidePlace()`,
//! `DisablePlace()` and `ValidatePlace(a, b)` on the action, and
//! `Choices0Place(...)`, `Default0Place()`, `Validate0Place(a)` (and so on
//! per parameter index) on its parameters.

use smol_str::SmolStr;

use super::{FacetFactory, FactoryContext, MethodRemover, claim_complementary};
use crate::base::{FeatureTypes, constants};
use crate::error::ReflectError;
use crate::meta::{ActionSpecBuilder, BuildMap, Facet, MethodBinding};
use crate::reflect::{MethodDescriptor, TypeDescriptor};

pub struct ActionMethodsFacetFactory {
    position: u32,
}

impl ActionMethodsFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }

    /// `Validate{action}` taking exactly the action's parameter types.
    fn find_validate<'a>(ty: &'a TypeDescriptor, method: &MethodDescriptor) -> Option<&'a MethodDescriptor> {
        let name = format!("{}{}", constants::PREFIX_VALIDATE, method.name);
        let signature = method.parameter_types();
        ty.methods
            .iter()
            .find(|m| m.name == name.as_str() && !m.is_static && m.parameter_types() == signature)
    }

    fn process_parameters(
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        method: &MethodDescriptor,
        remover: &mut dyn MethodRemover,
        spec: &mut ActionSpecBuilder,
    ) -> Result<(), ReflectError> {
        let action = method.name.as_str();
        for (index, parameter) in spec.parameters_mut().iter_mut().enumerate() {
            let choices = format!("{}{index}", constants::PREFIX_CHOICES);
            if let Some((binding, choices)) = claim_complementary(ty, remover, &choices, action, None) {
                let parameter_names = choices
                    .parameters
                    .iter()
                    .map(|p| SmolStr::from(p.name.to_lowercase()))
                    .collect();
                cx.add_facet(parameter, Facet::Choices { binding, parameter_names })?;
            }

            let default = format!("{}{index}", constants::PREFIX_DEFAULT);
            if let Some((binding, _)) = claim_complementary(ty, remover, &default, action, Some(0)) {
                cx.add_facet(parameter, Facet::Default(binding))?;
            }

            let validate = format!("{}{index}", constants::PREFIX_VALIDATE);
            if let Some((binding, _)) = claim_complementary(ty, remover, &validate, action, Some(1)) {
                cx.add_facet(parameter, Facet::Validate(binding))?;
            }
        }
        Ok(())
    }
}

impl FacetFactory for ActionMethodsFacetFactory {
    fn name(&self) -> &'static str {
        "ActionMethods"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::ACTIONS
    }

    fn process_method(
        &self,
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        method: &MethodDescriptor,
        remover: &mut dyn MethodRemover,
        spec: &mut ActionSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        cx.add_facet(
            spec,
            Facet::ActionInvocation {
                binding: MethodBinding::from_descriptor(&ty.full_name, method),
                on_type: ty.full_name.clone(),
                return_type: method.return_type.as_ref().map(|r| r.spec_key()),
            },
        )?;

        let action = method.name.as_str();
        if let Some((binding, _)) = claim_complementary(ty, remover, constants::PREFIX_HIDE, action, Some(0)) {
            cx.add_facet(spec, Facet::HideForContext(binding))?;
        }
        if let Some((binding, _)) = claim_complementary(ty, remover, constants::PREFIX_DISABLE, action, Some(0)) {
            cx.add_facet(spec, Facet::DisableForContext(binding))?;
        }
        if let Some(validate) = Self::find_validate(ty, method) {
            remover.remove_method(&ty.full_name, validate);
            cx.add_facet(
                spec,
                Facet::Validate(MethodBinding::from_descriptor(&ty.full_name, validate)),
            )?;
        }

        Self::process_parameters(cx, ty, method, remover, spec)?;
        Ok(metamodel)
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::diagnostics::DiagnosticCollector;
    use crate::factory::MethodPool;
    use crate::meta::{FacetKind, FacetPolicies, ParameterSpecBuilder, Specification};
    use crate::reflect::{ParameterDescriptor, TypeRegistry};

    fn place() -> MethodDescriptor {
        MethodDescriptor::new("Place")
            .returning("Demo.Order")
            .with_parameter(ParameterDescriptor::new("quantity", "System.Int32"))
    }

    #[test]
    fn test_action_and_parameter_methods_are_claimed() {
        let ty = TypeDescriptor::class("Demo.Customer")
            .with_method(place())
            .with_method(MethodDescriptor::new("DisablePlace").returning("System.String"))
            .with_method(
                MethodDescriptor::new("ValidatePlace")
                    .returning("System.String")
                    .with_parameter(ParameterDescriptor::new("quantity", "System.Int32")),
            )
            .with_method(MethodDescriptor::new("Default0Place").returning("System.Int32"));

        let registry = TypeRegistry::with_system_types();
        let policies = FacetPolicies::new();
        let diagnostics = Mutex::new(DiagnosticCollector::new());
        let cx = FactoryContext::new(&registry, &policies, &[], &diagnostics);
        let mut pool = MethodPool::new();

        let method = place();
        let identifier = method.identifier(&ty.full_name);
        let mut spec = ActionSpecBuilder::new(identifier.clone(), Some("Demo.Order".into()));
        spec.set_parameters(vec![ParameterSpecBuilder::new(&identifier, 0, "System.Int32".into())]);

        ActionMethodsFacetFactory::new(9)
            .process_method(&cx, &ty, &method, &mut pool, &mut spec, BuildMap::new())
            .unwrap();

        assert!(spec.contains_facet(FacetKind::ActionInvocation));
        assert!(spec.contains_facet(FacetKind::DisableForContext));
        assert!(spec.contains_facet(FacetKind::Validate));
        assert!(!spec.contains_facet(FacetKind::HideForContext));
        assert!(spec.parameters()[0].contains_facet(FacetKind::Default));
        assert_eq!(pool.removed_count(), 3);
    }
}
