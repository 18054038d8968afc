//! Lifecycle callback methods (`Created`, `Persisting`, ...).

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::FeatureTypes;
use crate::error::ReflectError;
use crate::meta::{BuildMap, Facet, LifecycleEvent, MethodBinding, TypeSpecBuilder};
use crate::reflect::TypeDescriptor;

/// Binds each parameterless lifecycle method to a callback facet and
/// removes it from action discovery.
pub struct CallbackMethodsFacetFactory {
    position: u32,
}

impl CallbackMethodsFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for CallbackMethodsFacetFactory {
    fn name(&self) -> &'static str {
        "CallbackMethods"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::OBJECTS
    }

    fn process_type(
        &self,
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        remover: &mut dyn MethodRemover,
        spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        for event in LifecycleEvent::ALL {
            let Some(method) = ty
                .methods_named(event.method_name())
                .find(|m| m.parameters.is_empty() && !m.is_static)
            else {
                continue;
            };
            remover.remove_method(&ty.full_name, method);
            cx.add_facet(
                spec,
                Facet::Callback {
                    event,
                    binding: MethodBinding::from_descriptor(&ty.full_name, method),
                },
            )?;
        }
        Ok(metamodel)
    }
}
