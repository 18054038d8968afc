//! Object-level `Validate(...)` methods.

use smol_str::SmolStr;

use super::{FacetFactory, FactoryContext, MethodRemover};
use crate::base::{FeatureTypes, constants};
use crate::diagnostics::codes;
use crate::error::ReflectError;
use crate::meta::{BuildMap, Facet, MethodBinding, TypeSpecBuilder, ValidationMethod};
use crate::reflect::TypeDescriptor;

/// Collects every `Validate` method whose parameters each name a property
/// (case-insensitively). A method with an unmatched parameter is reported
/// and left out; the others still form the facet.
pub struct ValidateObjectFacetFactory {
    position: u32,
}

impl ValidateObjectFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for ValidateObjectFacetFactory {
    fn name(&self) -> &'static str {
        "ValidateObject"
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
        let mut validations = Vec::new();
        for method in ty
            .methods_named(constants::VALIDATE)
            .filter(|m| !m.parameters.is_empty())
        {
            remover.remove_method(&ty.full_name, method);

            let unmatched = method.parameters.iter().find(|p| {
                !ty.properties
                    .iter()
                    .any(|property| property.name.eq_ignore_ascii_case(&p.name))
            });
            if let Some(parameter) = unmatched {
                cx.warn(
                    &method.identifier(&ty.full_name),
                    codes::VALIDATE_PARAMETER_MISMATCH,
                    format!(
                        "Validate method parameter '{}' does not match any property on {}; method ignored",
                        parameter.name, ty.full_name
                    ),
                );
                continue;
            }

            validations.push(ValidationMethod {
                binding: MethodBinding::from_descriptor(&ty.full_name, method),
                parameter_names: method
                    .parameters
                    .iter()
                    .map(|p| SmolStr::from(p.name.to_lowercase()))
                    .collect(),
            });
        }

        if !validations.is_empty() {
            cx.add_facet(spec, Facet::ValidateObject(validations))?;
        }
        Ok(metamodel)
    }
}
