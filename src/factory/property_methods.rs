//! Complementary methods of properties and collections.
//!
//! For a property `Name` the conventions are `ModifyName(value)`,
//! `ClearName()`, `ChoicesName(...)`, `DefaultName()`, `ValidateName(value)`,
//! `HideName()` and `DisableName()`. Collections only take the last two
//! plus `ValidateName`.

use smol_str::SmolStr;

use super::{FacetFactory, FactoryContext, MethodRemover, claim_complementary};
use crate::base::{FeatureTypes, WhenTo, constants};
use crate::error::ReflectError;
use crate::meta::{AssociationKind, AssociationSpecBuilder, BuildMap, Facet};
use crate::reflect::{PropertyDescriptor, TypeDescriptor};

pub struct PropertyMethodsFacetFactory {
    position: u32,
}

impl PropertyMethodsFacetFactory {
    pub fn new(position: u32) -> Self {
        Self { position }
    }
}

impl FacetFactory for PropertyMethodsFacetFactory {
    fn name(&self) -> &'static str {
        "PropertyMethods"
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn feature_types(&self) -> FeatureTypes {
        FeatureTypes::PROPERTIES_AND_COLLECTIONS
    }

    fn process_property(
        &self,
        cx: &FactoryContext<'_>,
        ty: &TypeDescriptor,
        property: &PropertyDescriptor,
        remover: &mut dyn MethodRemover,
        spec: &mut AssociationSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        let name = property.name.as_str();
        let is_property = spec.kind() == AssociationKind::OneToOne;

        if is_property {
            let modify = claim_complementary(ty, remover, constants::PREFIX_MODIFY, name, Some(1));
            let has_modify = modify.is_some();
            if let Some((binding, _)) = modify {
                cx.add_facet(spec, Facet::PropertyModify(binding))?;
            }
            if let Some((binding, _)) = claim_complementary(ty, remover, constants::PREFIX_CLEAR, name, Some(0)) {
                cx.add_facet(spec, Facet::PropertyClear(binding))?;
            }
            if let Some((binding, method)) = claim_complementary(ty, remover, constants::PREFIX_CHOICES, name, None) {
                let parameter_names = method
                    .parameters
                    .iter()
                    .map(|p| SmolStr::from(p.name.to_lowercase()))
                    .collect();
                cx.add_facet(spec, Facet::Choices { binding, parameter_names })?;
            }
            if let Some((binding, _)) = claim_complementary(ty, remover, constants::PREFIX_DEFAULT, name, Some(0)) {
                cx.add_facet(spec, Facet::Default(binding))?;
            }
            if !property.has_setter && !has_modify {
                cx.add_facet(spec, Facet::Disabled(WhenTo::Always))?;
            }
        }

        if let Some((binding, _)) = claim_complementary(ty, remover, constants::PREFIX_VALIDATE, name, Some(1)) {
            cx.add_facet(spec, Facet::Validate(binding))?;
        }
        if let Some((binding, _)) = claim_complementary(ty, remover, constants::PREFIX_HIDE, name, Some(0)) {
            cx.add_facet(spec, Facet::HideForContext(binding))?;
        }
        if let Some((binding, _)) = claim_complementary(ty, remover, constants::PREFIX_DISABLE, name, Some(0)) {
            cx.add_facet(spec, Facet::DisableForContext(binding))?;
        }
        Ok(metamodel)
    }
}
