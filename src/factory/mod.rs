//! Facet factories - the ordered pipeline that turns reflected members
//! into facets.
//!
//! Each factory declares the [`FeatureTypes`] it applies to and a numeric
//! position. For every feature of a type the reflector runs the applicable
//! factories in ascending position, so a later factory sees (and may
//! replace or default) the facets of earlier ones.
//!
//! ## Key Types
//!
//! - [`FacetFactory`] - One pipeline stage with four entry points
//! - [`FacetFactories`] - The ordered pipeline; [`default_factories`] builds the standard one
//! - [`FactoryContext`] - Registry, facet policies and diagnostics shared by all stages
//! - [`MethodRemover`] - Claims complementary methods so they never become actions

mod action_methods;
mod callback;
mod collection;
mod context;
mod descriptive;
mod fallback;
mod filtering;
mod mandatory;
mod member_order;
mod persistence;
mod presentation;
mod property_methods;
mod remover;
mod string_facets;
mod typical_length;
mod validate_object;
mod value;
mod visibility;

use std::fmt;
use std::sync::Arc;

pub use action_methods::ActionMethodsFacetFactory;
pub use callback::CallbackMethodsFacetFactory;
pub use collection::{CollectionFacetFactory, TypeOfFacetFactory};
pub use context::FactoryContext;
pub use descriptive::DescriptiveAnnotationFacetFactory;
pub use fallback::FallbackFacetFactory;
pub use filtering::{
    IteratorFilteringFacetFactory, RemoveIgnoredMethodsFacetFactory,
    SystemClassMethodFilteringFacetFactory,
};
pub use mandatory::{
    MandatoryDefaultFacetFactory, OptionalAnnotationFacetFactory, RequiredAnnotationFacetFactory,
};
pub use member_order::MemberOrderAnnotationFacetFactory;
pub use persistence::{
    ImmutableAnnotationFacetFactory, NotPersistedAnnotationFacetFactory,
    ProgramPersistableOnlyFacetFactory,
};
pub use presentation::{
    MultiLineAnnotationFacetFactory, NotNavigableAnnotationFacetFactory,
    PresentationHintAnnotationFacetFactory,
};
pub use property_methods::PropertyMethodsFacetFactory;
pub use remover::{MethodPool, MethodRemover};
pub use string_facets::{
    MaskAnnotationFacetFactory, MaxLengthAnnotationFacetFactory, RegExAnnotationFacetFactory,
};
pub use typical_length::{TypicalLengthAnnotationFacetFactory, TypicalLengthDerivedFromTypeFacetFactory};
pub use validate_object::ValidateObjectFacetFactory;
pub use value::ValueFacetFactory;
pub use visibility::{DisabledAnnotationFacetFactory, HiddenAnnotationFacetFactory};

use crate::base::{FeatureType, FeatureTypes};
use crate::error::ReflectError;
use crate::meta::{
    ActionSpecBuilder, AssociationSpecBuilder, BuildMap, MethodBinding, ParameterSpecBuilder,
    TypeSpecBuilder,
};
use crate::reflect::{MethodDescriptor, PropertyDescriptor, TypeDescriptor};

// ============================================================================
// FACTORY TRAIT
// ============================================================================

/// One stage of the facet pipeline.
///
/// Every entry point receives the build map and returns it, possibly with
/// additional builders loaded. The default implementations are no-ops.
pub trait FacetFactory: Send + Sync {
    fn name(&self) -> &'static str;

    /// Position in the pipeline; lower runs first.
    fn position(&self) -> u32;

    fn feature_types(&self) -> FeatureTypes;

    fn process_type(
        &self,
        _cx: &FactoryContext<'_>,
        _ty: &TypeDescriptor,
        _remover: &mut dyn MethodRemover,
        _spec: &mut TypeSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        Ok(metamodel)
    }

    fn process_property(
        &self,
        _cx: &FactoryContext<'_>,
        _ty: &TypeDescriptor,
        _property: &PropertyDescriptor,
        _remover: &mut dyn MethodRemover,
        _spec: &mut AssociationSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        Ok(metamodel)
    }

    fn process_method(
        &self,
        _cx: &FactoryContext<'_>,
        _ty: &TypeDescriptor,
        _method: &MethodDescriptor,
        _remover: &mut dyn MethodRemover,
        _spec: &mut ActionSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        Ok(metamodel)
    }

    fn process_param(
        &self,
        _cx: &FactoryContext<'_>,
        _method: &MethodDescriptor,
        _index: usize,
        _spec: &mut ParameterSpecBuilder,
        metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        Ok(metamodel)
    }
}

/// The non-static method `{prefix}{member}` on `ty`, optionally with an
/// exact parameter count.
pub(crate) fn find_complementary<'a>(
    ty: &'a TypeDescriptor,
    prefix: &str,
    member: &str,
    parameter_count: Option<usize>,
) -> Option<&'a MethodDescriptor> {
    let name = format!("{prefix}{member}");
    ty.methods.iter().find(|m| {
        m.name == name.as_str()
            && !m.is_static
            && parameter_count.is_none_or(|count| m.parameters.len() == count)
    })
}

/// Find `{prefix}{member}`, claim it through `remover` and bind it.
pub(crate) fn claim_complementary<'a>(
    ty: &'a TypeDescriptor,
    remover: &mut dyn MethodRemover,
    prefix: &str,
    member: &str,
    parameter_count: Option<usize>,
) -> Option<(MethodBinding, &'a MethodDescriptor)> {
    let method = find_complementary(ty, prefix, member, parameter_count)?;
    remover.remove_method(&ty.full_name, method);
    Some((MethodBinding::from_descriptor(&ty.full_name, method), method))
}

// ============================================================================
// PIPELINE
// ============================================================================

/// The ordered set of factories a reflector runs.
#[derive(Clone, Default)]
pub struct FacetFactories {
    factories: Vec<Arc<dyn FacetFactory>>,
}

impl FacetFactories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory, keeping the pipeline sorted by position. Factories
    /// sharing a position run in insertion order.
    pub fn add(&mut self, factory: impl FacetFactory + 'static) {
        let position = factory.position();
        let index = self
            .factories
            .partition_point(|f| f.position() <= position);
        self.factories.insert(index, Arc::new(factory));
    }

    pub fn with(mut self, factory: impl FacetFactory + 'static) -> Self {
        self.add(factory);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn FacetFactory>> {
        self.factories.iter()
    }

    /// Factories applicable to `feature`, in position order.
    pub fn for_feature(&self, feature: FeatureType) -> impl Iterator<Item = &Arc<dyn FacetFactory>> {
        self.factories
            .iter()
            .filter(move |f| f.feature_types().contains(feature))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for FacetFactories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.factories.iter().map(|f| (f.position(), f.name())))
            .finish()
    }
}

/// The standard pipeline.
pub fn default_factories() -> FacetFactories {
    FacetFactories::new()
        .with(FallbackFacetFactory::new(0))
        .with(IteratorFilteringFacetFactory::new(1))
        .with(SystemClassMethodFilteringFacetFactory::new(2))
        .with(RemoveIgnoredMethodsFacetFactory::new(3))
        .with(CollectionFacetFactory::new(4))
        .with(ValueFacetFactory::new(5))
        .with(CallbackMethodsFacetFactory::new(6))
        .with(ValidateObjectFacetFactory::new(7))
        .with(PropertyMethodsFacetFactory::new(8))
        .with(ActionMethodsFacetFactory::new(9))
        .with(HiddenAnnotationFacetFactory::new(10))
        .with(DisabledAnnotationFacetFactory::new(11))
        .with(RequiredAnnotationFacetFactory::new(12))
        .with(OptionalAnnotationFacetFactory::new(13))
        .with(MemberOrderAnnotationFacetFactory::new(14))
        .with(TypeOfFacetFactory::new(15))
        .with(TypicalLengthDerivedFromTypeFacetFactory::new(16))
        .with(TypicalLengthAnnotationFacetFactory::new(17))
        .with(MultiLineAnnotationFacetFactory::new(18))
        .with(PresentationHintAnnotationFacetFactory::new(19))
        .with(NotNavigableAnnotationFacetFactory::new(20))
        .with(ProgramPersistableOnlyFacetFactory::new(21))
        .with(DescriptiveAnnotationFacetFactory::new(22))
        .with(MaxLengthAnnotationFacetFactory::new(23))
        .with(MaskAnnotationFacetFactory::new(24))
        .with(RegExAnnotationFacetFactory::new(25))
        .with(ImmutableAnnotationFacetFactory::new(26))
        .with(NotPersistedAnnotationFacetFactory::new(27))
        .with(MandatoryDefaultFacetFactory::new(28))
}
