//! The specification abstraction shared by builders and immutable specs.

use super::error::MetamodelError;
use super::facet::{Facet, FacetKind};
use super::facet_map::{FacetMap, FacetPolicy};
use crate::base::{Identifier, WhenTo};

/// Read access to a specification: its identity and its facets.
pub trait Specification {
    fn identifier(&self) -> &Identifier;

    fn facets(&self) -> &FacetMap;

    fn get_facet(&self, kind: FacetKind) -> Option<&Facet> {
        self.facets().get(kind)
    }

    fn contains_facet(&self, kind: FacetKind) -> bool {
        self.facets().contains(kind)
    }

    fn facet_kinds(&self) -> Vec<FacetKind> {
        self.facets().kinds().collect()
    }

    /// The display name, if a `Named` facet is present.
    fn name(&self) -> Option<&str> {
        match self.get_facet(FacetKind::Named) {
            Some(Facet::Named { name, .. }) => Some(name.as_ref()),
            _ => None,
        }
    }

    fn description(&self) -> Option<&str> {
        match self.get_facet(FacetKind::DescribedAs) {
            Some(Facet::DescribedAs { description, .. }) => Some(description.as_ref()),
            _ => None,
        }
    }

    /// Sequence of the `MemberOrder` facet, if any.
    fn member_order(&self) -> Option<&str> {
        match self.get_facet(FacetKind::MemberOrder) {
            Some(Facet::MemberOrder { sequence, .. }) => Some(sequence.as_ref()),
            _ => None,
        }
    }

    fn hidden(&self) -> Option<WhenTo> {
        self.get_facet(FacetKind::Hidden).and_then(Facet::when)
    }

    fn is_mandatory(&self) -> bool {
        matches!(
            self.get_facet(FacetKind::Mandatory),
            Some(Facet::Mandatory { mandatory: true, .. })
        )
    }
}

/// Mutable access to a specification under construction.
///
/// Every mutation fails with [`MetamodelError::Frozen`] once the owning
/// builder has been frozen.
pub trait SpecificationBuilder: Specification {
    /// Add a facet under `policy`. Returns whether it was stored.
    fn add_facet_with(&mut self, facet: Facet, policy: FacetPolicy) -> Result<bool, MetamodelError>;

    fn remove_facet(&mut self, kind: FacetKind) -> Result<Option<Facet>, MetamodelError>;

    /// Add a facet, replacing any facet of the same kind.
    fn add_facet(&mut self, facet: Facet) -> Result<bool, MetamodelError> {
        self.add_facet_with(facet, FacetPolicy::Replace)
    }

    /// Add a facet only when none of its kind is present yet.
    fn add_facet_if_absent(&mut self, facet: Facet) -> Result<bool, MetamodelError> {
        self.add_facet_with(facet, FacetPolicy::KeepExisting)
    }
}

/// Identity, facets and frozen flag of one specification under construction.
#[derive(Clone, Debug)]
pub struct SpecHolder {
    identifier: Identifier,
    facets: FacetMap,
    frozen: bool,
}

impl SpecHolder {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            facets: FacetMap::new(),
            frozen: false,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Mark frozen and hand out the final facet set.
    pub fn freeze(&mut self) -> Result<FacetMap, MetamodelError> {
        if self.frozen {
            return Err(MetamodelError::AlreadyFrozen(self.identifier.clone()));
        }
        self.frozen = true;
        Ok(self.facets.clone())
    }
}

impl Specification for SpecHolder {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn facets(&self) -> &FacetMap {
        &self.facets
    }
}

impl SpecificationBuilder for SpecHolder {
    fn add_facet_with(&mut self, facet: Facet, policy: FacetPolicy) -> Result<bool, MetamodelError> {
        if self.frozen {
            return Err(MetamodelError::Frozen(self.identifier.clone()));
        }
        Ok(self.facets.add_with(facet, policy))
    }

    fn remove_facet(&mut self, kind: FacetKind) -> Result<Option<Facet>, MetamodelError> {
        if self.frozen {
            return Err(MetamodelError::Frozen(self.identifier.clone()));
        }
        Ok(self.facets.remove(kind))
    }
}

/// Implement [`Specification`] and [`SpecificationBuilder`] for a builder
/// that keeps its state in a `holder: SpecHolder` field.
macro_rules! delegate_to_holder {
    ($($builder:ty),+ $(,)?) => {$(
        impl $crate::meta::Specification for $builder {
            fn identifier(&self) -> &$crate::base::Identifier {
                $crate::meta::Specification::identifier(&self.holder)
            }

            fn facets(&self) -> &$crate::meta::FacetMap {
                $crate::meta::Specification::facets(&self.holder)
            }
        }

        impl $crate::meta::SpecificationBuilder for $builder {
            fn add_facet_with(
                &mut self,
                facet: $crate::meta::Facet,
                policy: $crate::meta::FacetPolicy,
            ) -> Result<bool, $crate::meta::MetamodelError> {
                $crate::meta::SpecificationBuilder::add_facet_with(&mut self.holder, facet, policy)
            }

            fn remove_facet(
                &mut self,
                kind: $crate::meta::FacetKind,
            ) -> Result<Option<$crate::meta::Facet>, $crate::meta::MetamodelError> {
                $crate::meta::SpecificationBuilder::remove_facet(&mut self.holder, kind)
            }
        }
    )+};
}

/// Implement [`Specification`] for an immutable spec with `identifier`
/// and `facets` fields.
macro_rules! immutable_specification {
    ($($spec:ty),+ $(,)?) => {$(
        impl $crate::meta::Specification for $spec {
            fn identifier(&self) -> &$crate::base::Identifier {
                &self.identifier
            }

            fn facets(&self) -> &$crate::meta::FacetMap {
                &self.facets
            }
        }
    )+};
}

pub(crate) use delegate_to_holder;
pub(crate) use immutable_specification;
