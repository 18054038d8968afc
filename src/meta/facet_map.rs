//! Per-specification facet storage and replacement policy.

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

use super::facet::{Facet, FacetKind};

/// What happens when a facet of an already-present kind is added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FacetPolicy {
    /// The newer facet replaces the existing one (last writer wins).
    #[default]
    Replace,
    /// The existing facet is kept and the newer one discarded.
    KeepExisting,
}

/// Per-kind replacement policy overrides. Kinds without an override use
/// [`FacetPolicy::Replace`].
#[derive(Clone, Debug, Default)]
pub struct FacetPolicies {
    overrides: FxHashMap<FacetKind, FacetPolicy>,
}

impl FacetPolicies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: FacetKind, policy: FacetPolicy) -> Self {
        self.overrides.insert(kind, policy);
        self
    }

    pub fn policy_for(&self, kind: FacetKind) -> FacetPolicy {
        self.overrides.get(&kind).copied().unwrap_or_default()
    }
}

/// Facets of one specification, keyed by kind, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Vec<Facet>", from = "Vec<Facet>")
)]
pub struct FacetMap {
    facets: IndexMap<FacetKind, Facet, FxBuildHasher>,
}

impl FacetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a facet under `policy`. Returns whether the facet was stored.
    pub fn add_with(&mut self, facet: Facet, policy: FacetPolicy) -> bool {
        let kind = facet.kind();
        if policy == FacetPolicy::KeepExisting && self.facets.contains_key(&kind) {
            return false;
        }
        self.facets.insert(kind, facet);
        true
    }

    /// Add a facet, replacing any facet of the same kind.
    pub fn add(&mut self, facet: Facet) -> Option<Facet> {
        self.facets.insert(facet.kind(), facet)
    }

    pub fn get(&self, kind: FacetKind) -> Option<&Facet> {
        self.facets.get(&kind)
    }

    pub(crate) fn get_mut(&mut self, kind: FacetKind) -> Option<&mut Facet> {
        self.facets.get_mut(&kind)
    }

    pub fn contains(&self, kind: FacetKind) -> bool {
        self.facets.contains_key(&kind)
    }

    pub fn remove(&mut self, kind: FacetKind) -> Option<Facet> {
        self.facets.shift_remove(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = FacetKind> + '_ {
        self.facets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facet> {
        self.facets.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Facet> {
        self.facets.values_mut()
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}

impl From<Vec<Facet>> for FacetMap {
    fn from(facets: Vec<Facet>) -> Self {
        let mut map = FacetMap::new();
        for facet in facets {
            map.add(facet);
        }
        map
    }
}

impl From<FacetMap> for Vec<Facet> {
    fn from(map: FacetMap) -> Self {
        map.facets.into_values().collect()
    }
}
