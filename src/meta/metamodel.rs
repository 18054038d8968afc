//! Copy-on-write specification maps and the published metamodel.
//!
//! During reflection every factory receives a [`BuildMap`] and returns an
//! updated one. Cloning a map is a reference-count bump; a writer copies the
//! outer table (and the touched builder) only when it is shared. Parallel
//! reflection hands each task its own snapshot and merges the results.

use std::fmt;
use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;

use super::builder::TypeSpecBuilder;
use super::error::MetamodelError;
use super::immutable::{SpecKind, TypeSpec};
use crate::base::{Identifier, TypeName};
use crate::reflect::TypeRegistry;

// ============================================================================
// SPEC MAP
// ============================================================================

/// A persistent map from type name to specification.
pub struct SpecMap<S> {
    specs: Arc<FxHashMap<TypeName, Arc<S>>>,
}

impl<S> Clone for SpecMap<S> {
    fn clone(&self) -> Self {
        Self {
            specs: Arc::clone(&self.specs),
        }
    }
}

impl<S> Default for SpecMap<S> {
    fn default() -> Self {
        Self {
            specs: Arc::new(FxHashMap::default()),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for SpecMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.specs.iter()).finish()
    }
}

impl<S> SpecMap<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<S>> {
        self.specs.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Type names, sorted for deterministic iteration.
    pub fn keys(&self) -> Vec<TypeName> {
        let mut keys: Vec<_> = self.specs.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeName, &Arc<S>)> {
        self.specs.iter()
    }

    /// Whether both maps share the same underlying table.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.specs, &other.specs)
    }

    pub fn insert(&mut self, name: TypeName, spec: S) {
        self.insert_shared(name, Arc::new(spec));
    }

    pub fn insert_shared(&mut self, name: TypeName, spec: Arc<S>) {
        Arc::make_mut(&mut self.specs).insert(name, spec);
    }

    /// Return a new map with `spec` stored under `name`.
    pub fn with(mut self, name: TypeName, spec: S) -> Self {
        self.insert(name, spec);
        self
    }
}

impl<S: Clone> SpecMap<S> {
    /// Mutable access to one entry, copying whatever is shared.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut S> {
        Arc::make_mut(&mut self.specs).get_mut(name).map(Arc::make_mut)
    }
}

/// The map threaded through the factory pipeline.
pub type BuildMap = SpecMap<TypeSpecBuilder>;

impl SpecMap<TypeSpecBuilder> {
    /// The builder for `name`, created in [`BuildState::Pending`](super::BuildState::Pending)
    /// if absent.
    pub fn get_or_create_builder(&mut self, name: &TypeName, kind: SpecKind) -> &mut TypeSpecBuilder {
        let entry = Arc::make_mut(&mut self.specs)
            .entry(name.clone())
            .or_insert_with(|| Arc::new(TypeSpecBuilder::new(name.clone(), kind)));
        Arc::make_mut(entry)
    }

    /// Names of builders still awaiting introspection, sorted.
    pub fn pending(&self) -> Vec<TypeName> {
        let mut pending: Vec<_> = self
            .specs
            .iter()
            .filter(|(_, builder)| builder.is_pending())
            .map(|(name, _)| name.clone())
            .collect();
        pending.sort();
        pending
    }

    /// Fold the entries of `other` that differ from `base` into this map.
    ///
    /// An entry that `other` shares with `base` was not touched by the task
    /// that produced `other` and is skipped. Entries are merged in sorted
    /// name order; when two tasks touched the same builder, an introspected
    /// builder beats a pending one and otherwise the later merge wins.
    pub fn merge_changes(&mut self, base: &BuildMap, other: &BuildMap) {
        if other.ptr_eq(base) {
            return;
        }
        for name in other.keys() {
            let Some(incoming) = other.specs.get(&name) else {
                continue;
            };
            if base.specs.get(&name).is_some_and(|b| Arc::ptr_eq(b, incoming)) {
                continue;
            }
            let keep_existing = self
                .specs
                .get(&name)
                .is_some_and(|existing| !existing.is_pending() && incoming.is_pending());
            if !keep_existing {
                self.insert_shared(name, Arc::clone(incoming));
            }
        }
    }
}

// ============================================================================
// METAMODEL
// ============================================================================

static INSTALLED: OnceLock<Metamodel> = OnceLock::new();

/// The published, read-only cache of frozen type specifications.
#[derive(Clone, Debug, Default)]
pub struct Metamodel {
    specs: SpecMap<TypeSpec>,
}

impl Metamodel {
    pub fn new(specs: SpecMap<TypeSpec>) -> Self {
        Self { specs }
    }

    /// The specification for a type, failing with [`MetamodelError::NotFound`].
    pub fn get_specification(&self, name: &str) -> Result<Arc<TypeSpec>, MetamodelError> {
        self.specs
            .get(name)
            .cloned()
            .ok_or_else(|| MetamodelError::not_found(name))
    }

    pub fn get_specification_for(&self, identifier: &Identifier) -> Result<Arc<TypeSpec>, MetamodelError> {
        self.get_specification(identifier.type_name())
    }

    pub fn try_get(&self, name: &str) -> Option<&Arc<TypeSpec>> {
        self.specs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Every specification, ordered by type name.
    pub fn all_specifications(&self) -> Vec<Arc<TypeSpec>> {
        self.specs
            .keys()
            .iter()
            .filter_map(|name| self.specs.get(name).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &SpecMap<TypeSpec> {
        &self.specs
    }

    /// Re-attach invocation thunks to every method binding. Returns how
    /// many bindings found a thunk.
    pub fn rebind(&mut self, registry: &TypeRegistry) -> usize {
        let mut bound = 0;
        for name in self.specs.keys() {
            let Some(spec) = self.specs.get_mut(&name) else {
                continue;
            };
            spec.for_each_facet_map(|facets| {
                for facet in facets.iter_mut() {
                    for binding in facet.bindings_mut() {
                        if binding.rebind(registry) {
                            bound += 1;
                        }
                    }
                }
            });
        }
        bound
    }

    /// Publish this metamodel for the rest of the process.
    pub fn install(self) -> Result<&'static Metamodel, MetamodelError> {
        INSTALLED
            .set(self)
            .map_err(|_| MetamodelError::AlreadyInstalled)?;
        INSTALLED.get().ok_or(MetamodelError::AlreadyInstalled)
    }

    /// The installed process-wide metamodel, if any.
    pub fn global() -> Option<&'static Metamodel> {
        INSTALLED.get()
    }
}
