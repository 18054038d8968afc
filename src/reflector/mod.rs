//! Reflector - builds and publishes the metamodel.
//!
//! Reflection proceeds in rounds. Each round introspects every pending
//! builder in the map; introspection loads builders for the types it
//! references, which become pending for the next round. When no builder is
//! pending, every builder is frozen and the result is published as a
//! [`Metamodel`].
//!
//! In [`ReflectMode::Parallel`] the builders of a round are introspected
//! concurrently, each against its own snapshot of the map, and the results
//! are merged in the round's (sorted) order. Both modes publish the same
//! metamodel and diagnostics.
//!
//! ## Key Types
//!
//! - [`Reflector`] - Owns the registry, pipeline and configuration
//! - [`ReflectorConfig`] - Roots, services, mode, thread bound, facet policies
//! - [`Reflection`] - The published metamodel plus diagnostics

mod config;
mod introspector;

use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;

pub use config::{ReflectMode, ReflectorConfig};

use crate::base::TypeName;
use crate::diagnostics::{DiagnosticCollector, ReflectDiagnostic};
use crate::error::ReflectError;
use crate::factory::{FacetFactories, FactoryContext, default_factories};
use crate::meta::{BuildMap, Metamodel, SpecMap, TypeSpec, TypeSpecBuilder};
use crate::reflect::{TypeRef, TypeRegistry};
use introspector::Introspector;

/// Result of a successful reflection run.
#[derive(Clone, Debug)]
pub struct Reflection {
    pub metamodel: Metamodel,
    /// Configuration mismatches, sorted by feature.
    pub diagnostics: Vec<ReflectDiagnostic>,
}

/// Drives the facet pipeline over every type reachable from the roots.
pub struct Reflector {
    registry: Arc<TypeRegistry>,
    factories: FacetFactories,
    config: ReflectorConfig,
}

impl Reflector {
    pub fn new(
        registry: impl Into<Arc<TypeRegistry>>,
        factories: FacetFactories,
        config: ReflectorConfig,
    ) -> Self {
        Self {
            registry: registry.into(),
            factories,
            config,
        }
    }

    /// A reflector running the standard pipeline.
    pub fn with_default_factories(registry: impl Into<Arc<TypeRegistry>>, config: ReflectorConfig) -> Self {
        Self::new(registry, default_factories(), config)
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &ReflectorConfig {
        &self.config
    }

    /// Build, freeze and return the metamodel.
    pub fn reflect(&self) -> Result<Reflection, ReflectError> {
        let diagnostics = Mutex::new(DiagnosticCollector::new());
        let cx = FactoryContext::new(
            &self.registry,
            &self.config.policies,
            &self.config.services,
            &diagnostics,
        );
        let introspector = Introspector::new(&cx, &self.factories);

        let mut metamodel = BuildMap::new();
        for service in &self.config.services {
            metamodel = cx.load_spec(&TypeRef::Named(service.clone()), metamodel)?;
        }
        for root in &self.config.roots {
            metamodel = cx.load_spec(root, metamodel)?;
        }

        let pool = match self.config.mode {
            ReflectMode::Parallel => Some(self.build_pool()?),
            ReflectMode::Sequential => None,
        };

        let mut round = 0;
        loop {
            let pending = metamodel.pending();
            if pending.is_empty() {
                break;
            }
            round += 1;
            tracing::debug!(round, pending = pending.len(), mode = ?self.config.mode, "Reflection round");

            metamodel = match &pool {
                Some(pool) => Self::parallel_round(pool, &introspector, &pending, metamodel)?,
                None => Self::sequential_round(&introspector, &pending, metamodel)?,
            };
        }

        let specs = Self::freeze_all(&metamodel)?;
        let diagnostics = diagnostics.into_inner().take_sorted();
        tracing::info!(
            types = specs.len(),
            rounds = round,
            warnings = diagnostics.len(),
            "Published metamodel"
        );
        Ok(Reflection {
            metamodel: Metamodel::new(specs),
            diagnostics,
        })
    }

    fn build_pool(&self) -> Result<rayon::ThreadPool, ReflectError> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.thread_count())
            .thread_name(|index| format!("reflector-{index}"))
            .build()
            .map_err(|e| ReflectError::ThreadPool(e.to_string()))
    }

    fn sequential_round(
        introspector: &Introspector<'_>,
        pending: &[TypeName],
        mut metamodel: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        for name in pending {
            metamodel = introspector.introspect(name, metamodel)?;
        }
        Ok(metamodel)
    }

    /// Introspect `pending` concurrently, each task on a snapshot of
    /// `base`, then fold the changed entries back in `pending` order.
    fn parallel_round(
        pool: &rayon::ThreadPool,
        introspector: &Introspector<'_>,
        pending: &[TypeName],
        base: BuildMap,
    ) -> Result<BuildMap, ReflectError> {
        let results: Vec<Result<BuildMap, ReflectError>> = pool.install(|| {
            pending
                .par_iter()
                .map(|name| introspector.introspect(name, base.clone()))
                .collect()
        });

        let mut merged = base.clone();
        for result in results {
            merged.merge_changes(&base, &result?);
        }
        Ok(merged)
    }

    fn freeze_all(metamodel: &BuildMap) -> Result<SpecMap<TypeSpec>, ReflectError> {
        let mut specs = SpecMap::new();
        for name in metamodel.keys() {
            let Some(builder) = metamodel.get(&name) else {
                continue;
            };
            let spec = TypeSpecBuilder::clone(builder).freeze()?;
            specs.insert(name, spec);
        }
        Ok(specs)
    }
}
