//! Reflector configuration.

use crate::base::TypeName;
use crate::meta::{FacetKind, FacetPolicies, FacetPolicy};
use crate::reflect::TypeRef;

/// How pending types are introspected within a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReflectMode {
    /// Introspect independent types concurrently on a rayon pool.
    #[default]
    Parallel,
    /// Introspect one type at a time on the calling thread.
    Sequential,
}

/// What to reflect and how.
#[derive(Clone, Debug, Default)]
pub struct ReflectorConfig {
    /// Types whose specifications (and everything they reference) are built.
    pub roots: Vec<TypeRef>,
    /// Types published as services rather than domain objects.
    pub services: Vec<TypeName>,
    pub mode: ReflectMode,
    /// Upper bound on worker threads; never more than the available cores.
    pub max_threads: Option<usize>,
    pub policies: FacetPolicies,
}

impl ReflectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<TypeRef>) -> Self {
        self.roots.push(root.into());
        self
    }

    pub fn with_roots<I, T>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeRef>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    pub fn with_service(mut self, service: impl Into<TypeName>) -> Self {
        self.services.push(service.into());
        self
    }

    pub fn with_mode(mut self, mode: ReflectMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = Some(max_threads);
        self
    }

    pub fn with_policies(mut self, policies: FacetPolicies) -> Self {
        self.policies = policies;
        self
    }

    /// Override the replacement policy for one facet kind.
    pub fn with_policy(mut self, kind: FacetKind, policy: FacetPolicy) -> Self {
        self.policies = self.policies.with(kind, policy);
        self
    }

    /// Worker threads for parallel reflection.
    pub fn thread_count(&self) -> usize {
        let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
        self.max_threads
            .map_or(cores, |max| max.clamp(1, cores))
    }
}
