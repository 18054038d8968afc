//! Helpers for driving factories and the reflector in tests.

use naked::base::TypeName;
use naked::diagnostics::{DiagnosticCollector, ReflectDiagnostic};
use naked::factory::{FactoryContext, MethodRemover};
use naked::meta::FacetPolicies;
use naked::reflect::{MethodDescriptor, TypeRegistry};
use naked::{ReflectMode, Reflection, Reflector, ReflectorConfig};
use parking_lot::Mutex;

use super::domain_fixtures::{CUSTOMER, DEMO_REGISTRY, REPOSITORY};

/// Owns what a [`FactoryContext`] borrows.
pub struct FactoryHarness {
    pub registry: TypeRegistry,
    pub policies: FacetPolicies,
    pub services: Vec<TypeName>,
    pub diagnostics: Mutex<DiagnosticCollector>,
}

impl FactoryHarness {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            policies: FacetPolicies::new(),
            services: Vec::new(),
            diagnostics: Mutex::new(DiagnosticCollector::new()),
        }
    }

    pub fn cx(&self) -> FactoryContext<'_> {
        FactoryContext::new(&self.registry, &self.policies, &self.services, &self.diagnostics)
    }

    pub fn diagnostics(&self) -> Vec<ReflectDiagnostic> {
        self.diagnostics.lock().take_sorted()
    }
}

/// A remover that records which methods were claimed, by name.
#[derive(Debug, Default)]
pub struct RecordingRemover {
    pub removed: Vec<String>,
}

impl MethodRemover for RecordingRemover {
    fn remove_method(&mut self, _owner: &TypeName, method: &MethodDescriptor) {
        self.removed.push(method.name.to_string());
    }

    fn is_removed(&self, _owner: &TypeName, method: &MethodDescriptor) -> bool {
        self.removed.iter().any(|name| name == method.name.as_str())
    }
}

/// Config reflecting the demo domain from the customer and the repository.
pub fn demo_config(mode: ReflectMode) -> ReflectorConfig {
    ReflectorConfig::new()
        .with_root(CUSTOMER)
        .with_service(REPOSITORY)
        .with_mode(mode)
}

/// Reflect the demo domain with the standard pipeline.
pub fn reflect_demo(mode: ReflectMode) -> Reflection {
    Reflector::with_default_factories(DEMO_REGISTRY.clone(), demo_config(mode))
        .reflect()
        .expect("demo domain reflects")
}
