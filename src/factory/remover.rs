//! Method removal requests issued by facet factories.

use rustc_hash::FxHashSet;

use crate::base::{Identifier, TypeName};
use crate::reflect::MethodDescriptor;

/// Collaborator through which a factory claims a reflected method so that
/// later factories (and action discovery) no longer see it.
pub trait MethodRemover {
    fn remove_method(&mut self, owner: &TypeName, method: &MethodDescriptor);

    fn remove_methods(&mut self, owner: &TypeName, methods: &[&MethodDescriptor]) {
        for method in methods {
            self.remove_method(owner, method);
        }
    }

    fn is_removed(&self, owner: &TypeName, method: &MethodDescriptor) -> bool;
}

/// The remover used while introspecting one type.
#[derive(Clone, Debug, Default)]
pub struct MethodPool {
    removed: FxHashSet<Identifier>,
}

impl MethodPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

impl MethodRemover for MethodPool {
    fn remove_method(&mut self, owner: &TypeName, method: &MethodDescriptor) {
        self.removed.insert(method.identifier(owner));
    }

    fn is_removed(&self, owner: &TypeName, method: &MethodDescriptor) -> bool {
        self.removed.contains(&method.identifier(owner))
    }
}
