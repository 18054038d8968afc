//! Facets - typed metadata units attached to specifications.
//!
//! A specification carries at most one facet per [`FacetKind`]. Declarative
//! facets carry plain data; imperative facets carry a [`MethodBinding`] to
//! the domain method they delegate to.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use super::error::MetamodelError;
use super::value::ValueSemantics;
use crate::base::{Identifier, TypeName, WhenTo};
use crate::reflect::{DomainObject, Invocation, MethodDescriptor, MethodThunk, TypeRegistry};

// ============================================================================
// FACET KINDS
// ============================================================================

/// Lifecycle events a domain type may react to via callback methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifecycleEvent {
    Created,
    Persisting,
    Persisted,
    Updating,
    Updated,
    Loading,
    Loaded,
    Deleting,
    Deleted,
    PersistingError,
    UpdatingError,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 11] = [
        LifecycleEvent::Created,
        LifecycleEvent::Persisting,
        LifecycleEvent::Persisted,
        LifecycleEvent::Updating,
        LifecycleEvent::Updated,
        LifecycleEvent::Loading,
        LifecycleEvent::Loaded,
        LifecycleEvent::Deleting,
        LifecycleEvent::Deleted,
        LifecycleEvent::PersistingError,
        LifecycleEvent::UpdatingError,
    ];

    /// Name of the callback method that handles this event.
    pub fn method_name(self) -> &'static str {
        match self {
            LifecycleEvent::Created => "Created",
            LifecycleEvent::Persisting => "Persisting",
            LifecycleEvent::Persisted => "Persisted",
            LifecycleEvent::Updating => "Updating",
            LifecycleEvent::Updated => "Updated",
            LifecycleEvent::Loading => "Loading",
            LifecycleEvent::Loaded => "Loaded",
            LifecycleEvent::Deleting => "Deleting",
            LifecycleEvent::Deleted => "Deleted",
            LifecycleEvent::PersistingError => "OnPersistingError",
            LifecycleEvent::UpdatingError => "OnUpdatingError",
        }
    }
}

/// The kind of a facet. A facet map holds at most one facet per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FacetKind {
    Named,
    DescribedAs,
    Plural,
    Hidden,
    Disabled,
    Mandatory,
    MemberOrder,
    TypicalLength,
    MultiLine,
    MaxLength,
    Mask,
    RegEx,
    PresentationHint,
    NotNavigable,
    ProgramPersistableOnly,
    Immutable,
    NotPersisted,
    Collection,
    TypeOf,
    ElementType,
    Value,
    Choices,
    Default,
    Validate,
    HideForContext,
    DisableForContext,
    PropertyModify,
    PropertyClear,
    ActionInvocation,
    Callback(LifecycleEvent),
    ValidateObject,
}

// ============================================================================
// FACET PAYLOADS
// ============================================================================

/// Where a facet's value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FacetSource {
    /// Read from an explicit annotation.
    Annotation,
    /// Inferred from naming or signature conventions.
    Inferred,
    /// Derived from the member's type.
    DerivedFromType,
    /// Framework default applied when nothing else decided.
    Default,
}

/// How an element type was determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeOfSource {
    Annotation,
    Generics,
    Array,
}

/// The shape of a collection type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollectionShape {
    Array,
    Generic,
    NonGeneric,
}

/// A reference to a domain method plus, when available, its invocation thunk.
///
/// Only the identifier takes part in equality and serialisation; the thunk
/// is rebound from a [`TypeRegistry`] after deserialisation.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodBinding {
    method: Identifier,
    #[cfg_attr(feature = "serde", serde(skip))]
    thunk: Option<MethodThunk>,
}

impl MethodBinding {
    pub fn new(method: Identifier, thunk: Option<MethodThunk>) -> Self {
        Self { method, thunk }
    }

    /// Bind a method descriptor declared on `owner`.
    pub fn from_descriptor(owner: &TypeName, method: &MethodDescriptor) -> Self {
        Self::new(method.identifier(owner), method.body.clone())
    }

    pub fn method(&self) -> &Identifier {
        &self.method
    }

    pub fn is_bound(&self) -> bool {
        self.thunk.is_some()
    }

    pub fn invoke(
        &self,
        target: &DomainObject,
        args: &[&DomainObject],
    ) -> Result<Invocation, MetamodelError> {
        let thunk = self
            .thunk
            .as_ref()
            .ok_or_else(|| MetamodelError::Unbound(self.method.clone()))?;
        Ok(thunk(target, args))
    }

    /// Look the thunk up again by identifier. Returns whether one was found.
    pub fn rebind(&mut self, registry: &TypeRegistry) -> bool {
        self.thunk = registry.method_thunk(&self.method);
        self.thunk.is_some()
    }
}

impl PartialEq for MethodBinding {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
    }
}

impl fmt::Debug for MethodBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodBinding")
            .field("method", &self.method)
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// One `Validate(...)` method of an object-level validation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationMethod {
    pub binding: MethodBinding,
    /// Lower-cased parameter names, matched against property names.
    pub parameter_names: Vec<SmolStr>,
}

impl ValidationMethod {
    /// Run the method. A returned `String` is the validation failure reason.
    pub fn execute(
        &self,
        target: &DomainObject,
        args: &[&DomainObject],
    ) -> Result<Option<String>, MetamodelError> {
        let result = self.binding.invoke(target, args)?;
        Ok(result.and_then(|value| value.downcast::<String>().ok().map(|s| *s)))
    }
}

// ============================================================================
// FACETS
// ============================================================================

/// A typed unit of metadata on a specification.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facet {
    Named {
        name: Arc<str>,
        source: FacetSource,
    },
    DescribedAs {
        description: Arc<str>,
        source: FacetSource,
    },
    Plural {
        plural: Arc<str>,
        source: FacetSource,
    },
    Hidden(WhenTo),
    Disabled(WhenTo),
    Mandatory {
        mandatory: bool,
        source: FacetSource,
    },
    MemberOrder {
        name: Option<Arc<str>>,
        sequence: Arc<str>,
    },
    TypicalLength {
        length: u32,
        source: FacetSource,
    },
    MultiLine {
        lines: u32,
        width: u32,
    },
    MaxLength(u32),
    Mask(Arc<str>),
    RegEx {
        pattern: Arc<str>,
        message: Option<Arc<str>>,
        case_sensitive: bool,
    },
    PresentationHint(Arc<str>),
    NotNavigable,
    ProgramPersistableOnly,
    Immutable(WhenTo),
    NotPersisted,
    Collection(CollectionShape),
    TypeOf {
        element_type: TypeName,
        source: TypeOfSource,
    },
    ElementType(TypeName),
    Value(ValueSemantics),
    Choices {
        binding: MethodBinding,
        parameter_names: Vec<SmolStr>,
    },
    Default(MethodBinding),
    Validate(MethodBinding),
    HideForContext(MethodBinding),
    DisableForContext(MethodBinding),
    PropertyModify(MethodBinding),
    PropertyClear(MethodBinding),
    ActionInvocation {
        binding: MethodBinding,
        on_type: TypeName,
        return_type: Option<TypeName>,
    },
    Callback {
        event: LifecycleEvent,
        binding: MethodBinding,
    },
    ValidateObject(Vec<ValidationMethod>),
}

impl Facet {
    pub fn kind(&self) -> FacetKind {
        match self {
            Facet::Named { .. } => FacetKind::Named,
            Facet::DescribedAs { .. } => FacetKind::DescribedAs,
            Facet::Plural { .. } => FacetKind::Plural,
            Facet::Hidden(_) => FacetKind::Hidden,
            Facet::Disabled(_) => FacetKind::Disabled,
            Facet::Mandatory { .. } => FacetKind::Mandatory,
            Facet::MemberOrder { .. } => FacetKind::MemberOrder,
            Facet::TypicalLength { .. } => FacetKind::TypicalLength,
            Facet::MultiLine { .. } => FacetKind::MultiLine,
            Facet::MaxLength(_) => FacetKind::MaxLength,
            Facet::Mask(_) => FacetKind::Mask,
            Facet::RegEx { .. } => FacetKind::RegEx,
            Facet::PresentationHint(_) => FacetKind::PresentationHint,
            Facet::NotNavigable => FacetKind::NotNavigable,
            Facet::ProgramPersistableOnly => FacetKind::ProgramPersistableOnly,
            Facet::Immutable(_) => FacetKind::Immutable,
            Facet::NotPersisted => FacetKind::NotPersisted,
            Facet::Collection(_) => FacetKind::Collection,
            Facet::TypeOf { .. } => FacetKind::TypeOf,
            Facet::ElementType(_) => FacetKind::ElementType,
            Facet::Value(_) => FacetKind::Value,
            Facet::Choices { .. } => FacetKind::Choices,
            Facet::Default(_) => FacetKind::Default,
            Facet::Validate(_) => FacetKind::Validate,
            Facet::HideForContext(_) => FacetKind::HideForContext,
            Facet::DisableForContext(_) => FacetKind::DisableForContext,
            Facet::PropertyModify(_) => FacetKind::PropertyModify,
            Facet::PropertyClear(_) => FacetKind::PropertyClear,
            Facet::ActionInvocation { .. } => FacetKind::ActionInvocation,
            Facet::Callback { event, .. } => FacetKind::Callback(*event),
            Facet::ValidateObject(_) => FacetKind::ValidateObject,
        }
    }

    /// The `when` qualifier of hidden, disabled and immutable facets.
    pub fn when(&self) -> Option<WhenTo> {
        match self {
            Facet::Hidden(when) | Facet::Disabled(when) | Facet::Immutable(when) => Some(*when),
            _ => None,
        }
    }

    /// Method bindings held by this facet, in declaration order.
    pub fn bindings(&self) -> Vec<&MethodBinding> {
        match self {
            Facet::Choices { binding, .. }
            | Facet::ActionInvocation { binding, .. }
            | Facet::Callback { binding, .. } => vec![binding],
            Facet::Default(binding)
            | Facet::Validate(binding)
            | Facet::HideForContext(binding)
            | Facet::DisableForContext(binding)
            | Facet::PropertyModify(binding)
            | Facet::PropertyClear(binding) => vec![binding],
            Facet::ValidateObject(methods) => methods.iter().map(|m| &m.binding).collect(),
            _ => Vec::new(),
        }
    }

    pub(crate) fn bindings_mut(&mut self) -> Vec<&mut MethodBinding> {
        match self {
            Facet::Choices { binding, .. }
            | Facet::ActionInvocation { binding, .. }
            | Facet::Callback { binding, .. } => vec![binding],
            Facet::Default(binding)
            | Facet::Validate(binding)
            | Facet::HideForContext(binding)
            | Facet::DisableForContext(binding)
            | Facet::PropertyModify(binding)
            | Facet::PropertyClear(binding) => vec![binding],
            Facet::ValidateObject(methods) => methods.iter_mut().map(|m| &mut m.binding).collect(),
            _ => Vec::new(),
        }
    }
}
