//! Annotations attached to reflected types, members and parameters.

use std::sync::Arc;

use super::types::TypeRef;
use crate::base::WhenTo;

/// An annotation on a type, property, method, or parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attribute {
    /// `[Hidden(when)]`
    Hidden(WhenTo),
    /// `[ScaffoldColumn(show)]`: `false` hides always, `true` never hides.
    ScaffoldColumn(bool),
    /// `[Disabled(when)]`
    Disabled(WhenTo),
    /// `[Required]`
    Required,
    /// `[Optionally]`
    Optionally,
    /// `[MemberOrder(name, sequence)]`
    MemberOrder {
        name: Option<Arc<str>>,
        sequence: Arc<str>,
    },
    /// `[TypicalLength(n)]`
    TypicalLength(u32),
    /// `[MultiLine(lines, width)]`
    MultiLine { lines: u32, width: u32 },
    /// `[PresentationHint(hint)]`
    PresentationHint(Arc<str>),
    /// `[NotNavigable]`
    NotNavigable,
    /// `[ProgramPersistableOnly]`
    ProgramPersistableOnly,
    /// `[TypeOf(type)]`: explicit element type of a collection or action result.
    TypeOf(TypeRef),
    /// `[Named(name)]`
    Named(Arc<str>),
    /// `[DescribedAs(description)]`
    DescribedAs(Arc<str>),
    /// `[Plural(name)]`
    Plural(Arc<str>),
    /// `[MaxLength(n)]`
    MaxLength(u32),
    /// `[StringLength(n)]`
    StringLength(u32),
    /// `[Mask(mask)]`
    Mask(Arc<str>),
    /// `[RegEx(pattern, message, case_sensitive)]`
    RegEx {
        pattern: Arc<str>,
        message: Option<Arc<str>>,
        case_sensitive: bool,
    },
    /// `[Immutable(when)]`
    Immutable(WhenTo),
    /// `[NotPersisted]`
    NotPersisted,
    /// `[NakedObjectsIgnore]`: member is invisible to the framework.
    Ignore,
}

impl Attribute {
    /// `[Hidden]` with the default timing.
    pub fn hidden() -> Self {
        Attribute::Hidden(WhenTo::Always)
    }

    /// `[Disabled]` with the default timing.
    pub fn disabled() -> Self {
        Attribute::Disabled(WhenTo::Always)
    }

    pub fn member_order(sequence: impl Into<Arc<str>>) -> Self {
        Attribute::MemberOrder {
            name: None,
            sequence: sequence.into(),
        }
    }
}

/// Anything that carries attributes.
pub trait Annotated {
    fn attributes(&self) -> &[Attribute];

    /// First attribute for which `f` returns `Some`.
    fn find_attribute<T>(&self, f: impl FnMut(&Attribute) -> Option<T>) -> Option<T> {
        self.attributes().iter().find_map(f)
    }

    /// Whether any attribute satisfies `f`.
    fn has_attribute(&self, f: impl FnMut(&Attribute) -> bool) -> bool {
        self.attributes().iter().any(f)
    }
}
