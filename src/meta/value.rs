//! Value semantics of system value types.

use std::sync::Arc;

use crate::base::constants;
use crate::reflect::TypeKind;

/// The value types the framework knows how to parse and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    Boolean,
    Byte,
    SByte,
    Char,
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Single,
    Double,
    Decimal,
    String,
    DateTime,
    TimeSpan,
    Guid,
    Color,
    Image,
    FileAttachment,
    Enum,
}

impl ValueKind {
    /// Value kind of a type, by name or (for enums) by kind.
    pub fn for_type(full_name: &str, kind: TypeKind) -> Option<Self> {
        if kind.is_enum() {
            return Some(ValueKind::Enum);
        }
        let value = match full_name {
            constants::BOOLEAN => ValueKind::Boolean,
            constants::BYTE => ValueKind::Byte,
            constants::SBYTE => ValueKind::SByte,
            constants::CHAR => ValueKind::Char,
            constants::INT16 => ValueKind::Int16,
            constants::INT32 => ValueKind::Int32,
            constants::INT64 => ValueKind::Int64,
            constants::UINT16 => ValueKind::UInt16,
            constants::UINT32 => ValueKind::UInt32,
            constants::UINT64 => ValueKind::UInt64,
            constants::SINGLE => ValueKind::Single,
            constants::DOUBLE => ValueKind::Double,
            constants::DECIMAL => ValueKind::Decimal,
            constants::STRING => ValueKind::String,
            constants::DATE_TIME => ValueKind::DateTime,
            constants::TIME_SPAN => ValueKind::TimeSpan,
            constants::GUID => ValueKind::Guid,
            constants::COLOR => ValueKind::Color,
            constants::IMAGE => ValueKind::Image,
            constants::FILE_ATTACHMENT => ValueKind::FileAttachment,
            _ => return None,
        };
        Some(value)
    }

    /// Typical display length in characters.
    pub fn typical_length(self) -> u32 {
        match self {
            ValueKind::Boolean => 5,
            ValueKind::Byte | ValueKind::SByte => 3,
            ValueKind::Char => 2,
            ValueKind::Color => 4,
            ValueKind::DateTime | ValueKind::Decimal => 18,
            ValueKind::Double => 22,
            ValueKind::Single => 12,
            ValueKind::Guid => 36,
            ValueKind::Image | ValueKind::FileAttachment => 0,
            ValueKind::Int32 | ValueKind::Enum => 11,
            ValueKind::Int64 | ValueKind::UInt64 => 20,
            ValueKind::Int16 | ValueKind::TimeSpan => 6,
            ValueKind::UInt32 => 10,
            ValueKind::UInt16 => 5,
            ValueKind::String => 25,
        }
    }

    /// Invariant string form of the default value, `None` when the default is null.
    pub fn default_value(self) -> Option<&'static str> {
        match self {
            ValueKind::Boolean => Some("false"),
            ValueKind::Byte
            | ValueKind::SByte
            | ValueKind::Int16
            | ValueKind::Int32
            | ValueKind::Int64
            | ValueKind::UInt16
            | ValueKind::UInt32
            | ValueKind::UInt64
            | ValueKind::Single
            | ValueKind::Double
            | ValueKind::Decimal => Some("0"),
            _ => None,
        }
    }

    /// Whether instances are compared by content rather than identity.
    pub fn is_equal_by_content(self) -> bool {
        !matches!(self, ValueKind::Image | ValueKind::FileAttachment)
    }

    /// Whether the type can be parsed from text entry.
    pub fn is_parseable(self) -> bool {
        !matches!(
            self,
            ValueKind::Image | ValueKind::FileAttachment | ValueKind::Color
        )
    }
}

/// Value semantics attached to a value type's specification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueSemantics {
    pub kind: ValueKind,
    pub typical_length: u32,
    pub immutable: bool,
    pub equal_by_content: bool,
    pub parseable: bool,
    pub default_value: Option<Arc<str>>,
}

impl ValueSemantics {
    pub fn for_kind(kind: ValueKind) -> Self {
        Self {
            kind,
            typical_length: kind.typical_length(),
            immutable: true,
            equal_by_content: kind.is_equal_by_content(),
            parseable: kind.is_parseable(),
            default_value: kind.default_value().map(Arc::from),
        }
    }
}
