//! Well-known type names and naming conventions.

// ============================================================================
// SYSTEM TYPES
// ============================================================================

pub const OBJECT: &str = "System.Object";
pub const STRING: &str = "System.String";
pub const ARRAY: &str = "System.Array";
pub const ENUM: &str = "System.Enum";

pub const BOOLEAN: &str = "System.Boolean";
pub const BYTE: &str = "System.Byte";
pub const SBYTE: &str = "System.SByte";
pub const CHAR: &str = "System.Char";
pub const INT16: &str = "System.Int16";
pub const INT32: &str = "System.Int32";
pub const INT64: &str = "System.Int64";
pub const UINT16: &str = "System.UInt16";
pub const UINT32: &str = "System.UInt32";
pub const UINT64: &str = "System.UInt64";
pub const SINGLE: &str = "System.Single";
pub const DOUBLE: &str = "System.Double";

pub const DECIMAL: &str = "System.Decimal";
pub const DATE_TIME: &str = "System.DateTime";
pub const TIME_SPAN: &str = "System.TimeSpan";
pub const GUID: &str = "System.Guid";

pub const COLOR: &str = "System.Drawing.Color";
pub const IMAGE: &str = "NakedObjects.Value.Image";
pub const FILE_ATTACHMENT: &str = "NakedObjects.Value.FileAttachment";

/// The non-generic enumerable interface; implementing it makes a type a collection.
pub const IENUMERABLE: &str = "System.Collections.IEnumerable";
pub const IENUMERABLE_OF_T: &str = "System.Collections.Generic.IEnumerable`1";
pub const ICOLLECTION_OF_T: &str = "System.Collections.Generic.ICollection`1";
pub const ILIST_OF_T: &str = "System.Collections.Generic.IList`1";
pub const LIST_OF_T: &str = "System.Collections.Generic.List`1";
pub const ISET_OF_T: &str = "System.Collections.Generic.ISet`1";
pub const IQUERYABLE_OF_T: &str = "System.Linq.IQueryable`1";

// ============================================================================
// METHOD NAMES
// ============================================================================

/// Enumerator accessor removed from collection-like domain types.
pub const GET_ENUMERATOR: &str = "GetEnumerator";

/// Methods inherited from `System.Object` that are never actions.
pub const SYSTEM_METHODS: &[&str] = &["ToString", "Equals", "GetHashCode", "GetType"];

/// Object-level validation method name.
pub const VALIDATE: &str = "Validate";

// ============================================================================
// COMPLEMENTARY METHOD PREFIXES
// ============================================================================

pub const PREFIX_HIDE: &str = "Hide";
pub const PREFIX_DISABLE: &str = "Disable";
pub const PREFIX_VALIDATE: &str = "Validate";
pub const PREFIX_CHOICES: &str = "Choices";
pub const PREFIX_DEFAULT: &str = "Default";
pub const PREFIX_MODIFY: &str = "Modify";
pub const PREFIX_CLEAR: &str = "Clear";

/// All complementary method prefixes.
pub const COMPLEMENTARY_PREFIXES: &[&str] = &[
    PREFIX_VALIDATE,
    PREFIX_DISABLE,
    PREFIX_CHOICES,
    PREFIX_DEFAULT,
    PREFIX_MODIFY,
    PREFIX_CLEAR,
    PREFIX_HIDE,
];
