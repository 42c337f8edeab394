use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Wire-encoding policy attached to an enumerated type.
///
/// `DefaultNamed` behaves exactly like `Named`; it is a distinct tag only to
/// make visible that a type was never classified explicitly, which helps when
/// reclassifying later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Values travel as raw integer discriminants.
    Numeric,
    /// Values travel as lowerCamelCase constant names.
    Named,
    /// Fallback for types absent from both classification lists.
    DefaultNamed,
}

/// Types whose values travel as integers. Fixed at process start.
const NUMERIC_TYPES: &[&str] = &["UserRole"];

/// Types whose values travel as names. Fixed at process start.
const NAMED_TYPES: &[&str] = &[
    "PageStatus",
    "PageVisibility",
    "CommentPolicy",
    "RedirectKind",
    "ReviewState",
    "MediaKind",
    "FileStatus",
    "VariantStatus",
    "StockPolicy",
    "AddressKind",
    "UserStatus",
];

static NUMERIC_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NUMERIC_TYPES.iter().copied().collect());

static NAMED_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NAMED_TYPES.iter().copied().collect());

/// Resolves the encoding policy for an enumerated type.
///
/// Total over all type names: anything outside the two configured lists
/// resolves to [`Policy::DefaultNamed`]. The fallback is a permissive
/// default, not an error.
pub fn resolve(type_name: &str) -> Policy {
    if NUMERIC_SET.contains(type_name) {
        Policy::Numeric
    } else if NAMED_SET.contains(type_name) {
        Policy::Named
    } else {
        Policy::DefaultNamed
    }
}
