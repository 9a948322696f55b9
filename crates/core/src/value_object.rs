//! Value object trait: equality by value, not identity.
//!
//! Value objects have no identity of their own. Two value objects holding the same
//! values are interchangeable, so they compare and hash by value.

/// Marker trait for value objects.
///
/// Compile-time marker only: it has no methods, and domain crates use it as a bound to
/// check that their value types carry the full set of value semantics listed below.
///
/// Value objects are **immutable** once validated and **compared by value**. A record
/// wrapping them (e.g. an apparel entry) relies on that: it can hand out shared
/// references freely and combine their hashes into its own.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `Email("a@example.com")` equals any other email with the same text
/// - **Entity**: a record whose "sameness" is decided by a domain rule (see [`crate::Entity`])
///
/// ## Design Constraints
///
/// - **Clone**: values are cheap to copy
/// - **Eq + Hash**: values can live in sets and be part of a record's hash
/// - **Debug + Display**: values show up in logs and in a record's display string
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Color(String);
///
/// impl ValueObject for Color {}
/// ```
pub trait ValueObject:
    Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display
{
}
