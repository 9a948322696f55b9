//! Entity trait: a weak "same real-world thing" notion alongside full equality.

/// Entity marker + minimal interface.
///
/// Entities carry two notions of equality. `PartialEq` is the strong one (every
/// field matches). `is_same_entity` is the weak one a duplicate detector uses
/// before the strong check: some attributes may have drifted while the record
/// still describes the same thing.
pub trait Entity: PartialEq {
    /// Returns true if `other` is probably the same entity as `self`.
    ///
    /// Must be true for `Some(self)` and false for `None`.
    fn is_same_entity(&self, other: Option<&Self>) -> bool;
}
