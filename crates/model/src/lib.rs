//! Apparel catalogue domain model.
//!
//! The immutable [`Apparel`] record and the validated value types it is built from,
//! implemented as pure domain logic (no IO, no storage, no UI).

pub mod address;
pub mod apparel;
pub mod color;
pub mod email;
pub mod name;
pub mod tag;
pub mod tag_view;

pub use address::Address;
pub use apparel::{Apparel, ApparelBuilder};
pub use color::Color;
pub use email::Email;
pub use name::Name;
pub use tag::Tag;
pub use tag_view::TagView;

#[cfg(test)]
mod tests {
    use super::*;
    use apparel_core::ValueObject;

    fn assert_value_object<T: ValueObject + Send + Sync>() {}

    #[test]
    fn field_types_are_value_objects() {
        assert_value_object::<Name>();
        assert_value_object::<Color>();
        assert_value_object::<Email>();
        assert_value_object::<Address>();
        assert_value_object::<Tag>();
    }
}
