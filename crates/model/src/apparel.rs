use core::hash::{Hash, Hasher};
use std::collections::BTreeSet;
use std::sync::Arc;

use apparel_core::{DomainError, DomainResult, Entity, require_all_present};

use crate::address::Address;
use crate::color::Color;
use crate::email::Email;
use crate::name::Name;
use crate::tag::Tag;
use crate::tag_view::TagView;

/// An apparel entry in the catalogue.
///
/// Guarantees: every field is present and validated, and the entry never changes
/// after construction.
///
/// `==` is the strong equality (all five fields, tags as a set) and agrees with
/// `Hash`. [`Apparel::is_same_apparel`] is the weak one used for duplicate
/// detection.
#[derive(Debug, Clone, Eq)]
pub struct Apparel {
    // Identity fields
    name: Name,
    color: Color,
    email: Email,
    // Data fields
    address: Address,
    tags: Arc<BTreeSet<Tag>>,
}

impl Apparel {
    /// Creates an entry, copying `tags` into storage owned by the entry.
    pub fn new(
        name: Name,
        color: Color,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            color,
            email,
            address,
            tags: Arc::new(tags.into_iter().collect()),
        }
    }

    /// Creates an entry from inputs that may be absent.
    ///
    /// Fails with `InvalidArgument` naming the first absent field; nothing is
    /// assigned unless all five are present.
    pub fn try_new<I>(
        name: Option<Name>,
        color: Option<Color>,
        email: Option<Email>,
        address: Option<Address>,
        tags: Option<I>,
    ) -> DomainResult<Self>
    where
        I: IntoIterator<Item = Tag>,
    {
        require_all_present(&[
            ("name", name.is_some()),
            ("color", color.is_some()),
            ("email", email.is_some()),
            ("address", address.is_some()),
            ("tags", tags.is_some()),
        ])?;

        let (Some(name), Some(color), Some(email), Some(address), Some(tags)) =
            (name, color, email, address, tags)
        else {
            return Err(DomainError::invalid_argument("all fields must be present"));
        };

        Ok(Self::new(name, color, email, address, tags))
    }

    pub fn builder() -> ApparelBuilder {
        ApparelBuilder::default()
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns a read-only view of the tags; mutation attempts through it fail.
    pub fn tags(&self) -> TagView {
        TagView::new(Arc::clone(&self.tags))
    }

    /// Returns true if both entries share a name and at least one of color or email.
    ///
    /// Weaker than `==`: used to spot probable duplicates whose other attributes
    /// have drifted.
    pub fn is_same_apparel(&self, other: Option<&Apparel>) -> bool {
        match other {
            Some(other) if core::ptr::eq(self, other) => true,
            Some(other) => {
                other.name == self.name
                    && (other.color == self.color || other.email == self.email)
            }
            None => false,
        }
    }
}

impl PartialEq for Apparel {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        self.name == other.name
            && self.color == other.color
            && self.email == other.email
            && self.address == other.address
            && self.tags == other.tags
    }
}

impl Hash for Apparel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.color.hash(state);
        self.email.hash(state);
        self.address.hash(state);
        self.tags.hash(state);
    }
}

impl Entity for Apparel {
    fn is_same_entity(&self, other: Option<&Self>) -> bool {
        self.is_same_apparel(other)
    }
}

impl core::fmt::Display for Apparel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} Color: {} Email: {} Address: {} Tags: ",
            self.name, self.color, self.email, self.address
        )?;
        for tag in self.tags.iter() {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

/// Collects the fields of an [`Apparel`] one at a time, e.g. while parsing input.
///
/// `build` fails with `InvalidArgument` if any field was never supplied. Tags count
/// as supplied once `tags` or `tag` has been called, even with nothing in them.
#[derive(Debug, Clone, Default)]
pub struct ApparelBuilder {
    name: Option<Name>,
    color: Option<Color>,
    email: Option<Email>,
    address: Option<Address>,
    tags: Option<BTreeSet<Tag>>,
}

impl ApparelBuilder {
    pub fn name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Replaces any tags supplied so far.
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(BTreeSet::new).insert(tag);
        self
    }

    pub fn build(self) -> DomainResult<Apparel> {
        Apparel::try_new(self.name, self.color, self.email, self.address, self.tags)
    }
}
