//! Read-only view over a record's tag set.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::sync::Arc;

use apparel_core::{DomainError, DomainResult};

use crate::tag::Tag;

/// Read-only handle on an apparel entry's tags.
///
/// Shares the record's storage instead of copying it, so handing out views is
/// cheap and any number of threads can read one. The set-mutation methods exist so
/// callers written against a mutable tag set get a clear error instead of a silent
/// no-op; they never touch the storage.
#[derive(Debug, Clone)]
pub struct TagView {
    tags: Arc<BTreeSet<Tag>>,
}

impl TagView {
    pub(crate) fn new(tags: Arc<BTreeSet<Tag>>) -> Self {
        Self { tags }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Iterates tags in sorted order.
    pub fn iter(&self) -> btree_set::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Returns an owned copy the caller may modify freely.
    pub fn to_set(&self) -> BTreeSet<Tag> {
        self.tags.as_ref().clone()
    }

    /// Always fails: the view is read-only.
    pub fn insert(&mut self, _tag: Tag) -> DomainResult<bool> {
        Err(Self::reject("insert"))
    }

    /// Always fails: the view is read-only.
    pub fn remove(&mut self, _tag: &Tag) -> DomainResult<bool> {
        Err(Self::reject("remove"))
    }

    /// Always fails: the view is read-only.
    pub fn clear(&mut self) -> DomainResult<()> {
        Err(Self::reject("clear"))
    }

    fn reject(operation: &'static str) -> DomainError {
        tracing::warn!(operation, "rejected mutation of read-only tag view");
        DomainError::unsupported(format!("cannot {operation} through a read-only tag view"))
    }
}

impl PartialEq for TagView {
    fn eq(&self, other: &Self) -> bool {
        self.tags == other.tags
    }
}

impl Eq for TagView {}

impl PartialEq<BTreeSet<Tag>> for TagView {
    fn eq(&self, other: &BTreeSet<Tag>) -> bool {
        self.tags.as_ref() == other
    }
}

impl<'a> IntoIterator for &'a TagView {
    type Item = &'a Tag;
    type IntoIter = btree_set::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
