//! Black-box checks of how a catalogue collaborator uses apparel entries.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use apparel_core::{DomainError, Entity};
use apparel_model::{Address, Apparel, Color, Email, Name, Tag};

fn apparel(name: &str, color: &str, email: &str, tags: &[&str]) -> Apparel {
    Apparel::builder()
        .name(Name::new(name).unwrap())
        .color(Color::new(color).unwrap())
        .email(Email::new(email).unwrap())
        .address(Address::new("Store room 3").unwrap())
        .tags(tags.iter().map(|t| Tag::new(*t).unwrap()))
        .build()
        .unwrap()
}

/// Rejects entries that are probably duplicates of one already listed.
fn add_unique(list: &mut Vec<Apparel>, candidate: Apparel) -> bool {
    if list.iter().any(|existing| existing.is_same_entity(Some(&candidate))) {
        return false;
    }
    list.push(candidate);
    true
}

#[test]
fn weak_identity_drives_duplicate_detection() {
    apparel_observability::init_for_tests();

    let mut list = Vec::new();
    assert!(add_unique(&mut list, apparel("Denim Jacket", "Blue", "a@shop.com", &["winter"])));
    // Recoloured but same contact: still the same jacket.
    assert!(!add_unique(&mut list, apparel("Denim Jacket", "Black", "a@shop.com", &[])));
    // Same name, new color and contact: a different item.
    assert!(add_unique(&mut list, apparel("Denim Jacket", "Black", "b@shop.com", &[])));
    assert_eq!(list.len(), 2);
}

#[test]
fn strong_equality_deduplicates_hash_sets() {
    let mut set = HashSet::new();
    set.insert(apparel("Wool Scarf", "Red", "a@shop.com", &["winter", "wool"]));
    set.insert(apparel("Wool Scarf", "Red", "a@shop.com", &["wool", "winter"]));
    set.insert(apparel("Wool Scarf", "Red", "a@shop.com", &["wool"]));
    assert_eq!(set.len(), 2);
}

#[test]
fn tag_views_are_readable_across_threads() {
    apparel_observability::init_for_tests();

    let shared = Arc::new(apparel("Rain Coat", "Yellow", "c@shop.com", &["rain", "outdoor"]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut view = shared.tags();
                let rejected = view.insert(Tag::new("indoor").unwrap());
                (view.len(), rejected)
            })
        })
        .collect();

    for handle in handles {
        let (len, rejected) = handle.join().unwrap();
        assert_eq!(len, 2);
        assert!(matches!(rejected, Err(DomainError::UnsupportedOperation(_))));
    }
    assert_eq!(shared.tags().len(), 2);
}

#[test]
fn display_is_deterministic_for_equal_entries() {
    let a = apparel("Silk Tie", "Green", "d@shop.com", &["formal", "office"]);
    let b = apparel("Silk Tie", "Green", "d@shop.com", &["office", "formal"]);
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(
        a.to_string(),
        "Silk Tie Color: Green Email: d@shop.com Address: Store room 3 Tags: [formal][office]"
    );
}
