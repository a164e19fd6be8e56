use packset::{Domain, Error, PresenceSet};

#[test]
fn test_new() {
    let set = PresenceSet::new();
    assert_eq!(set.domain(), Domain::Unbounded);
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(set.as_words().is_empty());
    assert_eq!(set.to_string(), "{}");
}

#[test]
fn test_basic_operations() {
    let mut set = PresenceSet::new();

    // Insert a few elements
    assert!(set.insert(10));
    assert!(set.insert(42));
    assert!(!set.insert(10));

    assert!(set.contains(10));
    assert!(set.contains(42));
    assert!(!set.contains(11));
    assert!(!set.contains(41));
    assert_eq!(set.len(), 2);

    // Remove one
    assert!(set.remove(10));
    assert!(!set.remove(10));
    assert!(!set.contains(10));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_insert_skips_negative() {
    let mut set = PresenceSet::new();
    for x in [-1, 0, 1, 2, 10_000] {
        set.insert(x);
    }
    assert_eq!(set.len(), 4);
    assert_eq!(set.to_string(), "{0 1 2 10000}");
    assert!(!set.contains(-1));
    assert!(!set.remove(-1));
}

#[test]
fn test_remove_sequence() {
    let mut set = PresenceSet::new();
    for x in [-1, 0, 1, 2, 2, 4] {
        set.insert(x);
    }
    set.remove(3);
    assert_eq!(set.to_string(), "{0 1 2 4}");

    set.remove(4);
    assert!(!set.contains(4));

    for x in [-1, 1, 2, 2, 0] {
        set.remove(x);
    }
    assert_eq!(set.to_string(), "{}");
    assert!(set.is_empty());
}

#[test]
fn test_remove_beyond_storage_does_not_grow() {
    let mut set = PresenceSet::new();
    set.insert(1);
    assert!(!set.remove(1_000_000));
    assert_eq!(set.as_words().len(), 1);
}

#[test]
fn test_storage_grows_to_highest_element() {
    let mut set = PresenceSet::new();
    set.insert(0);
    assert_eq!(set.as_words().len(), 1);

    let bits = usize::BITS as i64;
    set.insert(10 * bits);
    assert_eq!(set.as_words().len(), 11);

    // Lower elements reuse existing storage
    set.insert(5 * bits);
    assert_eq!(set.as_words().len(), 11);
}

#[test]
fn test_word_boundaries() {
    let bits = usize::BITS as i64;
    let mut set = PresenceSet::new();
    for x in [bits - 1, bits, 2 * bits - 1, 2 * bits] {
        assert!(set.insert(x));
    }
    assert_eq!(set.len(), 4);
    assert!(!set.contains(bits + 1));
    let elements: Vec<i64> = set.iter().collect();
    assert_eq!(elements, vec![bits - 1, bits, 2 * bits - 1, 2 * bits]);
}

#[test]
fn test_clear() {
    let mut set = PresenceSet::new();
    set.extend([1, 2, 3, 700]);
    set.clear();

    assert!(set.is_empty());
    assert!(set.as_words().is_empty());
    for x in [1, 2, 3, 700] {
        assert!(!set.contains(x));
    }
    assert_eq!(set.domain(), Domain::Unbounded);
}

#[test]
fn test_clone_is_independent() {
    let mut b = PresenceSet::new();
    b.extend([1, 2, 3]);
    let c = b.clone();

    b.remove(2);
    b.insert(99);

    assert!(c.contains(2));
    assert!(!c.contains(99));
    assert_eq!(c.len(), 3);
    assert_eq!(b.len(), 3);
}

#[test]
fn test_iterators() {
    let set: PresenceSet = [10, 1, 5].into_iter().collect();

    let elements: Vec<i64> = set.iter().collect();
    assert_eq!(elements, vec![1, 5, 10]);
    assert_eq!(set.iter().len(), 3);

    let mut by_ref = Vec::new();
    for x in &set {
        by_ref.push(x);
    }
    assert_eq!(by_ref, elements);
}

#[test]
fn test_first_last() {
    let mut set = PresenceSet::new();
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);

    set.extend([300, 7, 65]);
    assert_eq!(set.first(), Some(7));
    assert_eq!(set.last(), Some(300));

    set.remove(300);
    assert_eq!(set.last(), Some(65));
}

#[test]
fn test_eq_ignores_trailing_words() {
    let mut a = PresenceSet::new();
    let mut b = PresenceSet::new();
    a.insert(3);
    b.insert(3);
    b.insert(1_000);
    b.remove(1_000);

    assert_ne!(a.as_words().len(), b.as_words().len());
    assert_eq!(a, b);

    let w = PresenceSet::with_window(0, 10_000).unwrap();
    assert_ne!(PresenceSet::new(), w);
}

#[test]
fn test_debug_format() {
    let set: PresenceSet = [3, 1, 2].into_iter().collect();
    assert_eq!(format!("{set:?}"), "{1, 2, 3}");
}

#[test]
fn test_window_constructor_errors() {
    assert_eq!(
        PresenceSet::with_window(3, 3).unwrap_err(),
        Error::EmptyWindow { start: 3, end: 3 }
    );
    assert!(PresenceSet::with_window(3, -1).is_err());
    assert!(PresenceSet::with_window(-1, 3).is_ok());
}

#[test]
fn test_window_ignores_out_of_range() {
    let mut set = PresenceSet::with_window(-1, 3).unwrap();
    for x in [-1, 0, 1, 2, 10_000] {
        set.insert(x);
    }
    assert_eq!(set.len(), 4);
    assert!(!set.contains(10_000));
    assert!(set.contains(-1));
    assert_eq!(set.to_string(), "{-1 0 1 2}");

    assert!(!set.insert(-2));
    assert!(!set.insert(3));
    assert!(!set.remove(3));
    assert!(!set.contains(-2));
    assert_eq!(set.len(), 4);
}

#[test]
fn test_window_rebases_storage() {
    let mut set = PresenceSet::with_window(1_000_000, 1_000_100).unwrap();
    set.insert(1_000_000);
    set.insert(1_000_050);
    assert_eq!(set.as_words()[0] & 1, 1);
    assert!(set.as_words().len() <= 2);
    assert_eq!(set.first(), Some(1_000_000));
    assert_eq!(set.last(), Some(1_000_050));
}

#[test]
fn test_window_clear_keeps_domain() {
    let mut set = PresenceSet::with_window(-10, 10).unwrap();
    set.insert(-10);
    set.clear();
    assert_eq!(set.domain(), Domain::Window { start: -10, end: 10 });
    assert!(!set.insert(10));
    assert!(set.insert(-10));
}

#[test]
fn test_extreme_window() {
    let mut set = PresenceSet::with_window(i64::MIN, i64::MIN + 100).unwrap();
    set.insert(i64::MIN);
    set.insert(i64::MIN + 99);
    set.insert(0);
    assert_eq!(set.len(), 2);
    let elements: Vec<i64> = set.iter().collect();
    assert_eq!(elements, vec![i64::MIN, i64::MIN + 99]);
}
