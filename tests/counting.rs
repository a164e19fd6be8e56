use packset::{CountingSet, Domain, Error};

#[test]
fn test_constructor_errors() {
    assert_eq!(CountingSet::new(0).unwrap_err(), Error::ZeroCapacity);
    assert_eq!(
        CountingSet::new(usize::MAX).unwrap_err(),
        Error::CapacityTooLarge {
            capacity: usize::MAX,
            max: CountingSet::MAX_CAPACITY,
        }
    );
    assert!(CountingSet::new(CountingSet::MAX_CAPACITY).is_ok());

    assert_eq!(
        CountingSet::with_window(5, 1, 3).unwrap_err(),
        Error::EmptyWindow { start: 5, end: 1 }
    );
    assert_eq!(
        CountingSet::with_window(1, 5, 0).unwrap_err(),
        Error::ZeroCapacity
    );
}

#[test]
fn test_layout_accessors() {
    let set = CountingSet::new(3).unwrap();
    assert_eq!(set.capacity(), 3);
    assert_eq!(set.width(), 2);
    assert_eq!(set.slots_per_word(), usize::BITS as usize / 2);
    assert_eq!(set.domain(), Domain::Unbounded);

    let set = CountingSet::new(8).unwrap();
    assert_eq!(set.width(), 4);

    let set = CountingSet::new(1).unwrap();
    assert_eq!(set.width(), 1);
    assert_eq!(set.slots_per_word(), usize::BITS as usize);
}

#[test]
fn test_saturation() {
    let mut set = CountingSet::new(3).unwrap();
    for _ in 0..6 {
        set.insert(2);
    }
    assert_eq!(set.count(2), 3);
    assert_eq!(set.len(), 1);

    assert!(set.remove(2));
    assert_eq!(set.count(2), 2);

    let before = set.len();
    assert_eq!(set.remove_all(2), 2);
    assert_eq!(set.count(2), 0);
    assert_eq!(set.len(), before - 1);
}

#[test]
fn test_insert_reports_saturation() {
    let mut set = CountingSet::new(2).unwrap();
    assert!(set.insert(0));
    assert!(set.insert(0));
    assert!(!set.insert(0));
    assert_eq!(set.count(0), 2);
}

#[test]
fn test_add_and_display() {
    let mut set = CountingSet::new(3).unwrap();
    for x in [-1, 0, 1, 2, 10_000] {
        set.insert(x);
    }
    assert_eq!(set.len(), 4);
    assert_eq!(set.to_string(), "{0 1 2 10000}");
    assert!(!set.contains(-1));
    assert!(set.contains(0));
    assert!(!set.contains(3));
    assert!(set.contains(10_000));
}

#[test]
fn test_remove_sequence() {
    let mut set = CountingSet::new(3).unwrap();
    for x in [-1, 0, 1, 2, 2, 4] {
        set.insert(x);
    }
    set.remove(3);
    assert_eq!(set.to_string(), "{0 1 2 4}");

    set.remove(4);
    assert!(!set.contains(4));

    // 2 was counted twice
    for x in [-1, 1, 2, 0] {
        set.remove(x);
    }
    assert_eq!(set.to_string(), "{2}");
    set.remove(2);
    assert_eq!(set.to_string(), "{}");
    assert!(set.is_empty());
}

#[test]
fn test_remove_floors_at_zero() {
    let mut set = CountingSet::new(3).unwrap();
    set.insert(5);
    assert!(set.remove(5));
    assert!(!set.remove(5));
    assert_eq!(set.count(5), 0);
    assert_eq!(set.len(), 0);
    // Neighbouring fields untouched
    assert_eq!(set.count(4), 0);
    assert_eq!(set.count(6), 0);
}

#[test]
fn test_remove_all_untouched_elements() {
    let mut set = CountingSet::new(3).unwrap();
    assert_eq!(set.remove_all(5), 0);
    assert_eq!(set.remove_all(-5), 0);
    assert!(set.as_words().is_empty());
}

#[test]
fn test_neighbours_are_independent() {
    let mut set = CountingSet::new(7).unwrap();
    let slots = set.slots_per_word() as i64;
    for x in 0..2 * slots {
        for _ in 0..(x % 8) {
            set.insert(x);
        }
    }
    for x in 0..2 * slots {
        assert_eq!(set.count(x), (x % 8).min(7) as usize, "element {x}");
    }
    let expected = (0..2 * slots).filter(|x| x % 8 != 0).count();
    assert_eq!(set.len(), expected);
}

#[test]
fn test_clear_preserves_configuration() {
    let mut set = CountingSet::with_window(-5, 5, 4).unwrap();
    set.extend([-5, -5, 0, 4]);
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.count(-5), 0);
    assert_eq!(set.capacity(), 4);
    assert_eq!(set.width(), 3);
    assert_eq!(set.domain(), Domain::Window { start: -5, end: 5 });

    for _ in 0..10 {
        set.insert(-5);
    }
    assert_eq!(set.count(-5), 4);
}

#[test]
fn test_clone_is_independent() {
    let mut a = CountingSet::new(3).unwrap();
    a.extend([1, 1, 2]);
    let b = a.clone();

    a.remove(1);
    a.remove_all(2);

    assert_eq!(b.count(1), 2);
    assert_eq!(b.count(2), 1);
    assert_eq!(b.len(), 2);
    assert_eq!(a.count(1), 1);
    assert_eq!(a.len(), 1);
}

#[test]
fn test_window_ignores_out_of_range() {
    let mut set = CountingSet::with_window(-1, 3, 3).unwrap();
    for x in [-1, 0, 1, 2, 10_000] {
        set.insert(x);
    }
    assert_eq!(set.len(), 4);
    assert_eq!(set.count(10_000), 0);
    assert_eq!(set.count(-1), 1);
    assert_eq!(set.to_string(), "{-1 0 1 2}");

    assert!(!set.insert(3));
    assert!(!set.remove(-2));
    assert_eq!(set.remove_all(3), 0);
    assert_eq!(set.len(), 4);
}

#[test]
fn test_iter_counts() {
    let mut set = CountingSet::with_window(-3, 300, 5).unwrap();
    set.extend([200, -3, 200, 7, 200]);

    let counts: Vec<(i64, usize)> = set.iter().collect();
    assert_eq!(counts, vec![(-3, 1), (7, 1), (200, 3)]);

    let by_ref: Vec<_> = (&set).into_iter().map(|(x, _)| x).collect();
    assert_eq!(by_ref, vec![-3, 7, 200]);
}

#[test]
fn test_debug_format() {
    let mut set = CountingSet::new(3).unwrap();
    set.extend([2, 2, 0]);
    assert_eq!(format!("{set:?}"), "{0: 1, 2: 2}");
}

#[test]
fn test_eq() {
    let mut a = CountingSet::new(3).unwrap();
    let mut b = CountingSet::new(3).unwrap();
    a.extend([1, 1]);
    b.extend([1, 1, 1, 900]);
    b.remove(1);
    b.remove_all(900);
    assert_eq!(a, b);

    let c = CountingSet::new(4).unwrap();
    assert_ne!(CountingSet::new(3).unwrap(), c);
}
