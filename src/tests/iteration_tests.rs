use crate::BoundedSet;

#[test]
fn test_iterates_in_insertion_order() {
    let mut set = BoundedSet::new(5);
    set.extend(["a", "b", "c", "d"]);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_iterates_untouched_then_touched() {
    let mut set = BoundedSet::new(6);
    set.extend(0..6);
    for i in [4, 1, 3] {
        assert!(set.contains(&i));
    }
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 5, 4, 1, 3]);
}

#[test]
fn test_iteration_does_not_promote() {
    let mut set = BoundedSet::new(3);
    set.extend([1, 2, 3]);

    for _ in 0..3 {
        assert_eq!((&set).into_iter().count(), 3);
    }
    assert_eq!(set.lru(), Some(1), "Iteration changed the eviction candidate");

    set.add(4);
    assert!(!set.peek(&1));
}

#[test]
fn test_iteration_restarts_from_current_state() {
    let mut set = BoundedSet::new(3);
    set.extend([1, 2, 3]);
    let first: Vec<_> = set.iter().collect();

    assert!(set.contains(&1));
    let second: Vec<_> = set.iter().collect();

    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(second, vec![2, 3, 1]);
}

#[test]
fn test_iterator_outlives_set() {
    let mut set = BoundedSet::new(3);
    set.extend([String::from("x"), String::from("y"), String::from("z")]);

    let mut iter = set.iter();
    assert_eq!(iter.next().as_deref(), Some("x"));
    drop(set);

    assert_eq!(iter.collect::<Vec<_>>(), vec!["y", "z"]);
}

#[test]
fn test_zero_capacity_iterates_empty() {
    let mut set = BoundedSet::new(0);
    set.extend(0..100);
    assert_eq!(set.iter().next(), None);
}

#[test]
fn test_live_view_sees_appended_elements() {
    let mut set = BoundedSet::new(4);
    set.extend([1, 2]);

    let mut iter = set.iter();
    assert_eq!(iter.next(), Some(1));
    set.add(3);
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_live_view_stops_at_removed_node() -> Result<(), anyhow::Error> {
    let mut set = BoundedSet::new(4);
    set.extend([1, 2, 3]);

    let mut iter = set.iter();
    assert_eq!(iter.next(), Some(1));
    set.remove(&2)?;
    // The slot of 2 is recycled by the next add
    set.add(4);

    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3, 4]);
    Ok(())
}

#[test]
fn test_promoting_while_iterating_ends_pass() {
    let mut set = BoundedSet::new(3);
    set.extend([1, 2, 3]);

    let mut visited = vec![];
    for element in set.iter() {
        assert!(set.contains(&element));
        visited.push(element);
        assert!(visited.len() <= 3, "Pass kept going: {visited:?}");
    }

    assert_eq!(visited, vec![1, 2, 3]);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_pass_stops_at_element_promoted_ahead_of_it() {
    let mut set = BoundedSet::new(4);
    set.extend([1, 2, 3, 4]);

    let mut iter = set.iter();
    assert_eq!(iter.next(), Some(1));
    assert!(set.contains(&3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.next(), None, "3 moved after the pass began");
}

#[test]
fn test_live_view_after_clear() {
    let mut set = BoundedSet::new(4);
    set.extend([1, 2, 3]);

    let iter = set.iter();
    set.clear();
    set.extend([7, 8]);
    assert_eq!(iter.count(), 0);
}

#[test]
fn test_debug_lists_recency_order() {
    let mut set = BoundedSet::new(3);
    set.extend([1, 2, 3]);
    assert!(set.contains(&1));

    assert_eq!(
        format!("{set:?}"),
        "BoundedSet { max_size: 3, elements: [2, 3, 1] }"
    );
    assert_eq!(set.lru(), Some(2), "Formatting must not promote");
}
