//! Shared contract tests for every `List` implementation.
//!
//! Each test is written once against the `List` trait and instantiated for
//! both `LinkedList` and `ArrayList`.

use edu_collections::CollectionError;
use edu_collections::collections::{ArrayList, LinkedList, List};
use rstest::rstest;

fn filled<L: List<i32> + Default>(count: i32) -> L {
    let mut list = L::default();
    for value in 0..count {
        list.add(value);
    }
    list
}

fn contents<L: List<i32>>(list: &L) -> Vec<i32> {
    (0..list.size()).map(|index| *list.get(index).unwrap()).collect()
}

// =============================================================================
// Round trip
// =============================================================================

fn check_append_round_trip<L: List<i32> + Default>() {
    let list: L = filled(20);
    assert_eq!(list.size(), 20);
    assert_eq!(contents(&list), (0..20).collect::<Vec<_>>());
}

#[rstest]
fn test_append_round_trip_linked() {
    check_append_round_trip::<LinkedList<i32>>();
}

#[rstest]
fn test_append_round_trip_array() {
    check_append_round_trip::<ArrayList<i32>>();
}

// =============================================================================
// Boundaries
// =============================================================================

fn check_boundaries<L: List<i32> + Default>(size: i32) {
    let mut list: L = filled(size);
    let size = list.size();
    let out_of_bounds = Err(CollectionError::IndexOutOfBounds { index: size, size });

    assert_eq!(list.get(size).map(|value| *value), out_of_bounds.clone());
    assert_eq!(list.set(size, 99), out_of_bounds.clone());
    assert_eq!(list.remove(size), out_of_bounds);
    assert_eq!(list.size(), size);

    assert_eq!(list.insert(size, 99), Ok(()));
    assert_eq!(list.get_last(), Ok(&99));
    assert_eq!(list.size(), size + 1);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
fn test_boundaries_linked(#[case] size: i32) {
    check_boundaries::<LinkedList<i32>>(size);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
fn test_boundaries_array(#[case] size: i32) {
    check_boundaries::<ArrayList<i32>>(size);
}

// =============================================================================
// Mixed operations agree with Vec
// =============================================================================

fn check_against_vec<L: List<i32> + Default>() {
    let mut list = L::default();
    let mut model = Vec::new();

    for (step, value) in (0..40).enumerate() {
        let index = (step * 7) % (model.len() + 1);
        list.insert(index, value).unwrap();
        model.insert(index, value);
    }
    for step in 0..15 {
        let index = (step * 5) % model.len();
        assert_eq!(list.remove(index), Ok(model.remove(index)));
    }
    for index in (0..model.len()).step_by(3) {
        assert_eq!(list.set(index, -1), Ok(model[index]));
        model[index] = -1;
    }

    assert_eq!(contents(&list), model);
    assert_eq!(list.get_first(), Ok(&model[0]));
    assert_eq!(list.get_last(), model.last().ok_or(CollectionError::NoSuchElement));
    assert!(list.contains(&-1));
    assert!(!list.contains(&1000));

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.get_first(), Err(CollectionError::NoSuchElement));
}

#[rstest]
fn test_against_vec_linked() {
    check_against_vec::<LinkedList<i32>>();
}

#[rstest]
fn test_against_vec_array() {
    check_against_vec::<ArrayList<i32>>();
}
