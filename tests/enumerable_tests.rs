//! Tests for the Enumerable vocabulary.
//!
//! `Enumerable` shares its implementation with `Stream`, so these tests focus
//! on the alternate method names and on `filter` never mutating the receiver.

use minifunk::Enumerable;
use rstest::rstest;

#[rstest]
fn test_as_list_is_read_only_view() {
    let enumerable = Enumerable::from(vec!["apple", "pear", "lemon"]);
    assert_eq!(enumerable.as_list(), &["apple", "pear", "lemon"]);
}

#[rstest]
fn test_filter_returns_new_instance() {
    let enumerable = Enumerable::from(vec!["apple", "pear", "lemon"]);
    let filtered = enumerable.filter(|fruit| fruit.len() > 4);

    assert_eq!(filtered.as_list(), &["apple", "lemon"]);
    assert_eq!(enumerable.as_list(), &["apple", "pear", "lemon"]);
}

#[rstest]
fn test_sort() {
    let clubs = Enumerable::from(vec!["Real Madrid", "Inter", "Milan", "Juventus"]);
    let sorted = clubs.sort(|left, right| left.cmp(right));

    assert_eq!(
        sorted.as_list(),
        &["Inter", "Juventus", "Milan", "Real Madrid"]
    );
    assert_eq!(clubs.as_list()[0], "Real Madrid");
}

#[rstest]
#[case('J', Some("Juventus"))]
#[case('R', None)]
fn test_find(#[case] initial: char, #[case] expected: Option<&str>) {
    let clubs = Enumerable::from(vec!["Inter", "Milan", "Juventus"]);
    assert_eq!(
        clubs.find(|club| club.starts_with(initial)).copied(),
        expected
    );
}

#[rstest]
fn test_every() {
    let numbers = Enumerable::from([1, 2, 3, 4]);
    assert!(numbers.every(|value| *value > 0));
    assert!(!numbers.every(|value| *value > 2));
    assert!(Enumerable::<i32>::new().every(|_| false));
}

#[rstest]
fn test_some() {
    let numbers = Enumerable::from([1, 2, 3, 4]);
    assert!(numbers.some(|value| *value > 2));
    assert!(!numbers.some(|value| *value > 4));
    assert!(!Enumerable::<i32>::new().some(|_| true));
}

#[rstest]
fn test_reduce_and_count() {
    let numbers = Enumerable::from(vec![1, 2, 3, 4]);
    assert_eq!(
        numbers.reduce(0, |accumulator, value| accumulator + value),
        10
    );
    assert_eq!(numbers.count(), 4);
}

#[rstest]
fn test_display() {
    let clubs = Enumerable::from(vec!["Real Madrid", "Inter", "Milan", "Juventus"]);
    assert_eq!(clubs.to_string(), "[Real Madrid, Inter, Milan, Juventus]");
}
