//! Unit tests for [`DestructuringChain`] and the tuple-spreading traits.
//!
//! Covers component spreading in map, filter and for_each, the operations
//! inherited unchanged from [`Chain`], and pipelines that combine zip with
//! destructuring.

use chainars::chain::Chain;
use chainars::destructure::DestructuringChain;
use chainars::error::EmptySequenceError;
use chainars::zip;
use rstest::rstest;

// =============================================================================
// Map with Spread Components
// =============================================================================

#[rstest]
fn map_spreads_pair_components() {
    let sums: Vec<i32> = Chain::new(vec![(1, 2), (3, 4)])
        .destructure()
        .map(|x, y| x + y)
        .collect();
    assert_eq!(sums, vec![3, 7]);
}

#[rstest]
fn map_spreads_triple_components() {
    let sums: Vec<i32> = Chain::new(vec![(1, 2, 3), (4, 5, 6)])
        .destructure()
        .map(|x, y, z| x + y + z)
        .collect();
    assert_eq!(sums, vec![6, 15]);
}

#[rstest]
fn map_returns_a_plain_chain() {
    // The mapped output is not tuple-shaped, so the result is a Chain and
    // its operations see each output as one value.
    let total = Chain::new(vec![(1, 2), (3, 4)])
        .destructure()
        .map(|x, y| x * y)
        .reduce(|x, y| x + y);
    assert_eq!(total, Ok(14));
}

#[rstest]
fn map_components_may_have_distinct_types() {
    let labels: Vec<String> = Chain::new(vec![("a", 1), ("b", 2)])
        .destructure()
        .map(|name, count| format!("{name}={count}"))
        .collect();
    assert_eq!(labels, vec!["a=1", "b=2"]);
}

// =============================================================================
// Filter with Spread Components
// =============================================================================

#[rstest]
fn filter_spreads_components_and_yields_original_tuples() {
    let heavy: Vec<(i32, i32)> = Chain::new(vec![(1, 2), (3, 4)])
        .destructure()
        .filter(|x, y| x + y > 5)
        .collect();
    assert_eq!(heavy, vec![(3, 4)]);
}

#[rstest]
fn filter_after_zip_yields_pairs() {
    let kept: Vec<(i32, i32)> = Chain::new(vec![1, 2])
        .zip(vec![3, 4])
        .destructure()
        .filter(|x, y| x + y > 5)
        .collect();
    assert_eq!(kept, vec![(2, 4)]);
}

// =============================================================================
// Foreach with Spread Components
// =============================================================================

#[rstest]
fn for_each_spreads_components_in_order() {
    let mut seen = Vec::new();
    Chain::new(vec![(1, 2), (3, 4)])
        .destructure()
        .for_each(|x, y| seen.push(x * 10 + y));
    assert_eq!(seen, vec![12, 34]);
}

// =============================================================================
// Operations Inherited from Chain
// =============================================================================

#[rstest]
fn fold_treats_each_tuple_as_one_value() {
    let folded = Chain::new(vec![(1, 2), (3, 4)])
        .destructure()
        .fold(0, |acc, (x, y)| acc + x * y);
    assert_eq!(folded, 14);
}

#[rstest]
fn reduce_treats_each_tuple_as_one_value() {
    let reduced = Chain::new(vec![(1, 2), (3, 4)])
        .destructure()
        .reduce(|(a, b), (c, d)| (a + c, b + d));
    assert_eq!(reduced, Ok((4, 6)));
}

#[rstest]
fn reduce_on_empty_tuple_sequence_errors() {
    let empty: Vec<(i32, i32)> = vec![];
    let reduced = Chain::new(empty).destructure().reduce(|left, _| left);
    assert_eq!(reduced, Err(EmptySequenceError));
}

#[rstest]
fn collect_yields_the_tuples_unchanged() {
    let tuples: Vec<(i32, i32)> = Chain::new(vec![(1, 2), (3, 4)]).destructure().collect();
    assert_eq!(tuples, vec![(1, 2), (3, 4)]);
}

#[rstest]
fn zip_treats_each_tuple_as_one_value() {
    let nested: Vec<((i32, i32), i32)> = Chain::new(vec![(1, 2), (3, 4)])
        .destructure()
        .zip(vec![9, 8])
        .collect();
    assert_eq!(nested, vec![((1, 2), 9), ((3, 4), 8)]);
}

#[rstest]
fn into_chain_returns_the_plain_view() {
    let doubled: Vec<(i32, i32)> = DestructuringChain::new(vec![(1, 2), (3, 4)])
        .into_chain()
        .map(|(x, y)| (x * 2, y * 2))
        .collect();
    assert_eq!(doubled, vec![(2, 4), (6, 8)]);
}

// =============================================================================
// Zip + Destructure Pipelines
// =============================================================================

#[rstest]
fn zip_then_destructure_then_map() {
    let sums: Vec<i32> = Chain::new(vec![1, 2])
        .zip(vec![3, 4])
        .destructure()
        .map(|x, y| x + y)
        .collect();
    assert_eq!(sums, vec![4, 6]);
}

#[rstest]
fn zip_macro_then_destructure_then_map() {
    let sums: Vec<i32> = zip!(vec![1, 2], vec![3, 4], vec![5, 6])
        .destructure()
        .map(|x, y, z| x + y + z)
        .collect();
    assert_eq!(sums, vec![9, 12]);
}

#[rstest]
fn destructured_map_feeds_further_chain_operations() {
    let result = Chain::new(vec![1, 2, 3])
        .zip(vec![10, 20, 30])
        .destructure()
        .map(|x, y| x * y)
        .filter(|product| product > &25)
        .reduce(|x, y| x + y);
    assert_eq!(result, Ok(130));
}

#[rstest]
fn destructuring_view_is_lazy_until_consumed() {
    let calls = std::cell::Cell::new(0);
    let pairs = vec![(1, 2), (3, 4)];
    let chain = Chain::new(&pairs).destructure().map(|x, y| {
        calls.set(calls.get() + 1);
        x + y
    });
    assert_eq!(calls.get(), 0);

    let sums: Vec<i32> = chain.collect();
    assert_eq!(sums, vec![3, 7]);
    assert_eq!(calls.get(), 2);
}
