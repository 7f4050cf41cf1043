//! The fluent [`Chain`] wrapper over any sequence-like source.
//!
//! A [`Chain`] wraps a value implementing [`IntoIterator`] and exposes
//! transformation methods that read in left-to-right order:
//!
//! ```rust
//! use chainars::chain::Chain;
//!
//! let result: Vec<i32> = Chain::new(vec![1, 2, 3])
//!     .map(|x| x + 1)
//!     .filter(|x| x % 2 == 0)
//!     .collect();
//! assert_eq!(result, vec![2, 4]);
//! ```
//!
//! The chain accepts any sequence-like value directly, keeps every
//! intermediate step a first-class value, and adds tuple destructuring and
//! N-ary zipping on top of the plain adapter vocabulary.
//!
//! # Laziness
//!
//! `map`, `filter` and `zip` never pull an element; they only wrap the
//! source in a lazy adapter from [`crate::adapter`]. Evaluation happens one
//! element at a time when a terminal operation (`fold`, `reduce`,
//! `for_each`, `collect`, `collect_with`) consumes the chain.
//!
//! # Source kinds
//!
//! Any [`IntoIterator`] is accepted:
//!
//! - a borrowed collection (`&Vec<T>`, `&[T]`) is a *reusable* source: the
//!   chain is `Copy` and every consumption replays from the start;
//! - an owned collection or iterator is consumed by the first terminal
//!   operation;
//! - a `by_ref` iterator borrow (`&mut I`) is a *shared exhaustible* source:
//!   every chain built over the same iterator advances the same position.

use crate::adapter::{Filter, Map, Zip};
use crate::destructure::DestructuringChain;
use crate::error::EmptySequenceError;

/// A lazy, fluent wrapper around a sequence-like source.
///
/// `Chain<S>` holds exactly one field: the source. It is `Clone`/`Copy`
/// whenever the source is, which is what makes chains over borrowed
/// collections reusable as first-class values.
///
/// # Examples
///
/// ```rust
/// use chainars::chain::Chain;
///
/// let total = Chain::new(1..=4).fold(0, |sum, x| sum + x);
/// assert_eq!(total, 10);
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use = "chains are lazy and do nothing until a terminal operation consumes them"]
pub struct Chain<S> {
    source: S,
}

impl<S: IntoIterator> Chain<S> {
    /// Wraps a sequence-like source in a chain.
    ///
    /// The source is stored unchanged; nothing is validated and nothing is
    /// evaluated. Collections, borrowed collections, ranges and raw
    /// iterators are all accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let from_vec = Chain::new(vec![1, 2, 3]);
    /// let from_range = Chain::new(0..10);
    /// let from_slice = Chain::new(&[1, 2, 3][..]);
    /// # let _ = (from_vec, from_range, from_slice);
    /// ```
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying traversal as a plain iterator.
    ///
    /// This is the escape hatch back into the standard iterator world. If
    /// the source is exhaustible, iterating consumes it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let mut iterator = Chain::new(vec![1, 2]).iterate();
    /// assert_eq!(iterator.next(), Some(1));
    /// assert_eq!(iterator.next(), Some(2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iterate(self) -> S::IntoIter {
        self.source.into_iter()
    }

    /// Returns a new chain that lazily applies `function` to each element.
    ///
    /// No element is pulled and `function` is not called until the returned
    /// chain is consumed by a terminal operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let incremented: Vec<i32> = Chain::new(vec![1, 2, 3]).map(|x| x + 1).collect();
    /// assert_eq!(incremented, vec![2, 3, 4]);
    /// ```
    pub fn map<Output, Function>(self, function: Function) -> Chain<Map<S::IntoIter, Function>>
    where
        Function: FnMut(S::Item) -> Output,
    {
        Chain::new(Map::new(self.source.into_iter(), function))
    }

    /// Returns a new chain that lazily keeps only elements satisfying
    /// `predicate`, preserving relative order.
    ///
    /// The predicate receives a reference to each element, following the
    /// standard iterator convention.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let odd: Vec<i32> = Chain::new(vec![1, 2, 3, 4]).filter(|x| x % 2 == 1).collect();
    /// assert_eq!(odd, vec![1, 3]);
    /// ```
    pub fn filter<Predicate>(self, predicate: Predicate) -> Chain<Filter<S::IntoIter, Predicate>>
    where
        Predicate: FnMut(&S::Item) -> bool,
    {
        Chain::new(Filter::new(self.source.into_iter(), predicate))
    }

    /// Returns a new chain pairing this chain's elements positionally with
    /// `other`'s elements.
    ///
    /// The resulting chain stops as soon as either input is exhausted, so
    /// its length is the minimum of the two input lengths. To zip more than
    /// two sequences into flat tuples, use the [`zip!`](crate::zip!) macro.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let pairs: Vec<(i32, i32)> = Chain::new(vec![1, 2, 3]).zip(vec![10, 20]).collect();
    /// assert_eq!(pairs, vec![(1, 10), (2, 20)]);
    /// ```
    pub fn zip<Other>(self, other: Other) -> Chain<Zip<(S::IntoIter, Other::IntoIter)>>
    where
        Other: IntoIterator,
    {
        Chain::new(Zip::new((self.source.into_iter(), other.into_iter())))
    }

    /// Folds the chain from the left, starting from an explicit `initial`
    /// accumulator. Terminal; fully consumes the source.
    ///
    /// `initial` is always treated as a provided value: folding an empty
    /// chain returns `initial` unchanged, and a zero-like initial value
    /// (`0`, `""`, an empty `Vec`) behaves no differently from any other.
    /// When no natural initial accumulator exists, use [`Chain::reduce`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// assert_eq!(Chain::new(vec![1, 2, 3]).fold(6, |x, y| x - y), 0);
    /// assert_eq!(Chain::new(Vec::<i32>::new()).fold(0, |x, y| x + y), 0);
    /// ```
    pub fn fold<Accumulator, Function>(self, initial: Accumulator, function: Function) -> Accumulator
    where
        Function: FnMut(Accumulator, S::Item) -> Accumulator,
    {
        self.source.into_iter().fold(initial, function)
    }

    /// Folds the chain from the left, seeding the accumulator with the
    /// first element. Terminal; fully consumes the source.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the source yields no elements,
    /// since there is then no value to seed the fold with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    /// use chainars::error::EmptySequenceError;
    ///
    /// assert_eq!(Chain::new(vec![1, 2, 3]).reduce(|x, y| x + y), Ok(6));
    ///
    /// let empty: Vec<i32> = vec![];
    /// assert_eq!(Chain::new(empty).reduce(|x, y| x + y), Err(EmptySequenceError));
    /// ```
    pub fn reduce<Function>(self, function: Function) -> Result<S::Item, EmptySequenceError>
    where
        Function: FnMut(S::Item, S::Item) -> S::Item,
    {
        let mut iterator = self.source.into_iter();
        let first = iterator.next().ok_or(EmptySequenceError)?;
        Ok(iterator.fold(first, function))
    }

    /// Applies `function` to each element in order, for side effects only.
    /// Terminal; fully consumes the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let mut seen = Vec::new();
    /// Chain::new(vec![1, 2, 3]).for_each(|x| seen.push(x));
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn for_each<Function>(self, function: Function)
    where
        Function: FnMut(S::Item),
    {
        self.source.into_iter().for_each(function);
    }

    /// Collects the chain into any collection implementing
    /// [`FromIterator`]. Terminal; fully consumes the source exactly once,
    /// in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    /// use std::collections::HashSet;
    ///
    /// let list: Vec<i32> = Chain::new(vec![1, 2, 2]).collect();
    /// assert_eq!(list, vec![1, 2, 2]);
    ///
    /// let set: HashSet<i32> = Chain::new(vec![1, 2, 2]).collect();
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn collect<Collection>(self) -> Collection
    where
        Collection: FromIterator<S::Item>,
    {
        self.source.into_iter().collect()
    }

    /// Hands the lazily-evaluated sequence to an arbitrary `collector` and
    /// returns its result. Terminal.
    ///
    /// The collector receives the traversal as a plain iterator and decides
    /// how much of it to consume; a short-circuiting collector simply stops
    /// pulling and no further evaluation happens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let count = Chain::new(vec![1, 2, 3]).collect_with(|elements| elements.count());
    /// assert_eq!(count, 3);
    ///
    /// let first = Chain::new(1..100).collect_with(|mut elements| elements.next());
    /// assert_eq!(first, Some(1));
    /// ```
    pub fn collect_with<Output, Collector>(self, collector: Collector) -> Output
    where
        Collector: FnOnce(S::IntoIter) -> Output,
    {
        collector(self.source.into_iter())
    }

    /// Returns a [`DestructuringChain`] view over the same source, with no
    /// copying and no evaluation.
    ///
    /// The destructuring view spreads each tuple element's components as
    /// separate positional arguments to the supplied function, which is
    /// the natural continuation after [`Chain::zip`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let sums: Vec<i32> = Chain::new(vec![1, 2])
    ///     .zip(vec![3, 4])
    ///     .destructure()
    ///     .map(|x, y| x + y)
    ///     .collect();
    /// assert_eq!(sums, vec![4, 6]);
    /// ```
    pub fn destructure(self) -> DestructuringChain<S> {
        DestructuringChain::new(self.source)
    }
}

impl<S: IntoIterator> IntoIterator for Chain<S> {
    type Item = S::Item;
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter()
    }
}

// Chains over borrowed collections stay usable after every operation.
static_assertions::assert_impl_all!(Chain<&'static [i32]>: Copy, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_over_borrowed_collection_replays() {
        let numbers = vec![1, 2, 3];
        let chain = Chain::new(&numbers);
        let first: Vec<i32> = chain.map(|x| x + 1).collect();
        let second: Vec<i32> = chain.map(|x| x + 1).collect();
        assert_eq!(first, vec![2, 3, 4]);
        assert_eq!(second, vec![2, 3, 4]);
    }

    #[test]
    fn chain_over_shared_iterator_shares_exhaustion() {
        let mut iterator = vec![1, 2, 3].into_iter();
        let first: Vec<i32> = Chain::new(iterator.by_ref()).map(|x| x + 1).collect();
        let second: Vec<i32> = Chain::new(iterator.by_ref()).map(|x| x + 1).collect();
        assert_eq!(first, vec![2, 3, 4]);
        assert_eq!(second, Vec::<i32>::new());
    }
}
