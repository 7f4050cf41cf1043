//! Lazy iterator adapters produced by [`Chain`](crate::chain::Chain)
//! operations.
//!
//! Each non-terminal chain operation wraps the current traversal in one of
//! these adapters instead of materializing an intermediate collection. The
//! adapters are plain pull-based iterators: each `next` call pulls at most
//! what it needs from the underlying traversal, so a pipeline of chained
//! adapters has O(1) memory overhead per stage.
//!
//! These types rarely need to be named directly; they appear in return
//! types and can be consumed through the chain that wraps them.

/// A lazy adapter applying a function to each element of an underlying
/// traversal.
///
/// Returned by [`Chain::map`](crate::chain::Chain::map).
#[derive(Clone)]
pub struct Map<Iter, Function> {
    iterator: Iter,
    function: Function,
}

impl<Iter, Function> Map<Iter, Function> {
    pub(crate) const fn new(iterator: Iter, function: Function) -> Self {
        Self { iterator, function }
    }
}

impl<Iter, Output, Function> Iterator for Map<Iter, Function>
where
    Iter: Iterator,
    Function: FnMut(Iter::Item) -> Output,
{
    type Item = Output;

    fn next(&mut self) -> Option<Output> {
        self.iterator.next().map(&mut self.function)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}

/// A lazy adapter yielding only the elements of an underlying traversal
/// that satisfy a predicate, in their original relative order.
///
/// Returned by [`Chain::filter`](crate::chain::Chain::filter).
#[derive(Clone)]
pub struct Filter<Iter, Predicate> {
    iterator: Iter,
    predicate: Predicate,
}

impl<Iter, Predicate> Filter<Iter, Predicate> {
    pub(crate) const fn new(iterator: Iter, predicate: Predicate) -> Self {
        Self { iterator, predicate }
    }
}

impl<Iter, Predicate> Iterator for Filter<Iter, Predicate>
where
    Iter: Iterator,
    Predicate: FnMut(&Iter::Item) -> bool,
{
    type Item = Iter::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { iterator, predicate } = self;
        iterator.find(|element| predicate(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every element may be rejected, so only the upper bound survives.
        let (_, upper) = self.iterator.size_hint();
        (0, upper)
    }
}

/// A lazy adapter zipping a tuple of traversals into flat tuples of their
/// elements, stopping as soon as any input is exhausted.
///
/// `Zip` is generic over a tuple of iterators; [`Iterator`] is implemented
/// for source tuples of arity 2 through 8. Returned by
/// [`Chain::zip`](crate::chain::Chain::zip) (pairs) and built by the
/// [`zip!`](crate::zip!) macro (any supported arity).
#[derive(Clone)]
pub struct Zip<Sources> {
    sources: Sources,
}

impl<Sources> Zip<Sources> {
    /// Wraps a tuple of iterators.
    ///
    /// Prefer [`Chain::zip`](crate::chain::Chain::zip) or the
    /// [`zip!`](crate::zip!) macro; this constructor exists so the macro
    /// can expand outside the crate.
    pub const fn new(sources: Sources) -> Self {
        Self { sources }
    }
}

macro_rules! impl_zip_iterator {
    ($($Source:ident => $index:tt),+) => {
        impl<$($Source: Iterator),+> Iterator for Zip<($($Source,)+)> {
            type Item = ($($Source::Item,)+);

            fn next(&mut self) -> Option<Self::Item> {
                Some(($(self.sources.$index.next()?,)+))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let mut lower = usize::MAX;
                let mut upper: Option<usize> = None;
                $(
                    let (source_lower, source_upper) = self.sources.$index.size_hint();
                    lower = lower.min(source_lower);
                    upper = match (upper, source_upper) {
                        (Some(current), Some(next)) => Some(current.min(next)),
                        (current, next) => current.or(next),
                    };
                )+
                (lower, upper)
            }
        }
    };
}

impl_zip_iterator!(A => 0, B => 1);
impl_zip_iterator!(A => 0, B => 1, C => 2);
impl_zip_iterator!(A => 0, B => 1, C => 2, D => 3);
impl_zip_iterator!(A => 0, B => 1, C => 2, D => 3, E => 4);
impl_zip_iterator!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5);
impl_zip_iterator!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6);
impl_zip_iterator!(A => 0, B => 1, C => 2, D => 3, E => 4, F => 5, G => 6, H => 7);
