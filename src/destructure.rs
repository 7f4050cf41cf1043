//! Tuple destructuring: spreading a tuple's components as separate
//! positional arguments.
//!
//! After a `zip`, every element of a chain is a tuple, and writing
//! `|pair| pair.0 + pair.1` quickly becomes noisy. The
//! [`DestructuringChain`] view lets the supplied function receive the
//! components directly:
//!
//! ```rust
//! use chainars::chain::Chain;
//!
//! let sums: Vec<i32> = Chain::new(vec![1, 2])
//!     .zip(vec![3, 4])
//!     .destructure()
//!     .map(|x, y| x + y)
//!     .collect();
//! assert_eq!(sums, vec![4, 6]);
//! ```
//!
//! The spreading itself is expressed by the [`Destructure`] and
//! [`DestructureRef`] traits, implemented for tuples of arity 1 through 8.
//! Because each arity has its own implementation, a function whose arity
//! does not match the element tuple is rejected at compile time; no runtime
//! arity check exists or is needed.

use crate::adapter::Zip;
use crate::chain::Chain;
use crate::error::EmptySequenceError;

/// Applies an N-ary function to an N-tuple's components by value.
///
/// Implemented for tuples of arity 1 through 8, and for references to them
/// (a borrowed tuple spreads component references). `destructure` consumes
/// the tuple value, so it backs operations whose function takes the
/// components ([`DestructuringChain::map`] and
/// [`DestructuringChain::for_each`]).
///
/// # Examples
///
/// ```rust
/// use chainars::destructure::Destructure;
///
/// let mut add = |x: i32, y: i32| x + y;
/// assert_eq!((1, 2).destructure(&mut add), 3);
/// ```
pub trait Destructure<Function> {
    /// The function's return type.
    type Output;

    /// Consumes the tuple and calls `function` with its components as
    /// separate positional arguments.
    fn destructure(self, function: &mut Function) -> Self::Output;
}

/// Applies an N-ary function to references to an N-tuple's components.
///
/// Implemented for tuples of arity 1 through 8 and for references to them.
/// `destructure_ref` leaves the tuple intact, so it backs
/// [`DestructuringChain::filter`], which must still yield the original
/// tuple after consulting the predicate.
///
/// # Examples
///
/// ```rust
/// use chainars::destructure::DestructureRef;
///
/// let mut over_five = |x: &i32, y: &i32| x + y > 5;
/// assert!((3, 4).destructure_ref(&mut over_five));
/// assert!(!(1, 2).destructure_ref(&mut over_five));
/// ```
pub trait DestructureRef<Function> {
    /// The function's return type.
    type Output;

    /// Calls `function` with references to the tuple's components as
    /// separate positional arguments.
    fn destructure_ref(&self, function: &mut Function) -> Self::Output;
}

macro_rules! impl_destructure {
    ($($Component:ident),+) => {
        impl<$($Component,)+ Output, Function> Destructure<Function> for ($($Component,)+)
        where
            Function: FnMut($($Component),+) -> Output,
        {
            type Output = Output;

            #[allow(non_snake_case)]
            fn destructure(self, function: &mut Function) -> Output {
                let ($($Component,)+) = self;
                function($($Component),+)
            }
        }

        impl<$($Component,)+ Output, Function> DestructureRef<Function> for ($($Component,)+)
        where
            Function: FnMut($(&$Component),+) -> Output,
        {
            type Output = Output;

            #[allow(non_snake_case)]
            fn destructure_ref(&self, function: &mut Function) -> Output {
                let ($($Component,)+) = self;
                function($($Component),+)
            }
        }

        // Borrowed tuple sources (for example a chain over &Vec<(A, B)>)
        // yield &(A, B) elements; spread their components as references.
        impl<'tuple, $($Component,)+ Output, Function> Destructure<Function>
            for &'tuple ($($Component,)+)
        where
            Function: FnMut($(&'tuple $Component),+) -> Output,
        {
            type Output = Output;

            #[allow(non_snake_case)]
            fn destructure(self, function: &mut Function) -> Output {
                let ($($Component,)+) = self;
                function($($Component),+)
            }
        }

        impl<'tuple, $($Component,)+ Output, Function> DestructureRef<Function>
            for &'tuple ($($Component,)+)
        where
            Function: FnMut($(&'tuple $Component),+) -> Output,
        {
            type Output = Output;

            #[allow(non_snake_case)]
            fn destructure_ref(&self, function: &mut Function) -> Output {
                let ($($Component,)+) = *self;
                function($($Component),+)
            }
        }
    };
}

impl_destructure!(A);
impl_destructure!(A, B);
impl_destructure!(A, B, C);
impl_destructure!(A, B, C, D);
impl_destructure!(A, B, C, D, E);
impl_destructure!(A, B, C, D, E, F);
impl_destructure!(A, B, C, D, E, F, G);
impl_destructure!(A, B, C, D, E, F, G, H);

/// A [`Chain`] view whose `map`, `filter` and `for_each` spread each tuple
/// element's components as separate positional arguments.
///
/// Obtained through [`Chain::destructure`]; holds the same single source
/// field as [`Chain`] and is equally lazy. Operations that treat each
/// element as one opaque value (`fold`, `reduce`, `collect`,
/// `collect_with`, `zip`, `iterate`) behave exactly as on [`Chain`].
///
/// `map` and `filter` return a plain [`Chain`]: the mapped output is not
/// necessarily tuple-shaped, and the filtered tuples can be re-destructured
/// explicitly when needed.
///
/// # Examples
///
/// ```rust
/// use chainars::chain::Chain;
///
/// let heavy: Vec<(i32, i32)> = Chain::new(vec![(1, 2), (3, 4)])
///     .destructure()
///     .filter(|x, y| x + y > 5)
///     .collect();
/// assert_eq!(heavy, vec![(3, 4)]);
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use = "chains are lazy and do nothing until a terminal operation consumes them"]
pub struct DestructuringChain<S> {
    source: S,
}

impl<S: IntoIterator> DestructuringChain<S> {
    /// Wraps a source of tuples in a destructuring chain.
    ///
    /// Usually reached through [`Chain::destructure`] rather than called
    /// directly.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Converts back to the plain [`Chain`] view over the same source,
    /// with no copying and no evaluation.
    pub fn into_chain(self) -> Chain<S> {
        Chain::new(self.source)
    }

    /// Returns a chain that lazily applies `function` to each element's
    /// components, spread as separate positional arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let sums: Vec<i32> = Chain::new(vec![(1, 2), (3, 4)])
    ///     .destructure()
    ///     .map(|x, y| x + y)
    ///     .collect();
    /// assert_eq!(sums, vec![3, 7]);
    /// ```
    pub fn map<Function>(
        self,
        function: Function,
    ) -> Chain<DestructuringMap<S::IntoIter, Function>>
    where
        S::Item: Destructure<Function>,
    {
        Chain::new(DestructuringMap {
            iterator: self.source.into_iter(),
            function,
        })
    }

    /// Returns a chain of the original tuples whose components, spread as
    /// separate reference arguments, satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let heavy: Vec<(i32, i32)> = Chain::new(vec![(1, 2), (3, 4)])
    ///     .destructure()
    ///     .filter(|x, y| x + y > 5)
    ///     .collect();
    /// assert_eq!(heavy, vec![(3, 4)]);
    /// ```
    pub fn filter<Predicate>(
        self,
        predicate: Predicate,
    ) -> Chain<DestructuringFilter<S::IntoIter, Predicate>>
    where
        S::Item: DestructureRef<Predicate, Output = bool>,
    {
        Chain::new(DestructuringFilter {
            iterator: self.source.into_iter(),
            predicate,
        })
    }

    /// Applies `function` to each element's components, spread as separate
    /// positional arguments, in order and for side effects only. Terminal;
    /// fully consumes the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainars::chain::Chain;
    ///
    /// let mut seen = Vec::new();
    /// Chain::new(vec![(1, 2), (3, 4)])
    ///     .destructure()
    ///     .for_each(|x, y| seen.push(x + y));
    /// assert_eq!(seen, vec![3, 7]);
    /// ```
    pub fn for_each<Function>(self, mut function: Function)
    where
        S::Item: Destructure<Function, Output = ()>,
    {
        for element in self.source {
            element.destructure(&mut function);
        }
    }

    /// Returns the underlying traversal as a plain iterator of tuples.
    /// Same as [`Chain::iterate`].
    pub fn iterate(self) -> S::IntoIter {
        self.source.into_iter()
    }

    /// Folds the tuples from the left, starting from an explicit `initial`
    /// accumulator. Each tuple is passed to `function` as one opaque value;
    /// same as [`Chain::fold`].
    pub fn fold<Accumulator, Function>(self, initial: Accumulator, function: Function) -> Accumulator
    where
        Function: FnMut(Accumulator, S::Item) -> Accumulator,
    {
        self.into_chain().fold(initial, function)
    }

    /// Folds the tuples from the left, seeding the accumulator with the
    /// first tuple; same as [`Chain::reduce`].
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the source yields no elements.
    pub fn reduce<Function>(self, function: Function) -> Result<S::Item, EmptySequenceError>
    where
        Function: FnMut(S::Item, S::Item) -> S::Item,
    {
        self.into_chain().reduce(function)
    }

    /// Collects the tuples into any collection implementing
    /// [`FromIterator`]; same as [`Chain::collect`].
    pub fn collect<Collection>(self) -> Collection
    where
        Collection: FromIterator<S::Item>,
    {
        self.into_chain().collect()
    }

    /// Hands the lazily-evaluated sequence of tuples to an arbitrary
    /// `collector`; same as [`Chain::collect_with`].
    pub fn collect_with<Output, Collector>(self, collector: Collector) -> Output
    where
        Collector: FnOnce(S::IntoIter) -> Output,
    {
        self.into_chain().collect_with(collector)
    }

    /// Pairs the tuples positionally with `other`'s elements, treating each
    /// tuple as one opaque value; same as [`Chain::zip`].
    pub fn zip<Other>(self, other: Other) -> Chain<Zip<(S::IntoIter, Other::IntoIter)>>
    where
        Other: IntoIterator,
    {
        self.into_chain().zip(other)
    }
}

impl<S: IntoIterator> IntoIterator for DestructuringChain<S> {
    type Item = S::Item;
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter()
    }
}

/// A lazy adapter applying an N-ary function to each tuple's spread
/// components.
///
/// Returned by [`DestructuringChain::map`].
#[derive(Clone)]
pub struct DestructuringMap<Iter, Function> {
    iterator: Iter,
    function: Function,
}

impl<Iter, Function> Iterator for DestructuringMap<Iter, Function>
where
    Iter: Iterator,
    Iter::Item: Destructure<Function>,
{
    type Item = <Iter::Item as Destructure<Function>>::Output;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { iterator, function } = self;
        iterator.next().map(|element| element.destructure(function))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}

/// A lazy adapter yielding the tuples whose spread components satisfy an
/// N-ary predicate.
///
/// Returned by [`DestructuringChain::filter`].
#[derive(Clone)]
pub struct DestructuringFilter<Iter, Predicate> {
    iterator: Iter,
    predicate: Predicate,
}

impl<Iter, Predicate> Iterator for DestructuringFilter<Iter, Predicate>
where
    Iter: Iterator,
    Iter::Item: DestructureRef<Predicate, Output = bool>,
{
    type Item = Iter::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Self { iterator, predicate } = self;
        iterator.find(|element| element.destructure_ref(predicate))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iterator.size_hint();
        (0, upper)
    }
}
