//! The [`zip!`] macro for zipping any number of sequences at once.

/// Zips two or more sequence-like values into a chain of flat tuples.
///
/// `zip!(a, b, c)` yields `(x, y, z)` triples, unlike chained
/// [`Chain::zip`](crate::chain::Chain::zip) calls which would nest pairs.
/// The resulting chain stops as soon as any input is exhausted, so its
/// length is the minimum of all input lengths. Arities 2 through 8 are
/// supported.
///
/// Rust methods cannot be variadic, so the N-ary form of `zip` is a macro.
///
/// # Syntax
///
/// - `zip!(a, b)` - A chain of pairs, equivalent to `Chain::new(a).zip(b)`
/// - `zip!(a, b, c)` - A chain of triples
/// - `zip!(a, b, c, ...)` - A chain of wider flat tuples, up to arity 8
///
/// # Examples
///
/// ## Three-way zip
///
/// ```rust
/// use chainars::zip;
///
/// let triples: Vec<(i32, i32, i32)> = zip!(vec![1, 2], vec![3, 4], vec![5, 6]).collect();
/// assert_eq!(triples, vec![(1, 3, 5), (2, 4, 6)]);
/// ```
///
/// ## Unequal lengths stop at the shortest input
///
/// ```rust
/// use chainars::zip;
///
/// let pairs: Vec<(i32, i32)> = zip!(vec![1, 2, 3], vec![10, 20]).collect();
/// assert_eq!(pairs, vec![(1, 10), (2, 20)]);
/// ```
///
/// ## Continuing the chain
///
/// ```rust
/// use chainars::zip;
///
/// let sums: Vec<i32> = zip!(vec![1, 2], vec![3, 4], vec![5, 6])
///     .destructure()
///     .map(|x, y, z| x + y + z)
///     .collect();
/// assert_eq!(sums, vec![9, 12]);
/// ```
#[macro_export]
macro_rules! zip {
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::chain::Chain::new($crate::adapter::Zip::new((
            ::core::iter::IntoIterator::into_iter($first),
            $(::core::iter::IntoIterator::into_iter($rest),)+
        )))
    };
}
