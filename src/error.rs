//! Error types for terminal chain operations.
//!
//! The error surface is deliberately minimal: the only fallible operation
//! is `reduce` without an initial accumulator. Everything else either
//! cannot fail or propagates whatever the caller's own functions do.

/// Represents a `reduce` over a sequence that yielded no elements.
///
/// `reduce` seeds its accumulator with the first element, so an empty
/// sequence leaves nothing to fold from. Supply an explicit initial
/// accumulator with [`Chain::fold`](crate::chain::Chain::fold) when the
/// sequence may be empty.
///
/// # Examples
///
/// ```rust
/// use chainars::chain::Chain;
/// use chainars::error::EmptySequenceError;
///
/// let empty: Vec<i32> = vec![];
/// let error = Chain::new(empty).reduce(|x, y| x + y).unwrap_err();
/// assert_eq!(error, EmptySequenceError);
/// assert_eq!(
///     format!("{}", error),
///     "reduce: cannot fold an empty sequence without an initial accumulator"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySequenceError;

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "reduce: cannot fold an empty sequence without an initial accumulator"
        )
    }
}

impl std::error::Error for EmptySequenceError {}
