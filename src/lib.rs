//! # chainars
//!
//! A fluent, lazy sequence chaining library for Rust.
//!
//! ## Overview
//!
//! This library provides a thin wrapper over any sequence-like value that
//! lets you chain transformations in left-to-right order instead of nesting
//! function calls:
//!
//! - **[`Chain`](chain::Chain)**: lazy `map` / `filter` / `zip` composition
//!   with `fold`, `reduce`, `for_each` and `collect` terminals
//! - **[`DestructuringChain`](destructure::DestructuringChain)**: a view that
//!   spreads each tuple element's components as separate arguments, for use
//!   after `zip`
//! - **[`zip!`]**: zip any number of sequences into a chain of flat tuples
//!
//! Every non-terminal operation is lazy: it wraps the source in an adapter
//! without pulling a single element. Evaluation happens only when a terminal
//! operation consumes the chain.
//!
//! ## Example
//!
//! ```rust
//! use chainars::prelude::*;
//!
//! let sum = Chain::new(vec![1, 2, 3])
//!     .map(|x| x + 1)
//!     .filter(|x| x % 2 == 0)
//!     .reduce(|x, y| x + y);
//! assert_eq!(sum, Ok(6));
//! ```
//!
//! ## Reusable vs. exhaustible sources
//!
//! A chain built from a borrowed collection replays from the start every
//! time it is consumed. A chain built from an iterator shares that
//! iterator's position: consuming one chain advances it for every chain
//! later built over the same `by_ref` borrow.
//!
//! ```rust
//! use chainars::chain::Chain;
//!
//! let numbers = vec![1, 2, 3];
//! let chain = Chain::new(&numbers);
//! let once: Vec<i32> = chain.map(|x| x + 1).collect();
//! let twice: Vec<i32> = chain.map(|x| x + 1).collect();
//! assert_eq!(once, twice);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public surface of the crate.
///
/// # Usage
///
/// ```rust
/// use chainars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::{Filter, Map, Zip};
    pub use crate::chain::Chain;
    pub use crate::destructure::{
        Destructure, DestructureRef, DestructuringChain, DestructuringFilter, DestructuringMap,
    };
    pub use crate::error::EmptySequenceError;
}

pub mod adapter;
pub mod chain;
pub mod destructure;
pub mod error;

mod zip_macro;
