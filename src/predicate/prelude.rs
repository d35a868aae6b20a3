//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use sift::predicate::prelude::*;
//!
//! let valid_age = ge(0).and(le(150));
//! assert!(valid_age.is_satisfied(&25));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, always, any_of, from_fn, never, none_of, And, Not, Or};

// Type-erased predicates
pub use super::boxed::{all_boxed, any_boxed, BoxedPredicate, SharedPredicate};

// Leaf predicates
pub use super::comparison::{between, eq, ge, gt, le, lt, ne, one_of};
pub use super::field::field;
