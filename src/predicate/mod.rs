//! Composable predicates
//!
//! A predicate is a boolean test over a single item. Predicates compose with
//! `and`, `or` and `not` into new predicates without any change to the ones
//! they are built from, and any predicate can drive [`filter`](crate::filter()).
//!
//! # Philosophy
//!
//! Instead of one hand-written filter method per attribute combination
//! (`by_color`, `by_size`, `by_color_and_size`, ...), describe each criterion
//! once as a predicate and let a single generic filter do the work:
//!
//! - Leaf predicates close over one value (`eq(Color::Green)`)
//! - [`field`] points a leaf at one attribute of an item
//! - Combinators build arbitrarily nested criteria from existing ones
//!
//! # Example
//!
//! ```rust
//! use sift::predicate::*;
//!
//! #[derive(Clone, Copy, PartialEq)]
//! enum Size { Small, Medium, Large }
//!
//! struct Product { name: &'static str, size: Size, price: u32 }
//!
//! let roomy = field(|p: &Product| &p.size, one_of([Size::Medium, Size::Large]));
//! let cheap = field(|p: &Product| &p.price, le(20));
//! let bargain = roomy.and(cheap);
//!
//! let tent = Product { name: "Tent", size: Size::Large, price: 15 };
//! let mug = Product { name: "Mug", size: Size::Small, price: 5 };
//! assert!(bargain.is_satisfied(&tent));
//! assert!(!bargain.is_satisfied(&mug));
//! assert_eq!(tent.name, "Tent");
//! assert_eq!(mug.name, "Mug");
//! ```
//!
//! # Custom leaf predicates
//!
//! ```rust
//! use sift::predicate::*;
//!
//! struct Palindrome;
//!
//! impl Predicate<str> for Palindrome {
//!     fn is_satisfied(&self, item: &str) -> bool {
//!         item.chars().eq(item.chars().rev())
//!     }
//! }
//!
//! let long_palindrome = Palindrome.and(from_fn(|s: &str| s.len() > 3));
//! assert!(long_palindrome.is_satisfied("racecar"));
//! assert!(!long_palindrome.is_satisfied("bob"));
//! ```

mod boxed;
mod combinators;
mod comparison;
mod field;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{
    all_of, always, any_of, from_fn, never, none_of, AllOf, Always, And, AnyOf, FromFn, Never,
    NoneOf, Not, Or,
};

// Re-export type-erased predicates
pub use boxed::{all_boxed, any_boxed, AllOfBoxed, AnyOfBoxed, BoxedPredicate, SharedPredicate};

// Re-export comparison predicates
pub use comparison::{between, eq, ge, gt, le, lt, ne, one_of, Between, Eq, Ge, Gt, Le, Lt, Ne, OneOf};

// Re-export field projection
pub use field::{field, Field};
