//! # Sift
//!
//! Composable predicates and one generic, order-preserving filter.
//!
//! ## Philosophy
//!
//! Filtering criteria are values, not methods. Each criterion is written once
//! as a [`Predicate`](predicate::Predicate); criteria combine with `and`, `or`
//! and `not`; a single [`filter`] applies any of them to any slice. Adding a
//! new criterion never means editing an existing one.
//!
//! ## Quick Example
//!
//! ```rust
//! use sift::filter;
//! use sift::predicate::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Color { Red, Green, Blue }
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum Size { Small, Medium, Large }
//!
//! #[derive(Debug)]
//! struct Product { name: &'static str, color: Color, size: Size }
//!
//! let items = [
//!     Product { name: "Apple", color: Color::Green, size: Size::Small },
//!     Product { name: "Tree", color: Color::Green, size: Size::Large },
//!     Product { name: "House", color: Color::Blue, size: Size::Large },
//! ];
//!
//! let green = field(|p: &Product| &p.color, eq(Color::Green));
//! let large = field(|p: &Product| &p.size, eq(Size::Large));
//!
//! let names = |found: Vec<&Product>| found.iter().map(|p| p.name).collect::<Vec<_>>();
//! assert_eq!(names(filter(&items, &green)), ["Apple", "Tree"]);
//! assert_eq!(names(filter(&items, &(&green).and(&large))), ["Tree"]);
//! assert!(filter(&items, &field(|p: &Product| &p.color, eq(Color::Red))).is_empty());
//! ```
//!
//! The crate also carries a small [`Journal`] and a separate
//! [`PersistenceManager`] that writes journals to disk, keeping record
//! keeping and storage apart.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from filtering and persistence
//! - `serde`: `Serialize`/`Deserialize` for [`Journal`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod filter;
pub mod journal;
pub mod persist;
pub mod predicate;

// Re-exports
pub use filter::{count_matching, filter, filter_cloned, partition, SatisfyingExt};
pub use journal::Journal;
pub use persist::{save_lines, PersistenceManager, SaveError};
pub use predicate::{Predicate, PredicateExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::filter::{count_matching, filter, filter_cloned, partition, SatisfyingExt};
    pub use crate::journal::Journal;
    pub use crate::persist::{save_lines, PersistenceManager, SaveError};
    pub use crate::predicate::prelude::*;
}
