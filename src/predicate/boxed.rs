//! Type-erased predicates
//!
//! Use these when predicates are chosen at runtime:
//! - Storing different predicate types in one collection
//! - Returning different predicates from match arms
//! - Sharing one predicate between several composites
//!
//! Static combinators (`and`, `all_of`, ...) need no allocation and should be
//! preferred when the shape of the predicate is known at compile time.

use std::fmt;
use std::sync::Arc;

use super::combinators::Predicate;

/// A boxed predicate.
pub type BoxedPredicate<'a, T> = Box<dyn Predicate<T> + 'a>;

/// A reference-counted predicate that can be shared between composites.
pub type SharedPredicate<'a, T> = Arc<dyn Predicate<T> + 'a>;

/// Check if every predicate in a runtime list is satisfied.
///
/// Created by [`all_boxed`].
pub struct AllOfBoxed<'a, T: ?Sized> {
    predicates: Vec<BoxedPredicate<'a, T>>,
}

impl<T: ?Sized> AllOfBoxed<'_, T> {
    /// Number of child predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the list has no children (and so accepts everything).
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<'a, T: ?Sized> AllOfBoxed<'a, T> {
    /// Append another child predicate.
    pub fn push<P: Predicate<T> + 'a>(&mut self, predicate: P) {
        self.predicates.push(Box::new(predicate));
    }
}

impl<T: ?Sized> Predicate<T> for AllOfBoxed<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.predicates.iter().all(|p| p.is_satisfied(item))
    }
}

impl<T: ?Sized> fmt::Debug for AllOfBoxed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOfBoxed")
            .field("len", &self.predicates.len())
            .finish()
    }
}

/// Create a predicate that checks if all boxed predicates are satisfied.
///
/// Unlike [`all_of`](super::all_of), the children may have different types.
/// An empty list is vacuously satisfied.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let in_range = all_boxed(vec![gt(0).boxed(), lt(10).boxed(), ne(5).boxed()]);
/// assert!(in_range.is_satisfied(&3));
/// assert!(!in_range.is_satisfied(&5));
/// ```
pub fn all_boxed<T: ?Sized>(predicates: Vec<BoxedPredicate<'_, T>>) -> AllOfBoxed<'_, T> {
    AllOfBoxed { predicates }
}

/// Check if any predicate in a runtime list is satisfied.
///
/// Created by [`any_boxed`].
pub struct AnyOfBoxed<'a, T: ?Sized> {
    predicates: Vec<BoxedPredicate<'a, T>>,
}

impl<T: ?Sized> AnyOfBoxed<'_, T> {
    /// Number of child predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the list has no children (and so rejects everything).
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<'a, T: ?Sized> AnyOfBoxed<'a, T> {
    /// Append another child predicate.
    pub fn push<P: Predicate<T> + 'a>(&mut self, predicate: P) {
        self.predicates.push(Box::new(predicate));
    }
}

impl<T: ?Sized> Predicate<T> for AnyOfBoxed<'_, T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.predicates.iter().any(|p| p.is_satisfied(item))
    }
}

impl<T: ?Sized> fmt::Debug for AnyOfBoxed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOfBoxed")
            .field("len", &self.predicates.len())
            .finish()
    }
}

/// Create a predicate that checks if any boxed predicate is satisfied.
///
/// An empty list is never satisfied.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let outliers = any_boxed(vec![lt(0).boxed(), gt(100).boxed()]);
/// assert!(outliers.is_satisfied(&-1));
/// assert!(!outliers.is_satisfied(&50));
/// ```
pub fn any_boxed<T: ?Sized>(predicates: Vec<BoxedPredicate<'_, T>>) -> AnyOfBoxed<'_, T> {
    AnyOfBoxed { predicates }
}
