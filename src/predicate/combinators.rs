//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait and the logical
//! combinators used to compose predicates without touching existing ones.

use std::sync::Arc;

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// Evaluation only ever sees `&self` and `&T`, and the `Send + Sync` bound lets
/// one predicate be evaluated from several threads at once.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let is_valid_age = ge(0).and(le(150));
/// assert!(is_valid_age.is_satisfied(&25));
/// assert!(!is_valid_age.is_satisfied(&-5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the item satisfies this predicate.
    fn is_satisfied(&self, item: &T) -> bool;
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for &P {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Box<P> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Arc<P> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types, so composition costs nothing at runtime.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = gt(0).and(lt(100)).not();
/// assert!(p.is_satisfied(&-5));
/// assert!(!p.is_satisfied(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = gt(0).and(lt(100));
    /// assert!(p.is_satisfied(&50));
    /// assert!(!p.is_satisfied(&0));
    /// assert!(!p.is_satisfied(&100));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = lt(0).or(gt(100));
    /// assert!(p.is_satisfied(&-5));
    /// assert!(p.is_satisfied(&150));
    /// assert!(!p.is_satisfied(&50));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = gt(0).not();
    /// assert!(p.is_satisfied(&-5));
    /// assert!(p.is_satisfied(&0));
    /// assert!(!p.is_satisfied(&5));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type behind a `Box`.
    ///
    /// Useful for storing predicates of different types in one collection.
    fn boxed<'a>(self) -> super::BoxedPredicate<'a, T>
    where
        Self: 'a,
    {
        Box::new(self)
    }

    /// Erase the concrete type behind an `Arc` so several composites can share it.
    fn shared<'a>(self) -> super::SharedPredicate<'a, T>
    where
        Self: 'a,
    {
        Arc::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Predicate backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(pub F);

impl<T: ?Sized, F> Predicate<T> for FromFn<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FromFn").field(&"<closure>").finish()
    }
}

/// Turn a closure into a predicate.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let is_even = from_fn(|x: &i32| x % 2 == 0);
/// assert!(is_even.is_satisfied(&4));
/// assert!(!is_even.and(gt(10)).is_satisfied(&4));
/// ```
pub fn from_fn<T: ?Sized, F>(f: F) -> FromFn<F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    FromFn(f)
}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.is_satisfied(item) && self.1.is_satisfied(item)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.is_satisfied(item) || self.1.is_satisfied(item)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        !self.0.is_satisfied(item)
    }
}

/// Predicate that accepts everything. Identity for `and`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Always;

impl<T: ?Sized> Predicate<T> for Always {
    #[inline]
    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

/// Create a predicate that accepts every item.
pub fn always() -> Always {
    Always
}

/// Predicate that rejects everything. Identity for `or`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Never;

impl<T: ?Sized> Predicate<T> for Never {
    #[inline]
    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}

/// Create a predicate that rejects every item.
pub fn never() -> Never {
    Never
}

/// Check if all predicates are satisfied (const generic, zero-allocation).
///
/// Requires homogeneous predicate types. For mixed predicates, chain with
/// `.and()` or use [`all_boxed`](super::all_boxed).
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.iter().all(|p| p.is_satisfied(item))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// An empty array is vacuously satisfied.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let greater_than_bounds = all_of([gt(0), gt(-10), gt(-100)]);
/// assert!(greater_than_bounds.is_satisfied(&50));
/// assert!(!greater_than_bounds.is_satisfied(&-50));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Check if any predicate is satisfied (const generic, zero-allocation).
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.0.iter().any(|p| p.is_satisfied(item))
    }
}

/// Create a predicate that checks if any given predicate is satisfied.
///
/// An empty array is never satisfied.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let special_values = any_of([eq(1), eq(5), eq(10)]);
/// assert!(special_values.is_satisfied(&5));
/// assert!(!special_values.is_satisfied(&7));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// Check if no predicates are satisfied (const generic, zero-allocation).
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        !self.0.iter().any(|p| p.is_satisfied(item))
    }
}

/// Create a predicate that checks if no given predicates are satisfied.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let no_special = none_of([eq(1), eq(5), eq(10)]);
/// assert!(no_special.is_satisfied(&7));
/// assert!(!no_special.is_satisfied(&5));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}
