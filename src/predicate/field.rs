//! Field projection
//!
//! Lifts a predicate on one attribute of an item into a predicate on the whole
//! item. New filterable attributes only need a projection, never a new filter.

use super::combinators::Predicate;
use std::fmt;
use std::marker::PhantomData;

/// Predicate that tests one projected attribute of an item.
///
/// Created by [`field`].
pub struct Field<F, P, U: ?Sized> {
    project: F,
    predicate: P,
    _attr: PhantomData<fn(&U) -> bool>,
}

impl<T, U, F, P> Predicate<T> for Field<F, P, U>
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T) -> &U + Send + Sync,
    P: Predicate<U>,
{
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.predicate.is_satisfied((self.project)(item))
    }
}

impl<F: Clone, P: Clone, U: ?Sized> Clone for Field<F, P, U> {
    fn clone(&self) -> Self {
        Field {
            project: self.project.clone(),
            predicate: self.predicate.clone(),
            _attr: PhantomData,
        }
    }
}

impl<F, P: fmt::Debug, U: ?Sized> fmt::Debug for Field<F, P, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}

/// Create a predicate that applies `predicate` to the attribute returned by `project`.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// #[derive(PartialEq)]
/// enum Color { Green, Blue }
///
/// struct Product { color: Color, weight: u32 }
///
/// let green = field(|p: &Product| &p.color, eq(Color::Green));
/// let light = field(|p: &Product| &p.weight, lt(100));
/// let green_and_light = green.and(light);
///
/// let apple = Product { color: Color::Green, weight: 80 };
/// let house = Product { color: Color::Blue, weight: 90_000 };
/// assert!(green_and_light.is_satisfied(&apple));
/// assert!(!green_and_light.is_satisfied(&house));
/// ```
pub fn field<T, U, F, P>(project: F, predicate: P) -> Field<F, P, U>
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T) -> &U + Send + Sync,
    P: Predicate<U>,
{
    Field {
        project,
        predicate,
        _attr: PhantomData,
    }
}
