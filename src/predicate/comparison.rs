//! Comparison predicates
//!
//! Leaf predicates that close over a single value and compare each item
//! against it. Combined with [`field`](super::field) they describe attribute
//! tests such as "color is green" or "price is below 10".

use super::combinators::Predicate;
use std::cmp::PartialOrd;

/// Predicate for equality.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Eq<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item == self.0
    }
}

/// Create a predicate that checks for equality.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(eq("green").is_satisfied(&"green"));
/// assert!(!eq(5).is_satisfied(&4));
/// ```
pub fn eq<T: PartialEq + Send + Sync>(value: T) -> Eq<T> {
    Eq(value)
}

/// Predicate for inequality.
#[derive(Clone, Copy, Debug)]
pub struct Ne<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Ne<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item != self.0
    }
}

/// Create a predicate that checks for inequality.
pub fn ne<T: PartialEq + Send + Sync>(value: T) -> Ne<T> {
    Ne(value)
}

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item > self.0
    }
}

/// Create a predicate that checks if an item is greater than `value`.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(gt(5).is_satisfied(&6));
/// assert!(!gt(5).is_satisfied(&5));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(value: T) -> Gt<T> {
    Gt(value)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item >= self.0
    }
}

/// Create a predicate that checks if an item is at least `value`.
pub fn ge<T: PartialOrd + Send + Sync>(value: T) -> Ge<T> {
    Ge(value)
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item < self.0
    }
}

/// Create a predicate that checks if an item is less than `value`.
pub fn lt<T: PartialOrd + Send + Sync>(value: T) -> Lt<T> {
    Lt(value)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item <= self.0
    }
}

/// Create a predicate that checks if an item is at most `value`.
pub fn le<T: PartialOrd + Send + Sync>(value: T) -> Le<T> {
    Le(value)
}

/// Predicate for an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        *item >= self.min && *item <= self.max
    }
}

/// Create a predicate that checks if an item lies in `min..=max`.
///
/// A range with `min > max` accepts nothing.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = between(1, 10);
/// assert!(p.is_satisfied(&1));
/// assert!(p.is_satisfied(&10));
/// assert!(!p.is_satisfied(&11));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Predicate for membership in a fixed set of values.
#[derive(Clone, Debug)]
pub struct OneOf<T> {
    values: Vec<T>,
}

impl<T: PartialEq + Send + Sync> Predicate<T> for OneOf<T> {
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        self.values.contains(item)
    }
}

/// Create a predicate that checks if an item equals any of `values`.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = one_of(["medium", "large"]);
/// assert!(p.is_satisfied(&"large"));
/// assert!(!p.is_satisfied(&"small"));
/// ```
pub fn one_of<T, I>(values: I) -> OneOf<T>
where
    T: PartialEq + Send + Sync,
    I: IntoIterator<Item = T>,
{
    OneOf {
        values: values.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    enum Size {
        Small,
        Medium,
        Large,
    }

    #[test]
    fn test_eq_ne() {
        assert!(eq(Size::Small).is_satisfied(&Size::Small));
        assert!(!eq(Size::Small).is_satisfied(&Size::Large));
        assert!(ne(Size::Small).is_satisfied(&Size::Large));
        assert!(!ne(Size::Small).is_satisfied(&Size::Small));
    }

    #[test]
    fn test_ordering() {
        assert!(gt(Size::Small).is_satisfied(&Size::Medium));
        assert!(ge(Size::Medium).is_satisfied(&Size::Medium));
        assert!(lt(Size::Large).is_satisfied(&Size::Medium));
        assert!(le(Size::Small).is_satisfied(&Size::Small));
        assert!(!le(Size::Small).is_satisfied(&Size::Medium));
    }

    #[test]
    fn test_between() {
        let p = between(2.5, 7.5);
        assert!(p.is_satisfied(&2.5));
        assert!(p.is_satisfied(&7.5));
        assert!(!p.is_satisfied(&7.6));
        assert!(!between(10, 1).is_satisfied(&5));
    }

    #[test]
    fn test_between_nan_is_rejected() {
        assert!(!between(0.0, 1.0).is_satisfied(&f64::NAN));
    }

    #[test]
    fn test_one_of() {
        let p = one_of(vec![Size::Medium, Size::Large]);
        assert!(p.is_satisfied(&Size::Large));
        assert!(!p.is_satisfied(&Size::Small));

        let nothing: OneOf<Size> = one_of(Vec::new());
        assert!(!nothing.is_satisfied(&Size::Small));
    }

    #[test]
    fn test_strings() {
        assert!(eq(String::from("Apple")).is_satisfied(&String::from("Apple")));
        assert!(lt(String::from("b")).is_satisfied(&String::from("a")));
    }
}
