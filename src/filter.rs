//! Order-preserving filtering
//!
//! One generic operation selects the items of a collection that satisfy a
//! predicate. The input is only read: results borrow from it (or clone out
//! of it) and always keep the original relative order.
//!
//! # Example
//!
//! ```rust
//! use sift::filter::{filter, partition};
//! use sift::predicate::*;
//!
//! let readings = [3, -1, 8, 12, -4, 5];
//! let in_range = between(0, 10);
//!
//! assert_eq!(filter(&readings, &in_range), vec![&3, &8, &5]);
//!
//! let (kept, dropped) = partition(&readings, &in_range);
//! assert_eq!(kept.len() + dropped.len(), readings.len());
//! assert_eq!(dropped, vec![&-1, &12, &-4]);
//! ```

use crate::predicate::Predicate;

/// Iterator adapter yielding only the items that satisfy a predicate.
///
/// Created by [`SatisfyingExt::satisfying`].
#[derive(Clone, Debug)]
pub struct Satisfying<I, P> {
    iter: I,
    predicate: P,
}

impl<'a, T, I, P> Iterator for Satisfying<I, P>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T>,
    P: Predicate<T>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let predicate = &self.predicate;
        self.iter.find(|item| predicate.is_satisfied(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Extension trait adding predicate filtering to iterators of references.
pub trait SatisfyingExt<'a, T: ?Sized + 'a>: Iterator<Item = &'a T> + Sized {
    /// Lazily keep the items that satisfy `predicate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::filter::SatisfyingExt;
    /// use sift::predicate::*;
    ///
    /// let words = ["apple", "tree", "house"];
    /// let short: Vec<_> = words.iter().satisfying(from_fn(|w: &&str| w.len() <= 4)).collect();
    /// assert_eq!(short, vec![&"tree"]);
    /// ```
    fn satisfying<P: Predicate<T>>(self, predicate: P) -> Satisfying<Self, P> {
        Satisfying {
            iter: self,
            predicate,
        }
    }
}

impl<'a, T: ?Sized + 'a, I: Iterator<Item = &'a T>> SatisfyingExt<'a, T> for I {}

/// Select the items satisfying `predicate`, in their original order.
///
/// Empty input, or a predicate that rejects everything, yields an empty `Vec`.
///
/// # Example
///
/// ```rust
/// use sift::filter;
/// use sift::predicate::*;
///
/// let evens = filter(&[1, 2, 3, 4], &from_fn(|x: &i32| x % 2 == 0));
/// assert_eq!(evens, vec![&2, &4]);
/// assert!(filter(&[] as &[i32], &always()).is_empty());
/// ```
pub fn filter<'a, T, P>(items: &'a [T], predicate: &P) -> Vec<&'a T>
where
    P: Predicate<T> + ?Sized,
{
    let selected: Vec<&'a T> = items.iter().satisfying(predicate).collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        total = items.len(),
        matched = selected.len(),
        "filtered items"
    );

    selected
}

/// Like [`filter`], but returns owned clones of the matching items.
pub fn filter_cloned<T, P>(items: &[T], predicate: &P) -> Vec<T>
where
    T: Clone,
    P: Predicate<T> + ?Sized,
{
    filter(items, predicate).into_iter().cloned().collect()
}

/// Split `items` into those satisfying `predicate` and those that do not.
///
/// Each half keeps the original relative order, and every item lands in
/// exactly one half.
pub fn partition<'a, T, P>(items: &'a [T], predicate: &P) -> (Vec<&'a T>, Vec<&'a T>)
where
    P: Predicate<T> + ?Sized,
{
    let (matched, rejected): (Vec<&'a T>, Vec<&'a T>) =
        items.iter().partition(|item| predicate.is_satisfied(item));

    #[cfg(feature = "tracing")]
    tracing::trace!(
        total = items.len(),
        matched = matched.len(),
        rejected = rejected.len(),
        "partitioned items"
    );

    (matched, rejected)
}

/// Count the items satisfying `predicate` without collecting them.
pub fn count_matching<T, P>(items: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    items.iter().satisfying(predicate).count()
}
