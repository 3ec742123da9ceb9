use core::cmp::Ordering;

use crate::iter::Iter;

/// A total order over `E`.
///
/// Implemented by [`Natural`] for every `E: Ord`, by [`Descending`], and by any
/// closure `Fn(&E, &E) -> Ordering`.
pub trait Comparator<E: ?Sized> {
    fn compare(&self, a: &E, b: &E) -> Ordering;
}

/// The element type's own [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<E: Ord + ?Sized> Comparator<E> for Natural {
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the order of the wrapped comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Descending<C>(pub C);

impl<E: ?Sized, C: Comparator<E>> Comparator<E> for Descending<C> {
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<E: ?Sized, F> Comparator<E> for F
where
    F: Fn(&E, &E) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        self(a, b)
    }
}

/// A container whose elements are kept in comparator order.
///
/// Used to build one sorted container from another without losing the
/// source's ordering.
pub trait Ordered<E> {
    type Comparator: Comparator<E>;

    fn comparator(&self) -> &Self::Comparator;

    /// Ascending iteration over the elements.
    fn iter(&self) -> Iter<'_, E, Self::Comparator>;
}
