use core::iter::FusedIterator;

use crate::{Comparator, Sortwood};

/// In-order iterator over a [`Sortwood`] tree.
///
/// Walks successor links from the front and predecessor links from the back.
pub struct Iter<'a, E, C> {
    pub(crate) tree: &'a Sortwood<E, C>,
    pub(crate) front: usize,
    pub(crate) back: usize,
    pub(crate) remaining: usize,
}

impl<'a, E, C: Comparator<E>> Iter<'a, E, C> {
    /// Iterates over the `remaining` nodes from `front` up to `back`.
    pub(crate) fn new(tree: &'a Sortwood<E, C>, front: usize, back: usize, remaining: usize) -> Self {
        Self {
            tree,
            front,
            back,
            remaining,
        }
    }
}

impl<E, C> Clone for Iter<'_, E, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, E, C: Comparator<E>> Iterator for Iter<'a, E, C> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = self.tree.successor_of(node);
        }

        Some(self.tree.key(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E, C: Comparator<E>> DoubleEndedIterator for Iter<'_, E, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = self.tree.predecessor_of(node);
        }

        Some(self.tree.key(node))
    }
}

impl<E, C: Comparator<E>> ExactSizeIterator for Iter<'_, E, C> {}

impl<E, C: Comparator<E>> FusedIterator for Iter<'_, E, C> {}

/// Owning iterator, draining a tree from both ends.
pub struct IntoIter<E, C> {
    tree: Sortwood<E, C>,
}

impl<E, C: Comparator<E>> IntoIter<E, C> {
    pub(crate) fn new(tree: Sortwood<E, C>) -> Self {
        Self { tree }
    }
}

impl<E, C: Comparator<E>> Iterator for IntoIter<E, C> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len(), Some(self.tree.len()))
    }
}

impl<E, C: Comparator<E>> DoubleEndedIterator for IntoIter<E, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tree.pop_last()
    }
}

impl<E, C: Comparator<E>> ExactSizeIterator for IntoIter<E, C> {}

impl<E, C: Comparator<E>> FusedIterator for IntoIter<E, C> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::Sortwood;

    #[test]
    pub fn sorted_iteration() {
        let tree: Sortwood<usize> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();

        let forward: Vec<_> = tree.iter().copied().collect();
        assert_eq!(forward, [1, 1, 2, 3, 4, 5, 6, 9]);

        let backward: Vec<_> = tree.iter().rev().copied().collect();
        assert_eq!(backward, [9, 6, 5, 4, 3, 2, 1, 1]);
        assert_eq!(tree.iter().len(), 8);
    }

    #[test]
    pub fn both_ends_meet() {
        let tree: Sortwood<usize> = (0..5).collect();
        let mut iter = tree.iter();

        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    pub fn empty_iteration() {
        let tree = Sortwood::<usize>::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.iter().next_back(), None);
    }

    #[test]
    pub fn into_iter_drains_in_order() {
        let tree: Sortwood<usize> = [5, 3, 8, 1].into_iter().collect();
        let mut drain = tree.into_iter();

        assert_eq!(drain.len(), 4);
        assert_eq!(drain.next(), Some(1));
        assert_eq!(drain.next_back(), Some(8));
        assert_eq!(drain.collect::<Vec<_>>(), [3, 5]);
    }
}
