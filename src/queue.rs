use core::{fmt, iter::Rev};

use alloc::vec::Vec;

use crate::{Comparator, Error, IntoIter, Iter, Natural, Ordered, Result, Sortwood};

/// A priority queue served in comparator order.
///
/// The head is the smallest element. Elements that compare equal leave the
/// queue in the order they entered it.
#[derive(Clone)]
pub struct SortedQueue<E, C = Natural> {
    pub(crate) tree: Sortwood<E, C>,
}

impl<E: Ord> SortedQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: Sortwood::new(),
        }
    }
}

impl<E: Ord> Default for SortedQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C: Comparator<E>> SortedQueue<E, C> {
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: Sortwood::with_comparator(comparator),
        }
    }

    /// Copies `source`, keeping its comparator.
    pub fn from_ordered<S>(source: &S) -> Self
    where
        S: Ordered<E, Comparator = C>,
        E: Clone,
        C: Clone,
    {
        let mut queue = Self::with_comparator(source.comparator().clone());
        queue.extend(source.iter().cloned());
        queue
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    #[must_use]
    pub fn modification_count(&self) -> u64 {
        self.tree.modification_count()
    }

    /// Enqueues `element`. Always accepted.
    pub fn offer(&mut self, element: E) -> bool {
        self.tree.insert(element);
        true
    }

    /// Enqueues `element`. Never fails for an unbounded queue.
    pub fn add(&mut self, element: E) -> Result<()> {
        self.offer(element);
        Ok(())
    }

    /// Removes and returns the head, or `None` when empty.
    pub fn poll(&mut self) -> Option<E> {
        self.tree.pop_first()
    }

    /// The head, or `None` when empty.
    pub fn peek(&self) -> Option<&E> {
        self.tree.first_element()
    }

    /// The head, failing when empty.
    pub fn element(&self) -> Result<&E> {
        self.peek().ok_or(Error::NoSuchElement)
    }

    /// Removes and returns the head, failing when empty.
    pub fn remove(&mut self) -> Result<E> {
        self.poll().ok_or(Error::NoSuchElement)
    }

    /// Removes the first element equal to `element`.
    pub fn remove_element(&mut self, element: &E) -> bool
    where
        E: PartialEq,
    {
        match self.tree.search(element) {
            Some(node) => self.tree.delete(node).is_some(),
            None => false,
        }
    }

    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.tree.contains(element)
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Head-to-tail iteration.
    pub fn iter(&self) -> Iter<'_, E, C> {
        self.tree.iter()
    }

    /// Tail-to-head iteration.
    pub fn descending_iter(&self) -> Rev<Iter<'_, E, C>> {
        self.tree.iter().rev()
    }

    pub fn into_sorted_vec(self) -> Vec<E> {
        self.tree.into_iter().collect()
    }
}

impl<E, C: Comparator<E>> Extend<E> for SortedQueue<E, C> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<E: Ord> FromIterator<E> for SortedQueue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<E, C: Comparator<E>> Ordered<E> for SortedQueue<E, C> {
    type Comparator = C;

    fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    fn iter(&self) -> Iter<'_, E, C> {
        self.tree.iter()
    }
}

impl<'a, E, C: Comparator<E>> IntoIterator for &'a SortedQueue<E, C> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, C: Comparator<E>> IntoIterator for SortedQueue<E, C> {
    type Item = E;
    type IntoIter = IntoIter<E, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<E: fmt::Debug, C: Comparator<E>> fmt::Debug for SortedQueue<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
