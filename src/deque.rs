use core::{fmt, iter::Rev};

use crate::{Comparator, Error, IntoIter, Iter, Natural, Ordered, Result, SortedQueue};

/// A [`SortedQueue`] that also serves from its tail.
///
/// The tail is the largest element. Insertion is by value only: the
/// end-choosing insertions of a regular deque always fail.
#[derive(Clone)]
pub struct SortedDeque<E, C = Natural> {
    queue: SortedQueue<E, C>,
}

impl<E: Ord> SortedDeque<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: SortedQueue::new(),
        }
    }
}

impl<E: Ord> Default for SortedDeque<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C: Comparator<E>> SortedDeque<E, C> {
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            queue: SortedQueue::with_comparator(comparator),
        }
    }

    /// Copies `source`, keeping its comparator.
    pub fn from_ordered<S>(source: &S) -> Self
    where
        S: Ordered<E, Comparator = C>,
        E: Clone,
        C: Clone,
    {
        Self {
            queue: SortedQueue::from_ordered(source),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn comparator(&self) -> &C {
        self.queue.comparator()
    }

    #[must_use]
    pub fn modification_count(&self) -> u64 {
        self.queue.modification_count()
    }

    pub fn offer(&mut self, element: E) -> bool {
        self.queue.offer(element)
    }

    pub fn add(&mut self, element: E) -> Result<()> {
        self.queue.add(element)
    }

    pub fn poll(&mut self) -> Option<E> {
        self.queue.poll()
    }

    pub fn peek(&self) -> Option<&E> {
        self.queue.peek()
    }

    pub fn element(&self) -> Result<&E> {
        self.queue.element()
    }

    pub fn remove(&mut self) -> Result<E> {
        self.queue.remove()
    }

    pub fn peek_first(&self) -> Option<&E> {
        self.queue.peek()
    }

    pub fn peek_last(&self) -> Option<&E> {
        self.queue.tree.last_element()
    }

    pub fn poll_first(&mut self) -> Option<E> {
        self.queue.poll()
    }

    pub fn poll_last(&mut self) -> Option<E> {
        self.queue.tree.pop_last()
    }

    pub fn get_first(&self) -> Result<&E> {
        self.queue.element()
    }

    pub fn get_last(&self) -> Result<&E> {
        self.peek_last().ok_or(Error::NoSuchElement)
    }

    pub fn remove_first(&mut self) -> Result<E> {
        self.queue.remove()
    }

    pub fn remove_last(&mut self) -> Result<E> {
        self.poll_last().ok_or(Error::NoSuchElement)
    }

    pub fn remove_element(&mut self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.queue.remove_element(element)
    }

    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.queue.contains(element)
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn iter(&self) -> Iter<'_, E, C> {
        self.queue.iter()
    }

    /// Tail-to-head iteration, walking predecessors from the maximum.
    pub fn descending_iter(&self) -> Rev<Iter<'_, E, C>> {
        self.queue.descending_iter()
    }

    /// Always fails: position is decided by value.
    pub fn add_first(&mut self, _element: E) -> Result<()> {
        Err(Error::Unsupported("add_first"))
    }

    /// Always fails: position is decided by value.
    pub fn add_last(&mut self, _element: E) -> Result<()> {
        Err(Error::Unsupported("add_last"))
    }

    /// Always fails: position is decided by value.
    pub fn offer_first(&mut self, _element: E) -> Result<bool> {
        Err(Error::Unsupported("offer_first"))
    }

    /// Always fails: position is decided by value.
    pub fn offer_last(&mut self, _element: E) -> Result<bool> {
        Err(Error::Unsupported("offer_last"))
    }

    /// Always fails: position is decided by value.
    pub fn push(&mut self, _element: E) -> Result<()> {
        Err(Error::Unsupported("push"))
    }
}

impl<E, C: Comparator<E>> Extend<E> for SortedDeque<E, C> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}

impl<E: Ord> FromIterator<E> for SortedDeque<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl<E, C: Comparator<E>> Ordered<E> for SortedDeque<E, C> {
    type Comparator = C;

    fn comparator(&self) -> &C {
        self.queue.comparator()
    }

    fn iter(&self) -> Iter<'_, E, C> {
        self.queue.iter()
    }
}

impl<'a, E, C: Comparator<E>> IntoIterator for &'a SortedDeque<E, C> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, C: Comparator<E>> IntoIterator for SortedDeque<E, C> {
    type Item = E;
    type IntoIter = IntoIter<E, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.queue.into_iter()
    }
}

impl<E: fmt::Debug, C: Comparator<E>> fmt::Debug for SortedDeque<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.queue, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::SortedDeque;
    use crate::Error;

    #[test]
    pub fn both_ends() {
        let mut deque: SortedDeque<u32> = [5, 3, 8, 1, 3].into_iter().collect();

        assert_eq!(deque.peek_first(), Some(&1));
        assert_eq!(deque.peek_last(), Some(&8));
        assert_eq!(deque.get_last(), Ok(&8));
        assert_eq!(deque.poll_last(), Some(8));
        assert_eq!(deque.remove_last(), Ok(5));
        assert_eq!(deque.poll_first(), Some(1));
        assert_eq!(deque.remove_first(), Ok(3));
        assert_eq!(deque.get_first(), Ok(&3));
        assert_eq!(deque.len(), 1);
        deque.queue.tree.assert_invariants();
    }

    #[test]
    pub fn empty_deque() {
        let mut deque = SortedDeque::<u32>::new();

        assert_eq!(deque.peek_last(), None);
        assert_eq!(deque.poll_last(), None);
        assert_eq!(deque.get_last(), Err(Error::NoSuchElement));
        assert_eq!(deque.remove_last(), Err(Error::NoSuchElement));
        assert_eq!(deque.get_first(), Err(Error::NoSuchElement));
        assert_eq!(deque.remove_first(), Err(Error::NoSuchElement));
    }

    #[test]
    pub fn descending_with_ties() {
        let mut deque = SortedDeque::with_comparator(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
        deque.extend([(2, 'a'), (1, 'b'), (2, 'c')]);

        let order: Vec<char> = deque.descending_iter().map(|e| e.1).collect();
        assert_eq!(order, ['c', 'a', 'b']);
        assert_eq!(deque.poll_last(), Some((2, 'c')));
    }

    #[test]
    pub fn end_choosing_insertion_is_unsupported() {
        let mut deque: SortedDeque<u32> = [1, 2].into_iter().collect();
        let count = deque.modification_count();

        assert_eq!(deque.add_first(0), Err(Error::Unsupported("add_first")));
        assert_eq!(deque.add_last(9), Err(Error::Unsupported("add_last")));
        assert_eq!(deque.offer_first(0), Err(Error::Unsupported("offer_first")));
        assert_eq!(deque.offer_last(9), Err(Error::Unsupported("offer_last")));
        assert_eq!(deque.push(0), Err(Error::Unsupported("push")));

        assert_eq!(deque.modification_count(), count);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2]);
    }
}
