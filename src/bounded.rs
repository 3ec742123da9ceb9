use core::{cmp::Ordering, fmt, iter::Rev};

use crate::{Comparator, Error, Iter, Natural, Ordered, Result, SortedQueue};

/// Whether a [`BoundedQueue`] has room left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    NotFull,
    Full,
}

/// A [`SortedQueue`] holding at most `max_size` elements.
///
/// Once full, an incoming element displaces the head (the lowest-priority
/// element) only if it compares strictly greater than it. Otherwise the
/// element is turned away and the queue is left untouched.
#[derive(Clone)]
pub struct BoundedQueue<E, C = Natural> {
    queue: SortedQueue<E, C>,
    max_size: usize,
}

impl<E: Ord> BoundedQueue<E> {
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self::with_comparator(max_size, Natural)
    }
}

impl<E, C: Comparator<E>> BoundedQueue<E, C> {
    #[must_use]
    pub fn with_comparator(max_size: usize, comparator: C) -> Self {
        Self {
            queue: SortedQueue::with_comparator(comparator),
            max_size,
        }
    }

    /// Copies `source` with its comparator, bounded to its current length.
    pub fn from_ordered<S>(source: &S) -> Self
    where
        S: Ordered<E, Comparator = C>,
        E: Clone,
        C: Clone,
    {
        let queue = SortedQueue::from_ordered(source);
        let max_size = queue.len();

        Self { queue, max_size }
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.max_size.saturating_sub(self.queue.len())
    }

    #[must_use]
    pub fn state(&self) -> Capacity {
        if self.queue.len() < self.max_size {
            Capacity::NotFull
        } else {
            Capacity::Full
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

    /// Enqueues `element`, evicting the head if the queue is full and
    /// `element` outranks it. Returns `false` if `element` was turned away.
    pub fn offer(&mut self, element: E) -> bool {
        if self.state() == Capacity::NotFull {
            return self.queue.offer(element);
        }

        let outranks_head = self.queue.peek().is_some_and(|head| {
            self.queue.tree.compare_elements(&element, head) == Ordering::Greater
        });

        if !outranks_head {
            log::trace!("bounded queue full at {}, rejecting element", self.max_size);
            return false;
        }

        self.queue.poll();
        log::trace!("bounded queue full at {}, evicted head", self.max_size);

        self.queue.offer(element)
    }

    /// Like [`offer`](Self::offer), but a rejection is an error.
    pub fn add(&mut self, element: E) -> Result<()> {
        if self.offer(element) {
            Ok(())
        } else {
            Err(Error::QueueFull {
                capacity: self.max_size,
            })
        }
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

    pub fn descending_iter(&self) -> Rev<Iter<'_, E, C>> {
        self.queue.descending_iter()
    }
}

impl<E: Ord> FromIterator<E> for BoundedQueue<E> {
    /// Bounds the queue to the number of elements collected.
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let queue: SortedQueue<E> = iter.into_iter().collect();
        let max_size = queue.len();

        Self { queue, max_size }
    }
}

impl<E, C: Comparator<E>> Ordered<E> for BoundedQueue<E, C> {
    type Comparator = C;

    fn comparator(&self) -> &C {
        self.queue.comparator()
    }

    fn iter(&self) -> Iter<'_, E, C> {
        self.queue.iter()
    }
}

impl<'a, E, C: Comparator<E>> IntoIterator for &'a BoundedQueue<E, C> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Debug, C: Comparator<E>> fmt::Debug for BoundedQueue<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("max_size", &self.max_size)
            .field("elements", &self.queue)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{BoundedQueue, Capacity};
    use crate::{Error, SortedList};

    fn contents(queue: &BoundedQueue<u32>) -> Vec<u32> {
        queue.iter().copied().collect()
    }

    #[test]
    pub fn evicts_lowest_priority() {
        let mut queue = BoundedQueue::new(3);

        for element in [4, 2, 7] {
            assert_eq!(queue.state(), Capacity::NotFull);
            assert!(queue.offer(element));
        }
        assert_eq!(queue.state(), Capacity::Full);
        let count = queue.modification_count();

        assert!(!queue.offer(1));
        assert_eq!(contents(&queue), [2, 4, 7]);
        assert_eq!(queue.modification_count(), count);

        assert!(queue.offer(9));
        assert_eq!(contents(&queue), [4, 7, 9]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    pub fn equal_to_head_is_rejected() {
        let mut queue = BoundedQueue::new(2);
        queue.offer(5);
        queue.offer(6);

        assert!(!queue.offer(5));
        assert_eq!(contents(&queue), [5, 6]);
    }

    #[test]
    pub fn add_reports_full_queue() {
        let mut queue = BoundedQueue::new(2);

        assert_eq!(queue.add(3), Ok(()));
        assert_eq!(queue.add(8), Ok(()));
        assert_eq!(queue.add(1), Err(Error::QueueFull { capacity: 2 }));
        assert_eq!(queue.add(4), Ok(()));
        assert_eq!(contents(&queue), [4, 8]);
    }

    #[test]
    pub fn removal_frees_room() {
        let mut queue = BoundedQueue::new(2);
        queue.offer(1);
        queue.offer(2);
        assert_eq!(queue.remaining_capacity(), 0);

        assert_eq!(queue.poll(), Some(1));
        assert_eq!(queue.state(), Capacity::NotFull);
        assert_eq!(queue.remaining_capacity(), 1);

        assert!(queue.offer(0));
        assert_eq!(contents(&queue), [0, 2]);
    }

    #[test]
    pub fn zero_capacity_rejects_everything() {
        let mut queue = BoundedQueue::new(0);

        assert_eq!(queue.state(), Capacity::Full);
        assert!(!queue.offer(1));
        assert_eq!(queue.add(1), Err(Error::QueueFull { capacity: 0 }));
        assert!(queue.is_empty());
    }

    #[test]
    pub fn snapshot_bound_construction() {
        let queue: BoundedQueue<u32> = [6, 1, 4].into_iter().collect();
        assert_eq!(queue.max_size(), 3);
        assert_eq!(queue.state(), Capacity::Full);

        let list: SortedList<u32> = [10, 30].into_iter().collect();
        let mut from_list = BoundedQueue::from_ordered(&list);
        assert_eq!(from_list.max_size(), 2);
        assert!(from_list.offer(20));
        assert_eq!(contents(&from_list), [20, 30]);
    }

    #[test]
    pub fn reads_are_forwarded() {
        let mut queue: BoundedQueue<u32> = [3, 1, 2].into_iter().collect();

        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.element(), Ok(&1));
        assert_eq!(queue.descending_iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
        assert!(queue.contains(&2));
        assert!(queue.remove_element(&2));
        assert_eq!(queue.remove(), Ok(1));
        queue.clear();
        assert_eq!(queue.remove(), Err(Error::NoSuchElement));
    }
}
