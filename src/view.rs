use core::ops::{Bound, RangeBounds};

use crate::{
    Comparator, Error, Iter, Result, SortedList, Sortwood,
    error::check_index,
};

/// A live window over a contiguous index range of a [`SortedList`].
///
/// A view does not borrow its list: every operation takes the list it was
/// created from. The view remembers the list's modification count and fails
/// with [`Error::ConcurrentModification`] once the list has been changed by
/// anything other than the view itself. Handing a view any other list
/// fails with [`Error::ForeignList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubList {
    list_id: u64,
    offset: usize,
    len: usize,
    first: usize,
    last: usize,
    expected_mod_count: u64,
}

fn normalize_range<R: RangeBounds<usize>>(range: R, len: usize) -> Result<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start
            .checked_add(1)
            .ok_or(Error::IndexOutOfBounds { index: start, len })?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end
            .checked_add(1)
            .ok_or(Error::IndexOutOfBounds { index: end, len })?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    if end > len {
        return Err(Error::IndexOutOfBounds { index: end, len });
    }

    Ok((start, end))
}

impl SubList {
    pub(crate) fn new<E, C, R>(list: &SortedList<E, C>, range: R) -> Result<Self>
    where
        C: Comparator<E>,
        R: RangeBounds<usize>,
    {
        let (start, end) = normalize_range(range, list.len())?;
        Ok(Self::spanning(list, start, end))
    }

    /// Locates the boundary nodes of `[start, end)` and snapshots the list.
    fn spanning<E, C: Comparator<E>>(list: &SortedList<E, C>, start: usize, end: usize) -> Self {
        let len = end - start;
        let (first, last) = if len == 0 {
            (Sortwood::<E, C>::BLACK_NIL, Sortwood::<E, C>::BLACK_NIL)
        } else {
            let first = list.tree.node_at(start);
            (first, list.tree.walk_forward(first, len - 1))
        };

        Self {
            list_id: list.tree.id(),
            offset: start,
            len,
            first,
            last,
            expected_mod_count: list.modification_count(),
        }
    }

    fn check_for_comodification<E, C: Comparator<E>>(&self, list: &SortedList<E, C>) -> Result<()> {
        if list.tree.id() != self.list_id {
            log::debug!("sub list of tree {} used with tree {}", self.list_id, list.tree.id());
            return Err(Error::ForeignList);
        }

        let found = list.modification_count();
        if found == self.expected_mod_count {
            return Ok(());
        }

        log::debug!(
            "sub list [{}, {}) invalidated: modification count {} != {}",
            self.offset,
            self.offset + self.len,
            found,
            self.expected_mod_count
        );
        Err(Error::ConcurrentModification {
            expected: self.expected_mod_count,
            found,
        })
    }

    fn resync<E, C: Comparator<E>>(&mut self, list: &SortedList<E, C>, len: usize) {
        *self = Self::spanning(list, self.offset, self.offset + len);
    }

    fn node_at<E, C: Comparator<E>>(&self, list: &SortedList<E, C>, index: usize) -> usize {
        if index <= self.len / 2 {
            list.tree.walk_forward(self.first, index)
        } else {
            list.tree.walk_backward(self.last, self.len - 1 - index)
        }
    }

    /// Position of the view's first element within the backing list.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len<E, C: Comparator<E>>(&self, list: &SortedList<E, C>) -> Result<usize> {
        self.check_for_comodification(list)?;
        Ok(self.len)
    }

    pub fn is_empty<E, C: Comparator<E>>(&self, list: &SortedList<E, C>) -> Result<bool> {
        self.check_for_comodification(list)?;
        Ok(self.len == 0)
    }

    pub fn get<'a, E, C: Comparator<E>>(
        &self,
        list: &'a SortedList<E, C>,
        index: usize,
    ) -> Result<&'a E> {
        self.check_for_comodification(list)?;
        check_index(index, self.len)?;
        Ok(list.tree.key(self.node_at(list, index)))
    }

    pub fn first<'a, E, C: Comparator<E>>(&self, list: &'a SortedList<E, C>) -> Result<Option<&'a E>> {
        self.check_for_comodification(list)?;
        Ok(list.tree.element(self.first))
    }

    pub fn last<'a, E, C: Comparator<E>>(&self, list: &'a SortedList<E, C>) -> Result<Option<&'a E>> {
        self.check_for_comodification(list)?;
        Ok(list.tree.element(self.last))
    }

    pub fn iter<'a, E, C: Comparator<E>>(&self, list: &'a SortedList<E, C>) -> Result<Iter<'a, E, C>> {
        self.check_for_comodification(list)?;
        Ok(Iter::new(&list.tree, self.first, self.last, self.len))
    }

    pub fn contains<E: PartialEq, C: Comparator<E>>(
        &self,
        list: &SortedList<E, C>,
        element: &E,
    ) -> Result<bool> {
        Ok(self.index_of(list, element)?.is_some())
    }

    /// Position, relative to the view, of the first element equal to `element`.
    pub fn index_of<E: PartialEq, C: Comparator<E>>(
        &self,
        list: &SortedList<E, C>,
        element: &E,
    ) -> Result<Option<usize>> {
        let position = self.iter(list)?.position(|e| {
            list.tree.compare_elements(e, element).is_eq() && e == element
        });
        Ok(position)
    }

    /// Removes the element at `index` of the view from the backing list.
    pub fn remove<E, C: Comparator<E>>(&mut self, list: &mut SortedList<E, C>, index: usize) -> Result<E> {
        self.check_for_comodification(list)?;
        check_index(index, self.len)?;

        let node = self.node_at(list, index);
        let removed = list.tree.delete_at(node).element;
        self.resync(list, self.len - 1);

        Ok(removed)
    }

    pub fn remove_element<E: PartialEq, C: Comparator<E>>(
        &mut self,
        list: &mut SortedList<E, C>,
        element: &E,
    ) -> Result<bool> {
        match self.index_of(list, element)? {
            Some(index) => self.remove(list, index).map(|_| true),
            None => Ok(false),
        }
    }

    /// Removes every element of the view from the backing list.
    pub fn clear<E, C: Comparator<E>>(&mut self, list: &mut SortedList<E, C>) -> Result<()> {
        self.check_for_comodification(list)?;

        let mut node = self.first;
        for _ in 0..self.len {
            node = list.tree.delete_at(node).next;
        }
        self.resync(list, 0);

        Ok(())
    }

    /// A view of `range`, relative to this view.
    ///
    /// The new view keeps its own snapshot: removing through it invalidates
    /// this view like any other change to the list.
    pub fn sub_list<E, C, R>(&self, list: &SortedList<E, C>, range: R) -> Result<SubList>
    where
        C: Comparator<E>,
        R: RangeBounds<usize>,
    {
        self.check_for_comodification(list)?;
        let (start, end) = normalize_range(range, self.len)?;
        Ok(Self::spanning(list, self.offset + start, self.offset + end))
    }
}
