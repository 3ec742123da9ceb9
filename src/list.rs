use core::{fmt, ops::RangeBounds};

use alloc::vec::Vec;

use crate::{
    Comparator, Error, IntoIter, Iter, Natural, Ordered, Result, Sortwood, SubList,
    error::check_index,
};

/// A list kept in comparator order, with index access.
///
/// The position of an element is decided by its value, so the positional
/// mutators of an ordinary list ([`add_at`](Self::add_at),
/// [`set`](Self::set)) always fail. Index lookups walk in-order links from
/// the nearer end and cost `O(n)`.
#[derive(Clone)]
pub struct SortedList<E, C = Natural> {
    pub(crate) tree: Sortwood<E, C>,
}

impl<E: Ord> SortedList<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: Sortwood::new(),
        }
    }
}

impl<E: Ord> Default for SortedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C: Comparator<E>> SortedList<E, C> {
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
        let mut list = Self::with_comparator(source.comparator().clone());
        list.tree.reserve(source.iter().len());
        list.extend(source.iter().cloned());
        list
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

    /// Inserts `element` at the position its value dictates.
    pub fn add(&mut self, element: E) {
        self.tree.insert(element);
    }

    /// Always fails: the list decides where elements go.
    pub fn add_at(&mut self, _index: usize, _element: E) -> Result<()> {
        Err(Error::Unsupported("add_at"))
    }

    /// Always fails: overwriting a slot could break the ordering.
    pub fn set(&mut self, _index: usize, _element: E) -> Result<E> {
        Err(Error::Unsupported("set"))
    }

    pub fn get(&self, index: usize) -> Result<&E> {
        check_index(index, self.len())?;
        Ok(self.tree.key(self.tree.node_at(index)))
    }

    pub fn first(&self) -> Option<&E> {
        self.tree.first_element()
    }

    pub fn last(&self) -> Option<&E> {
        self.tree.last_element()
    }

    pub fn remove(&mut self, index: usize) -> Result<E> {
        check_index(index, self.len())?;
        let node = self.tree.node_at(index);
        Ok(self.tree.delete_at(node).element)
    }

    /// Removes the first element equal to `element`.
    pub fn remove_element(&mut self, element: &E) -> bool
    where
        E: PartialEq,
    {
        let node = self.tree.search_idx(element);
        if node == Sortwood::<E, C>::BLACK_NIL {
            return false;
        }
        self.tree.delete_at(node);
        true
    }

    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.tree.contains(element)
    }

    /// Position of the first element equal to `element`.
    pub fn index_of(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.iter().position(|e| self.tree.compare_elements(e, element).is_eq() && e == element)
    }

    /// Position of the last element equal to `element`.
    pub fn last_index_of(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        self.iter()
            .rposition(|e| self.tree.compare_elements(e, element).is_eq() && e == element)
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn iter(&self) -> Iter<'_, E, C> {
        self.tree.iter()
    }

    /// A cursor positioned before the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, E, C> {
        CursorMut::new(self)
    }

    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }

    /// A view of the elements in `range`.
    pub fn sub_list<R: RangeBounds<usize>>(&self, range: R) -> Result<SubList> {
        SubList::new(self, range)
    }

    /// A view of the first `to` elements.
    pub fn head_list(&self, to: usize) -> Result<SubList> {
        self.sub_list(..to)
    }

    /// A view of the elements from position `from` on.
    pub fn tail_list(&self, from: usize) -> Result<SubList> {
        self.sub_list(from..)
    }

    /// A view of the elements `e` with `from <= e < to`.
    pub fn sub_list_by_element(&self, from: &E, to: &E) -> Result<SubList> {
        if self.tree.compare_elements(from, to).is_gt() {
            return Err(Error::InvalidElementRange);
        }

        let start = self.rank(from);
        let end = self.rank(to);
        self.sub_list(start..end)
    }

    /// Number of elements strictly less than `element`.
    fn rank(&self, element: &E) -> usize {
        self.iter()
            .take_while(|e| self.tree.compare_elements(e, element).is_lt())
            .count()
    }
}

impl<E, C: Comparator<E>> Extend<E> for SortedList<E, C> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<E: Ord> FromIterator<E> for SortedList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<E, C: Comparator<E>> Ordered<E> for SortedList<E, C> {
    type Comparator = C;

    fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    fn iter(&self) -> Iter<'_, E, C> {
        self.tree.iter()
    }
}

impl<'a, E, C: Comparator<E>> IntoIterator for &'a SortedList<E, C> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, C: Comparator<E>> IntoIterator for SortedList<E, C> {
    type Item = E;
    type IntoIter = IntoIter<E, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<E: fmt::Debug, C: Comparator<E>> fmt::Debug for SortedList<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A position-tracking cursor over a [`SortedList`] that can remove the
/// element it last returned.
///
/// The cursor sits between two elements. [`next`](Self::next) returns the one
/// after it and moves forward, [`previous`](Self::previous) returns the one
/// before it and moves back.
pub struct CursorMut<'a, E, C> {
    list: &'a mut SortedList<E, C>,
    next: usize,
    next_index: usize,
    last_returned: usize,
    expected_mod_count: u64,
}

impl<'a, E, C: Comparator<E>> CursorMut<'a, E, C> {
    const NONE: usize = Sortwood::<E, C>::BLACK_NIL;

    fn new(list: &'a mut SortedList<E, C>) -> Self {
        let next = list.tree.minimum();
        let expected_mod_count = list.modification_count();

        Self {
            list,
            next,
            next_index: 0,
            last_returned: Self::NONE,
            expected_mod_count,
        }
    }

    fn check_for_comodification(&self) {
        debug_assert_eq!(
            self.expected_mod_count,
            self.list.modification_count(),
            "list modified behind the cursor"
        );
    }

    pub fn has_next(&self) -> bool {
        self.next != Self::NONE
    }

    pub fn has_previous(&self) -> bool {
        self.next_index > 0
    }

    /// Index of the element [`next`](Self::next) would return.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Index of the element [`previous`](Self::previous) would return.
    pub fn previous_index(&self) -> Option<usize> {
        self.next_index.checked_sub(1)
    }

    pub fn next(&mut self) -> Option<&E> {
        self.check_for_comodification();

        if self.next == Self::NONE {
            return None;
        }

        let node = self.next;
        self.next = self.list.tree.successor_of(node);
        self.next_index += 1;
        self.last_returned = node;

        Some(self.list.tree.key(node))
    }

    pub fn previous(&mut self) -> Option<&E> {
        self.check_for_comodification();

        if self.next_index == 0 {
            return None;
        }

        let node = if self.next == Self::NONE {
            self.list.tree.maximum()
        } else {
            self.list.tree.predecessor_of(self.next)
        };
        self.next = node;
        self.next_index -= 1;
        self.last_returned = node;

        Some(self.list.tree.key(node))
    }

    /// Removes the element last returned by [`next`](Self::next) or
    /// [`previous`](Self::previous).
    pub fn remove(&mut self) -> Result<E> {
        self.check_for_comodification();

        if self.last_returned == Self::NONE {
            return Err(Error::IllegalState("no element to remove"));
        }

        // Walking forward, the returned element sits just before the cursor.
        if self.last_returned != self.next {
            self.next_index -= 1;
        }

        let unlinked = self.list.tree.delete_at(self.last_returned);
        self.next = unlinked.next;
        self.last_returned = Self::NONE;
        self.expected_mod_count = self.list.modification_count();

        Ok(unlinked.element)
    }

    /// Always fails: the list decides where elements go.
    pub fn set(&mut self, _element: E) -> Result<()> {
        Err(Error::Unsupported("set"))
    }

    /// Always fails: the list decides where elements go.
    pub fn add(&mut self, _element: E) -> Result<()> {
        Err(Error::Unsupported("add"))
    }
}
