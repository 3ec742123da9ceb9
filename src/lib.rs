//! Red-black tree based sorted containers.
//!
//! Every container in this crate is a thin adapter over [`Sortwood`], an
//! arena-allocated red-black tree ordered by a [`Comparator`]:
//!
//! - [`SortedList`]: index access and live sub-range views ([`SubList`]).
//! - [`SortedQueue`] and [`SortedDeque`]: priority order, head and tail access.
//! - [`BoundedQueue`]: a capacity-restricted queue evicting its lowest-priority
//!   element.
//!
//! Elements that compare equal keep their insertion order.
//!
//! None of these types are synchronized. Wrap a whole container behind a lock
//! when sharing it between threads.
extern crate alloc;

use core::{
    cmp::Ordering,
    sync::atomic::{self, AtomicU64},
};

use alloc::vec::Vec;

mod bounded;
mod compare;
mod deque;
mod error;
mod iter;
mod list;
mod queue;
mod view;

#[cfg(test)]
mod model;

pub use bounded::{BoundedQueue, Capacity};
pub use compare::{Comparator, Descending, Natural, Ordered};
pub use deque::SortedDeque;
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter};
pub use list::{CursorMut, SortedList};
pub use queue::SortedQueue;
pub use view::SubList;

/*
vacant cells are chained into a free list through their `parent` link. `free` holds the head.
- allocating takes the head, new head is head = storage[head].parent
- freeing a cell sets storage[cell].parent = head, and then head = cell

slot 0 is the black nil sentinel. It is never written to, so every leaf link can point at it.
*/

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum NodeColor {
    #[default]
    Red,
    Black,
}

#[derive(Debug, Clone)]
struct SortwoodNode<E> {
    element: Option<E>,
    color: NodeColor,
    generation: u32,
    parent: usize,
    left: usize,
    right: usize,
}

impl<E> SortwoodNode<E> {
    fn sentinel() -> Self {
        Self {
            element: None,
            color: NodeColor::Black,
            generation: 0,
            parent: 0,
            left: 0,
            right: 0,
        }
    }

    fn new_isolated(element: E, parent: usize) -> Self {
        Self {
            element: Some(element),
            color: NodeColor::default(),
            generation: 0,
            parent,
            left: 0,
            right: 0,
        }
    }
}

/// A handle to a node of a [`Sortwood`] tree.
///
/// Handles are checked on use: once the node they designate is freed, the
/// tree rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: usize,
    generation: u32,
}

/// The outcome of [`Sortwood::delete`].
#[derive(Debug)]
pub struct Removed<E> {
    /// The element that was removed.
    pub element: E,
    /// The slot that was physically unlinked.
    ///
    /// When the deleted node had two children, its in-order successor's
    /// element moves into it and the successor's slot is freed instead.
    pub freed: NodeRef,
    /// The node now holding the element that followed the removed one.
    pub next: Option<NodeRef>,
}

/// Internal result of unlinking a node, expressed in raw slot indices.
pub(crate) struct Unlinked<E> {
    pub(crate) element: E,
    pub(crate) freed: usize,
    pub(crate) freed_generation: u32,
    pub(crate) next: usize,
}

/// A red-black tree ordered by `C`, tracking its minimum and maximum.
///
/// Equal elements descend to the right, so in-order traversal visits them in
/// insertion order.
#[derive(Debug)]
pub struct Sortwood<E, C = Natural> {
    id: u64,
    storage: Vec<SortwoodNode<E>>,
    root: usize,
    minimum: usize,
    maximum: usize,
    free: usize,
    len: usize,
    mod_count: u64,
    comparator: C,
}

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

fn next_tree_id() -> u64 {
    NEXT_TREE_ID.fetch_add(1, atomic::Ordering::Relaxed)
}

/// A clone is a distinct tree and gets its own identity.
impl<E: Clone, C: Clone> Clone for Sortwood<E, C> {
    fn clone(&self) -> Self {
        Self {
            id: next_tree_id(),
            storage: self.storage.clone(),
            root: self.root,
            minimum: self.minimum,
            maximum: self.maximum,
            free: self.free,
            len: self.len,
            mod_count: self.mod_count,
            comparator: self.comparator.clone(),
        }
    }
}

impl<E: Ord> Sortwood<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut tree = Self::new();
        tree.reserve(capacity);
        tree
    }
}

impl<E: Ord> Default for Sortwood<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, C: Comparator<E>> Sortwood<E, C> {
    pub(crate) const BLACK_NIL: usize = 0;

    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            id: next_tree_id(),
            storage: alloc::vec![SortwoodNode::sentinel()],
            root: Self::BLACK_NIL,
            minimum: Self::BLACK_NIL,
            maximum: Self::BLACK_NIL,
            free: Self::BLACK_NIL,
            len: 0,
            mod_count: 0,
            comparator,
        }
    }

    /// Reserves room for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Number of structural changes (insertions and deletions) so far.
    #[must_use]
    pub fn modification_count(&self) -> u64 {
        self.mod_count
    }

    /// Unique per tree, including clones.
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    /// Inserts `element`, returning a handle to its node.
    pub fn insert(&mut self, element: E) -> NodeRef {
        let mut current_node = self.root;
        let mut parent_node = Self::BLACK_NIL;
        let mut went_left = false;

        while current_node != Self::BLACK_NIL {
            parent_node = current_node;
            went_left = self.compare(&element, current_node) == Ordering::Less;

            current_node = if went_left {
                self.storage[current_node].left
            } else {
                self.storage[current_node].right
            };
        }

        let is_minimum =
            self.minimum == Self::BLACK_NIL || self.compare(&element, self.minimum) == Ordering::Less;
        let is_maximum = self.maximum == Self::BLACK_NIL
            || self.compare(&element, self.maximum) != Ordering::Less;

        let new_node_pos = self.allocate(element, parent_node);

        if parent_node == Self::BLACK_NIL {
            self.root = new_node_pos;
        } else if went_left {
            self.storage[parent_node].left = new_node_pos;
        } else {
            self.storage[parent_node].right = new_node_pos;
        }

        if is_minimum {
            self.minimum = new_node_pos;
        }
        if is_maximum {
            self.maximum = new_node_pos;
        }

        self.fix_red_violation(new_node_pos);

        self.len += 1;
        self.mod_count += 1;

        self.node_ref(new_node_pos)
    }

    /// Removes the node designated by `node`.
    ///
    /// Returns `None` when the handle no longer designates a live node.
    pub fn delete(&mut self, node: NodeRef) -> Option<Removed<E>> {
        let idx = self.resolve(node)?;
        let unlinked = self.delete_at(idx);

        Some(Removed {
            element: unlinked.element,
            freed: NodeRef {
                index: unlinked.freed,
                generation: unlinked.freed_generation,
            },
            next: self.live_ref(unlinked.next),
        })
    }

    /// Finds the node holding `element`.
    ///
    /// A node matches when it is equal to `element` under both the comparator
    /// and `==`. Among several matches the first one in order is returned.
    pub fn search(&self, element: &E) -> Option<NodeRef>
    where
        E: PartialEq,
    {
        self.live_ref(self.search_idx(element))
    }

    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.search_idx(element) != Self::BLACK_NIL
    }

    /// Returns the first node whose element is not less than `element`.
    pub fn lower_bound(&self, element: &E) -> Option<NodeRef> {
        self.live_ref(self.find_lower_bound(element))
    }

    /// The cached minimum.
    pub fn first(&self) -> Option<NodeRef> {
        self.live_ref(self.minimum)
    }

    /// The cached maximum.
    pub fn last(&self) -> Option<NodeRef> {
        self.live_ref(self.maximum)
    }

    pub fn first_element(&self) -> Option<&E> {
        self.element(self.minimum)
    }

    pub fn last_element(&self) -> Option<&E> {
        self.element(self.maximum)
    }

    pub fn get(&self, node: NodeRef) -> Option<&E> {
        self.element(self.resolve(node)?)
    }

    pub fn successor(&self, node: NodeRef) -> Option<NodeRef> {
        let idx = self.resolve(node)?;
        self.live_ref(self.successor_of(idx))
    }

    pub fn predecessor(&self, node: NodeRef) -> Option<NodeRef> {
        let idx = self.resolve(node)?;
        self.live_ref(self.predecessor_of(idx))
    }

    pub fn pop_first(&mut self) -> Option<E> {
        if self.minimum == Self::BLACK_NIL {
            return None;
        }
        Some(self.delete_at(self.minimum).element)
    }

    pub fn pop_last(&mut self) -> Option<E> {
        if self.maximum == Self::BLACK_NIL {
            return None;
        }
        Some(self.delete_at(self.maximum).element)
    }

    /// Removes every element. Outstanding handles become stale.
    pub fn clear(&mut self) {
        if self.len == 0 {
            return;
        }

        for idx in 1..self.storage.len() {
            if self.storage[idx].element.is_some() {
                self.release(idx);
            }
        }

        self.root = Self::BLACK_NIL;
        self.minimum = Self::BLACK_NIL;
        self.maximum = Self::BLACK_NIL;
        self.len = 0;
        self.mod_count += 1;
    }

    pub fn iter(&self) -> Iter<'_, E, C> {
        Iter::new(self, self.minimum, self.maximum, self.len)
    }

    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        let root = &self.storage[self.root];
        assert_eq!(root.color, NodeColor::Black, "root must be black");
        assert_eq!(root.parent, Self::BLACK_NIL, "root must not have a parent");
        assert_eq!(
            self.storage[Self::BLACK_NIL].color,
            NodeColor::Black,
            "sentinel must stay black"
        );

        self.black_height(self.root);

        let mut in_order = Vec::with_capacity(self.len);
        self.collect_in_order(self.root, &mut in_order);
        assert_eq!(in_order.len(), self.len, "length out of sync");

        for pair in in_order.windows(2) {
            assert_ne!(
                self.compare(self.key(pair[0]), pair[1]),
                Ordering::Greater,
                "in-order traversal is not sorted"
            );
        }

        let (first, last) = match (in_order.first(), in_order.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => (Self::BLACK_NIL, Self::BLACK_NIL),
        };
        assert_eq!(self.minimum, first, "cached minimum is stale");
        assert_eq!(self.maximum, last, "cached maximum is stale");
    }

    fn black_height(&self, node: usize) -> usize {
        if node == Self::BLACK_NIL {
            return 1;
        }

        let node_storage = &self.storage[node];
        for child in [node_storage.left, node_storage.right] {
            if child != Self::BLACK_NIL {
                assert_eq!(self.storage[child].parent, node, "broken parent link");
                if node_storage.color == NodeColor::Red {
                    assert_eq!(
                        self.storage[child].color,
                        NodeColor::Black,
                        "red node with a red child"
                    );
                }
            }
        }

        let left_height = self.black_height(node_storage.left);
        let right_height = self.black_height(node_storage.right);
        assert_eq!(left_height, right_height, "unequal black heights");

        left_height + usize::from(node_storage.color == NodeColor::Black)
    }

    fn collect_in_order(&self, node: usize, out: &mut Vec<usize>) {
        if node == Self::BLACK_NIL {
            return;
        }
        self.collect_in_order(self.storage[node].left, out);
        out.push(node);
        self.collect_in_order(self.storage[node].right, out);
    }
}

// Slot-level plumbing shared with the container adapters.
impl<E, C: Comparator<E>> Sortwood<E, C> {
    #[inline]
    fn compare(&self, element: &E, node: usize) -> Ordering {
        self.comparator.compare(element, self.key(node))
    }

    #[inline]
    pub(crate) fn compare_elements(&self, a: &E, b: &E) -> Ordering {
        self.comparator.compare(a, b)
    }

    /// The element of a live node.
    #[inline]
    pub(crate) fn key(&self, node: usize) -> &E {
        match self.storage[node].element.as_ref() {
            Some(element) => element,
            None => unreachable!("node {node} is vacant"),
        }
    }

    #[inline]
    pub(crate) fn element(&self, node: usize) -> Option<&E> {
        self.storage.get(node)?.element.as_ref()
    }

    #[inline]
    pub(crate) fn minimum(&self) -> usize {
        self.minimum
    }

    #[inline]
    pub(crate) fn maximum(&self) -> usize {
        self.maximum
    }

    fn node_ref(&self, node: usize) -> NodeRef {
        NodeRef {
            index: node,
            generation: self.storage[node].generation,
        }
    }

    fn live_ref(&self, node: usize) -> Option<NodeRef> {
        (node != Self::BLACK_NIL).then(|| self.node_ref(node))
    }

    fn resolve(&self, node: NodeRef) -> Option<usize> {
        let slot = self.storage.get(node.index)?;

        (node.index != Self::BLACK_NIL
            && slot.generation == node.generation
            && slot.element.is_some())
        .then_some(node.index)
    }

    fn allocate(&mut self, element: E, parent: usize) -> usize {
        if self.free == Self::BLACK_NIL {
            self.storage
                .push(SortwoodNode::new_isolated(element, parent));
            return self.storage.len() - 1;
        }

        let idx = self.free;
        let slot = &mut self.storage[idx];
        self.free = slot.parent;

        slot.element = Some(element);
        slot.color = NodeColor::Red;
        slot.parent = parent;
        slot.left = Self::BLACK_NIL;
        slot.right = Self::BLACK_NIL;

        idx
    }

    /// Vacates a slot and pushes it on the free list.
    fn release(&mut self, node: usize) -> (E, u32) {
        let slot = &mut self.storage[node];
        let generation = slot.generation;
        let element = match slot.element.take() {
            Some(element) => element,
            None => unreachable!("double free of node {node}"),
        };

        slot.generation = slot.generation.wrapping_add(1);
        slot.parent = self.free;
        slot.left = Self::BLACK_NIL;
        slot.right = Self::BLACK_NIL;
        self.free = node;

        (element, generation)
    }

    pub(crate) fn successor_of(&self, node: usize) -> usize {
        let right = self.storage[node].right;
        if right != Self::BLACK_NIL {
            return self.leftmost(right);
        }

        let mut child = node;
        let mut parent = self.storage[node].parent;
        while parent != Self::BLACK_NIL && self.storage[parent].right == child {
            child = parent;
            parent = self.storage[parent].parent;
        }
        parent
    }

    pub(crate) fn predecessor_of(&self, node: usize) -> usize {
        let left = self.storage[node].left;
        if left != Self::BLACK_NIL {
            return self.rightmost(left);
        }

        let mut child = node;
        let mut parent = self.storage[node].parent;
        while parent != Self::BLACK_NIL && self.storage[parent].left == child {
            child = parent;
            parent = self.storage[parent].parent;
        }
        parent
    }

    fn leftmost(&self, mut node: usize) -> usize {
        while self.storage[node].left != Self::BLACK_NIL {
            node = self.storage[node].left;
        }
        node
    }

    fn rightmost(&self, mut node: usize) -> usize {
        while self.storage[node].right != Self::BLACK_NIL {
            node = self.storage[node].right;
        }
        node
    }

    /// The node at in-order position `index`, walking from the nearer end.
    ///
    /// `index` must be below `len`.
    pub(crate) fn node_at(&self, index: usize) -> usize {
        debug_assert!(index < self.len);

        if index <= self.len / 2 {
            self.walk_forward(self.minimum, index)
        } else {
            self.walk_backward(self.maximum, self.len - 1 - index)
        }
    }

    pub(crate) fn walk_forward(&self, mut node: usize, steps: usize) -> usize {
        for _ in 0..steps {
            node = self.successor_of(node);
        }
        node
    }

    pub(crate) fn walk_backward(&self, mut node: usize, steps: usize) -> usize {
        for _ in 0..steps {
            node = self.predecessor_of(node);
        }
        node
    }

    pub(crate) fn find_lower_bound(&self, element: &E) -> usize {
        let mut current_node = self.root;
        let mut candidate = Self::BLACK_NIL;

        while current_node != Self::BLACK_NIL {
            if self.compare(element, current_node) == Ordering::Greater {
                current_node = self.storage[current_node].right;
            } else {
                candidate = current_node;
                current_node = self.storage[current_node].left;
            }
        }

        candidate
    }

    pub(crate) fn search_idx(&self, element: &E) -> usize
    where
        E: PartialEq,
    {
        // Comparator ties may sit on both sides of a node after rotations,
        // so scan the whole run of ties starting at the lower bound.
        let mut current_node = self.find_lower_bound(element);

        while current_node != Self::BLACK_NIL
            && self.compare(element, current_node) == Ordering::Equal
        {
            if self.key(current_node) == element {
                return current_node;
            }
            current_node = self.successor_of(current_node);
        }

        Self::BLACK_NIL
    }

    /// Unlinks a live node and rebalances.
    pub(crate) fn delete_at(&mut self, node: usize) -> Unlinked<E> {
        let node_storage = &self.storage[node];

        let (target, next) =
            if node_storage.left != Self::BLACK_NIL && node_storage.right != Self::BLACK_NIL {
                let successor = self.leftmost(node_storage.right);

                let moved = self.storage[successor].element.take();
                let removed = core::mem::replace(&mut self.storage[node].element, moved);
                self.storage[successor].element = removed;

                if successor == self.maximum {
                    self.maximum = node;
                }

                (successor, node)
            } else {
                let next = self.successor_of(node);

                if node == self.minimum {
                    self.minimum = next;
                }
                if node == self.maximum {
                    self.maximum = self.predecessor_of(node);
                }

                (node, next)
            };

        self.splice(target);

        let (element, freed_generation) = self.release(target);
        self.len -= 1;
        self.mod_count += 1;

        Unlinked {
            element,
            freed: target,
            freed_generation,
            next,
        }
    }

    /// Replaces `node`, which has at most one child, by that child.
    fn splice(&mut self, node: usize) {
        let node_storage = &self.storage[node];
        let child = if node_storage.left != Self::BLACK_NIL {
            node_storage.left
        } else {
            node_storage.right
        };
        let parent = node_storage.parent;
        let removed_color = node_storage.color;

        if child != Self::BLACK_NIL {
            self.storage[child].parent = parent;
        }

        if parent == Self::BLACK_NIL {
            self.root = child;
        } else if self.storage[parent].left == node {
            self.storage[parent].left = child;
        } else {
            self.storage[parent].right = child;
        }

        if removed_color == NodeColor::Black {
            self.fix_black_violation(child, parent);
        }
    }

    fn is_red(&self, node: usize) -> bool {
        matches!(self.storage[node].color, NodeColor::Red)
    }

    fn fix_red_violation(&mut self, start_node_idx: usize) {
        let mut curr_node = start_node_idx;

        while self.is_red(self.storage[curr_node].parent) {
            let parent_idx = self.storage[curr_node].parent;
            // A red parent is never the root, so the grandparent exists.
            let grandparent_idx = self.storage[parent_idx].parent;
            let grandparent = &self.storage[grandparent_idx];

            let parent_is_right_child = grandparent.right == parent_idx;
            let uncle = if parent_is_right_child {
                grandparent.left
            } else {
                grandparent.right
            };

            if self.is_red(uncle) {
                self.storage[parent_idx].color = NodeColor::Black;
                self.storage[uncle].color = NodeColor::Black;
                self.storage[grandparent_idx].color = NodeColor::Red;

                curr_node = grandparent_idx;
                continue;
            }

            let parent = &self.storage[parent_idx];
            if (parent_is_right_child && parent.left == curr_node)
                || (!parent_is_right_child && parent.right == curr_node)
            {
                if parent_is_right_child {
                    self.rotate_right(parent_idx);
                } else {
                    self.rotate_left(parent_idx);
                }

                curr_node = parent_idx;
                continue;
            }

            self.storage[parent_idx].color = NodeColor::Black;
            self.storage[grandparent_idx].color = NodeColor::Red;

            if parent_is_right_child {
                self.rotate_left(grandparent_idx);
            } else {
                self.rotate_right(grandparent_idx);
            }
        }

        self.storage[self.root].color = NodeColor::Black;
    }

    /// Restores equal black heights after a black node was spliced out.
    ///
    /// `node` took the removed node's place (possibly as nil), below `parent`.
    fn fix_black_violation(&mut self, mut node: usize, mut parent: usize) {
        while node != self.root && !self.is_red(node) {
            if self.storage[parent].left == node {
                let mut sibling = self.storage[parent].right;

                if self.is_red(sibling) {
                    self.storage[sibling].color = NodeColor::Black;
                    self.storage[parent].color = NodeColor::Red;
                    self.rotate_left(parent);
                    sibling = self.storage[parent].right;
                }

                let sibling_storage = &self.storage[sibling];
                if !self.is_red(sibling_storage.left) && !self.is_red(sibling_storage.right) {
                    self.storage[sibling].color = NodeColor::Red;
                    node = parent;
                    parent = self.storage[node].parent;
                    continue;
                }

                if !self.is_red(sibling_storage.right) {
                    let inner = sibling_storage.left;
                    self.storage[inner].color = NodeColor::Black;
                    self.storage[sibling].color = NodeColor::Red;
                    self.rotate_right(sibling);
                    sibling = self.storage[parent].right;
                }

                self.storage[sibling].color = self.storage[parent].color;
                self.storage[parent].color = NodeColor::Black;
                let outer = self.storage[sibling].right;
                self.storage[outer].color = NodeColor::Black;
                self.rotate_left(parent);
            } else {
                let mut sibling = self.storage[parent].left;

                if self.is_red(sibling) {
                    self.storage[sibling].color = NodeColor::Black;
                    self.storage[parent].color = NodeColor::Red;
                    self.rotate_right(parent);
                    sibling = self.storage[parent].left;
                }

                let sibling_storage = &self.storage[sibling];
                if !self.is_red(sibling_storage.left) && !self.is_red(sibling_storage.right) {
                    self.storage[sibling].color = NodeColor::Red;
                    node = parent;
                    parent = self.storage[node].parent;
                    continue;
                }

                if !self.is_red(sibling_storage.left) {
                    let inner = sibling_storage.right;
                    self.storage[inner].color = NodeColor::Black;
                    self.storage[sibling].color = NodeColor::Red;
                    self.rotate_left(sibling);
                    sibling = self.storage[parent].left;
                }

                self.storage[sibling].color = self.storage[parent].color;
                self.storage[parent].color = NodeColor::Black;
                let outer = self.storage[sibling].left;
                self.storage[outer].color = NodeColor::Black;
                self.rotate_right(parent);
            }

            node = self.root;
            break;
        }

        if node != Self::BLACK_NIL {
            self.storage[node].color = NodeColor::Black;
        }
    }

    fn rotate_left(&mut self, center: usize) {
        let grandparent_idx = self.storage[center].parent;
        let sibling_idx = self.storage[center].right;

        let c_idx = self.storage[sibling_idx].left;

        self.storage[center].right = c_idx;
        if c_idx != Self::BLACK_NIL {
            self.storage[c_idx].parent = center;
        }

        self.storage[sibling_idx].left = center;
        self.storage[center].parent = sibling_idx;
        self.storage[sibling_idx].parent = grandparent_idx;

        if grandparent_idx != Self::BLACK_NIL {
            if self.storage[grandparent_idx].right == center {
                self.storage[grandparent_idx].right = sibling_idx;
            } else {
                self.storage[grandparent_idx].left = sibling_idx;
            }
        } else {
            self.root = sibling_idx;
        }
    }

    fn rotate_right(&mut self, center: usize) {
        let grandparent_idx = self.storage[center].parent;
        let sibling_idx = self.storage[center].left;

        let c_idx = self.storage[sibling_idx].right;

        self.storage[center].left = c_idx;
        if c_idx != Self::BLACK_NIL {
            self.storage[c_idx].parent = center;
        }

        self.storage[sibling_idx].right = center;
        self.storage[center].parent = sibling_idx;
        self.storage[sibling_idx].parent = grandparent_idx;

        if grandparent_idx != Self::BLACK_NIL {
            if self.storage[grandparent_idx].right == center {
                self.storage[grandparent_idx].right = sibling_idx;
            } else {
                self.storage[grandparent_idx].left = sibling_idx;
            }
        } else {
            self.root = sibling_idx;
        }
    }
}

impl<E, C: Comparator<E>> Extend<E> for Sortwood<E, C> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<E: Ord> FromIterator<E> for Sortwood<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<E, C: Comparator<E>> Ordered<E> for Sortwood<E, C> {
    type Comparator = C;

    fn comparator(&self) -> &C {
        &self.comparator
    }

    fn iter(&self) -> Iter<'_, E, C> {
        Sortwood::iter(self)
    }
}

impl<'a, E, C: Comparator<E>> IntoIterator for &'a Sortwood<E, C> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, C: Comparator<E>> IntoIterator for Sortwood<E, C> {
    type Item = E;
    type IntoIter = IntoIter<E, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
