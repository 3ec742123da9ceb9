//! Model-based tests: every container is driven side by side with a `Vec`
//! kept in stable sorted order.
extern crate std;

use core::{cmp::Ordering, ops::Range};
use std::prelude::v1::*;

use proptest::prelude::*;

use crate::{BoundedQueue, Error, SortedDeque, SortedList};

/// A key compared by the containers, tagged with a unique insertion number.
type Item = (u8, u32);

fn by_key(a: &Item, b: &Item) -> Ordering {
    a.0.cmp(&b.0)
}

fn model_insert(model: &mut Vec<Item>, item: Item) {
    let pos = model.partition_point(|e| e.0 <= item.0);
    model.insert(pos, item);
}

#[derive(Copy, Clone, Debug)]
pub enum ListOp {
    Add(u8),
    RemoveAt(usize),
    RemoveElement(usize),
    Get(usize),
    ViewRemove { start: usize, len: usize, index: usize },
    CursorRemoveEvery(u32),
    Clear,
}

fn list_op_strategy() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        8 => (0u8..16).prop_map(ListOp::Add),
        2 => (0usize..64).prop_map(ListOp::RemoveAt),
        2 => (0usize..64).prop_map(ListOp::RemoveElement),
        2 => (0usize..64).prop_map(ListOp::Get),
        2 => (0usize..32, 0usize..16, 0usize..16)
            .prop_map(|(start, len, index)| ListOp::ViewRemove { start, len, index }),
        1 => (2u32..6).prop_map(ListOp::CursorRemoveEvery),
        1 => Just(ListOp::Clear),
    ]
}

fn run_list_equivalence(ops: Vec<ListOp>) {
    let mut list = SortedList::with_comparator(by_key);
    let mut model: Vec<Item> = Vec::new();
    let mut seq = 0u32;

    for op in ops {
        match op {
            ListOp::Add(key) => {
                seq += 1;
                list.add((key, seq));
                model_insert(&mut model, (key, seq));
            }
            ListOp::RemoveAt(index) => {
                let expected = if index < model.len() {
                    Ok(model.remove(index))
                } else {
                    Err(Error::IndexOutOfBounds {
                        index,
                        len: model.len(),
                    })
                };
                assert_eq!(list.remove(index), expected);
            }
            ListOp::RemoveElement(index) => {
                if model.is_empty() {
                    assert!(!list.remove_element(&(0, 0)));
                } else {
                    let item = model.remove(index % model.len());
                    assert!(list.remove_element(&item));
                }
            }
            ListOp::Get(index) => {
                let count = list.modification_count();
                assert_eq!(list.get(index).ok(), model.get(index));
                assert_eq!(list.modification_count(), count);
            }
            ListOp::ViewRemove { start, len, index } => {
                if start + len > model.len() {
                    assert!(list.sub_list(start..start + len).is_err());
                    continue;
                }

                let mut view = list.sub_list(start..start + len).expect("range in bounds");
                if index < len {
                    assert_eq!(view.remove(&mut list, index), Ok(model.remove(start + index)));
                    let rest: Vec<Item> = view.iter(&list).expect("view in sync").copied().collect();
                    assert_eq!(rest, model[start..start + len - 1]);
                } else {
                    assert!(view.remove(&mut list, index).is_err());
                }
            }
            ListOp::CursorRemoveEvery(step) => {
                let mut cursor = list.cursor_mut();
                while let Some(&item) = cursor.next() {
                    if item.1 % step == 0 {
                        assert_eq!(cursor.remove(), Ok(item));
                    }
                }
                model.retain(|item| item.1 % step != 0);
            }
            ListOp::Clear => {
                list.clear();
                model.clear();
            }
        }

        list.tree.assert_invariants();
        assert_eq!(list.len(), model.len());
        assert_eq!(list.to_vec(), model);
        assert_eq!(list.first(), model.first());
        assert_eq!(list.last(), model.last());
    }
}

#[derive(Copy, Clone, Debug)]
pub enum QueueOp {
    Offer(u8),
    PollFirst,
    PollLast,
}

fn queue_op_strategy() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        4 => (0u8..32).prop_map(QueueOp::Offer),
        1 => Just(QueueOp::PollFirst),
        1 => Just(QueueOp::PollLast),
    ]
}

fn run_deque_equivalence(ops: Vec<QueueOp>) {
    let mut deque = SortedDeque::with_comparator(by_key);
    let mut model: Vec<Item> = Vec::new();
    let mut seq = 0u32;

    for op in ops {
        match op {
            QueueOp::Offer(key) => {
                seq += 1;
                assert!(deque.offer((key, seq)));
                model_insert(&mut model, (key, seq));
            }
            QueueOp::PollFirst => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(deque.poll_first(), expected);
            }
            QueueOp::PollLast => assert_eq!(deque.poll_last(), model.pop()),
        }

        assert_eq!(deque.peek_first(), model.first());
        assert_eq!(deque.peek_last(), model.last());
        assert!(deque.descending_iter().eq(model.iter().rev()));
    }
}

fn run_bounded_equivalence(max_size: usize, ops: Vec<QueueOp>) {
    let mut queue = BoundedQueue::new(max_size);
    let mut model: Vec<u8> = Vec::new();

    for op in ops {
        match op {
            QueueOp::Offer(key) => {
                let accepted = if model.len() < max_size {
                    true
                } else if model.first().is_some_and(|&head| key > head) {
                    model.remove(0);
                    true
                } else {
                    false
                };
                if accepted {
                    let pos = model.partition_point(|&e| e <= key);
                    model.insert(pos, key);
                }
                assert_eq!(queue.offer(key), accepted);
            }
            QueueOp::PollFirst => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(queue.poll(), expected);
            }
            // No tail access on a bounded queue.
            QueueOp::PollLast => {
                assert_eq!(queue.peek(), model.first());
            }
        }

        assert!(queue.len() <= max_size);
        assert!(queue.iter().eq(model.iter()));
    }
}

#[cfg(miri)]
const FUZZ_RANGE: Range<usize> = 0..10;

#[cfg(not(miri))]
const FUZZ_RANGE: Range<usize> = 0..300;

proptest::proptest! {
    #![proptest_config(ProptestConfig {
        max_shrink_iters: 65536,
        .. ProptestConfig::default()
    })]

    #[test]
    fn list_equivalence(ops in proptest::collection::vec(list_op_strategy(), FUZZ_RANGE)) {
        run_list_equivalence(ops);
    }

    #[test]
    fn deque_equivalence(ops in proptest::collection::vec(queue_op_strategy(), FUZZ_RANGE)) {
        run_deque_equivalence(ops);
    }

    #[test]
    fn bounded_equivalence(
        max_size in 0usize..12,
        ops in proptest::collection::vec(queue_op_strategy(), FUZZ_RANGE),
    ) {
        run_bounded_equivalence(max_size, ops);
    }
}
