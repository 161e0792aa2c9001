//! Property-based tests for LinkedQueue.
//!
//! These tests check FIFO ordering and size bookkeeping against a
//! `VecDeque` model.

use std::collections::VecDeque;

use edu_collections::collections::LinkedQueue;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Add(i32),
    Poll,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<i32>().prop_map(Operation::Add),
        2 => Just(Operation::Poll),
    ]
}

proptest! {
    #[test]
    fn prop_poll_returns_elements_in_insertion_order(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut queue = LinkedQueue::new();
        for element in &elements {
            queue.add(*element);
        }

        let mut polled = Vec::new();
        while let Some(element) = queue.poll() {
            polled.push(element);
        }
        prop_assert_eq!(polled, elements);
        prop_assert!(queue.is_empty());
    }

    #[test]
    fn prop_size_is_adds_minus_polls(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        polls in 0usize..50,
    ) {
        let mut queue: LinkedQueue<i32> = elements.iter().copied().collect();
        let polls = polls.min(elements.len());
        for _ in 0..polls {
            prop_assert!(queue.poll().is_some());
        }
        prop_assert_eq!(queue.size(), elements.len() - polls);
        prop_assert_eq!(queue.is_empty(), queue.size() == 0);
    }

    #[test]
    fn prop_matches_vecdeque_model(operations in prop::collection::vec(operation(), 0..100)) {
        let mut queue = LinkedQueue::new();
        let mut model = VecDeque::new();

        for operation in operations {
            match operation {
                Operation::Add(element) => {
                    queue.add(element);
                    model.push_back(element);
                }
                Operation::Poll => {
                    prop_assert_eq!(queue.poll(), model.pop_front());
                }
            }
            prop_assert_eq!(queue.size(), model.len());
            prop_assert_eq!(queue.peek(), model.front());
        }

        prop_assert!(queue.iter().eq(model.iter()));
    }
}
