use std::collections::VecDeque;

use proptest::prelude::*;
use ring_queue::RingQueue;

const CAP: usize = 7;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
    ]
}

proptest! {
    #[test]
    fn len_never_exceeds_capacity(values in proptest::collection::vec(any::<i32>(), 0..50)) {
        let mut queue = RingQueue::<_, CAP>::new();
        for v in values {
            queue.push_back(v);
            prop_assert!(queue.len() <= CAP);
        }
    }

    #[test]
    fn queue_holds_the_last_cap_values_pushed(
        values in proptest::collection::vec(any::<i32>(), 0..50),
    ) {
        let mut queue = RingQueue::<_, CAP>::new();
        let mut model = VecDeque::new();
        for &v in &values {
            queue.push_back(v);
            model.push_back(v);
            if model.len() > CAP {
                model.pop_front();
            }
        }

        prop_assert_eq!(queue.len(), model.len());
        prop_assert!(queue.iter().eq(model.iter()));
        prop_assert_eq!(queue.front().ok(), model.front());
        prop_assert_eq!(queue.back().ok(), model.back());
    }

    #[test]
    fn fifo_order_survives_mixed_pushes_and_pops(
        ops in proptest::collection::vec(op(), 0..80),
    ) {
        let mut queue = RingQueue::<_, CAP>::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Op::Push(v) => {
                    let evicted = queue.push_back(v);
                    model.push_back(v);
                    if model.len() > CAP {
                        prop_assert_eq!(evicted, model.pop_front());
                    } else {
                        prop_assert_eq!(evicted, None);
                    }
                }
                Op::Pop => {
                    prop_assert_eq!(queue.pop_front().ok(), model.pop_front());
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert!(queue.iter().eq(model.iter()));
        }
    }

    #[test]
    fn cursor_walk_agrees_with_iterator(
        values in proptest::collection::vec(any::<i32>(), 0..30),
    ) {
        let queue: RingQueue<_, CAP> = values.into_iter().collect();

        prop_assert_eq!(queue.is_empty(), queue.begin() == queue.end());

        let mut walked = Vec::new();
        let mut cursor = queue.begin();
        while cursor != queue.end() {
            walked.push(*cursor.get().unwrap());
            cursor.advance();
        }
        prop_assert!(walked.iter().eq(queue.iter()));
    }

    #[test]
    fn full_queue_walk_yields_exactly_cap_elements(
        values in proptest::collection::vec(any::<i32>(), CAP..30),
    ) {
        let queue: RingQueue<_, CAP> = values.into_iter().collect();
        prop_assert!(queue.is_full());
        prop_assert_ne!(queue.begin(), queue.end());

        let mut count = 0;
        let mut cursor = queue.begin();
        while cursor != queue.end() {
            prop_assert!(cursor.get().is_some());
            cursor.advance();
            count += 1;
        }
        prop_assert_eq!(count, CAP);
    }

    #[test]
    fn drained_queue_accepts_a_fresh_fill(
        values in proptest::collection::vec(any::<i32>(), 0..=CAP),
    ) {
        let mut queue: RingQueue<_, CAP> = values.iter().copied().collect();
        for &v in &values {
            prop_assert_eq!(queue.pop_front(), Ok(v));
        }
        prop_assert_eq!(queue.len(), 0);
        prop_assert!(queue.pop_front().is_err());

        // Refilling behaves as if starting from empty: no evictions until
        // the capacity is reached again.
        for v in 0..CAP as i32 {
            prop_assert_eq!(queue.push_back(v), None);
        }
        prop_assert!(queue.is_full());
    }
}
