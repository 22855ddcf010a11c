use hrm_store::collections::BoundedStack;
use proptest::prelude::*;

proptest! {
    #[test]
    fn keeps_only_most_recent(capacity in 1usize..64, extra in 0usize..64) {
        let mut stack = BoundedStack::new(capacity);
        let total = capacity + extra;
        let mut evicted = Vec::new();
        for v in 0..total {
            if let Some(old) = stack.push(v) {
                evicted.push(old);
            }
        }

        prop_assert_eq!(stack.len(), capacity);
        prop_assert_eq!(evicted, (0..extra).collect::<Vec<_>>());

        let mut popped = Vec::new();
        while let Some(v) = stack.pop() {
            popped.push(v);
        }
        let expected: Vec<usize> = (extra..total).rev().collect();
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn never_exceeds_capacity(capacity in 0usize..16, pushes in prop::collection::vec(any::<bool>(), 0..100)) {
        let mut stack = BoundedStack::new(capacity);
        for (i, push) in pushes.into_iter().enumerate() {
            if push {
                stack.push(i);
            } else {
                stack.pop();
            }
            prop_assert!(stack.len() <= stack.capacity());
            prop_assert!(stack.capacity() >= 1);
        }
    }
}
