use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 50;

/// LIFO stack that never grows past its capacity.
///
/// Pushing onto a full stack drops the bottom element (the oldest one still
/// resident) before the new value becomes the top.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    // front = bottom, back = top
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T> BoundedStack<T> {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes `value`, returning the evicted bottom element if the stack
    /// was full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(value);
        evicted
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut stack = BoundedStack::new(3);
        stack.push('a');
        stack.push('b');
        assert_eq!(stack.peek(), Some(&'b'));
        assert_eq!(stack.pop(), Some('b'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn overflow_evicts_the_bottom() {
        let mut stack = BoundedStack::new(2);
        assert_eq!(stack.push(1), None);
        assert_eq!(stack.push(2), None);
        assert_eq!(stack.push(3), Some(1));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut stack = BoundedStack::new(0);
        stack.push(1);
        assert_eq!(stack.push(2), Some(1));
        assert_eq!(stack.capacity(), 1);
        assert_eq!(stack.peek(), Some(&2));
    }

    #[test]
    fn default_capacity_is_fifty() {
        let stack: BoundedStack<u8> = BoundedStack::default();
        assert_eq!(stack.capacity(), DEFAULT_CAPACITY);
        assert!(stack.is_empty());
    }
}
