use super::arena::Arena;

/// ===============================
/// Doubly linked list over a slot arena
/// ===============================
///
/// Keeps records in insertion order. Positional operations walk from the
/// head; predicate operations scan front to back and stop at the first match.
#[derive(Debug, Clone)]
pub struct OrderedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::default(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn push_front(&mut self, value: T) {
        let idx = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.node_mut(old).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old) => self.node_mut(old).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Inserts so the value ends up at `position`. Positions past the end
    /// append.
    pub fn insert_at(&mut self, position: usize, value: T) {
        if position == 0 {
            return self.push_front(value);
        }
        if position >= self.len {
            return self.push_back(value);
        }

        // 0 < position < len, so both neighbours exist
        let Some(before) = self.index_at(position - 1) else {
            return self.push_back(value);
        };
        let after = self.node(before).next;
        let idx = self.alloc(Node {
            value,
            prev: Some(before),
            next: after,
        });
        self.node_mut(before).next = Some(idx);
        if let Some(after) = after {
            self.node_mut(after).prev = Some(idx);
        }
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|idx| self.unlink(idx))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|idx| self.unlink(idx))
    }

    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        self.index_at(position).map(|idx| self.unlink(idx))
    }

    pub fn remove_first<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let idx = self.position_of(|v| predicate(v))?;
        Some(self.unlink(idx))
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.index_at(position).map(|idx| &self.node(idx).value)
    }

    pub fn find_first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|v| predicate(v))
    }

    pub fn find_first_mut<P>(&mut self, mut predicate: P) -> Option<&mut T>
    where
        P: FnMut(&T) -> bool,
    {
        let idx = self.position_of(|v| predicate(v))?;
        Some(&mut self.node_mut(idx).value)
    }

    /// Replaces the first element matching `predicate`. Returns false when
    /// nothing matched.
    pub fn update_first<P>(&mut self, predicate: P, value: T) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.find_first_mut(predicate) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Front-to-back iterator; `.rev()` walks tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn position_of<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            if predicate(&node.value) {
                return Some(idx);
            }
            cursor = node.next;
        }
        None
    }

    fn index_at(&self, position: usize) -> Option<usize> {
        if position >= self.len {
            return None;
        }
        let mut cursor = self.head;
        for _ in 0..position {
            cursor = cursor.and_then(|idx| self.node(idx).next);
        }
        cursor
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        self.nodes.alloc(node)
    }

    fn unlink(&mut self, idx: usize) -> T {
        let node = self.nodes.release(idx);
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node.value
    }

    fn node(&self, idx: usize) -> &Node<T> {
        self.nodes.get(idx)
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        self.nodes.get_mut(idx)
    }
}

pub struct Iter<'a, T> {
    list: &'a OrderedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> OrderedList<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn push_front_and_back_keep_order() {
        let mut list = OrderedList::new();
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn insert_at_clamps_past_the_end() {
        let mut list = list_of(&[1, 3]);
        list.insert_at(1, 2);
        list.insert_at(99, 4);
        list.insert_at(0, 0);
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn remove_by_position_and_ends() {
        let mut list = list_of(&[1, 2, 3, 4, 5]);
        assert_eq!(list.remove_at(2), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(5));
        assert_eq!(list.remove_at(7), None);
        assert_eq!(list.to_vec(), vec![2, 4]);
    }

    #[test]
    fn predicate_operations_hit_first_match_only() {
        let mut list = list_of(&[5, 8, 8, 9]);
        assert_eq!(list.find_first(|v| *v == 8), Some(&8));
        assert!(list.update_first(|v| *v == 8, 80));
        assert_eq!(list.to_vec(), vec![5, 80, 8, 9]);
        assert_eq!(list.remove_first(|v| *v > 6), Some(80));
        assert_eq!(list.to_vec(), vec![5, 8, 9]);
        assert!(!list.update_first(|v| *v == 42, 0));
        assert_eq!(list.remove_first(|v| *v == 42), None);
    }

    #[test]
    fn backward_iteration_is_restartable() {
        let list = list_of(&[1, 2, 3]);
        let back: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(back, vec![3, 2, 1]);
        let again: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(again, back);
    }

    #[test]
    fn mixed_ends_iteration_meets_in_the_middle() {
        let list = list_of(&[1, 2, 3, 4]);
        let mut it = list.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&3));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = list_of(&[1, 2, 3]);
        list.remove_at(1);
        list.push_back(4);
        assert_eq!(list.nodes.slot_count(), 3);
        assert_eq!(list.to_vec(), vec![1, 3, 4]);
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = list_of(&[1, 2]);
        let mut copy = original.clone();
        copy.push_back(3);
        assert_eq!(original.to_vec(), vec![1, 2]);
        assert_eq!(copy.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut list = list_of(&[1, 2]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
    }
}
