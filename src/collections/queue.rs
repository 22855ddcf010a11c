use super::arena::Arena;

/// FIFO queue over a singly linked slot arena.
///
/// Besides plain enqueue/dequeue it can drop or replace the first interior
/// element matching a predicate, which the leave workflow needs when a
/// request is decided out of order.
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    nodes: Arena<Node<T>>,
    front: Option<usize>,
    rear: Option<usize>,
    len: usize,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<usize>,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::default(),
            front: None,
            rear: None,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, value: T) {
        let idx = self.nodes.alloc(Node { value, next: None });
        match self.rear {
            Some(rear) => self.node_mut(rear).next = Some(idx),
            None => self.front = Some(idx),
        }
        self.rear = Some(idx);
        self.len += 1;
    }

    pub fn dequeue(&mut self) -> Option<T> {
        let idx = self.front?;
        Some(self.unlink(None, idx))
    }

    pub fn peek(&self) -> Option<&T> {
        self.front.map(|idx| &self.node(idx).value)
    }

    /// Removes the first element (front to rear) matching `predicate`.
    pub fn remove_first<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut prev = None;
        let mut cursor = self.front;
        while let Some(idx) = cursor {
            let node = self.node(idx);
            if predicate(&node.value) {
                self.unlink(prev, idx);
                return true;
            }
            prev = Some(idx);
            cursor = node.next;
        }
        false
    }

    pub fn update_first<P>(&mut self, mut predicate: P, value: T) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.front;
        while let Some(idx) = cursor {
            let node = self.node_mut(idx);
            if predicate(&node.value) {
                node.value = value;
                return true;
            }
            cursor = node.next;
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.rear = None;
        self.len = 0;
    }

    /// Front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let mut cursor = self.front;
        std::iter::from_fn(move || {
            let node = self.node(cursor?);
            cursor = node.next;
            Some(&node.value)
        })
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn unlink(&mut self, prev: Option<usize>, idx: usize) -> T {
        let node = self.nodes.release(idx);
        match prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.front = node.next,
        }
        if self.rear == Some(idx) {
            self.rear = prev;
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
