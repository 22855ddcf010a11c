use std::marker::PhantomData;

/// Slot storage shared by the linked containers. Freed slots are recycled
/// before the vector grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<usize>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<N> Arena<N> {
    pub(crate) fn alloc(&mut self, node: N) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    pub(crate) fn release(&mut self, idx: usize) -> N {
        let node = self.slots[idx].take().expect("arena slot is occupied");
        self.free.push(idx);
        node
    }

    pub(crate) fn get(&self, idx: usize) -> &N {
        self.slots[idx].as_ref().expect("arena slot is occupied")
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> &mut N {
        self.slots[idx].as_mut().expect("arena slot is occupied")
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// Child links of a binary tree node stored in an [`Arena`].
pub(crate) trait BinaryNode<T> {
    fn value(&self) -> &T;
    fn left(&self) -> Option<usize>;
    fn right(&self) -> Option<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Order {
    Pre,
    In,
    Post,
}

/// Lazy depth-first walk over an arena-backed tree.
///
/// Each stack entry is a node plus whether its children were already
/// scheduled; the push order per [`Order`] decides when a node is yielded.
pub(crate) struct Traversal<'a, T, N> {
    arena: &'a Arena<N>,
    stack: Vec<(usize, bool)>,
    order: Order,
    _value: PhantomData<&'a T>,
}

impl<'a, T, N: BinaryNode<T>> Traversal<'a, T, N> {
    pub(crate) fn new(arena: &'a Arena<N>, root: Option<usize>, order: Order) -> Self {
        Self {
            arena,
            stack: root.map(|idx| vec![(idx, false)]).unwrap_or_default(),
            order,
            _value: PhantomData,
        }
    }
}

impl<'a, T: 'a, N: BinaryNode<T>> Iterator for Traversal<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, expanded)) = self.stack.pop() {
            let node = self.arena.get(idx);
            if expanded {
                return Some(node.value());
            }
            let left = node.left().map(|l| (l, false));
            let right = node.right().map(|r| (r, false));
            let this = Some((idx, true));
            let pushes = match self.order {
                Order::Pre => [right, left, this],
                Order::In => [right, this, left],
                Order::Post => [this, right, left],
            };
            self.stack.extend(pushes.into_iter().flatten());
        }
        None
    }
}
