use std::cmp::Ordering;

use super::KeyExtractor;
use super::arena::{Arena, BinaryNode, Order, Traversal};

/// Height-balanced (AVL) search tree keyed by an extracted key.
///
/// After every insert and remove each node's balance factor (left height
/// minus right height) is in `-1..=1`. Duplicate keys overwrite in place,
/// same as [`SearchTree`](super::SearchTree).
#[derive(Debug, Clone)]
pub struct AvlTree<T, X> {
    nodes: Arena<Node<T>>,
    root: Option<usize>,
    len: usize,
    extractor: X,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
    height: usize,
}

impl<T> BinaryNode<T> for Node<T> {
    fn value(&self) -> &T {
        &self.value
    }

    fn left(&self) -> Option<usize> {
        self.left
    }

    fn right(&self) -> Option<usize> {
        self.right
    }
}

impl<T, X: KeyExtractor<T>> AvlTree<T, X> {
    pub fn new(extractor: X) -> Self {
        Self {
            nodes: Arena::default(),
            root: None,
            len: 0,
            extractor,
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
        self.root = None;
        self.len = 0;
    }

    /// Inserts `value`; returns the record it replaced if the key existed.
    pub fn insert(&mut self, value: T) -> Option<T> {
        let key = self.extractor.extract(&value);
        let mut replaced = None;
        let root = self.insert_node(self.root, &key, value, &mut replaced);
        self.root = Some(root);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    pub fn remove(&mut self, key: &X::Key) -> Option<T> {
        let mut removed = None;
        self.root = self.remove_node(self.root, key, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn search(&self, key: &X::Key) -> Option<&T> {
        self.locate(key).map(|idx| &self.nodes.get(idx).value)
    }

    pub fn search_mut(&mut self, key: &X::Key) -> Option<&mut T> {
        let idx = self.locate(key)?;
        Some(&mut self.nodes.get_mut(idx).value)
    }

    pub fn contains(&self, key: &X::Key) -> bool {
        self.locate(key).is_some()
    }

    /// Replaces the record under `key`, re-filing it if the new record
    /// carries a different key.
    pub fn update(&mut self, key: &X::Key, value: T) -> bool {
        if self.extractor.extract(&value) == *key {
            match self.search_mut(key) {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            }
        } else if self.remove(key).is_some() {
            self.insert(value);
            true
        } else {
            false
        }
    }

    pub fn min(&self) -> Option<&T> {
        let mut idx = self.root?;
        while let Some(left) = self.nodes.get(idx).left {
            idx = left;
        }
        Some(&self.nodes.get(idx).value)
    }

    pub fn max(&self) -> Option<&T> {
        let mut idx = self.root?;
        while let Some(right) = self.nodes.get(idx).right {
            idx = right;
        }
        Some(&self.nodes.get(idx).value)
    }

    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// In key order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inorder()
    }

    pub fn inorder(&self) -> impl Iterator<Item = &T> {
        Traversal::new(&self.nodes, self.root, Order::In)
    }

    pub fn preorder(&self) -> impl Iterator<Item = &T> {
        Traversal::new(&self.nodes, self.root, Order::Pre)
    }

    pub fn postorder(&self) -> impl Iterator<Item = &T> {
        Traversal::new(&self.nodes, self.root, Order::Post)
    }

    pub fn find_all<P>(&self, mut predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.inorder().filter(|v| predicate(v)).cloned().collect()
    }

    /// Visits every record with `low <= key <= high` in ascending key
    /// order, skipping subtrees that cannot overlap the range.
    pub fn range_search<F>(&self, low: &X::Key, high: &X::Key, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.range_node(self.root, low, high, &mut visit);
    }

    /// Recomputes heights bottom-up and checks every balance factor.
    pub fn is_balanced(&self) -> bool {
        self.checked_height(self.root).is_some()
    }

    fn range_node<F>(&self, node: Option<usize>, low: &X::Key, high: &X::Key, visit: &mut F)
    where
        F: FnMut(&T),
    {
        let Some(idx) = node else {
            return;
        };
        let node = self.nodes.get(idx);
        let key = self.extractor.extract(&node.value);

        if *low < key {
            self.range_node(node.left, low, high, visit);
        }
        if *low <= key && key <= *high {
            visit(&node.value);
        }
        if key < *high {
            self.range_node(node.right, low, high, visit);
        }
    }

    fn checked_height(&self, node: Option<usize>) -> Option<usize> {
        let Some(idx) = node else {
            return Some(0);
        };
        let node = self.nodes.get(idx);
        let left = self.checked_height(node.left)?;
        let right = self.checked_height(node.right)?;
        (left.abs_diff(right) <= 1).then_some(1 + left.max(right))
    }

    fn insert_node(
        &mut self,
        node: Option<usize>,
        key: &X::Key,
        value: T,
        replaced: &mut Option<T>,
    ) -> usize {
        let Some(idx) = node else {
            return self.nodes.alloc(Node {
                value,
                left: None,
                right: None,
                height: 1,
            });
        };

        match key.cmp(&self.key_at(idx)) {
            Ordering::Less => {
                let left = self.nodes.get(idx).left;
                let child = self.insert_node(left, key, value, replaced);
                self.nodes.get_mut(idx).left = Some(child);
            }
            Ordering::Greater => {
                let right = self.nodes.get(idx).right;
                let child = self.insert_node(right, key, value, replaced);
                self.nodes.get_mut(idx).right = Some(child);
            }
            Ordering::Equal => {
                let slot = &mut self.nodes.get_mut(idx).value;
                *replaced = Some(std::mem::replace(slot, value));
                return idx;
            }
        }

        self.rebalance(idx)
    }

    fn remove_node(
        &mut self,
        node: Option<usize>,
        key: &X::Key,
        removed: &mut Option<T>,
    ) -> Option<usize> {
        let idx = node?;

        match key.cmp(&self.key_at(idx)) {
            Ordering::Less => {
                let left = self.nodes.get(idx).left;
                let child = self.remove_node(left, key, removed);
                self.nodes.get_mut(idx).left = child;
            }
            Ordering::Greater => {
                let right = self.nodes.get(idx).right;
                let child = self.remove_node(right, key, removed);
                self.nodes.get_mut(idx).right = child;
            }
            Ordering::Equal => {
                let node = self.nodes.get(idx);
                match (node.left, node.right) {
                    (Some(_), Some(right)) => {
                        let (new_right, successor) = self.detach_min(right);
                        let node = self.nodes.get_mut(idx);
                        node.right = new_right;
                        *removed = Some(std::mem::replace(&mut node.value, successor));
                    }
                    (child, None) | (None, child) => {
                        *removed = Some(self.nodes.release(idx).value);
                        return child;
                    }
                }
            }
        }

        Some(self.rebalance(idx))
    }

    /// Unlinks the leftmost node under `idx`, returning the new subtree
    /// root and the detached record.
    fn detach_min(&mut self, idx: usize) -> (Option<usize>, T) {
        match self.nodes.get(idx).left {
            Some(left) => {
                let (new_left, value) = self.detach_min(left);
                self.nodes.get_mut(idx).left = new_left;
                (Some(self.rebalance(idx)), value)
            }
            None => {
                let node = self.nodes.release(idx);
                (node.right, node.value)
            }
        }
    }

    /// Restores the height and balance of `idx`, returning the root of the
    /// (possibly rotated) subtree.
    fn rebalance(&mut self, idx: usize) -> usize {
        self.update_height(idx);
        let balance = self.balance_factor(idx);

        if balance > 1 {
            if let Some(left) = self.nodes.get(idx).left {
                // left-right case
                if self.balance_factor(left) < 0 {
                    let new_left = self.rotate_left(left);
                    self.nodes.get_mut(idx).left = Some(new_left);
                }
            }
            return self.rotate_right(idx);
        }

        if balance < -1 {
            if let Some(right) = self.nodes.get(idx).right {
                // right-left case
                if self.balance_factor(right) > 0 {
                    let new_right = self.rotate_right(right);
                    self.nodes.get_mut(idx).right = Some(new_right);
                }
            }
            return self.rotate_left(idx);
        }

        idx
    }

    fn rotate_right(&mut self, y: usize) -> usize {
        let Some(x) = self.nodes.get(y).left else {
            return y;
        };
        let t2 = self.nodes.get(x).right;
        self.nodes.get_mut(x).right = Some(y);
        self.nodes.get_mut(y).left = t2;
        self.update_height(y);
        self.update_height(x);
        x
    }

    fn rotate_left(&mut self, x: usize) -> usize {
        let Some(y) = self.nodes.get(x).right else {
            return x;
        };
        let t2 = self.nodes.get(y).left;
        self.nodes.get_mut(y).left = Some(x);
        self.nodes.get_mut(x).right = t2;
        self.update_height(x);
        self.update_height(y);
        y
    }

    fn update_height(&mut self, idx: usize) {
        let node = self.nodes.get(idx);
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes.get_mut(idx).height = height;
    }

    fn balance_factor(&self, idx: usize) -> isize {
        let node = self.nodes.get(idx);
        self.height_of(node.left) as isize - self.height_of(node.right) as isize
    }

    fn height_of(&self, node: Option<usize>) -> usize {
        node.map_or(0, |idx| self.nodes.get(idx).height)
    }

    fn key_at(&self, idx: usize) -> X::Key {
        self.extractor.extract(&self.nodes.get(idx).value)
    }

    fn locate(&self, key: &X::Key) -> Option<usize> {
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node = self.nodes.get(idx);
            match key.cmp(&self.extractor.extract(&node.value)) {
                Ordering::Less => cursor = node.left,
                Ordering::Greater => cursor = node.right,
                Ordering::Equal => return Some(idx),
            }
        }
        None
    }
}
