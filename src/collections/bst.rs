use std::cmp::Ordering;

use super::KeyExtractor;
use super::arena::{Arena, BinaryNode, Order, Traversal};

/// Unbalanced binary search tree keyed by an extracted key.
///
/// Inserting a key that is already present replaces the stored record and
/// leaves `len()` unchanged. Height is not managed, so a monotone insert
/// sequence degrades into a list.
#[derive(Debug, Clone)]
pub struct SearchTree<T, X> {
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

/// Which child link of a parent points at a node.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl<T, X: KeyExtractor<T>> SearchTree<T, X> {
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
        let mut parent: Option<(usize, Side)> = None;
        let mut cursor = self.root;

        while let Some(idx) = cursor {
            let node = self.nodes.get(idx);
            match key.cmp(&self.extractor.extract(&node.value)) {
                Ordering::Less => {
                    parent = Some((idx, Side::Left));
                    cursor = node.left;
                }
                Ordering::Greater => {
                    parent = Some((idx, Side::Right));
                    cursor = node.right;
                }
                Ordering::Equal => {
                    let slot = &mut self.nodes.get_mut(idx).value;
                    return Some(std::mem::replace(slot, value));
                }
            }
        }

        let idx = self.nodes.alloc(Node {
            value,
            left: None,
            right: None,
        });
        self.set_link(parent, Some(idx));
        self.len += 1;
        None
    }

    pub fn search(&self, key: &X::Key) -> Option<&T> {
        self.locate(key).map(|(idx, _)| &self.nodes.get(idx).value)
    }

    pub fn search_mut(&mut self, key: &X::Key) -> Option<&mut T> {
        let (idx, _) = self.locate(key)?;
        Some(&mut self.nodes.get_mut(idx).value)
    }

    pub fn contains(&self, key: &X::Key) -> bool {
        self.locate(key).is_some()
    }

    /// Removes the record stored under `key`.
    ///
    /// A node with two children takes over its in-order successor's record
    /// and the successor node is spliced out instead.
    pub fn remove(&mut self, key: &X::Key) -> Option<T> {
        let (idx, parent) = self.locate(key)?;
        let (left, right) = {
            let node = self.nodes.get(idx);
            (node.left, node.right)
        };

        let removed = match (left, right) {
            (Some(_), Some(right)) => {
                let mut succ_parent = (idx, Side::Right);
                let mut succ = right;
                while let Some(next) = self.nodes.get(succ).left {
                    succ_parent = (succ, Side::Left);
                    succ = next;
                }
                let succ_right = self.nodes.get(succ).right;
                self.set_link(Some(succ_parent), succ_right);
                let succ_node = self.nodes.release(succ);
                std::mem::replace(&mut self.nodes.get_mut(idx).value, succ_node.value)
            }
            (child, None) | (None, child) => {
                self.set_link(parent, child);
                self.nodes.release(idx).value
            }
        };

        self.len -= 1;
        Some(removed)
    }

    /// Replaces the record under `key`. If the new record carries a
    /// different key it is re-filed under that key.
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

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
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

    /// Records matching `predicate`, in key order.
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.inorder().filter(|v| predicate(v)).cloned().collect()
    }

    fn height_of(&self, node: Option<usize>) -> usize {
        match node {
            Some(idx) => {
                let node = self.nodes.get(idx);
                1 + self.height_of(node.left).max(self.height_of(node.right))
            }
            None => 0,
        }
    }

    /// Finds the node holding `key` together with the link pointing at it.
    fn locate(&self, key: &X::Key) -> Option<(usize, Option<(usize, Side)>)> {
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(idx) = cursor {
            let node = self.nodes.get(idx);
            match key.cmp(&self.extractor.extract(&node.value)) {
                Ordering::Less => {
                    parent = Some((idx, Side::Left));
                    cursor = node.left;
                }
                Ordering::Greater => {
                    parent = Some((idx, Side::Right));
                    cursor = node.right;
                }
                Ordering::Equal => return Some((idx, parent)),
            }
        }
        None
    }

    fn set_link(&mut self, parent: Option<(usize, Side)>, child: Option<usize>) {
        match parent {
            None => self.root = child,
            Some((idx, Side::Left)) => self.nodes.get_mut(idx).left = child,
            Some((idx, Side::Right)) => self.nodes.get_mut(idx).right = child,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    #[derive(Debug, Clone, Copy)]
    struct ById;

    impl KeyExtractor<Item> for ById {
        type Key = u32;

        fn extract(&self, value: &Item) -> u32 {
            value.id
        }
    }

    fn item(id: u32) -> Item {
        Item { id, label: "x" }
    }

    fn tree_of(ids: &[u32]) -> SearchTree<Item, ById> {
        let mut tree = SearchTree::new(ById);
        for id in ids {
            tree.insert(item(*id));
        }
        tree
    }

    fn inorder_ids(tree: &SearchTree<Item, ById>) -> Vec<u32> {
        tree.inorder().map(|i| i.id).collect()
    }

    #[test]
    fn insert_and_search() {
        let tree = tree_of(&[50, 30, 70, 20, 40]);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.search(&40).map(|i| i.id), Some(40));
        assert!(tree.search(&45).is_none());
        assert_eq!(inorder_ids(&tree), vec![20, 30, 40, 50, 70]);
    }

    #[test]
    fn duplicate_key_overwrites_without_growing() {
        let mut tree = tree_of(&[2, 1, 3]);
        let old = tree.insert(Item { id: 2, label: "new" });
        assert_eq!(old, Some(item(2)));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.search(&2).map(|i| i.label), Some("new"));
    }

    #[test]
    fn traversal_orders() {
        let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);
        let pre: Vec<_> = tree.preorder().map(|i| i.id).collect();
        let post: Vec<_> = tree.postorder().map(|i| i.id).collect();
        assert_eq!(pre, vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(post, vec![20, 40, 30, 60, 80, 70, 50]);
    }

    #[test]
    fn remove_leaf_single_child_and_two_children() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40, 60, 80, 65]);

        assert_eq!(tree.remove(&20).map(|i| i.id), Some(20));
        assert_eq!(tree.remove(&60).map(|i| i.id), Some(60));
        assert_eq!(tree.remove(&50).map(|i| i.id), Some(50));
        assert_eq!(inorder_ids(&tree), vec![30, 40, 65, 70, 80]);
        assert_eq!(tree.len(), 5);
        assert!(tree.remove(&50).is_none());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn remove_root_until_empty() {
        let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
        loop {
            let Some(root_id) = tree.preorder().next().map(|i| i.id) else {
                break;
            };
            assert!(tree.remove(&root_id).is_some());
            let ids = inorder_ids(&tree);
            let mut sorted = ids.clone();
            sorted.sort();
            assert_eq!(ids, sorted);
        }
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn min_max_and_height() {
        let tree = tree_of(&[10, 5, 15, 1]);
        assert_eq!(tree.min().map(|i| i.id), Some(1));
        assert_eq!(tree.max().map(|i| i.id), Some(15));
        assert_eq!(tree.height(), 3);

        let chain = tree_of(&[1, 2, 3, 4]);
        assert_eq!(chain.height(), 4);
    }

    #[test]
    fn update_in_place_and_rekey() {
        let mut tree = tree_of(&[10, 5, 15]);
        assert!(tree.update(&5, Item { id: 5, label: "five" }));
        assert_eq!(tree.search(&5).map(|i| i.label), Some("five"));

        assert!(tree.update(&15, item(25)));
        assert!(tree.search(&15).is_none());
        assert_eq!(inorder_ids(&tree), vec![5, 10, 25]);

        assert!(!tree.update(&99, item(99)));
        assert_eq!(tree.len(), 3);
    }
}
