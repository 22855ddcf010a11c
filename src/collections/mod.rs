//! Hand-built containers backing the store's indices.
//!
//! Every container owns its nodes in a slot arena addressed by index, so
//! there are no back-pointers to manage and cloning a container is a deep
//! copy that preserves order.

mod arena;
pub mod avl;
pub mod bst;
pub mod ordered_list;
pub mod queue;
pub mod stack;

pub use avl::AvlTree;
pub use bst::SearchTree;
pub use ordered_list::OrderedList;
pub use queue::FifoQueue;
pub use stack::BoundedStack;

/// Maps a record to the key that orders it inside a search tree.
///
/// Implemented by small zero-sized types so the extraction is resolved at
/// compile time; the trees hold one by value.
pub trait KeyExtractor<T> {
    type Key: Ord;

    fn extract(&self, value: &T) -> Self::Key;
}
