//! Ordered sets backed by self-adjusting binary search trees.
//!
//! Two independent containers are provided:
//!
//! - [`avl_tree::AvlSet`]: a height-balanced tree whose subtree heights never differ by more
//!   than one.
//! - [`splay_tree::SplaySet`]: a self-adjusting tree that moves every accessed key to the root.
//!
//! Both are generic over any `T: Ord` and never store two keys that compare equal. Lookups
//! accept any borrowed form of the key, the same way the standard library collections do.

extern crate serde;

pub mod avl_tree;
pub mod splay_tree;

#[cfg(test)]
mod proptests;
