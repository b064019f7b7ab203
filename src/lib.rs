//! This crate exposes a small, owned Binary Search Tree (BST) along with a
//! menu-driven shell for poking at it by hand.
//!
//! ## Binary Search Tree
//!
//! The tree in [`tree`] behaves like an ordered set: it only stores values
//! (no key/value pairs), never removes them, and hands them back smallest
//! first. Each value lives in its own node, and a node owns at most two
//! children, one on each side. Every node upholds two rules:
//!
//! - anything reachable through its left child is strictly smaller than it;
//! - anything reachable through its right child is strictly larger than it.
//!
//! Because both comparisons are strict, an equal value has nowhere to go.
//! Inserting one is a no-op, which is how duplicates get dropped.
//!
//! Searching for a value takes `O(height)` (where `height` is defined as the
//! longest path from the root to a node without children). The tree here does no
//! rebalancing, so the height depends on insertion order: random input gives
//! roughly `O(lg N)` while sorted input degrades to a chain of `N` nodes.
//! BSTs naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree.
//!
//! ## Shell
//!
//! [`shell::Shell`] reads `1` (insert), `2` (print in order) and `3` (exit)
//! commands from any [`BufRead`](std::io::BufRead) and writes prompts and
//! results to any [`Write`](std::io::Write). The `ordtree` binary runs it on
//! stdin and stdout.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod shell;
pub mod tree;
