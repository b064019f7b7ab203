//! An owned, unbalanced BST that stores keys only. Every node exclusively owns its two child
//! slots so there are no parent pointers and no shared nodes.
//!
//! Nothing here recurses. Insertion walks a mutable cursor down the child slots, traversal keeps
//! an explicit stack of ancestors, and dropping drains the nodes into a work list. That keeps a
//! fully skewed tree (e.g. one built from sorted input) from blowing the call stack.
//!
//! # Examples
//!
//! ```
//! use ordtree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.iter().next(), None);
//!
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! // In-order traversal comes out sorted.
//! let sorted: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9]);
//!
//! // Inserting a value that's already present does nothing.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 7);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

/// A Binary Search Tree over values of type `T`. This can be used for inserting values and
/// visiting them in ascending order. Duplicate values are discarded.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

/// A child slot. `None` marks the empty spot at the bottom of a subtree.
type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach children before each node is freed so `Box`'s own drop never recurses more than
        // one level.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies the tree node for node, so the clone has the same shape as the original.
    fn clone(&self) -> Self {
        let mut root = None;
        // Each entry is a node to copy and the empty slot its copy goes into.
        let mut pending: Vec<(&Node<T>, &mut Link<T>)> = self
            .root
            .as_deref()
            .map(|node| (node, &mut root))
            .into_iter()
            .collect();
        while let Some((node, slot)) = pending.pop() {
            let copy = slot.insert(Node::new_boxed(node.value.clone()));
            let Node { left, right, .. } = &mut **copy;
            pending.extend(node.left.as_deref().map(|n| (n, left)));
            pending.extend(node.right.as_deref().map(|n| (n, right)));
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many distinct values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` into the tree. Returns `true` if a new node was created and `false` if an
    /// equal value was already present, in which case the tree is left untouched and `value` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    log::trace!("Tree::insert discarding duplicate at depth {}", depth);
                    return false;
                }
            }
            depth += 1;
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        log::trace!(
            "Tree::insert new node at depth {}, tree size {}",
            depth,
            self.len
        );
        true
    }

    /// Returns `true` if a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Gets the height of this tree, i.e. how many nodes sit on the longest path from the root
    /// to a leaf. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, level)) = pending.pop() {
            tallest = tallest.max(level);
            pending.extend(node.left.as_deref().map(|n| (n, level + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, level + 1)));
        }
        tallest
    }

    /// Returns an iterator over the values in ascending order (an in-order traversal: left
    /// subtree, then node, then right subtree). The iterator is lazy and every call starts a
    /// fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    /// let mut iter = tree.iter();
    ///
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`]. Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been (or is being) visited but which haven't been yielded.
    /// The top of the stack is always the next value.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

/// Manual implementation of `Clone` so `T` doesn't need to be `Clone`; we only copy references.
impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its leftmost descendants. The last one pushed is the smallest
    /// value in that subtree.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
