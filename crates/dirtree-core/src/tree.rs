//! Ordered, arbitrarily branching tree addressed through positions.
//!
//! Nodes live in an arena owned by the tree. Parent links and child lists
//! are arena indices, so a node is never kept alive by being someone's
//! parent; the whole arena is dropped together with the tree.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::TreeError;

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity tag of one tree instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(u64);

impl TreeId {
    fn next() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque handle to a node of an [`OrderedTree`].
///
/// A position is only meaningful to the tree that issued it. Every tree
/// operation taking a position checks the tree tag and rejects foreign
/// handles with [`TreeError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    tree: TreeId,
    index: usize,
}

impl Position {
    /// Identity of the tree this position was issued by.
    pub fn tree_id(&self) -> TreeId {
        self.tree
    }
}

#[derive(Debug, Clone)]
struct Node<E> {
    element: E,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Generic rooted tree with insertion-ordered children.
///
/// The tree grows monotonically: a root is added once, then children are
/// appended below already attached positions. Traversals return snapshots,
/// so later insertions never affect a sequence that was already produced.
#[derive(Debug)]
pub struct OrderedTree<E> {
    id: TreeId,
    nodes: Vec<Node<E>>,
}

impl<E> OrderedTree<E> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            id: TreeId::next(),
            nodes: Vec::new(),
        }
    }

    /// Identity tag carried by every position of this tree.
    pub fn id(&self) -> TreeId {
        self.id
    }

    /// True iff no root has been set.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The root position, if the tree is non-empty.
    pub fn root(&self) -> Option<Position> {
        (!self.nodes.is_empty()).then(|| self.position(0))
    }

    /// Set the root element of an empty tree.
    pub fn add_root(&mut self, element: E) -> Result<Position, TreeError> {
        if !self.is_empty() {
            return Err(TreeError::invalid_state("Tree is not empty"));
        }
        self.nodes.push(Node {
            element,
            parent: None,
            children: Vec::new(),
        });
        Ok(self.position(0))
    }

    /// Append a new child below `parent` and return its position.
    pub fn add_child(&mut self, parent: Position, element: E) -> Result<Position, TreeError> {
        let parent_index = self.validate(parent)?;
        let index = self.nodes.len();
        self.nodes.push(Node {
            element,
            parent: Some(parent_index),
            children: Vec::new(),
        });
        self.nodes[parent_index].children.push(index);
        Ok(self.position(index))
    }

    /// Parent of `position`, or `None` for the root.
    pub fn parent(&self, position: Position) -> Result<Option<Position>, TreeError> {
        let node = self.node(position)?;
        Ok(node.parent.map(|index| self.position(index)))
    }

    /// Children of `position` in insertion order.
    pub fn children(&self, position: Position) -> Result<Vec<Position>, TreeError> {
        let node = self.node(position)?;
        Ok(node
            .children
            .iter()
            .map(|&index| self.position(index))
            .collect())
    }

    /// Number of direct children.
    pub fn num_children(&self, position: Position) -> Result<usize, TreeError> {
        Ok(self.node(position)?.children.len())
    }

    /// True if `position` has no children.
    pub fn is_leaf(&self, position: Position) -> Result<bool, TreeError> {
        Ok(self.num_children(position)? == 0)
    }

    /// True if `position` has at least one child.
    pub fn is_internal(&self, position: Position) -> Result<bool, TreeError> {
        Ok(self.num_children(position)? > 0)
    }

    /// True if `position` is the root.
    pub fn is_root(&self, position: Position) -> Result<bool, TreeError> {
        Ok(self.node(position)?.parent.is_none())
    }

    /// Number of ancestors of `position`; the root has depth 0.
    pub fn depth(&self, position: Position) -> Result<usize, TreeError> {
        let mut current = self.node(position)?.parent;
        let mut depth = 0;
        while let Some(index) = current {
            depth += 1;
            current = self.nodes[index].parent;
        }
        Ok(depth)
    }

    /// Element stored at `position`.
    pub fn element(&self, position: Position) -> Result<&E, TreeError> {
        Ok(&self.node(position)?.element)
    }

    /// Replace the element at `position`, returning the previous one.
    pub fn set_element(&mut self, position: Position, element: E) -> Result<E, TreeError> {
        let index = self.validate(position)?;
        Ok(std::mem::replace(&mut self.nodes[index].element, element))
    }

    /// Every position, each one before all of its descendants.
    pub fn preorder(&self) -> Vec<Position> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<usize> = Vec::new();
        if !self.is_empty() {
            stack.push(0);
        }

        while let Some(index) = stack.pop() {
            order.push(self.position(index));
            // Reversed so the first child is popped first.
            stack.extend(self.nodes[index].children.iter().rev().copied());
        }

        order
    }

    /// Every position, each one after all of its descendants.
    pub fn postorder(&self) -> Vec<Position> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, bool)> = Vec::new();
        if !self.is_empty() {
            stack.push((0, false));
        }

        while let Some((index, expanded)) = stack.pop() {
            if expanded {
                order.push(self.position(index));
                continue;
            }
            stack.push((index, true));
            stack.extend(
                self.nodes[index]
                    .children
                    .iter()
                    .rev()
                    .map(|&child| (child, false)),
            );
        }

        order
    }

    /// Canonical display order, same as [`preorder`](Self::preorder).
    pub fn positions(&self) -> Vec<Position> {
        self.preorder()
    }

    fn position(&self, index: usize) -> Position {
        Position {
            tree: self.id,
            index,
        }
    }

    fn validate(&self, position: Position) -> Result<usize, TreeError> {
        if position.tree != self.id {
            return Err(TreeError::invalid_argument(
                "position belongs to a different tree",
            ));
        }
        if position.index >= self.nodes.len() {
            return Err(TreeError::invalid_argument(
                "position is no longer in the tree",
            ));
        }
        Ok(position.index)
    }

    fn node(&self, position: Position) -> Result<&Node<E>, TreeError> {
        let index = self.validate(position)?;
        Ok(&self.nodes[index])
    }
}

impl<E> Default for OrderedTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning yields an independent tree with its own identity; positions of
/// the original are rejected by the copy.
impl<E: Clone> Clone for OrderedTree<E> {
    fn clone(&self) -> Self {
        Self {
            id: TreeId::next(),
            nodes: self.nodes.clone(),
        }
    }
}
