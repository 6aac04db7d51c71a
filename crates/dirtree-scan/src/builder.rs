//! Mirrors a directory source into an [`OrderedTree`].

use std::vec;

use tracing::{debug, trace};

use dirtree_core::{EntryKind, EntryRecord, OrderedTree, Position, ScanError, TreeStats};

use crate::source::DirectorySource;

/// One open directory level of the walk: where its children go, how deep
/// they sit and which of them are still to be visited.
struct Frame<H> {
    position: Position,
    depth: u32,
    pending: vec::IntoIter<H>,
}

/// Populates a tree with one node per entry of a [`DirectorySource`].
///
/// Errors from the source are propagated as-is. Nodes inserted before the
/// failure stay in the tree, which remains structurally valid.
pub struct TreeBuilder<'a, S: DirectorySource> {
    source: &'a S,
    stats: TreeStats,
}

impl<'a, S: DirectorySource> TreeBuilder<'a, S> {
    /// Create a builder reading from `source`.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            stats: TreeStats::new(),
        }
    }

    /// Statistics of every entry inserted so far.
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Consume the builder, keeping its statistics.
    pub fn into_stats(self) -> TreeStats {
        self.stats
    }

    /// Read one entry's metadata from the source.
    pub fn capture_metadata(&self, handle: &S::Handle) -> Result<EntryRecord, ScanError> {
        Ok(EntryRecord::new(
            self.source.name(handle),
            EntryKind::from_is_dir(self.source.is_dir(handle)?),
            self.source.size_bytes(handle)?,
            self.source.last_modified(handle)?,
        ))
    }

    /// Capture `handle` and append it as a child of `parent`.
    pub fn build_node(
        &mut self,
        tree: &mut OrderedTree<EntryRecord>,
        parent: Position,
        handle: &S::Handle,
    ) -> Result<Position, ScanError> {
        let depth = tree.depth(parent)? as u32 + 1;
        Ok(self.insert_child(tree, parent, depth, handle)?.0)
    }

    /// Insert every descendant of `handle` below `parent`.
    ///
    /// Does nothing for a file or an empty directory. Children are visited
    /// in the order the source lists them, each directory's subtree being
    /// completed before its next sibling is read.
    pub fn construct_subtree(
        &mut self,
        tree: &mut OrderedTree<EntryRecord>,
        parent: Position,
        handle: &S::Handle,
    ) -> Result<(), ScanError> {
        if !self.source.is_dir(handle)? {
            return Ok(());
        }
        let depth = tree.depth(parent)? as u32;
        self.descend(tree, parent, depth, handle)
    }

    /// Set `root` as the root of an empty tree and mirror everything below it.
    pub fn populate(
        &mut self,
        tree: &mut OrderedTree<EntryRecord>,
        root: &S::Handle,
    ) -> Result<Position, ScanError> {
        let record = self.capture_metadata(root)?;
        let is_dir = record.is_dir();
        let position = tree.add_root(record)?;
        self.stats.record(tree.element(position)?, 0);

        if is_dir {
            self.descend(tree, position, 0, root)?;
        }
        Ok(position)
    }

    /// Build a fresh tree mirroring `root`.
    pub fn build(&mut self, root: &S::Handle) -> Result<OrderedTree<EntryRecord>, ScanError> {
        let mut tree = OrderedTree::new();
        self.populate(&mut tree, root)?;
        Ok(tree)
    }

    /// Walk below a directory already known to be one. `depth` is the depth
    /// of `parent`; every entry is queried for its kind exactly once.
    fn descend(
        &mut self,
        tree: &mut OrderedTree<EntryRecord>,
        parent: Position,
        depth: u32,
        handle: &S::Handle,
    ) -> Result<(), ScanError> {
        let mut stack = vec![Frame {
            position: parent,
            depth,
            pending: self.enumerate(handle)?,
        }];

        while let Some(frame) = stack.last_mut() {
            let (parent, depth) = (frame.position, frame.depth + 1);
            let Some(child) = frame.pending.next() else {
                stack.pop();
                continue;
            };

            let (position, is_dir) = self.insert_child(tree, parent, depth, &child)?;
            if is_dir {
                stack.push(Frame {
                    position,
                    depth,
                    pending: self.enumerate(&child)?,
                });
            }
        }

        Ok(())
    }

    fn insert_child(
        &mut self,
        tree: &mut OrderedTree<EntryRecord>,
        parent: Position,
        depth: u32,
        handle: &S::Handle,
    ) -> Result<(Position, bool), ScanError> {
        let record = self.capture_metadata(handle)?;
        trace!(name = %record.name, kind = record.kind.label(), depth, "inserting entry");

        let is_dir = record.is_dir();
        let position = tree.add_child(parent, record)?;
        self.stats.record(tree.element(position)?, depth);
        Ok((position, is_dir))
    }

    /// List a directory and resolve its children to handles. The source's
    /// directory handle is closed by the time this returns.
    fn enumerate(&self, dir: &S::Handle) -> Result<vec::IntoIter<S::Handle>, ScanError> {
        let names = self.source.list_children(dir)?;
        debug!(dir = %self.source.name(dir), entries = names.len(), "enumerated directory");

        let handles: Vec<S::Handle> = names
            .iter()
            .map(|name| self.source.resolve(dir, name))
            .collect();
        Ok(handles.into_iter())
    }
}
