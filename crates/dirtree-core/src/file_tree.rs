//! Scan result container and statistics.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::record::EntryRecord;
use crate::tree::OrderedTree;

/// Summary statistics for a scanned tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Sum of file sizes in bytes. Directory sizes are not included.
    pub total_size: u64,
    /// Total number of files.
    pub total_files: u64,
    /// Total number of directories, the root included.
    pub total_dirs: u64,
    /// Maximum depth reached.
    pub max_depth: u32,
    /// Largest file (name, size).
    pub largest_file: Option<(CompactString, u64)>,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats with a file entry.
    pub fn record_file(&mut self, name: impl Into<CompactString>, size: u64, depth: u32) {
        self.total_files += 1;
        self.total_size += size;
        self.max_depth = self.max_depth.max(depth);

        if self.largest_file.as_ref().is_none_or(|(_, s)| size > *s) {
            self.largest_file = Some((name.into(), size));
        }
    }

    /// Record a directory.
    pub fn record_dir(&mut self, depth: u32) {
        self.total_dirs += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a captured entry of either kind.
    pub fn record(&mut self, record: &EntryRecord, depth: u32) {
        if record.is_dir() {
            self.record_dir(depth);
        } else {
            self.record_file(record.name.clone(), record.size, depth);
        }
    }

    /// Total number of entries recorded.
    pub fn total_entries(&self) -> u64 {
        self.total_files + self.total_dirs
    }
}

/// A directory subtree mirrored into an [`OrderedTree`].
#[derive(Debug, Clone)]
pub struct FileTree {
    /// One node per filesystem entry, root first.
    pub tree: OrderedTree<EntryRecord>,

    /// Root path that was scanned.
    pub root_path: PathBuf,

    /// When this scan was performed.
    pub scanned_at: SystemTime,

    /// Duration of the scan.
    pub scan_duration: Duration,

    /// Summary statistics.
    pub stats: TreeStats,
}

impl FileTree {
    /// Create a new file tree.
    pub fn new(
        tree: OrderedTree<EntryRecord>,
        root_path: PathBuf,
        stats: TreeStats,
        scan_duration: Duration,
    ) -> Self {
        Self {
            tree,
            root_path,
            scanned_at: SystemTime::now(),
            scan_duration,
            stats,
        }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check if the scan produced no nodes.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Records in display order.
    pub fn records(&self) -> impl Iterator<Item = &EntryRecord> {
        self.tree
            .positions()
            .into_iter()
            .filter_map(move |position| self.tree.element(position).ok())
    }
}
