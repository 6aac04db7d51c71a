//! Filesystem entry records.

use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Kind of filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Anything that is not a directory.
    File,
    /// Directory.
    Directory,
}

impl EntryKind {
    /// Map a directory flag to a kind.
    pub fn from_is_dir(is_dir: bool) -> Self {
        if is_dir { Self::Directory } else { Self::File }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Report label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Directory",
        }
    }
}

/// Metadata of one filesystem entry, captured at scan time.
///
/// The tree never edits a record's fields; it only replaces whole records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Base name of the entry (not the full path).
    pub name: CompactString,

    /// File or directory.
    pub kind: EntryKind,

    /// Length in bytes as reported by the source.
    pub size: u64,

    /// Last modification time.
    pub modified: SystemTime,
}

impl EntryRecord {
    /// Create a new record.
    pub fn new(
        name: impl Into<CompactString>,
        kind: EntryKind,
        size: u64,
        modified: SystemTime,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
            modified,
        }
    }

    /// Create a file record.
    pub fn file(name: impl Into<CompactString>, size: u64, modified: SystemTime) -> Self {
        Self::new(name, EntryKind::File, size, modified)
    }

    /// Create a directory record.
    pub fn directory(name: impl Into<CompactString>, size: u64, modified: SystemTime) -> Self {
        Self::new(name, EntryKind::Directory, size, modified)
    }

    /// Check if this record describes a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}
