//! Filesystem scanner driving the tree builder.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use dirtree_core::{FileTree, ScanConfig, ScanError};

use crate::builder::TreeBuilder;
use crate::source::{DirectorySource, FsSource};

/// Scans a directory on the local filesystem into a [`FileTree`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Scanner;

impl Scanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Perform a scan of the configured root.
    pub fn scan(&self, config: &ScanConfig) -> Result<FileTree, ScanError> {
        let start = Instant::now();
        let source = FsSource::new(config.follow_symlinks);
        let root_path = self.validate_root(&source, &config.root)?;

        let mut builder = TreeBuilder::new(&source);
        let tree = builder.build(&root_path)?;
        let stats = builder.into_stats();
        let scan_duration = start.elapsed();

        info!(
            root = %root_path.display(),
            nodes = tree.len(),
            files = stats.total_files,
            dirs = stats.total_dirs,
            elapsed_ms = scan_duration.as_millis() as u64,
            "scan complete"
        );

        Ok(FileTree::new(tree, root_path, stats, scan_duration))
    }

    /// Resolve the root and verify it is an existing directory.
    ///
    /// Only failures of the root itself are reported as `RootNotFound` or
    /// `NotADirectory`; errors raised later by the walk keep their own kind.
    fn validate_root(&self, source: &FsSource, root: &PathBuf) -> Result<PathBuf, ScanError> {
        let root_not_found = || ScanError::RootNotFound { path: root.clone() };
        if !source.exists(root) {
            return Err(root_not_found());
        }
        let root_path = match root.canonicalize() {
            Ok(path) => path,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(root_not_found()),
            Err(e) => return Err(ScanError::io(root, e)),
        };
        if !source.is_dir(&root_path)? {
            return Err(ScanError::NotADirectory { path: root_path });
        }
        Ok(root_path)
    }
}
