//! Directory sources: read access to a hierarchy of entries.

use std::ffi::{OsStr, OsString};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use compact_str::CompactString;

use dirtree_core::ScanError;

/// Read-only view of a directory hierarchy.
///
/// A handle names one entry. Sources never hold resources across calls:
/// an enumeration opens, drains and closes its directory before returning.
pub trait DirectorySource {
    /// Identifies one entry of the source.
    type Handle;

    /// Whether the entry exists.
    fn exists(&self, handle: &Self::Handle) -> bool;

    /// Whether the entry is a directory.
    fn is_dir(&self, handle: &Self::Handle) -> Result<bool, ScanError>;

    /// Base name of the entry.
    fn name(&self, handle: &Self::Handle) -> CompactString;

    /// Length of the entry in bytes.
    fn size_bytes(&self, handle: &Self::Handle) -> Result<u64, ScanError>;

    /// Last modification time of the entry.
    fn last_modified(&self, handle: &Self::Handle) -> Result<SystemTime, ScanError>;

    /// Names of the immediate children of a directory, in source order.
    fn list_children(&self, handle: &Self::Handle) -> Result<Vec<OsString>, ScanError>;

    /// Handle of the child called `name` below `parent`.
    fn resolve(&self, parent: &Self::Handle, name: &OsStr) -> Self::Handle;
}

/// Directory source backed by the local filesystem.
#[derive(Debug, Clone, Copy)]
pub struct FsSource {
    follow_symlinks: bool,
}

impl FsSource {
    /// Create a filesystem source.
    ///
    /// When `follow_symlinks` is false a link is reported as a file and is
    /// never descended into.
    pub fn new(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }

    fn metadata(&self, path: &Path) -> Result<Metadata, ScanError> {
        let result = if self.follow_symlinks {
            // A dangling link has no target to follow; describe the link itself.
            fs::metadata(path).or_else(|e| match e.kind() {
                io::ErrorKind::NotFound => fs::symlink_metadata(path).map_err(|_| e),
                _ => Err(e),
            })
        } else {
            fs::symlink_metadata(path)
        };
        result.map_err(|e| ScanError::io(path, e))
    }
}

impl Default for FsSource {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DirectorySource for FsSource {
    type Handle = PathBuf;

    fn exists(&self, handle: &PathBuf) -> bool {
        self.metadata(handle).is_ok()
    }

    fn is_dir(&self, handle: &PathBuf) -> Result<bool, ScanError> {
        Ok(self.metadata(handle)?.is_dir())
    }

    fn name(&self, handle: &PathBuf) -> CompactString {
        handle
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_else(|| CompactString::new(handle.to_string_lossy()))
    }

    fn size_bytes(&self, handle: &PathBuf) -> Result<u64, ScanError> {
        Ok(self.metadata(handle)?.len())
    }

    fn last_modified(&self, handle: &PathBuf) -> Result<SystemTime, ScanError> {
        // Platforms without mtime report the epoch.
        Ok(self.metadata(handle)?.modified().unwrap_or(UNIX_EPOCH))
    }

    fn list_children(&self, handle: &PathBuf) -> Result<Vec<OsString>, ScanError> {
        let entries = fs::read_dir(handle).map_err(|e| ScanError::io(handle, e))?;
        entries
            .map(|entry| {
                entry
                    .map(|e| e.file_name())
                    .map_err(|e| ScanError::io(handle, e))
            })
            .collect()
    }

    fn resolve(&self, parent: &PathBuf, name: &OsStr) -> PathBuf {
        parent.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_source_metadata() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "0123456789").unwrap();

        let source = FsSource::default();
        assert!(source.exists(&file));
        assert!(!source.is_dir(&file).unwrap());
        assert_eq!(source.size_bytes(&file).unwrap(), 10);
        assert_eq!(source.name(&file).as_str(), "a.txt");
        assert!(source.is_dir(&temp.path().to_path_buf()).unwrap());
    }

    #[test]
    fn test_fs_source_lists_and_resolves() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        fs::write(root.join("one"), "1").unwrap();
        fs::create_dir(root.join("two")).unwrap();

        let source = FsSource::default();
        let mut names = source.list_children(&root).unwrap();
        names.sort();
        assert_eq!(names, [OsString::from("one"), OsString::from("two")]);
        assert_eq!(source.resolve(&root, OsStr::new("two")), root.join("two"));
    }

    #[test]
    fn test_fs_source_missing_entry() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let source = FsSource::default();
        assert!(!source.exists(&missing));
        assert!(matches!(
            source.is_dir(&missing),
            Err(ScanError::NotFound { .. })
        ));
        assert!(matches!(
            source.list_children(&missing),
            Err(ScanError::NotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_source_symlink_modes() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");
        let link = temp.path().join("link");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(FsSource::new(true).is_dir(&link).unwrap());
        assert!(!FsSource::new(false).is_dir(&link).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_source_dangling_symlink() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("dangling");
        std::os::unix::fs::symlink(temp.path().join("gone"), &link).unwrap();

        let source = FsSource::new(true);
        assert!(source.exists(&link));
        assert!(!source.is_dir(&link).unwrap());
        assert!(source.size_bytes(&link).is_ok());
        assert!(source.last_modified(&link).is_ok());
        assert_eq!(source.name(&link).as_str(), "dangling");
    }
}
