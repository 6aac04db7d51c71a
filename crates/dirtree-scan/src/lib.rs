//! Directory scanning for dirtree.
//!
//! This crate mirrors a directory hierarchy into a
//! [`dirtree_core::OrderedTree`], one node per entry.
//!
//! # Overview
//!
//! - [`DirectorySource`] abstracts read access to a hierarchy; [`FsSource`]
//!   implements it over the local filesystem.
//! - [`TreeBuilder`] walks a source depth-first and inserts each entry
//!   below its parent's position.
//! - [`Scanner`] validates a root path and packages the result as a
//!   [`FileTree`].
//!
//! # Example
//!
//! ```rust,no_run
//! use dirtree_scan::{ScanConfig, Scanner};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let scanned = Scanner::new().scan(&config).unwrap();
//!
//! for position in scanned.tree.positions() {
//!     let record = scanned.tree.element(position).unwrap();
//!     println!("{}\t{}", record.size, record.name);
//! }
//! ```
//!
//! The walk is single-threaded and uses an explicit stack, so deep
//! hierarchies do not grow the call stack. Symlinked directories are
//! followed by default and cycles are not detected.

mod builder;
mod scanner;
mod source;

pub use builder::TreeBuilder;
pub use scanner::Scanner;
pub use source::{DirectorySource, FsSource};

// Re-export core types for convenience
pub use dirtree_core::{
    EntryKind, EntryRecord, FileTree, OrderedTree, Position, ScanConfig, ScanError, TreeStats,
};
