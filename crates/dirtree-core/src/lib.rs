//! Core types for dirtree.
//!
//! This crate provides the generic [`OrderedTree`] container, the
//! [`EntryRecord`] stored in each node of a scanned tree, and the
//! configuration and error types shared by the scanner and the CLI.
//!
//! # Example
//!
//! ```rust
//! use dirtree_core::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! let root = tree.add_root("root").unwrap();
//! let docs = tree.add_child(root, "docs").unwrap();
//! tree.add_child(docs, "readme.md").unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.depth(docs).unwrap(), 1);
//! assert_eq!(tree.postorder().last(), Some(&root));
//! ```

mod config;
mod error;
mod file_tree;
mod record;
mod tree;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use error::{ScanError, TreeError};
pub use file_tree::{FileTree, TreeStats};
pub use record::{EntryKind, EntryRecord};
pub use tree::{OrderedTree, Position, TreeId};
