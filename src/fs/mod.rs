//! File system traversal and in-place rewriting.
//!
//! Walks a directory tree, selects source files and writes converted content
//! back to the same paths.

pub mod walker;

pub use walker::{DirectoryWalker, WalkSummary, is_eligible, is_excluded_dir};
