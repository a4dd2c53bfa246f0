//! # Storage Layer
//!
//! This module defines the storage abstraction for snippets. The [`SnippetStore`]
//! trait lets the command layer work against disk in production and memory in
//! tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One flat directory, one file per snippet
//!   - The filename is the snippet name
//!   - Subdirectories are never treated as snippets
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! ```text
//! ~/.config/yankr/snippets/
//! ├── email-template      # raw text, may contain {{placeholders}}
//! └── git-commit
//! ```
//!
//! There is no metadata and no locking: concurrent writers to the same snippet
//! get whatever the filesystem gives them.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// Abstract interface for snippet storage.
pub trait SnippetStore {
    /// Root location snippets live in.
    fn root(&self) -> &Path;

    /// Names of all snippets, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Whether a snippet with this name exists.
    fn contains(&self, name: &str) -> bool;

    /// Read the raw text of a snippet.
    fn read(&self, name: &str) -> Result<String>;

    /// Create an empty snippet, failing with `SnippetExists` if the name is taken.
    /// Returns the path of the new snippet.
    fn create(&mut self, name: &str) -> Result<PathBuf>;

    /// Replace the content of a snippet.
    fn write(&mut self, name: &str, content: &str) -> Result<()>;

    /// Where a snippet with this name lives (whether or not it exists).
    fn path_for(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }
}
