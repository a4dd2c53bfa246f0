use super::SnippetStore;
use crate::error::{Result, YankrError};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct InMemoryStore {
    root: PathBuf,
    snippets: BTreeMap<String, String>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            root: PathBuf::from("/memory/snippets"),
            snippets: BTreeMap::new(),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snippet(mut self, name: &str, content: &str) -> Self {
        self.snippets.insert(name.to_string(), content.to_string());
        self
    }
}

impl SnippetStore for InMemoryStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.snippets.keys().cloned().collect())
    }

    fn contains(&self, name: &str) -> bool {
        self.snippets.contains_key(name)
    }

    fn read(&self, name: &str) -> Result<String> {
        self.snippets.get(name).cloned().ok_or_else(|| {
            YankrError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no snippet named {}", name),
            ))
        })
    }

    fn create(&mut self, name: &str) -> Result<PathBuf> {
        if self.snippets.contains_key(name) {
            return Err(YankrError::SnippetExists(name.to_string()));
        }
        self.snippets.insert(name.to_string(), String::new());
        Ok(self.path_for(name))
    }

    fn write(&mut self, name: &str, content: &str) -> Result<()> {
        self.snippets.insert(name.to_string(), content.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` snippets named `snippet-1..=count`, each with one `{{param}}`.
        pub fn with_snippets(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("snippet-{}", i + 1);
                let content = format!("Content {} for {{{{param}}}}", i + 1);
                self.store.snippets.insert(name, content);
            }
            self
        }
    }
}
