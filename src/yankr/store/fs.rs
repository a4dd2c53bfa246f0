use super::SnippetStore;
use crate::error::{Result, YankrError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            debug!(dir = %self.root.display(), "creating snippets directory");
            fs::create_dir_all(&self.root).map_err(YankrError::Io)?;
        }
        Ok(())
    }
}

impl SnippetStore for FileStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(dir = %self.root.display(), "snippets directory missing, nothing to list");
                return Ok(Vec::new());
            }
            Err(e) => return Err(YankrError::Io(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(YankrError::Io)?;
            if entry.file_type().map_err(YankrError::Io)?.is_dir() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn contains(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.path_for(name);
        debug!(path = %path.display(), "reading snippet");
        fs::read_to_string(path).map_err(YankrError::Io)
    }

    fn create(&mut self, name: &str) -> Result<PathBuf> {
        let path = self.path_for(name);
        if path.exists() {
            return Err(YankrError::SnippetExists(name.to_string()));
        }
        self.ensure_dir()?;

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(_) => {
                debug!(path = %path.display(), "created empty snippet");
                Ok(path)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(YankrError::SnippetExists(name.to_string()))
            }
            Err(e) => Err(YankrError::Io(e)),
        }
    }

    fn write(&mut self, name: &str, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.path_for(name);
        debug!(path = %path.display(), bytes = content.len(), "writing snippet");
        fs::write(path, content).map_err(YankrError::Io)
    }
}
