use crate::editor::{ContentSource, EditorCommand};
use crate::error::{Result, YankrError};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Overrides the snippets directory when set to a non-empty value.
pub const SNIPPETS_DIR_ENV: &str = "YANKR_SNIPPETS_DIR";
/// Standard editor selection variable, used by `create`.
pub const EDITOR_ENV: &str = "EDITOR";

const APP_DIR: &str = "yankr";
const SNIPPETS_SUBDIR: &str = "snippets";

/// How the snippets directory was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirSource {
    Default,
    Env,
}

/// Configuration for yankr, resolved once at startup from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YankrConfig {
    pub snippets_dir: PathBuf,
    pub dir_source: DirSource,
    pub editor: Option<EditorCommand>,
}

impl YankrConfig {
    /// Load config from the process environment.
    pub fn load() -> Result<Self> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::from_lookup(|key| std::env::var(key).ok(), home)
    }

    /// Build config from an arbitrary variable lookup and home directory.
    ///
    /// The home directory is only required when no override is set.
    pub fn from_lookup<F>(lookup: F, home: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let override_dir = lookup(SNIPPETS_DIR_ENV).filter(|v| !v.is_empty());
        let (snippets_dir, dir_source) = match override_dir {
            Some(dir) => (PathBuf::from(dir), DirSource::Env),
            None => {
                let home = home.ok_or(YankrError::HomeDirNotFound)?;
                (default_snippets_dir(&home), DirSource::Default)
            }
        };

        let editor = lookup(EDITOR_ENV).and_then(|v| EditorCommand::parse(&v));

        Ok(Self {
            snippets_dir,
            dir_source,
            editor,
        })
    }

    /// The single decision point between editor and stdin capture for `create`.
    pub fn content_source(&self) -> ContentSource {
        match &self.editor {
            Some(editor) => ContentSource::Editor(editor.clone()),
            None => ContentSource::Stdin,
        }
    }
}

/// `<home>/.config/yankr/snippets`
pub fn default_snippets_dir(home: &Path) -> PathBuf {
    home.join(".config").join(APP_DIR).join(SNIPPETS_SUBDIR)
}
