use thiserror::Error;

#[derive(Error, Debug)]
pub enum YankrError {
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    #[error("snippet '{0}' not found")]
    SnippetNotFound(String),

    #[error("snippet '{0}' already exists")]
    SnippetExists(String),

    #[error("invalid parameter format: {0} (use 'name=value')")]
    InvalidParam(String),

    #[error("failed to open editor: {0}")]
    Editor(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, YankrError>;
