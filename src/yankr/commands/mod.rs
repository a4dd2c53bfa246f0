use crate::config::DirSource;
use std::path::PathBuf;

pub mod create;
pub mod helpers;
pub mod list;
pub mod params;
pub mod path;
pub mod yank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Where snippets are stored and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetsLocation {
    pub dir: PathBuf,
    pub source: DirSource,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_snippets: Vec<String>,
    pub params: Vec<String>,
    pub usage: Option<String>,
    pub yanked_text: Option<String>,
    pub snippet_path: Option<PathBuf>,
    pub location: Option<SnippetsLocation>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_snippets(mut self, names: Vec<String>) -> Self {
        self.listed_snippets = names;
        self
    }

    pub fn with_params(mut self, params: Vec<String>, usage: String) -> Self {
        self.params = params;
        self.usage = Some(usage);
        self
    }

    pub fn with_yanked_text(mut self, text: String) -> Self {
        self.yanked_text = Some(text);
        self
    }

    pub fn with_snippet_path(mut self, path: PathBuf) -> Self {
        self.snippet_path = Some(path);
        self
    }

    pub fn with_location(mut self, location: SnippetsLocation) -> Self {
        self.location = Some(location);
        self
    }
}
