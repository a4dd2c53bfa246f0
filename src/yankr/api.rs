//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every yankr operation, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Carries configuration** resolved once at startup, so nothing below it reads
//!   the environment
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal assumptions**: interactive operations take a reader and a writer
//! - **Clipboard access**: `yank` hands back the filled text, the client decides
//!   where it goes
//!
//! ## Generic Over SnippetStore
//!
//! `YankrApi<S: SnippetStore>` is generic over the storage backend:
//! - Production: `YankrApi<FileStore>`
//! - Testing: `YankrApi<InMemoryStore>`

use crate::commands;
use crate::config::YankrConfig;
use crate::error::Result;
use crate::store::SnippetStore;
use std::io::{BufRead, Write};

/// The main API facade for yankr operations.
pub struct YankrApi<S: SnippetStore> {
    store: S,
    config: YankrConfig,
}

impl<S: SnippetStore> YankrApi<S> {
    pub fn new(store: S, config: YankrConfig) -> Self {
        Self { store, config }
    }

    pub fn list_snippets(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn yank<I, R, W>(
        &self,
        name: &str,
        assignments: &[I],
        input: &mut R,
        output: &mut W,
    ) -> Result<commands::CmdResult>
    where
        I: AsRef<str>,
        R: BufRead,
        W: Write,
    {
        commands::yank::run(&self.store, name, assignments, input, output)
    }

    pub fn create_snippet<R, W>(
        &mut self,
        name: &str,
        input: R,
        output: &mut W,
    ) -> Result<commands::CmdResult>
    where
        R: BufRead,
        W: Write,
    {
        let source = self.config.content_source();
        commands::create::run(&mut self.store, name, &source, input, output)
    }

    pub fn snippets_path(&self) -> Result<commands::CmdResult> {
        commands::path::run(&self.config)
    }

    pub fn snippet_params(&self, name: &str) -> Result<commands::CmdResult> {
        commands::params::run(&self.store, name)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, SnippetsLocation};
