//! # Yankr Architecture
//!
//! Yankr is a snippet manager: it stores named text templates on disk, fills
//! their `{{parameter}}` placeholders with supplied or prompted values, and puts
//! the result on the clipboard. The library is UI-agnostic; the binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Owns the clipboard write and the process exit code       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Holds the configuration loaded once at startup           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per command, returns CmdResult                │
//! │  - Uses the engine: template.rs + prompt.rs                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnippetStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Yank Pipeline
//!
//! ```text
//! --param a=1  ──► parse (reject "foo") ──► snippet exists? ──► read text
//!                                                                  │
//!   clipboard ◄── substitute ◄── prompt for empty values ◄── extract {{names}}
//! ```
//!
//! Interactive steps take a `BufRead` and a `Write` instead of touching the
//! terminal, so the whole pipeline runs in tests against in-memory buffers.
//!
//! ## Configuration
//!
//! Environment lookups happen exactly once, in [`config::YankrConfig::load`].
//! The resulting value is handed to the API; nothing below it reads the
//! environment.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`template`]: Placeholder extraction and substitution
//! - [`prompt`]: Interactive fill of missing values
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Environment-based configuration
//! - [`editor`]: External editor integration and stdin capture
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod prompt;
pub mod store;
pub mod template;
