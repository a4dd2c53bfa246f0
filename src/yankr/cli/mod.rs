//! # CLI Behavior
//!
//! This is **one possible UI client** for yankr, not the application itself.
//! For the overall architecture, see the library crate documentation.
//!
//! ## Commands
//!
//! - `yankr list` (alias `ls`): names of all snippets
//! - `yankr yank <name> [-p name=value]...`: fill a snippet, prompting for any
//!   parameter not given on the command line, and copy it to the clipboard
//! - `yankr create -n <name>`: open `$EDITOR` on a new empty snippet, or read
//!   its content from stdin when `$EDITOR` is unset
//! - `yankr path`: where snippets live, and whether that was overridden
//! - `yankr params <name>`: the snippet's placeholders and a ready-made command
//!
//! Prompts are written in the order placeholders first appear in the snippet.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `print`: Output formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
