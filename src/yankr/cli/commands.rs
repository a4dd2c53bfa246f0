//! # CLI Layer
//!
//! This module is **one possible UI client** for yankr. It is the only place
//! that:
//! - Knows about the terminal (stdin, stdout, stderr)
//! - Writes to the clipboard
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Loads configuration and builds the API
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::print::{print_location, print_messages, print_params, print_snippet_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;
use yankr::api::YankrApi;
use yankr::clipboard::copy_to_clipboard;
use yankr::config::YankrConfig;
use yankr::error::Result;
use yankr::store::fs::FileStore;

struct AppContext {
    api: YankrApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Commands::List => handle_list(&ctx),
        Commands::Yank { name, params } => handle_yank(&ctx, &name, &params),
        Commands::Create { name } => handle_create(&mut ctx, &name),
        Commands::Path => handle_path(&ctx),
        Commands::Params { name } => handle_params(&ctx, &name),
    }
}

/// Diagnostics go to stderr so they never mix with snippet output.
fn setup_logging(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(verbose, rust_log.as_deref());

    // A second init (only possible in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

/// `RUST_LOG` is used as given when set. The built-in level only applies when
/// it is unset, or is raised to debug by `--verbose`.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) if verbose => {
            EnvFilter::new(directives).add_directive(Level::DEBUG.into())
        }
        Some(directives) => EnvFilter::new(directives),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("warn"),
    }
}

fn init_context() -> Result<AppContext> {
    let config = YankrConfig::load()?;
    debug!(
        dir = %config.snippets_dir.display(),
        source = ?config.dir_source,
        editor = ?config.editor,
        "configuration loaded"
    );

    let store = FileStore::new(config.snippets_dir.clone());
    Ok(AppContext {
        api: YankrApi::new(store, config),
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_snippets()?;
    print_snippet_list(&result.listed_snippets);
    print_messages(&result.messages);
    Ok(())
}

fn handle_yank(ctx: &AppContext, name: &str, params: &[String]) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let result = ctx.api.yank(name, params, &mut input, &mut output)?;
    if let Some(text) = &result.yanked_text {
        copy_to_clipboard(text)?;
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(ctx: &mut AppContext, name: &str) -> Result<()> {
    let stdin = std::io::stdin();
    let mut output = std::io::stdout();

    let result = ctx.api.create_snippet(name, stdin.lock(), &mut output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.snippets_path()?;
    if let Some(location) = &result.location {
        print_location(location);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_params(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.snippet_params(name)?;
    print_params(name, &result.params, result.usage.as_deref());
    print_messages(&result.messages);
    Ok(())
}
