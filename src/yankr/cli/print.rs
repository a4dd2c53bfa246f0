use colored::Colorize;
use yankr::api::{CmdMessage, MessageLevel, SnippetsLocation};
use yankr::config::{DirSource, SNIPPETS_DIR_ENV};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_snippet_list(names: &[String]) {
    if names.is_empty() {
        return;
    }
    println!("Available snippets:");
    for name in names {
        println!("- {}", name);
    }
}

pub(super) fn print_params(snippet: &str, params: &[String], usage: Option<&str>) {
    if params.is_empty() {
        return;
    }

    println!("Parameters in snippet '{}':", snippet);
    for param in params {
        println!("- {}", param);
    }

    if let Some(usage) = usage {
        println!("\nCommand-line usage example:");
        println!("  {}", usage);
    }
}

pub(super) fn print_location(location: &SnippetsLocation) {
    println!("Current snippets directory: {}", location.dir.display());
    let origin = match location.source {
        DirSource::Default => "(default location)".to_string(),
        DirSource::Env => format!("(set by {})", SNIPPETS_DIR_ENV),
    };
    println!("{}", origin.dimmed());
}
