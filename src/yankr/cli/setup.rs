use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

const LONG_ABOUT: &str = "\
A CLI tool for managing and using code snippets with parameterized templates.

ENVIRONMENT VARIABLES:
  YANKR_SNIPPETS_DIR  Override the default snippets directory (~/.config/yankr/snippets)
  EDITOR              Editor used by `create`; without it content is read from stdin

SNIPPET PARAMETERS:
  Parameters in snippets are written with double curly braces: {{parameter_name}}
  Provide values with --param, or you will be prompted for them interactively.";

#[derive(Parser, Debug)]
#[command(name = "yankr", bin_name = "yankr", version)]
#[command(about = "Snippet manager with clipboard integration", long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all available snippets
    #[command(alias = "ls")]
    List,

    /// Process a snippet and copy it to the clipboard
    #[command(after_help = "Example: yankr yank email-template --param recipient=John --param subject=Meeting")]
    Yank {
        /// Name of the snippet
        #[arg(value_name = "SNIPPET_NAME", value_parser = NonEmptyStringValueParser::new())]
        name: String,

        /// Parameter value in the form 'name=value' (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,
    },

    /// Create a new snippet
    Create {
        /// Name of the snippet
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        name: String,
    },

    /// Show the current snippets directory path
    Path,

    /// Show parameters in a snippet
    Params {
        /// Name of the snippet
        #[arg(value_name = "SNIPPET_NAME", value_parser = NonEmptyStringValueParser::new())]
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_params() {
        let cli = Cli::try_parse_from([
            "yankr", "yank", "mail", "--param", "to=Ada", "-p", "subject=Hi",
        ])
        .unwrap();
        match cli.command {
            Commands::Yank { name, params } => {
                assert_eq!(name, "mail");
                assert_eq!(params, vec!["to=Ada", "subject=Hi"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn yank_without_params() {
        let cli = Cli::try_parse_from(["yankr", "yank", "mail"]).unwrap();
        assert!(matches!(cli.command, Commands::Yank { ref params, .. } if params.is_empty()));
    }

    #[test]
    fn yank_requires_name() {
        assert!(Cli::try_parse_from(["yankr", "yank"]).is_err());
    }

    #[test]
    fn create_requires_name_flag() {
        assert!(Cli::try_parse_from(["yankr", "create"]).is_err());
        let cli = Cli::try_parse_from(["yankr", "create", "-n", "todo"]).unwrap();
        assert!(matches!(cli.command, Commands::Create { ref name } if name == "todo"));
    }

    #[test]
    fn empty_snippet_names_rejected() {
        assert!(Cli::try_parse_from(["yankr", "create", "-n", ""]).is_err());
        assert!(Cli::try_parse_from(["yankr", "create", "--name="]).is_err());
        assert!(Cli::try_parse_from(["yankr", "yank", ""]).is_err());
        assert!(Cli::try_parse_from(["yankr", "params", ""]).is_err());
    }

    #[test]
    fn list_alias_and_global_verbose() {
        let cli = Cli::try_parse_from(["yankr", "ls", "-v"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
        assert!(cli.verbose);
    }
}
