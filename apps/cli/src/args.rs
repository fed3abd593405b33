//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "vls")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Static renderer for the Venezuelan Legal Services landing page")]
pub struct Cli {
    /// Configuration file (defaults to an optional `vls.toml` in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the landing page to an HTML file
    Render {
        /// Destination file (overrides `output.path`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the document to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Print the JSON-LD structured data
    #[command(name = "json-ld")]
    JsonLd {
        /// Indented output instead of the script-safe compact form
        #[arg(long)]
        pretty: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli = Cli::parse_from(["vls", "render", "--config", "site.toml", "-o", "out.html"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("site.toml")));
        match cli.command {
            Command::Render { output, stdout } => {
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert!(!stdout);
            },
            Command::JsonLd { .. } => panic!("expected render"),
        }
    }

    #[test]
    fn stdout_conflicts_with_output() {
        let result = Cli::try_parse_from(["vls", "render", "--stdout", "-o", "out.html"]);
        assert!(result.is_err());
    }
}
