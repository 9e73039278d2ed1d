//! Binary entrypoint for the devreg command line tool.
mod commands;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use devreg_catalog::Registry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devreg", version, about = "List and search developer records")]
struct Cli {
    /// Catalog directory holding the developer source files
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List developers
    List {
        /// Display details about the developers
        #[arg(short, long)]
        detail: bool,
    },
    /// Search for developers
    Search {
        /// Keyword to be searched
        keyword: String,

        /// Display details about the developers
        #[arg(short, long)]
        detail: bool,
    },
    /// Show a single developer
    Show {
        /// User name, defaults to the invoking user
        username: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let dir = catalog_dir(cli.dir);
    tracing::debug!(dir = %dir.display(), "using catalog directory");
    let registry = Registry::new(dir);

    match cli.command {
        Command::List { detail } => commands::list(&registry, detail),
        Command::Search { keyword, detail } => commands::search(&registry, &keyword, detail),
        Command::Show { username } => commands::show(&registry, username),
    }
}

/// Catalog directory: the --dir flag wins, then DEVREG_DIR, then the
/// in-package default.
fn catalog_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| {
        std::env::var("DEVREG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("developers"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_dir_flag_wins() {
        let dir = catalog_dir(Some(PathBuf::from("/tmp/catalog")));
        assert_eq!(dir, PathBuf::from("/tmp/catalog"));
    }
}
