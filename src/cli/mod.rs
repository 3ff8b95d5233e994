//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod context;
pub mod list;
pub mod mutate;
pub mod prompt;

pub use context::CommandContext;

use crate::store::DEFAULT_LIST_FILE;

/// repo-sweep - list, hide and delete the GitHub repositories you own
#[derive(Parser, Debug)]
#[command(name = "repo-sweep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// File with GITHUB_USERNAME / GITHUB_TOKEN lines
    #[arg(
        long,
        global = true,
        env = "REPO_SWEEP_ENV_FILE",
        default_value = ".env",
        hide_env = true
    )]
    pub env_file: PathBuf,

    /// Enable debug logging
    #[arg(long, global = true, env = "REPO_SWEEP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List your repositories and save their names to a file
    List {
        /// Include private repositories
        #[arg(long)]
        private: bool,

        /// Number of repositories to request (single page)
        #[arg(
            long = "per_page",
            visible_alias = "per-page",
            default_value_t = 100,
            allow_negative_numbers = true
        )]
        per_page: i64,

        /// File to write the repository names to
        #[arg(long, default_value = DEFAULT_LIST_FILE)]
        output: PathBuf,
    },

    /// Make every repository named in repositories.txt private
    MakePrivate,

    /// Delete every repository named in repositories.txt
    Delete,
}
