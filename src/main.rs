//! repo-sweep - list, hide and delete the GitHub repositories you own

use clap::Parser;

mod batch;
mod cli;
mod client;
mod config;
mod error;
mod inventory;
mod output;
mod store;

use batch::Action;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Route `log` records to stderr; `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List {
            private,
            per_page,
            output,
        } => cli::list::run(&cli.env_file, private, per_page, &output).await,
        Commands::MakePrivate => cli::mutate::run(&cli.env_file, Action::MakePrivate).await,
        Commands::Delete => cli::mutate::run(&cli.env_file, Action::Delete).await,
    }
}
