use std::fs::File;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ladle::app::AppContext;
use ladle::cli::{commands, Cli, Commands};
use ladle::config::Config;
use ladle::domain::RecipeKey;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs go to a file when one is given.
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        None => registry.with(fmt::layer().with_writer(std::io::stderr)).init(),
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }
    if let Some(contract) = cli.contract {
        config.server.contract = contract;
    }

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Search { ingredients } => {
            commands::search(&ctx, &ingredients).await?;
        }
        Commands::Show(args) => {
            let key = match (args.id, args.name) {
                (Some(id), _) => RecipeKey::Id(id),
                (None, Some(name)) => RecipeKey::Name(name),
                (None, None) => anyhow::bail!("either --id or --name is required"),
            };
            commands::show(&ctx, key).await?;
        }
        Commands::Tui => {
            ladle::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
