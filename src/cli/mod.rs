pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::client::SearchContract;

#[derive(Parser)]
#[command(name = "ladle")]
#[command(about = "Find recipes for the ingredients you have", long_about = None)]
pub struct Cli {
    /// Recipe server base URL (overrides the config file)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Search request shape expected by the server
    #[arg(long, value_enum, global = true)]
    pub contract: Option<SearchContract>,

    /// Path to an alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search recipes for a list of ingredients
    Search {
        /// Ingredients, as separate arguments or comma separated
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Show the full recipe
    Show(ShowArgs),
    /// Launch the TUI
    Tui,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct ShowArgs {
    /// Recipe id as returned by `search`
    #[arg(long)]
    pub id: Option<String>,

    /// Recipe name, for servers without ids
    #[arg(long)]
    pub name: Option<String>,
}
