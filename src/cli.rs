use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hooksync")]
#[command(version)]
#[command(about = "Declarative webhook management - declare, diff, converge", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the webhooks currently defined on the remote service
    List(ListArgs),

    /// Show what apply would change, without touching anything
    Diff(DiffArgs),

    /// Converge the remote service to the declared state
    Apply(ApplyArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
pub struct ListArgs {
    /// API secret for the remote service
    #[arg(short, long, env = "JW_API_SECRET", hide_env_values = true)]
    pub secret: String,

    /// Include the server-assigned webhook id in the listing
    #[arg(long)]
    pub id: bool,
}

#[derive(Parser)]
pub struct DiffArgs {
    /// API secret for the remote service
    #[arg(short, long, env = "JW_API_SECRET", hide_env_values = true)]
    pub secret: String,

    /// Path to the declarations file
    #[arg(short, long)]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// API secret for the remote service
    #[arg(short, long, env = "JW_API_SECRET", hide_env_values = true)]
    pub secret: String,

    /// Path to the declarations file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Dry run - show what would be done
    #[arg(short, long)]
    pub dry_run: bool,
}
