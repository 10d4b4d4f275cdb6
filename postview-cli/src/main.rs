//! # postview CLI
//!
//! Command-line interface for inspecting derived views (threads,
//! reactions, files) of a normalized store snapshot.

mod commands;
mod config;
mod snapshot;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "postview.yml")]
    config: PathBuf,

    /// Store snapshot (JSON), overriding the configured one
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the posts of a thread in channel order
    Thread {
        /// Channel id
        #[arg(long)]
        channel: String,

        /// Root post id
        #[arg(long)]
        root: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the reactions on a post
    Reactions {
        /// Post id
        #[arg(long)]
        post: String,

        /// Also resolve the profiles of the reacting users
        #[arg(long)]
        with_profiles: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the files attached to a post
    Files {
        /// Post id
        #[arg(long)]
        post: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run every view twice and report selector cache metrics
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let snapshot = cli.snapshot.as_deref();

    match cli.command {
        Commands::Thread {
            channel,
            root,
            json,
        } => commands::show_thread(&cli.config, snapshot, &channel, &root, json),
        Commands::Reactions {
            post,
            with_profiles,
            json,
        } => commands::show_reactions(&cli.config, snapshot, &post, with_profiles, json),
        Commands::Files { post, json } => commands::show_files(&cli.config, snapshot, &post, json),
        Commands::Stats { json } => commands::show_stats(&cli.config, snapshot, json),
    }
}
