// ABOUTME: CLI argument parsing and command routing for dreamer
//
// Provides command-line interface for:
// - Expanding an idea into scenes (story)
// - Breaking a script into shots (storyboard)
// - Listing saved configurations (configs)
// - Launching the TUI (tui, default)

pub mod configs;
pub mod story;
pub mod storyboard;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Dreamer - cinematic prompt builder for AI video generation
#[derive(Parser)]
#[command(name = "dreamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Expand an idea into ordered scene summaries
    Story(StoryArgs),

    /// Break a script into storyboard shots
    Storyboard(StoryboardArgs),

    /// List saved prompt configurations
    Configs,
}

/// Arguments for the story command
#[derive(clap::Args)]
pub struct StoryArgs {
    /// The idea to expand
    pub idea: String,
}

/// Arguments for the storyboard command
#[derive(clap::Args)]
pub struct StoryboardArgs {
    /// Read the script from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,
}
