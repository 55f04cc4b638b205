pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Inject local properties into build-time string resources.
#[derive(Parser, Debug)]
#[command(name = "resfill", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to alternative manifest file
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize resfill in the current project
    Init,

    /// Resolve bindings and write the resource file
    Inject {
        /// Output file path (overrides the manifest)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format: xml, json, or properties (overrides the manifest)
        #[arg(long)]
        format: Option<String>,

        /// Fail on any missing source key instead of defaulting
        #[arg(long)]
        strict: bool,
    },

    /// Report missing, empty, and unused source keys without writing
    Check,

    /// Show manifest and source file summary
    Status,
}
