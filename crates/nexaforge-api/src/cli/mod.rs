//! CLI command definitions for the `nexaforge` binary.

pub mod catalog;
pub mod forge;
pub mod project;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Generate launch-ready website blueprints with a four-agent pipeline.
#[derive(Parser)]
#[command(name = "nexaforge", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans to stdout as OpenTelemetry data.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Run the pipeline once for a request file.
    Forge {
        /// Path to a JSON file shaped like the forge request body.
        request: PathBuf,
    },

    /// Show a stored blueprint.
    Show {
        /// Project slug to display.
        slug: String,
    },

    /// List the industries, themes, and tones a request may use.
    Catalog,
}
