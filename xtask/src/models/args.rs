//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.
//! It specifies the available subcommands, arguments, and flags for the build tools.

use clap::{Parser, Subcommand};
use rescs_kernel::domain::constants::DEFAULT_VIEW;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Build tools for the RESCS SHACL shapes library")]
pub struct Cli {
    /// Directory holding `shapes/`, `ontology/` and `compositeviews/` (defaults to the workspace root)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Settings file layered under the environment (defaults to `rescs.toml` when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at DEBUG level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to `xtask.log` in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Write the log file as JSON lines
    #[arg(long, global = true, requires = "log_dir")]
    pub log_json: bool,

    /// Log directives such as `info,rescs_views=debug`, used instead of `RUST_LOG`
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Build the shapes graphs under `ontology/`
    Shapes {
        #[command(subcommand)]
        action: ShapesAction,
    },
    /// Manage composite views on Nexus
    Views {
        #[command(subcommand)]
        action: ViewsAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ShapesAction {
    /// Harvest shapes, merge them with the ontology and derive property definitions
    Generate {},
    /// Remove the sh:and conjunctions from the shapes graph
    Transform {},
    /// Close every shape, ignoring the properties inherited from superclasses
    Close {
        /// Output file (defaults to `ontology/shapes_graph_closed.json`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate, then transform
    Build {},
}

#[derive(Debug, Subcommand)]
pub enum ViewsAction {
    /// Create or update composite views
    Register {
        /// View names under `compositeviews/`
        #[arg(default_value = DEFAULT_VIEW)]
        names: Vec<String>,

        /// Print the assembled documents instead of uploading them
        #[arg(long)]
        dry_run: bool,
    },
}
