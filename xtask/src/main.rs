#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;
pub mod services;

use crate::handlers::{shapes, views};
use crate::models::args::{AppCommands, Cli, ShapesAction, ViewsAction};
use crate::services::utils::{init_logger, resolve_workspace};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logger(&cli)?;
    let workspace = resolve_workspace(cli.root)?;

    match cli.command {
        AppCommands::Shapes { action } => match action {
            ShapesAction::Generate {} => shapes::generate(&workspace)?,
            ShapesAction::Transform {} => shapes::transform(&workspace)?,
            ShapesAction::Close { output } => shapes::close(&workspace, output.as_deref())?,
            ShapesAction::Build {} => shapes::build(&workspace)?,
        },
        AppCommands::Views { action } => match action {
            ViewsAction::Register { names, dry_run } => {
                views::register(&workspace, &names, dry_run, cli.config.as_deref())?;
            },
        },
    }

    Ok(())
}
