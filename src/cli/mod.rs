//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for the individual commands.

mod apply;
mod inspect;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::MarkError;

pub use apply::ApplyArgs;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Pixelmark - overlay a watermark image onto a source image
#[derive(Parser)]
#[command(name = "pixelmark")]
#[command(about = "Pixelmark - Overlay a watermark image onto a source image")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Composite a watermark onto an image.
    ///
    /// Parameters not given as flags are asked for interactively, in a fixed
    /// order; the first invalid answer terminates the run without writing
    /// anything.
    Apply(ApplyArgs),

    /// Show image metadata (dimensions, color type, bit depth, alpha)
    Inspect {
        /// Image file to inspect
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply(args) => apply::run_apply(args),
        Commands::Inspect { file, json } => inspect::run_inspect(&file, json),
    }
}

/// Print an error to stderr and pick its exit code: validation failures use
/// the distinguished invalid-input code, later IO/encode failures do not.
pub(crate) fn report_error(error: &MarkError) -> ExitCode {
    eprintln!("{}", crate::terminal::paint_error(&error.to_string()));
    if error.is_validation() {
        ExitCode::from(EXIT_INVALID_ARGS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}
