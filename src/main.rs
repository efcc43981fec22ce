//! Pixelmark - Command-line tool for watermarking images

use std::process::ExitCode;

use pixelmark::cli;

fn main() -> ExitCode {
    cli::run()
}
