//! CLI dispatch for the `pixelmark inspect` command.
//!
//! Read-only metadata query: reports what the decoder says about a file,
//! including formats `apply` would reject, so a user can see why.

use std::path::Path;
use std::process::ExitCode;

use crate::loader::probe_image;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the inspect command.
pub fn run_inspect(file: &Path, json: bool) -> ExitCode {
    let info = match probe_image(file) {
        Ok(info) => info,
        Err(e) => return super::report_error(&e),
    };

    if json {
        match serde_json::to_string(&info) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("{}: {}x{}", info.path, info.width, info.height);
        println!("  color type: {}", info.color_type);
        println!("  bit depth:  {}", info.bit_depth);
        println!("  channels:   {}", info.channels);
        println!("  alpha:      {}", if info.alpha { "yes" } else { "no" });
    }
    ExitCode::from(EXIT_SUCCESS)
}
