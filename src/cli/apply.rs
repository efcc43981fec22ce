//! CLI dispatch for the `pixelmark apply` command.
//!
//! Resolves every workflow parameter from a flag when given or a prompt when
//! not, validates in the fixed workflow order, composites, and writes the
//! output file. A flag goes through the identical validator as the prompted
//! answer, so both paths fail with the same message and exit code.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use crate::compositor::composite;
use crate::config::{
    parse_placement_method, parse_position, parse_transparency_color, parse_weight, BlendConfig,
    Placement, PlacementMethod, Transparency,
};
use crate::error::MarkError;
use crate::loader::{load_image, ImageRole, LoadedImage};
use crate::output::{save_image, validate_extension};
use crate::prompt::Prompter;

use super::EXIT_SUCCESS;

/// Arguments for `pixelmark apply`; every one is optional and prompted for
/// when missing.
#[derive(Args, Debug, Default)]
pub struct ApplyArgs {
    /// Source image file
    pub image: Option<PathBuf>,

    /// Watermark image file
    pub watermark: Option<PathBuf>,

    /// Use the watermark's alpha channel (requires a 32-bit watermark)
    #[arg(long, num_args = 0..=1, default_missing_value = "true", conflicts_with = "transparency_color")]
    pub use_alpha: Option<bool>,

    /// Watermark color treated as fully transparent, e.g. "255 0 255"
    /// (requires a 24-bit watermark)
    #[arg(long, value_name = "R G B")]
    pub transparency_color: Option<String>,

    /// Blend weight percentage applied to the watermark, 0-100
    #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Placement method: single or grid
    #[arg(long, value_name = "METHOD")]
    pub placement: Option<String>,

    /// Top-left offset for single placement, e.g. "10 20"
    #[arg(long, value_name = "X Y", allow_hyphen_values = true)]
    pub position: Option<String>,

    /// Output image file (.jpg or .png)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute the apply command.
pub fn run_apply(args: ApplyArgs) -> ExitCode {
    let result = {
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        let mut prompter = Prompter::new(stdin, stdout);
        run_workflow(&mut prompter, &args)
    };

    match result {
        Ok(path) => {
            println!("The watermarked image {} has been created.", path.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => super::report_error(&e),
    }
}

/// The full workflow: collect and validate inputs in order, composite, save.
///
/// Returns the output path on success. Steps run strictly in sequence; the
/// first failure aborts before any file is written.
fn run_workflow<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    args: &ApplyArgs,
) -> Result<PathBuf, MarkError> {
    let source_path = match &args.image {
        Some(path) => path.clone(),
        None => PathBuf::from(prompter.ask("Input the image filename:")?),
    };
    let source = load_image(&source_path, ImageRole::Source)?;

    let watermark_path = match &args.watermark {
        Some(path) => path.clone(),
        None => PathBuf::from(prompter.ask("Input the watermark image filename:")?),
    };
    let watermark = load_image(&watermark_path, ImageRole::Watermark)?;

    if source.width() < watermark.width() || source.height() < watermark.height() {
        return Err(MarkError::DimensionMismatch);
    }

    let transparency = resolve_transparency(prompter, args, &watermark)?;

    let weight_input = match &args.weight {
        Some(value) => value.clone(),
        None => prompter.ask("Input the watermark transparency percentage (Integer 0-100):")?,
    };
    let weight = parse_weight(&weight_input)?;

    let method_input = match &args.placement {
        Some(value) => value.clone(),
        None => prompter.ask("Choose the position method (single, grid):")?,
    };
    let placement = match parse_placement_method(&method_input)? {
        PlacementMethod::Grid => Placement::Grid,
        PlacementMethod::Single => {
            let max_x = source.width() - watermark.width();
            let max_y = source.height() - watermark.height();
            let input = match &args.position {
                Some(value) => value.clone(),
                None => prompter.ask(&format!(
                    "Input the watermark position ([x 0-{}] [y 0-{}]):",
                    max_x, max_y
                ))?,
            };
            let (x, y) = parse_position(&input, max_x, max_y)?;
            Placement::Single { x, y }
        }
    };

    let output_name = match &args.output {
        Some(path) => path.display().to_string(),
        None => prompter.ask("Input the output image filename (jpg or png extension):")?,
    };
    validate_extension(&output_name)?;
    let output_path = PathBuf::from(&output_name);

    let config = BlendConfig::new(transparency, weight, placement);
    let result = composite(source.pixels(), watermark.pixels(), &config);
    save_image(&result, &output_path)?;
    Ok(output_path)
}

/// Pick the transparency mechanism the watermark's pixel format allows.
///
/// A 32-bit watermark offers its alpha channel; a 24-bit one offers a
/// transparency color. The other mechanism's flag is a validation error, so
/// flags cannot reach states the prompts cannot.
fn resolve_transparency<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    args: &ApplyArgs,
    watermark: &LoadedImage,
) -> Result<Transparency, MarkError> {
    if watermark.has_alpha() {
        if args.transparency_color.is_some() {
            return Err(MarkError::TransparencyColorUnsupported);
        }
        let use_alpha = match args.use_alpha {
            Some(value) => value,
            None => prompter.confirm("Do you want to use the watermark's Alpha channel?")?,
        };
        Ok(if use_alpha { Transparency::Alpha } else { Transparency::None })
    } else {
        if args.use_alpha == Some(true) {
            return Err(MarkError::AlphaChannelMissing);
        }
        let color_input = match &args.transparency_color {
            Some(value) => Some(value.clone()),
            None => {
                if prompter.confirm("Do you want to set a transparency color?")? {
                    Some(prompter.ask("Input a transparency color ([Red] [Green] [Blue]):")?)
                } else {
                    None
                }
            }
        };
        match color_input {
            Some(value) => Ok(Transparency::Color(parse_transparency_color(&value)?)),
            None => Ok(Transparency::None),
        }
    }
}
