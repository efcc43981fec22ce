//! Error types for the watermark workflow
//!
//! Every validation failure the pipeline can detect before compositing has
//! its own variant with a user-facing message. Validation errors are fatal:
//! the workflow either completes and writes one output file, or writes
//! nothing.

use thiserror::Error;

use crate::loader::ImageRole;

/// Error type covering input validation and output persistence.
#[derive(Debug, Error)]
pub enum MarkError {
    /// Input file does not exist or is not readable
    #[error("The file {path} doesn't exist.")]
    FileNotFound { path: String },

    /// Input file exists but the codec cannot decode it
    #[error("The file {path} couldn't be read as an image: {message}")]
    Decode { path: String, message: String },

    /// Image has fewer than 3 color components (e.g. grayscale)
    #[error("The number of {role} color components isn't 3.")]
    ColorComponents { role: ImageRole },

    /// Image pixel depth is neither 24-bit nor 32-bit
    #[error("The {role} isn't 24 or 32-bit.")]
    ColorDepth { role: ImageRole },

    /// Watermark is wider or taller than the source image
    #[error("The watermark's dimensions are larger.")]
    DimensionMismatch,

    /// Transparency color input is not three integers 0-255
    #[error("The transparency color input is invalid.")]
    InvalidColorInput,

    /// Blend weight input does not parse as an integer
    #[error("The transparency percentage isn't an integer number.")]
    PercentageNotInteger,

    /// Blend weight parses but lies outside 0-100
    #[error("The transparency percentage is out of range.")]
    PercentageOutOfRange,

    /// Placement method is neither `single` nor `grid`
    #[error("The position method input is invalid.")]
    InvalidPlacementMethod,

    /// Position input is not two integers
    #[error("The position input is invalid.")]
    InvalidPositionInput,

    /// Position parses but falls outside the legal placement range
    #[error("The position input is out of range.")]
    PositionOutOfRange,

    /// Output filename does not end in `.jpg` or `.png`
    #[error("The output file extension isn't \"jpg\" or \"png\".")]
    InvalidOutputExtension,

    /// `--use-alpha` requested for a watermark without an alpha channel
    #[error("The watermark doesn't have an alpha channel.")]
    AlphaChannelMissing,

    /// `--transparency-color` given for a watermark that has an alpha channel
    #[error("The transparency color can't be set for a watermark with an alpha channel.")]
    TransparencyColorUnsupported,

    /// IO failure after validation (prompt stream or output file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding failure while writing the output file
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl MarkError {
    /// True for errors detected by input validation, false for IO/encode
    /// failures that occur after all inputs were accepted.
    pub fn is_validation(&self) -> bool {
        !matches!(self, MarkError::Io(_) | MarkError::Image(_))
    }
}
