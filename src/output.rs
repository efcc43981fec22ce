//! Output filename validation and file persistence

use std::path::Path;

use image::RgbImage;

use crate::error::MarkError;

/// Validate the output filename: it must end in `.jpg` or `.png`.
///
/// The check is on the literal name, case-sensitive, exactly the rule the
/// interactive prompt states. `.jpeg` is not accepted.
pub fn validate_extension(name: &str) -> Result<(), MarkError> {
    if name.ends_with(".jpg") || name.ends_with(".png") {
        Ok(())
    } else {
        Err(MarkError::InvalidOutputExtension)
    }
}

/// Save the composited image; the format follows the file extension.
///
/// Parent directories are created if missing. Nothing is written unless
/// every input already passed validation.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), MarkError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image.save(path)?;
    Ok(())
}
