//! Image loading.

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageError, ImageReader};
use tracing::debug;

use crate::{EpdError, Result};

/// Decode an image file and convert it to 8-bit grayscale.
///
/// The format is guessed from the file contents, falling back to the
/// extension. Grayscale uses the `image` crate's luma transform
/// (Rec. 709 weights); alpha is dropped.
pub fn load_grayscale(path: &Path) -> Result<GrayImage> {
    let img = decode(path).map_err(|source| EpdError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded source image"
    );

    Ok(to_grayscale(&img))
}

/// Convert any decoded image to single-channel 8-bit intensities.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => other.to_luma8(),
    }
}

fn decode(path: &Path) -> std::result::Result<DynamicImage, ImageError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    reader.decode()
}
