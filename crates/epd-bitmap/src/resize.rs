//! Resampling to the panel resolution.
//!
//! Unlike a print pipeline that keeps the aspect ratio, the panel has a
//! fixed raster, so the source is stretched to exactly the target size.

use image::GrayImage;
use image::imageops;
use tracing::debug;

use crate::options::ResizeFilter;
use crate::{EpdError, Result};

/// Resize a grayscale image to exactly `width` x `height`.
///
/// Returns the image unchanged if it already has the target dimensions, so
/// same-size input passes through without any resampling error.
pub fn resize_exact(
    img: &GrayImage,
    width: u32,
    height: u32,
    filter: ResizeFilter,
) -> Result<GrayImage> {
    if width == 0 || height == 0 {
        return Err(EpdError::Resize { width, height });
    }

    let (orig_w, orig_h) = img.dimensions();
    if (orig_w, orig_h) == (width, height) {
        debug!(width, height, "Image already at target size, skipping resize");
        return Ok(img.clone());
    }

    debug!(
        orig_w,
        orig_h,
        new_width = width,
        new_height = height,
        %filter,
        "Resizing image to target size"
    );

    Ok(imageops::resize(img, width, height, filter.filter_type()))
}
