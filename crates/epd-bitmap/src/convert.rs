//! The conversion pipeline: load, grayscale, resize, threshold, pack, write.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::Result;
use crate::hex::write_hex_file;
use crate::load::{load_grayscale, to_grayscale};
use crate::options::ConvertOptions;
use crate::pack::{PackedBuffer, pack};
use crate::resize::resize_exact;
use crate::threshold::{BinaryGrid, binarize};

/// Summary of a completed conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub width: u32,
    pub height: u32,
    pub threshold: u8,
    pub filter: String,
    pub resized: bool,
    /// Number of bytes, and therefore lines, in the output file.
    pub bytes: usize,
    /// Pixels that came out white (bit 1).
    pub white_pixels: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PathBuf>,
}

/// Convert `input` into a hex bitmap file at `output`.
///
/// Nothing is written unless every stage succeeds. The optional preview is
/// encoded up front but only moved into place after the hex file.
pub fn convert(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConversionReport> {
    options.validate()?;

    let gray = load_grayscale(input)?;
    let (source_width, source_height) = gray.dimensions();

    let grid = binarize_to_panel(&gray, options)?;
    let packed = pack(&grid);

    let staged_preview = options
        .preview
        .as_deref()
        .map(|path| grid.stage_preview(path))
        .transpose()?;

    write_hex_file(output, packed.as_bytes())?;

    if let Some(staged) = staged_preview {
        if let Err(e) = staged.commit() {
            // The hex file must not outlive a failed run
            if let Err(rm) = std::fs::remove_file(output) {
                warn!(output = %output.display(), error = %rm, "Failed to remove output");
            }
            return Err(e);
        }
    }

    info!(
        input = %input.display(),
        output = %output.display(),
        bytes = packed.len(),
        "Image converted"
    );

    Ok(ConversionReport {
        output: output.to_path_buf(),
        source_width,
        source_height,
        width: options.width,
        height: options.height,
        threshold: options.threshold,
        filter: options.filter.to_string(),
        resized: (source_width, source_height) != (options.width, options.height),
        bytes: packed.len(),
        white_pixels: grid.count_ones(),
        preview: options.preview.clone(),
    })
}

/// Run the in-memory part of the pipeline on an already decoded image.
pub fn convert_image(img: &DynamicImage, options: &ConvertOptions) -> Result<PackedBuffer> {
    options.validate()?;
    let gray = to_grayscale(img);
    let grid = binarize_to_panel(&gray, options)?;
    Ok(pack(&grid))
}

fn binarize_to_panel(gray: &GrayImage, options: &ConvertOptions) -> Result<BinaryGrid> {
    let resized = resize_exact(gray, options.width, options.height, options.filter)?;
    let grid = binarize(&resized, options.threshold);
    debug!(
        white = grid.count_ones(),
        total = options.width as usize * options.height as usize,
        "Binarized panel image"
    );
    Ok(grid)
}
