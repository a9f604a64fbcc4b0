//! Binarization of grayscale images.
//!
//! A fixed cutoff only; no error diffusion. Samples strictly above the
//! threshold become 1 (white, unset on the panel), everything else 0 (black).

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageError, ImageFormat, Luma};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{EpdError, Result};

/// Row-major grid of single-bit pixels, one `u8` (0 or 1) per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl BinaryGrid {
    /// Build a grid from raw 0/1 values. Any non-zero value is stored as 1.
    ///
    /// # Panics
    /// Panics if `bits.len() != width * height`.
    pub fn from_bits(width: u32, height: u32, bits: Vec<u8>) -> Self {
        assert_eq!(
            bits.len(),
            width as usize * height as usize,
            "bit count must equal width * height"
        );
        let bits = bits.into_iter().map(|b| u8::from(b != 0)).collect();
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bit at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.bits
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// One row of bits, `width` entries long.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.bits[start..start + w]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact(0) panics; a zero-width grid has no pixels to yield
        let w = (self.width as usize).max(1);
        self.bits.chunks_exact(w)
    }

    /// Number of 1 (white) pixels.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Render as a black/white image: 0 -> 0, 1 -> 255.
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            let bit = self.bits[y as usize * self.width as usize + x as usize];
            Luma([if bit == 1 { 255 } else { 0 }])
        })
    }

    /// Save the black/white rendering, format chosen by the file extension.
    pub fn save_preview(&self, path: &Path) -> Result<()> {
        self.stage_preview(path)?.commit()
    }

    /// Encode the black/white rendering into a temporary file next to `path`.
    ///
    /// Nothing appears at `path` until [`StagedPreview::commit`] is called;
    /// dropping the staged preview removes the temporary file.
    pub fn stage_preview(&self, path: &Path) -> Result<StagedPreview> {
        let to_preview_error = |source: ImageError| EpdError::PreviewWrite {
            path: path.to_path_buf(),
            source,
        };

        let format = ImageFormat::from_path(path).map_err(to_preview_error)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let tmp = tempfile::Builder::new()
            .prefix(".epd-preview-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| to_preview_error(ImageError::IoError(e)))?;

        {
            let mut writer = BufWriter::new(tmp.as_file());
            self.to_image()
                .write_to(&mut writer, format)
                .map_err(to_preview_error)?;
            writer
                .flush()
                .map_err(|e| to_preview_error(ImageError::IoError(e)))?;
        }

        Ok(StagedPreview {
            tmp,
            path: path.to_path_buf(),
        })
    }
}

/// Fully encoded preview image waiting to be moved into place.
#[derive(Debug)]
pub struct StagedPreview {
    tmp: NamedTempFile,
    path: PathBuf,
}

impl StagedPreview {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rename the temporary file over the destination path.
    pub fn commit(self) -> Result<()> {
        let path = self.path;
        self.tmp
            .persist(&path)
            .map_err(|e| EpdError::PreviewWrite {
                path: path.clone(),
                source: ImageError::IoError(e.error),
            })?;
        debug!(path = %path.display(), "Saved binarized preview");
        Ok(())
    }
}

/// Threshold a grayscale image into a [`BinaryGrid`].
///
/// `bit = 1 if intensity > threshold else 0`.
pub fn binarize(img: &GrayImage, threshold: u8) -> BinaryGrid {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Applying threshold conversion");

    let bits = img.pixels().map(|p| u8::from(p.0[0] > threshold)).collect();

    BinaryGrid {
        width,
        height,
        bits,
    }
}
