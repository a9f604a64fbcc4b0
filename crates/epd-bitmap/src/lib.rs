//! Packed 1-bit bitmap generation for monochrome e-paper displays.
//!
//! Loads a raster image, resizes it to the panel resolution, binarizes it
//! with a fixed threshold and packs 8 pixels per byte (MSB first). The packed
//! buffer is written as one uppercase hex byte per line.

pub mod convert;
pub mod hex;
pub mod load;
pub mod options;
pub mod pack;
pub mod resize;
pub mod threshold;

use std::path::PathBuf;

// Re-exports for convenience
pub use convert::{ConversionReport, convert, convert_image};
pub use hex::{encode_hex, write_hex, write_hex_file};
pub use load::load_grayscale;
pub use options::{ConvertOptions, ResizeFilter};
pub use pack::{PackedBuffer, pack, pack_row};
pub use resize::resize_exact;
pub use threshold::{BinaryGrid, binarize};

/// Default panel width in pixels.
pub const DEFAULT_WIDTH: u32 = 400;

/// Default panel height in pixels.
pub const DEFAULT_HEIGHT: u32 = 300;

/// Default binarization cutoff. Samples strictly above it become 1.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Errors that can occur while converting an image.
#[derive(Debug, thiserror::Error)]
pub enum EpdError {
    #[error("Failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid target dimensions {width}x{height}: width and height must be positive")]
    Resize { width: u32, height: u32 },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save preview image {}: {source}", .path.display())]
    PreviewWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Result type alias for bitmap conversion operations.
pub type Result<T> = std::result::Result<T, EpdError>;
