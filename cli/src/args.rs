//! Command-line argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use epd_bitmap::ResizeFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    /// Nearest neighbour (blocky, keeps hard edges)
    Nearest,
    /// Bilinear
    Triangle,
    /// Bicubic Catmull-Rom spline
    CatmullRom,
    /// Gaussian blur kernel (soft)
    Gaussian,
    /// Lanczos with window 3 (sharpest)
    Lanczos3,
}

impl FilterArg {
    pub fn to_resize_filter(self) -> ResizeFilter {
        match self {
            FilterArg::Nearest => ResizeFilter::Nearest,
            FilterArg::Triangle => ResizeFilter::Triangle,
            FilterArg::CatmullRom => ResizeFilter::CatmullRom,
            FilterArg::Gaussian => ResizeFilter::Gaussian,
            FilterArg::Lanczos3 => ResizeFilter::Lanczos3,
        }
    }
}

/// Convert an image into a packed 1-bit hex bitmap for e-paper displays.
///
/// Output has one uppercase hex byte per line, 8 pixels per byte, MSB first.
#[derive(Debug, Parser)]
#[command(name = "epd-hex", version, about)]
pub struct Args {
    /// Source image (PNG, JPEG, BMP, ...)
    pub input: PathBuf,

    /// Destination hex file
    pub output: PathBuf,

    /// Panel width in pixels [env: EPD_WIDTH, default: 400]
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Panel height in pixels [env: EPD_HEIGHT, default: 300]
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Samples above this value become white [env: EPD_THRESHOLD, default: 128]
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Resampling kernel when the image size differs from the panel
    /// [env: EPD_RESIZE_FILTER, default: catmull-rom]
    #[arg(short, long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Also save the binarized image here (format from extension)
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Print the conversion report as JSON instead of a message
    #[arg(long)]
    pub json: bool,
}
