//! Conversion options.
//!
//! Panel resolution, binarization cutoff and resampling kernel are carried
//! here rather than as globals so one binary can target several displays.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use image::imageops::FilterType;

use crate::{DEFAULT_HEIGHT, DEFAULT_THRESHOLD, DEFAULT_WIDTH, EpdError, Result};

/// Resampling kernel used when the source size differs from the panel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    Nearest,
    /// Bilinear.
    Triangle,
    /// Bicubic (Catmull-Rom spline).
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    /// All filters, in the order they are listed to users.
    pub const ALL: [ResizeFilter; 5] = [
        ResizeFilter::Nearest,
        ResizeFilter::Triangle,
        ResizeFilter::CatmullRom,
        ResizeFilter::Gaussian,
        ResizeFilter::Lanczos3,
    ];

    /// Name used on the command line and in configuration.
    pub fn name(self) -> &'static str {
        match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Triangle => "triangle",
            ResizeFilter::CatmullRom => "catmull-rom",
            ResizeFilter::Gaussian => "gaussian",
            ResizeFilter::Lanczos3 => "lanczos3",
        }
    }

    pub fn filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResizeFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "bilinear" => Ok(ResizeFilter::Triangle),
            "bicubic" | "catmullrom" => Ok(ResizeFilter::CatmullRom),
            "lanczos" => Ok(ResizeFilter::Lanczos3),
            _ => ResizeFilter::ALL
                .into_iter()
                .find(|f| f.name() == lower)
                .ok_or_else(|| {
                    let names: Vec<&str> = ResizeFilter::ALL.iter().map(|f| f.name()).collect();
                    format!("unknown resize filter '{s}' (expected one of: {})", names.join(", "))
                }),
        }
    }
}

/// Configuration options for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Target width in pixels. A multiple of 8 packs without row padding.
    pub width: u32,

    /// Target height in pixels.
    pub height: u32,

    /// Samples strictly greater than this become 1 (white), the rest 0 (black).
    pub threshold: u8,

    /// Kernel used when the source has to be resampled.
    pub filter: ResizeFilter,

    /// Optional path for a black/white rendering of the binarized image.
    pub preview: Option<PathBuf>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            threshold: DEFAULT_THRESHOLD,
            filter: ResizeFilter::default(),
            preview: None,
        }
    }
}

impl ConvertOptions {
    /// Create options for the default 400x300 panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set target width.
    pub fn with_width(mut self, val: u32) -> Self {
        self.width = val;
        self
    }

    /// Builder: set target height.
    pub fn with_height(mut self, val: u32) -> Self {
        self.height = val;
        self
    }

    /// Builder: set binarization threshold.
    pub fn with_threshold(mut self, val: u8) -> Self {
        self.threshold = val;
        self
    }

    /// Builder: set resampling kernel.
    pub fn with_filter(mut self, val: ResizeFilter) -> Self {
        self.filter = val;
        self
    }

    /// Builder: save a preview of the binarized image to `path`.
    pub fn with_preview(mut self, path: impl Into<PathBuf>) -> Self {
        self.preview = Some(path.into());
        self
    }

    /// Reject zero-sized targets.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EpdError::Resize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.width, 400);
        assert_eq!(opts.height, 300);
        assert_eq!(opts.threshold, 128);
        assert_eq!(opts.filter, ResizeFilter::CatmullRom);
        assert!(opts.preview.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let opts = ConvertOptions::new()
            .with_width(12)
            .with_height(3)
            .with_threshold(200)
            .with_filter(ResizeFilter::Nearest)
            .with_preview("preview.png");

        assert_eq!(opts.width, 12);
        assert_eq!(opts.height, 3);
        assert_eq!(opts.threshold, 200);
        assert_eq!(opts.filter, ResizeFilter::Nearest);
        assert_eq!(opts.preview, Some(PathBuf::from("preview.png")));
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        for (w, h) in [(0, 300), (400, 0), (0, 0)] {
            let err = ConvertOptions::new().with_width(w).with_height(h).validate();
            assert!(
                matches!(err, Err(EpdError::Resize { width, height }) if width == w && height == h),
                "{w}x{h} should be rejected"
            );
        }
        assert!(ConvertOptions::new().validate().is_ok());
    }

    #[test]
    fn test_filter_names_round_trip() {
        for filter in ResizeFilter::ALL {
            assert_eq!(filter.name().parse::<ResizeFilter>(), Ok(filter));
        }
    }

    #[test]
    fn test_filter_aliases() {
        assert_eq!("Bilinear".parse::<ResizeFilter>(), Ok(ResizeFilter::Triangle));
        assert_eq!("bicubic".parse::<ResizeFilter>(), Ok(ResizeFilter::CatmullRom));
        assert_eq!(" LANCZOS ".parse::<ResizeFilter>(), Ok(ResizeFilter::Lanczos3));
        let err = "box".parse::<ResizeFilter>().unwrap_err();
        assert!(err.contains("catmull-rom"), "{err}");
    }
}
