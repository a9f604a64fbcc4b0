//! Runtime configuration loaded from defaults + environment, then flags.

use anyhow::{Context, anyhow};
use epd_bitmap::{ConvertOptions, ResizeFilter};

use super::defaults::get_default;
use super::validation::validate_setting;

/// Panel settings after all layers have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub threshold: u8,
    pub filter: ResizeFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        let opts = ConvertOptions::default();
        Self {
            width: opts.width,
            height: opts.height,
            threshold: opts.threshold,
            filter: opts.filter,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first.
    pub fn load() -> anyhow::Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e).context("failed to read .env"),
        }
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Empty values fall back
    /// to the defaults.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let g = |key: &str| -> anyhow::Result<String> {
            let value = match lookup(key) {
                Some(v) if !v.trim().is_empty() => v.trim().to_string(),
                _ => get_default(key)
                    .ok_or_else(|| anyhow!("no default for setting {key}"))?
                    .to_string(),
            };
            validate_setting(key, &value).map_err(|msg| anyhow!("invalid {key}={value:?}: {msg}"))?;
            Ok(value)
        };

        Ok(Self {
            width: g("EPD_WIDTH")?.parse()?,
            height: g("EPD_HEIGHT")?.parse()?,
            threshold: g("EPD_THRESHOLD")?.parse()?,
            filter: g("EPD_RESIZE_FILTER")?
                .parse::<ResizeFilter>()
                .map_err(|e| anyhow!(e))?,
        })
    }

    /// Apply command-line overrides on top of the loaded values. Overrides go
    /// through the same checks as environment values.
    pub fn with_overrides(
        mut self,
        width: Option<u32>,
        height: Option<u32>,
        threshold: Option<u8>,
        filter: Option<ResizeFilter>,
    ) -> anyhow::Result<Self> {
        let check = |flag: &str, key: &str, value: String| -> anyhow::Result<()> {
            validate_setting(key, &value).map_err(|msg| anyhow!("invalid --{flag} {value}: {msg}"))
        };

        if let Some(v) = width {
            check("width", "EPD_WIDTH", v.to_string())?;
            self.width = v;
        }
        if let Some(v) = height {
            check("height", "EPD_HEIGHT", v.to_string())?;
            self.height = v;
        }
        if let Some(v) = threshold {
            self.threshold = v;
        }
        if let Some(v) = filter {
            self.filter = v;
        }
        Ok(self)
    }

    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions::new()
            .with_width(self.width)
            .with_height(self.height)
            .with_threshold(self.threshold)
            .with_filter(self.filter)
    }
}
