//! `epd-hex` — image to packed 1-bit hex bitmap converter.

mod args;
mod config;

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use args::{Args, FilterArg};
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--json` output stays machine readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Args::command()
        .after_help(config::defaults::env_help())
        .get_matches();
    let args = Args::from_arg_matches(&matches)?;

    let config = AppConfig::load()?.with_overrides(
        args.width,
        args.height,
        args.threshold,
        args.filter.map(FilterArg::to_resize_filter),
    )?;

    tracing::info!(
        input = %args.input.display(),
        width = config.width,
        height = config.height,
        threshold = config.threshold,
        filter = %config.filter,
        "Converting image"
    );

    let mut options = config.to_options();
    if let Some(preview) = &args.preview {
        options = options.with_preview(preview);
    }

    let report = epd_bitmap::convert(&args.input, &args.output, &options).with_context(|| {
        format!(
            "failed to convert {} to {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Image converted to {} successfully!",
            report.output.display()
        );
    }

    Ok(())
}
