//! Command-line inspector for legacy voxel models.
//!
//! Decodes a `.vxl` or `.vox` file, optionally hue-shifts its team colors,
//! builds volume or point-cloud outputs and prints a summary.

mod args;
mod report;

use anyhow::Context as _;
use clap::Parser;

use crate::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let data = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    tracing::debug!(path = %args.input.display(), bytes = data.len(), "read asset");

    let options = args.decode_options();
    let asset = match args.format {
        Some(format) => voxel::decode_as(&data, format.into(), &options),
        None => voxel::decode_with(&data, &options),
    }
    .with_context(|| format!("failed to decode {}", args.input.display()))?;

    tracing::info!(
        format = ?asset.format,
        sections = asset.sections.len(),
        warnings = asset.warnings.len(),
        "decoded asset"
    );

    let palette = asset.remapped_palette(args.hue);
    let report = report::build_report(&asset, &palette, args.hue, args.build, args.section)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}

fn init_tracing(fallback: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .init();
}
