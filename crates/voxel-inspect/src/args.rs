//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use voxel::{DecodeOptions, SourceFormat};

/// Format override for the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Span-encoded `.vxl`.
    Vxl,
    /// Dense chunk `.vox`.
    Vox,
}

impl From<FormatArg> for SourceFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Vxl => SourceFormat::Spanned,
            FormatArg::Vox => SourceFormat::Dense,
        }
    }
}

/// Output to build for each reported section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BuildArg {
    /// Dense color and normal volume.
    Volume,
    /// Sparse point cloud.
    Points,
    /// Decode only.
    #[default]
    None,
}

#[derive(Parser, Debug)]
#[command(about = "Decode and summarize legacy voxel models")]
pub struct Args {
    /// Asset file to read.
    pub input: PathBuf,

    /// Force the input format instead of detecting it from the signature.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Hue rotation in degrees applied to the team-color band.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub hue: f32,

    /// Builder output to produce for each section.
    #[arg(long, value_enum, default_value_t = BuildArg::default())]
    pub build: BuildArg,

    /// Only report the section at this index.
    #[arg(long)]
    pub section: Option<usize>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Fail when the duplicate section-count field disagrees.
    #[arg(long)]
    pub strict: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    #[must_use]
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict_section_count: self.strict,
        }
    }
}
