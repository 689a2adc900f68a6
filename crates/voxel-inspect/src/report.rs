//! Serializable summaries of decoded assets.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use voxel::{
    DecodedAsset, NormalTable, Palette, Section, SourceFormat, build_points, build_volume,
};

use crate::args::BuildArg;

#[derive(Debug, Serialize)]
pub struct AssetReport {
    pub format: &'static str,
    /// Inclusive team-color band, when the format has one.
    pub remap_range: Option<[u8; 2]>,
    pub hue: f32,
    pub warnings: Vec<String>,
    pub section_count: usize,
    pub sections: Vec<SectionReport>,
}

#[derive(Debug, Serialize)]
pub struct SectionReport {
    pub index: usize,
    pub name: String,
    pub size: [u32; 3],
    pub scale: f32,
    pub min_bounds: [f32; 3],
    pub max_bounds: [f32; 3],
    pub normal_table: Option<&'static str>,
    pub samples: usize,
    pub distinct_colors: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<PointsReport>,
}

#[derive(Debug, Serialize)]
pub struct VolumeReport {
    pub bytes: usize,
    pub occupied: usize,
}

#[derive(Debug, Serialize)]
pub struct PointsReport {
    pub count: usize,
    /// Min and max corners of the positions.
    pub bounds: Option<[[f32; 3]; 2]>,
}

fn format_name(format: SourceFormat) -> &'static str {
    match format {
        SourceFormat::Spanned => "vxl",
        SourceFormat::Dense => "vox",
    }
}

fn normal_table_name(table: NormalTable) -> &'static str {
    match table {
        NormalTable::TiberianSun => "tiberian-sun",
        NormalTable::RedAlert2 => "red-alert-2",
    }
}

/// Summarize an asset, building the requested output for each section.
///
/// `only` restricts the report to one section index.
pub fn build_report(
    asset: &DecodedAsset,
    palette: &Palette,
    hue: f32,
    build: BuildArg,
    only: Option<usize>,
) -> anyhow::Result<AssetReport> {
    if let Some(index) = only {
        anyhow::ensure!(
            index < asset.sections.len(),
            "section {index} out of range; asset has {} sections",
            asset.sections.len()
        );
    }

    let sections = asset
        .sections
        .iter()
        .enumerate()
        .filter(|(index, _)| only.is_none_or(|only| only == *index))
        .map(|(index, section)| section_report(index, section, palette, build))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(AssetReport {
        format: format_name(asset.format),
        remap_range: asset.remap_range.map(|range| [range.start, range.end]),
        hue,
        warnings: asset.warnings.iter().map(ToString::to_string).collect(),
        section_count: asset.sections.len(),
        sections,
    })
}

fn section_report(
    index: usize,
    section: &Section,
    palette: &Palette,
    build: BuildArg,
) -> anyhow::Result<SectionReport> {
    let distinct_colors = section
        .samples
        .iter()
        .map(|s| s.color)
        .collect::<BTreeSet<_>>()
        .len();

    let mut report = SectionReport {
        index,
        name: section.name.clone(),
        size: section.size.to_array(),
        scale: section.scale,
        min_bounds: section.min_bounds.to_array(),
        max_bounds: section.max_bounds.to_array(),
        normal_table: section.normal_table.map(normal_table_name),
        samples: section.samples.len(),
        distinct_colors,
        volume: None,
        points: None,
    };

    match build {
        BuildArg::Volume => {
            let volume = build_volume(section, palette)?;
            report.volume = Some(VolumeReport {
                bytes: volume.colors.len() + volume.normals.len(),
                occupied: volume.occupied_count(),
            });
        }
        BuildArg::Points => {
            let points = build_points(section, palette)?;
            report.points = Some(PointsReport {
                count: points.len(),
                bounds: points
                    .bounds()
                    .map(|(min, max)| [min.to_array(), max.to_array()]),
            });
        }
        BuildArg::None => {}
    }

    Ok(report)
}

impl fmt::Display for AssetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format: {}, sections: {}", self.format, self.section_count)?;
        if let Some([start, end]) = self.remap_range {
            write!(f, ", remap band: {start}..={end} (hue {}°)", self.hue)?;
        }
        writeln!(f)?;

        for warning in &self.warnings {
            writeln!(f, "warning: {warning}")?;
        }

        for section in &self.sections {
            let [w, h, d] = section.size;
            writeln!(
                f,
                "[{}] {:?}: {w}x{h}x{d}, scale {}, {} samples, {} colors, normals: {}",
                section.index,
                section.name,
                section.scale,
                section.samples,
                section.distinct_colors,
                section.normal_table.unwrap_or("none"),
            )?;
            if let Some(volume) = &section.volume {
                writeln!(
                    f,
                    "    volume: {} bytes, {} occupied cells",
                    volume.bytes, volume.occupied
                )?;
            }
            if let Some(points) = &section.points {
                write!(f, "    points: {}", points.count)?;
                if let Some([min, max]) = points.bounds {
                    write!(f, ", bounds {min:?}..{max:?}")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
