//! Renderer-ready outputs for decoded legacy voxel models.
//!
//! This crate turns the [`Section`]s produced by [`voxel_decode`] into the
//! two shapes a renderer consumes: a dense [`VolumeTexture`] for volumetric
//! sampling and a sparse [`PointCloud`] for point or instanced rendering.
//!
//! # Design principles
//!
//! - **Format-agnostic**: Builders see only sections and palettes, never bytes
//! - **One axis convention**: Everything is already in the Y-up render frame
//! - **Sync building**: Builders are pure functions; callers parallelize
//!
//! # Example
//!
//! ```ignore
//! let asset = voxel::decode(&bytes)?;
//! let palette = asset.remapped_palette(120.0);
//! for section in &asset.sections {
//!     let volume = voxel::build_volume(section, &palette)?;
//!     let points = voxel::build_points(section, &palette)?;
//! }
//! ```

mod error;
pub mod points;
pub mod volume;

pub use error::{Error, Result};
pub use points::{PointCloud, build_points};
pub use volume::{VolumeTexture, build_volume};

// Re-export decode types for convenience.
pub use voxel_decode::{
    DecodeOptions, DecodeWarning, DecodedAsset, NormalTable, Palette, PaletteRemapRange, Rgb,
    Section, SourceFormat, VoxelSample,
};

/// Decode an asset of either format with default options.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a valid asset.
pub fn decode(data: &[u8]) -> Result<DecodedAsset> {
    decode_with(data, &DecodeOptions::default())
}

/// Decode an asset of either format.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a valid asset.
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<DecodedAsset> {
    Ok(voxel_decode::decode_with(data, options)?)
}

/// Decode an asset as a known format, skipping signature detection.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a valid asset of `format`.
pub fn decode_as(
    data: &[u8],
    format: SourceFormat,
    options: &DecodeOptions,
) -> Result<DecodedAsset> {
    let asset = match format {
        SourceFormat::Spanned => voxel_decode::decode_vxl(data, options)?,
        SourceFormat::Dense => voxel_decode::decode_vox(data)?,
    };
    Ok(asset)
}

/// Ensure every sample lies inside its section.
fn validate_samples(section: &Section) -> Result<()> {
    match section.samples.iter().find(|s| !section.contains(s)) {
        Some(sample) => Err(Error::InvalidSection {
            section: section.name.clone(),
            detail: format!(
                "sample at {} lies outside size {}",
                sample.position(),
                section.size
            ),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use glam::{UVec3, Vec3};

    use super::*;

    /// A span-format asset with one 2x1x2 section whose column `(0, 0)`
    /// holds a single voxel of color 5, and palette entry 5 = (200, 10, 10).
    fn single_voxel_asset() -> Vec<u8> {
        let mut data = Vec::new();

        // Main header.
        let mut tag = [0u8; 16];
        tag[..15].copy_from_slice(b"Voxel Animation");
        data.extend_from_slice(&tag);
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());

        let mut body = Vec::new();
        // Span starts, then ends, for four columns.
        for value in [0i32, -1, -1, -1, 4, -1, -1, -1] {
            body.extend_from_slice(&value.to_le_bytes());
        }
        body.extend_from_slice(&[0, 1, 5, 0, 1, 0, 0]);

        data.extend_from_slice(&u32::try_from(body.len()).unwrap().to_le_bytes());
        data.extend_from_slice(&[16, 31]);
        let mut palette = [0u8; 768];
        palette[15..18].copy_from_slice(&[200, 10, 10]);
        data.extend_from_slice(&palette);
        assert_eq!(data.len(), 802);

        // Section header.
        let mut name = [0u8; 16];
        name[..4].copy_from_slice(b"body");
        data.extend_from_slice(&name);
        data.extend_from_slice(&[0u8; 12]);

        data.extend(body);

        // Tailer.
        for value in [0u32, 16, 32] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        data.extend_from_slice(&1.0f32.to_le_bytes());
        for value in [1.0f32, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        for value in [-1.0f32, -1.0, -0.5, 1.0, 1.0, 0.5] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        // Width, depth, height, normal type.
        data.extend_from_slice(&[2, 2, 1, 2]);
        data
    }

    #[test]
    fn test_single_voxel_end_to_end() {
        let asset = decode(&single_voxel_asset()).unwrap();
        assert_eq!(asset.format, SourceFormat::Spanned);
        assert_eq!(asset.sections.len(), 1);

        let section = &asset.sections[0];
        assert_eq!(section.name, "body");
        assert_eq!(section.size, UVec3::new(2, 1, 2));
        assert_eq!(
            section.samples,
            vec![VoxelSample {
                x: 0,
                y: 0,
                z: 0,
                color: 5,
                normal: 0
            }]
        );

        let volume = build_volume(section, &asset.palette).unwrap();
        assert_eq!(volume.colors.len(), 16);
        assert_eq!(volume.occupied_count(), 1);
        assert_eq!(volume.color_at(UVec3::ZERO), Some([200, 10, 10, 255]));

        let points = build_points(section, &asset.palette).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points.normals.len(), 1);
        assert_eq!(points.positions[0], Vec3::new(-1.0, -0.5, -1.0));
    }

    #[test]
    fn test_remap_outside_band_keeps_color() {
        let asset = decode(&single_voxel_asset()).unwrap();
        let palette = asset.remapped_palette(180.0);
        let volume = build_volume(&asset.sections[0], &palette).unwrap();
        assert_eq!(volume.color_at(UVec3::ZERO), Some([200, 10, 10, 255]));
    }

    #[test]
    fn test_decode_as_wrong_format() {
        let result = decode_as(
            &single_voxel_asset(),
            SourceFormat::Dense,
            &DecodeOptions::default(),
        );
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_error_is_wrapped() {
        let mut data = single_voxel_asset();
        data.truncate(100);
        let err = decode(&data).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_section_message_names_section() {
        let section = Section {
            name: "turret".to_string(),
            size: UVec3::ONE,
            scale: 1.0,
            min_bounds: Vec3::ZERO,
            max_bounds: Vec3::ZERO,
            normal_table: None,
            transform: glam::Affine3A::IDENTITY,
            samples: vec![VoxelSample {
                x: 1,
                y: 0,
                z: 0,
                color: 0,
                normal: 0,
            }],
        };
        let err = validate_samples(&section).unwrap_err();
        assert!(err.to_string().contains("turret"));
    }
}
