//! Dense volume textures for GPU volumetric sampling.
//!
//! Both arrays hold four bytes per cell in render-frame order: the linear
//! index of cell `(x, y, z)` is `x + width * (y + height * z)`, so `x` varies
//! fastest and `z` (the on-disk row axis) slowest. Cells no sample touches
//! stay all zero.

use glam::{UVec3, Vec3};
use voxel_decode::{Palette, Section};

use crate::{Result, validate_samples};

/// Bytes per texel in both arrays.
pub const BYTES_PER_TEXEL: usize = 4;

/// A section rasterized into dense RGBA color and normal arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeTexture {
    /// Dimensions as `(width, height, depth)`.
    pub size: UVec3,
    /// RGBA colors; alpha is 255 for occupied cells.
    pub colors: Vec<u8>,
    /// Encoded normals; each component maps `[-1, 1]` to `[0, 255]`.
    pub normals: Vec<u8>,
}

impl VolumeTexture {
    /// Allocate an all-empty volume.
    #[must_use]
    pub fn empty(size: UVec3) -> Self {
        let len = cell_count(size) * BYTES_PER_TEXEL;
        Self {
            size,
            colors: vec![0; len],
            normals: vec![0; len],
        }
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        cell_count(self.size)
    }

    /// Linear cell index of a position, or `None` outside the volume.
    #[must_use]
    pub fn index(&self, position: UVec3) -> Option<usize> {
        if !position.cmplt(self.size).all() {
            return None;
        }
        let [x, y, z] = position.to_array().map(|v| v as usize);
        let [width, height, _] = self.size.to_array().map(|v| v as usize);
        Some(x + width * (y + height * z))
    }

    #[must_use]
    pub fn color_at(&self, position: UVec3) -> Option<[u8; 4]> {
        self.index(position).map(|i| texel(&self.colors, i))
    }

    #[must_use]
    pub fn normal_at(&self, position: UVec3) -> Option<[u8; 4]> {
        self.index(position).map(|i| texel(&self.normals, i))
    }

    /// Number of cells with a non-zero color alpha.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.colors
            .chunks_exact(BYTES_PER_TEXEL)
            .filter(|texel| texel[3] != 0)
            .count()
    }
}

fn cell_count(size: UVec3) -> usize {
    size.x as usize * size.y as usize * size.z as usize
}

fn texel(data: &[u8], index: usize) -> [u8; 4] {
    let start = index * BYTES_PER_TEXEL;
    [data[start], data[start + 1], data[start + 2], data[start + 3]]
}

/// Map one normal component from `[-1, 1]` to a byte.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode_normal_component(value: f32) -> u8 {
    ((value * 0.5 + 0.5) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Encode a render-frame normal as an opaque texel.
#[must_use]
pub fn encode_normal(normal: Vec3) -> [u8; 4] {
    let [x, y, z] = normal.to_array().map(encode_normal_component);
    [x, y, z, 255]
}

/// Rasterize a section into a dense volume.
///
/// Sections without a normal table leave the normal array zero.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidSection`] if a sample lies outside the
/// section's size.
pub fn build_volume(section: &Section, palette: &Palette) -> Result<VolumeTexture> {
    validate_samples(section)?;

    let mut volume = VolumeTexture::empty(section.size);
    for sample in &section.samples {
        let Some(index) = volume.index(sample.position()) else {
            continue;
        };
        let start = index * BYTES_PER_TEXEL;

        let color = palette.get(sample.color);
        volume.colors[start..start + BYTES_PER_TEXEL]
            .copy_from_slice(&[color.r, color.g, color.b, 255]);

        if let Some(normal) = section.render_normal(sample) {
            volume.normals[start..start + BYTES_PER_TEXEL].copy_from_slice(&encode_normal(normal));
        }
    }

    tracing::debug!(
        section = %section.name,
        size = %section.size,
        samples = section.samples.len(),
        "built volume"
    );

    Ok(volume)
}
