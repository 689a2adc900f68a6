//! Sparse point clouds, one point per occupied voxel.

use glam::Vec3;
use voxel_decode::{Palette, Rgb, Section};

use crate::{Result, validate_samples};

/// Parallel per-point arrays. All three always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    /// Render-frame positions, `(cell + min_bounds) * scale`.
    pub positions: Vec<Vec3>,
    /// Colors with channels in `[0, 1]`.
    pub colors: Vec<Vec3>,
    /// Unit normals in the render frame; zero for sections without normals.
    pub normals: Vec<Vec3>,
}

impl PointCloud {
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Axis-aligned bounds of the positions, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
        )
    }
}

fn normalize_color(color: Rgb) -> Vec3 {
    Vec3::new(f32::from(color.r), f32::from(color.g), f32::from(color.b)) / 255.0
}

/// Build a point cloud from a section's samples, in sample order.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidSection`] if a sample lies outside the
/// section's size.
pub fn build_points(section: &Section, palette: &Palette) -> Result<PointCloud> {
    validate_samples(section)?;

    let count = section.samples.len();
    let mut cloud = PointCloud {
        positions: Vec::with_capacity(count),
        colors: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
    };

    for sample in &section.samples {
        let cell = sample.position().as_vec3();
        cloud
            .positions
            .push((cell + section.min_bounds) * section.scale);
        cloud.colors.push(normalize_color(palette.get(sample.color)));
        cloud
            .normals
            .push(section.render_normal(sample).unwrap_or(Vec3::ZERO));
    }

    tracing::debug!(section = %section.name, points = cloud.len(), "built point cloud");

    Ok(cloud)
}
