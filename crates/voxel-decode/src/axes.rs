//! Mapping from the on-disk frame to the render frame.
//!
//! Both formats store models Z-up: the vertical axis is the third component
//! of on-disk sizes, bounds, normals, transforms and `.vox` coordinates.
//! Decoded sections are Y-up. The only permutation is an exchange of the Y and
//! Z axes, and every conversion in the crate goes through the functions here.
//!
//! | on disk            | render frame            |
//! |--------------------|-------------------------|
//! | `x`                | `x` (width)             |
//! | `y` (column row)   | `z` (depth)             |
//! | `z` (column height)| `y` (height)            |

use glam::{Affine3A, UVec3, Vec3, Vec3A};

/// Map an on-disk vector (bounds, normals) into the render frame.
#[must_use]
pub fn to_render(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.z, v.y)
}

/// Map an on-disk grid coordinate or size into the render frame.
#[must_use]
pub fn to_render_grid(v: UVec3) -> UVec3 {
    UVec3::new(v.x, v.z, v.y)
}

/// Convert a section's on-disk 3x4 row-major transform into the render frame.
///
/// Off-diagonal rotation terms and the translation are multiplied by the
/// section scale. The Y and Z translation entries are exchanged; the
/// rotation block keeps its on-disk layout.
#[must_use]
pub fn transform_to_render(m: &[f32; 12], scale: f32) -> Affine3A {
    let rows = [
        [m[0], m[1] * scale, m[2] * scale, m[3] * scale],
        [m[4] * scale, m[5], m[6] * scale, m[11] * scale],
        [m[8] * scale, m[9] * scale, m[10], m[7] * scale],
    ];

    Affine3A::from_cols(
        Vec3A::new(rows[0][0], rows[1][0], rows[2][0]),
        Vec3A::new(rows[0][1], rows[1][1], rows[2][1]),
        Vec3A::new(rows[0][2], rows[1][2], rows[2][2]),
        Vec3A::new(rows[0][3], rows[1][3], rows[2][3]),
    )
}
