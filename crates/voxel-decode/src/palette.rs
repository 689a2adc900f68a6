//! Indexed color palettes and team-color hue remapping.

use crate::error::{DecodeError, DecodeResult};

/// Number of entries in every palette.
pub const PALETTE_LEN: usize = 256;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Inclusive band of palette indices subject to hue remapping.
///
/// A band whose `start` is greater than its `end` contains no indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteRemapRange {
    pub start: u8,
    pub end: u8,
}

impl PaletteRemapRange {
    #[must_use]
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(self, index: u8) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// A 256-entry color table addressed by voxel color index.
///
/// Palettes are never modified in place; [`Palette::remap_hue`] derives a
/// new one so the original stays available for later remaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [Rgb::default(); PALETTE_LEN],
        }
    }
}

impl Palette {
    #[must_use]
    pub fn new(colors: [Rgb; PALETTE_LEN]) -> Self {
        Self { colors }
    }

    /// Build a palette from 768 packed `r, g, b` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is not exactly 768 bytes long.
    pub fn from_rgb_bytes(bytes: &[u8]) -> DecodeResult<Self> {
        if bytes.len() != PALETTE_LEN * 3 {
            return Err(DecodeError::InvalidFormat {
                context: "palette",
                detail: format!(
                    "expected {} bytes, got {}",
                    PALETTE_LEN * 3,
                    bytes.len()
                ),
            });
        }

        let mut colors = [Rgb::default(); PALETTE_LEN];
        for (color, rgb) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            *color = Rgb::new(rgb[0], rgb[1], rgb[2]);
        }
        Ok(Self { colors })
    }

    #[must_use]
    pub fn get(&self, index: u8) -> Rgb {
        self.colors[usize::from(index)]
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgb; PALETTE_LEN] {
        &self.colors
    }

    /// Derive a palette with every entry in `range` hue-rotated by `degrees`.
    ///
    /// Entries outside the band are copied unchanged.
    #[must_use]
    pub fn remap_hue(&self, range: PaletteRemapRange, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let matrix = hue_rotation_matrix(cos, sin);

        let mut colors = self.colors;
        for (index, color) in (0..=u8::MAX).zip(colors.iter_mut()) {
            if range.contains(index) {
                *color = apply(&matrix, *color);
            }
        }
        Self { colors }
    }
}

/// Hue rotation in RGB space with luminance weights (0.213, 0.715, 0.072).
///
/// Rows produce `r`, `g` and `b` respectively.
fn hue_rotation_matrix(cos: f32, sin: f32) -> [[f32; 3]; 3] {
    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ]
}

fn apply(matrix: &[[f32; 3]; 3], color: Rgb) -> Rgb {
    let input = [f32::from(color.r), f32::from(color.g), f32::from(color.b)];
    let channel =
        |row: &[f32; 3]| clamp_to_u8(row[0] * input[0] + row[1] * input[1] + row[2] * input[2]);
    Rgb::new(channel(&matrix[0]), channel(&matrix[1]), channel(&matrix[2]))
}

/// Clamp a float to u8 range.
pub(crate) fn clamp_to_u8(value: f32) -> u8 {
    // Truncation and sign loss are intentional: we clamp to [0, 255].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value.round().clamp(0.0, 255.0) as u8
    }
}
