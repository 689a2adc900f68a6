//! Decode legacy voxel models into renderer-ready sections.
//!
//! Two binary formats are supported: the sparse, run-length "span" format
//! (`.vxl`) and the dense chunk format (`.vox`). Both normalize into the same
//! [`DecodedAsset`] of [`Section`]s holding [`VoxelSample`]s, so downstream
//! builders never need to know which format an asset came from.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **User-controlled parallelism**: Sections never reference each other;
//!   callers may process them on separate threads
//! - **Deterministic**: Identical input bytes always decode to identical output
//!
//! # Example
//!
//! ```ignore
//! let asset = voxel_decode::decode(&bytes)?;
//! let team_palette = asset.remapped_palette(120.0);
//! for section in &asset.sections {
//!     println!("{}: {} voxels", section.name, section.samples.len());
//! }
//! ```

pub mod axes;
mod error;
pub mod header;
pub mod normals;
pub mod palette;
pub mod reader;
pub mod spans;
pub mod tailer;
pub mod vox;
pub mod vxl;

#[cfg(test)]
mod testing;

use glam::{Affine3A, UVec3, Vec3};

pub use error::{DecodeError, DecodeResult, DecodeWarning};
pub use normals::NormalTable;
pub use palette::{PALETTE_LEN, Palette, PaletteRemapRange, Rgb};
pub use vox::decode_vox;
pub use vxl::decode_vxl;

/// Binary format of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Sparse run-length span format (`.vxl`).
    Spanned,
    /// Dense chunk format with explicit voxel records (`.vox`).
    Dense,
}

/// Decoder configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Treat a disagreeing duplicate section-count field as a fatal error
    /// instead of a warning.
    pub strict_section_count: bool,
}

/// One decoded voxel.
///
/// Coordinates are local grid coordinates in the render frame: `y` is the
/// vertical (column height) axis. They always satisfy
/// `x < width`, `y < height` and `z < depth` of the owning section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoxelSample {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    /// Palette index.
    pub color: u8,
    /// Index into the section's normal table.
    pub normal: u8,
}

impl VoxelSample {
    #[must_use]
    pub fn position(&self) -> UVec3 {
        UVec3::new(u32::from(self.x), u32::from(self.y), u32::from(self.z))
    }
}

/// A decoded model part. All vectors are in the render (Y-up) frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    /// Grid dimensions as `(width, height, depth)`.
    pub size: UVec3,
    pub scale: f32,
    pub min_bounds: Vec3,
    pub max_bounds: Vec3,
    /// Normal palette for [`VoxelSample::normal`]; `None` for formats without normals.
    pub normal_table: Option<NormalTable>,
    pub transform: Affine3A,
    pub samples: Vec<VoxelSample>,
}

impl Section {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.size.x
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.size.y
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.size.z
    }

    /// Number of cells in the dense grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size.x as usize * self.size.y as usize * self.size.z as usize
    }

    /// Whether a sample lies inside the grid.
    #[must_use]
    pub fn contains(&self, sample: &VoxelSample) -> bool {
        sample.position().cmplt(self.size).all()
    }

    /// Resolve a sample's normal into the render frame.
    ///
    /// Out-of-range normal indices clamp to the last table entry. Returns
    /// `None` when the section has no normal table.
    #[must_use]
    pub fn render_normal(&self, sample: &VoxelSample) -> Option<Vec3> {
        self.normal_table
            .map(|table| axes::to_render(table.lookup(sample.normal)))
    }
}

/// A fully decoded asset.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAsset {
    pub format: SourceFormat,
    pub palette: Palette,
    /// Team-color band; `None` for formats without one.
    pub remap_range: Option<PaletteRemapRange>,
    pub sections: Vec<Section>,
    /// Non-fatal anomalies seen while decoding.
    pub warnings: Vec<DecodeWarning>,
}

impl DecodedAsset {
    /// Palette with the remap band hue-rotated by `degrees`.
    ///
    /// Returns an unchanged copy when the asset has no remap band.
    #[must_use]
    pub fn remapped_palette(&self, degrees: f32) -> Palette {
        match self.remap_range {
            Some(range) => self.palette.remap_hue(range, degrees),
            None => self.palette.clone(),
        }
    }
}

/// Detect the format of an asset from its leading bytes.
///
/// # Errors
///
/// Returns an error if the buffer is too short or carries no known signature.
pub fn detect_format(data: &[u8]) -> DecodeResult<SourceFormat> {
    // A cut-off signature is a short file, not an unknown one.
    let tag = header::FILE_TAG.as_bytes();
    if !data.is_empty() && data.len() < tag.len() && tag.starts_with(data) {
        return Err(DecodeError::TruncatedBuffer {
            offset: 0,
            needed: header::MAIN_HEADER_SIZE,
            len: data.len(),
        });
    }

    if data.len() < vox::VOX_MAGIC.len() {
        return Err(DecodeError::TruncatedBuffer {
            offset: 0,
            needed: vox::VOX_MAGIC.len(),
            len: data.len(),
        });
    }

    if data.starts_with(vox::VOX_MAGIC) {
        return Ok(SourceFormat::Dense);
    }

    if data.starts_with(header::FILE_TAG.as_bytes()) {
        return Ok(SourceFormat::Spanned);
    }

    Err(DecodeError::InvalidFormat {
        context: "asset",
        detail: "unknown format signature".to_string(),
    })
}

/// Decode an asset of either format with default options.
pub fn decode(data: &[u8]) -> DecodeResult<DecodedAsset> {
    decode_with(data, &DecodeOptions::default())
}

/// Decode an asset of either format.
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> DecodeResult<DecodedAsset> {
    match detect_format(data)? {
        SourceFormat::Spanned => decode_vxl(data, options),
        SourceFormat::Dense => decode_vox(data),
    }
}
