//! Section tailer parsing.
//!
//! Tailers are fixed records stored after every section body, one per
//! section, in section order. The block starts at
//! `MAIN_HEADER_SIZE + section_count * SECTION_HEADER_SIZE + body_size`.
//!
//! The three size bytes at the end of the record are stored as
//! `width, depth, height`: the second byte is the column-row axis and the
//! third byte is the column height. [`SectionTailer`] names them by meaning,
//! so `depth` is read before `height`.

use glam::{UVec3, Vec3};

use crate::error::{DecodeError, DecodeResult};
use crate::header::{MAIN_HEADER_SIZE, SECTION_HEADER_SIZE};
use crate::reader::{Field, FieldType, Layout};

/// Size of one section tailer in bytes.
pub const SECTION_TAILER_SIZE: usize = 92;

const SECTION_TAILER: Layout = Layout::new(&[
    Field::scalar("span_start_offset", FieldType::U32),
    Field::scalar("span_end_offset", FieldType::U32),
    Field::scalar("span_data_offset", FieldType::U32),
    Field::scalar("scale", FieldType::F32),
    Field::array("transform", FieldType::F32, 12),
    Field::array("min_bound", FieldType::F32, 3),
    Field::array("max_bound", FieldType::F32, 3),
    // On-disk order: width, depth, height.
    Field::scalar("width", FieldType::U8),
    Field::scalar("depth", FieldType::U8),
    Field::scalar("height", FieldType::U8),
    Field::scalar("normal_type", FieldType::U8),
]);

const _: () = assert!(SECTION_TAILER.size() == SECTION_TAILER_SIZE);

/// Fixed per-section metadata. Vectors are in the on-disk (Z-up) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTailer {
    /// Offset of the span-start table, relative to the first section body.
    pub span_start_offset: u32,
    pub span_end_offset: u32,
    pub span_data_offset: u32,
    pub scale: f32,
    /// 3x4 row-major transform.
    pub transform: [f32; 12],
    pub min_bound: Vec3,
    pub max_bound: Vec3,
    /// Column count along x.
    pub width: u8,
    /// Column count along the on-disk y axis.
    pub depth: u8,
    /// Voxels per column.
    pub height: u8,
    /// Normal table selector: 2 for the small table, 4 for the large one.
    pub normal_type: u8,
}

impl SectionTailer {
    /// Number of `(x, z)` columns, and the length of each span table.
    #[must_use]
    pub fn column_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.depth)
    }

    /// Grid dimensions in the on-disk frame: `(width, depth, height)`.
    #[must_use]
    pub fn disk_size(&self) -> UVec3 {
        UVec3::new(
            u32::from(self.width),
            u32::from(self.depth),
            u32::from(self.height),
        )
    }
}

/// Byte offset of the tailer block.
#[must_use]
pub fn tailer_block_offset(section_count: u32, body_size: u32) -> usize {
    MAIN_HEADER_SIZE + section_count as usize * SECTION_HEADER_SIZE + body_size as usize
}

/// Parse all section tailers.
///
/// # Errors
///
/// Returns [`DecodeError::TruncatedBuffer`] if the tailer block extends past
/// the end of `data`.
pub fn parse_section_tailers(
    data: &[u8],
    section_count: u32,
    body_size: u32,
) -> DecodeResult<Vec<SectionTailer>> {
    let base = tailer_block_offset(section_count, body_size);
    let needed = section_count as usize * SECTION_TAILER_SIZE;
    if base.saturating_add(needed) > data.len() {
        return Err(DecodeError::TruncatedBuffer {
            offset: base,
            needed,
            len: data.len(),
        });
    }

    (0..section_count as usize)
        .map(|i| parse_section_tailer(data, base + i * SECTION_TAILER_SIZE))
        .collect()
}

fn parse_section_tailer(data: &[u8], offset: usize) -> DecodeResult<SectionTailer> {
    let record = SECTION_TAILER.read(data, offset)?;

    Ok(SectionTailer {
        span_start_offset: record.uint("span_start_offset")?,
        span_end_offset: record.uint("span_end_offset")?,
        span_data_offset: record.uint("span_data_offset")?,
        scale: record.float("scale")?,
        transform: record.float_array("transform")?,
        min_bound: Vec3::from_array(record.float_array("min_bound")?),
        max_bound: Vec3::from_array(record.float_array("max_bound")?),
        width: record.byte("width")?,
        depth: record.byte("depth")?,
        height: record.byte("height")?,
        normal_type: record.byte("normal_type")?,
    })
}
