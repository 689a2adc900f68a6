//! Run-length span decoding.
//!
//! Each section body starts with two `i32` tables of `width * depth` entries
//! (span starts, then span ends), one entry per column. Column data follows
//! both tables. A column is an alternation of
//!
//! ```text
//! skip: u8, run: u8, run * (color: u8, normal: u8), run: u8
//! ```
//!
//! repeated until the running height reaches the section height. A start or
//! end of `-1` marks an empty column.

use glam::UVec3;

use crate::VoxelSample;
use crate::axes;
use crate::error::{DecodeError, DecodeResult};
use crate::reader::{read_i32, read_u8};
use crate::tailer::SectionTailer;

/// Span table entry marking a column with no voxels.
pub const EMPTY_SPAN: i32 = -1;

/// Decode the voxels of one section.
///
/// # Arguments
///
/// * `data` - The whole asset buffer
/// * `tailer` - The section's tailer
/// * `body_offset` - Byte offset of the first section body
/// * `section` - Index of the section, used in error reports
///
/// # Errors
///
/// Returns an error if a read runs past the buffer, a run's trailing count
/// disagrees with its leading count, or a run extends past the section height.
pub fn decode_spans(
    data: &[u8],
    tailer: &SectionTailer,
    body_offset: usize,
    section: usize,
) -> DecodeResult<Vec<VoxelSample>> {
    let columns = tailer.column_count();
    let mut offset = body_offset + tailer.span_start_offset as usize;

    let starts = read_span_table(data, &mut offset, columns)?;
    let ends = read_span_table(data, &mut offset, columns)?;
    let column_data = offset;

    let mut samples = Vec::new();
    for (column, (&start, &end)) in starts.iter().zip(&ends).enumerate() {
        if start == EMPTY_SPAN || end == EMPTY_SPAN {
            continue;
        }

        let start = usize::try_from(start).map_err(|_| DecodeError::InvalidFormat {
            context: "span table",
            detail: format!("section {section}, column {column} has negative start {start}"),
        })?;

        decode_column(
            data,
            tailer,
            column_data + start,
            ColumnId { section, column },
            &mut samples,
        )?;
    }

    Ok(samples)
}

fn read_span_table(data: &[u8], offset: &mut usize, len: usize) -> DecodeResult<Vec<i32>> {
    (0..len).map(|_| read_i32(data, offset)).collect()
}

#[derive(Debug, Clone, Copy)]
struct ColumnId {
    section: usize,
    column: usize,
}

/// Replay one column's skip/run alternation, appending its voxels.
fn decode_column(
    data: &[u8],
    tailer: &SectionTailer,
    mut offset: usize,
    id: ColumnId,
    samples: &mut Vec<VoxelSample>,
) -> DecodeResult<()> {
    let width = usize::from(tailer.width);
    let height = u32::from(tailer.height);

    // Column index to on-disk (x, y); the running height is on-disk z.
    #[allow(clippy::cast_possible_truncation)]
    let (x, row) = ((id.column % width) as u32, (id.column / width) as u32);

    let mut z = 0u32;
    while z < height {
        z += u32::from(read_u8(data, &mut offset)?);
        if z >= height {
            break;
        }

        let run_offset = offset;
        let run = read_u8(data, &mut offset)?;
        if z + u32::from(run) > height {
            return Err(DecodeError::RunOutOfBounds {
                section: id.section,
                column: id.column,
                offset: run_offset,
                height: tailer.height,
            });
        }

        for i in 0..u32::from(run) {
            let color = read_u8(data, &mut offset)?;
            let normal = read_u8(data, &mut offset)?;
            let position = axes::to_render_grid(UVec3::new(x, row, z + i));

            // Every component is bounded by a u8 dimension.
            #[allow(clippy::cast_possible_truncation)]
            samples.push(VoxelSample {
                x: position.x as u8,
                y: position.y as u8,
                z: position.z as u8,
                color,
                normal,
            });
        }

        let trailing_offset = offset;
        let trailing = read_u8(data, &mut offset)?;
        if trailing != run {
            return Err(DecodeError::RunLengthMismatch {
                section: id.section,
                column: id.column,
                offset: trailing_offset,
                expected: run,
                actual: trailing,
            });
        }

        z += u32::from(run);
    }

    Ok(())
}
