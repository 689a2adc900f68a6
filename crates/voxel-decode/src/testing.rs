//! Span-format encoder for building synthetic test assets.

use std::collections::BTreeMap;

use crate::header::FILE_TAG;
use crate::palette::{Palette, PaletteRemapRange};
use crate::spans::EMPTY_SPAN;

/// One section to encode. Voxels are `(x, y, z, color, normal)` in the
/// render frame (`y` is the column height, `z` the column row).
#[derive(Debug, Clone)]
pub struct SectionDraft {
    pub name: &'static str,
    pub width: u8,
    pub height: u8,
    pub depth: u8,
    pub normal_type: u8,
    pub scale: f32,
    pub transform: [f32; 12],
    /// On-disk (Z-up) bounds.
    pub min_bound: [f32; 3],
    pub max_bound: [f32; 3],
    pub voxels: Vec<(u8, u8, u8, u8, u8)>,
}

impl SectionDraft {
    pub fn new(width: u8, height: u8, depth: u8) -> Self {
        #[rustfmt::skip]
        let identity = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
        ];
        Self {
            name: "section",
            width,
            height,
            depth,
            normal_type: 2,
            scale: 1.0,
            transform: identity,
            min_bound: [0.0; 3],
            max_bound: [0.0; 3],
            voxels: Vec::new(),
        }
    }

    pub fn with_voxels(mut self, voxels: Vec<(u8, u8, u8, u8, u8)>) -> Self {
        self.voxels = voxels;
        self
    }

    pub fn with_normal_type(mut self, normal_type: u8) -> Self {
        self.normal_type = normal_type;
        self
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn with_bounds(mut self, scale: f32, min_bound: [f32; 3], max_bound: [f32; 3]) -> Self {
        self.scale = scale;
        self.min_bound = min_bound;
        self.max_bound = max_bound;
        self
    }
}

/// Encode a section body: span-start table, span-end table, column data.
pub fn encode_section_body(draft: &SectionDraft) -> Vec<u8> {
    let width = usize::from(draft.width);
    let columns = width * usize::from(draft.depth);

    let mut by_column: Vec<BTreeMap<u8, (u8, u8)>> = vec![BTreeMap::new(); columns];
    for &(x, y, z, color, normal) in &draft.voxels {
        by_column[usize::from(z) * width + usize::from(x)].insert(y, (color, normal));
    }

    let mut starts = Vec::with_capacity(columns);
    let mut ends = Vec::with_capacity(columns);
    let mut data = Vec::new();

    for column in &by_column {
        if column.is_empty() {
            starts.push(EMPTY_SPAN);
            ends.push(EMPTY_SPAN);
            continue;
        }

        starts.push(i32::try_from(data.len()).unwrap());
        encode_column(column, draft.height, &mut data);
        ends.push(i32::try_from(data.len() - 1).unwrap());
        // Unused column padding.
        data.extend_from_slice(&[0, 0]);
    }

    let mut body = Vec::with_capacity(columns * 8 + data.len());
    for value in starts.iter().chain(&ends) {
        body.extend_from_slice(&value.to_le_bytes());
    }
    body.extend(data);
    body
}

fn encode_column(column: &BTreeMap<u8, (u8, u8)>, height: u8, out: &mut Vec<u8>) {
    let mut current = 0u8;
    let mut heights = column.keys().copied().peekable();

    while let Some(start) = heights.next() {
        let mut run = vec![column[&start]];
        let mut last = start;
        while heights.peek() == Some(&(last + 1)) {
            last += 1;
            run.push(column[&last]);
            heights.next();
        }

        let len = u8::try_from(run.len()).unwrap();
        out.push(start - current);
        out.push(len);
        for (color, normal) in run {
            out.push(color);
            out.push(normal);
        }
        out.push(len);
        current = start + len;
    }

    if current < height {
        out.push(height - current);
    }
}

/// Encode a complete span-format asset.
pub fn encode_vxl(
    palette: &Palette,
    remap: PaletteRemapRange,
    sections: &[SectionDraft],
) -> Vec<u8> {
    let count = u32::try_from(sections.len()).unwrap();

    let mut bodies = Vec::new();
    let mut body_starts = Vec::with_capacity(sections.len());
    for draft in sections {
        body_starts.push(u32::try_from(bodies.len()).unwrap());
        bodies.extend(encode_section_body(draft));
    }

    let mut data = Vec::new();
    data.extend_from_slice(&fixed_text(FILE_TAG));
    data.extend_from_slice(&1u32.to_le_bytes());
    data.extend_from_slice(&count.to_le_bytes());
    data.extend_from_slice(&count.to_le_bytes());
    data.extend_from_slice(&u32::try_from(bodies.len()).unwrap().to_le_bytes());
    data.push(remap.start);
    data.push(remap.end);
    for color in palette.colors() {
        data.extend_from_slice(&[color.r, color.g, color.b]);
    }

    for (number, draft) in (0u32..).zip(sections) {
        data.extend_from_slice(&fixed_text(draft.name));
        data.extend_from_slice(&number.to_le_bytes());
        data.extend_from_slice(&[0u8; 8]);
    }

    data.extend(bodies);

    for (draft, start) in sections.iter().zip(body_starts) {
        let columns = u32::from(draft.width) * u32::from(draft.depth);
        data.extend_from_slice(&start.to_le_bytes());
        data.extend_from_slice(&(start + columns * 4).to_le_bytes());
        data.extend_from_slice(&(start + columns * 8).to_le_bytes());
        data.extend_from_slice(&draft.scale.to_le_bytes());
        for value in draft.transform.iter().chain(&draft.min_bound).chain(&draft.max_bound) {
            data.extend_from_slice(&value.to_le_bytes());
        }
        data.extend_from_slice(&[draft.width, draft.depth, draft.height, draft.normal_type]);
    }

    data
}

fn fixed_text(text: &str) -> [u8; 16] {
    let mut field = [0u8; 16];
    field[..text.len()].copy_from_slice(text.as_bytes());
    field
}
