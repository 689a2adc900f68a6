//! Dense chunk (`.vox`) asset decoding.
//!
//! The file is `"VOX "`, a `u32` version, then a `MAIN` chunk. Every chunk is
//! a four-byte id, a content length, a children length, the content and the
//! children. `MAIN` holds its records as children: an optional `PACK` with the
//! model count, one `SIZE`/`XYZI` pair per model, and an optional `RGBA`
//! palette. Unknown chunks are skipped.

use glam::{Affine3A, UVec3};

use crate::error::{DecodeError, DecodeResult};
use crate::palette::{PALETTE_LEN, Palette, Rgb};
use crate::reader::{read_bytes, read_u8, read_u32};
use crate::{DecodedAsset, Section, SourceFormat, VoxelSample, axes};

/// File signature.
pub const VOX_MAGIC: &[u8; 4] = b"VOX ";

/// Version written by current editors.
pub const SUPPORTED_VERSION: u32 = 150;

/// Largest model edge; voxel coordinates are single bytes.
pub const MAX_MODEL_SIZE: u32 = 256;

/// Palette used when a file has no `RGBA` chunk, as `0xAABBGGRR`.
#[allow(clippy::unreadable_literal)]
pub const DEFAULT_PALETTE: [u32; PALETTE_LEN] = [
    0x00000000, 0xffffffff, 0xffccffff, 0xff99ffff, 0xff66ffff, 0xff33ffff, 0xff00ffff, 0xffffccff,
    0xffccccff, 0xff99ccff, 0xff66ccff, 0xff33ccff, 0xff00ccff, 0xffff99ff, 0xffcc99ff, 0xff9999ff,
    0xff6699ff, 0xff3399ff, 0xff0099ff, 0xffff66ff, 0xffcc66ff, 0xff9966ff, 0xff6666ff, 0xff3366ff,
    0xff0066ff, 0xffff33ff, 0xffcc33ff, 0xff9933ff, 0xff6633ff, 0xff3333ff, 0xff0033ff, 0xffff00ff,
    0xffcc00ff, 0xff9900ff, 0xff6600ff, 0xff3300ff, 0xff0000ff, 0xffffffcc, 0xffccffcc, 0xff99ffcc,
    0xff66ffcc, 0xff33ffcc, 0xff00ffcc, 0xffffcccc, 0xffcccccc, 0xff99cccc, 0xff66cccc, 0xff33cccc,
    0xff00cccc, 0xffff99cc, 0xffcc99cc, 0xff9999cc, 0xff6699cc, 0xff3399cc, 0xff0099cc, 0xffff66cc,
    0xffcc66cc, 0xff9966cc, 0xff6666cc, 0xff3366cc, 0xff0066cc, 0xffff33cc, 0xffcc33cc, 0xff9933cc,
    0xff6633cc, 0xff3333cc, 0xff0033cc, 0xffff00cc, 0xffcc00cc, 0xff9900cc, 0xff6600cc, 0xff3300cc,
    0xff0000cc, 0xffffff99, 0xffccff99, 0xff99ff99, 0xff66ff99, 0xff33ff99, 0xff00ff99, 0xffffcc99,
    0xffcccc99, 0xff99cc99, 0xff66cc99, 0xff33cc99, 0xff00cc99, 0xffff9999, 0xffcc9999, 0xff999999,
    0xff669999, 0xff339999, 0xff009999, 0xffff6699, 0xffcc6699, 0xff996699, 0xff666699, 0xff336699,
    0xff006699, 0xffff3399, 0xffcc3399, 0xff993399, 0xff663399, 0xff333399, 0xff003399, 0xffff0099,
    0xffcc0099, 0xff990099, 0xff660099, 0xff330099, 0xff000099, 0xffffff66, 0xffccff66, 0xff99ff66,
    0xff66ff66, 0xff33ff66, 0xff00ff66, 0xffffcc66, 0xffcccc66, 0xff99cc66, 0xff66cc66, 0xff33cc66,
    0xff00cc66, 0xffff9966, 0xffcc9966, 0xff999966, 0xff669966, 0xff339966, 0xff009966, 0xffff6666,
    0xffcc6666, 0xff996666, 0xff666666, 0xff336666, 0xff006666, 0xffff3366, 0xffcc3366, 0xff993366,
    0xff663366, 0xff333366, 0xff003366, 0xffff0066, 0xffcc0066, 0xff990066, 0xff660066, 0xff330066,
    0xff000066, 0xffffff33, 0xffccff33, 0xff99ff33, 0xff66ff33, 0xff33ff33, 0xff00ff33, 0xffffcc33,
    0xffcccc33, 0xff99cc33, 0xff66cc33, 0xff33cc33, 0xff00cc33, 0xffff9933, 0xffcc9933, 0xff999933,
    0xff669933, 0xff339933, 0xff009933, 0xffff6633, 0xffcc6633, 0xff996633, 0xff666633, 0xff336633,
    0xff006633, 0xffff3333, 0xffcc3333, 0xff993333, 0xff663333, 0xff333333, 0xff003333, 0xffff0033,
    0xffcc0033, 0xff990033, 0xff660033, 0xff330033, 0xff000033, 0xffffff00, 0xffccff00, 0xff99ff00,
    0xff66ff00, 0xff33ff00, 0xff00ff00, 0xffffcc00, 0xffcccc00, 0xff99cc00, 0xff66cc00, 0xff33cc00,
    0xff00cc00, 0xffff9900, 0xffcc9900, 0xff999900, 0xff669900, 0xff339900, 0xff009900, 0xffff6600,
    0xffcc6600, 0xff996600, 0xff666600, 0xff336600, 0xff006600, 0xffff3300, 0xffcc3300, 0xff993300,
    0xff663300, 0xff333300, 0xff003300, 0xffff0000, 0xffcc0000, 0xff990000, 0xff660000, 0xff330000,
    0xff0000ee, 0xff0000dd, 0xff0000bb, 0xff0000aa, 0xff000088, 0xff000077, 0xff000055, 0xff000044,
    0xff000022, 0xff000011, 0xff00ee00, 0xff00dd00, 0xff00bb00, 0xff00aa00, 0xff008800, 0xff007700,
    0xff005500, 0xff004400, 0xff002200, 0xff001100, 0xffee0000, 0xffdd0000, 0xffbb0000, 0xffaa0000,
    0xff880000, 0xff770000, 0xff550000, 0xff440000, 0xff220000, 0xff110000, 0xffeeeeee, 0xffdddddd,
    0xffbbbbbb, 0xffaaaaaa, 0xff888888, 0xff777777, 0xff555555, 0xff444444, 0xff222222, 0xff111111,
];

/// One chunk, borrowed from the asset buffer.
#[derive(Debug, Clone, Copy)]
struct Chunk<'a> {
    id: [u8; 4],
    content: &'a [u8],
    children: &'a [u8],
}

/// A model before axis mapping: size and `(x, y, z, color)` records on disk.
struct Model {
    size: UVec3,
    voxels: Vec<[u8; 4]>,
}

/// Decode a dense chunk asset.
///
/// # Errors
///
/// Returns an error if the signature is wrong or a chunk is truncated. Models
/// must pair a `SIZE` with an `XYZI` chunk, keep every dimension within
/// `1..=MAX_MODEL_SIZE`, and hold no voxel outside that size.
pub fn decode_vox(data: &[u8]) -> DecodeResult<DecodedAsset> {
    let mut offset = 0;
    let magic = read_bytes(data, &mut offset, VOX_MAGIC.len())?;
    if magic != VOX_MAGIC {
        return Err(DecodeError::InvalidFormat {
            context: "vox",
            detail: "missing VOX signature".to_string(),
        });
    }

    let version = read_u32(data, &mut offset)?;
    if version != SUPPORTED_VERSION {
        tracing::warn!(version, "unexpected vox version; decoding anyway");
    }

    let main = read_chunk(data, &mut offset)?;
    if &main.id != b"MAIN" {
        return Err(DecodeError::InvalidFormat {
            context: "vox",
            detail: format!("expected MAIN chunk, found {}", id_to_string(main.id)),
        });
    }

    let (models, palette) = parse_main_children(main.children)?;

    let sections = models
        .into_iter()
        .enumerate()
        .map(|(index, model)| model_to_section(index, model))
        .collect::<DecodeResult<Vec<_>>>()?;

    Ok(DecodedAsset {
        format: SourceFormat::Dense,
        palette,
        remap_range: None,
        sections,
        warnings: Vec::new(),
    })
}

fn parse_main_children(children: &[u8]) -> DecodeResult<(Vec<Model>, Palette)> {
    let mut offset = 0;
    let mut model_count = None;
    let mut pending_size = None;
    let mut models = Vec::new();
    let mut palette = default_palette();

    while offset < children.len() {
        let chunk = read_chunk(children, &mut offset)?;
        match &chunk.id {
            b"PACK" => model_count = Some(read_u32(chunk.content, &mut 0)?),
            b"SIZE" => {
                if pending_size.is_some() {
                    return Err(missing_chunk("XYZI", models.len()));
                }
                pending_size = Some(parse_size(chunk.content)?);
            }
            b"XYZI" => {
                let size = pending_size
                    .take()
                    .ok_or_else(|| missing_chunk("SIZE", models.len()))?;
                models.push(Model {
                    size,
                    voxels: parse_xyzi(chunk.content)?,
                });
            }
            b"RGBA" => palette = parse_rgba(chunk.content)?,
            _ => {
                tracing::debug!(id = %id_to_string(chunk.id), "skipping vox chunk");
            }
        }
    }

    if pending_size.is_some() {
        return Err(missing_chunk("XYZI", models.len()));
    }

    match model_count {
        Some(count) if count as usize != models.len() => Err(DecodeError::InvalidFormat {
            context: "vox PACK chunk",
            detail: format!("declares {count} models but {} were found", models.len()),
        }),
        _ => Ok((models, palette)),
    }
}

fn read_chunk<'a>(data: &'a [u8], offset: &mut usize) -> DecodeResult<Chunk<'a>> {
    let id = read_bytes(data, offset, 4)?;
    let content_len = read_u32(data, offset)? as usize;
    let children_len = read_u32(data, offset)? as usize;
    let content = read_bytes(data, offset, content_len)?;
    let children = read_bytes(data, offset, children_len)?;

    Ok(Chunk {
        id: [id[0], id[1], id[2], id[3]],
        content,
        children,
    })
}

fn parse_size(content: &[u8]) -> DecodeResult<UVec3> {
    let mut offset = 0;
    let size = UVec3::new(
        read_u32(content, &mut offset)?,
        read_u32(content, &mut offset)?,
        read_u32(content, &mut offset)?,
    );
    if size.min_element() == 0 || size.max_element() > MAX_MODEL_SIZE {
        return Err(DecodeError::InvalidFormat {
            context: "vox SIZE chunk",
            detail: format!("model size {size} is outside 1..={MAX_MODEL_SIZE}"),
        });
    }
    Ok(size)
}

fn parse_xyzi(content: &[u8]) -> DecodeResult<Vec<[u8; 4]>> {
    let mut offset = 0;
    let count = read_u32(content, &mut offset)? as usize;
    let records = read_bytes(content, &mut offset, count.saturating_mul(4))?;

    Ok(records
        .chunks_exact(4)
        .map(|record| [record[0], record[1], record[2], record[3]])
        .collect())
}

/// Entry `k >= 1` is `RGBA[k - 1]`; entry 0 stays black.
fn parse_rgba(content: &[u8]) -> DecodeResult<Palette> {
    let mut offset = 0;
    let mut colors = [Rgb::default(); PALETTE_LEN];
    for color in colors.iter_mut().skip(1) {
        let r = read_u8(content, &mut offset)?;
        let g = read_u8(content, &mut offset)?;
        let b = read_u8(content, &mut offset)?;
        // Alpha.
        read_u8(content, &mut offset)?;
        *color = Rgb::new(r, g, b);
    }
    Ok(Palette::new(colors))
}

fn default_palette() -> Palette {
    let mut colors = [Rgb::default(); PALETTE_LEN];
    for (color, value) in colors.iter_mut().zip(DEFAULT_PALETTE) {
        let [r, g, b, _] = value.to_le_bytes();
        *color = Rgb::new(r, g, b);
    }
    Palette::new(colors)
}

fn model_to_section(index: usize, model: Model) -> DecodeResult<Section> {
    let samples = model
        .voxels
        .iter()
        .map(|&[x, y, z, color]| {
            let disk = UVec3::new(u32::from(x), u32::from(y), u32::from(z));
            if !disk.cmplt(model.size).all() {
                return Err(DecodeError::InvalidFormat {
                    context: "vox XYZI chunk",
                    detail: format!(
                        "model {index} voxel {disk} lies outside size {}",
                        model.size
                    ),
                });
            }

            let [x, y, z] = axes::to_render_grid(disk).to_array();
            Ok(VoxelSample {
                x: narrow(x),
                y: narrow(y),
                z: narrow(z),
                color,
                normal: 0,
            })
        })
        .collect::<DecodeResult<Vec<_>>>()?;

    let size = axes::to_render_grid(model.size);
    let half = size.as_vec3() * 0.5;
    tracing::debug!(model = index, samples = samples.len(), "decoded vox model");

    #[allow(clippy::cast_precision_loss)]
    let scale = 1.0 / size.max_element() as f32;

    Ok(Section {
        name: format!("model{index}"),
        size,
        scale,
        min_bounds: -half,
        max_bounds: half,
        normal_table: None,
        transform: Affine3A::IDENTITY,
        samples,
    })
}

/// Coordinates that came from `u8` disk values.
#[allow(clippy::cast_possible_truncation)]
fn narrow(value: u32) -> u8 {
    value as u8
}

fn missing_chunk(id: &str, model: usize) -> DecodeError {
    DecodeError::InvalidFormat {
        context: "vox MAIN chunk",
        detail: format!("model {model} is missing its {id} chunk"),
    }
}

fn id_to_string(id: [u8; 4]) -> String {
    String::from_utf8_lossy(&id).into_owned()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn chunk(id: &[u8; 4], content: &[u8], children: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(id);
        data.extend_from_slice(&u32::try_from(content.len()).unwrap().to_le_bytes());
        data.extend_from_slice(&u32::try_from(children.len()).unwrap().to_le_bytes());
        data.extend_from_slice(content);
        data.extend_from_slice(children);
        data
    }

    fn size_chunk(x: u32, y: u32, z: u32) -> Vec<u8> {
        let mut content = Vec::new();
        for v in [x, y, z] {
            content.extend_from_slice(&v.to_le_bytes());
        }
        chunk(b"SIZE", &content, &[])
    }

    fn xyzi_chunk(voxels: &[[u8; 4]]) -> Vec<u8> {
        let mut content = u32::try_from(voxels.len()).unwrap().to_le_bytes().to_vec();
        for voxel in voxels {
            content.extend_from_slice(voxel);
        }
        chunk(b"XYZI", &content, &[])
    }

    fn vox_file(version: u32, children: &[u8]) -> Vec<u8> {
        let mut data = VOX_MAGIC.to_vec();
        data.extend_from_slice(&version.to_le_bytes());
        data.extend(chunk(b"MAIN", &[], children));
        data
    }

    #[test]
    fn test_single_model() {
        let mut children = size_chunk(4, 2, 8);
        children.extend(xyzi_chunk(&[[1, 0, 7, 3], [3, 1, 0, 200]]));
        let asset = decode_vox(&vox_file(150, &children)).unwrap();

        assert_eq!(asset.format, SourceFormat::Dense);
        assert_eq!(asset.remap_range, None);
        assert!(asset.warnings.is_empty());
        assert_eq!(asset.sections.len(), 1);

        let section = &asset.sections[0];
        assert_eq!(section.name, "model0");
        // On-disk (x, y, z) = (4, 2, 8) maps to render (4, 8, 2).
        assert_eq!(section.size, UVec3::new(4, 8, 2));
        assert!((section.scale - 0.125).abs() < f32::EPSILON);
        assert_eq!(section.min_bounds, Vec3::new(-2.0, -4.0, -1.0));
        assert_eq!(section.max_bounds, Vec3::new(2.0, 4.0, 1.0));
        assert_eq!(section.normal_table, None);
        assert_eq!(section.transform, Affine3A::IDENTITY);

        let positions: Vec<_> = section.samples.iter().map(VoxelSample::position).collect();
        assert_eq!(positions, vec![UVec3::new(1, 7, 0), UVec3::new(3, 0, 1)]);
        assert_eq!(section.samples[1].color, 200);
        assert!(section.samples.iter().all(|s| section.contains(s)));
    }

    #[test]
    fn test_default_palette_channels() {
        let mut children = size_chunk(1, 1, 1);
        children.extend(xyzi_chunk(&[]));
        let asset = decode_vox(&vox_file(150, &children)).unwrap();

        assert_eq!(asset.palette.get(0), Rgb::new(0, 0, 0));
        assert_eq!(asset.palette.get(1), Rgb::new(255, 255, 255));
        // 0xffccffff: low byte is red.
        assert_eq!(asset.palette.get(2), Rgb::new(255, 255, 204));
        // 0xff0000ee is pure red.
        assert_eq!(asset.palette.get(216), Rgb::new(238, 0, 0));
    }

    #[test]
    fn test_rgba_chunk_is_shifted_by_one() {
        let mut rgba = Vec::new();
        for i in 0..=255u8 {
            rgba.extend_from_slice(&[i, 0, 255 - i, 255]);
        }
        let mut children = size_chunk(1, 1, 1);
        children.extend(xyzi_chunk(&[[0, 0, 0, 1]]));
        children.extend(chunk(b"RGBA", &rgba, &[]));
        let asset = decode_vox(&vox_file(150, &children)).unwrap();

        assert_eq!(asset.palette.get(0), Rgb::new(0, 0, 0));
        assert_eq!(asset.palette.get(1), Rgb::new(0, 0, 255));
        assert_eq!(asset.palette.get(255), Rgb::new(254, 0, 1));
    }

    #[test]
    fn test_pack_with_multiple_models() {
        let mut children = chunk(b"PACK", &2u32.to_le_bytes(), &[]);
        children.extend(size_chunk(2, 2, 2));
        children.extend(xyzi_chunk(&[[1, 1, 1, 9]]));
        children.extend(size_chunk(1, 1, 1));
        children.extend(xyzi_chunk(&[[0, 0, 0, 4]]));
        let asset = decode_vox(&vox_file(150, &children)).unwrap();

        let names: Vec<_> = asset.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["model0", "model1"]);
        assert_eq!(asset.sections[1].samples[0].color, 4);
    }

    #[test]
    fn test_pack_count_mismatch() {
        let mut children = chunk(b"PACK", &3u32.to_le_bytes(), &[]);
        children.extend(size_chunk(1, 1, 1));
        children.extend(xyzi_chunk(&[]));
        let result = decode_vox(&vox_file(150, &children));
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_unknown_chunks_are_skipped() {
        let mut children = chunk(b"nTRN", &[1, 2, 3], &[]);
        children.extend(size_chunk(1, 1, 1));
        children.extend(xyzi_chunk(&[[0, 0, 0, 1]]));
        children.extend(chunk(b"MATL", &[0; 12], &[]));
        let asset = decode_vox(&vox_file(150, &children)).unwrap();
        assert_eq!(asset.sections[0].samples.len(), 1);
    }

    #[test]
    fn test_other_version_still_decodes() {
        let mut children = size_chunk(1, 1, 1);
        children.extend(xyzi_chunk(&[[0, 0, 0, 1]]));
        let asset = decode_vox(&vox_file(200, &children)).unwrap();
        assert_eq!(asset.sections.len(), 1);
    }

    #[test]
    fn test_bad_magic() {
        let result = decode_vox(b"VXO \x96\0\0\0");
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_missing_main() {
        let mut data = VOX_MAGIC.to_vec();
        data.extend_from_slice(&150u32.to_le_bytes());
        data.extend(size_chunk(1, 1, 1));
        let result = decode_vox(&data);
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_size_without_xyzi() {
        let result = decode_vox(&vox_file(150, &size_chunk(1, 1, 1)));
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_xyzi_without_size() {
        let result = decode_vox(&vox_file(150, &xyzi_chunk(&[])));
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_zero_dimension() {
        let mut children = size_chunk(0, 1, 1);
        children.extend(xyzi_chunk(&[]));
        let result = decode_vox(&vox_file(150, &children));
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_oversized_model() {
        let mut children = size_chunk(1, 257, 1);
        children.extend(xyzi_chunk(&[]));
        let result = decode_vox(&vox_file(150, &children));
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_voxel_outside_model() {
        let mut children = size_chunk(2, 2, 2);
        children.extend(xyzi_chunk(&[[0, 2, 0, 1]]));
        let result = decode_vox(&vox_file(150, &children));
        assert!(matches!(result, Err(DecodeError::InvalidFormat { .. })));
    }

    #[test]
    fn test_truncated_xyzi() {
        let mut children = size_chunk(2, 2, 2);
        let mut content = 5u32.to_le_bytes().to_vec();
        content.extend_from_slice(&[0, 0, 0, 1]);
        children.extend(chunk(b"XYZI", &content, &[]));
        let result = decode_vox(&vox_file(150, &children));
        assert!(matches!(result, Err(DecodeError::TruncatedBuffer { .. })));
    }

    #[test]
    fn test_truncated_chunk_header() {
        let mut data = vox_file(150, &[]);
        data.truncate(14);
        let result = decode_vox(&data);
        assert!(matches!(result, Err(DecodeError::TruncatedBuffer { .. })));
    }
}
