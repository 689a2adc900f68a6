//! Main header and per-section header parsing for span-encoded (`.vxl`) assets.

use crate::error::{DecodeError, DecodeResult, DecodeWarning};
use crate::palette::{Palette, PaletteRemapRange};
use crate::reader::{Field, FieldType, Layout};

/// Size of the fixed main header in bytes.
pub const MAIN_HEADER_SIZE: usize = 802;

/// Size of one section header in bytes.
pub const SECTION_HEADER_SIZE: usize = 28;

/// Text tag at the start of every span-encoded asset.
pub const FILE_TAG: &str = "Voxel Animation";

const MAIN_HEADER: Layout = Layout::new(&[
    Field::text("file_type", 16),
    Field::scalar("unused", FieldType::U32),
    Field::scalar("section_count", FieldType::U32),
    Field::scalar("section_count_duplicate", FieldType::U32),
    Field::scalar("body_size", FieldType::U32),
    Field::scalar("remap_start", FieldType::U8),
    Field::scalar("remap_end", FieldType::U8),
    Field::array("palette", FieldType::U8, 256 * 3),
]);

const SECTION_HEADER: Layout = Layout::new(&[
    Field::text("name", 16),
    Field::scalar("number", FieldType::U32),
    Field::array("unused", FieldType::U32, 2),
]);

const _: () = assert!(MAIN_HEADER.size() == MAIN_HEADER_SIZE);
const _: () = assert!(SECTION_HEADER.size() == SECTION_HEADER_SIZE);

/// The fixed header at the start of a span-encoded asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainHeader {
    pub file_type: String,
    pub section_count: u32,
    /// Second copy of the section count. Only [`MainHeader::section_count`] is used.
    pub section_count_duplicate: u32,
    /// Bytes of section body data between the section headers and the tailers.
    pub body_size: u32,
    pub remap_range: PaletteRemapRange,
    pub palette: Palette,
}

impl MainHeader {
    /// Report a disagreement between the two section-count fields.
    #[must_use]
    pub fn section_count_mismatch(&self) -> Option<DecodeWarning> {
        (self.section_count != self.section_count_duplicate).then_some(
            DecodeWarning::HeaderMismatch {
                section_count: self.section_count,
                duplicate: self.section_count_duplicate,
            },
        )
    }

    /// Byte offset of the first section's body data.
    #[must_use]
    pub fn body_offset(&self) -> usize {
        MAIN_HEADER_SIZE + self.section_count as usize * SECTION_HEADER_SIZE
    }
}

/// Parse the 802-byte main header at the start of `data`.
///
/// # Errors
///
/// Returns [`DecodeError::TruncatedBuffer`] if `data` is shorter than the header.
pub fn parse_main_header(data: &[u8]) -> DecodeResult<MainHeader> {
    let record = MAIN_HEADER.read(data, 0)?;

    Ok(MainHeader {
        file_type: record.text("file_type")?.to_string(),
        section_count: record.uint("section_count")?,
        section_count_duplicate: record.uint("section_count_duplicate")?,
        body_size: record.uint("body_size")?,
        remap_range: PaletteRemapRange::new(
            record.byte("remap_start")?,
            record.byte("remap_end")?,
        ),
        palette: Palette::from_rgb_bytes(record.bytes("palette")?)?,
    })
}

/// Per-section header stored right after the main header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub name: String,
    pub number: u32,
}

/// Parse `count` section headers following the main header.
pub fn parse_section_headers(data: &[u8], count: u32) -> DecodeResult<Vec<SectionHeader>> {
    let count = count as usize;
    let block_len = count
        .checked_mul(SECTION_HEADER_SIZE)
        .ok_or(DecodeError::TruncatedBuffer {
            offset: MAIN_HEADER_SIZE,
            needed: usize::MAX,
            len: data.len(),
        })?;
    if MAIN_HEADER_SIZE + block_len > data.len() {
        return Err(DecodeError::TruncatedBuffer {
            offset: MAIN_HEADER_SIZE,
            needed: block_len,
            len: data.len(),
        });
    }

    (0..count)
        .map(|i| {
            let record = SECTION_HEADER.read(data, MAIN_HEADER_SIZE + i * SECTION_HEADER_SIZE)?;
            Ok(SectionHeader {
                name: record.text("name")?.to_string(),
                number: record.uint("number")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Rgb;

    fn header_bytes(section_count: u32, duplicate: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity(MAIN_HEADER_SIZE);
        let mut tag = [0u8; 16];
        tag[..FILE_TAG.len()].copy_from_slice(FILE_TAG.as_bytes());
        data.extend_from_slice(&tag);
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&section_count.to_le_bytes());
        data.extend_from_slice(&duplicate.to_le_bytes());
        data.extend_from_slice(&1234u32.to_le_bytes());
        data.push(16);
        data.push(31);
        for i in 0..=u8::MAX {
            data.extend_from_slice(&[i, 0, 255 - i]);
        }
        data
    }

    #[test]
    fn test_field_offsets() {
        assert_eq!(MAIN_HEADER.offset_of("section_count"), Some(20));
        assert_eq!(MAIN_HEADER.offset_of("section_count_duplicate"), Some(24));
        assert_eq!(MAIN_HEADER.offset_of("body_size"), Some(28));
        assert_eq!(MAIN_HEADER.offset_of("remap_start"), Some(32));
        assert_eq!(MAIN_HEADER.offset_of("remap_end"), Some(33));
        assert_eq!(MAIN_HEADER.offset_of("palette"), Some(34));
    }

    #[test]
    fn test_parse_main_header() {
        let header = parse_main_header(&header_bytes(3, 3)).unwrap();

        assert_eq!(header.file_type, FILE_TAG);
        assert_eq!(header.section_count, 3);
        assert_eq!(header.body_size, 1234);
        assert_eq!(header.remap_range, PaletteRemapRange::new(16, 31));
        assert_eq!(header.palette.get(0), Rgb::new(0, 0, 255));
        assert_eq!(header.palette.get(200), Rgb::new(200, 0, 55));
        assert_eq!(header.section_count_mismatch(), None);
        assert_eq!(header.body_offset(), MAIN_HEADER_SIZE + 3 * SECTION_HEADER_SIZE);
    }

    #[test]
    fn test_section_count_mismatch() {
        let header = parse_main_header(&header_bytes(2, 5)).unwrap();
        assert_eq!(header.section_count, 2);
        assert_eq!(
            header.section_count_mismatch(),
            Some(DecodeWarning::HeaderMismatch {
                section_count: 2,
                duplicate: 5
            })
        );
    }

    #[test]
    fn test_truncated_header() {
        let data = header_bytes(1, 1);
        let result = parse_main_header(&data[..801]);
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedBuffer { offset: 0, .. })
        ));

        assert!(matches!(
            parse_main_header(&[]),
            Err(DecodeError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn test_parse_section_headers() {
        let mut data = header_bytes(2, 2);
        for (i, name) in ["body", "turret"].iter().enumerate() {
            let mut field = [0u8; 16];
            field[..name.len()].copy_from_slice(name.as_bytes());
            data.extend_from_slice(&field);
            data.extend_from_slice(&u32::try_from(i).unwrap().to_le_bytes());
            data.extend_from_slice(&[0u8; 8]);
        }

        let headers = parse_section_headers(&data, 2).unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].name, "body");
        assert_eq!(headers[1].name, "turret");
        assert_eq!(headers[1].number, 1);
    }

    #[test]
    fn test_section_headers_truncated() {
        let data = header_bytes(4, 4);
        let result = parse_section_headers(&data, 4);
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedBuffer {
                offset: MAIN_HEADER_SIZE,
                ..
            })
        ));
    }
}
