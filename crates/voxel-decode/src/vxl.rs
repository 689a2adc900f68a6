//! Span-encoded (`.vxl`) asset decoding.

use crate::error::{DecodeError, DecodeResult, DecodeWarning};
use crate::header::{SectionHeader, parse_main_header, parse_section_headers};
use crate::normals::NormalTable;
use crate::spans::decode_spans;
use crate::tailer::{SectionTailer, parse_section_tailers};
use crate::{DecodeOptions, DecodedAsset, Section, SourceFormat, axes};

/// Decode a span-encoded asset.
///
/// # Errors
///
/// Returns an error if any part of the asset is truncated or malformed. No
/// partial asset is returned. Duplicate section-count disagreements and
/// unknown normal types are recorded in [`DecodedAsset::warnings`] unless
/// [`DecodeOptions::strict_section_count`] makes the former fatal.
pub fn decode_vxl(data: &[u8], options: &DecodeOptions) -> DecodeResult<DecodedAsset> {
    let header = parse_main_header(data)?;
    let mut warnings = Vec::new();

    if let Some(warning) = header.section_count_mismatch() {
        if options.strict_section_count {
            return Err(DecodeError::InvalidFormat {
                context: "main header",
                detail: warning.to_string(),
            });
        }
        tracing::warn!(%warning, "section count fields disagree; using the first");
        warnings.push(warning);
    }

    let section_headers = parse_section_headers(data, header.section_count)?;
    let tailers = parse_section_tailers(data, header.section_count, header.body_size)?;
    let body_offset = header.body_offset();

    let sections = section_headers
        .iter()
        .zip(&tailers)
        .enumerate()
        .map(|(index, (section_header, tailer))| {
            decode_section(data, index, section_header, tailer, body_offset, &mut warnings)
        })
        .collect::<DecodeResult<Vec<_>>>()?;

    Ok(DecodedAsset {
        format: SourceFormat::Spanned,
        palette: header.palette,
        remap_range: Some(header.remap_range),
        sections,
        warnings,
    })
}

fn decode_section(
    data: &[u8],
    index: usize,
    section_header: &SectionHeader,
    tailer: &SectionTailer,
    body_offset: usize,
    warnings: &mut Vec<DecodeWarning>,
) -> DecodeResult<Section> {
    let normal_table = NormalTable::from_normal_type(tailer.normal_type).unwrap_or_else(|| {
        let warning = DecodeWarning::UnknownNormalType {
            section: index,
            normal_type: tailer.normal_type,
        };
        tracing::warn!(%warning, "falling back to the small normal table");
        warnings.push(warning);
        NormalTable::TiberianSun
    });

    let samples = decode_spans(data, tailer, body_offset, index)?;
    tracing::debug!(
        section = index,
        name = %section_header.name,
        samples = samples.len(),
        "decoded section"
    );

    Ok(Section {
        name: section_header.name.clone(),
        size: axes::to_render_grid(tailer.disk_size()),
        scale: tailer.scale,
        min_bounds: axes::to_render(tailer.min_bound),
        max_bounds: axes::to_render(tailer.max_bound),
        normal_table: Some(normal_table),
        transform: axes::transform_to_render(&tailer.transform, tailer.scale),
        samples,
    })
}
