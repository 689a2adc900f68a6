//! Error and warning types for decoding operations.

use std::fmt;

/// Fatal errors that abort decoding of an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A read at `offset` needed `needed` bytes but the buffer holds only `len`.
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        len: usize,
    },
    /// The trailing run-count byte of a span run disagrees with its leading count.
    RunLengthMismatch {
        section: usize,
        column: usize,
        offset: usize,
        expected: u8,
        actual: u8,
    },
    /// A span run would place a voxel at or beyond the section height.
    RunOutOfBounds {
        section: usize,
        column: usize,
        offset: usize,
        height: u8,
    },
    /// Invalid data format or structure.
    InvalidFormat {
        context: &'static str,
        detail: String,
    },
    /// A record layout was queried for a field it does not hold.
    LayoutField { label: &'static str },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedBuffer { offset, needed, len } => {
                write!(
                    f,
                    "truncated buffer: read of {needed} bytes at offset {offset} exceeds length {len}"
                )
            }
            Self::RunLengthMismatch {
                section,
                column,
                offset,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "run length mismatch in section {section}, column {column} at offset {offset} ({offset:#x}): {expected} != {actual}"
                )
            }
            Self::RunOutOfBounds {
                section,
                column,
                offset,
                height,
            } => {
                write!(
                    f,
                    "run in section {section}, column {column} at offset {offset} ({offset:#x}) exceeds height {height}"
                )
            }
            Self::InvalidFormat { context, detail } => {
                write!(f, "invalid format in {context}: {detail}")
            }
            Self::LayoutField { label } => {
                write!(f, "record has no field `{label}` of the requested type")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Anomalies that are reported but do not stop decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarning {
    /// The duplicate section-count header field disagrees with the first one.
    /// The first value is used.
    HeaderMismatch { section_count: u32, duplicate: u32 },
    /// A section selects a normal table other than 2 or 4; the smaller table is used.
    UnknownNormalType { section: usize, normal_type: u8 },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderMismatch {
                section_count,
                duplicate,
            } => {
                write!(
                    f,
                    "section count {section_count} disagrees with duplicate field {duplicate}"
                )
            }
            Self::UnknownNormalType {
                section,
                normal_type,
            } => {
                write!(f, "section {section} has unknown normal type {normal_type}")
            }
        }
    }
}
