//! Little-endian field reads and declarative record layouts.
//!
//! The free `read_*` functions follow a cursor convention: they read at
//! `*offset` and advance it past the field. [`Layout`] describes a fixed
//! record as an ordered list of [`Field`]s; each field's offset is the sum of
//! the sizes of the fields before it.

use crate::error::{DecodeError, DecodeResult};

/// Borrow `needed` bytes at `offset`, or report where the buffer ran out.
fn take(data: &[u8], offset: usize, needed: usize) -> DecodeResult<&[u8]> {
    offset
        .checked_add(needed)
        .and_then(|end| data.get(offset..end))
        .ok_or(DecodeError::TruncatedBuffer {
            offset,
            needed,
            len: data.len(),
        })
}

macro_rules! read_le {
    ($($name:ident => $ty:ty),* $(,)?) => {$(
        #[doc = concat!("Read a little-endian `", stringify!($ty), "` and advance `offset`.")]
        ///
        /// # Errors
        ///
        /// Returns [`DecodeError::TruncatedBuffer`] if the field extends past the buffer.
        pub fn $name(data: &[u8], offset: &mut usize) -> DecodeResult<$ty> {
            const SIZE: usize = std::mem::size_of::<$ty>();
            let bytes = take(data, *offset, SIZE)?;
            let mut array = [0u8; SIZE];
            array.copy_from_slice(bytes);
            *offset += SIZE;
            Ok(<$ty>::from_le_bytes(array))
        }
    )*};
}

read_le! {
    read_u8 => u8,
    read_i8 => i8,
    read_u16 => u16,
    read_i16 => i16,
    read_u32 => u32,
    read_i32 => i32,
    read_f32 => f32,
}

/// Borrow `len` raw bytes and advance `offset`.
pub fn read_bytes<'a>(data: &'a [u8], offset: &mut usize, len: usize) -> DecodeResult<&'a [u8]> {
    let bytes = take(data, *offset, len)?;
    *offset += len;
    Ok(bytes)
}

/// Read a fixed-length text field.
///
/// The text ends at the first zero byte or after `len` bytes, whichever
/// comes first. Invalid UTF-8 is replaced rather than rejected.
pub fn read_text(data: &[u8], offset: &mut usize, len: usize) -> DecodeResult<String> {
    let bytes = read_bytes(data, offset, len)?;
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
}

/// Primitive type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
    /// One byte of a fixed-length text field.
    Text,
}

impl FieldType {
    /// Size of one element in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 | Self::Text => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
        }
    }
}

/// One labelled field of a [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub ty: FieldType,
    /// Repeat count; `None` reads a single scalar.
    pub count: Option<usize>,
}

impl Field {
    #[must_use]
    pub const fn scalar(label: &'static str, ty: FieldType) -> Self {
        Self {
            label,
            ty,
            count: None,
        }
    }

    #[must_use]
    pub const fn array(label: &'static str, ty: FieldType, count: usize) -> Self {
        Self {
            label,
            ty,
            count: Some(count),
        }
    }

    #[must_use]
    pub const fn text(label: &'static str, len: usize) -> Self {
        Self::array(label, FieldType::Text, len)
    }

    /// Size of the whole field in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self.count {
            Some(count) => self.ty.size() * count,
            None => self.ty.size(),
        }
    }
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f32),
    Text(String),
    Bytes(Vec<u8>),
    Ints(Vec<i64>),
    Floats(Vec<f32>),
}

/// A record read through a [`Layout`], addressable by field label.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    fn get(&self, label: &'static str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value)
    }

    /// Integer scalar field.
    pub fn int(&self, label: &'static str) -> DecodeResult<i64> {
        match self.get(label) {
            Some(Value::Int(v)) => Ok(*v),
            _ => Err(DecodeError::LayoutField { label }),
        }
    }

    /// Unsigned 32-bit scalar field.
    pub fn uint(&self, label: &'static str) -> DecodeResult<u32> {
        u32::try_from(self.int(label)?).map_err(|_| DecodeError::LayoutField { label })
    }

    /// Unsigned 8-bit scalar field.
    pub fn byte(&self, label: &'static str) -> DecodeResult<u8> {
        u8::try_from(self.int(label)?).map_err(|_| DecodeError::LayoutField { label })
    }

    pub fn float(&self, label: &'static str) -> DecodeResult<f32> {
        match self.get(label) {
            Some(Value::Float(v)) => Ok(*v),
            _ => Err(DecodeError::LayoutField { label }),
        }
    }

    pub fn text(&self, label: &'static str) -> DecodeResult<&str> {
        match self.get(label) {
            Some(Value::Text(v)) => Ok(v),
            _ => Err(DecodeError::LayoutField { label }),
        }
    }

    /// `u8` array field.
    pub fn bytes(&self, label: &'static str) -> DecodeResult<&[u8]> {
        match self.get(label) {
            Some(Value::Bytes(v)) => Ok(v),
            _ => Err(DecodeError::LayoutField { label }),
        }
    }

    pub fn ints(&self, label: &'static str) -> DecodeResult<&[i64]> {
        match self.get(label) {
            Some(Value::Ints(v)) => Ok(v),
            _ => Err(DecodeError::LayoutField { label }),
        }
    }

    pub fn floats(&self, label: &'static str) -> DecodeResult<&[f32]> {
        match self.get(label) {
            Some(Value::Floats(v)) => Ok(v),
            _ => Err(DecodeError::LayoutField { label }),
        }
    }

    /// Float array field of a known length.
    pub fn float_array<const N: usize>(&self, label: &'static str) -> DecodeResult<[f32; N]> {
        <[f32; N]>::try_from(self.floats(label)?).map_err(|_| DecodeError::LayoutField { label })
    }
}

/// A fixed-size record description.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    fields: &'static [Field],
}

impl Layout {
    #[must_use]
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    /// Total record size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].size();
            i += 1;
        }
        total
    }

    /// Byte offset of a field relative to the start of the record.
    #[must_use]
    pub fn offset_of(&self, label: &str) -> Option<usize> {
        let mut offset = 0;
        for field in self.fields {
            if field.label == label {
                return Some(offset);
            }
            offset += field.size();
        }
        None
    }

    /// Read one record starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TruncatedBuffer`] if the record extends past the
    /// buffer. Nothing is read in that case.
    pub fn read(&self, data: &[u8], base: usize) -> DecodeResult<Record> {
        take(data, base, self.size())?;

        let mut offset = base;
        let mut fields = Vec::with_capacity(self.fields.len());
        for field in self.fields {
            let value = match (field.ty, field.count) {
                (FieldType::Text, count) => {
                    Value::Text(read_text(data, &mut offset, count.unwrap_or(1))?)
                }
                (FieldType::U8, Some(count)) => {
                    Value::Bytes(read_bytes(data, &mut offset, count)?.to_vec())
                }
                (FieldType::F32, Some(count)) => Value::Floats(
                    (0..count)
                        .map(|_| read_f32(data, &mut offset))
                        .collect::<DecodeResult<_>>()?,
                ),
                (FieldType::F32, None) => Value::Float(read_f32(data, &mut offset)?),
                (ty, Some(count)) => Value::Ints(
                    (0..count)
                        .map(|_| read_int(data, &mut offset, ty))
                        .collect::<DecodeResult<_>>()?,
                ),
                (ty, None) => Value::Int(read_int(data, &mut offset, ty)?),
            };
            fields.push((field.label, value));
        }

        Ok(Record { fields })
    }
}

fn read_int(data: &[u8], offset: &mut usize, ty: FieldType) -> DecodeResult<i64> {
    Ok(match ty {
        FieldType::U8 | FieldType::Text => i64::from(read_u8(data, offset)?),
        FieldType::I8 => i64::from(read_i8(data, offset)?),
        FieldType::U16 => i64::from(read_u16(data, offset)?),
        FieldType::I16 => i64::from(read_i16(data, offset)?),
        FieldType::U32 => i64::from(read_u32(data, offset)?),
        FieldType::I32 => i64::from(read_i32(data, offset)?),
        // Floats never reach this path; they are matched before it.
        FieldType::F32 => {
            return Err(DecodeError::InvalidFormat {
                context: "layout",
                detail: "float field read as integer".to_string(),
            });
        }
    })
}
