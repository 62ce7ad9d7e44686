//! Little-endian field extraction from byte buffers
//!
//! Every read is bounds-checked. Reading past the end of a buffer returns
//! [`Error::OutOfBounds`] instead of truncating.

use crate::error::{Error, Result};
use crate::layout::FieldSpec;

/// Largest supported field width (fits in a u64)
pub const MAX_WIDTH: usize = 8;

fn slice_at(data: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    if width == 0 || width > MAX_WIDTH {
        return Err(Error::InvalidWidth(width));
    }
    let end = offset.checked_add(width).ok_or(Error::OutOfBounds {
        offset,
        width,
        len: data.len(),
    })?;
    data.get(offset..end).ok_or(Error::OutOfBounds {
        offset,
        width,
        len: data.len(),
    })
}

/// Read an unsigned little-endian integer of `width` bytes at `offset`
pub fn read_unsigned(data: &[u8], offset: usize, width: usize) -> Result<u64> {
    let bytes = slice_at(data, offset, width)?;
    let mut buf = [0u8; MAX_WIDTH];
    buf[..width].copy_from_slice(bytes);
    Ok(u64::from_le_bytes(buf))
}

/// Read a signed little-endian integer of `width` bytes at `offset`
pub fn read_signed(data: &[u8], offset: usize, width: usize) -> Result<i64> {
    let raw = read_unsigned(data, offset, width)?;
    let shift = (MAX_WIDTH - width) * 8;
    // Move the sign bit to the top, then arithmetic-shift back down
    Ok(((raw << shift) as i64) >> shift)
}

/// Bounds-checked reader over a borrowed buffer
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn unsigned(&self, offset: usize, width: usize) -> Result<u64> {
        read_unsigned(self.data, offset, width)
    }

    pub fn signed(&self, offset: usize, width: usize) -> Result<i64> {
        read_signed(self.data, offset, width)
    }

    pub fn u8(&self, offset: usize) -> Result<u8> {
        Ok(self.unsigned(offset, 1)? as u8)
    }

    pub fn u16(&self, offset: usize) -> Result<u16> {
        Ok(self.unsigned(offset, 2)? as u16)
    }

    pub fn u32(&self, offset: usize) -> Result<u32> {
        Ok(self.unsigned(offset, 4)? as u32)
    }

    pub fn i32(&self, offset: usize) -> Result<i32> {
        Ok(self.signed(offset, 4)? as i32)
    }

    /// Read a table-described field relative to `base`
    pub fn field(&self, base: usize, spec: &FieldSpec) -> Result<i64> {
        let offset = base + spec.offset;
        if spec.signed {
            self.signed(offset, spec.width)
        } else {
            // Unsigned 4-byte values always fit in an i64
            Ok(self.unsigned(offset, spec.width)? as i64)
        }
    }

    /// Sub-slice view; fails if the range is not fully inside the buffer
    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        let end = offset.checked_add(len).ok_or(Error::OutOfBounds {
            offset,
            width: len,
            len: self.data.len(),
        })?;
        self.data.get(offset..end).ok_or(Error::OutOfBounds {
            offset,
            width: len,
            len: self.data.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_unsigned_little_endian() {
        let data = [0x34, 0x12, 0x78, 0x56, 0xFF];
        assert_eq!(read_unsigned(&data, 0, 2).unwrap(), 0x1234);
        assert_eq!(read_unsigned(&data, 0, 4).unwrap(), 0x5678_1234);
        assert_eq!(read_unsigned(&data, 4, 1).unwrap(), 0xFF);
    }

    #[test]
    fn test_read_signed_sign_extends() {
        let data = (-5i32).to_le_bytes();
        assert_eq!(read_signed(&data, 0, 4).unwrap(), -5);
        assert_eq!(read_signed(&[0xFF], 0, 1).unwrap(), -1);
        assert_eq!(read_signed(&[0x7F], 0, 1).unwrap(), 127);
        assert_eq!(read_signed(&[0x00, 0x80], 0, 2).unwrap(), i16::MIN as i64);
    }

    #[test]
    fn test_read_past_end_fails() {
        let data = [1, 2, 3];
        let err = read_unsigned(&data, 1, 4).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfBounds {
                offset: 1,
                width: 4,
                len: 3
            }
        ));
        assert!(read_signed(&data, 3, 1).is_err());
        assert!(read_unsigned(&data, usize::MAX, 2).is_err());
    }

    #[test]
    fn test_read_exactly_at_end() {
        let data = [0, 0, 0, 1];
        assert_eq!(read_unsigned(&data, 3, 1).unwrap(), 1);
    }

    #[test]
    fn test_invalid_width() {
        assert!(matches!(
            read_unsigned(&[0; 16], 0, 0),
            Err(Error::InvalidWidth(0))
        ));
        assert!(matches!(
            read_unsigned(&[0; 16], 0, 9),
            Err(Error::InvalidWidth(9))
        ));
    }

    #[test]
    fn test_byte_reader_field() {
        let mut data = vec![0u8; 16];
        data[8..12].copy_from_slice(&(-300i32).to_le_bytes());
        data[12..16].copy_from_slice(&u32::MAX.to_le_bytes());
        let reader = ByteReader::new(&data);

        let signed = FieldSpec {
            name: "s",
            offset: 0,
            width: 4,
            signed: true,
        };
        let unsigned = FieldSpec {
            name: "u",
            offset: 4,
            width: 4,
            signed: false,
        };
        assert_eq!(reader.field(8, &signed).unwrap(), -300);
        assert_eq!(reader.field(8, &unsigned).unwrap(), u32::MAX as i64);
        assert!(reader.field(12, &unsigned).is_err());
    }

    #[test]
    fn test_byte_reader_slice() {
        let data = [1, 2, 3, 4];
        let reader = ByteReader::new(&data);
        assert_eq!(reader.slice(1, 2).unwrap(), &[2, 3]);
        assert!(reader.slice(3, 2).is_err());
    }
}
