//! Bit-field access over raw report buffers.
//!
//! Every decoder in the protocol crates reads through these helpers instead
//! of overlaying structs on the wire bytes. Bounds are checked once, at
//! [`ReportView`] construction, so the per-field accessors stay branch-light
//! and panic-free on the hot path.

use crate::{HidCommonError, HidCommonResult};

/// Test whether any bit of `mask` is set in `buf[byte]`.
///
/// Out-of-range offsets read as zero (no input), matching how hardware
/// truncated reports are treated.
pub fn test_bit(buf: &[u8], byte: usize, mask: u8) -> bool {
    buf.get(byte).is_some_and(|b| b & mask != 0)
}

/// Read an unsigned byte, zero when out of range.
pub fn read_u8(buf: &[u8], offset: usize) -> u8 {
    buf.get(offset).copied().unwrap_or(0)
}

/// Read a signed byte, zero when out of range.
pub fn read_i8(buf: &[u8], offset: usize) -> i8 {
    read_u8(buf, offset) as i8
}

/// Read a little-endian u16, zero when out of range.
pub fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    let lo = read_u8(buf, offset) as u16;
    let hi = read_u8(buf, offset + 1) as u16;
    lo | (hi << 8)
}

/// Read a little-endian i16, zero when out of range.
pub fn read_i16_le(buf: &[u8], offset: usize) -> i16 {
    read_u16_le(buf, offset) as i16
}

/// Set or clear `mask` in `buf[byte]`. Out-of-range writes are dropped.
pub fn put_mask(buf: &mut [u8], byte: usize, mask: u8, on: bool) {
    if let Some(b) = buf.get_mut(byte) {
        if on {
            *b |= mask;
        } else {
            *b &= !mask;
        }
    }
}

/// Write an unsigned byte. Out-of-range writes are dropped.
pub fn put_u8(buf: &mut [u8], offset: usize, value: u8) {
    if let Some(b) = buf.get_mut(offset) {
        *b = value;
    }
}

/// A read-only view over one incoming report, validated against the length
/// the decoder declared for its format.
///
/// Construction is the single bounds check; field accessors never panic and
/// read zero past the end (which cannot happen after a successful `new`
/// unless the decoder reads outside its declared length — a decoder bug,
/// not a hardware condition).
#[derive(Debug, Clone, Copy)]
pub struct ReportView<'a> {
    data: &'a [u8],
}

impl<'a> ReportView<'a> {
    /// Wrap `data`, requiring at least `declared_len` bytes.
    pub fn new(data: &'a [u8], declared_len: usize) -> HidCommonResult<Self> {
        if data.len() < declared_len {
            return Err(HidCommonError::ReportTooShort {
                needed: declared_len,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn u8_at(&self, offset: usize) -> u8 {
        read_u8(self.data, offset)
    }

    pub fn i8_at(&self, offset: usize) -> i8 {
        read_i8(self.data, offset)
    }

    pub fn u16_le_at(&self, offset: usize) -> u16 {
        read_u16_le(self.data, offset)
    }

    pub fn i16_le_at(&self, offset: usize) -> i16 {
        read_i16_le(self.data, offset)
    }

    pub fn bit(&self, byte: usize, mask: u8) -> bool {
        test_bit(self.data, byte, mask)
    }
}
