//! Fixed-width binary reader and writer for the wire format.
//!
//! Every scalar is a little-endian `i32`. Arrays are written as an `i32`
//! length followed by exactly that many elements.

use crate::error::{DecodeError, EncodeError};

/// Width of one encoded `i32`.
const I32_WIDTH: usize = 4;

/// Append-only buffer that message bodies are encoded into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkWriter {
    buf: Vec<u8>,
}

impl NetworkWriter {
    /// Create an empty writer.
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append one `i32`.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Append an array length prefix.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::LengthOverflow`] if `len` exceeds `i32::MAX`.
    pub fn write_len(&mut self, len: usize) -> Result<(), EncodeError> {
        let prefix = i32::try_from(len).map_err(|_err| EncodeError::LengthOverflow(len))?;
        self.write_i32(prefix);
        Ok(())
    }

    /// Number of bytes written so far.
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer and return the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Cursor over an encoded frame.
#[derive(Debug, Clone)]
pub struct NetworkReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> NetworkReader<'a> {
    /// Start reading at the beginning of `bytes`.
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Read one `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than four bytes remain.
    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        let truncated = DecodeError::Truncated {
            offset: self.offset,
            needed: I32_WIDTH,
            remaining: self.remaining(),
        };
        let end = self.offset.checked_add(I32_WIDTH).ok_or_else(|| truncated.clone())?;
        let chunk: [u8; I32_WIDTH] = self
            .bytes
            .get(self.offset..end)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(truncated)?;
        self.offset = end;
        Ok(i32::from_le_bytes(chunk))
    }

    /// Read an array length prefix.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::NegativeLength`] for a negative prefix, or
    /// [`DecodeError::Truncated`] if the prefix itself is cut off.
    pub fn read_len(&mut self) -> Result<usize, DecodeError> {
        let raw = self.read_i32()?;
        usize::try_from(raw).map_err(|_err| DecodeError::NegativeLength(raw))
    }

    /// Bytes not yet consumed.
    pub const fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Upper bound on how many `i32` elements could still be read. Used to
    /// cap pre-allocation when a length prefix is hostile.
    pub const fn max_i32_elements(&self) -> usize {
        self.remaining() / I32_WIDTH
    }

    /// Fail unless every byte has been consumed.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TrailingBytes`] when input is left over.
    pub const fn finish(&self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            left => Err(DecodeError::TrailingBytes(left)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn i32_is_little_endian() {
        let mut writer = NetworkWriter::new();
        writer.write_i32(1);
        writer.write_i32(-2);
        assert_eq!(writer.as_bytes(), &[1, 0, 0, 0, 0xFE, 0xFF, 0xFF, 0xFF]);

        let bytes = writer.into_bytes();
        let mut reader = NetworkReader::new(&bytes);
        assert_eq!(reader.read_i32().unwrap(), 1);
        assert_eq!(reader.read_i32().unwrap(), -2);
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn truncated_read_reports_position() {
        let bytes = [7, 0, 0, 0, 1, 2];
        let mut reader = NetworkReader::new(&bytes);
        assert_eq!(reader.read_i32().unwrap(), 7);
        assert_eq!(
            reader.read_i32(),
            Err(DecodeError::Truncated {
                offset: 4,
                needed: 4,
                remaining: 2,
            })
        );
    }

    #[test]
    fn negative_length_is_rejected() {
        let mut writer = NetworkWriter::new();
        writer.write_i32(-1);
        let bytes = writer.into_bytes();
        let mut reader = NetworkReader::new(&bytes);
        assert_eq!(reader.read_len(), Err(DecodeError::NegativeLength(-1)));
    }

    #[test]
    fn finish_detects_trailing_bytes() {
        let bytes = [0, 0, 0, 0, 9];
        let mut reader = NetworkReader::new(&bytes);
        reader.read_i32().unwrap();
        assert_eq!(reader.finish(), Err(DecodeError::TrailingBytes(1)));
    }
}
