use super::*;

/// An undecoded chunk from a PNG.
///
/// The data is borrowed from the full PNG bytes. The CRC is recomputed when
/// the chunk is read, so both the declared and actual values are on hand.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PngRawChunk<'b> {
  pub(crate) offset: usize,
  pub(crate) chunk_type: PngChunkType,
  pub(crate) data: &'b [u8],
  pub(crate) declared_crc: u32,
  pub(crate) actual_crc: u32,
}
impl Debug for PngRawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("PngRawChunk")
      .field("offset", &self.offset)
      .field("chunk_type", &self.chunk_type)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .field("actual_crc", &self.actual_crc)
      .finish()
  }
}
impl<'b> PngRawChunk<'b> {
  /// Byte offset of this chunk's length field within the full PNG bytes.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }
  /// The type tag.
  #[inline]
  #[must_use]
  pub const fn chunk_type(&self) -> PngChunkType {
    self.chunk_type
  }
  /// The chunk's data, not including the length, tag, or CRC.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }
  /// The CRC stored in the PNG after the data.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// The CRC computed over the tag and data.
  #[inline]
  #[must_use]
  pub const fn actual_crc(&self) -> u32 {
    self.actual_crc
  }
  /// If the declared and actual CRC values agree.
  #[inline]
  #[must_use]
  pub const fn is_crc_valid(&self) -> bool {
    self.declared_crc == self.actual_crc
  }
  /// Total bytes the chunk takes up: length, tag, data, and CRC.
  #[inline]
  #[must_use]
  pub const fn total_len(&self) -> usize {
    12 + self.data.len()
  }
  /// Offset just past the end of this chunk's CRC.
  #[inline]
  #[must_use]
  pub const fn end(&self) -> usize {
    self.offset + self.total_len()
  }

  /// Decodes the data according to the chunk type.
  ///
  /// `header` should be the most recent image header seen in the same PNG, if
  /// any. See [`decode_chunk`].
  #[inline]
  pub fn decode(&self, header: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
    decode_chunk(self.chunk_type, self.data, header)
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// * A chunk that would run past the end of the bytes produces a
///   [`PngError::TruncatedChunk`], after which the iterator is finished.
/// * Cloning the iterator, or making a new one over the same bytes, restarts
///   the scan. Nothing is cached between scans.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PngRawChunkIter<'b> {
  bytes: &'b [u8],
  offset: usize,
}
impl<'b> PngRawChunkIter<'b> {
  /// Pass the full PNG bytes, the signature is checked and skipped.
  ///
  /// ## Failure
  /// * [`PngError::MagicMismatch`] if the bytes don't start with the PNG
  ///   signature. No chunks are read in that case.
  #[inline]
  pub const fn new(png: &'b [u8]) -> PngResult<Self> {
    if is_png_signature_correct(png) {
      Ok(Self::after_signature(png))
    } else {
      Err(PngError::MagicMismatch)
    }
  }

  /// Skips the signature without looking at it.
  #[inline]
  #[must_use]
  pub(crate) const fn after_signature(png: &'b [u8]) -> Self {
    Self { bytes: png, offset: PNG_SIGNATURE.len() }
  }

  /// The full PNG bytes being scanned.
  #[inline]
  #[must_use]
  pub const fn bytes(&self) -> &'b [u8] {
    self.bytes
  }

  /// Offset that the next chunk would be read from.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }
}
impl<'b> Iterator for PngRawChunkIter<'b> {
  type Item = PngResult<PngRawChunk<'b>>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let chunk_start = self.offset;
    let spare = self.bytes.get(chunk_start..).unwrap_or(&[]);
    if spare.is_empty() {
      return None;
    }
    match split_chunk(spare) {
      Some((chunk_type, data, declared_crc, rest)) => {
        self.offset = self.bytes.len() - rest.len();
        let actual_crc = png_crc(chunk_type, data);
        Some(Ok(PngRawChunk { offset: chunk_start, chunk_type, data, declared_crc, actual_crc }))
      }
      None => {
        // nothing after a truncated chunk can be trusted.
        self.offset = self.bytes.len();
        Some(Err(PngError::TruncatedChunk { offset: chunk_start }))
      }
    }
  }
}
impl core::iter::FusedIterator for PngRawChunkIter<'_> {}

/// Splits one chunk off the front of `spare`, giving `None` if any part of the
/// chunk is missing.
fn split_chunk(spare: &[u8]) -> Option<(PngChunkType, &[u8], u32, &[u8])> {
  let (len_bytes, rest) = try_split_off_byte_array::<4>(spare)?;
  let (ty_bytes, rest) = try_split_off_byte_array::<4>(rest)?;
  let len = usize::try_from(u32::from_be_bytes(len_bytes)).ok()?;
  if rest.len() < len {
    return None;
  }
  let (data, rest) = rest.split_at(len);
  let (crc_bytes, rest) = try_split_off_byte_array::<4>(rest)?;
  Some((PngChunkType(ty_bytes), data, u32::from_be_bytes(crc_bytes), rest))
}
