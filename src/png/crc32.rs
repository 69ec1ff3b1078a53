use super::*;

/// Computes the CRC32 that PNG stores after a chunk.
///
/// The CRC covers the chunk type tag followed by the chunk data, but not the
/// length field.
#[inline]
#[must_use]
pub fn png_crc(chunk_type: PngChunkType, data: &[u8]) -> u32 {
  let mut hasher = crc32fast::Hasher::new();
  hasher.update(chunk_type.as_bytes());
  hasher.update(data);
  hasher.finalize()
}

#[test]
fn test_png_crc_of_iend() {
  // every PNG ends with the same 12 bytes, so this value is well known.
  assert_eq!(png_crc(PngChunkType::IEND, &[]), 0xAE42_6082);
}
