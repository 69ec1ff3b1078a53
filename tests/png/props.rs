use pngchunks::png::*;
use proptest::prelude::*;

use super::builder::PngBuilder;

fn any_chunk() -> impl Strategy<Value = ([u8; 4], Vec<u8>)> {
  (prop::array::uniform4(b'A'..=b'z'), prop::collection::vec(any::<u8>(), 0..64))
}

proptest! {
  #[test]
  fn prop_lengths_sum_to_file_size(chunks in prop::collection::vec(any_chunk(), 0..12)) {
    let png = chunks
      .iter()
      .fold(PngBuilder::new(), |b, (ty, data)| b.chunk(ty, data))
      .build();
    let raw: Vec<_> = PngStream::new(&png).unwrap().raw_chunks().collect::<Result<_, _>>().unwrap();
    prop_assert_eq!(raw.len(), chunks.len());
    let total: usize = 8 + raw.iter().map(|c| 12 + c.data().len()).sum::<usize>();
    prop_assert_eq!(total, png.len());
    prop_assert!(raw.iter().all(PngRawChunk::is_crc_valid));
  }

  #[test]
  fn prop_crc_validity_is_per_chunk(
    chunks in prop::collection::vec(any_chunk(), 1..8),
    bad in any::<prop::sample::Index>(),
    delta in 1_u32..,
  ) {
    let bad = bad.index(chunks.len());
    let png = chunks
      .iter()
      .enumerate()
      .fold(PngBuilder::new(), |b, (i, (ty, data))| {
        let crc = png_crc(PngChunkType(*ty), data);
        b.chunk_with_crc(ty, data, if i == bad { crc.wrapping_add(delta) } else { crc })
      })
      .build();
    let raw: Vec<_> = PngStream::new(&png).unwrap().raw_chunks().collect::<Result<_, _>>().unwrap();
    for (i, chunk) in raw.iter().enumerate() {
      prop_assert_eq!(chunk.is_crc_valid(), i != bad);
    }
  }

  #[test]
  fn prop_rescanning_is_identical(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(&bytes);
    let stream = PngStream::new(&png).unwrap();
    let first: Vec<_> = stream.chunks().collect();
    let second: Vec<_> = stream.chunks().collect();
    prop_assert_eq!(first, second);
  }
}
