use pngchunks::{png::*, DecodeError, PngError};

use super::builder::{zlib, PngBuilder};

fn scan(png: &[u8]) -> Vec<ScannedChunk<'_>> {
  PngStream::new(png).unwrap().scan_all().unwrap()
}

#[test]
fn test_minimal_header_decodes() {
  let png = PngBuilder::new().ihdr(1, 1, 8, 2).iend().build();
  let scanned = scan(&png);
  assert!(scanned[0].is_valid());
  match scanned[0].decoded {
    Ok(PngChunk::IHDR(IHDR { width: 1, height: 1, color_type: PngColorType::RGB, .. })) => (),
    ref other => panic!("{other:?}"),
  }
}

#[test]
fn test_flipped_payload_byte_still_decodes() {
  let mut png = PngBuilder::new().ihdr(1, 1, 8, 2).iend().build();
  // interlace method, the last byte of the header data
  png[8 + 8 + 12] ^= 1;
  let scanned = scan(&png);
  assert!(!scanned[0].is_valid());
  assert!(scanned[1].is_valid());
  match &scanned[0].decoded {
    Ok(PngChunk::IHDR(ihdr)) => {
      assert_eq!((ihdr.width, ihdr.height), (1, 1));
      assert_eq!(ihdr.interlace_method, 1);
    }
    other => panic!("{other:?}"),
  }
}

#[test]
fn test_compressed_comment() {
  let mut data = b"Comment\0\0".to_vec();
  data.extend_from_slice(&zlib(b"Hi"));
  let png = PngBuilder::new().ihdr(1, 1, 8, 2).chunk(b"zTXt", &data).iend().build();
  let scanned = scan(&png);
  match &scanned[1].decoded {
    Ok(PngChunk::zTXt(z)) => {
      assert_eq!(z.keyword, b"Comment");
      assert_eq!(z.text, b"Hi");
    }
    other => panic!("{other:?}"),
  }
}

#[test]
fn test_not_a_png() {
  let bytes = b"\x89PNX\r\n\x1a\n\0\0\0\0IEND\xAE\x42\x60\x82";
  assert_eq!(PngStream::new(bytes), Err(PngError::MagicMismatch));
  let results: Vec<_> = PngChunks::new(bytes).collect();
  assert_eq!(results, vec![Err(PngError::MagicMismatch)]);
}

#[test]
fn test_background_first_then_rest_decodes() {
  let png = PngBuilder::new()
    .chunk(b"bKGD", &[0, 0, 0, 0, 0, 0])
    .ihdr(4, 4, 8, 6)
    .chunk(b"bKGD", &[0, 1, 0, 2, 0, 3])
    .chunk(b"gAMA", &45455_u32.to_be_bytes())
    .iend()
    .build();
  let scanned = scan(&png);
  assert_eq!(scanned.len(), 5);
  assert_eq!(
    scanned[0].decoded,
    Err(DecodeError::MissingDependency { needs: PngChunkType::IHDR })
  );
  assert_eq!(scanned[2].decoded, Ok(PngChunk::bKGD(bKGD::RGB { r: 1, g: 2, b: 3 })));
  match &scanned[3].decoded {
    Ok(PngChunk::gAMA(g)) => assert_eq!(g.value(), 0.45455),
    other => panic!("{other:?}"),
  }
}

#[test]
fn test_decode_errors_stay_with_their_chunk() {
  let png = PngBuilder::new()
    .ihdr(2, 2, 8, 0)
    .chunk(b"tEXt", b"no terminator here")
    .chunk(b"zTXt", b"Comment\0\0this isn't zlib")
    .chunk(b"cHRM", &[0; 31])
    .chunk(b"tIME", &[0x07, 0xE6, 1, 2, 3, 4, 5])
    .iend()
    .build();
  let scanned = scan(&png);
  assert_eq!(scanned.len(), 6);
  assert!(scanned.iter().all(ScannedChunk::is_valid));
  assert_eq!(scanned[1].decoded, Err(DecodeError::UnterminatedField { field: "keyword" }));
  assert_eq!(scanned[2].decoded, Err(DecodeError::DecompressionFailure { field: "text" }));
  assert_eq!(scanned[3].decoded, Err(DecodeError::BadLength { expected: 32, actual: 31 }));
  match &scanned[4].decoded {
    Ok(PngChunk::tIME(t)) => assert_eq!(t.to_string(), "2022-01-02 03:04:05"),
    other => panic!("{other:?}"),
  }
}

#[test]
fn test_truncated_final_chunk() {
  let builder = PngBuilder::new().ihdr(1, 1, 8, 0).chunk(b"tEXt", b"a\0b");
  let truncated_at = builder.clone().build().len();
  let png = builder.raw(&100_u32.to_be_bytes()).raw(b"IDAT").raw(&[1, 2, 3]).build();
  let results: Vec<_> = PngStream::new(&png).unwrap().chunks().collect();
  assert_eq!(results.len(), 3);
  assert!(results[..2].iter().all(Result::is_ok));
  assert_eq!(results[2], Err(PngError::TruncatedChunk { offset: truncated_at }));
  assert_eq!(
    PngStream::new(&png).unwrap().scan_all(),
    Err(PngError::TruncatedChunk { offset: truncated_at })
  );
}

#[test]
fn test_every_known_chunk_kind() {
  let mut iccp = b"Profile\0\0".to_vec();
  iccp.extend_from_slice(&zlib(&[7; 300]));
  let mut itxt = b"Title\0\x01\0en\0Title\0".to_vec();
  itxt.extend_from_slice(&zlib(b"A title"));
  let mut pcal = b"height\0".to_vec();
  pcal.extend_from_slice(&0_i32.to_be_bytes());
  pcal.extend_from_slice(&(-1_i32).to_be_bytes());
  pcal.extend_from_slice(b"\x00\x02m\x000\x001.5");
  let mut phys = 2835_u32.to_be_bytes().to_vec();
  phys.extend_from_slice(&2835_u32.to_be_bytes());
  phys.push(1);
  let chrm: Vec<u8> = [31270_u32, 32900, 64000, 33000, 30000, 60000, 15000, 6000]
    .iter()
    .flat_map(|v| v.to_be_bytes())
    .collect();

  let png = PngBuilder::new()
    .ihdr(2835, 5670, 8, 3)
    .chunk(b"sRGB", &[0])
    .chunk(b"gAMA", &45455_u32.to_be_bytes())
    .chunk(b"cHRM", &chrm)
    .chunk(b"iCCP", &iccp)
    .chunk(b"pHYs", &phys)
    .chunk(b"bKGD", &[4])
    .chunk(b"tIME", &[0x07, 0xE6, 12, 31, 23, 59, 59])
    .chunk(b"tEXt", b"Author\0somebody")
    .chunk(b"iTXt", &itxt)
    .chunk(b"pCAL", &pcal)
    .chunk(b"PLTE", &[0; 15])
    .chunk(b"IDAT", &[0x78, 0x9C])
    .iend()
    .build();
  let scanned = scan(&png);
  let decoded: Vec<_> = scanned.iter().map(|s| s.decoded.clone().unwrap()).collect();
  let recognized: Vec<_> = decoded.iter().filter_map(PngChunk::chunk_type).collect();
  assert_eq!(recognized.len(), 11);
  assert_eq!(decoded.iter().filter(|c| !c.is_recognized()).count(), 3);

  assert_eq!(decoded[1], PngChunk::sRGB(sRGB { intent: SrgbIntent::Perceptual }));
  assert!(matches!(&decoded[4], PngChunk::iCCP(i) if i.profile.len() == 300));
  match &decoded[5] {
    PngChunk::pHYs(p) => {
      let (w, h) = p.physical_size_cm();
      assert!((w - 100.0).abs() < 1e-9 && (h - 200.0).abs() < 1e-9);
    }
    other => panic!("{other:?}"),
  }
  assert_eq!(decoded[6], PngChunk::bKGD(bKGD::Index { i: 4 }));
  match &decoded[9] {
    PngChunk::iTXt(i) => {
      assert!(i.is_compressed());
      assert_eq!(&*i.text, b"A title");
    }
    other => panic!("{other:?}"),
  }
  match &decoded[10] {
    PngChunk::pCAL(p) => {
      assert_eq!((p.x0, p.x1), (0, -1));
      assert_eq!(p.params().count(), 2);
    }
    other => panic!("{other:?}"),
  }
  assert_eq!(decoded[11], PngChunk::Unrecognized(&[0; 15]));
}

#[test]
fn test_data_past_iend() {
  let clean = PngBuilder::new().ihdr(1, 1, 8, 0).iend().build();
  assert_eq!(PngStream::new(&clean).unwrap().trailing_data(), None);

  let builder = PngBuilder::new().ihdr(1, 1, 8, 0).iend().chunk(b"tEXt", b"hidden\0message");
  let iend_offset = builder.offsets()[1];
  let png = builder.build();
  let stream = PngStream::new(&png).unwrap();
  assert_eq!(stream.trailing_data(), Some(&png[iend_offset + 12..]));
  let scanned = stream.scan_all().unwrap();
  assert_eq!(scanned.len(), 3);
  assert!(!scanned[1].after_end);
  assert!(scanned[2].after_end);
  assert!(scanned[2].decoded.is_ok());
}
