use pngchunks::{dump::ArtifactSink, png::*};

use super::builder::PngBuilder;

#[test]
fn test_sink_writes_text_payloads() {
  let dir = std::env::temp_dir().join(format!("pngchunks_dump_{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let sink = ArtifactSink::new(&dir);
  assert_eq!(sink.dir(), dir.as_path());

  let builder = PngBuilder::new().ihdr(1, 1, 8, 0).chunk(b"tEXt", b"Comment\0hello").iend();
  let text_offset = builder.offsets()[1];
  let png = builder.build();
  let mut written = Vec::new();
  for scanned in PngStream::new(&png).unwrap().chunks() {
    let scanned = scanned.unwrap();
    if let Ok(Some(payload)) = scanned.decoded.as_ref().map(PngChunk::artifact_payload) {
      written.push(sink.write(scanned.raw.offset(), scanned.raw.chunk_type(), payload).unwrap());
    }
  }

  assert_eq!(written.len(), 1);
  let name = written[0].file_name().unwrap().to_str().unwrap().to_string();
  // md5 of "hello"
  let expected = format!("5d41402abc4b2a76b9719d911017c592_{text_offset:08x}_tEXt.dat");
  assert_eq!(name, expected);
  assert_eq!(std::fs::read(&written[0]).unwrap(), b"hello");

  // writing again just replaces the same file
  let again = sink.write(text_offset, PngChunkType::tEXt, b"hello").unwrap();
  assert_eq!(again, written[0]);

  std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_sink_missing_dir_is_an_error() {
  let dir = std::env::temp_dir().join(format!("pngchunks_missing_{}", std::process::id()));
  let _ = std::fs::remove_dir_all(&dir);
  let sink = ArtifactSink::new(dir);
  assert!(sink.write(8, PngChunkType::tEXt, b"x").is_err());
}
