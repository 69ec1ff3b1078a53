use pngchunks::png::{PngChunks, PngRawChunkIter, PngStream, PNG_SIGNATURE};
use walkdir::WalkDir;

mod builder;
mod dump;
mod props;
mod scenarios;

#[test]
fn test_PngChunks_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    for _ in PngChunks::new(&v) {
      //
    }
  }
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in PngChunks::new(&v) {
      //
    }
  }
}

#[test]
fn test_random_chunks_after_signature_no_panics() {
  // a good signature gets the random bytes all the way to the decoders.
  for _ in 0..50 {
    let mut v = PNG_SIGNATURE.to_vec();
    v.extend_from_slice(&super::rand_bytes(256));
    let stream = PngStream::new(&v).unwrap();
    for _ in stream.chunks() {
      //
    }
    let _ = stream.trailing_data();
    let _ = stream.header();
  }
}

#[test]
fn test_random_payloads_for_every_decoder_no_panics() {
  let ihdr_data = [0_u8, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];
  let header = pngchunks::png::IHDR::try_from(&ihdr_data[..]).unwrap();
  for (ty, decode) in pngchunks::png::DECODERS.iter() {
    for len in [0, 1, 2, 4, 7, 13, 32, 100] {
      let data = super::rand_bytes(len);
      let _ = decode(&data, None);
      let _ = decode(&data, Some(&header));
      // nul bytes early on get the text decoders further along.
      let mut data = data;
      data.iter_mut().step_by(3).for_each(|b| *b = 0);
      let _ = decode(&data, Some(&header));
      println!("{ty} x {len} ok");
    }
  }
  assert!(PngRawChunkIter::new(&[]).is_err());
}
