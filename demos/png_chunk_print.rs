use pngchunks::png::PngChunks;

fn main() {
  let args: Vec<String> = std::env::args().collect();
  println!("ARGS: {args:?}");
  for file_arg in args[1..].iter() {
    let path = std::path::Path::new(file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e:?}");
        continue;
      }
    };
    for (n, scanned) in PngChunks::new(&bytes).enumerate() {
      match scanned {
        Ok(scanned) => {
          let crc = if scanned.is_valid() { "ok" } else { "BAD" };
          println!("{n}: {:?} (crc {crc}) {:?}", scanned.raw.chunk_type(), scanned.decoded);
        }
        Err(e) => println!("{n}: {e}"),
      }
    }
  }
}
