//! Writes chunk content out to individual files.
//!
//! Each file is named `<md5>_<offset>_<tag>.dat`, where the hash is the
//! lowercase hex MD5 of the content and the offset is the chunk's offset
//! as 8 hex digits. Identical content at different offsets gets different
//! files, and the same chunk written twice just overwrites itself.

use std::{
  fs::File,
  io::{self, Write},
  path::{Path, PathBuf},
};

use md5::{Digest, Md5};

use crate::png::PngChunkType;

/// A directory that chunk content gets written into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactSink {
  dir: PathBuf,
}
impl ArtifactSink {
  /// The directory must already exist.
  #[inline]
  #[must_use]
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// The directory files go into.
  #[inline]
  #[must_use]
  pub fn dir(&self) -> &Path {
    &self.dir
  }

  /// The file name that `payload` would be written under.
  ///
  /// Tag bytes that aren't ascii letters or digits become `_`, so a damaged
  /// tag can't make a path.
  #[must_use]
  pub fn file_name(offset: usize, chunk_type: PngChunkType, payload: &[u8]) -> String {
    let hash = hex::encode(Md5::digest(payload));
    let tag: String = chunk_type
      .as_bytes()
      .iter()
      .map(|&b| if b.is_ascii_alphanumeric() { b as char } else { '_' })
      .collect();
    format!("{hash}_{offset:08x}_{tag}.dat")
  }

  /// Writes the payload, giving the path of the new file.
  ///
  /// The file is closed before this returns, whether or not the write worked.
  pub fn write(
    &self, offset: usize, chunk_type: PngChunkType, payload: &[u8],
  ) -> io::Result<PathBuf> {
    let path = self.dir.join(Self::file_name(offset, chunk_type, payload));
    let mut file = File::create(&path)?;
    file.write_all(payload)?;
    file.flush()?;
    log::debug!("wrote {} bytes to {}", payload.len(), path.display());
    Ok(path)
  }
}
