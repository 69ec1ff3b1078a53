//! Just enough of a PNG writer to build test inputs.

use pngchunks::png::{png_crc, PngChunkType, PNG_SIGNATURE};

#[derive(Debug, Clone)]
pub struct PngBuilder {
  bytes: Vec<u8>,
  offsets: Vec<usize>,
}
impl PngBuilder {
  pub fn new() -> Self {
    Self { bytes: PNG_SIGNATURE.to_vec(), offsets: Vec::new() }
  }

  /// A chunk with the correct CRC.
  pub fn chunk(self, ty: &[u8; 4], data: &[u8]) -> Self {
    let crc = png_crc(PngChunkType(*ty), data);
    self.chunk_with_crc(ty, data, crc)
  }

  pub fn chunk_with_crc(mut self, ty: &[u8; 4], data: &[u8], crc: u32) -> Self {
    self.offsets.push(self.bytes.len());
    self.bytes.extend_from_slice(&(data.len() as u32).to_be_bytes());
    self.bytes.extend_from_slice(ty);
    self.bytes.extend_from_slice(data);
    self.bytes.extend_from_slice(&crc.to_be_bytes());
    self
  }

  pub fn ihdr(self, width: u32, height: u32, bit_depth: u8, color_type: u8) -> Self {
    let mut data = Vec::new();
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[bit_depth, color_type, 0, 0, 0]);
    self.chunk(b"IHDR", &data)
  }

  pub fn iend(self) -> Self {
    self.chunk(b"IEND", &[])
  }

  /// Bytes that aren't a chunk.
  pub fn raw(mut self, bytes: &[u8]) -> Self {
    self.bytes.extend_from_slice(bytes);
    self
  }

  /// Offsets of every chunk added so far.
  pub fn offsets(&self) -> &[usize] {
    &self.offsets
  }

  pub fn build(self) -> Vec<u8> {
    self.bytes
  }
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
  miniz_oxide::deflate::compress_to_vec_zlib(data, 6)
}
