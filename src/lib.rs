#![forbid(unsafe_code)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for walking, checking, and decoding the chunks of PNG data.
//!
//! Decoding happens in one forward pass over bytes that are already in
//! memory:
//!
//! 1) [`PngStream::new`](png::PngStream::new) checks the PNG signature.
//! 2) [`raw_chunks`](png::PngStream::raw_chunks) splits the rest of the bytes
//!    into length-prefixed chunks and checks each one's CRC.
//! 3) [`chunks`](png::PngStream::chunks) additionally decodes the data of the
//!    chunk types this crate knows about into [`PngChunk`](png::PngChunk)
//!    values, threading the image header along to the chunks that need it.
//!
//! Pixel data is never touched: `IDAT` chunks are reported like any other
//! chunk, but not decompressed.
//!
//! ```no_run
//! use pngchunks::png::*;
//! # fn f(bytes: &[u8]) -> Result<(), pngchunks::PngError> {
//! let stream = PngStream::new(bytes)?;
//! for scanned in stream.chunks() {
//!   let scanned = scanned?;
//!   println!("{:?} crc ok: {}", scanned.raw.chunk_type(), scanned.is_valid());
//!   if let Ok(PngChunk::gAMA(gama)) = scanned.decoded {
//!     println!("gamma is {}", gama.value());
//!   }
//! }
//! # Ok(())
//! # }
//! ```

mod error;
pub use error::*;

pub mod int_endian;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod png;

pub mod dump;
