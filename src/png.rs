//! Module for working with PNG chunks.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! The general format of a PNG is an 8 byte signature followed by "chunks".
//! Each chunk is a big-endian `u32` length, a four byte type tag, that many
//! bytes of data, and a CRC32 over the tag and data.
//!
//! ## Parsing Errors
//!
//! Problems are sorted by how much of the data they spoil:
//!
//! * A missing signature or a chunk that runs off the end of the data is a
//!   [`PngError`]. These end the scan.
//! * A CRC mismatch only marks that one chunk as invalid. The chunk is still
//!   produced, and still decoded.
//! * A chunk with malformed data gets a [`DecodeError`] in place of its decoded
//!   value. The next chunk is handled as normal.
//! * Chunk types that this module doesn't know come out as
//!   [`PngChunk::Unrecognized`], which is not an error at all.
//!
//! Chunk ordering rules are not enforced, except that a background color or
//! physical size chunk can't be decoded until after an image header has been
//! seen.

use std::borrow::Cow;

use core::fmt::{Debug, Display, Write};

use crate::{
  int_endian::{I32BE, U16BE, U32BE},
  try_inflate_zlib, try_pull_nul_terminated, try_pull_pod, try_pull_u8, try_split_off_byte_array,
  DecodeError, PngError, PngResult,
};

mod chunk_type;
pub use chunk_type::*;

mod crc32;
pub use crc32::*;

mod raw_chunk;
pub use raw_chunk::*;

mod chunk;
pub use chunk::*;

mod stream;
pub use stream::*;

mod ihdr;
pub use ihdr::*;

mod srgb;
pub use srgb::*;

mod bkgd;
pub use bkgd::*;

mod phys;
pub use phys::*;

mod time;
pub use time::*;

mod iccp;
pub use iccp::*;

mod text;
pub use text::*;

mod ztxt;
pub use ztxt::*;

mod itxt;
pub use itxt::*;

mod pcal;
pub use pcal::*;

mod chrm;
pub use chrm::*;

mod gama;
pub use gama::*;


/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not* PNG
///   data.
#[inline]
#[must_use]
pub const fn is_png_signature_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// Converts Latin-1 bytes (what PNG uses for keywords and plain text) into a
/// `String`.
///
/// Every byte value is a valid Latin-1 character, so this can't fail.
#[must_use]
pub fn latin1_to_string(bytes: &[u8]) -> String {
  bytes.iter().map(|&b| b as char).collect()
}
