//! Shorthands for pulling fields off the front of a chunk's data.
//!
//! Every `try_pull_*` function returns the value along with the unread tail,
//! so a decoder reads as a chain of `let (field, rest) = try_pull_...(rest)?;`
//! lines. None of them ever reads past the end of the slice they're given.

use bytemuck::{pod_read_unaligned, Pod};

use crate::DecodeError;
use core::mem::size_of;

/// Zlib payloads inside of a chunk are not allowed to inflate past this many
/// bytes.
pub(crate) const INFLATE_LIMIT: usize = 64 * 1024 * 1024;

#[inline]
pub(crate) fn try_split_off_byte_array<const N: usize>(bytes: &[u8]) -> Option<([u8; N], &[u8])> {
  if bytes.len() >= N {
    let (head, tail) = bytes.split_at(N);
    let a: [u8; N] = head.try_into().ok()?;
    Some((a, tail))
  } else {
    None
  }
}

#[inline]
pub(crate) fn try_pull_u8<'b>(
  bytes: &'b [u8], field: &'static str,
) -> Result<(u8, &'b [u8]), DecodeError> {
  match bytes {
    [u, tail @ ..] => Ok((*u, tail)),
    [] => Err(DecodeError::UnexpectedEnd { field }),
  }
}

#[inline]
pub(crate) fn try_pull_pod<'b, T: Pod>(
  bytes: &'b [u8], field: &'static str,
) -> Result<(T, &'b [u8]), DecodeError> {
  let position = size_of::<T>();
  if bytes.len() >= position {
    let (head, tail) = bytes.split_at(position);
    let a: T = pod_read_unaligned(head);
    Ok((a, tail))
  } else {
    Err(DecodeError::UnexpectedEnd { field })
  }
}

/// Splits off a field that's ended by a null byte.
///
/// The returned field doesn't include the null, and the tail starts just after
/// it. The search never goes past the end of `bytes`.
#[inline]
pub(crate) fn try_pull_nul_terminated<'b>(
  bytes: &'b [u8], field: &'static str,
) -> Result<(&'b [u8], &'b [u8]), DecodeError> {
  match bytes.iter().position(|&b| b == 0) {
    Some(nul) => {
      let (head, tail) = bytes.split_at(nul);
      Ok((head, &tail[1..]))
    }
    None => Err(DecodeError::UnterminatedField { field }),
  }
}

/// Inflates a zlib data stream (with its 2 byte header and adler32 footer).
#[inline]
pub(crate) fn try_inflate_zlib(
  zlib_data: &[u8], field: &'static str,
) -> Result<Vec<u8>, DecodeError> {
  miniz_oxide::inflate::decompress_to_vec_zlib_with_limit(zlib_data, INFLATE_LIMIT)
    .map_err(|_| DecodeError::DecompressionFailure { field })
}
