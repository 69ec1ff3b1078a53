use thiserror::Error;

use crate::png::PngChunkType;

/// A structural error in PNG data.
///
/// These stop a scan: no further chunks can be found once one of these
/// happens. Any chunks that were already produced are still fine to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PngError {
  /// The data doesn't begin with the 8 byte PNG signature.
  ///
  /// No chunks are ever read from such data.
  #[error("Error parsing PNG data. Missing magic header")]
  MagicMismatch,

  /// The chunk starting at this offset claims more bytes than remain in the
  /// data.
  #[error("truncated chunk at offset {offset:#08x}")]
  TruncatedChunk {
    /// Offset of the chunk's length field.
    offset: usize,
  },
}

/// Result alias for structural operations.
pub type PngResult<T> = Result<T, PngError>;

/// An error decoding the data of a single chunk.
///
/// This only affects the chunk it came from, scanning carries on with the next
/// chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DecodeError {
  /// The chunk can only be understood after some earlier chunk (always the
  /// image header, currently) but no such chunk was seen.
  #[error("{needs} must come before this chunk")]
  MissingDependency {
    /// The type of chunk that was needed.
    needs: PngChunkType,
  },

  /// A null-terminated field had no null byte before the end of the chunk.
  #[error("field `{field}` is not null-terminated")]
  UnterminatedField {
    /// Name of the field.
    field: &'static str,
  },

  /// A field declared as zlib compressed couldn't be inflated.
  #[error("field `{field}` failed to decompress")]
  DecompressionFailure {
    /// Name of the field.
    field: &'static str,
  },

  /// A fixed size chunk had the wrong amount of data.
  #[error("expected {expected} bytes of chunk data, found {actual}")]
  BadLength {
    /// Size the chunk type requires.
    expected: usize,
    /// Size the chunk actually has.
    actual: usize,
  },

  /// A fixed width field ran past the end of the chunk.
  #[error("chunk data ends in the middle of field `{field}`")]
  UnexpectedEnd {
    /// Name of the field.
    field: &'static str,
  },
}
