use super::*;

/// PNG bytes that are known to start with the PNG signature.
///
/// Nothing is scanned on construction. Every call to
/// [`raw_chunks`](Self::raw_chunks) or [`chunks`](Self::chunks) is an
/// independent scan from the first chunk, with no caching between calls. Use
/// [`scan_all`](Self::scan_all) to keep one scan's results around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PngStream<'b> {
  bytes: &'b [u8],
}
impl<'b> PngStream<'b> {
  /// Checks the signature of the bytes.
  ///
  /// ## Failure
  /// * [`PngError::MagicMismatch`] if the bytes don't start with the PNG
  ///   signature.
  #[inline]
  pub const fn new(bytes: &'b [u8]) -> PngResult<Self> {
    if is_png_signature_correct(bytes) {
      Ok(Self { bytes })
    } else {
      Err(PngError::MagicMismatch)
    }
  }

  /// Length of the full bytes, signature included.
  #[inline]
  #[must_use]
  #[allow(clippy::len_without_is_empty)]
  pub const fn len(&self) -> usize {
    self.bytes.len()
  }

  /// The full bytes, signature included.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &'b [u8] {
    self.bytes
  }

  /// Scans the chunks without decoding them.
  #[inline]
  #[must_use]
  pub const fn raw_chunks(&self) -> PngRawChunkIter<'b> {
    PngRawChunkIter::after_signature(self.bytes)
  }

  /// Scans the chunks, decoding each one.
  #[inline]
  #[must_use]
  pub const fn chunks(&self) -> PngChunks<'b> {
    PngChunks { raw: self.raw_chunks(), state: ScanState::Scanning(None), seen_end: false }
  }

  /// Runs one full scan, keeping every chunk.
  ///
  /// ## Failure
  /// * The first structural error. Chunks before it are lost, use
  ///   [`chunks`](Self::chunks) to keep them.
  #[inline]
  pub fn scan_all(&self) -> PngResult<Vec<ScannedChunk<'b>>> {
    self.chunks().collect()
  }

  /// The first image header, if there is one and it decodes.
  #[inline]
  #[must_use]
  pub fn header(&self) -> Option<IHDR> {
    self
      .raw_chunks()
      .map_while(Result::ok)
      .find(|raw| raw.chunk_type() == PngChunkType::IHDR)
      .and_then(|raw| IHDR::try_from(raw.data()).ok())
  }

  /// All bytes after the first `IEND` chunk.
  ///
  /// Gives `None` when there's no `IEND` (or the scan fails before one), and
  /// when nothing follows it.
  #[inline]
  #[must_use]
  pub fn trailing_data(&self) -> Option<&'b [u8]> {
    let end = self
      .raw_chunks()
      .map_while(Result::ok)
      .find(|raw| raw.chunk_type() == PngChunkType::IEND)?
      .end();
    match self.bytes.get(end..) {
      Some(tail) if !tail.is_empty() => Some(tail),
      _ => None,
    }
  }
}

/// The state of a decoding scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanState {
  /// The signature hasn't been checked yet.
  BeforeSignature,
  /// Reading chunks, carrying the most recently decoded image header.
  Scanning(Option<IHDR>),
  /// No more chunks, either because the bytes ran out or because of a
  /// structural error.
  Done,
}

/// A chunk from a decoding scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScannedChunk<'b> {
  /// The chunk as stored, with its CRC information.
  pub raw: PngRawChunk<'b>,
  /// The outcome of decoding the chunk data.
  pub decoded: Result<PngChunk<'b>, DecodeError>,
  /// If an `IEND` came before this chunk.
  pub after_end: bool,
}
impl ScannedChunk<'_> {
  /// If the chunk's CRC was correct.
  #[inline]
  #[must_use]
  pub const fn is_valid(&self) -> bool {
    self.raw.is_crc_valid()
  }
}

/// Iterator over decoded chunks, see [`PngStream::chunks`].
///
/// * A CRC mismatch or decode error doesn't stop the scan.
/// * A structural error is yielded once, then the iterator is done.
/// * `IEND` doesn't stop the scan either, later chunks are still read but are
///   marked [`after_end`](ScannedChunk::after_end).
#[derive(Debug, Clone)]
pub struct PngChunks<'b> {
  raw: PngRawChunkIter<'b>,
  state: ScanState,
  seen_end: bool,
}
impl<'b> PngChunks<'b> {
  /// Scans any bytes, checking the signature when first advanced.
  ///
  /// A bad signature gives [`PngError::MagicMismatch`] as the one and only
  /// item.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self {
      raw: PngRawChunkIter::after_signature(bytes),
      state: ScanState::BeforeSignature,
      seen_end: false,
    }
  }

  /// Where the scan is at.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> ScanState {
    self.state
  }
}
impl<'b> Iterator for PngChunks<'b> {
  type Item = PngResult<ScannedChunk<'b>>;
  fn next(&mut self) -> Option<Self::Item> {
    let header = match self.state {
      ScanState::BeforeSignature => {
        if !is_png_signature_correct(self.raw.bytes()) {
          self.state = ScanState::Done;
          return Some(Err(PngError::MagicMismatch));
        }
        None
      }
      ScanState::Scanning(header) => header,
      ScanState::Done => return None,
    };
    match self.raw.next() {
      None => {
        self.state = ScanState::Done;
        None
      }
      Some(Err(e)) => {
        self.state = ScanState::Done;
        Some(Err(e))
      }
      Some(Ok(raw)) => {
        let decoded = raw.decode(header.as_ref());
        let header = match &decoded {
          Ok(PngChunk::IHDR(ihdr)) => Some(*ihdr),
          _ => header,
        };
        self.state = ScanState::Scanning(header);
        let after_end = self.seen_end;
        if raw.chunk_type() == PngChunkType::IEND {
          self.seen_end = true;
        }
        Some(Ok(ScannedChunk { raw, decoded, after_end }))
      }
    }
  }
}
impl core::iter::FusedIterator for PngChunks<'_> {}
