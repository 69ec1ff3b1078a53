use super::*;

/// A decoded PNG chunk.
///
/// Each variant is named for the chunk type it came from. Any chunk type
/// without a decoder (including the critical `PLTE`, `IDAT`, and `IEND`) comes
/// out as `Unrecognized` with its data untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub enum PngChunk<'b> {
  /// Image Header
  IHDR(IHDR),
  /// sRGB Info
  sRGB(sRGB),
  /// Background color
  bKGD(bKGD),
  /// Physical pixel size
  pHYs(pHYs),
  /// Last modification time
  tIME(tIME),
  /// ICC profile
  iCCP(iCCP<'b>),
  /// Latin-1 text
  tEXt(tEXt<'b>),
  /// Compressed Latin-1 text
  zTXt(zTXt<'b>),
  /// International text
  iTXt(iTXt<'b>),
  /// Pixel value calibration
  pCAL(pCAL<'b>),
  /// Chromaticities
  cHRM(cHRM),
  /// Gamma
  gAMA(gAMA),
  /// A chunk type with no decoder. This is not an error.
  Unrecognized(&'b [u8]),
}
impl<'b> PngChunk<'b> {
  /// The chunk type that this came from.
  ///
  /// `Unrecognized` doesn't keep its type, so gives `None`.
  #[inline]
  #[must_use]
  pub const fn chunk_type(&self) -> Option<PngChunkType> {
    Some(match self {
      PngChunk::IHDR(_) => PngChunkType::IHDR,
      PngChunk::sRGB(_) => PngChunkType::sRGB,
      PngChunk::bKGD(_) => PngChunkType::bKGD,
      PngChunk::pHYs(_) => PngChunkType::pHYs,
      PngChunk::tIME(_) => PngChunkType::tIME,
      PngChunk::iCCP(_) => PngChunkType::iCCP,
      PngChunk::tEXt(_) => PngChunkType::tEXt,
      PngChunk::zTXt(_) => PngChunkType::zTXt,
      PngChunk::iTXt(_) => PngChunkType::iTXt,
      PngChunk::pCAL(_) => PngChunkType::pCAL,
      PngChunk::cHRM(_) => PngChunkType::cHRM,
      PngChunk::gAMA(_) => PngChunkType::gAMA,
      PngChunk::Unrecognized(_) => return None,
    })
  }

  /// If a decoder handled this chunk.
  #[inline]
  #[must_use]
  pub const fn is_recognized(&self) -> bool {
    !matches!(self, PngChunk::Unrecognized(_))
  }

  /// The bulk content of the chunk, for chunks that carry some.
  ///
  /// This is the (inflated) text of the three text chunks. Other chunks,
  /// `iCCP` included, give `None`.
  #[inline]
  #[must_use]
  pub fn artifact_payload(&self) -> Option<&[u8]> {
    match self {
      PngChunk::tEXt(text) => Some(text.text),
      PngChunk::zTXt(ztxt) => Some(ztxt.text.as_slice()),
      PngChunk::iTXt(itxt) => Some(&*itxt.text),
      _ => None,
    }
  }
}

/// The signature of every chunk decoder.
///
/// A decoder gets the chunk data and the most recent image header (if any),
/// and gives the decoded chunk borrowing from that data.
pub type DecodeFn = for<'b> fn(&'b [u8], Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError>;

/// Every chunk type that has a decoder, and that decoder.
pub static DECODERS: [(PngChunkType, DecodeFn); 12] = [
  (PngChunkType::IHDR, decode_ihdr),
  (PngChunkType::sRGB, decode_srgb),
  (PngChunkType::bKGD, decode_bkgd),
  (PngChunkType::pHYs, decode_phys),
  (PngChunkType::tIME, decode_time),
  (PngChunkType::iCCP, decode_iccp),
  (PngChunkType::tEXt, decode_text),
  (PngChunkType::zTXt, decode_ztxt),
  (PngChunkType::iTXt, decode_itxt),
  (PngChunkType::pCAL, decode_pcal),
  (PngChunkType::cHRM, decode_chrm),
  (PngChunkType::gAMA, decode_gama),
];

/// Looks up the decoder for a chunk type.
#[inline]
#[must_use]
pub fn decoder_for(chunk_type: PngChunkType) -> Option<DecodeFn> {
  DECODERS.iter().find(|(ty, _)| *ty == chunk_type).map(|(_, f)| *f)
}

/// Decodes chunk data according to the chunk type.
///
/// * `header` is the most recent image header seen before this chunk. Only
///   `bKGD` and `pHYs` need it, and without one they fail with
///   [`DecodeError::MissingDependency`].
/// * Types without a decoder give [`PngChunk::Unrecognized`].
#[inline]
pub fn decode_chunk<'b>(
  chunk_type: PngChunkType, data: &'b [u8], header: Option<&IHDR>,
) -> Result<PngChunk<'b>, DecodeError> {
  match decoder_for(chunk_type) {
    Some(decode) => decode(data, header),
    None => Ok(PngChunk::Unrecognized(data)),
  }
}

fn need_header(header: Option<&IHDR>) -> Result<&IHDR, DecodeError> {
  header.ok_or(DecodeError::MissingDependency { needs: PngChunkType::IHDR })
}

fn decode_ihdr<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  IHDR::try_from(data).map(PngChunk::IHDR)
}
fn decode_srgb<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  sRGB::try_from(data).map(PngChunk::sRGB)
}
fn decode_bkgd<'b>(data: &'b [u8], header: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  bKGD::from_payload(data, need_header(header)?).map(PngChunk::bKGD)
}
fn decode_phys<'b>(data: &'b [u8], header: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  pHYs::from_payload(data, need_header(header)?).map(PngChunk::pHYs)
}
fn decode_time<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  tIME::try_from(data).map(PngChunk::tIME)
}
fn decode_iccp<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  iCCP::try_from(data).map(PngChunk::iCCP)
}
fn decode_text<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  tEXt::try_from(data).map(PngChunk::tEXt)
}
fn decode_ztxt<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  zTXt::try_from(data).map(PngChunk::zTXt)
}
fn decode_itxt<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  iTXt::try_from(data).map(PngChunk::iTXt)
}
fn decode_pcal<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  pCAL::try_from(data).map(PngChunk::pCAL)
}
fn decode_chrm<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  cHRM::try_from(data).map(PngChunk::cHRM)
}
fn decode_gama<'b>(data: &'b [u8], _: Option<&IHDR>) -> Result<PngChunk<'b>, DecodeError> {
  gAMA::try_from(data).map(PngChunk::gAMA)
}
