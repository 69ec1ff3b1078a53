use super::*;

/// `zTXt`: Compressed textual data
///
/// PNG: [zTXt](https://www.w3.org/TR/png/#11zTXt)
///
/// The text is always inflated during decode. The compression method byte is
/// kept, but since 0 is the only method PNG defines it isn't consulted.
#[derive(Clone, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct zTXt<'b> {
  /// What sort of text this is.
  pub keyword: &'b [u8],
  /// The compression method byte.
  pub compression_method: u8,
  /// The inflated text (Latin-1).
  pub text: Vec<u8>,
}
impl Debug for zTXt<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("zTXt")
      .field("keyword", &latin1_to_string(self.keyword))
      .field("compression_method", &self.compression_method)
      .field("text", &latin1_to_string(&self.text))
      .finish()
  }
}
impl<'b> TryFrom<&'b [u8]> for zTXt<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (keyword, rest) = try_pull_nul_terminated(data, "keyword")?;
    let (compression_method, rest) = try_pull_u8(rest, "compression method")?;
    let text = try_inflate_zlib(rest, "text")?;
    Ok(Self { keyword, compression_method, text })
  }
}
