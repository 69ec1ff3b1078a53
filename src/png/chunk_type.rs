use super::*;

/// The four byte tag that names the type of a chunk.
///
/// Tags are meant to be ascii letters, but nothing is enforced. The `Debug`
/// and `Display` impls just `as` cast each byte into a character, which is
/// exactly right for ascii and still safe for garbage.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
#[allow(missing_docs)]
impl PngChunkType {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const sRGB: Self = Self(*b"sRGB");
  pub const bKGD: Self = Self(*b"bKGD");
  pub const pHYs: Self = Self(*b"pHYs");
  pub const tIME: Self = Self(*b"tIME");
  pub const iCCP: Self = Self(*b"iCCP");
  pub const tEXt: Self = Self(*b"tEXt");
  pub const zTXt: Self = Self(*b"zTXt");
  pub const iTXt: Self = Self(*b"iTXt");
  pub const pCAL: Self = Self(*b"pCAL");
  pub const cHRM: Self = Self(*b"cHRM");
  pub const gAMA: Self = Self(*b"gAMA");
}
impl PngChunkType {
  /// The raw tag bytes.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }

  /// Critical chunks have an uppercase first letter (bit 5 clear).
  ///
  /// A decoder that doesn't understand a critical chunk can't safely show the
  /// image.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }
}
impl Debug for PngChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    Display::fmt(self, f)?;
    f.write_char('\"')
  }
}
impl Display for PngChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
impl From<[u8; 4]> for PngChunkType {
  #[inline]
  #[must_use]
  fn from(array: [u8; 4]) -> Self {
    Self(array)
  }
}

#[test]
fn test_chunk_type_formatting() {
  assert_eq!(format!("{}", PngChunkType::tEXt), "tEXt");
  assert_eq!(format!("{:?}", PngChunkType::IHDR), "\"IHDR\"");
  assert!(PngChunkType::IEND.is_critical());
  assert!(!PngChunkType::gAMA.is_critical());
}
