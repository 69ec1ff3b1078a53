use super::*;

/// `iTXt`: International textual data
///
/// PNG: [iTXt](https://www.w3.org/TR/png/#11iTXt)
///
/// The keyword is Latin-1. The language tag is ascii, and the translated
/// keyword and text are UTF-8, though none of that is checked here. The text
/// is only inflated when the compression flag is 1 and the method is 0,
/// otherwise it's kept as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub struct iTXt<'b> {
  pub keyword: &'b [u8],
  pub compression_flag: u8,
  pub compression_method: u8,
  pub language_tag: &'b [u8],
  pub translated_keyword: &'b [u8],
  pub text: Cow<'b, [u8]>,
}
impl iTXt<'_> {
  /// If the text was stored compressed.
  #[inline]
  #[must_use]
  pub const fn is_compressed(&self) -> bool {
    self.compression_flag == 1
  }
}
impl<'b> TryFrom<&'b [u8]> for iTXt<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (keyword, rest) = try_pull_nul_terminated(data, "keyword")?;
    let (compression_flag, rest) = try_pull_u8(rest, "compression flag")?;
    let (compression_method, rest) = try_pull_u8(rest, "compression method")?;
    let (language_tag, rest) = try_pull_nul_terminated(rest, "language tag")?;
    let (translated_keyword, rest) = try_pull_nul_terminated(rest, "translated keyword")?;
    let text = if compression_flag == 1 && compression_method == 0 {
      Cow::Owned(try_inflate_zlib(rest, "text")?)
    } else {
      Cow::Borrowed(rest)
    };
    Ok(Self {
      keyword,
      compression_flag,
      compression_method,
      language_tag,
      translated_keyword,
      text,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::png::tests::zlib;

  #[test]
  fn test_itxt_uncompressed() {
    let data = "Title\0\0\0fr\0Titre\0Été".as_bytes();
    let i = iTXt::try_from(data).unwrap();
    assert_eq!(i.keyword, b"Title");
    assert!(!i.is_compressed());
    assert_eq!(i.language_tag, b"fr");
    assert_eq!(i.translated_keyword, b"Titre");
    assert_eq!(core::str::from_utf8(&i.text), Ok("Été"));
  }

  #[test]
  fn test_itxt_compressed() {
    let mut data = b"Description\0\x01\x00en\0\0".to_vec();
    data.extend_from_slice(&zlib("naïve".as_bytes()));
    let i = iTXt::try_from(&data[..]).unwrap();
    assert!(i.is_compressed());
    assert_eq!(i.translated_keyword, b"");
    assert_eq!(&*i.text, "naïve".as_bytes());
  }

  #[test]
  fn test_itxt_flag_without_method_zero_stays_raw() {
    let data = b"k\0\x01\x05\0\0packed?";
    let i = iTXt::try_from(&data[..]).unwrap();
    assert_eq!(&*i.text, b"packed?");
  }

  #[test]
  fn test_itxt_unterminated_language_tag() {
    assert_eq!(
      iTXt::try_from(&b"k\0\0\0en"[..]),
      Err(DecodeError::UnterminatedField { field: "language tag" })
    );
    assert_eq!(
      iTXt::try_from(&b"k\0\x01\0\0\0not zlib"[..]),
      Err(DecodeError::DecompressionFailure { field: "text" })
    );
  }
}
