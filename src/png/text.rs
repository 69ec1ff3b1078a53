use super::*;

/// `tEXt`: Textual data
///
/// PNG: [tEXt](https://www.w3.org/TR/png/#11tEXt)
///
/// * `keyword` should be 1 to 79 bytes of Latin-1, `text` is any number of
///   Latin-1 bytes.
/// * Neither is checked for content, use [`latin1_to_string`] to show them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct tEXt<'b> {
  /// What sort of text this is.
  pub keyword: &'b [u8],
  /// The text itself.
  pub text: &'b [u8],
}
impl Debug for tEXt<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("tEXt")
      .field("keyword", &latin1_to_string(self.keyword))
      .field("text", &latin1_to_string(self.text))
      .finish()
  }
}
impl<'b> TryFrom<&'b [u8]> for tEXt<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (keyword, text) = try_pull_nul_terminated(data, "keyword")?;
    Ok(Self { keyword, text })
  }
}

#[test]
fn test_text_decode() {
  let t = tEXt::try_from(&b"Title\0A picture of a \xE9clair"[..]).unwrap();
  assert_eq!(t.keyword, b"Title");
  assert_eq!(latin1_to_string(t.text), "A picture of a éclair");
  // a second null is just part of the text
  let t = tEXt::try_from(&b"k\0a\0b"[..]).unwrap();
  assert_eq!(t.text, b"a\0b");
  assert_eq!(
    tEXt::try_from(&b"Title"[..]),
    Err(DecodeError::UnterminatedField { field: "keyword" })
  );
}
