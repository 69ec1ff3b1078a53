use super::*;

/// `iCCP`: Embedded ICC profile
///
/// PNG: [iCCP](https://www.w3.org/TR/png/#11iCCP)
///
/// With compression method 0 the profile is inflated during decode. Other
/// methods aren't defined by PNG, so the profile bytes are kept as they were
/// stored and the method is left for the caller to look at.
#[derive(Clone, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct iCCP<'b> {
  /// Profile name (Latin-1).
  pub name: &'b [u8],
  /// The compression method byte.
  pub compression_method: u8,
  /// The profile, inflated if `compression_method` is 0.
  pub profile: Cow<'b, [u8]>,
}
impl Debug for iCCP<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("iCCP")
      .field("name", &latin1_to_string(self.name))
      .field("compression_method", &self.compression_method)
      .field("profile", &(&self.profile[..self.profile.len().min(12)], self.profile.len()))
      .finish()
  }
}
impl<'b> TryFrom<&'b [u8]> for iCCP<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (name, rest) = try_pull_nul_terminated(data, "profile name")?;
    let (compression_method, rest) = try_pull_u8(rest, "compression method")?;
    let profile = if compression_method == 0 {
      Cow::Owned(try_inflate_zlib(rest, "profile")?)
    } else {
      Cow::Borrowed(rest)
    };
    Ok(Self { name, compression_method, profile })
  }
}
