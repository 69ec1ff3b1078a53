use super::*;

/// Rendering intent for an sRGB image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SrgbIntent {
  /// for images preferring good adaptation to the output device gamut at the
  /// expense of colorimetric accuracy, such as photographs.
  Perceptual,
  /// for images requiring colour appearance matching (relative to the output
  /// device white point), such as logos.
  RelativeColorimetric,
  /// for images preferring preservation of saturation at the expense of hue and
  /// lightness, such as charts and graphs.
  Saturation,
  /// for images requiring preservation of absolute colorimetry, such as
  /// previews of images destined for a different output device (proofs).
  AbsoluteColorimetric,
  /// Any value past 3.
  Unknown(u8),
}
impl From<u8> for SrgbIntent {
  #[inline]
  #[must_use]
  fn from(value: u8) -> Self {
    match value {
      0 => SrgbIntent::Perceptual,
      1 => SrgbIntent::RelativeColorimetric,
      2 => SrgbIntent::Saturation,
      3 => SrgbIntent::AbsoluteColorimetric,
      other => SrgbIntent::Unknown(other),
    }
  }
}

/// `sRGB`: Standard RGB colour space
///
/// PNG: [sRGB](https://www.w3.org/TR/png/#11sRGB)
///
/// An out of range intent is still a successful decode, it just comes out as
/// [`SrgbIntent::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct sRGB {
  /// How the image should be rendered.
  pub intent: SrgbIntent,
}
impl TryFrom<&[u8]> for sRGB {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let (intent, _) = try_pull_u8(data, "rendering intent")?;
    Ok(Self { intent: SrgbIntent::from(intent) })
  }
}

#[test]
fn test_srgb_intents() {
  assert_eq!(sRGB::try_from(&[0_u8][..]).unwrap().intent, SrgbIntent::Perceptual);
  assert_eq!(sRGB::try_from(&[3_u8][..]).unwrap().intent, SrgbIntent::AbsoluteColorimetric);
  assert_eq!(sRGB::try_from(&[4_u8][..]).unwrap().intent, SrgbIntent::Unknown(4));
  assert_eq!(
    sRGB::try_from(&[0_u8; 0][..]),
    Err(DecodeError::UnexpectedEnd { field: "rendering intent" })
  );
}
