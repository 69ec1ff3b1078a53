use super::*;

/// The types of color that PNG supports.
///
/// Other values can show up in a damaged or hostile header, and those are kept
/// as `Unknown` so that the chunks depending on the color type can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PngColorType {
  /// Greyscale
  Y,
  /// Red, Green, Blue
  RGB,
  /// Index into a palette.
  Index,
  /// Greyscale + Alpha
  YA,
  /// Red, Green, Blue, Alpha
  RGBA,
  /// Not a color type that PNG defines.
  Unknown(u8),
}
impl PngColorType {
  /// If this is one of the color types that PNG defines.
  #[inline]
  #[must_use]
  pub const fn is_known(self) -> bool {
    !matches!(self, Self::Unknown(_))
  }
}
impl From<u8> for PngColorType {
  #[inline]
  #[must_use]
  fn from(value: u8) -> Self {
    match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      other => PngColorType::Unknown(other),
    }
  }
}
impl From<PngColorType> for u8 {
  #[inline]
  #[must_use]
  fn from(value: PngColorType) -> Self {
    match value {
      PngColorType::Y => 0,
      PngColorType::RGB => 2,
      PngColorType::Index => 3,
      PngColorType::YA => 4,
      PngColorType::RGBA => 6,
      PngColorType::Unknown(other) => other,
    }
  }
}

/// `IHDR`: Image header
///
/// PNG: [IHDR](https://www.w3.org/TR/png/#11IHDR)
///
/// The fields are kept exactly as stored. Nothing checks that the bit depth
/// suits the color type, or that the methods are the only ones PNG defines
/// (which is 0 for all three, or 1 for interlacing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel (or per palette index)
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: PngColorType,
  /// only zlib (0) is defined
  pub compression_method: u8,
  /// only adaptive filtering (0) is defined
  pub filter_method: u8,
  /// 0 for none, 1 for Adam7
  pub interlace_method: u8,
}
impl IHDR {
  /// If the image data is stored interlaced.
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method == 1
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    match *data {
      [
        w0,
        w1,
        w2,
        w3,
        h0,
        h1,
        h2,
        h3,
        bit_depth,
        color_type,
        compression_method,
        filter_method,
        interlace_method,
      ] => {
        Ok(Self {
          width: u32::from_be_bytes([w0, w1, w2, w3]),
          height: u32::from_be_bytes([h0, h1, h2, h3]),
          bit_depth,
          color_type: PngColorType::from(color_type),
          compression_method,
          filter_method,
          interlace_method,
        })
      }
      _ => Err(DecodeError::BadLength { expected: 13, actual: data.len() }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ihdr_decodes_all_fields() {
    let data = [0_u8, 0, 1, 0, 0, 0, 0, 200, 16, 6, 0, 0, 1];
    let ihdr = IHDR::try_from(&data[..]).unwrap();
    assert_eq!(ihdr.width, 256);
    assert_eq!(ihdr.height, 200);
    assert_eq!(ihdr.bit_depth, 16);
    assert_eq!(ihdr.color_type, PngColorType::RGBA);
    assert_eq!((ihdr.compression_method, ihdr.filter_method), (0, 0));
    assert!(ihdr.is_interlaced());
  }

  #[test]
  fn test_ihdr_wrong_lengths() {
    let data = [0_u8; 14];
    let short = Err(DecodeError::BadLength { expected: 13, actual: 12 });
    assert_eq!(IHDR::try_from(&data[..12]), short);
    let long = Err(DecodeError::BadLength { expected: 13, actual: 14 });
    assert_eq!(IHDR::try_from(&data[..]), long);
    assert!(IHDR::try_from(&data[..13]).is_ok());
  }

  #[test]
  fn test_color_type_round_trips_unknowns() {
    for byte in 0..=u8::MAX {
      let ct = PngColorType::from(byte);
      assert_eq!(u8::from(ct), byte);
      assert_eq!(ct.is_known(), [0, 2, 3, 4, 6].contains(&byte));
    }
  }
}
