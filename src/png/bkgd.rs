use super::*;

/// `bKGD`: Background colour
///
/// PNG: [bKGD](https://www.w3.org/TR/png/#11bKGD)
///
/// The layout depends on the image header's color type, so this can only be
/// decoded once a header has been seen. RGB and Greyscale colors are always
/// given as `u16` values. The actual color selected should stay within the bit
/// depth range of the rest of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub enum bKGD {
  Greyscale { y: u16 },
  RGB { r: u16, g: u16, b: u16 },
  Index { i: u8 },
  /// The header's color type isn't one that PNG defines, so there's no way to
  /// know what the payload means.
  Unknown,
}
impl bKGD {
  /// Decodes the payload using the header's color type.
  ///
  /// ## Failure
  /// * [`DecodeError::BadLength`] if the payload doesn't have exactly the size
  ///   that the color type calls for.
  pub fn from_payload(data: &[u8], header: &IHDR) -> Result<Self, DecodeError> {
    Ok(match (header.color_type, data) {
      (PngColorType::Index, [i]) => bKGD::Index { i: *i },
      (PngColorType::Y | PngColorType::YA, [y0, y1]) => {
        bKGD::Greyscale { y: u16::from_be_bytes([*y0, *y1]) }
      }
      (PngColorType::RGB | PngColorType::RGBA, [r0, r1, g0, g1, b0, b1]) => bKGD::RGB {
        r: u16::from_be_bytes([*r0, *r1]),
        g: u16::from_be_bytes([*g0, *g1]),
        b: u16::from_be_bytes([*b0, *b1]),
      },
      (PngColorType::Unknown(_), _) => bKGD::Unknown,
      (PngColorType::Index, _) => {
        return Err(DecodeError::BadLength { expected: 1, actual: data.len() })
      }
      (PngColorType::Y | PngColorType::YA, _) => {
        return Err(DecodeError::BadLength { expected: 2, actual: data.len() })
      }
      (PngColorType::RGB | PngColorType::RGBA, _) => {
        return Err(DecodeError::BadLength { expected: 6, actual: data.len() })
      }
    })
  }
}
