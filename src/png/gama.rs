use super::*;

/// `gAMA`: Image gamma
///
/// PNG: [gAMA](https://www.w3.org/TR/png/#11gAMA)
///
/// The stored value is the gamma times 100,000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub struct gAMA {
  /// The stored integer.
  pub gamma: u32,
}
impl gAMA {
  /// The gamma as a fraction.
  #[inline]
  #[must_use]
  pub fn value(&self) -> f64 {
    scaled(self.gamma)
  }
}
impl TryFrom<&[u8]> for gAMA {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    match *data {
      [a, b, c, d] => Ok(Self { gamma: u32::from_be_bytes([a, b, c, d]) }),
      _ => Err(DecodeError::BadLength { expected: 4, actual: data.len() }),
    }
  }
}

#[test]
fn test_gama_value() {
  let g = gAMA::try_from(&45455_u32.to_be_bytes()[..]).unwrap();
  assert_eq!(g.gamma, 45455);
  assert_eq!(g.value(), 0.45455);
  assert_eq!(
    gAMA::try_from(&[0_u8, 1][..]),
    Err(DecodeError::BadLength { expected: 4, actual: 2 })
  );
}
