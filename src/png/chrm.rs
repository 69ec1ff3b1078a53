use super::*;

/// `cHRM`: Primary chromaticities and white point
///
/// PNG: [cHRM](https://www.w3.org/TR/png/#11cHRM)
///
/// Each value is stored times 100,000. The fields hold the stored integers,
/// the methods give the real `(x, y)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub struct cHRM {
  pub white_x: u32,
  pub white_y: u32,
  pub red_x: u32,
  pub red_y: u32,
  pub green_x: u32,
  pub green_y: u32,
  pub blue_x: u32,
  pub blue_y: u32,
}
#[allow(missing_docs)]
impl cHRM {
  #[inline]
  #[must_use]
  pub fn white_point(&self) -> (f64, f64) {
    (scaled(self.white_x), scaled(self.white_y))
  }
  #[inline]
  #[must_use]
  pub fn red(&self) -> (f64, f64) {
    (scaled(self.red_x), scaled(self.red_y))
  }
  #[inline]
  #[must_use]
  pub fn green(&self) -> (f64, f64) {
    (scaled(self.green_x), scaled(self.green_y))
  }
  #[inline]
  #[must_use]
  pub fn blue(&self) -> (f64, f64) {
    (scaled(self.blue_x), scaled(self.blue_y))
  }
}
impl TryFrom<&[u8]> for cHRM {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    if data.len() != 32 {
      return Err(DecodeError::BadLength { expected: 32, actual: data.len() });
    }
    let values: [U32BE; 8] = bytemuck::pod_read_unaligned(data);
    let [white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y] = values.map(u32::from);
    Ok(Self { white_x, white_y, red_x, red_y, green_x, green_y, blue_x, blue_y })
  }
}

/// PNG stores these fractions as integers times 100,000.
#[inline]
#[must_use]
pub(crate) fn scaled(raw: u32) -> f64 {
  f64::from(raw) / 100000.0
}

#[test]
fn test_chrm_srgb_primaries() {
  let raw = [31270_u32, 32900, 64000, 33000, 30000, 60000, 15000, 6000];
  let data: Vec<u8> = raw.iter().flat_map(|v| v.to_be_bytes()).collect();
  let c = cHRM::try_from(&data[..]).unwrap();
  assert_eq!(c.white_point(), (0.3127, 0.329));
  assert_eq!(c.red(), (0.64, 0.33));
  assert_eq!(c.green(), (0.3, 0.6));
  assert_eq!(c.blue(), (0.15, 0.06));
  assert_eq!(
    cHRM::try_from(&data[..31]),
    Err(DecodeError::BadLength { expected: 32, actual: 31 })
  );
}
