use super::*;

/// The unit that a [`pHYs`] chunk measures pixel density in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhysUnit {
  /// Pixels per meter.
  Meter,
  /// The density only gives the pixel aspect ratio (0), or the unit byte is
  /// some other value.
  Unknown(u8),
}
impl From<u8> for PhysUnit {
  #[inline]
  #[must_use]
  fn from(value: u8) -> Self {
    match value {
      1 => PhysUnit::Meter,
      other => PhysUnit::Unknown(other),
    }
  }
}

/// `pHYs`: Physical pixel dimensions
///
/// PNG: [pHYs](https://www.w3.org/TR/png/#11pHYs)
///
/// The image dimensions are copied from the header at decode time so that the
/// physical size can be worked out from this value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub struct pHYs {
  /// Pixels per unit, horizontal.
  pub ppu_x: u32,
  /// Pixels per unit, vertical.
  pub ppu_y: u32,
  /// The unit.
  pub unit: PhysUnit,
  /// Image width from the header.
  pub image_width: u32,
  /// Image height from the header.
  pub image_height: u32,
}
impl pHYs {
  /// Decodes the payload, using the header for the image dimensions.
  pub fn from_payload(data: &[u8], header: &IHDR) -> Result<Self, DecodeError> {
    let (ppu_x, rest) = try_pull_pod::<U32BE>(data, "pixels per unit x")?;
    let (ppu_y, rest) = try_pull_pod::<U32BE>(rest, "pixels per unit y")?;
    let (unit, _) = try_pull_u8(rest, "unit")?;
    Ok(Self {
      ppu_x: ppu_x.into(),
      ppu_y: ppu_y.into(),
      unit: PhysUnit::from(unit),
      image_width: header.width,
      image_height: header.height,
    })
  }

  /// Physical width and height in centimeters.
  ///
  /// This assumes the unit is meters; check `unit` before trusting it. An axis
  /// with a density of 0 gives 0.
  #[inline]
  #[must_use]
  pub fn physical_size_cm(&self) -> (f64, f64) {
    fn axis(pixels: u32, ppu: u32) -> f64 {
      if ppu == 0 {
        0.0
      } else {
        f64::from(pixels) / f64::from(ppu) * 100.0
      }
    }
    (axis(self.image_width, self.ppu_x), axis(self.image_height, self.ppu_y))
  }
}
