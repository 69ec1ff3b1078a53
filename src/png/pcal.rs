use super::*;

/// `pCAL`: Calibration of pixel values
///
/// PNG: [pCAL](http://www.libpng.org/pub/png/spec/register/pngext-1.5.0.html#C.pCAL)
/// (an extension chunk, from the PNG extensions register)
///
/// Maps stored sample values `x0..=x1` onto physical values through an
/// equation. The first parameter gets its own field. The rest of the
/// parameters are null separated and kept together, see
/// [`params`](pCAL::params).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub struct pCAL<'b> {
  pub name: &'b [u8],
  pub x0: i32,
  pub x1: i32,
  pub equation_type: u8,
  pub num_params: u8,
  pub unit_name: &'b [u8],
  pub param0: &'b [u8],
  pub remaining_params: &'b [u8],
}
impl Debug for pCAL<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("pCAL")
      .field("name", &latin1_to_string(self.name))
      .field("x0", &self.x0)
      .field("x1", &self.x1)
      .field("equation_type", &self.equation_type)
      .field("num_params", &self.num_params)
      .field("unit_name", &latin1_to_string(self.unit_name))
      .field("param0", &latin1_to_string(self.param0))
      .field("remaining_params", &latin1_to_string(self.remaining_params))
      .finish()
  }
}
impl<'b> pCAL<'b> {
  /// All the parameters, with `param0` first.
  ///
  /// The final parameter isn't null terminated, so an empty
  /// `remaining_params` just means there was only one. A stray terminator
  /// after the final parameter is ignored.
  pub fn params(&self) -> impl Iterator<Item = &'b [u8]> + 'b {
    let rest = match self.remaining_params {
      [rest @ .., 0] => rest,
      rest => rest,
    };
    core::iter::once(self.param0).chain(rest.split(|&b| b == 0).filter(move |_| !rest.is_empty()))
  }
}
impl<'b> TryFrom<&'b [u8]> for pCAL<'b> {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &'b [u8]) -> Result<Self, Self::Error> {
    let (name, rest) = try_pull_nul_terminated(data, "calibration name")?;
    let (x0, rest) = try_pull_pod::<I32BE>(rest, "x0")?;
    let (x1, rest) = try_pull_pod::<I32BE>(rest, "x1")?;
    let (equation_type, rest) = try_pull_u8(rest, "equation type")?;
    let (num_params, rest) = try_pull_u8(rest, "parameter count")?;
    let (unit_name, rest) = try_pull_nul_terminated(rest, "unit name")?;
    let (param0, remaining_params) = try_pull_nul_terminated(rest, "first parameter")?;
    Ok(Self {
      name,
      x0: x0.into(),
      x1: x1.into(),
      equation_type,
      num_params,
      unit_name,
      param0,
      remaining_params,
    })
  }
}
