use super::*;

/// `tIME`: Image last-modification time
///
/// PNG: [tIME](https://www.w3.org/TR/png/#11tIME)
///
/// The values are not checked against a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub struct tIME {
  pub year: u16,
  pub month: u8,
  pub day: u8,
  pub hour: u8,
  pub minute: u8,
  pub second: u8,
}
impl TryFrom<&[u8]> for tIME {
  type Error = DecodeError;
  #[inline]
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    if data.len() != 7 {
      return Err(DecodeError::BadLength { expected: 7, actual: data.len() });
    }
    let (year, rest) = try_pull_pod::<U16BE>(data, "year")?;
    let ([month, day, hour, minute, second], _) =
      try_split_off_byte_array::<5>(rest).ok_or(DecodeError::UnexpectedEnd { field: "time" })?;
    Ok(Self { year: year.into(), month, day, hour, minute, second })
  }
}
impl Display for tIME {
  /// Formats as `YYYY-MM-DD HH:MM:SS`.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f,
      "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
      self.year, self.month, self.day, self.hour, self.minute, self.second
    )
  }
}

#[test]
fn test_time_decode() {
  let t = tIME::try_from(&[0x07_u8, 0xE6, 2, 30, 23, 59, 60][..]).unwrap();
  assert_eq!(t.year, 2022);
  // february 30th with a leap second is still accepted
  assert_eq!(t.to_string(), "2022-02-30 23:59:60");
  assert_eq!(
    tIME::try_from(&[0x07_u8, 0xE6, 2][..]),
    Err(DecodeError::BadLength { expected: 7, actual: 3 })
  );
}
