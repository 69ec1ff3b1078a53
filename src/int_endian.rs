//! Big-endian integers that can be read straight out of a byte slice.
//!
//! PNG stores every multi-byte integer in network byte order. These newtypes
//! are just byte arrays, so they have an alignment of 1 and are [`Pod`], which
//! lets the parser helpers pull them (or arrays of them) off the front of a
//! chunk's data with no alignment fuss.

use bytemuck::{Pod, Zeroable};

/// A `u16` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u16` it has an
/// alignment of 1.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct U16BE([u8; 2]);
impl U16BE {
  /// Convert this value to a native `u16`
  #[inline]
  #[must_use]
  pub const fn to_u16(self) -> u16 {
    u16::from_be_bytes(self.0)
  }
  /// Make a value from a native `u16`
  #[inline]
  #[must_use]
  pub const fn from_u16(u: u16) -> Self {
    Self(u.to_be_bytes())
  }
}
impl core::fmt::Debug for U16BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U16BE").field(&self.to_u16()).finish()
  }
}
impl From<U16BE> for u16 {
  #[inline]
  #[must_use]
  fn from(value: U16BE) -> Self {
    value.to_u16()
  }
}

/// A `u32` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u32` it has an
/// alignment of 1.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  /// Convert this value to a native `u32`
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  /// Make a value from a native `u32`
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
}
impl core::fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}
impl From<U32BE> for u32 {
  #[inline]
  #[must_use]
  fn from(value: U32BE) -> Self {
    value.to_u32()
  }
}

/// An `i32` stored as big-endian two's complement bytes.
///
/// Only the pixel calibration chunk uses signed values.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct I32BE([u8; 4]);
impl I32BE {
  /// Convert this value to a native `i32`
  #[inline]
  #[must_use]
  pub const fn to_i32(self) -> i32 {
    i32::from_be_bytes(self.0)
  }
  /// Make a value from a native `i32`
  #[inline]
  #[must_use]
  pub const fn from_i32(i: i32) -> Self {
    Self(i.to_be_bytes())
  }
}
impl core::fmt::Debug for I32BE {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("I32BE").field(&self.to_i32()).finish()
  }
}
impl From<I32BE> for i32 {
  #[inline]
  #[must_use]
  fn from(value: I32BE) -> Self {
    value.to_i32()
  }
}

#[test]
fn test_big_endian_round_values() {
  assert_eq!(U16BE::from_u16(0x1234), bytemuck::cast([0x12_u8, 0x34]));
  assert_eq!(U32BE::from_u32(45455).to_u32(), 45455);
  assert_eq!(bytemuck::cast::<[u8; 4], I32BE>([0xFF, 0xFF, 0xFF, 0xFE]).to_i32(), -2);
  assert_eq!(I32BE::from_i32(-2), bytemuck::cast([0xFF_u8, 0xFF, 0xFF, 0xFE]));
}
