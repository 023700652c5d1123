use std::{fmt, str::FromStr};

use bitvec::{order::Msb0, slice::BitSlice, vec::BitVec};

use crate::errors::CodecError;

/// An owned sequence of bits, written out as a string of `'0'`s and `'1'`s.
///
/// Used both for individual codes and for whole encoded messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitString {
    bits: BitVec<u8, Msb0>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn extend_from_bits(&mut self, other: &BitString) {
        self.bits.extend_from_bitslice(other.bits.as_bitslice());
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Copy of this bit string with one more bit on the end.
    pub(crate) fn with(&self, bit: bool) -> Self {
        let mut bits = self.clone();
        bits.push(bit);
        bits
    }

    /// Whether `self` is a proper or equal prefix of `other`.
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        other.bits.starts_with(self.bits.as_bitslice())
    }

    pub(crate) fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    pub(crate) fn from_bitslice(bits: &BitSlice<u8, Msb0>) -> Self {
        bits.iter().by_vals().collect()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitVec::with_capacity(s.len());
        for (index, bit) in s.chars().enumerate() {
            match bit {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(CodecError::MalformedBit { bit, index }),
            }
        }
        Ok(Self { bits })
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BitString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BitString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
