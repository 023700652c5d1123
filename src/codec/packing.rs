//! Packs bit strings four bits to a hex digit.
//!
//! A bit string rarely fills a whole number of digits. The leftover 0-3 bits
//! are never padded into the hex text: they travel next to it as
//! [`HexEncoding::remainder`], so decoding gets back exactly the bits that
//! were encoded.

use bitvec::{order::Msb0, vec::BitVec};

use crate::{
    bits::BitString,
    errors::{CodecError, Result},
};

/// Bits per hex digit.
const NIBBLE: usize = 4;

/// Hex-packed bits, plus whatever bits did not fill a final digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexEncoding {
    pub hex: String,
    pub remainder: BitString,
}

impl HexEncoding {
    pub fn new(hex: impl Into<String>, remainder: BitString) -> Self {
        Self {
            hex: hex.into(),
            remainder,
        }
    }

    /// Builds an encoding from its two textual parts, e.g. `("a3", "01")`.
    pub fn parse(hex: &str, remainder: &str) -> Result<Self> {
        Ok(Self::new(hex, remainder.parse()?))
    }

    /// Number of bits represented, counting the remainder.
    pub fn total_bits(&self) -> usize {
        self.hex.chars().count() * NIBBLE + self.remainder.len()
    }
}

/// Splits `bits` into whole hex digits and a remainder.
pub(crate) fn pack(bits: &BitString, uppercase: bool) -> HexEncoding {
    let digits = bits.len() / NIBBLE;
    let (whole, rest) = bits.as_bitslice().split_at(digits * NIBBLE);

    // `hex` works on whole bytes, so round up to one and drop the extra digit.
    let mut packed: BitVec<u8, Msb0> = whole.iter().by_vals().collect();
    packed.resize(digits.div_ceil(2) * 8, false);
    let mut hex = if uppercase {
        hex::encode_upper(packed.as_raw_slice())
    } else {
        hex::encode(packed.as_raw_slice())
    };
    hex.truncate(digits);

    HexEncoding {
        hex,
        remainder: BitString::from_bitslice(rest),
    }
}

/// Expands every hex digit back into four bits and appends the remainder.
pub(crate) fn unpack(encoding: &HexEncoding) -> Result<BitString> {
    // `hex` reports bytes, not chars; catch non-ASCII input here so the error
    // names the real character and its position.
    if let Some((index, digit)) = encoding
        .hex
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(CodecError::MalformedHexDigit { digit, index });
    }
    let digits = encoding.hex.len();

    let mut padded = encoding.hex.clone();
    if digits % 2 != 0 {
        padded.push('0');
    }
    let bytes = hex::decode(&padded)?;

    let mut bits: BitVec<u8, Msb0> = BitVec::from_vec(bytes);
    bits.truncate(digits * NIBBLE);
    bits.extend_from_bitslice(encoding.remainder.as_bitslice());

    Ok(BitString::from_bitslice(&bits))
}
