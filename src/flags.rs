use bitflags::bitflags;

use crate::errors::{CodecError, Result};

bitflags! {
    /// Options that change how a [`Codec`](crate::Codec) treats its input and
    /// output. The empty set is the strict default.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CodecFlags: u8 {
        /// When decoding ends partway through a code, drop the dangling bits
        /// (logging a warning) and return what was decoded, instead of failing
        /// with [`CodecError::IncompleteCode`].
        const DISCARD_TRAILING_BITS = 0b_0000_0001;

        /// Emit `A-F` rather than `a-f` from `encode_hex`. Decoding accepts
        /// either case regardless.
        const UPPERCASE_HEX = 0b_0000_0010;
    }
}

impl CodecFlags {
    /// Return an error if any unknown bit is set.
    pub fn new(flag_byte: u8) -> Result<CodecFlags> {
        CodecFlags::from_bits(flag_byte).ok_or(CodecError::UnknownFlags { bits: flag_byte })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_bits_round_trip() {
        let flags = CodecFlags::new(0b_0000_0011).unwrap();
        assert!(flags.contains(CodecFlags::DISCARD_TRAILING_BITS));
        assert!(flags.contains(CodecFlags::UPPERCASE_HEX));
        assert_eq!(CodecFlags::new(0).unwrap(), CodecFlags::default());
    }

    #[test]
    fn unknown_bits_are_rejected() {
        let err = CodecFlags::new(0b_1000_0001).unwrap_err();
        assert_eq!(err, CodecError::UnknownFlags { bits: 0b_1000_0001 });
    }
}
