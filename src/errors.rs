use std::io;

use crate::bits::BitString;

/// Shorthand for results produced by this crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Everything that can go wrong while building a codebook or coding symbols.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The sample held no (non-empty) symbols, so there is nothing to build a
    /// tree from.
    #[error("cannot build a Huffman tree from an empty alphabet")]
    EmptyAlphabet,

    #[error("no code assigned to symbol {symbol:?}")]
    UnknownSymbol { symbol: String },

    /// Input ran out in the middle of a code. `bits` holds the dangling
    /// suffix that matched nothing.
    #[error("failed to decode due to left-over bits: {bits}")]
    IncompleteCode { bits: BitString },

    #[error("malformed hex digit {digit:?} at index {index}")]
    MalformedHexDigit { digit: char, index: usize },

    #[error("malformed bit {bit:?} at index {index}; expected '0' or '1'")]
    MalformedBit { bit: char, index: usize },

    /// A supplied tree carries a code that collides with, or is a prefix of,
    /// another leaf's code.
    #[error("ambiguous code {code} in supplied tree")]
    AmbiguousCode { code: BitString },

    #[error("symbol {symbol:?} appears on more than one leaf")]
    DuplicateSymbol { symbol: String },

    #[error("unknown codec flag bits: {bits:08b}")]
    UnknownFlags { bits: u8 },
}

impl From<hex::FromHexError> for CodecError {
    fn from(e: hex::FromHexError) -> Self {
        match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                CodecError::MalformedHexDigit { digit: c, index }
            }
            // Callers only hand `hex` even-length, correctly sized input.
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                unreachable!("hex input is split into whole bytes before decoding")
            }
        }
    }
}

impl From<CodecError> for io::Error {
    fn from(e: CodecError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_diagnostics() {
        let err = CodecError::IncompleteCode {
            bits: "011".parse().unwrap(),
        };
        assert_eq!(err.to_string(), "failed to decode due to left-over bits: 011");

        let err = CodecError::UnknownSymbol { symbol: "z".into() };
        assert_eq!(err.to_string(), "no code assigned to symbol \"z\"");
    }

    #[test]
    fn hex_character_errors_keep_position() {
        let err: CodecError = hex::FromHexError::InvalidHexCharacter { c: 'g', index: 3 }.into();
        assert_eq!(err, CodecError::MalformedHexDigit { digit: 'g', index: 3 });
    }

    #[test]
    fn converts_into_io_error() {
        let err: io::Error = CodecError::EmptyAlphabet.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
