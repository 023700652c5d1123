//! Huffman prefix codes over string symbols.
//!
//! A [`Codec`] is trained on a representative sample: symbol frequencies are
//! counted, a Huffman tree is built by greedily merging the two lightest
//! subtrees, and every leaf's path (`0` = left, `1` = right) becomes its code.
//! The codec then encodes symbol sequences into bits or hex, and decodes them
//! back.
//!
//! ```
//! use huffcodec::Codec;
//!
//! let sample: Vec<String> = "abracadabra".chars().map(String::from).collect();
//! let codec = Codec::from_symbols(&sample)?;
//!
//! let packed = codec.encode_hex(["c", "a", "b"])?;
//! assert_eq!(codec.decode_hex(&packed)?, ["c", "a", "b"]);
//! # Ok::<(), huffcodec::CodecError>(())
//! ```

mod bits;
mod codec;
mod errors;
mod flags;
mod frequency;
mod tree;

pub use crate::bits::BitString;
pub use crate::codec::{CodeTable, Codec, HexEncoding, Source};
pub use crate::errors::{CodecError, Result};
pub use crate::flags::CodecFlags;
pub use crate::frequency::FrequencyTable;
pub use crate::tree::{HuffmanTree, Node};

/// Builds a fully coded tree from a sample, without touching any codec.
pub fn generate<I, S>(symbols: I) -> Result<HuffmanTree>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    HuffmanTree::generate(symbols)
}
