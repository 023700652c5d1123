mod code_table;
mod packing;

pub use code_table::CodeTable;
pub use packing::HexEncoding;

use crate::{
    bits::BitString,
    errors::{CodecError, Result},
    flags::CodecFlags,
    frequency::FrequencyTable,
    tree::HuffmanTree,
};

/// What a codec is (re)initialized from.
#[derive(Debug, Clone)]
pub enum Source {
    /// A representative sample. Its symbol frequencies shape the tree.
    Symbols(Vec<String>),

    /// An existing tree. Codes already stored on its leaves are kept as-is.
    Tree(HuffmanTree),
}

impl From<HuffmanTree> for Source {
    fn from(tree: HuffmanTree) -> Self {
        Source::Tree(tree)
    }
}

impl From<Vec<String>> for Source {
    fn from(symbols: Vec<String>) -> Self {
        Source::Symbols(symbols)
    }
}

impl From<&[&str]> for Source {
    fn from(symbols: &[&str]) -> Self {
        Source::Symbols(symbols.iter().map(|&s| s.to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Source {
    fn from(symbols: [&str; N]) -> Self {
        Source::from(&symbols[..])
    }
}

/// Encodes symbol sequences into bits (or hex) and back, using the codebook
/// of the tree it was last initialized with.
///
/// A fresh codec has an empty codebook: it can only encode empty input.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    tree: Option<HuffmanTree>,
    table: CodeTable,
    flags: CodecFlags,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(flags: CodecFlags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    pub fn from_symbols<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codec = Self::new();
        let symbols = symbols.into_iter().map(|s| s.as_ref().to_owned()).collect();
        codec.initialize(Source::Symbols(symbols))?;
        Ok(codec)
    }

    pub fn from_tree(tree: HuffmanTree) -> Result<Self> {
        let mut codec = Self::new();
        codec.initialize(tree)?;
        Ok(codec)
    }

    /// Replaces the codebook.
    ///
    /// From symbols, this counts them, builds a tree and derives fresh codes.
    /// From a tree, it skips straight to reading (or, for uncoded leaves,
    /// deriving) the codes. On error the previous codebook stays in place.
    pub fn initialize(&mut self, source: impl Into<Source>) -> Result<()> {
        let (mut tree, kind) = match source.into() {
            Source::Symbols(symbols) => {
                let frequencies: FrequencyTable = symbols.iter().collect();
                (HuffmanTree::build(&frequencies)?, "sample")
            }
            Source::Tree(tree) => (tree, "tree"),
        };
        let table = tree.assign_codes()?;

        log::debug!(
            "initialized codec from {kind} with {} codes, longest {} bits",
            table.len(),
            tree.depth()
        );

        self.tree = Some(tree);
        self.table = table;
        Ok(())
    }

    /// The tree behind the current codebook, with codes on every leaf.
    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    pub fn flags(&self) -> CodecFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: CodecFlags) {
        self.flags = flags;
    }

    pub fn alphabet_len(&self) -> usize {
        self.table.len()
    }

    pub fn code_for(&self, symbol: &str) -> Option<&BitString> {
        self.table.code_for(symbol)
    }

    pub fn symbol_for(&self, code: &BitString) -> Option<&str> {
        self.table.symbol_for(code)
    }

    /// Concatenates the code of every symbol. Empty symbols are skipped.
    pub fn encode<I, S>(&self, symbols: I) -> Result<BitString>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bits = BitString::new();
        for symbol in symbols {
            let symbol = symbol.as_ref();
            if symbol.is_empty() {
                continue;
            }
            bits.extend_from_bits(self.table.lookup(symbol)?);
        }
        Ok(bits)
    }

    /// Reads codes off `bits` from left to right.
    ///
    /// Each time the bits collected so far form a known code, the matching
    /// symbol is emitted and collection starts over. Bits left over at the
    /// end are an [`CodecError::IncompleteCode`], unless
    /// [`CodecFlags::DISCARD_TRAILING_BITS`] is set.
    pub fn decode(&self, bits: &BitString) -> Result<Vec<String>> {
        // With a one-symbol alphabet the only code is empty, and it would
        // match before any bit is read.
        if self.table.has_empty_code() {
            return if bits.is_empty() {
                Ok(Vec::new())
            } else {
                self.leftover(bits.clone(), Vec::new())
            };
        }

        let mut symbols = Vec::new();
        let mut pending = BitString::new();
        for bit in bits.iter() {
            pending.push(bit);
            if let Some(symbol) = self.table.symbol_for(&pending) {
                symbols.push(symbol.to_owned());
                pending.clear();
            }
        }

        if pending.is_empty() {
            Ok(symbols)
        } else {
            self.leftover(pending, symbols)
        }
    }

    /// Like [`Codec::encode`], packed four bits to a hex digit. Bits that do
    /// not fill a last digit come back in [`HexEncoding::remainder`].
    pub fn encode_hex<I, S>(&self, symbols: I) -> Result<HexEncoding>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bits = self.encode(symbols)?;
        Ok(packing::pack(
            &bits,
            self.flags.contains(CodecFlags::UPPERCASE_HEX),
        ))
    }

    /// Unpacks the hex digits, appends the remainder and decodes the lot.
    ///
    /// Without its remainder, an encoding decodes only as far as its hex
    /// digits reach, and a code cut short there is an
    /// [`CodecError::IncompleteCode`].
    pub fn decode_hex(&self, encoding: &HexEncoding) -> Result<Vec<String>> {
        let bits = packing::unpack(encoding)?;
        self.decode(&bits)
    }

    fn leftover(&self, bits: BitString, symbols: Vec<String>) -> Result<Vec<String>> {
        if self.flags.contains(CodecFlags::DISCARD_TRAILING_BITS) {
            log::warn!(
                "discarding {} left-over bits after {} symbols: {bits}",
                bits.len(),
                symbols.len()
            );
            Ok(symbols)
        } else {
            Err(CodecError::IncompleteCode { bits })
        }
    }
}
