use std::collections::HashMap;

use crate::{
    bits::BitString,
    errors::{CodecError, Result},
    tree::Node,
};

/// The two lookup tables derived from a Huffman tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    code_to_sym: HashMap<BitString, String>,
    sym_to_code: HashMap<String, BitString>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks the tree depth-first, left (`0`) before right (`1`), and records
    /// a code for every leaf.
    ///
    /// A leaf without a code is given its path from the root; a lone root
    /// leaf gets the empty code. A leaf that already carries a code keeps it.
    ///
    /// Fails if two leaves share a symbol, or if the resulting codes are not
    /// prefix-free.
    pub fn assign(root: &mut Node) -> Result<Self> {
        let mut table = Self::new();

        let mut stack = vec![(root, BitString::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, code, .. } => {
                    let code = code.get_or_insert(path);
                    log::trace!("{symbol:?} -> {code}");
                    table.insert(symbol.clone(), code.clone())?;
                }
                Node::Internal { left, right, .. } => {
                    stack.push((&mut **right, path.with(true)));
                    stack.push((&mut **left, path.with(false)));
                }
            }
        }

        table.check_prefix_free()?;
        Ok(table)
    }

    /// Records one `symbol <-> code` pair.
    pub fn insert(&mut self, symbol: String, code: BitString) -> Result<()> {
        if self.sym_to_code.contains_key(&symbol) {
            return Err(CodecError::DuplicateSymbol { symbol });
        }
        if self.code_to_sym.contains_key(&code) {
            return Err(CodecError::AmbiguousCode { code });
        }

        self.code_to_sym.insert(code.clone(), symbol.clone());
        self.sym_to_code.insert(symbol, code);
        Ok(())
    }

    pub fn code_for(&self, symbol: &str) -> Option<&BitString> {
        self.sym_to_code.get(symbol)
    }

    pub fn symbol_for(&self, code: &BitString) -> Option<&str> {
        self.code_to_sym.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sym_to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sym_to_code.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BitString)> + '_ {
        self.sym_to_code
            .iter()
            .map(|(symbol, code)| (symbol.as_str(), code))
    }

    /// Whether the one-symbol special case applies: the only code is empty.
    pub(crate) fn has_empty_code(&self) -> bool {
        self.code_to_sym.contains_key(&BitString::new())
    }

    pub fn is_prefix_free(&self) -> bool {
        self.check_prefix_free().is_ok()
    }

    /// In sorted order, any code that is a prefix of another is immediately
    /// followed by a code it prefixes.
    fn check_prefix_free(&self) -> Result<()> {
        let mut codes: Vec<&BitString> = self.code_to_sym.keys().collect();
        codes.sort_unstable();
        match codes.windows(2).find(|pair| pair[0].is_prefix_of(pair[1])) {
            Some(pair) => Err(CodecError::AmbiguousCode {
                code: pair[0].clone(),
            }),
            None => Ok(()),
        }
    }

    /// Number of bits `symbols` would encode to. Empty symbols count for
    /// nothing.
    pub fn encoded_len<I, S>(&self, symbols: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total = 0;
        for symbol in symbols {
            let symbol = symbol.as_ref();
            if symbol.is_empty() {
                continue;
            }
            total += self.lookup(symbol)?.len();
        }
        Ok(total)
    }

    pub(crate) fn lookup(&self, symbol: &str) -> Result<&BitString> {
        self.code_for(symbol)
            .ok_or_else(|| CodecError::UnknownSymbol {
                symbol: symbol.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> BitString {
        text.parse().unwrap()
    }

    #[test]
    fn example() {
        let mut root = Node::merge(
            Node::merge(Node::leaf("a", 1), Node::leaf("b", 1)),
            Node::merge(
                Node::leaf("c", 1),
                Node::merge(Node::leaf("d", 1), Node::leaf("e", 1)),
            ),
        );
        let actual = CodeTable::assign(&mut root).unwrap();

        let expected: HashMap<_, _> = [
            ("00", "a"),
            ("01", "b"),
            ("10", "c"),
            ("110", "d"),
            ("111", "e"),
        ]
        .into_iter()
        .map(|(bits, symbol)| (code(bits), symbol.to_string()))
        .collect();

        assert_eq!(actual.code_to_sym, expected);
        for (bits, symbol) in &expected {
            assert_eq!(actual.code_for(symbol), Some(bits));
        }
        assert!(actual.is_prefix_free());
    }

    #[test]
    fn lone_leaf_gets_empty_code() {
        let mut root = Node::leaf("only", 9);
        let table = CodeTable::assign(&mut root).unwrap();
        assert_eq!(table.code_for("only"), Some(&BitString::new()));
        assert!(table.has_empty_code());
        assert_eq!(root.code(), Some(&BitString::new()));
    }

    #[test]
    fn duplicate_symbols_are_rejected() {
        let mut root = Node::merge(Node::leaf("a", 1), Node::leaf("a", 1));
        let err = CodeTable::assign(&mut root).unwrap_err();
        assert_eq!(err, CodecError::DuplicateSymbol { symbol: "a".into() });
    }

    #[test]
    fn colliding_codes_are_rejected() {
        let mut root = Node::merge(
            Node::coded_leaf("a", 1, code("1")),
            Node::coded_leaf("b", 1, code("1")),
        );
        let err = CodeTable::assign(&mut root).unwrap_err();
        assert_eq!(err, CodecError::AmbiguousCode { code: code("1") });
    }

    #[test]
    fn prefix_codes_are_rejected() {
        let mut root = Node::merge(
            Node::coded_leaf("a", 1, code("01")),
            Node::coded_leaf("b", 1, code("011")),
        );
        let err = CodeTable::assign(&mut root).unwrap_err();
        assert_eq!(err, CodecError::AmbiguousCode { code: code("01") });
    }

    #[test]
    fn encoded_len_sums_code_lengths() {
        let mut root = Node::merge(
            Node::leaf("a", 3),
            Node::merge(Node::leaf("b", 1), Node::leaf("c", 1)),
        );
        let table = CodeTable::assign(&mut root).unwrap();
        assert_eq!(table.encoded_len(["a", "b", "", "c", "a"]).unwrap(), 6);
        assert_eq!(
            table.encoded_len(["a", "z"]).unwrap_err(),
            CodecError::UnknownSymbol { symbol: "z".into() }
        );
    }
}
