mod builder;

use crate::{bits::BitString, codec::CodeTable, errors::Result, frequency::FrequencyTable};

/// A node of a Huffman tree.
///
/// Leaves carry a symbol and, once codes have been assigned, that symbol's
/// code. Internal nodes carry only structure and the sum of their leaves'
/// weights.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Leaf {
        symbol: String,
        weight: usize,
        code: Option<BitString>,
    },
    Internal {
        weight: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// A leaf with no code yet.
    pub fn leaf(symbol: impl Into<String>, weight: usize) -> Self {
        Node::Leaf {
            symbol: symbol.into(),
            weight,
            code: None,
        }
    }

    /// A leaf whose code is already known, e.g. from a stored tree.
    pub fn coded_leaf(symbol: impl Into<String>, weight: usize, code: BitString) -> Self {
        Node::Leaf {
            symbol: symbol.into(),
            weight,
            code: Some(code),
        }
    }

    /// Joins two subtrees. `left` ends up on the `0` branch. The combined
    /// weight saturates at `usize::MAX`.
    pub fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight().saturating_add(right.weight()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn code(&self) -> Option<&BitString> {
        match self {
            Node::Leaf { code, .. } => code.as_ref(),
            Node::Internal { .. } => None,
        }
    }
}

/// A Huffman tree: the build-time artifact from which code tables are derived.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Builds an uncoded tree by repeatedly merging the two lightest nodes.
    ///
    /// Ties on weight go to the lexically smaller symbol first, and between
    /// merged nodes to the one created earlier, so the shape is reproducible.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let root = builder::build_root(frequencies)?;
        log::debug!(
            "built Huffman tree over {} symbols, total weight {}",
            frequencies.len(),
            root.weight()
        );
        Ok(Self { root })
    }

    /// Counts `symbols`, builds a tree from them and assigns every leaf its
    /// code.
    pub fn generate<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let frequencies: FrequencyTable = symbols.into_iter().collect();
        let mut tree = Self::build(&frequencies)?;
        tree.assign_codes()?;
        Ok(tree)
    }

    /// Wraps an existing root, e.g. one loaded from storage.
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn weight(&self) -> usize {
        self.root.weight()
    }

    /// Gives every uncoded leaf the code of its path from the root and
    /// returns the resulting tables. Leaves that already have a code keep it.
    pub fn assign_codes(&mut self) -> Result<CodeTable> {
        CodeTable::assign(&mut self.root)
    }

    /// Leaves in pre-order, left before right.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> + '_ {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || loop {
            let node = stack.pop()?;
            match node {
                Node::Leaf { .. } => return Some(node),
                Node::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        })
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// `(symbol, code)` for every leaf that has a code, in pre-order.
    pub fn codes(&self) -> impl Iterator<Item = (&str, &BitString)> + '_ {
        self.leaves()
            .filter_map(|leaf| Some((leaf.symbol()?, leaf.code()?)))
    }

    /// Recovers the weight table the tree was built from.
    pub fn frequencies(&self) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for leaf in self.leaves() {
            if let Node::Leaf { symbol, weight, .. } = leaf {
                table.insert(symbol.clone(), *weight);
            }
        }
        table
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
            }
        }
        deepest
    }
}
