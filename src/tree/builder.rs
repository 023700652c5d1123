use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use super::Node;
use crate::{
    errors::{CodecError, Result},
    frequency::FrequencyTable,
};

/// A subtree waiting in the merge queue.
///
/// Ordered by weight, then by `seq`: leaves are numbered in lexical symbol
/// order and every merged node gets the next number as it is created.
#[derive(Debug)]
struct Pending {
    weight: usize,
    seq: usize,
    node: Node,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.seq).cmp(&(other.weight, other.seq))
    }
}

pub(super) fn build_root(frequencies: &FrequencyTable) -> Result<Node> {
    let mut leaves: Vec<(&str, usize)> = frequencies.iter().collect();
    leaves.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

    let mut heap: BinaryHeap<Reverse<Pending>> = leaves
        .into_iter()
        .enumerate()
        .map(|(seq, (symbol, weight))| {
            Reverse(Pending {
                weight,
                seq,
                node: Node::leaf(symbol, weight),
            })
        })
        .collect();
    let mut next_seq = heap.len();

    loop {
        let Reverse(lightest) = heap.pop().ok_or(CodecError::EmptyAlphabet)?;
        let Some(Reverse(next)) = heap.pop() else {
            // Also covers the one-symbol alphabet: the lone leaf is the root.
            return Ok(lightest.node);
        };

        let node = Node::merge(lightest.node, next.node);
        heap.push(Reverse(Pending {
            weight: node.weight(),
            seq: next_seq,
            node,
        }));
        next_seq += 1;
    }
}
