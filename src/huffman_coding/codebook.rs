//! Code book generation.
//!
//! A depth-first walk of the tree assigns each leaf its root-to-leaf path,
//! `0` for a left descent and `1` for a right one. Codes are prefix-free
//! because they end at distinct leaves of one tree, and no code can exceed
//! 255 bits (a tree over at most 256 symbols is at most that deep).

use crate::huffman_coding::tree::{HuffTree, Node};

/// A symbol's bit sequence, first-transmitted bit first.
pub type Code = Vec<bool>;

/// Per-symbol codes for the 256 possible byte values. Only symbols present
/// in the source have one.
pub struct CodeBook {
    codes: [Option<Code>; 256],
}

impl CodeBook {
    pub fn from_tree(tree: &HuffTree) -> Self {
        let mut codes: [Option<Code>; 256] = std::array::from_fn(|_| None);
        match tree {
            HuffTree::Empty => {}
            // The lone leaf hangs off the left side of its synthetic root,
            // so its path normalizes to the one-bit code `0`.
            HuffTree::Single { symbol } => codes[*symbol as usize] = Some(vec![false]),
            HuffTree::Full(root) => {
                let mut path = Vec::with_capacity(255);
                assign(root, &mut path, &mut codes);
            }
        }
        Self { codes }
    }

    pub fn code(&self, symbol: u8) -> Option<&[bool]> {
        self.codes[symbol as usize].as_deref()
    }

    /// How many symbols have a code.
    pub fn symbol_count(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &[bool])> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_deref().map(|c| (symbol as u8, c)))
    }
}

fn assign(node: &Node, path: &mut Vec<bool>, codes: &mut [Option<Code>; 256]) {
    match node {
        Node::Leaf { symbol, .. } => codes[*symbol as usize] = Some(path.clone()),
        Node::Internal { left, right, .. } => {
            path.push(false);
            assign(left, path, codes);
            path.pop();
            path.push(true);
            assign(right, path, codes);
            path.pop();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::tree::build_tree;
    use crate::tools::freq_count::freqs;

    fn book_of(data: &[u8]) -> CodeBook {
        CodeBook::from_tree(&build_tree(&freqs(data)))
    }

    fn as_bits(code: &[bool]) -> String {
        code.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    #[test]
    fn empty_tree_yields_empty_book() {
        let book = CodeBook::from_tree(&HuffTree::Empty);
        assert_eq!(book.symbol_count(), 0);
        assert!(book.code(0).is_none());
    }

    #[test]
    fn single_symbol_codes_as_one_zero_bit() {
        let book = book_of(&[b'A'; 1000]);
        assert_eq!(book.symbol_count(), 1);
        assert_eq!(book.code(b'A'), Some([false].as_slice()));
    }

    #[test]
    fn scenario_codes_and_lengths() {
        // A:4 B:3 C:2 D:1 -> A=0, B=10, D=110, C=111.
        let book = book_of(b"AAAABBBCCD");
        assert_eq!(as_bits(book.code(b'A').unwrap()), "0");
        assert_eq!(as_bits(book.code(b'B').unwrap()), "10");
        assert_eq!(as_bits(book.code(b'C').unwrap()), "111");
        assert_eq!(as_bits(book.code(b'D').unwrap()), "110");
        assert!(book.code(b'E').is_none());
    }

    #[test]
    fn codes_are_prefix_free() {
        let data: Vec<u8> = (0..200_u32)
            .flat_map(|i| std::iter::repeat((i % 37) as u8).take((i + 1) as usize))
            .collect();
        let book = book_of(&data);
        let codes: Vec<(u8, &[bool])> = book.iter().collect();
        for (a_sym, a) in &codes {
            for (b_sym, b) in &codes {
                if a_sym != b_sym {
                    assert!(
                        !b.starts_with(a),
                        "code of {} is a prefix of the code of {}",
                        a_sym,
                        b_sym
                    );
                }
            }
        }
    }

    #[test]
    fn kraft_sums_to_exactly_one() {
        // Sum of 2^(-len) over all codes must be 1 for a full tree.
        let data: Vec<u8> = (0..=255_u16).map(|b| b as u8).cycle().take(4096).collect();
        let book = book_of(&data);
        assert_eq!(book.symbol_count(), 256);
        let max_len = book.iter().map(|(_, c)| c.len()).max().unwrap() as u32;
        let scaled: u128 = book
            .iter()
            .map(|(_, c)| 1_u128 << (max_len - c.len() as u32))
            .sum();
        assert_eq!(scaled, 1_u128 << max_len);
    }

    #[test]
    fn skewed_distribution_gets_deep_codes() {
        // Powers of two force a maximally skewed tree: 8 symbols, the two
        // rarest share the deepest level at 7 bits.
        let data: Vec<u8> = (0..8_u8)
            .flat_map(|i| std::iter::repeat(i).take(1 << i))
            .collect();
        let book = book_of(&data);
        assert_eq!(book.code(7).unwrap().len(), 1);
        assert_eq!(book.code(1).unwrap().len(), 7);
        assert_eq!(book.code(0).unwrap().len(), 7);
    }
}
