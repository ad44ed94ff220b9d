//! The huffman_coding module holds the codec core for huffzip.
//!
//! Compression builds an optimal prefix-free binary tree from the byte
//! frequencies of the whole input, turns the tree into a per-symbol code
//! book, and stores the tree itself in the container so the decoder can walk
//! it bit by bit.
//!
//! One tree covers the entire file. Frequencies are gathered in a single
//! full pass before any code is emitted; there is no adaptive modeling.

pub mod codebook;
pub mod tree;
pub mod tree_codec;
