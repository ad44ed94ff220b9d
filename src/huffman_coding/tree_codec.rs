//! Tree serialization for the container header.
//!
//! The tree is stored as a preorder tag stream: `0x00` plus the symbol byte
//! for a leaf, `0x01` followed by the whole left subtree and then the whole
//! right subtree for an internal node. The stream is self-delimiting, so no
//! length prefix is needed. The single-symbol tree never reaches this
//! format with a missing child; the container's shape byte carries that
//! case and only the lone leaf is written here.

use std::io::{Read, Write};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::HuffError;
use crate::huffman_coding::tree::Node;

const TAG_LEAF: u8 = 0;
const TAG_INTERNAL: u8 = 1;

/// Legal trees over 256 symbols are at most 255 deep; anything deeper in a
/// tag stream is corruption, and rejecting it also bounds recursion.
const MAX_DEPTH: usize = 255;

/// Write the preorder tag stream for a (sub)tree.
pub fn serialize<W: Write>(node: &Node, bw: &mut BitWriter<W>) {
    match node {
        Node::Leaf { symbol, .. } => {
            bw.out8(TAG_LEAF);
            bw.out8(*symbol);
        }
        Node::Internal { left, right, .. } => {
            bw.out8(TAG_INTERNAL);
            serialize(left, bw);
            serialize(right, bw);
        }
    }
}

/// Read one preorder tag stream back into an isomorphic tree. Weights are
/// not stored; rebuilt nodes carry zero, which the decode walk never reads.
pub fn deserialize<R: Read>(br: &mut BitReader<R>) -> Result<Node, HuffError> {
    deserialize_at(br, 0)
}

fn deserialize_at<R: Read>(br: &mut BitReader<R>, depth: usize) -> Result<Node, HuffError> {
    if depth > MAX_DEPTH {
        return Err(HuffError::Format(format!(
            "tree tag stream nests deeper than {} levels",
            MAX_DEPTH
        )));
    }
    match br.byte()? {
        Some(TAG_LEAF) => {
            let symbol = br
                .byte()?
                .ok_or_else(|| HuffError::Format("tree leaf is missing its symbol".to_string()))?;
            Ok(Node::Leaf { symbol, weight: 0 })
        }
        Some(TAG_INTERNAL) => {
            let left = deserialize_at(br, depth + 1)?;
            let right = deserialize_at(br, depth + 1)?;
            Ok(Node::Internal {
                weight: 0,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
        Some(tag) => Err(HuffError::Format(format!(
            "unknown tree tag {:#04x}",
            tag
        ))),
        None => Err(HuffError::Format("tree tag stream is truncated".to_string())),
    }
}
