//! The on-disk envelope.
//!
//! Layout, in order: the magic marker, a 16 bit name length plus the
//! original file name, the total decoded byte count as 64 bits, one tree
//! shape byte, the serialized tree, then the packed payload. All integers
//! are big-endian. The shape byte is what lets the single-symbol tree
//! store only its lone leaf: shape 1 tells the decoder to hang that leaf
//! off the left side of a synthetic root instead of expecting a second
//! subtree in the tag stream.

use std::io::{Read, Write};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::HuffError;
use crate::huffman_coding::tree::{HuffTree, Node};
use crate::huffman_coding::tree_codec;

/// Identifies a huffzip container, newline-terminated.
pub const MAGIC: &[u8; 8] = b"huffzip\n";

/// Appended to compressed file names, stripped on decompression.
pub const EXTENSION: &str = "hz";

const SHAPE_EMPTY: u8 = 0;
const SHAPE_SINGLE: u8 = 1;
const SHAPE_FULL: u8 = 2;

/// Everything the decoder needs before the payload starts.
pub struct Header {
    pub original_name: String,
    /// Total decoded byte count. The payload's last byte may hold padding
    /// bits, so this count, not the payload size, is what stops the decoder.
    pub total: u64,
    pub tree: HuffTree,
}

/// Write the container header. The payload follows immediately after.
pub fn write_header<W: Write>(
    bw: &mut BitWriter<W>,
    name: &str,
    total: u64,
    tree: &HuffTree,
) -> Result<(), HuffError> {
    if name.len() > u16::MAX as usize {
        return Err(HuffError::Format(format!(
            "original name is {} bytes, the format limit is {}",
            name.len(),
            u16::MAX
        )));
    }
    MAGIC.iter().for_each(|&b| bw.out8(b));
    bw.out16(name.len() as u16);
    name.as_bytes().iter().for_each(|&b| bw.out8(b));
    bw.out64(total);
    match tree {
        HuffTree::Empty => bw.out8(SHAPE_EMPTY),
        HuffTree::Single { symbol } => {
            bw.out8(SHAPE_SINGLE);
            tree_codec::serialize(
                &Node::Leaf {
                    symbol: *symbol,
                    weight: 0,
                },
                bw,
            );
        }
        HuffTree::Full(root) => {
            bw.out8(SHAPE_FULL);
            tree_codec::serialize(root, bw);
        }
    }
    bw.write_pending()?;
    Ok(())
}

/// Parse the container header, leaving the reader at the first payload bit.
pub fn read_header<R: Read>(br: &mut BitReader<R>) -> Result<Header, HuffError> {
    let magic = br
        .bytes(MAGIC.len())?
        .ok_or_else(|| HuffError::Format("file is too short for a huffzip header".to_string()))?;
    if magic != MAGIC {
        return Err(HuffError::Format(
            "missing huffzip magic marker; not a huffzip container".to_string(),
        ));
    }

    let name_len = br
        .bint(16)?
        .ok_or_else(|| truncated("original name length"))? as usize;
    let name_bytes = br.bytes(name_len)?.ok_or_else(|| truncated("original name"))?;
    let original_name = String::from_utf8(name_bytes)
        .map_err(|_| HuffError::Format("original name is not valid utf-8".to_string()))?;

    let total = br.bint(64)?.ok_or_else(|| truncated("total length"))?;
    let shape = br.byte()?.ok_or_else(|| truncated("tree shape"))?;

    let tree = match shape {
        SHAPE_EMPTY => {
            if total != 0 {
                return Err(HuffError::Format(format!(
                    "container stores no tree but promises {} decoded bytes",
                    total
                )));
            }
            HuffTree::Empty
        }
        SHAPE_SINGLE => match tree_codec::deserialize(br)? {
            Node::Leaf { symbol, .. } => HuffTree::Single { symbol },
            Node::Internal { .. } => {
                return Err(HuffError::Format(
                    "single-symbol container must store exactly one leaf".to_string(),
                ))
            }
        },
        SHAPE_FULL => match tree_codec::deserialize(br)? {
            Node::Leaf { .. } => {
                return Err(HuffError::Format(
                    "full tree cannot be a bare leaf".to_string(),
                ))
            }
            root @ Node::Internal { .. } => HuffTree::Full(root),
        },
        other => {
            return Err(HuffError::Format(format!(
                "unknown tree shape byte {:#04x}",
                other
            )))
        }
    };

    Ok(Header {
        original_name,
        total,
        tree,
    })
}

fn truncated(what: &str) -> HuffError {
    HuffError::Format(format!("container is truncated before the {}", what))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::tree::build_tree;
    use crate::tools::freq_count::freqs;

    fn written(name: &str, total: u64, tree: &HuffTree) -> Vec<u8> {
        let mut bw = BitWriter::new(Vec::new());
        write_header(&mut bw, name, total, tree).unwrap();
        bw.finish().unwrap();
        bw.into_inner()
    }

    #[test]
    fn empty_header_roundtrip() {
        let bytes = written("nothing.txt", 0, &HuffTree::Empty);
        let header = read_header(&mut BitReader::new(bytes.as_slice())).unwrap();
        assert_eq!(header.original_name, "nothing.txt");
        assert_eq!(header.total, 0);
        assert_eq!(header.tree, HuffTree::Empty);
    }

    #[test]
    fn single_symbol_header_roundtrip() {
        let bytes = written("aaaa.bin", 1000, &HuffTree::Single { symbol: b'A' });
        let header = read_header(&mut BitReader::new(bytes.as_slice())).unwrap();
        assert_eq!(header.total, 1000);
        assert_eq!(header.tree, HuffTree::Single { symbol: b'A' });
    }

    #[test]
    fn full_tree_header_roundtrip_with_utf8_name() {
        let tree = build_tree(&freqs(b"AAAABBBCCD"));
        let bytes = written("données.txt", 10, &tree);
        let header = read_header(&mut BitReader::new(bytes.as_slice())).unwrap();
        assert_eq!(header.original_name, "données.txt");
        assert_eq!(header.tree, tree);
    }

    #[test]
    fn header_layout_is_byte_exact() {
        let bytes = written("x", 5, &HuffTree::Single { symbol: b'Q' });
        let mut expected = Vec::new();
        expected.extend_from_slice(MAGIC);
        expected.extend_from_slice(&[0, 1]); // name length
        expected.push(b'x');
        expected.extend_from_slice(&5_u64.to_be_bytes());
        expected.push(SHAPE_SINGLE);
        expected.extend_from_slice(&[0, b'Q']); // lone leaf tag stream
        assert_eq!(bytes, expected);
    }

    #[test]
    fn wrong_magic_is_a_format_error() {
        let mut bytes = written("x", 0, &HuffTree::Empty);
        bytes[0] = b'X';
        assert!(matches!(
            read_header(&mut BitReader::new(bytes.as_slice())),
            Err(HuffError::Format(_))
        ));
    }

    #[test]
    fn truncated_header_is_a_format_error() {
        let bytes = written("somefile", 0, &HuffTree::Empty);
        for cut in 0..bytes.len() {
            assert!(matches!(
                read_header(&mut BitReader::new(&bytes[..cut])),
                Err(HuffError::Format(_))
            ));
        }
    }

    #[test]
    fn unknown_shape_byte_is_a_format_error() {
        let mut bytes = written("x", 0, &HuffTree::Empty);
        let shape_at = bytes.len() - 1;
        bytes[shape_at] = 9;
        assert!(matches!(
            read_header(&mut BitReader::new(bytes.as_slice())),
            Err(HuffError::Format(_))
        ));
    }

    #[test]
    fn empty_shape_with_nonzero_total_is_rejected() {
        let bytes = written("x", 7, &HuffTree::Empty);
        assert!(matches!(
            read_header(&mut BitReader::new(bytes.as_slice())),
            Err(HuffError::Format(_))
        ));
    }
}
