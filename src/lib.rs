//! huffzip: Huffman compression and decompression of single files.
//!
//! The codec counts byte frequencies in one full pass, builds an optimal
//! prefix-free coding tree, and packs each input byte's code bits into a
//! self-describing container that also carries the original file name, the
//! total decoded length and the serialized tree. Decompression walks that
//! tree one payload bit at a time until the promised byte count is out.
//!
//! Basic usage from the command line:
//!
//! `$> huffzip -c test.txt`
//!
//! This compresses the file and creates test.txt.hz. `-d` reverses it.

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;
