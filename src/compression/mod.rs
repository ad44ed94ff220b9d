//! The compression module manages both directions of the huffzip pipeline.
//!
//! Compressing a file happens in the following steps:
//! - Frequency profiling: one full pass counts every byte value.
//! - Tree building: the two lightest nodes merge until one root remains.
//! - Code book generation: each leaf gets its root-to-leaf bit path.
//! - Container write: magic marker, original name, total length, the
//!   serialized tree, then the packed payload from a second pass over the
//!   input.
//!
//! Decompression is the inverse: parse the container, rebuild the tree,
//! then walk it one payload bit at a time until the promised number of
//! bytes has been produced. Padding bits in the final payload byte are
//! never interpreted.

pub mod compress;
pub mod container;
pub mod decompress;
