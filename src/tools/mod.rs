//! The tools module provides the helpers around the huffzip codec core.
//!
//! The tools are:
//! - cli: command line interface and log-level selection.
//! - freq_count: single-pass byte frequency profiling.
//! - progress: in-place percent/ETA display for long operations.

pub mod cli;
pub mod freq_count;
pub mod progress;
