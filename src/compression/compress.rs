use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::bitstream::bitwriter::BitWriter;
use crate::compression::container::{self, EXTENSION};
use crate::error::{HuffError, Result};
use crate::huffman_coding::codebook::CodeBook;
use crate::huffman_coding::tree::build_tree;
use crate::tools::cli::HzOpts;
use crate::tools::freq_count::count_frequencies;
use crate::tools::progress::Progress;

/// Compress the input file named in opts. The input is read twice: once to
/// count byte frequencies, once to emit the packed payload.
pub fn compress(opts: &HzOpts) -> Result<()> {
    let start = Instant::now();
    let in_name = &opts.input;
    let out_name = opts
        .output
        .clone()
        .unwrap_or_else(|| format!("{}.{}", in_name, EXTENSION));

    // Pass one: profile the whole input.
    let fin = File::open(in_name)?;
    let (freq_table, total) = count_frequencies(fin, opts.buffer_size)?;
    info!(
        "{}: {} bytes, {} distinct byte values.",
        in_name,
        total,
        freq_table.iter().filter(|&&f| f > 0).count()
    );

    let tree = build_tree(&freq_table);
    let book = CodeBook::from_tree(&tree);

    let f_out = File::create(&out_name)?;
    let mut bw = BitWriter::new(f_out);
    container::write_header(&mut bw, stored_name(in_name), total, &tree)?;

    // Pass two: re-read the input and emit code bits.
    let fin = File::open(in_name)?;
    let mut progress = Progress::new(total);
    encode_stream(fin, &book, &mut bw, opts.buffer_size, &mut progress)?;
    let padding = bw.finish()?;
    progress.finish();
    debug!("Final payload byte carries {} padding bits.", padding);

    let written = bw.bytes_written();
    info!(
        "Compressed {} bytes to {} ({} bytes, {:.1}% of the input) in {:.2?}.",
        total,
        out_name,
        written,
        written as f64 * 100.0 / (total.max(1)) as f64,
        start.elapsed()
    );
    Ok(())
}

/// The name stored in the container: the input's final path component.
fn stored_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// Encode a byte source into packed payload bits. Every input byte must
/// have a code; the caller built the book from the same data in pass one.
/// Returns the number of source bytes consumed.
pub fn encode_stream<R: Read, W: Write>(
    mut source: R,
    book: &CodeBook,
    bw: &mut BitWriter<W>,
    chunk_size: usize,
    progress: &mut Progress,
) -> Result<u64> {
    let mut buf = vec![0_u8; chunk_size.max(1)];
    let mut processed = 0_u64;
    loop {
        let got = source.read(&mut buf)?;
        if got == 0 {
            break;
        }
        for &byte in &buf[..got] {
            let code = book.code(byte).ok_or_else(|| {
                HuffError::Format(format!(
                    "no code for byte {:#04x}; did the input change between passes?",
                    byte
                ))
            })?;
            bw.push_code(code);
        }
        processed += got as u64;
        progress.update(processed);
        bw.write_pending()?;
    }
    Ok(processed)
}
