use std::fs::File;
use std::io::{Read, Write};
use std::time::Instant;

use log::info;

use crate::bitstream::bitreader::BitReader;
use crate::compression::container::{self, EXTENSION};
use crate::error::{HuffError, Result};
use crate::huffman_coding::tree::{HuffTree, Node};
use crate::tools::cli::HzOpts;
use crate::tools::progress::Progress;

/// Decompress the container named in opts.
pub fn decompress(opts: &HzOpts) -> Result<()> {
    let start = Instant::now();
    let in_name = &opts.input;

    let fin = File::open(in_name)?;
    let mut br = BitReader::with_buffer_size(fin, opts.buffer_size);
    let header = container::read_header(&mut br)?;
    info!(
        "Found a valid huffzip container: original name {}, {} bytes.",
        header.original_name, header.total
    );

    let out_name = opts
        .output
        .clone()
        .unwrap_or_else(|| output_name(in_name, &header.original_name));
    let f_out = File::create(&out_name)?;
    let mut progress = Progress::new(header.total);
    decode_stream(
        &mut br,
        &header.tree,
        header.total,
        f_out,
        opts.buffer_size,
        &mut progress,
    )?;
    progress.finish();

    info!(
        "Decompressed {} into {} ({} bytes) in {:.2?}.",
        in_name,
        out_name,
        header.total,
        start.elapsed()
    );
    Ok(())
}

/// Default output name: the input with the container extension stripped,
/// falling back to the name stored in the container.
fn output_name(input: &str, stored: &str) -> String {
    match input.strip_suffix(&format!(".{}", EXTENSION)) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ if !stored.is_empty() => stored.to_string(),
        _ => format!("{}.out", input),
    }
}

/// Decode `total` bytes from the packed payload by walking the tree, bit
/// value 0 to the left child and 1 to the right. Decoding stops exactly at
/// `total`, leaving any padding bits unread. Output is buffered in
/// `chunk_size` slabs.
pub fn decode_stream<R: Read, W: Write>(
    br: &mut BitReader<R>,
    tree: &HuffTree,
    total: u64,
    mut sink: W,
    chunk_size: usize,
    progress: &mut Progress,
) -> Result<()> {
    if total == 0 {
        return Ok(());
    }
    let slab = chunk_size.max(1);
    let mut out_buf: Vec<u8> = Vec::with_capacity(slab);
    let mut done = 0_u64;

    match tree {
        // read_header rejects this pairing; kept as a hard error in case a
        // library caller assembles the pieces directly.
        HuffTree::Empty => {
            return Err(HuffError::Format(
                "cannot decode a payload without a tree".to_string(),
            ))
        }
        // Left-only synthetic root: every 0 bit is one copy of the symbol,
        // and a 1 bit has nowhere to go.
        HuffTree::Single { symbol } => {
            while done < total {
                match br.bool_bit()? {
                    Some(false) => {
                        out_buf.push(*symbol);
                        done += 1;
                        if out_buf.len() == slab {
                            sink.write_all(&out_buf)?;
                            out_buf.clear();
                            progress.update(done);
                        }
                    }
                    Some(true) => {
                        return Err(HuffError::Corrupt(
                            "bit walk stepped to a missing right child".to_string(),
                        ))
                    }
                    None => return Err(short_payload(done, total)),
                }
            }
        }
        HuffTree::Full(root) => {
            while done < total {
                let mut node = root;
                loop {
                    match node {
                        Node::Internal { left, right, .. } => {
                            let bit = br
                                .bool_bit()?
                                .ok_or_else(|| short_payload(done, total))?;
                            node = if bit { right.as_ref() } else { left.as_ref() };
                        }
                        Node::Leaf { symbol, .. } => {
                            out_buf.push(*symbol);
                            break;
                        }
                    }
                }
                done += 1;
                if out_buf.len() == slab {
                    sink.write_all(&out_buf)?;
                    out_buf.clear();
                    progress.update(done);
                }
            }
        }
    }

    if !out_buf.is_empty() {
        sink.write_all(&out_buf)?;
    }
    sink.flush()?;
    Ok(())
}

fn short_payload(done: u64, total: u64) -> HuffError {
    HuffError::Corrupt(format!(
        "payload exhausted after {} of {} decoded bytes",
        done, total
    ))
}
