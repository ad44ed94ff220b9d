use std::io::{self, Read};

use rayon::prelude::*;

/// Occurrence count for each of the 256 byte values. The sum of all
/// entries equals the length of the profiled input.
pub type FreqTable = [u64; 256];

// 16k chunks are pretty much the sweet spot; below ~64k the split is not
// worth the thread traffic.
const PAR_MIN: usize = 64_000;
const PAR_CHUNK: usize = 16_000;

/// Returns a frequency count of a buffer. Uses parallelism when the buffer
/// is over 64k.
pub fn freqs(data: &[u8]) -> FreqTable {
    if data.len() > PAR_MIN {
        data.par_chunks(PAR_CHUNK)
            .fold(
                || [0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || [0_u64; 256],
                |mut sum, part| {
                    sum.iter_mut().zip(part.iter()).for_each(|(s, p)| *s += p);
                    sum
                },
            )
    } else {
        let mut freqs = [0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

/// Consume the whole source once in reads of at most `chunk_size` bytes and
/// return its frequency table together with the total byte count. An empty
/// source yields an all-zero table, which is a valid result.
pub fn count_frequencies<R: Read>(
    mut source: R,
    chunk_size: usize,
) -> io::Result<(FreqTable, u64)> {
    let mut table = [0_u64; 256];
    let mut total = 0_u64;
    let mut buf = vec![0_u8; chunk_size.max(1)];
    loop {
        let got = source.read(&mut buf)?;
        if got == 0 {
            break;
        }
        let counted = freqs(&buf[..got]);
        table.iter_mut().zip(counted.iter()).for_each(|(t, c)| *t += c);
        total += got as u64;
    }
    Ok((table, total))
}
