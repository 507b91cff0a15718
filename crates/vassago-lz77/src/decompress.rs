//! LZ77 decompression: triple expansion with overlap-correct copies.

use vassago_core::{Error, OffsetBits, Result};

use crate::triple::{Triple, TRIPLE_SIZE};

/// Expand a stream of packed triples produced by [`lz77_encode`].
///
/// `offset_bits` must be the value the encoder used. Values outside
/// `1..=15` yield an empty buffer, mirroring the encoder's no-op.
///
/// # Errors
///
/// `CorruptStream` when the input is not a whole number of triples, or a
/// back-reference has a zero offset or reaches before the start of the
/// output.
///
/// [`lz77_encode`]: crate::compress::lz77_encode
pub fn lz77_decode(input: &[u8], offset_bits: u8) -> Result<Vec<u8>> {
    let Ok(offset_bits) = OffsetBits::new(offset_bits) else {
        return Ok(Vec::new());
    };
    if input.len() % TRIPLE_SIZE != 0 {
        return Err(Error::corrupt("input is not a whole number of triples"));
    }

    let mut out = Vec::new();
    for chunk in input.chunks_exact(TRIPLE_SIZE) {
        let triple = Triple::unpack([chunk[0], chunk[1], chunk[2]], offset_bits);
        let offset = triple.offset as usize;
        let length = triple.length as usize;

        if length > 0 {
            if offset == 0 {
                return Err(Error::corrupt("zero offset with nonzero copy length"));
            }
            if offset > out.len() {
                return Err(Error::corrupt_at(
                    "back-reference before the start of the output",
                    out.len(),
                ));
            }

            // Forward byte-by-byte, so an overlapping source re-reads
            // bytes written earlier in this same copy.
            let start = out.len() - offset;
            out.reserve(length + 1);
            for i in 0..length {
                let byte = out[start + i];
                out.push(byte);
            }
        }
        out.push(triple.literal);
    }

    Ok(out)
}
