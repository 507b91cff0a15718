//! Huffman decoding: stream parse and code walk.

use vassago_core::{Error, Result};

use crate::bitio::BitCursor;
use crate::tree::{parse, Node};
use crate::PAD_FIELD_BITS;

/// Decompress a stream produced by [`huffman_encode`].
///
/// The empty buffer decodes to the empty buffer, matching what
/// [`huffman_encode`] emits for empty input.
///
/// # Errors
///
/// `CorruptStream` when the serialized tree is truncated or overdeep,
/// when it extends into the declared padding, or when the payload ends in
/// the middle of a code.
///
/// [`huffman_encode`]: crate::encode::huffman_encode
pub fn huffman_decode(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut cursor = BitCursor::new(input);
    let padding = cursor.read_bits(PAD_FIELD_BITS)? as usize;
    let root = parse(&mut cursor)?;

    // The trailing `padding` bits are fill, never code bits.
    let payload_end = cursor.bit_len() - padding;
    if cursor.position() > payload_end {
        return Err(Error::corrupt("serialized tree extends into the padding"));
    }

    if let Node::Leaf { symbol } = root {
        // Degenerate one-symbol tree: every payload bit stands for the
        // lone symbol.
        let mut out = Vec::with_capacity(payload_end - cursor.position());
        while cursor.position() < payload_end {
            cursor.read_bit()?;
            out.push(symbol);
        }
        return Ok(out);
    }

    let mut out = Vec::new();
    let mut node = &root;
    while cursor.position() < payload_end {
        let bit = cursor.read_bit()?;
        node = node
            .child(bit)
            .ok_or_else(|| Error::corrupt("code walk stepped past a leaf"))?;
        if let Node::Leaf { symbol } = node {
            out.push(*symbol);
            node = &root;
        }
    }

    if !std::ptr::eq(node, &root) {
        return Err(Error::corrupt("payload ends inside a code"));
    }
    Ok(out)
}
