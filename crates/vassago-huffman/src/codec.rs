//! Codec wrappers for the Huffman algorithm.

use vassago_core::{Algorithm, Codec, Compressor, Decompressor, Error, Result};

use crate::decode::huffman_decode;
use crate::encode::huffman_encode;

/// Ceiling on the non-payload part of a stream, in bytes: the 3-bit
/// padding field, 255 internal-node bits, and 256 leaves at 9 bits each
/// come to 2562 bits. The payload never exceeds 8 bits per input byte,
/// because the derived code is optimal and the flat 8-bit code is always
/// available.
const HEADER_AND_TREE_MAX: usize = 321;

// ============================================================================
// Compressor
// ============================================================================

/// Huffman compressor.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCompressor;

impl HuffmanCompressor {
    /// Create a new Huffman compressor.
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for HuffmanCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(huffman_encode(input))
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let compressed = huffman_encode(input);
        if compressed.len() > output.len() {
            return Err(Error::buffer_too_small(compressed.len(), output.len()));
        }
        output[..compressed.len()].copy_from_slice(&compressed);
        Ok(compressed.len())
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        input_len + HEADER_AND_TREE_MAX
    }
}

// ============================================================================
// Decompressor
// ============================================================================

/// Huffman decompressor.
#[derive(Debug, Clone, Default)]
pub struct HuffmanDecompressor;

impl HuffmanDecompressor {
    /// Create a new Huffman decompressor.
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for HuffmanDecompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        huffman_decode(input)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let decompressed = huffman_decode(input)?;
        if decompressed.len() > output.len() {
            return Err(Error::buffer_too_small(decompressed.len(), output.len()));
        }
        output[..decompressed.len()].copy_from_slice(&decompressed);
        Ok(decompressed.len())
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Combined Huffman codec.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec;

impl Compressor for HuffmanCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(huffman_encode(input))
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        HuffmanCompressor.compress_to(input, output)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        input_len + HEADER_AND_TREE_MAX
    }
}

impl Decompressor for HuffmanCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Huffman
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        huffman_decode(input)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        HuffmanDecompressor.decompress_to(input, output)
    }
}

impl Codec for HuffmanCodec {
    fn new() -> Self {
        HuffmanCodec
    }
}
