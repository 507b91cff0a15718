//! Codec wrappers for the LZ77 algorithm.

use vassago_core::{Algorithm, Codec, Compressor, Decompressor, Error, OffsetBits, Result};

use crate::compress::lz77_encode;
use crate::decompress::lz77_decode;
use crate::triple::TRIPLE_SIZE;

// ============================================================================
// Compressor
// ============================================================================

/// LZ77 compressor.
#[derive(Debug, Clone, Default)]
pub struct Lz77Compressor {
    offset_bits: OffsetBits,
}

impl Lz77Compressor {
    /// Create a new LZ77 compressor with the default 8-bit offset width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a validated offset width.
    pub fn with_offset_bits(bits: u8) -> Result<Self> {
        Ok(Self {
            offset_bits: OffsetBits::new(bits)?,
        })
    }

    /// Get the configured offset width.
    pub fn offset_bits(&self) -> OffsetBits {
        self.offset_bits
    }
}

impl Compressor for Lz77Compressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz77
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(lz77_encode(input, self.offset_bits.get()))
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let compressed = lz77_encode(input, self.offset_bits.get());
        if compressed.len() > output.len() {
            return Err(Error::buffer_too_small(compressed.len(), output.len()));
        }
        output[..compressed.len()].copy_from_slice(&compressed);
        Ok(compressed.len())
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        // Worst case: every input byte rides its own literal triple.
        input_len * TRIPLE_SIZE
    }
}

// ============================================================================
// Decompressor
// ============================================================================

/// LZ77 decompressor.
#[derive(Debug, Clone, Default)]
pub struct Lz77Decompressor {
    offset_bits: OffsetBits,
}

impl Lz77Decompressor {
    /// Create a new LZ77 decompressor with the default 8-bit offset width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a validated offset width. Must match the width the
    /// stream was encoded with.
    pub fn with_offset_bits(bits: u8) -> Result<Self> {
        Ok(Self {
            offset_bits: OffsetBits::new(bits)?,
        })
    }

    /// Get the configured offset width.
    pub fn offset_bits(&self) -> OffsetBits {
        self.offset_bits
    }
}

impl Decompressor for Lz77Decompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz77
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        lz77_decode(input, self.offset_bits.get())
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let decompressed = lz77_decode(input, self.offset_bits.get())?;
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

/// Combined LZ77 codec.
#[derive(Debug, Clone, Default)]
pub struct Lz77Codec {
    offset_bits: OffsetBits,
}

impl Lz77Codec {
    /// Create with a validated offset width.
    pub fn with_offset_bits(bits: u8) -> Result<Self> {
        Ok(Self {
            offset_bits: OffsetBits::new(bits)?,
        })
    }

    /// Get the configured offset width.
    pub fn offset_bits(&self) -> OffsetBits {
        self.offset_bits
    }
}

impl Compressor for Lz77Codec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz77
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(lz77_encode(input, self.offset_bits.get()))
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let compressed = lz77_encode(input, self.offset_bits.get());
        if compressed.len() > output.len() {
            return Err(Error::buffer_too_small(compressed.len(), output.len()));
        }
        output[..compressed.len()].copy_from_slice(&compressed);
        Ok(compressed.len())
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        input_len * TRIPLE_SIZE
    }
}

impl Decompressor for Lz77Codec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz77
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        lz77_decode(input, self.offset_bits.get())
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let decompressed = lz77_decode(input, self.offset_bits.get())?;
        if decompressed.len() > output.len() {
            return Err(Error::buffer_too_small(decompressed.len(), output.len()));
        }
        output[..decompressed.len()].copy_from_slice(&decompressed);
        Ok(decompressed.len())
    }
}

impl Codec for Lz77Codec {
    fn new() -> Self {
        Lz77Codec::default()
    }
}
