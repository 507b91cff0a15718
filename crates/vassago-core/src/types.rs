//! Core type definitions for codec operations.

use crate::error::{Error, Result};

/// Supported compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Huffman entropy coding with an embedded preorder tree.
    Huffman,
    /// LZ77 dictionary coding with fixed 3-byte back-reference triples.
    Lz77,
}

impl Algorithm {
    /// Get algorithm name as string.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Huffman => "huffman",
            Algorithm::Lz77 => "lz77",
        }
    }

    /// Check if the decoder needs parameters conveyed out of band.
    ///
    /// Huffman streams are self-describing (the tree travels in the
    /// stream); LZ77 streams are not (the decoder must be given the same
    /// `offset_bits` the encoder used).
    pub fn is_self_describing(self) -> bool {
        matches!(self, Algorithm::Huffman)
    }
}

/// Number of bits an LZ77 triple spends on the back-reference offset.
///
/// The offset and length fields of a triple share a 16-bit word, so this
/// single parameter fixes both the window size (`2^bits - 1`) and the
/// longest representable match (`2^(16 - bits) - 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetBits(u8);

impl OffsetBits {
    /// Smallest valid width: a one-byte window.
    pub const MIN: u8 = 1;
    /// Largest valid width: one bit left for the match length.
    pub const MAX: u8 = 15;

    /// Validate a width, rejecting values outside `1..=15`.
    pub fn new(bits: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&bits) {
            Ok(OffsetBits(bits))
        } else {
            Err(Error::invalid_parameter(
                "offset_bits",
                bits as u32,
                Self::MIN as u32,
                Self::MAX as u32,
            ))
        }
    }

    /// Get the raw bit width.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Largest distance a back-reference can cover.
    pub fn max_offset(self) -> usize {
        (1 << self.0) - 1
    }

    /// Largest match length a triple can record.
    pub fn max_match_len(self) -> usize {
        (1 << (16 - self.0)) - 1
    }
}

impl Default for OffsetBits {
    /// An even 8/8 split: 255-byte window, 255-byte matches.
    fn default() -> Self {
        OffsetBits(8)
    }
}

/// Compression ratio metrics.
#[derive(Debug, Clone, Copy)]
pub struct CompressionRatio {
    /// Original uncompressed size in bytes.
    pub original_size: usize,
    /// Compressed size in bytes.
    pub compressed_size: usize,
}

impl CompressionRatio {
    /// Create new ratio from sizes.
    pub fn new(original: usize, compressed: usize) -> Self {
        CompressionRatio {
            original_size: original,
            compressed_size: compressed,
        }
    }

    /// Calculate ratio (original / compressed).
    /// Higher is better (more compression).
    pub fn ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.compressed_size as f64
    }

    /// Calculate space savings as percentage (0-100).
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - (self.compressed_size as f64 / self.original_size as f64)) * 100.0
    }

    /// Check if compression was effective (saved space).
    pub fn is_effective(&self) -> bool {
        self.compressed_size < self.original_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_bits_range() {
        assert!(OffsetBits::new(0).is_err());
        assert!(OffsetBits::new(16).is_err());
        for bits in 1..=15u8 {
            assert_eq!(OffsetBits::new(bits).unwrap().get(), bits);
        }
    }

    #[test]
    fn test_offset_bits_limits() {
        let even = OffsetBits::new(8).unwrap();
        assert_eq!(even.max_offset(), 255);
        assert_eq!(even.max_match_len(), 255);

        let wide = OffsetBits::new(15).unwrap();
        assert_eq!(wide.max_offset(), 32767);
        assert_eq!(wide.max_match_len(), 1);

        let narrow = OffsetBits::new(1).unwrap();
        assert_eq!(narrow.max_offset(), 1);
        assert_eq!(narrow.max_match_len(), 32767);
    }

    #[test]
    fn test_offset_bits_default() {
        assert_eq!(OffsetBits::default().get(), 8);
    }

    #[test]
    fn test_ratio() {
        let ratio = CompressionRatio::new(1000, 250);
        assert_eq!(ratio.ratio(), 4.0);
        assert_eq!(ratio.savings_percent(), 75.0);
        assert!(ratio.is_effective());
    }

    #[test]
    fn test_ratio_degenerate() {
        assert_eq!(CompressionRatio::new(0, 0).savings_percent(), 0.0);
        assert_eq!(CompressionRatio::new(100, 0).ratio(), 0.0);
        assert!(!CompressionRatio::new(10, 30).is_effective());
    }
}
