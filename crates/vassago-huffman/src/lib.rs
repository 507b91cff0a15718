//! # Vassago Huffman
//!
//! Huffman entropy coding over the 256-value byte alphabet.
//!
//! The compressed stream is self-describing. Bits are packed MSB-first
//! into bytes, laid out as:
//!
//! - 3-bit padding-size field (0-7)
//! - Preorder-serialized code tree: `0` introduces an internal node and
//!   recurses into its left then right child; `1` introduces a leaf and
//!   is followed by the 8-bit symbol
//! - Payload: each input byte's root-to-leaf code (left = 0, right = 1),
//!   in original order
//! - Zero bits up to the next byte boundary; their count is what the
//!   leading field records
//!
//! ## Example
//!
//! ```
//! use vassago_huffman::{huffman_decode, huffman_encode};
//!
//! let encoded = huffman_encode(b"abracadabra");
//! let decoded = huffman_decode(&encoded).unwrap();
//! assert_eq!(decoded, b"abracadabra");
//! ```

pub mod bitio;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod tree;

pub use bitio::{BitCursor, BitWriter};
pub use codec::{HuffmanCodec, HuffmanCompressor, HuffmanDecompressor};
pub use decode::huffman_decode;
pub use encode::huffman_encode;
pub use tree::{CodeTable, Node};

/// Width of the padding-size field at the front of every stream.
pub const PAD_FIELD_BITS: u8 = 3;
