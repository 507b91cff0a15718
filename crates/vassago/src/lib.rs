//! # Vassago
//!
//! A small byte-stream compression library with two independent,
//! composable lossless codecs: a Huffman entropy coder and an LZ77
//! sliding-window dictionary coder.
//!
//! Vassago is named after the third demon of the Ars Goetia, who
//! discovers things hidden and lost - just as decompression recovers
//! data folded away into a denser form.
//!
//! ## Codecs
//!
//! - **Huffman** ([`huffman_encode`] / [`huffman_decode`]): per-byte
//!   entropy coding with the code tree embedded in the stream, so decode
//!   needs no side information.
//! - **LZ77** ([`lz77_encode`] / [`lz77_decode`]): back-references into a
//!   sliding window, packed as fixed 3-byte triples. The `offset_bits`
//!   parameter splits a 16-bit budget between window size and maximum
//!   match length and must reach the decoder out of band.
//!
//! The codecs do not depend on each other. Callers can apply either
//! alone or compose them, LZ77 first and Huffman over its triple stream.
//!
//! ## Example
//!
//! ```
//! use vassago::{huffman_decode, huffman_encode, lz77_decode, lz77_encode};
//!
//! let data = b"to be or not to be, that is the question";
//!
//! let packed = lz77_encode(data, 8);
//! let entropy_packed = huffman_encode(&packed);
//!
//! let unpacked = huffman_decode(&entropy_packed).unwrap();
//! let restored = lz77_decode(&unpacked, 8).unwrap();
//! assert_eq!(restored, data);
//! ```

pub use vassago_core::{Algorithm, Codec, CompressionRatio, Compressor, Decompressor, Error, OffsetBits, Result};
pub use vassago_huffman::{huffman_decode, huffman_encode, HuffmanCodec, HuffmanCompressor, HuffmanDecompressor};
pub use vassago_lz77::{lz77_decode, lz77_encode, Lz77Codec, Lz77Compressor, Lz77Decompressor};

/// Bit-level primitives, exposed for advanced use.
pub mod bitio {
    pub use vassago_huffman::bitio::{BitCursor, BitWriter};
}

/// Triple-level access to LZ77 streams, exposed for advanced use.
pub mod triple {
    pub use vassago_lz77::triple::{Triple, TRIPLE_SIZE};
}
