//! # Vassago LZ77
//!
//! LZ77 dictionary coding over a sliding window of previously seen bytes.
//!
//! The compressed stream is a sequence of fixed 3-byte triples:
//!
//! - A 16-bit big-endian word holding the back-reference offset in its
//!   high `offset_bits` bits and the match length in the low
//!   `16 - offset_bits` bits
//! - One literal byte, appended after the copied run
//!
//! `offset_bits` splits the 16-bit budget between window size
//! (`2^offset_bits - 1`) and maximum match length
//! (`2^(16 - offset_bits) - 1`). The stream does not record it; encoder
//! and decoder must agree on the value out of band.
//!
//! ## Example
//!
//! ```
//! use vassago_lz77::{lz77_decode, lz77_encode};
//!
//! let encoded = lz77_encode(b"blah blah blah", 8);
//! let decoded = lz77_decode(&encoded, 8).unwrap();
//! assert_eq!(decoded, b"blah blah blah");
//! ```

pub mod codec;
pub mod compress;
pub mod decompress;
pub mod triple;
pub mod window;

pub use codec::{Lz77Codec, Lz77Compressor, Lz77Decompressor};
pub use compress::lz77_encode;
pub use decompress::lz77_decode;
pub use triple::{Triple, TRIPLE_SIZE};
pub use window::WindowIndex;
