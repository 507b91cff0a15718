//! # Vassago Core
//!
//! Core traits, types, and errors for the Vassago compression library.
//!
//! Vassago is named after the third demon of the Ars Goetia, who discovers
//! things hidden and lost - just as decompression recovers data folded away
//! into a denser form.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! Every operation in this library consumes a fully materialized input
//! buffer and returns a fully materialized output buffer. There is no
//! streaming tier: calls share no state, and each owns its working
//! structures for exactly the duration of the call.
//!
//! ## Example
//!
//! ```ignore
//! use vassago_core::Codec;
//! use vassago_huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::new();
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed)?;
//! ```

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Codec, Compressor, Decompressor};
pub use types::{Algorithm, CompressionRatio, OffsetBits};
