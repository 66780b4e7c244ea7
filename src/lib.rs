//! unilzw: LZW compression with universal-code token serialization.
//!
//! The crate provides:
//! - An LZW dictionary coder (`lzw`)
//! - Elias-gamma, Elias-delta, Elias-omega and Fibonacci codes (`universal`)
//! - MSB-first bit packing (`bits`) and length-prefixed token framing (`stream`)
//! - The `compress` / `decompress` pipeline (`pipeline`)
//! - Byte statistics (`stats`) and file helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use unilzw::{Scheme, compress, decompress};
//!
//! let raw = b"TOBEORNOTTOBEORTOBEORNOT";
//! let packed = compress(raw, Scheme::Omega).unwrap().expect("non-empty input");
//! let restored = decompress(&packed, Scheme::Omega).unwrap();
//! assert_eq!(restored, raw);
//! ```
//!
//! The scheme is not stored in the compressed bytes; the decompressing side
//! must be told which one was used.

pub mod bits;
pub mod error;
pub mod io;
pub mod lzw;
pub mod pipeline;
pub mod stats;
pub mod stream;
pub mod universal;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use pipeline::{compress, compress_batch, compress_to_vec, decompress, decompress_batch};
pub use universal::{Scheme, UniversalCode};
