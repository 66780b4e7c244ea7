// LZW dictionary coder.
//
// Encoder and decoder both start from the 256 single-byte phrases and add
// one entry per step, so the decoder rebuilds the encoder's dictionary from
// the token stream alone. Nothing is ever evicted; the dictionary lives for
// one call.
//
// - `encoder` (LzwEncoder): bytes -> tokens, trie keyed by (prefix, byte)
// - `decoder` (LzwDecoder): tokens -> bytes, arena of prefix links

pub mod decoder;
pub mod encoder;

pub use decoder::{LzwDecoder, decode};
pub use encoder::{LzwEncoder, encode};

/// First code assigned to a multi-byte phrase. Codes below it are literals.
pub const FIRST_CODE: u64 = 256;
