// Error type shared by the codec, packer, dictionary and stream layers.
//
// Every failure is detected where it happens and returned to the caller.
// A dictionary-coded stream cannot be resynchronized, so decoding stops at
// the first error.

/// Errors produced while compressing or decompressing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A universal code was asked to encode a value outside its domain (n < 1).
    #[error("invalid argument: universal codes encode integers >= 1, got {value}")]
    InvalidArgument { value: u64 },

    /// An LZW token that is neither a known code nor the next assignable one.
    #[error("invalid LZW code {code} (dictionary holds {dictionary_len} entries)")]
    InvalidCode { code: u64, dictionary_len: u64 },

    /// The bit supply ran out in the middle of a codeword.
    #[error("truncated stream: needed {needed} more bit(s), {remaining} remaining")]
    TruncatedStream { needed: u64, remaining: u64 },

    /// The stream header does not describe a valid token count.
    #[error("corrupt header: decoded value {value}, expected >= 1")]
    CorruptHeader { value: u64 },

    /// A decoded value does not fit in 64 bits.
    #[error("integer overflow while decoding a universal code")]
    Overflow,

    /// Bits left after the last token that are not zero padding.
    #[error("trailing data: {bits} unread bit(s) after the last token are not padding")]
    TrailingData { bits: u64 },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
