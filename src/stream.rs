// Token stream framing.
//
// Layout, all in one universal code scheme:
//
//   code(count + 1) code(token_0 + 1) ... code(token_{count-1} + 1) [0-pad]
//
// Tokens are shifted by one because universal codes start at 1. The header
// tells the reader exactly how many codes follow, so the zero padding that
// fills the last byte is never decoded as a token.

use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::universal::Scheme;

/// Serialize `tokens` under `scheme` into a padded byte buffer.
pub fn serialize(tokens: &[u64], scheme: Scheme) -> Result<Vec<u8>> {
    // Most LZW tokens fit in well under 32 bits of code.
    let mut out = BitWriter::with_capacity((tokens.len() + 1) * 24);

    let header = shift_up(tokens.len() as u64)?;
    scheme.encode(header, &mut out)?;
    for &token in tokens {
        scheme.encode(shift_up(token)?, &mut out)?;
    }

    log::trace!(
        "stream: {} tokens, {} bits under {scheme}",
        tokens.len(),
        out.bit_len()
    );
    Ok(out.finish())
}

/// Parse a buffer produced by [`serialize`] with the same `scheme`.
///
/// Errors:
/// - `CorruptHeader` if the header is below 1;
/// - `TruncatedStream` if the data ends inside a code, or the header
///   promises more tokens than there are bits left;
/// - `TrailingData` if anything other than zero padding follows the last
///   token, which usually means the wrong scheme was supplied.
pub fn deserialize(data: &[u8], scheme: Scheme) -> Result<Vec<u64>> {
    let mut input = BitReader::new(data);

    let header = scheme.decode(&mut input)?;
    if header < 1 {
        return Err(Error::CorruptHeader { value: header });
    }
    let count = header - 1;

    // Every code is at least one bit long.
    let remaining = input.remaining();
    if count > remaining {
        return Err(Error::TruncatedStream {
            needed: count,
            remaining,
        });
    }
    log::trace!("stream: header announces {count} tokens under {scheme}");

    let mut tokens = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let value = scheme.decode(&mut input)?;
        tokens.push(value - 1);
    }

    if !input.at_padding() {
        return Err(Error::TrailingData {
            bits: input.remaining(),
        });
    }
    Ok(tokens)
}

#[inline]
fn shift_up(value: u64) -> Result<u64> {
    value.checked_add(1).ok_or(Error::Overflow)
}
