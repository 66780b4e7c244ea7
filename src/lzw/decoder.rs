// LZW decoder.
//
// Each dictionary entry stores a link to its prefix entry, its last byte,
// its first byte and its length. A phrase is written by walking the links
// backwards into a pre-sized region of the output.

use std::cmp::Ordering;

use super::FIRST_CODE;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
struct Entry {
    /// Index of the entry one byte shorter; `None` for literals.
    prefix: Option<usize>,
    /// Last byte of the phrase.
    byte: u8,
    /// First byte of the phrase.
    first: u8,
    len: usize,
}

/// Incremental LZW decoder.
#[derive(Debug, Clone)]
pub struct LzwDecoder {
    table: Vec<Entry>,
    /// Code of the phrase produced by the previous token.
    prev: Option<usize>,
}

impl Default for LzwDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LzwDecoder {
    pub fn new() -> Self {
        let mut table = Vec::with_capacity(FIRST_CODE as usize * 2);
        table.extend((0..=u8::MAX).map(|b| Entry {
            prefix: None,
            byte: b,
            first: b,
            len: 1,
        }));
        Self { table, prev: None }
    }

    /// Number of dictionary entries, literals included.
    pub fn dictionary_len(&self) -> u64 {
        self.table.len() as u64
    }

    /// Decode one token, appending its phrase to `out`.
    ///
    /// On error `out` is left as it was before the call.
    pub fn decode_token(&mut self, token: u64, out: &mut Vec<u8>) -> Result<()> {
        let dictionary_len = self.dictionary_len();

        let Some(prev) = self.prev else {
            if token >= FIRST_CODE {
                return Err(Error::InvalidCode {
                    code: token,
                    dictionary_len,
                });
            }
            out.push(token as u8);
            self.prev = Some(token as usize);
            return Ok(());
        };

        let first = match token.cmp(&dictionary_len) {
            // Known code.
            Ordering::Less => {
                let code = token as usize;
                self.write_phrase(code, out);
                self.table[code].first
            }
            // The code about to be defined: previous phrase plus its own
            // first byte.
            Ordering::Equal => {
                let first = self.table[prev].first;
                self.write_phrase(prev, out);
                out.push(first);
                first
            }
            Ordering::Greater => {
                return Err(Error::InvalidCode {
                    code: token,
                    dictionary_len,
                });
            }
        };

        let prev_entry = self.table[prev];
        self.table.push(Entry {
            prefix: Some(prev),
            byte: first,
            first: prev_entry.first,
            len: prev_entry.len + 1,
        });
        self.prev = Some(token as usize);
        Ok(())
    }

    fn write_phrase(&self, code: usize, out: &mut Vec<u8>) {
        let start = out.len();
        out.resize(start + self.table[code].len, 0);
        let mut cursor = code;
        for slot in out[start..].iter_mut().rev() {
            let entry = &self.table[cursor];
            *slot = entry.byte;
            if let Some(prefix) = entry.prefix {
                cursor = prefix;
            }
        }
    }
}

/// Decode a whole token sequence with a fresh dictionary.
pub fn decode(tokens: &[u64]) -> Result<Vec<u8>> {
    let mut dec = LzwDecoder::new();
    let mut out = Vec::with_capacity(tokens.len() * 2);
    for &token in tokens {
        dec.decode_token(token, &mut out)?;
    }
    log::trace!(
        "lzw decode: {} tokens -> {} bytes, dictionary {} entries",
        tokens.len(),
        out.len(),
        dec.dictionary_len()
    );
    Ok(out)
}
