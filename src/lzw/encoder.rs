// LZW encoder.
//
// The dictionary is stored as trie transitions: a phrase is its prefix's
// code plus one byte, so extending the current match is a single lookup
// and no phrase bytes are ever copied.

use std::collections::HashMap;

use super::FIRST_CODE;

/// Incremental LZW encoder producing a token sequence.
///
/// # Example
/// ```
/// use unilzw::lzw::LzwEncoder;
///
/// let mut enc = LzwEncoder::new();
/// enc.extend(b"ABABAB");
/// assert_eq!(enc.finish(), vec![65, 66, 256, 256]);
/// ```
#[derive(Debug, Clone)]
pub struct LzwEncoder {
    /// (code of prefix phrase, next byte) -> code of extended phrase.
    trie: HashMap<(u64, u8), u64>,
    /// Next free code; equals the dictionary size.
    next_code: u64,
    /// Code of the current match, `None` before the first byte.
    current: Option<u64>,
    tokens: Vec<u64>,
}

impl Default for LzwEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LzwEncoder {
    pub fn new() -> Self {
        Self {
            trie: HashMap::new(),
            next_code: FIRST_CODE,
            current: None,
            tokens: Vec::new(),
        }
    }

    /// Create an encoder sized for roughly `input_len` bytes of input.
    pub fn with_capacity(input_len: usize) -> Self {
        let mut enc = Self::new();
        enc.trie.reserve(input_len / 2);
        enc.tokens.reserve(input_len / 2);
        enc
    }

    /// Feed one input byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        let Some(prefix) = self.current else {
            self.current = Some(u64::from(byte));
            return;
        };
        match self.trie.get(&(prefix, byte)) {
            Some(&code) => self.current = Some(code),
            None => {
                self.tokens.push(prefix);
                self.trie.insert((prefix, byte), self.next_code);
                self.next_code += 1;
                self.current = Some(u64::from(byte));
            }
        }
    }

    /// Feed a slice of input bytes.
    pub fn extend(&mut self, data: &[u8]) {
        for &byte in data {
            self.push(byte);
        }
    }

    /// Number of dictionary entries, literals included.
    pub fn dictionary_len(&self) -> u64 {
        self.next_code
    }

    /// Tokens emitted so far (the pending match is not included).
    pub fn tokens(&self) -> &[u64] {
        &self.tokens
    }

    /// Flush the pending match and return the full token sequence.
    pub fn finish(self) -> Vec<u64> {
        self.finish_with_len().0
    }

    /// Like [`finish`](Self::finish), also returning the final dictionary size.
    pub fn finish_with_len(mut self) -> (Vec<u64>, u64) {
        if let Some(code) = self.current.take() {
            self.tokens.push(code);
        }
        (self.tokens, self.next_code)
    }
}

/// Encode `data` into LZW tokens with a fresh dictionary.
pub fn encode(data: &[u8]) -> Vec<u64> {
    let mut enc = LzwEncoder::with_capacity(data.len());
    enc.extend(data);
    let (tokens, dictionary_len) = enc.finish_with_len();
    log::trace!(
        "lzw encode: {} bytes -> {} tokens, dictionary {} entries",
        data.len(),
        tokens.len(),
        dictionary_len
    );
    tokens
}
