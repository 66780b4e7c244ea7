// Bit/byte packing, most-significant bit first.
//
// `BitWriter` accumulates bits into bytes and zero-pads the final byte.
// `BitReader` hands bits back one at a time from a byte slice. Neither side
// knows where codewords start or end; the stream layer decides how many
// codes to read, so pad bits are never interpreted.

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Append-only MSB-first bit sink.
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    bytes: Vec<u8>,
    /// Partial byte, filled from bit 7 downwards.
    acc: u8,
    /// Number of bits currently held in `acc` (0..=7).
    filled: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for roughly `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            acc: 0,
            filled: 0,
        }
    }

    #[inline]
    pub fn push_bit(&mut self, bit: bool) {
        if bit {
            self.acc |= 0x80 >> self.filled;
        }
        self.filled += 1;
        if self.filled == 8 {
            self.bytes.push(self.acc);
            self.acc = 0;
            self.filled = 0;
        }
    }

    /// Append the low `count` bits of `value`, most significant first.
    #[inline]
    pub fn push_bits(&mut self, value: u64, count: u32) {
        debug_assert!(count <= 64);
        for shift in (0..count).rev() {
            self.push_bit((value >> shift) & 1 == 1);
        }
    }

    /// Append `count` zero bits.
    #[inline]
    pub fn push_zeros(&mut self, count: u32) {
        for _ in 0..count {
            self.push_bit(false);
        }
    }

    /// Number of bits written so far (excluding padding).
    pub fn bit_len(&self) -> u64 {
        self.bytes.len() as u64 * 8 + u64::from(self.filled)
    }

    /// Render the written bits as a `'0'`/`'1'` string.
    pub fn to_bit_string(&self) -> String {
        let mut s = String::with_capacity(self.bit_len() as usize);
        for &byte in &self.bytes {
            for shift in (0..8).rev() {
                s.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
            }
        }
        for i in 0..self.filled {
            s.push(if self.acc & (0x80 >> i) != 0 { '1' } else { '0' });
        }
        s
    }

    /// Zero-pad to a whole byte and return the packed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.filled > 0 {
            self.bytes.push(self.acc);
        }
        self.bytes
    }
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// MSB-first bit source over a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Absolute bit position of the next bit to read.
    pos: u64,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Total number of bits in the underlying buffer.
    #[inline]
    pub fn bit_len(&self) -> u64 {
        self.data.len() as u64 * 8
    }

    /// Number of bits consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Number of bits not yet consumed.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.bit_len() - self.pos
    }

    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.pos >= self.bit_len() {
            return Err(Error::TruncatedStream {
                needed: 1,
                remaining: 0,
            });
        }
        let byte = self.data[(self.pos / 8) as usize];
        let bit = (byte >> (7 - (self.pos % 8))) & 1 == 1;
        self.pos += 1;
        Ok(bit)
    }

    /// Read `count` bits (at most 64) as a big-endian unsigned integer.
    ///
    /// Fails without consuming anything if fewer than `count` bits remain.
    pub fn read_bits(&mut self, count: u32) -> Result<u64> {
        if count > 64 {
            return Err(Error::Overflow);
        }
        let remaining = self.remaining();
        if remaining < u64::from(count) {
            return Err(Error::TruncatedStream {
                needed: u64::from(count),
                remaining,
            });
        }
        let mut value = 0u64;
        for _ in 0..count {
            value = (value << 1) | u64::from(self.read_bit()?);
        }
        Ok(value)
    }

    /// True when every unread bit is zero and fewer than 8 remain, which is
    /// exactly what `BitWriter::finish` leaves behind.
    pub fn at_padding(&self) -> bool {
        let remaining = self.remaining();
        if remaining >= 8 {
            return false;
        }
        if remaining == 0 {
            return true;
        }
        let last = self.data[self.data.len() - 1];
        let mask = (1u16 << remaining) as u8;
        last & mask.wrapping_sub(1) == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
