// Elias-omega code.
//
// Groups are built from n downwards: write binary(n), then binary(len - 1)
// in front of it, and so on until the value reaches 1. A single `0` bit
// closes the code. Every group starts with a 1, so the decoder can tell a
// group from the stop bit.

use super::{UniversalCode, bit_length, check_positive};
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};

/// Upper bound on groups for a u64: 64 bits -> 63 -> 5 -> 2 is four.
const MAX_GROUPS: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct EliasOmega;

impl UniversalCode for EliasOmega {
    fn encode(&self, n: u64, out: &mut BitWriter) -> Result<()> {
        check_positive(n)?;
        let mut groups = [(0u64, 0u32); MAX_GROUPS];
        let mut count = 0;
        let mut current = n;
        while current > 1 {
            let len = bit_length(current);
            groups[count] = (current, len);
            count += 1;
            current = u64::from(len - 1);
        }
        for &(value, len) in groups[..count].iter().rev() {
            out.push_bits(value, len);
        }
        out.push_bit(false);
        Ok(())
    }

    fn decode(&self, input: &mut BitReader<'_>) -> Result<u64> {
        let mut acc = 1u64;
        // The 1 just read is the top bit of the next group of acc + 1 bits.
        while input.read_bit()? {
            if acc >= u64::from(u64::BITS) {
                return Err(Error::Overflow);
            }
            let low_bits = acc as u32;
            let low = input.read_bits(low_bits)?;
            acc = (1u64 << low_bits) | low;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_str(n: u64) -> String {
        let mut w = BitWriter::new();
        EliasOmega.encode(n, &mut w).unwrap();
        w.to_bit_string()
    }

    fn decode_bits(bits: &str) -> Result<u64> {
        let mut w = BitWriter::new();
        for c in bits.chars() {
            w.push_bit(c == '1');
        }
        let bytes = w.finish();
        EliasOmega.decode(&mut BitReader::new(&bytes))
    }

    #[test]
    fn known_codewords() {
        assert_eq!(encode_str(1), "0");
        assert_eq!(encode_str(2), "100");
        assert_eq!(encode_str(3), "110");
        assert_eq!(encode_str(4), "101000");
        assert_eq!(encode_str(7), "101110");
        assert_eq!(encode_str(8), "1110000");
        assert_eq!(encode_str(16), "10100100000");
        assert_eq!(encode_str(100), "1011011001000");
    }

    #[test]
    fn decode_known() {
        assert_eq!(decode_bits("0").unwrap(), 1);
        assert_eq!(decode_bits("101000").unwrap(), 4);
        assert_eq!(decode_bits("1011011001000").unwrap(), 100);
    }

    #[test]
    fn u64_max_uses_four_groups() {
        // 10 + 101 + 111111 + 64 ones + stop bit
        let code = encode_str(u64::MAX);
        assert_eq!(code.len(), 2 + 3 + 6 + 64 + 1);
        assert!(code.starts_with("10101111111"));
        assert!(code.ends_with('0'));
    }

    #[test]
    fn oversized_group_overflows() {
        // 2, then 7, then 255: a further group would need 256 bits.
        let bits = ["10", "111", "11111111", "1"].concat();
        assert_eq!(decode_bits(&bits), Err(Error::Overflow));
    }

    #[test]
    fn truncated_group() {
        // Groups 3 and 15 fit in the byte; the 16-bit group does not.
        let data = [0xFFu8];
        let mut r = BitReader::new(&data);
        assert!(matches!(
            EliasOmega.decode(&mut r),
            Err(Error::TruncatedStream { .. })
        ));
    }
}
