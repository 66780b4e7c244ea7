// Elias-gamma code.
//
// n with bit length L is written as L-1 zero bits followed by the L bits of
// n. The leading 1 of n terminates the unary length prefix.

use super::{UniversalCode, bit_length, check_positive};
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct EliasGamma;

impl UniversalCode for EliasGamma {
    fn encode(&self, n: u64, out: &mut BitWriter) -> Result<()> {
        check_positive(n)?;
        let len = bit_length(n);
        out.push_zeros(len - 1);
        out.push_bits(n, len);
        Ok(())
    }

    fn decode(&self, input: &mut BitReader<'_>) -> Result<u64> {
        let mut zeros = 0u32;
        while !input.read_bit()? {
            zeros += 1;
            if zeros >= u64::BITS {
                return Err(Error::Overflow);
            }
        }
        let low = input.read_bits(zeros)?;
        Ok((1u64 << zeros) | low)
    }
}
