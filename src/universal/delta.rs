// Elias-delta code.
//
// n with bit length L is written as gamma(L) followed by the L-1 low bits
// of n. The top bit of n is always 1 and is left implicit.

use super::{UniversalCode, bit_length, check_positive};
use super::gamma::EliasGamma;
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct EliasDelta;

impl UniversalCode for EliasDelta {
    fn encode(&self, n: u64, out: &mut BitWriter) -> Result<()> {
        check_positive(n)?;
        let len = bit_length(n);
        EliasGamma.encode(u64::from(len), out)?;
        out.push_bits(n, len - 1);
        Ok(())
    }

    fn decode(&self, input: &mut BitReader<'_>) -> Result<u64> {
        let len = EliasGamma.decode(input)?;
        if len > u64::from(u64::BITS) {
            return Err(Error::Overflow);
        }
        let len = len as u32;
        let low = input.read_bits(len - 1)?;
        Ok((1u64 << (len - 1)) | low)
    }
}
