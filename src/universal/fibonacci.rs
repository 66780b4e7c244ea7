// Fibonacci code.
//
// n is split greedily into non-consecutive Fibonacci numbers (1, 2, 3, 5,
// 8, ...). One bit per Fibonacci number is written, smallest first, up to
// the largest one used, then a terminating 1. The last used number and the
// terminator form the only `11` pair in the codeword.

use super::{UniversalCode, check_positive};
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};

/// Fibonacci numbers 1, 2, 3, 5, ... that fit in a u64 (F(2) through F(93)).
const FIB_LEN: usize = 92;

const FIBS: [u64; FIB_LEN] = {
    let mut t = [0u64; FIB_LEN];
    t[0] = 1;
    t[1] = 2;
    let mut i = 2;
    while i < FIB_LEN {
        t[i] = t[i - 1] + t[i - 2];
        i += 1;
    }
    t
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Fibonacci;

impl UniversalCode for Fibonacci {
    fn encode(&self, n: u64, out: &mut BitWriter) -> Result<()> {
        check_positive(n)?;
        // Index of the largest Fibonacci number <= n.
        let top = FIBS.partition_point(|&f| f <= n) - 1;

        let mut used = [false; FIB_LEN];
        let mut rest = n;
        for i in (0..=top).rev() {
            if FIBS[i] <= rest {
                used[i] = true;
                rest -= FIBS[i];
            }
        }
        debug_assert_eq!(rest, 0);

        for &bit in &used[..=top] {
            out.push_bit(bit);
        }
        out.push_bit(true);
        Ok(())
    }

    fn decode(&self, input: &mut BitReader<'_>) -> Result<u64> {
        let mut sum = 0u64;
        let mut prev = false;
        let mut index = 0usize;
        loop {
            let bit = input.read_bit()?;
            if bit && prev {
                return Ok(sum);
            }
            if bit {
                let fib = FIBS.get(index).ok_or(Error::Overflow)?;
                sum = sum.checked_add(*fib).ok_or(Error::Overflow)?;
            }
            prev = bit;
            index += 1;
        }
    }
}
