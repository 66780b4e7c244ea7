// Universal integer codes.
//
// Each scheme maps an integer n >= 1 to a prefix-free bit string with no
// fixed maximum length. A bitstream commits to one scheme, chosen by the
// caller; the scheme is not recorded in the stream.
//
// # Modules
//
// - `gamma`: unary length prefix + binary value
// - `delta`: gamma-coded length + value without its top bit
// - `omega`: recursive length groups + `0` stop bit
// - `fibonacci`: Zeckendorf bits terminated by `11`

pub mod delta;
pub mod fibonacci;
pub mod gamma;
pub mod omega;

use std::fmt;
use std::str::FromStr;

use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, Result};

pub use delta::EliasDelta;
pub use fibonacci::Fibonacci;
pub use gamma::EliasGamma;
pub use omega::EliasOmega;

// ---------------------------------------------------------------------------
// UniversalCode trait
// ---------------------------------------------------------------------------

/// A prefix-free code for integers n >= 1.
///
/// `decode(encode(n)) == n` must hold for every n the implementation accepts,
/// and no codeword may be a prefix of another.
pub trait UniversalCode: Send + Sync {
    /// Append the codeword for `n` to `out`.
    ///
    /// Returns `Error::InvalidArgument` for n = 0.
    fn encode(&self, n: u64, out: &mut BitWriter) -> Result<()>;

    /// Read one codeword from `input`.
    fn decode(&self, input: &mut BitReader<'_>) -> Result<u64>;
}

/// Number of significant bits in `n` (0 for 0).
#[inline]
pub(crate) fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

#[inline]
pub(crate) fn check_positive(n: u64) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidArgument { value: n });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Scheme selector
// ---------------------------------------------------------------------------

/// The universal code used to serialize a token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    Gamma,
    Delta,
    #[default]
    Omega,
    Fibonacci,
}

impl Scheme {
    /// Every supported scheme.
    pub const ALL: [Scheme; 4] = [
        Scheme::Gamma,
        Scheme::Delta,
        Scheme::Omega,
        Scheme::Fibonacci,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Gamma => "gamma",
            Scheme::Delta => "delta",
            Scheme::Omega => "omega",
            Scheme::Fibonacci => "fibonacci",
        }
    }

    /// The codec implementing this scheme.
    pub fn codec(self) -> &'static dyn UniversalCode {
        match self {
            Scheme::Gamma => &EliasGamma,
            Scheme::Delta => &EliasDelta,
            Scheme::Omega => &EliasOmega,
            Scheme::Fibonacci => &Fibonacci,
        }
    }

    #[inline]
    pub fn encode(self, n: u64, out: &mut BitWriter) -> Result<()> {
        self.codec().encode(n, out)
    }

    #[inline]
    pub fn decode(self, input: &mut BitReader<'_>) -> Result<u64> {
        self.codec().decode(input)
    }

    /// Codeword for `n` as a `'0'`/`'1'` string.
    pub fn encode_to_string(self, n: u64) -> Result<String> {
        let mut w = BitWriter::new();
        self.encode(n, &mut w)?;
        Ok(w.to_bit_string())
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `Scheme::from_str` for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown universal coding scheme '{0}' (expected gamma, delta, omega or fibonacci)")]
pub struct UnknownScheme(pub String);

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gamma" => Ok(Scheme::Gamma),
            "delta" => Ok(Scheme::Delta),
            "omega" => Ok(Scheme::Omega),
            "fibonacci" | "fib" => Ok(Scheme::Fibonacci),
            _ => Err(UnknownScheme(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[u64] = &[1, 2, 3, 100, 1000, 1_000_000];

    #[test]
    fn roundtrip_sample_values_all_schemes() {
        for scheme in Scheme::ALL {
            for &n in SAMPLES {
                let mut w = BitWriter::new();
                scheme.encode(n, &mut w).unwrap();
                let bytes = w.finish();
                let mut r = BitReader::new(&bytes);
                assert_eq!(scheme.decode(&mut r).unwrap(), n, "{scheme} {n}");
            }
        }
    }

    #[test]
    fn roundtrip_extremes_all_schemes() {
        for scheme in Scheme::ALL {
            for n in [u64::MAX, u64::MAX - 1, 1 << 63, (1 << 63) - 1, u32::MAX as u64] {
                let mut w = BitWriter::new();
                scheme.encode(n, &mut w).unwrap();
                let bytes = w.finish();
                let mut r = BitReader::new(&bytes);
                assert_eq!(scheme.decode(&mut r).unwrap(), n, "{scheme} {n}");
            }
        }
    }

    #[test]
    fn zero_is_rejected_by_every_scheme() {
        for scheme in Scheme::ALL {
            let mut w = BitWriter::new();
            assert_eq!(
                scheme.encode(0, &mut w),
                Err(Error::InvalidArgument { value: 0 })
            );
            assert_eq!(w.bit_len(), 0, "{scheme} wrote bits for a rejected value");
        }
    }

    #[test]
    fn codes_are_prefix_free() {
        for scheme in Scheme::ALL {
            let codes: Vec<String> = (1..=300u64)
                .map(|n| scheme.encode_to_string(n).unwrap())
                .collect();
            for (i, a) in codes.iter().enumerate() {
                for (j, b) in codes.iter().enumerate() {
                    if i != j {
                        assert!(
                            !b.starts_with(a.as_str()),
                            "{scheme}: code for {} ({a}) is a prefix of code for {} ({b})",
                            i + 1,
                            j + 1
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn concatenated_codes_decode_in_sequence() {
        for scheme in Scheme::ALL {
            let values: Vec<u64> = (1..=64).chain([500, 70_000, 1 << 40]).collect();
            let mut w = BitWriter::new();
            for &v in &values {
                scheme.encode(v, &mut w).unwrap();
            }
            let bytes = w.finish();
            let mut r = BitReader::new(&bytes);
            for &v in &values {
                assert_eq!(scheme.decode(&mut r).unwrap(), v, "{scheme}");
            }
        }
    }

    #[test]
    fn scheme_names_parse_back() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.name().parse::<Scheme>().unwrap(), scheme);
            assert_eq!(scheme.to_string(), scheme.name());
        }
        assert_eq!("FIB".parse::<Scheme>().unwrap(), Scheme::Fibonacci);
        assert!("rice".parse::<Scheme>().is_err());
        assert_eq!(Scheme::default(), Scheme::Omega);
    }
}
