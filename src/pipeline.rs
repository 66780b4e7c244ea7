// Compression pipeline: LZW tokens framed by the stream layer.
//
//   compress:   bytes -> lzw::encode -> stream::serialize -> bytes
//   decompress: bytes -> stream::deserialize -> lzw::decode -> bytes
//
// Every call builds its own dictionary and bit buffers, so independent
// calls can run concurrently without coordination.

use crate::error::Result;
use crate::lzw;
use crate::stream;
use crate::universal::Scheme;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Single buffer
// ---------------------------------------------------------------------------

/// Compress `raw` with `scheme`.
///
/// Returns `Ok(None)` for empty input: there is nothing to encode and no
/// header is written. The scheme is not recorded in the output; pass the
/// same one to [`decompress`].
///
/// # Example
/// ```
/// use unilzw::{Scheme, compress, decompress};
///
/// let packed = compress(b"abababab", Scheme::Delta).unwrap().unwrap();
/// assert_eq!(decompress(&packed, Scheme::Delta).unwrap(), b"abababab");
/// assert!(compress(b"", Scheme::Delta).unwrap().is_none());
/// ```
pub fn compress(raw: &[u8], scheme: Scheme) -> Result<Option<Vec<u8>>> {
    if raw.is_empty() {
        log::debug!("compress: empty input, nothing to do");
        return Ok(None);
    }
    let tokens = lzw::encode(raw);
    let packed = stream::serialize(&tokens, scheme)?;
    log::debug!(
        "compress [{scheme}]: {} bytes -> {} tokens -> {} bytes",
        raw.len(),
        tokens.len(),
        packed.len()
    );
    Ok(Some(packed))
}

/// Like [`compress`], with empty input mapped to an empty buffer.
pub fn compress_to_vec(raw: &[u8], scheme: Scheme) -> Result<Vec<u8>> {
    Ok(compress(raw, scheme)?.unwrap_or_default())
}

/// Decompress a buffer produced by [`compress`] with the same `scheme`.
///
/// An empty buffer decodes to an empty buffer. A wrong scheme or damaged
/// input fails with an error; no partial output is returned.
pub fn decompress(compressed: &[u8], scheme: Scheme) -> Result<Vec<u8>> {
    if compressed.is_empty() {
        return Ok(Vec::new());
    }
    let tokens = stream::deserialize(compressed, scheme)?;
    let raw = lzw::decode(&tokens)?;
    log::debug!(
        "decompress [{scheme}]: {} bytes -> {} tokens -> {} bytes",
        compressed.len(),
        tokens.len(),
        raw.len()
    );
    Ok(raw)
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

/// Compress independent buffers. Results are in input order.
///
/// With the `parallel` feature the buffers are spread over the rayon pool.
pub fn compress_batch<B: AsRef<[u8]> + Sync>(
    inputs: &[B],
    scheme: Scheme,
) -> Vec<Result<Vec<u8>>> {
    #[cfg(feature = "parallel")]
    let iter = inputs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = inputs.iter();

    iter.map(|raw| compress_to_vec(raw.as_ref(), scheme))
        .collect()
}

/// Decompress independent buffers. Results are in input order.
pub fn decompress_batch<B: AsRef<[u8]> + Sync>(
    inputs: &[B],
    scheme: Scheme,
) -> Vec<Result<Vec<u8>>> {
    #[cfg(feature = "parallel")]
    let iter = inputs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = inputs.iter();

    iter.map(|packed| decompress(packed.as_ref(), scheme))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
