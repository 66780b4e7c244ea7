// File-level helpers around the in-memory pipeline.
//
// `compress_file()` and `decompress_file()` read the whole input, run the
// pipeline and write the result through a `BufWriter`. With the `file-io`
// feature a SHA-256 of the raw data is returned as well, so a round trip
// can be confirmed by comparing digests.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "file-io")]
use sha2::Digest;

use crate::error::Error;
use crate::pipeline;
use crate::universal::Scheme;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `compress_file()`.
#[derive(Debug, Clone)]
pub struct CompressStats {
    /// Raw input size in bytes.
    pub input_size: u64,
    /// Compressed output size in bytes.
    pub output_size: u64,
    pub scheme: Scheme,
    /// SHA-256 of the raw input (if `file-io` feature is enabled).
    pub input_sha256: Option<[u8; 32]>,
}

/// Statistics returned by `decompress_file()`.
#[derive(Debug, Clone)]
pub struct DecompressStats {
    /// Compressed input size in bytes.
    pub input_size: u64,
    /// Reconstructed output size in bytes.
    pub output_size: u64,
    pub scheme: Scheme,
    /// SHA-256 of the reconstructed output (if `file-io` feature is enabled).
    pub output_sha256: Option<[u8; 32]>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file operations.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// I/O error (file open, read, write).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Compression or decompression error.
    #[error("codec error: {0}")]
    Codec(#[from] Error),
}

const BUF_SIZE: usize = 64 * 1024; // 64 KiB

// ---------------------------------------------------------------------------
// compress_file / decompress_file
// ---------------------------------------------------------------------------

/// Compress `input_path` into `output_path`.
///
/// Returns `Ok(None)` for an empty input; the output file is not created.
pub fn compress_file(
    input_path: &Path,
    output_path: &Path,
    scheme: Scheme,
) -> Result<Option<CompressStats>, IoError> {
    let raw = std::fs::read(input_path)?;
    let Some(packed) = pipeline::compress(&raw, scheme)? else {
        return Ok(None);
    };
    write_all(output_path, &packed)?;

    Ok(Some(CompressStats {
        input_size: raw.len() as u64,
        output_size: packed.len() as u64,
        scheme,
        input_sha256: sha256(&raw),
    }))
}

/// Decompress `input_path` into `output_path` using `scheme`.
///
/// Nothing is written if decoding fails.
pub fn decompress_file(
    input_path: &Path,
    output_path: &Path,
    scheme: Scheme,
) -> Result<DecompressStats, IoError> {
    let packed = std::fs::read(input_path)?;
    let raw = pipeline::decompress(&packed, scheme)?;
    write_all(output_path, &raw)?;

    Ok(DecompressStats {
        input_size: packed.len() as u64,
        output_size: raw.len() as u64,
        scheme,
        output_sha256: sha256(&raw),
    })
}

/// Whether two files hold identical bytes.
pub fn files_identical(a: &Path, b: &Path) -> io::Result<bool> {
    let fa = File::open(a)?;
    let fb = File::open(b)?;
    if fa.metadata()?.len() != fb.metadata()?.len() {
        return Ok(false);
    }

    let mut ra = BufReader::with_capacity(BUF_SIZE, fa);
    let mut rb = BufReader::with_capacity(BUF_SIZE, fb);
    let mut buf_a = vec![0u8; BUF_SIZE];
    let mut buf_b = vec![0u8; BUF_SIZE];
    loop {
        let n = read_full(&mut ra, &mut buf_a)?;
        let m = read_full(&mut rb, &mut buf_b)?;
        if n != m || buf_a[..n] != buf_b[..m] {
            return Ok(false);
        }
        if n == 0 {
            return Ok(true);
        }
    }
}

/// Fill `buf` as far as the reader allows; returns bytes read.
fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn write_all(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut w = BufWriter::with_capacity(BUF_SIZE, File::create(path)?);
    w.write_all(data)?;
    w.flush()
}

#[cfg(feature = "file-io")]
fn sha256(data: &[u8]) -> Option<[u8; 32]> {
    Some(sha2::Sha256::digest(data).into())
}

#[cfg(not(feature = "file-io"))]
fn sha256(_data: &[u8]) -> Option<[u8; 32]> {
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_file(dir: &Path, name: &str, data: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn compress_decompress_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let data = b"The quick brown fox jumps over the lazy dog. The quick brown fox!";
        let input = write_temp_file(dir.path(), "input.bin", data);
        let packed = dir.path().join("packed.lzw");
        let output = dir.path().join("output.bin");

        for scheme in Scheme::ALL {
            let enc = compress_file(&input, &packed, scheme).unwrap().unwrap();
            assert_eq!(enc.input_size, data.len() as u64);
            assert!(enc.output_size > 0);

            let dec = decompress_file(&packed, &output, scheme).unwrap();
            assert_eq!(dec.output_size, data.len() as u64);
            assert_eq!(std::fs::read(&output).unwrap(), data);
            assert!(files_identical(&input, &output).unwrap());
        }
    }

    #[test]
    fn empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_temp_file(dir.path(), "empty.bin", b"");
        let packed = dir.path().join("empty.lzw");
        assert!(compress_file(&input, &packed, Scheme::Omega).unwrap().is_none());
        assert!(!packed.exists());
    }

    #[test]
    fn corrupt_input_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        // Gamma header "1" announces zero tokens; 31 non-padding bits follow.
        let input = write_temp_file(dir.path(), "bad.lzw", &[0xFF; 4]);
        let output = dir.path().join("bad.out");
        let err = decompress_file(&input, &output, Scheme::Gamma).unwrap_err();
        assert!(matches!(err, IoError::Codec(_)), "{err}");
        assert!(!output.exists());
    }

    #[test]
    fn files_identical_detects_difference() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_temp_file(dir.path(), "a", b"same length");
        let b = write_temp_file(dir.path(), "b", b"same lengtH");
        let c = write_temp_file(dir.path(), "c", b"same length");
        let d = write_temp_file(dir.path(), "d", b"short");
        assert!(!files_identical(&a, &b).unwrap());
        assert!(files_identical(&a, &c).unwrap());
        assert!(!files_identical(&a, &d).unwrap());
    }

    #[cfg(feature = "file-io")]
    #[test]
    fn sha256_digests_match_after_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_temp_file(dir.path(), "sha.bin", b"digest me, digest me, digest me");
        let packed = dir.path().join("sha.lzw");
        let output = dir.path().join("sha.out");

        let enc = compress_file(&input, &packed, Scheme::Fibonacci).unwrap().unwrap();
        let dec = decompress_file(&packed, &output, Scheme::Fibonacci).unwrap();
        assert!(enc.input_sha256.is_some());
        assert_eq!(enc.input_sha256, dec.output_sha256);
    }
}
