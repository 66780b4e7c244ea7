// Byte statistics for reporting how well a buffer compressed.
//
// These are standalone helpers over plain byte slices; the codec does not
// depend on them.

/// Shannon entropy of the byte distribution, in bits per byte.
pub fn entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut counts = [0u64; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    entropy_of_counts(&counts, data.len() as u64)
}

/// Entropy of a byte given the byte before it, in bits per byte.
///
/// The first byte is conditioned on a virtual `0x00` predecessor.
pub fn conditional_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut follow = vec![[0u64; 256]; 256];
    let mut prev_counts = [0u64; 256];
    let mut prev = 0u8;
    for &b in data {
        follow[prev as usize][b as usize] += 1;
        prev_counts[prev as usize] += 1;
        prev = b;
    }

    let total = data.len() as f64;
    follow
        .iter()
        .zip(prev_counts.iter())
        .filter(|&(_, &n)| n > 0)
        .map(|(row, &n)| (n as f64 / total) * entropy_of_counts(row, n))
        .sum()
}

fn entropy_of_counts(counts: &[u64; 256], total: u64) -> f64 {
    let total = total as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Size and entropy summary of one compression run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub input_len: u64,
    pub output_len: u64,
    /// `output_len / input_len`; 0 for empty input.
    pub ratio: f64,
    pub input_entropy: f64,
    pub output_entropy: f64,
}

impl CompressionReport {
    pub fn new(input: &[u8], output: &[u8]) -> Self {
        let ratio = if input.is_empty() {
            0.0
        } else {
            output.len() as f64 / input.len() as f64
        };
        Self {
            input_len: input.len() as u64,
            output_len: output.len() as u64,
            ratio,
            input_entropy: entropy(input),
            output_entropy: entropy(output),
        }
    }
}
