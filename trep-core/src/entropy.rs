//! Channel entropy measurement for TREP.
//!
//! The encoder annotates each uncertain symbol with the Shannon entropy of a
//! window of OS noise samples. The randomness source sits behind the
//! [`NoiseSource`] capability so the measurement itself stays deterministic
//! and testable.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{TrepError, TrepResult};

/// Number of noise samples in one entropy measurement window.
///
/// The window is a constant of the model, not a parameter: a measurement
/// histograms at most the first 64 bytes of the sample and always divides by
/// 64, no matter how many bytes were requested. Keeping it fixed keeps
/// measurements comparable across runs.
pub const ENTROPY_WINDOW: usize = 64;

/// Capability trait for drawing bytes from a noise source.
///
/// Implementations range from the real OS CSPRNG to fixed replay sources for
/// deterministic tests.
pub trait NoiseSource: Send + Sync {
    /// Request `count` random bytes from the source.
    fn request_random_bytes(&mut self, count: usize) -> TrepResult<Vec<u8>>;
}

/// Noise source backed by the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNoiseSource;

impl NoiseSource for OsNoiseSource {
    fn request_random_bytes(&mut self, count: usize) -> TrepResult<Vec<u8>> {
        let mut buffer = vec![0u8; count];
        OsRng
            .try_fill_bytes(&mut buffer)
            .map_err(|err| TrepError::SourceUnavailable(err.to_string()))?;
        Ok(buffer)
    }
}

/// Deterministic noise source replaying a fixed byte pattern.
///
/// Bytes are served by cycling through the pattern, so repeated requests are
/// reproducible. An empty pattern behaves as an unavailable source, which
/// lets this type double as a failure injector in tests.
#[derive(Debug, Clone)]
pub struct FixedNoiseSource {
    pattern: Vec<u8>,
    cursor: usize,
}

impl FixedNoiseSource {
    /// Create a source replaying `pattern`.
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
            cursor: 0,
        }
    }
}

impl NoiseSource for FixedNoiseSource {
    fn request_random_bytes(&mut self, count: usize) -> TrepResult<Vec<u8>> {
        if self.pattern.is_empty() {
            return Err(TrepError::SourceUnavailable(
                "fixed noise pattern is empty".to_string(),
            ));
        }
        let mut buffer = Vec::with_capacity(count);
        for _ in 0..count {
            buffer.push(self.pattern[self.cursor]);
            self.cursor = (self.cursor + 1) % self.pattern.len();
        }
        Ok(buffer)
    }
}

/// Measure the Shannon entropy of the channel noise floor, in bits.
///
/// Requests `sample_count` bytes from `source`, histograms the first
/// [`ENTROPY_WINDOW`] of them over the 256 possible byte values, and
/// accumulates `-p * log2(p)` with `p = freq / 64`. The divisor stays 64 even
/// when the sample is shorter, so a short sample yields a deficient
/// distribution rather than a rescaled one.
///
/// # Arguments
/// * `source` - Noise source supplying the sample
/// * `sample_count` - Number of bytes to request
///
/// # Returns
/// Entropy of the sampled byte distribution, in `[0.0, 8.0]` bits. A full
/// 64-sample window caps out at log2(64) = 6 bits in practice.
pub fn measure_entropy(source: &mut dyn NoiseSource, sample_count: usize) -> TrepResult<f64> {
    let sample = source.request_random_bytes(sample_count)?;
    let window = &sample[..sample.len().min(ENTROPY_WINDOW)];

    let mut freq = [0u32; 256];
    for &byte in window {
        freq[byte as usize] += 1;
    }

    let mut entropy = 0.0;
    for &count in freq.iter() {
        if count > 0 {
            let p = f64::from(count) / ENTROPY_WINDOW as f64;
            entropy -= p * p.log2();
        }
    }

    Ok(entropy)
}
