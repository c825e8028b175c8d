//! Unbiased index selection by rejection sampling.
//!
//! Reducing a random byte with `% n` skews the result towards small indices
//! whenever `n` does not divide 256. Instead we draw just enough bits to cover
//! `n - 1`, and throw away draws that land at or above `n`. The mask is the
//! smallest all-ones value covering `n - 1`, so at most half of all draws are
//! rejected and the expected number of draws is below two.

use crate::error::{Error, Result};
use crate::source::RandomSource;

/// Returns an index uniformly distributed over `0..n`.
///
/// `n == 1` returns 0 without touching the source. `n == 0` has no valid
/// answer and returns [`Error::EmptyCandidateSet`].
///
/// The retry loop only ends on an accepted draw or a failed read; a failed
/// read is returned immediately.
pub fn sample_index<S: RandomSource + ?Sized>(source: &mut S, n: usize) -> Result<usize> {
    match n {
        0 => return Err(Error::EmptyCandidateSet),
        1 => return Ok(0),
        _ => {}
    }

    let max = (n - 1) as u64;
    let bits = u64::BITS - max.leading_zeros();
    let mask = u64::MAX >> (u64::BITS - bits);
    let width = bits.div_ceil(8) as usize;

    // Bytes past `width` are never written and stay zero.
    let mut buf = [0u8; 8];
    loop {
        source.fill(&mut buf[..width])?;
        let candidate = u64::from_le_bytes(buf) & mask;
        if candidate <= max {
            return Ok(candidate as usize);
        }
        tracing::trace!(n, "rejected out of range draw");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ReaderSource;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Deterministic stand-in for the OS source so the statistics are reproducible.
    struct Seeded(StdRng);

    impl RandomSource for Seeded {
        fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
            self.0.fill_bytes(buf);
            Ok(())
        }
    }

    /// Counts bytes handed out, to check what the sampler consumed.
    struct Counting {
        bytes: usize,
    }

    impl RandomSource for Counting {
        fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
            self.bytes += buf.len();
            buf.fill(0);
            Ok(())
        }
    }

    fn chi_square(counts: &[u64], samples: u64) -> f64 {
        let expected = samples as f64 / counts.len() as f64;
        counts.iter().map(|&c| (c as f64 - expected).powi(2) / expected).sum()
    }

    #[test]
    fn test_single_candidate_reads_nothing() {
        let mut source = Counting { bytes: 0 };
        for _ in 0..100 {
            assert_eq!(sample_index(&mut source, 1).unwrap(), 0);
        }
        assert_eq!(source.bytes, 0);

        // Even an exhausted source is fine when there is only one answer.
        let mut empty = ReaderSource::new(std::io::empty());
        assert_eq!(sample_index(&mut empty, 1).unwrap(), 0);
    }

    #[test]
    fn test_empty_candidate_set() {
        let mut source = Counting { bytes: 0 };
        assert!(matches!(sample_index(&mut source, 0), Err(Error::EmptyCandidateSet)));
        assert_eq!(source.bytes, 0);
    }

    #[test]
    fn test_rejects_out_of_range_draws() {
        // n = 5 -> mask 0b111. 7, 6 and 5 are rejected, 3 is accepted.
        let mut source = ReaderSource::new(&[7u8, 6, 5, 3, 0][..]);
        assert_eq!(sample_index(&mut source, 5).unwrap(), 3);
        // The next draw starts after the accepted byte.
        assert_eq!(sample_index(&mut source, 5).unwrap(), 0);
    }

    #[test]
    fn test_masks_high_bits() {
        // 0xFB & 0b111 == 3
        let mut source = ReaderSource::new(&[0xFBu8][..]);
        assert_eq!(sample_index(&mut source, 5).unwrap(), 3);
    }

    #[test]
    fn test_power_of_two_never_rejects() {
        let bytes: Vec<u8> = (0..=255).collect();
        let mut source = ReaderSource::new(&bytes[..]);
        for byte in 0..=255u8 {
            assert_eq!(sample_index(&mut source, 256).unwrap(), byte as usize);
        }
    }

    #[test]
    fn test_multi_byte_draws() {
        // n = 300 -> 9 bits, two bytes little-endian, mask 0x1FF.
        // 0x012C == 300 is rejected, 0x012B == 299 is accepted.
        let mut source = ReaderSource::new(&[0x2Cu8, 0x01, 0x2B, 0x01][..]);
        assert_eq!(sample_index(&mut source, 300).unwrap(), 299);

        // 0xFEFF & 0x1FF == 0xFF
        let mut source = ReaderSource::new(&[0xFFu8, 0xFE][..]);
        assert_eq!(sample_index(&mut source, 300).unwrap(), 255);
    }

    #[test]
    fn test_exhaustion_mid_rejection() {
        // Every available draw is rejected, then the source runs dry.
        let mut source = ReaderSource::new(&[7u8, 7, 7][..]);
        assert!(matches!(sample_index(&mut source, 5), Err(Error::RandomSourceExhausted)));
    }

    #[test]
    fn test_exhausted_source_is_an_error() {
        let mut source = ReaderSource::new(std::io::empty());
        assert!(matches!(sample_index(&mut source, 2), Err(Error::RandomSourceExhausted)));
    }

    #[test]
    fn test_uniform_small_range() {
        // 10 is not a power of two, a `% 10` on a byte would favour 0..=5.
        const N: usize = 10;
        const SAMPLES: u64 = 200_000;
        let mut source = Seeded(StdRng::seed_from_u64(42));
        let mut counts = [0u64; N];
        for _ in 0..SAMPLES {
            counts[sample_index(&mut source, N).unwrap()] += 1;
        }
        // 9 degrees of freedom, p = 0.001 critical value is 27.88.
        let stat = chi_square(&counts, SAMPLES);
        assert!(stat < 27.88, "chi-square {stat} indicates bias: {counts:?}");
    }

    #[test]
    fn test_uniform_multi_byte_range() {
        const N: usize = 300;
        const SAMPLES: u64 = 600_000;
        let mut source = Seeded(StdRng::seed_from_u64(7));
        let mut counts = vec![0u64; N];
        for _ in 0..SAMPLES {
            counts[sample_index(&mut source, N).unwrap()] += 1;
        }
        // 299 degrees of freedom, p = 0.001 critical value is about 380.
        let stat = chi_square(&counts, SAMPLES);
        assert!(stat < 380.0, "chi-square {stat} indicates bias");
    }

    #[test]
    fn test_modulo_reduction_is_detectably_biased() {
        // Sanity check on the statistic itself: the naive approach must fail it.
        const N: usize = 10;
        const SAMPLES: u64 = 500_000;
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u64; N];
        let mut byte = [0u8; 1];
        for _ in 0..SAMPLES {
            rng.fill_bytes(&mut byte);
            counts[byte[0] as usize % N] += 1;
        }
        assert!(chi_square(&counts, SAMPLES) > 27.88);
    }
}
