//! Uniform random source used by every stochastic stage of a sweep

use rand::Rng;

/// Supplies independent draws from uniform(0, 1)
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Derive the seed of an independent stream for temperature index `index`
///
/// SplitMix64 finaliser over the base seed and the index, so neighbouring
/// indices get decorrelated streams and the result does not depend on the
/// order in which temperatures are scheduled.
pub fn stream_seed(base: u64, index: usize) -> u64 {
    let mut z = base.wrapping_add((index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
