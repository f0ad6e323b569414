//! Theoretical entropy of a uniformly drawn password. Informational only.

/// `length * log2(pool_size)` bits.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}
