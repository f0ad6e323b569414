use zeroize::Zeroize;

use super::RandomSource;
use super::hw;
use super::multipliers::MULTIPLIERS;

/// Non-cryptographic source used only when the OS generator is unreachable.
///
/// Each step folds a fresh cycle counter reading into the state, uses the mix
/// to pick a multiplier, then passes the new state through the SplitMix64
/// finalizer. Output is well distributed but predictable to anyone who can
/// observe or estimate the counter.
pub struct FallbackRandomSource {
    state: u64,
}

impl FallbackRandomSource {
    pub fn new() -> Self {
        Self::with_seed(hw::entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        let state = self.state;
        let ent = hw::entropy();

        let mixed = state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        let new_state = state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;
        self.state = new_state;

        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Default for FallbackRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FallbackRandomSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let z = self.step();
        (z ^ (z >> 32)) as u32
    }

    fn is_secure(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        hw::source_name()
    }
}

impl Drop for FallbackRandomSource {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fallback_is_flagged_insecure() {
        let source = FallbackRandomSource::with_seed(1);
        assert!(!source.is_secure());
        assert!(!source.name().is_empty());
    }

    #[test]
    fn fallback_covers_small_modulus() {
        let mut source = FallbackRandomSource::new();
        let mut seen = [false; 10];
        for _ in 0..2_000 {
            seen[(source.next_u32() % 10) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn fallback_state_advances() {
        let mut source = FallbackRandomSource::with_seed(0);
        let a = source.next_u32();
        let b = source.next_u32();
        let c = source.next_u32();
        assert!(a != b || b != c);
    }
}
