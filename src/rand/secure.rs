use ::rand::RngCore;
use ::rand::rngs::OsRng;

use super::{RandomError, RandomSource};

/// Draws straight from the operating system generator (`getrandom`).
#[derive(Debug)]
pub struct SecureRandomSource {
    rng: OsRng,
}

impl SecureRandomSource {
    /// Probe the OS generator once; fails when it cannot be read.
    pub fn new() -> Result<Self, RandomError> {
        let mut rng = OsRng;
        let mut probe = [0u8; 4];
        rng.try_fill_bytes(&mut probe)
            .map_err(|e| RandomError::SecureSourceUnavailable(e.to_string()))?;
        Ok(Self { rng })
    }
}

impl RandomSource for SecureRandomSource {
    // OsRng panics if the OS source disappears after a successful probe.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn is_secure(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "os"
    }
}
