//! Password generation.

use zeroize::Zeroize;

use super::charset;
use super::policy::{GenerationPolicy, PolicyError};
use crate::rand::RandomSource;

/// Generate a single password for `policy`, drawing from `rng`.
///
/// Each character is an independent draw mapped into the pool with `%`.
/// Pools are at most 88 symbols, so the modulo bias against 2^32 stays
/// below one part in 48 million and is accepted rather than corrected.
///
/// Nothing forces every enabled class to appear in the output.
pub fn generate<R>(policy: &GenerationPolicy, rng: &mut R) -> Result<String, PolicyError>
where
    R: RandomSource + ?Sized,
{
    policy.validate()?;
    let mut chars = charset::build(policy.classes());
    let pass = generate_from_charset(&chars, policy.length, rng);
    chars.zeroize();
    Ok(pass)
}

/// Generate `count` passwords under one policy.
pub fn generate_batch<R>(
    policy: &GenerationPolicy,
    rng: &mut R,
    count: usize,
) -> Result<Vec<String>, PolicyError>
where
    R: RandomSource + ?Sized,
{
    policy.validate()?;
    (0..count).map(|_| generate(policy, rng)).collect()
}

fn generate_from_charset<R>(chars: &[u8], length: usize, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let bytes: Vec<u8> = (0..length)
        .map(|_| random_byte(chars, rng.next_u32()))
        .collect();
    // Safety: every alphabet is ASCII
    unsafe { String::from_utf8_unchecked(bytes) }
}

#[inline]
fn random_byte(chars: &[u8], draw: u32) -> u8 {
    chars[draw as usize % chars.len()]
}
