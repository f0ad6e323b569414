//! Random sources for password generation.
//!
//! Generation draws from the operating system's CSPRNG. When that cannot be
//! read, [`select`] hands out a [`FallbackRandomSource`] instead, which mixes
//! CPU cycle counter readings and is NOT cryptographically secure. The
//! downgrade is always logged.

mod fallback;
mod hw;
mod multipliers;
mod secure;

pub use fallback::FallbackRandomSource;
pub use secure::SecureRandomSource;

#[derive(Debug, thiserror::Error)]
pub enum RandomError {
    #[error("secure random source unavailable: {0}")]
    SecureSourceUnavailable(String),
}

/// Supplies uniformly distributed 32-bit draws to the generator.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// True only when draws come from a cryptographically secure generator.
    fn is_secure(&self) -> bool;

    /// Short human-readable name for reports and logs.
    fn name(&self) -> &'static str;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn is_secure(&self) -> bool {
        (**self).is_secure()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Pick the random source for this process from the outcome of probing the
/// OS generator (`SecureRandomSource::new()`): the OS generator when the probe
/// succeeded, the fallback mixer otherwise.
pub fn select(os: Result<SecureRandomSource, RandomError>) -> Box<dyn RandomSource> {
    match os {
        Ok(source) => {
            log::debug!("using {}", source.name());
            Box::new(source)
        }
        Err(e) => {
            log::warn!(
                "{e}; falling back to {} which is not cryptographically secure",
                hw::source_name()
            );
            Box::new(FallbackRandomSource::new())
        }
    }
}

/// Like [`select`], but refuses to downgrade.
pub fn select_secure(
    os: Result<SecureRandomSource, RandomError>,
) -> Result<Box<dyn RandomSource>, RandomError> {
    let source = os?;
    log::debug!("using {}", source.name());
    Ok(Box::new(source))
}


#[cfg(test)]
mod test {
    use super::*;

    fn unavailable() -> Result<SecureRandomSource, RandomError> {
        Err(RandomError::SecureSourceUnavailable("getrandom failed".into()))
    }

    #[test]
    fn select_prefers_secure_source() {
        // Test hosts always expose an OS generator.
        let source = select(SecureRandomSource::new());
        assert!(source.is_secure());
        assert_eq!(source.name(), "os");
    }

    #[test]
    fn select_falls_back_without_os_generator() {
        let mut source = select(unavailable());
        assert!(!source.is_secure());
        assert_eq!(source.name(), hw::source_name());
        let first = source.next_u32();
        assert!((0..64).any(|_| source.next_u32() != first));
    }

    #[test]
    fn select_secure_refuses_fallback() {
        assert!(matches!(
            select_secure(unavailable()),
            Err(RandomError::SecureSourceUnavailable(_))
        ));
        let source = select_secure(SecureRandomSource::new()).expect("OS generator");
        assert!(source.is_secure());
    }

    #[test]
    fn boxed_source_delegates() {
        let mut source: Box<dyn RandomSource> =
            Box::new(test_support::Sequence::new(&[7, 9]));
        assert_eq!(source.next_u32(), 7);
        assert_eq!(source.next_u32(), 9);
        assert_eq!(source.next_u32(), 7);
        assert!(!source.is_secure());
    }
}
