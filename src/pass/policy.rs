//! Generation policy: length plus the four class switches.

use super::charset::{self, CharClass};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("Invalid policy: at least one character class must be enabled")]
    EmptyCharacterClassSet,
    #[error("Invalid policy: length {0} is outside 1-128")]
    LengthOutOfRange(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl GenerationPolicy {
    /// All four classes enabled.
    #[cfg(test)]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Digit => self.include_numbers,
            CharClass::Symbol => self.include_symbols,
        }
    }

    /// Enabled classes in pool order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.includes(*c))
    }

    pub fn class_count(&self) -> usize {
        self.classes().count()
    }

    pub fn pool_size(&self) -> usize {
        charset::size(self.classes())
    }

    /// An empty class set is reported before a bad length.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.class_count() == 0 {
            return Err(PolicyError::EmptyCharacterClassSet);
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(PolicyError::LengthOutOfRange(self.length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn none(length: usize) -> GenerationPolicy {
        GenerationPolicy {
            length,
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }

    #[test]
    fn empty_class_set_wins_over_length() {
        assert_eq!(none(0).validate(), Err(PolicyError::EmptyCharacterClassSet));
        assert_eq!(none(16).validate(), Err(PolicyError::EmptyCharacterClassSet));
        assert_eq!(none(500).validate(), Err(PolicyError::EmptyCharacterClassSet));
    }

    #[test]
    fn length_bounds() {
        assert_eq!(
            GenerationPolicy::new(0).validate(),
            Err(PolicyError::LengthOutOfRange(0))
        );
        assert_eq!(
            GenerationPolicy::new(129).validate(),
            Err(PolicyError::LengthOutOfRange(129))
        );
        assert!(GenerationPolicy::new(1).validate().is_ok());
        assert!(GenerationPolicy::new(128).validate().is_ok());
    }

    #[test]
    fn classes_in_pool_order() {
        let policy = GenerationPolicy {
            include_uppercase: false,
            include_symbols: false,
            ..GenerationPolicy::new(8)
        };
        let classes: Vec<_> = policy.classes().collect();
        assert_eq!(classes, vec![CharClass::Lowercase, CharClass::Digit]);
        assert_eq!(policy.pool_size(), 36);
        assert_eq!(GenerationPolicy::new(8).pool_size(), 88);
    }
}
