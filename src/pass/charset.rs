//! Character classes and pool building.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Pool order. Generation output depends on it.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    #[cfg(test)]
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

/// Concatenate the alphabets of `classes`, in the order given.
///
/// Returns an empty pool for an empty class list; callers validate first.
pub fn build<I>(classes: I) -> Vec<u8>
where
    I: IntoIterator<Item = CharClass>,
{
    let mut chars = Vec::new();
    for class in classes {
        chars.extend_from_slice(class.alphabet().as_bytes());
    }
    chars
}

/// Pool length for `classes` without building it.
pub fn size<I>(classes: I) -> usize
where
    I: IntoIterator<Item = CharClass>,
{
    classes.into_iter().map(|c| c.alphabet().len()).sum()
}
