//! Password generation settings.

mod file;

use crate::pass::GenerationPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
}

impl Settings {
    /// Defaults overlaid with the saved-defaults file, if any.
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, &file::get_path())?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self, &file::get_path())
    }

    pub fn saved_path() -> String {
        file::get_path()
    }

    pub fn policy(&self) -> GenerationPolicy {
        GenerationPolicy {
            length: self.pass_length,
            include_uppercase: self.include_uppercase,
            include_lowercase: self.include_lowercase,
            include_numbers: self.include_numbers,
            include_symbols: self.include_symbols,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            number_of_passwords: 1,
            to_clipboard: false,
        }
    }
}
