//! Saved defaults persistence.
//!
//! One line: `length,upper,lower,digits,symbols`. Fields that fail to parse
//! keep their current value.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

const FIELDS: usize = 5;

pub fn save(settings: &Settings, path: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{}\n",
        settings.pass_length,
        settings.include_uppercase,
        settings.include_lowercase,
        settings.include_numbers,
        settings.include_symbols,
    );

    file.write_all(data.as_bytes())?;
    log::debug!("saved defaults to {path}");
    Ok(())
}

/// A missing file is not an error: defaults stay as they are.
pub fn load(settings: &mut Settings, path: &str) -> std::io::Result<()> {
    if !Path::new(path).exists() {
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        log::warn!("ignoring malformed settings file {path}");
        return Ok(());
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.include_uppercase = parts[1].parse().unwrap_or(settings.include_uppercase);
    settings.include_lowercase = parts[2].parse().unwrap_or(settings.include_lowercase);
    settings.include_numbers = parts[3].parse().unwrap_or(settings.include_numbers);
    settings.include_symbols = parts[4].parse().unwrap_or(settings.include_symbols);

    Ok(())
}

#[inline]
pub fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passforge/settings", home)
}
