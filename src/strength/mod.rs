//! Coarse password strength scoring.
//!
//! The score looks only at password length and at how many character classes
//! the policy enabled. It never inspects the characters themselves.

mod entropy;

use std::fmt;

use crate::pass::GenerationPolicy;

pub use entropy::entropy_bits;

pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Weak,
    Medium,
    Strong,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Weak => "Weak",
            Label::Medium => "Medium",
            Label::Strong => "Strong",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display tier, classified with the same thresholds as [`Label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    Weak,
    Medium,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub label: Label,
    pub color_tier: ColorTier,
}

/// Score `password` under `policy`. Only the character count is read.
pub fn score(password: &str, policy: &GenerationPolicy) -> StrengthResult {
    score_length(password.chars().count(), policy)
}

/// Score a password of `length` characters under the flags in `policy`.
/// `policy.length` is ignored.
pub fn score_length(length: usize, policy: &GenerationPolicy) -> StrengthResult {
    // Sum in half points: length contributes whole points, each class 1.5.
    let length_halves = match length {
        12.. => 8,
        8..=11 => 4,
        6..=7 => 2,
        _ => 0,
    };
    let variety_halves = policy.class_count() * 3;

    // Round half up.
    let score = ((length_halves + variety_halves + 1) / 2).min(MAX_SCORE as usize) as u8;

    let (label, color_tier) = match score {
        0..=3 => (Label::Weak, ColorTier::Weak),
        4..=6 => (Label::Medium, ColorTier::Medium),
        _ => (Label::Strong, ColorTier::Strong),
    };

    StrengthResult {
        score,
        label,
        color_tier,
    }
}
