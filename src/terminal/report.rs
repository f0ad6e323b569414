//! Strength report shown after generation.

use crossterm::style::{Color, Stylize};

use super::{box_bottom, box_line, box_top, flush};
use crate::strength::{ColorTier, MAX_SCORE, StrengthResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub strength: StrengthResult,
    pub pool_size: usize,
    pub entropy_bits: f64,
    pub source: &'static str,
    pub secure: bool,
}

pub fn tier_color(tier: ColorTier) -> Color {
    match tier {
        ColorTier::Weak => Color::Red,
        ColorTier::Medium => Color::Yellow,
        ColorTier::Strong => Color::Green,
    }
}

pub fn print_report(report: &Report) {
    let strength = &report.strength;
    let label = strength
        .label
        .as_str()
        .with(tier_color(strength.color_tier))
        .bold();

    println!();
    box_top("Strength");
    box_line(&format!("Score: {}/{} ({})", strength.score, MAX_SCORE, label));
    box_line(&format!(
        "Pool: {} chars \u{2022} Entropy: {:.1} bits",
        report.pool_size, report.entropy_bits
    ));
    if report.secure {
        box_line(&format!("Source: {}", report.source));
    } else {
        let warning = "NOT cryptographically secure".with(Color::Red);
        box_line(&format!("Source: {} ({})", report.source, warning));
    }
    box_bottom();
    flush();
}
