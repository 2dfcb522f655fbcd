//! Display formatting for resistance, current and power
//!
//! Resistance is scaled to the largest of Ω / kΩ / MΩ that keeps the value
//! at or above 1, printed with two decimals and trailing zeros trimmed:
//!
//! | Ohms      | Output   |
//! |-----------|----------|
//! | 47        | `47Ω`    |
//! | 1500      | `1.5kΩ`  |
//! | 2_200_000 | `2.2MΩ`  |
//! | 1234.5678 | `1.23kΩ` |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ResistorError, Result};

/// Display unit for a resistance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResistanceUnit {
    #[default]
    Ohm,
    Kilo,
    Mega,
}

impl ResistanceUnit {
    pub const fn factor(self) -> f64 {
        match self {
            ResistanceUnit::Ohm => 1.0,
            ResistanceUnit::Kilo => 1_000.0,
            ResistanceUnit::Mega => 1_000_000.0,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            ResistanceUnit::Ohm => "Ω",
            ResistanceUnit::Kilo => "kΩ",
            ResistanceUnit::Mega => "MΩ",
        }
    }

    /// Largest unit in which `ohms` is still ≥ 1
    pub fn for_value(ohms: f64) -> Self {
        if ohms >= 1_000_000.0 {
            ResistanceUnit::Mega
        } else if ohms >= 1_000.0 {
            ResistanceUnit::Kilo
        } else {
            ResistanceUnit::Ohm
        }
    }

    /// Next unit up, `None` for mega
    pub const fn larger(self) -> Option<Self> {
        match self {
            ResistanceUnit::Ohm => Some(ResistanceUnit::Kilo),
            ResistanceUnit::Kilo => Some(ResistanceUnit::Mega),
            ResistanceUnit::Mega => None,
        }
    }

    /// Convert `value` in this unit to ohms
    pub fn to_ohms(self, value: f64) -> f64 {
        value * self.factor()
    }
}

impl fmt::Display for ResistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Fixed decimals with trailing zeros and a dangling point removed
fn trim_fixed(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Format ohms with a unit prefix: `1.5kΩ`, `1MΩ`, `47Ω`
pub fn format_resistance(ohms: f64) -> String {
    let mut unit = ResistanceUnit::for_value(ohms);
    // 999.999 rounds to 1000.00 and belongs to the next unit
    if let Some(next) = unit.larger() {
        if round_to(ohms / unit.factor(), 2) >= 1_000.0 {
            unit = next;
        }
    }
    format!("{}{}", trim_fixed(ohms / unit.factor(), 2), unit.symbol())
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// `±5%`, `±0.25%`
pub fn format_tolerance(percent: f64) -> String {
    format!("±{}%", trim_fixed(percent, 2))
}

/// Amperes with four decimals
pub fn format_current(amps: f64) -> String {
    format!("{:.4} A", amps)
}

/// Watts with four decimals
pub fn format_power(watts: f64) -> String {
    format!("{:.4} W", watts)
}

/// `s` without `suffix`, comparing ASCII letters case-insensitively
fn strip_suffix_ci<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if s.is_char_boundary(split) && s[split..].eq_ignore_ascii_case(suffix) {
        Some(&s[..split])
    } else {
        None
    }
}

/// Parse a resistance with an optional unit suffix.
///
/// Accepts what [`format_resistance`] prints plus common shorthand:
/// `47`, `47Ω`, `47R`, `47ohm`, `4.7k`, `4.7kΩ`, `1M`, `1MΩ`, `1meg`.
/// A lowercase `m` is rejected rather than read as milli or mega.
pub fn parse_resistance(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let rest = ["ohms", "ohm", "Ω", "\u{2126}", "r"]
        .iter()
        .find_map(|suffix| strip_suffix_ci(trimmed, suffix))
        .unwrap_or(trimmed)
        .trim_end();

    let (number, unit) = if let Some(n) = strip_suffix_ci(rest, "meg") {
        (n, ResistanceUnit::Mega)
    } else if let Some(n) = rest.strip_suffix('M') {
        (n, ResistanceUnit::Mega)
    } else if let Some(n) = strip_suffix_ci(rest, "k") {
        (n, ResistanceUnit::Kilo)
    } else if rest.ends_with('m') {
        return Err(ResistorError::invalid_value(format!(
            "{} (milliohm values are not supported, use M for mega)",
            input
        )));
    } else {
        (rest, ResistanceUnit::Ohm)
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|e| ResistorError::invalid_value(format!("{}: {}", input, e)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ResistorError::invalid_value(format!(
            "{} (must be a finite, non-negative number)",
            input
        )));
    }
    Ok(unit.to_ohms(value))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_format_resistance() {
        let cases = [
            (1500.0, "1.5kΩ"),
            (1_000_000.0, "1MΩ"),
            (47.0, "47Ω"),
            (0.0, "0Ω"),
            (4.7, "4.7Ω"),
            (0.22, "0.22Ω"),
            (2_200_000.0, "2.2MΩ"),
            (1234.5678, "1.23kΩ"),
            (100.0, "100Ω"),
            (10_000.0, "10kΩ"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_resistance(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_unit_selection() {
        assert_eq!(ResistanceUnit::for_value(999.0), ResistanceUnit::Ohm);
        assert_eq!(ResistanceUnit::for_value(1000.0), ResistanceUnit::Kilo);
        assert_eq!(ResistanceUnit::for_value(999_999.0), ResistanceUnit::Kilo);
        assert_eq!(ResistanceUnit::for_value(1e6), ResistanceUnit::Mega);
        assert_eq!(ResistanceUnit::Kilo.to_ohms(4.7), 4700.0);
    }

    #[test]
    fn test_parse_resistance() {
        let cases = [
            ("47", 47.0),
            ("47Ω", 47.0),
            ("47 ohm", 47.0),
            ("47R", 47.0),
            ("4.7k", 4700.0),
            ("4.7kΩ", 4700.0),
            ("4.7K", 4700.0),
            ("1M", 1_000_000.0),
            ("1MΩ", 1_000_000.0),
            ("2.2meg", 2_200_000.0),
            (" 220 ", 220.0),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_resistance(input).unwrap(), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_parse_resistance_rejects() {
        for bad in ["", "abc", "4.7x", "-10", "1m", "inf"] {
            assert!(parse_resistance(bad).is_err(), "Accepted: {}", bad);
        }
    }

    #[test]
    fn test_format_is_idempotent_through_parse() {
        for ohms in [
            0.22, 4.7, 47.0, 220.0, 1500.0, 4700.0, 22_000.0, 1_000_000.0, 1234.5678, 999.999,
            999_999.0,
        ] {
            let shown = format_resistance(ohms);
            let reparsed = parse_resistance(&shown).unwrap();
            assert_eq!(format_resistance(reparsed), shown);
        }
    }

    #[test]
    fn test_format_carries_into_next_unit() {
        assert_eq!(format_resistance(999.999), "1kΩ");
        assert_eq!(format_resistance(999_999.0), "1MΩ");
        assert_eq!(format_resistance(999.99), "999.99Ω");
        assert_eq!(format_resistance(999_994.0), "999.99kΩ");
        assert_eq!(format_resistance(999_999_999.0), "1000MΩ");
    }

    #[test]
    fn test_tolerance_current_power() {
        assert_eq!(format_tolerance(5.0), "±5%");
        assert_eq!(format_tolerance(0.25), "±0.25%");
        assert_eq!(format_current(0.005), "0.0050 A");
        assert_eq!(format_power(0.025), "0.0250 W");
    }
}
