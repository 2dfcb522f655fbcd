//! Static color tables for resistor bands
//!
//! Three fixed mappings make up the whole external contract of the engine:
//!
//! | Table      | Key                         | Colors                          |
//! |------------|-----------------------------|---------------------------------|
//! | digit      | 0-9                         | black … white                   |
//! | multiplier | exponent -2..=7 (×0.01…×10M)| silver, gold, black … violet    |
//! | tolerance  | 0.1, 0.25, 0.5, 1, 2, 5, 10 | violet, blue, green, brown, red, gold, silver |
//!
//! All tables are keyed by enums or integers, never by floating-point values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ResistorError, Result};

/// One physical band color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

impl BandColor {
    /// Every color in reference-table order
    pub const ALL: [BandColor; 12] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Grey,
        BandColor::White,
        BandColor::Gold,
        BandColor::Silver,
    ];

    /// Swatch color as `#RRGGBB`
    pub const fn hex(self) -> &'static str {
        match self {
            BandColor::Black => "#000000",
            BandColor::Brown => "#8B4513",
            BandColor::Red => "#FF0000",
            BandColor::Orange => "#FFA500",
            BandColor::Yellow => "#FFFF00",
            BandColor::Green => "#008000",
            BandColor::Blue => "#0000FF",
            BandColor::Violet => "#8A2BE2",
            BandColor::Grey => "#808080",
            BandColor::White => "#FFFFFF",
            BandColor::Gold => "#FFD700",
            BandColor::Silver => "#C0C0C0",
        }
    }

    /// Swatch color as an RGB triple (same value as [`BandColor::hex`])
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            BandColor::Black => (0x00, 0x00, 0x00),
            BandColor::Brown => (0x8B, 0x45, 0x13),
            BandColor::Red => (0xFF, 0x00, 0x00),
            BandColor::Orange => (0xFF, 0xA5, 0x00),
            BandColor::Yellow => (0xFF, 0xFF, 0x00),
            BandColor::Green => (0x00, 0x80, 0x00),
            BandColor::Blue => (0x00, 0x00, 0xFF),
            BandColor::Violet => (0x8A, 0x2B, 0xE2),
            BandColor::Grey => (0x80, 0x80, 0x80),
            BandColor::White => (0xFF, 0xFF, 0xFF),
            BandColor::Gold => (0xFF, 0xD7, 0x00),
            BandColor::Silver => (0xC0, 0xC0, 0xC0),
        }
    }

    /// Label shown to users (Indonesian color names)
    pub const fn display_name(self) -> &'static str {
        match self {
            BandColor::Black => "Hitam",
            BandColor::Brown => "Coklat",
            BandColor::Red => "Merah",
            BandColor::Orange => "Oranye",
            BandColor::Yellow => "Kuning",
            BandColor::Green => "Hijau",
            BandColor::Blue => "Biru",
            BandColor::Violet => "Ungu",
            BandColor::Grey => "Abu-abu",
            BandColor::White => "Putih",
            BandColor::Gold => "Emas",
            BandColor::Silver => "Perak",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            BandColor::Black => "black",
            BandColor::Brown => "brown",
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Green => "green",
            BandColor::Blue => "blue",
            BandColor::Violet => "violet",
            BandColor::Grey => "grey",
            BandColor::White => "white",
            BandColor::Gold => "gold",
            BandColor::Silver => "silver",
        }
    }

    /// Digit encoded by this color, `None` for gold and silver
    pub const fn digit(self) -> Option<u8> {
        match self {
            BandColor::Black => Some(0),
            BandColor::Brown => Some(1),
            BandColor::Red => Some(2),
            BandColor::Orange => Some(3),
            BandColor::Yellow => Some(4),
            BandColor::Green => Some(5),
            BandColor::Blue => Some(6),
            BandColor::Violet => Some(7),
            BandColor::Grey => Some(8),
            BandColor::White => Some(9),
            BandColor::Gold | BandColor::Silver => None,
        }
    }

    /// Multiplier encoded by this color, `None` for grey and white
    pub const fn multiplier(self) -> Option<Multiplier> {
        match self {
            BandColor::Silver => Some(Multiplier::Hundredth),
            BandColor::Gold => Some(Multiplier::Tenth),
            BandColor::Black => Some(Multiplier::One),
            BandColor::Brown => Some(Multiplier::Ten),
            BandColor::Red => Some(Multiplier::Hundred),
            BandColor::Orange => Some(Multiplier::Thousand),
            BandColor::Yellow => Some(Multiplier::TenThousand),
            BandColor::Green => Some(Multiplier::HundredThousand),
            BandColor::Blue => Some(Multiplier::Million),
            BandColor::Violet => Some(Multiplier::TenMillion),
            BandColor::Grey | BandColor::White => None,
        }
    }

    /// Tolerance encoded by this color, if the color has a tolerance role
    pub const fn tolerance(self) -> Option<Tolerance> {
        match self {
            BandColor::Violet => Some(Tolerance::PointOne),
            BandColor::Blue => Some(Tolerance::PointTwoFive),
            BandColor::Green => Some(Tolerance::PointFive),
            BandColor::Brown => Some(Tolerance::One),
            BandColor::Red => Some(Tolerance::Two),
            BandColor::Gold => Some(Tolerance::Five),
            BandColor::Silver => Some(Tolerance::Ten),
            _ => None,
        }
    }

    /// Color for a decimal digit
    pub fn from_digit(digit: u8) -> Option<Self> {
        DIGIT_COLORS.get(digit as usize).copied()
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for BandColor {
    type Err = ResistorError;

    /// Accepts English or display names, case-insensitive ("gray" and "abu" included)
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        let alias = match needle.as_str() {
            "gray" | "abu" | "abuabu" => Some(BandColor::Grey),
            "purple" => Some(BandColor::Violet),
            _ => None,
        };
        alias
            .or_else(|| {
                BandColor::ALL.into_iter().find(|c| {
                    c.english_name() == needle || c.display_name().to_lowercase() == needle
                })
            })
            .ok_or_else(|| ResistorError::invalid_color(s))
    }
}

/// Digit table: index is the digit
pub const DIGIT_COLORS: [BandColor; 10] = [
    BandColor::Black,
    BandColor::Brown,
    BandColor::Red,
    BandColor::Orange,
    BandColor::Yellow,
    BandColor::Green,
    BandColor::Blue,
    BandColor::Violet,
    BandColor::Grey,
    BandColor::White,
];

/// Multiplier band, keyed by its power-of-ten exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplier {
    Hundredth,
    Tenth,
    One,
    Ten,
    Hundred,
    Thousand,
    TenThousand,
    HundredThousand,
    Million,
    TenMillion,
}

impl Multiplier {
    pub const ALL: [Multiplier; 10] = [
        Multiplier::One,
        Multiplier::Ten,
        Multiplier::Hundred,
        Multiplier::Thousand,
        Multiplier::TenThousand,
        Multiplier::HundredThousand,
        Multiplier::Million,
        Multiplier::TenMillion,
        Multiplier::Tenth,
        Multiplier::Hundredth,
    ];

    /// Smallest exponent with a color (silver, ×0.01)
    pub const MIN_EXPONENT: i32 = -2;
    /// Largest exponent with a color (violet, ×10M)
    pub const MAX_EXPONENT: i32 = 7;

    pub const fn exponent(self) -> i32 {
        match self {
            Multiplier::Hundredth => -2,
            Multiplier::Tenth => -1,
            Multiplier::One => 0,
            Multiplier::Ten => 1,
            Multiplier::Hundred => 2,
            Multiplier::Thousand => 3,
            Multiplier::TenThousand => 4,
            Multiplier::HundredThousand => 5,
            Multiplier::Million => 6,
            Multiplier::TenMillion => 7,
        }
    }

    pub fn from_exponent(exponent: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.exponent() == exponent)
    }

    /// Numeric factor (0.01 … 10_000_000)
    pub const fn factor(self) -> f64 {
        match self {
            Multiplier::Hundredth => 0.01,
            Multiplier::Tenth => 0.1,
            Multiplier::One => 1.0,
            Multiplier::Ten => 10.0,
            Multiplier::Hundred => 100.0,
            Multiplier::Thousand => 1_000.0,
            Multiplier::TenThousand => 10_000.0,
            Multiplier::HundredThousand => 100_000.0,
            Multiplier::Million => 1_000_000.0,
            Multiplier::TenMillion => 10_000_000.0,
        }
    }

    /// Scale an integer digit prefix by this multiplier.
    ///
    /// Sub-unity multipliers divide by a power of ten instead of multiplying by
    /// 0.1/0.01, so `47 × gold` yields exactly `4.7`.
    pub fn apply(self, base: u32) -> f64 {
        let exp = self.exponent();
        if exp >= 0 {
            f64::from(base) * 10_f64.powi(exp)
        } else {
            f64::from(base) / 10_f64.powi(-exp)
        }
    }

    pub const fn color(self) -> BandColor {
        match self {
            Multiplier::Hundredth => BandColor::Silver,
            Multiplier::Tenth => BandColor::Gold,
            Multiplier::One => BandColor::Black,
            Multiplier::Ten => BandColor::Brown,
            Multiplier::Hundred => BandColor::Red,
            Multiplier::Thousand => BandColor::Orange,
            Multiplier::TenThousand => BandColor::Yellow,
            Multiplier::HundredThousand => BandColor::Green,
            Multiplier::Million => BandColor::Blue,
            Multiplier::TenMillion => BandColor::Violet,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Multiplier::Hundredth => "×0.01",
            Multiplier::Tenth => "×0.1",
            Multiplier::One => "×1",
            Multiplier::Ten => "×10",
            Multiplier::Hundred => "×100",
            Multiplier::Thousand => "×1K",
            Multiplier::TenThousand => "×10K",
            Multiplier::HundredThousand => "×100K",
            Multiplier::Million => "×1M",
            Multiplier::TenMillion => "×10M",
        }
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tolerance band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tolerance {
    PointOne,
    PointTwoFive,
    PointFive,
    One,
    Two,
    Five,
    Ten,
}

impl Tolerance {
    pub const ALL: [Tolerance; 7] = [
        Tolerance::PointOne,
        Tolerance::PointTwoFive,
        Tolerance::PointFive,
        Tolerance::One,
        Tolerance::Two,
        Tolerance::Five,
        Tolerance::Ten,
    ];

    pub const fn percent(self) -> f64 {
        match self {
            Tolerance::PointOne => 0.1,
            Tolerance::PointTwoFive => 0.25,
            Tolerance::PointFive => 0.5,
            Tolerance::One => 1.0,
            Tolerance::Two => 2.0,
            Tolerance::Five => 5.0,
            Tolerance::Ten => 10.0,
        }
    }

    /// Snap a percentage to its canonical domain value.
    ///
    /// Returns `None` for anything not within 1e-9 of a table entry.
    pub fn from_percent(percent: f64) -> Option<Self> {
        if !percent.is_finite() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|t| (t.percent() - percent).abs() < 1e-9)
    }

    pub const fn color(self) -> BandColor {
        match self {
            Tolerance::PointOne => BandColor::Violet,
            Tolerance::PointTwoFive => BandColor::Blue,
            Tolerance::PointFive => BandColor::Green,
            Tolerance::One => BandColor::Brown,
            Tolerance::Two => BandColor::Red,
            Tolerance::Five => BandColor::Gold,
            Tolerance::Ten => BandColor::Silver,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Tolerance::PointOne => "±0.1%",
            Tolerance::PointTwoFive => "±0.25%",
            Tolerance::PointFive => "±0.5%",
            Tolerance::One => "±1%",
            Tolerance::Two => "±2%",
            Tolerance::Five => "±5%",
            Tolerance::Ten => "±10%",
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the color reference table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceRow {
    pub color: BandColor,
    pub hex: &'static str,
    pub display_name: &'static str,
    pub digit: Option<u8>,
    pub multiplier: Option<&'static str>,
    pub tolerance: Option<&'static str>,
}

/// Every color with the role(s) it can play
pub fn reference_table() -> Vec<ReferenceRow> {
    BandColor::ALL
        .into_iter()
        .map(|color| ReferenceRow {
            color,
            hex: color.hex(),
            display_name: color.display_name(),
            digit: color.digit(),
            multiplier: color.multiplier().map(Multiplier::label),
            tolerance: color.tolerance().map(Tolerance::label),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_table_matches_reverse_lookup() {
        for (digit, color) in DIGIT_COLORS.iter().enumerate() {
            assert_eq!(color.digit(), Some(digit as u8));
            assert_eq!(BandColor::from_digit(digit as u8), Some(*color));
        }
        assert_eq!(BandColor::from_digit(10), None);
    }

    #[test]
    fn test_multiplier_color_pairs() {
        for m in Multiplier::ALL {
            assert_eq!(m.color().multiplier(), Some(m));
            assert_eq!(Multiplier::from_exponent(m.exponent()), Some(m));
        }
        assert_eq!(Multiplier::from_exponent(8), None);
        assert_eq!(Multiplier::from_exponent(-3), None);
        assert_eq!(BandColor::Grey.multiplier(), None);
        assert_eq!(BandColor::White.multiplier(), None);
    }

    #[test]
    fn test_multiplier_apply_is_exact() {
        assert_eq!(Multiplier::Tenth.apply(47), 4.7);
        assert_eq!(Multiplier::Hundredth.apply(22), 0.22);
        assert_eq!(Multiplier::Thousand.apply(47), 47_000.0);
        assert_eq!(Multiplier::TenMillion.apply(99), 990_000_000.0);
    }

    #[test]
    fn test_tolerance_snapping() {
        assert_eq!(Tolerance::from_percent(5.0), Some(Tolerance::Five));
        assert_eq!(Tolerance::from_percent(0.25), Some(Tolerance::PointTwoFive));
        assert_eq!(Tolerance::from_percent(0.1 + 0.2 - 0.2), Some(Tolerance::PointOne));
        assert_eq!(Tolerance::from_percent(20.0), None);
        assert_eq!(Tolerance::from_percent(f64::NAN), None);
    }

    #[test]
    fn test_silver_tolerance_is_ten_percent() {
        assert_eq!(BandColor::Silver.tolerance(), Some(Tolerance::Ten));
        assert_eq!(Tolerance::Ten.label(), "±10%");
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("Brown".parse::<BandColor>().unwrap(), BandColor::Brown);
        assert_eq!("coklat".parse::<BandColor>().unwrap(), BandColor::Brown);
        assert_eq!("gray".parse::<BandColor>().unwrap(), BandColor::Grey);
        assert_eq!("Abu-abu".parse::<BandColor>().unwrap(), BandColor::Grey);
        assert_eq!("EMAS".parse::<BandColor>().unwrap(), BandColor::Gold);
        assert!(matches!(
            "magenta".parse::<BandColor>(),
            Err(ResistorError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_reference_table() {
        let table = reference_table();
        assert_eq!(table.len(), 12);

        let brown = &table[1];
        assert_eq!(brown.display_name, "Coklat");
        assert_eq!(brown.digit, Some(1));
        assert_eq!(brown.multiplier, Some("×10"));
        assert_eq!(brown.tolerance, Some("±1%"));

        let white = &table[9];
        assert_eq!(white.multiplier, None);
        assert_eq!(white.tolerance, None);

        let silver = &table[11];
        assert_eq!(silver.digit, None);
        assert_eq!(silver.multiplier, Some("×0.01"));
        assert_eq!(silver.tolerance, Some("±10%"));
    }

    #[test]
    fn test_multiplier_and_tolerance_serde_names() {
        assert_eq!(
            serde_json::to_string(&Multiplier::TenMillion).unwrap(),
            "\"ten_million\""
        );
        assert_eq!(
            serde_json::to_string(&Tolerance::PointTwoFive).unwrap(),
            "\"point_two_five\""
        );
        let parsed: Multiplier = serde_json::from_str("\"hundredth\"").unwrap();
        assert_eq!(parsed, Multiplier::Hundredth);
        let parsed: Tolerance = serde_json::from_str("\"five\"").unwrap();
        assert_eq!(parsed, Tolerance::Five);
    }
}
