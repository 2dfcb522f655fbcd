//! Value types shared by the encoder and decoder

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color_table::{BandColor, Multiplier, Tolerance};
use crate::decoder::BandSelection;
use crate::error::ResistorError;

/// Band-count mode: 4-band (2 significant digits) or 5-band (3 significant digits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BandCount {
    #[default]
    Four,
    Five,
}

impl BandCount {
    pub const fn significant_digits(self) -> usize {
        match self {
            BandCount::Four => 2,
            BandCount::Five => 3,
        }
    }

    /// Total number of bands, digits + multiplier + tolerance
    pub const fn len(self) -> usize {
        self.significant_digits() + 2
    }

    /// 1-based position of the multiplier band
    pub const fn multiplier_position(self) -> u8 {
        self.significant_digits() as u8 + 1
    }

    /// 1-based position of the tolerance band
    pub const fn tolerance_position(self) -> u8 {
        self.significant_digits() as u8 + 2
    }
}

impl TryFrom<u8> for BandCount {
    type Error = ResistorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(BandCount::Four),
            5 => Ok(BandCount::Five),
            other => Err(ResistorError::InvalidBandCount(other)),
        }
    }
}

impl From<BandCount> for u8 {
    fn from(count: BandCount) -> Self {
        count.len() as u8
    }
}

impl fmt::Display for BandCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-band", self.len())
    }
}

/// What a band means on the resistor body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BandRole {
    /// Significant digit; `position` is 1-based
    Digit { position: u8, value: u8 },
    Multiplier(Multiplier),
    Tolerance(Tolerance),
}

/// One colored stripe of an encoded resistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorBand {
    pub color: BandColor,
    pub role: BandRole,
}

impl ColorBand {
    pub fn digit(&self) -> Option<u8> {
        match self.role {
            BandRole::Digit { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.color.display_name()
    }

    /// Human-readable meaning: `Digit 1: 4`, `×1K`, `±5%`
    pub fn meaning(&self) -> String {
        match self.role {
            BandRole::Digit { position, value } => format!("Digit {}: {}", position, value),
            BandRole::Multiplier(m) => m.label().to_string(),
            BandRole::Tolerance(t) => t.label().to_string(),
        }
    }
}

/// Ordered bands: digits, then multiplier, then tolerance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandSequence {
    band_count: BandCount,
    bands: Vec<ColorBand>,
}

impl BandSequence {
    /// Assemble a sequence; only the encoder builds these, so shape is checked
    /// in debug builds only.
    pub(crate) fn new(band_count: BandCount, bands: Vec<ColorBand>) -> Self {
        debug_assert_eq!(bands.len(), band_count.len());
        Self { band_count, bands }
    }

    pub fn band_count(&self) -> BandCount {
        self.band_count
    }

    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    pub fn colors(&self) -> Vec<BandColor> {
        self.bands.iter().map(|b| b.color).collect()
    }

    pub fn digits(&self) -> Vec<u8> {
        self.bands.iter().filter_map(ColorBand::digit).collect()
    }

    pub fn multiplier(&self) -> Option<Multiplier> {
        self.bands.iter().find_map(|b| match b.role {
            BandRole::Multiplier(m) => Some(m),
            _ => None,
        })
    }

    pub fn tolerance(&self) -> Option<Tolerance> {
        self.bands.iter().find_map(|b| match b.role {
            BandRole::Tolerance(t) => Some(t),
            _ => None,
        })
    }

    /// Value the bands actually encode (may differ from the encoder input)
    pub fn nominal_ohms(&self) -> f64 {
        let base = self
            .digits()
            .iter()
            .fold(0u32, |acc, d| acc * 10 + u32::from(*d));
        self.multiplier().map_or(0.0, |m| m.apply(base))
    }

    /// Position → color selection for feeding back into the decoder
    pub fn to_selection(&self) -> BandSelection {
        BandSelection::from_colors(self.colors())
    }
}

impl<'a> IntoIterator for &'a BandSequence {
    type Item = &'a ColorBand;
    type IntoIter = std::slice::Iter<'a, ColorBand>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}

/// Canonical decoded/encoded value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResistorReading {
    pub resistance_ohms: f64,
    pub tolerance_percent: f64,
    pub band_count: BandCount,
}

impl ResistorReading {
    /// Neutral state for incomplete input
    pub const fn empty(band_count: BandCount) -> Self {
        Self {
            resistance_ohms: 0.0,
            tolerance_percent: 0.0,
            band_count,
        }
    }

    pub fn has_resistance(&self) -> bool {
        self.resistance_ohms > 0.0
    }

    /// Lowest and highest value within tolerance, once both are known
    pub fn range(&self) -> Option<(f64, f64)> {
        if self.resistance_ohms > 0.0 && self.tolerance_percent > 0.0 {
            let spread = self.tolerance_percent / 100.0;
            Some((
                self.resistance_ohms * (1.0 - spread),
                self.resistance_ohms * (1.0 + spread),
            ))
        } else {
            None
        }
    }
}
