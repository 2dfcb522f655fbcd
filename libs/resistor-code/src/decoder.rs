//! Decoder - band colors to resistance and tolerance
//!
//! Decoding is total: a position that is unselected, or holds a color with no
//! meaning for that position (gold as a digit, white as a multiplier), leaves
//! the reading at its neutral zero value instead of failing. This supports
//! live preview while bands are picked one at a time.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::color_table::BandColor;
use crate::error::{ResistorError, Result};
use crate::types::{BandCount, ResistorReading};

/// Colors picked per band position (1-based)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BandSelection {
    positions: BTreeMap<u8, BandColor>,
}

impl BandSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions 1.. in order
    pub fn from_colors(colors: impl IntoIterator<Item = BandColor>) -> Self {
        let positions = (1u8..).zip(colors).collect();
        Self { positions }
    }

    /// Positions 1.. in order, `None` leaving a position unselected
    pub fn from_optional(colors: impl IntoIterator<Item = Option<BandColor>>) -> Self {
        let positions = (1u8..)
            .zip(colors)
            .filter_map(|(pos, color)| color.map(|c| (pos, c)))
            .collect();
        Self { positions }
    }

    /// Select a color; position must be 1..=5
    pub fn set(&mut self, position: u8, color: BandColor) -> Result<()> {
        if !(1..=5).contains(&position) {
            return Err(ResistorError::invalid_position(format!(
                "{} (expected 1..=5)",
                position
            )));
        }
        self.positions.insert(position, color);
        Ok(())
    }

    pub fn clear(&mut self, position: u8) {
        self.positions.remove(&position);
    }

    pub fn get(&self, position: u8) -> Option<BandColor> {
        self.positions.get(&position).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

/// Compute resistance and tolerance from the selected colors
pub fn decode(selection: &BandSelection, band_count: BandCount) -> ResistorReading {
    let sd = band_count.significant_digits();

    let digits: Option<Vec<u8>> = (1..=sd as u8)
        .map(|pos| selection.get(pos).and_then(BandColor::digit))
        .collect();
    let multiplier = selection
        .get(band_count.multiplier_position())
        .and_then(BandColor::multiplier);

    let resistance_ohms = match (digits, multiplier) {
        (Some(digits), Some(multiplier)) => {
            let base = digits
                .iter()
                .fold(0u32, |acc, d| acc * 10 + u32::from(*d));
            multiplier.apply(base)
        },
        _ => 0.0,
    };

    let tolerance_percent = selection
        .get(band_count.tolerance_position())
        .and_then(BandColor::tolerance)
        .map_or(0.0, |t| t.percent());

    debug!(
        bands = %band_count,
        selected = selection.len(),
        ohms = resistance_ohms,
        tolerance = tolerance_percent,
        "decode"
    );

    ResistorReading {
        resistance_ohms,
        tolerance_percent,
        band_count,
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use BandColor::*;

    #[test]
    fn test_decode_four_band() {
        let sel = BandSelection::from_colors([Yellow, Violet, Red, Gold]);
        let reading = decode(&sel, BandCount::Four);
        assert_eq!(reading.resistance_ohms, 4700.0);
        assert_eq!(reading.tolerance_percent, 5.0);
        assert_eq!(reading.band_count, BandCount::Four);
    }

    #[test]
    fn test_decode_five_band() {
        let sel = BandSelection::from_colors([Brown, Black, Black, Red, Brown]);
        let reading = decode(&sel, BandCount::Five);
        assert_eq!(reading.resistance_ohms, 10_000.0);
        assert_eq!(reading.tolerance_percent, 1.0);
    }

    #[test]
    fn test_decode_sub_ohm_multiplier() {
        let sel = BandSelection::from_colors([Yellow, Violet, Gold, Gold]);
        assert_eq!(decode(&sel, BandCount::Four).resistance_ohms, 4.7);

        let sel = BandSelection::from_colors([Red, Red, Silver, Silver]);
        let reading = decode(&sel, BandCount::Four);
        assert_eq!(reading.resistance_ohms, 0.22);
        assert_eq!(reading.tolerance_percent, 10.0);
    }

    #[test]
    fn test_decode_missing_multiplier_is_zero() {
        let sel = BandSelection::from_colors([Brown, Black]);
        let reading = decode(&sel, BandCount::Four);
        assert_eq!(reading.resistance_ohms, 0.0);
        assert_eq!(reading.tolerance_percent, 0.0);
    }

    #[test]
    fn test_decode_tolerance_without_digits() {
        let mut sel = BandSelection::new();
        sel.set(4, Gold).unwrap();
        let reading = decode(&sel, BandCount::Four);
        assert_eq!(reading.resistance_ohms, 0.0);
        assert_eq!(reading.tolerance_percent, 5.0);
    }

    #[test]
    fn test_decode_invalid_role_colors_are_neutral() {
        // gold cannot be a digit
        let sel = BandSelection::from_colors([Gold, Black, Red, Gold]);
        assert_eq!(decode(&sel, BandCount::Four).resistance_ohms, 0.0);

        // white cannot be a multiplier, orange cannot be a tolerance
        let sel = BandSelection::from_colors([Brown, Black, White, Orange]);
        let reading = decode(&sel, BandCount::Four);
        assert_eq!(reading.resistance_ohms, 0.0);
        assert_eq!(reading.tolerance_percent, 0.0);
    }

    #[test]
    fn test_decode_gap_in_digits() {
        let sel = BandSelection::from_optional([Some(Brown), None, Some(Black), Some(Red)]);
        assert_eq!(decode(&sel, BandCount::Five).resistance_ohms, 0.0);
    }

    #[test]
    fn test_same_selection_differs_by_mode() {
        // [brown, black, red, gold, brown] as 4-band ignores position 5
        let sel = BandSelection::from_colors([Brown, Black, Red, Gold, Brown]);
        let four = decode(&sel, BandCount::Four);
        assert_eq!(four.resistance_ohms, 1000.0);
        assert_eq!(four.tolerance_percent, 5.0);

        // gold at position 4 is ×0.1 for 5-band: 102 × 0.1
        let five = decode(&sel, BandCount::Five);
        assert_eq!(five.resistance_ohms, 10.2);
        assert_eq!(five.tolerance_percent, 1.0);
    }

    #[test]
    fn test_selection_position_bounds() {
        let mut sel = BandSelection::new();
        assert!(sel.set(0, Red).is_err());
        assert!(sel.set(6, Red).is_err());
        sel.set(5, Red).unwrap();
        assert_eq!(sel.get(5), Some(Red));
        sel.clear(5);
        assert!(sel.is_empty());
    }
}
