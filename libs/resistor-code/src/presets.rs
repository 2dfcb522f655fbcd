//! Commonly stocked resistor values offered as quick picks

use serde::Serialize;

use crate::color_table::Tolerance;
use crate::encoder::encode_with;
use crate::error::Result;
use crate::formatter::format_resistance;
use crate::types::{BandCount, BandSequence};

/// Quick-pick values in ohms, smallest first
pub const COMMON_VALUES: [f64; 12] = [
    100.0,
    220.0,
    330.0,
    470.0,
    1_000.0,
    2_200.0,
    4_700.0,
    10_000.0,
    22_000.0,
    47_000.0,
    100_000.0,
    1_000_000.0,
];

#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub ohms: f64,
    pub label: String,
    pub bands: BandSequence,
}

/// Every common value with its label and band encoding
pub fn common_presets(tolerance: Tolerance, band_count: BandCount) -> Result<Vec<Preset>> {
    COMMON_VALUES
        .iter()
        .map(|&ohms| {
            Ok(Preset {
                ohms,
                label: format_resistance(ohms),
                bands: encode_with(ohms, tolerance, band_count)?,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_common_preset_labels() {
        let presets = common_presets(Tolerance::Five, BandCount::Four).unwrap();
        let labels: Vec<&str> = presets.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "100Ω", "220Ω", "330Ω", "470Ω", "1kΩ", "2.2kΩ", "4.7kΩ", "10kΩ", "22kΩ", "47kΩ",
                "100kΩ", "1MΩ"
            ]
        );
    }

    #[test]
    fn test_common_presets_encode_exactly() {
        for bands in [BandCount::Four, BandCount::Five] {
            for preset in common_presets(Tolerance::One, bands).unwrap() {
                assert_eq!(preset.bands.nominal_ohms(), preset.ohms);
            }
        }
    }
}
