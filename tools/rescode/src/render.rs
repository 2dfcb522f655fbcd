//! Terminal and JSON output helpers

use anyhow::Result;
use colored::{ColoredString, Colorize};
use resistor_code::{format_resistance, BandColor, BandSequence, ColorBand};
use serde::Serialize;

/// Output mode selected by `--json` / `output.json`
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Flattened band for display and JSON output
#[derive(Debug, Clone, Serialize)]
pub struct BandView {
    pub color: BandColor,
    pub hex: &'static str,
    pub name: &'static str,
    pub meaning: String,
}

impl From<&ColorBand> for BandView {
    fn from(band: &ColorBand) -> Self {
        Self {
            color: band.color,
            hex: band.color.hex(),
            name: band.display_name(),
            meaning: band.meaning(),
        }
    }
}

/// Solid block in the band's color
pub fn swatch(color: BandColor) -> ColoredString {
    let (r, g, b) = color.rgb();
    "███".truecolor(r, g, b)
}

/// One-line strip of swatches: `███ ███ ███ ███`
pub fn strip(seq: &BandSequence) -> String {
    seq.bands()
        .iter()
        .map(|b| swatch(b.color).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_bands(seq: &BandSequence) {
    println!("  {}", strip(seq));
    println!();
    for (idx, band) in seq.bands().iter().enumerate() {
        println!(
            "  {:>2}. {} {:<8} {:<8} {}",
            idx + 1,
            swatch(band.color),
            band.color.english_name(),
            band.display_name().dimmed(),
            band.meaning().bright_cyan()
        );
    }
}

/// `-` when there is nothing to show
pub fn ohms_or_dash(ohms: Option<f64>) -> String {
    ohms.filter(|v| *v > 0.0)
        .map(format_resistance)
        .unwrap_or_else(|| "-".to_string())
}

pub fn dash_or(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_ohms_or_dash() {
        assert_eq!(ohms_or_dash(Some(1500.0)), "1.5kΩ");
        assert_eq!(ohms_or_dash(Some(0.0)), "-");
        assert_eq!(ohms_or_dash(None), "-");
    }

    #[test]
    fn test_band_view() {
        let seq = resistor_code::encode(4700.0, 5.0, resistor_code::BandCount::Four).unwrap();
        let views: Vec<BandView> = seq.bands().iter().map(BandView::from).collect();
        assert_eq!(views[0].name, "Kuning");
        assert_eq!(views[0].hex, "#FFFF00");
        assert_eq!(views[2].meaning, "×100");
        assert_eq!(views[3].meaning, "±5%");
    }
}
