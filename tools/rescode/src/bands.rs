//! Band conversion commands: encode, decode, format, table, presets

use anyhow::{bail, Context, Result};
use colored::Colorize;
use resistor_code::{
    common_presets, decode, encode, format_resistance, format_tolerance, parse_resistance,
    reference_table, BandColor, BandCount, BandSelection, ResistorReading, Tolerance,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::RescodeConfig;
use crate::render::{self, BandView, Output};

/// Explicit `--bands`, else the configured default
pub fn resolve_band_count(bands: Option<u8>, config: &RescodeConfig) -> Result<BandCount> {
    match bands {
        Some(n) => BandCount::try_from(n).context("--bands must be 4 or 5"),
        None => Ok(config.defaults.band_count),
    }
}

/// Explicit `--tolerance`, else the configured default
pub fn resolve_tolerance(tolerance: Option<f64>, config: &RescodeConfig) -> Result<Tolerance> {
    match tolerance {
        Some(t) => Tolerance::from_percent(t)
            .with_context(|| format!("±{}% is not a standard tolerance", t)),
        None => config.default_tolerance(),
    }
}

#[derive(Debug, Serialize)]
struct EncodeReport {
    input_ohms: f64,
    input_display: String,
    band_count: BandCount,
    tolerance: Tolerance,
    bands: Vec<BandView>,
    nominal_ohms: f64,
    nominal_display: String,
}

pub fn handle_encode(
    value: &str,
    tolerance: Option<f64>,
    bands: Option<u8>,
    config: &RescodeConfig,
    output: Output,
) -> Result<()> {
    let ohms = parse_resistance(value).with_context(|| format!("Cannot read '{}'", value))?;
    let tolerance = resolve_tolerance(tolerance, config)?;
    let band_count = resolve_band_count(bands, config)?;

    let seq = encode(ohms, tolerance.percent(), band_count)
        .with_context(|| format!("{} cannot be color coded", value))?;
    let nominal = seq.nominal_ohms();
    if nominal != ohms {
        info!(
            "{} does not fit {} significant digits, bands encode {}",
            format_resistance(ohms),
            band_count.significant_digits(),
            format_resistance(nominal)
        );
    }

    if output.json {
        return output.print_json(&EncodeReport {
            input_ohms: ohms,
            input_display: format_resistance(ohms),
            band_count,
            tolerance,
            bands: seq.bands().iter().map(BandView::from).collect(),
            nominal_ohms: nominal,
            nominal_display: format_resistance(nominal),
        });
    }

    println!(
        "{} {} {} ({})",
        "Resistor:".bright_cyan(),
        format_resistance(ohms).bold(),
        tolerance.label(),
        band_count
    );
    println!();
    render::print_bands(&seq);
    println!();
    if nominal != ohms {
        println!(
            "{} bands encode {}",
            "Note:".yellow(),
            format_resistance(nominal).yellow()
        );
    }
    Ok(())
}

/// Parse color arguments; `-`, `_` and `none` leave a position unselected
pub fn parse_color_args(colors: &[String]) -> Result<Vec<Option<BandColor>>> {
    colors
        .iter()
        .map(|arg| match arg.trim().to_lowercase().as_str() {
            "-" | "_" | "none" => Ok(None),
            _ => arg
                .parse::<BandColor>()
                .map(Some)
                .with_context(|| format!("Unknown band color '{}'", arg)),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct DecodeReport {
    reading: ResistorReading,
    resistance: String,
    tolerance: String,
    range: Option<(String, String)>,
}

pub fn handle_decode(
    colors: &[String],
    bands: Option<u8>,
    config: &RescodeConfig,
    output: Output,
) -> Result<()> {
    let band_count = resolve_band_count(bands, config)?;
    let picks = parse_color_args(colors)?;
    if picks.len() > band_count.len() {
        bail!(
            "{} colors given, a {} resistor has {}",
            picks.len(),
            band_count,
            band_count.len()
        );
    }

    let selection = BandSelection::from_optional(picks);
    let reading = decode(&selection, band_count);
    debug!(?reading, "decoded selection");

    let resistance = render::ohms_or_dash(Some(reading.resistance_ohms));
    let tolerance = if reading.tolerance_percent > 0.0 {
        format_tolerance(reading.tolerance_percent)
    } else {
        "-".to_string()
    };
    let range = reading
        .range()
        .map(|(low, high)| (format_resistance(low), format_resistance(high)));

    if output.json {
        return output.print_json(&DecodeReport {
            reading,
            resistance,
            tolerance,
            range,
        });
    }

    for position in 1..=band_count.len() as u8 {
        let label = if position == band_count.multiplier_position() {
            "Multiplier".to_string()
        } else if position == band_count.tolerance_position() {
            "Tolerance".to_string()
        } else {
            format!("Band {}", position)
        };
        match selection.get(position) {
            Some(color) => println!(
                "  {:<10} {} {}",
                label,
                render::swatch(color),
                color.english_name()
            ),
            None => println!("  {:<10} {}", label, "not selected".dimmed()),
        }
    }
    println!();
    println!("{} {}", "Resistance:".bright_cyan(), resistance.bold());
    println!("{} {}", "Tolerance: ".bright_cyan(), tolerance);
    if let Some((low, high)) = range {
        println!("{} {} - {}", "Range:     ".bright_cyan(), low, high);
    }
    Ok(())
}

pub fn handle_format(value: &str, output: Output) -> Result<()> {
    let ohms = parse_resistance(value).with_context(|| format!("Cannot read '{}'", value))?;
    let shown = format_resistance(ohms);
    if output.json {
        return output.print_json(&serde_json::json!({ "ohms": ohms, "display": shown }));
    }
    println!("{}", shown);
    Ok(())
}

pub fn handle_table(output: Output) -> Result<()> {
    let rows = reference_table();
    if output.json {
        return output.print_json(&rows);
    }

    println!(
        "  {:<3} {:<8} {:<8} {:>5} {:>10} {:>10}",
        "", "Color", "Name", "Digit", "Multiplier", "Tolerance"
    );
    for row in &rows {
        let digit = row.digit.map(|d| d.to_string());
        println!(
            "  {} {:<8} {:<8} {:>5} {:>10} {:>10}",
            render::swatch(row.color),
            row.color.english_name(),
            row.display_name,
            render::dash_or(digit.as_deref()),
            render::dash_or(row.multiplier),
            render::dash_or(row.tolerance)
        );
    }
    Ok(())
}

pub fn handle_presets(
    tolerance: Option<f64>,
    bands: Option<u8>,
    config: &RescodeConfig,
    output: Output,
) -> Result<()> {
    let tolerance = resolve_tolerance(tolerance, config)?;
    let band_count = resolve_band_count(bands, config)?;
    let presets = common_presets(tolerance, band_count)?;

    if output.json {
        return output.print_json(&presets);
    }

    println!(
        "{} {} {}",
        "Common values".bright_cyan(),
        band_count,
        tolerance.label()
    );
    for preset in &presets {
        println!("  {:>6}  {}", preset.label, render::strip(&preset.bands));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_color_args() {
        let picks = parse_color_args(&args(&["yellow", "Ungu", "-", "gold"])).unwrap();
        assert_eq!(
            picks,
            vec![
                Some(BandColor::Yellow),
                Some(BandColor::Violet),
                None,
                Some(BandColor::Gold)
            ]
        );
        assert!(parse_color_args(&args(&["plaid"])).is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let config = RescodeConfig::default();
        assert_eq!(resolve_band_count(None, &config).unwrap(), BandCount::Four);
        assert_eq!(resolve_band_count(Some(5), &config).unwrap(), BandCount::Five);
        assert!(resolve_band_count(Some(3), &config).is_err());

        assert_eq!(resolve_tolerance(None, &config).unwrap(), Tolerance::Five);
        assert_eq!(resolve_tolerance(Some(0.5), &config).unwrap(), Tolerance::PointFive);
        assert!(resolve_tolerance(Some(20.0), &config).is_err());
    }

    #[test]
    fn test_decode_rejects_extra_colors() {
        let config = RescodeConfig::default();
        let colors = args(&["brown", "black", "black", "red", "brown"]);
        assert!(handle_decode(&colors, Some(4), &config, Output { json: true }).is_err());
    }
}
