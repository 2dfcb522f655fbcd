//! Encoder - resistance value to color bands
//!
//! The value is normalized to a prefix of exactly 2 (4-band) or 3 (5-band)
//! significant digits and a power-of-ten multiplier:
//!
//! 1. Raise the exponent while the scaled value still has too many digits,
//!    stopping at ×10M.
//! 2. If nothing was raised, lower the exponent while the scaled value has too
//!    few digits, stopping at ×0.01.
//! 3. Truncate the scaled value to an integer prefix and split it into digits.
//!
//! Digits below the prefix are dropped (999 Ω on 4 bands becomes 99 × 10).
//! Values whose prefix does not fit even at the bounding multipliers are
//! rejected up front, so a digit outside 0-9 is always an engine defect.

use tracing::debug;

use crate::color_table::{BandColor, Multiplier, Tolerance};
use crate::error::{ResistorError, Result};
use crate::types::{BandCount, BandRole, BandSequence, ColorBand};

/// Rounding error, in units of the last place, that a scaled value may carry
const SNAP_ULPS: f64 = 4.0;

/// Encode `value` ohms with a tolerance percentage
///
/// `tolerance_percent` must be one of 0.1, 0.25, 0.5, 1, 2, 5, 10.
pub fn encode(value: f64, tolerance_percent: f64, band_count: BandCount) -> Result<BandSequence> {
    let tolerance = Tolerance::from_percent(tolerance_percent).ok_or_else(|| {
        ResistorError::invalid_tolerance(format!(
            "{}% is not a standard tolerance",
            tolerance_percent
        ))
    })?;
    encode_with(value, tolerance, band_count)
}

/// Encode `value` ohms with an already-validated tolerance
pub fn encode_with(value: f64, tolerance: Tolerance, band_count: BandCount) -> Result<BandSequence> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ResistorError::invalid_value(format!(
            "{} (must be a finite number greater than zero)",
            value
        )));
    }

    let sd = band_count.significant_digits();
    let (prefix, exponent) = normalize(value, sd);
    let upper = 10u64.pow(sd as u32);

    if prefix >= upper {
        return Err(ResistorError::invalid_value(format!(
            "{} Ω exceeds the largest {} value",
            value, band_count
        )));
    }
    if prefix == 0 {
        return Err(ResistorError::invalid_value(format!(
            "{} Ω is below the smallest {} value",
            value, band_count
        )));
    }

    let mut bands = Vec::with_capacity(band_count.len());
    for (idx, digit) in split_digits(prefix, sd).into_iter().enumerate() {
        debug_assert!(digit <= 9, "digit {} out of range", digit);
        let color = u8::try_from(digit)
            .ok()
            .and_then(BandColor::from_digit)
            .ok_or_else(|| {
                ResistorError::internal(format!("digit {} has no color (value {})", digit, value))
            })?;
        bands.push(ColorBand {
            color,
            role: BandRole::Digit {
                position: idx as u8 + 1,
                value: digit as u8,
            },
        });
    }

    debug_assert!(
        (Multiplier::MIN_EXPONENT..=Multiplier::MAX_EXPONENT).contains(&exponent),
        "exponent {} out of range",
        exponent
    );
    let multiplier = Multiplier::from_exponent(exponent).ok_or_else(|| {
        ResistorError::internal(format!(
            "exponent {} has no multiplier color (value {})",
            exponent, value
        ))
    })?;
    bands.push(ColorBand {
        color: multiplier.color(),
        role: BandRole::Multiplier(multiplier),
    });

    bands.push(ColorBand {
        color: tolerance.color(),
        role: BandRole::Tolerance(tolerance),
    });

    debug!(
        value = value,
        bands = %band_count,
        prefix = prefix,
        exponent = exponent,
        tolerance = tolerance.percent(),
        "encode"
    );

    Ok(BandSequence::new(band_count, bands))
}

/// Find the multiplier exponent and integer digit prefix for `value`
fn normalize(value: f64, significant_digits: usize) -> (u64, i32) {
    let upper = 10_f64.powi(significant_digits as i32);
    let lower = 10_f64.powi(significant_digits as i32 - 1);

    let mut exponent = 0;
    while scaled(value, exponent) >= upper && exponent < Multiplier::MAX_EXPONENT {
        exponent += 1;
    }
    if exponent == 0 {
        while scaled(value, exponent) < lower && exponent > Multiplier::MIN_EXPONENT {
            exponent -= 1;
        }
    }

    let mut prefix = snap_floor(scaled(value, exponent));
    // 99.999999999 snaps to 100, which needs one more power of ten
    if prefix >= upper as u64 && exponent < Multiplier::MAX_EXPONENT {
        exponent += 1;
        prefix = snap_floor(scaled(value, exponent));
    }
    (prefix, exponent)
}

/// `value / 10^exponent`, dividing or multiplying by an exact power of ten
fn scaled(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value / 10_f64.powi(exponent)
    } else {
        value * 10_f64.powi(-exponent)
    }
}

/// Floor, except that values within float noise of an integer round to it
fn snap_floor(mantissa: f64) -> u64 {
    let nearest = mantissa.round();
    if (mantissa - nearest).abs() <= SNAP_ULPS * f64::EPSILON * nearest.max(1.0) {
        nearest as u64
    } else {
        mantissa.floor() as u64
    }
}

/// Most-significant first; the leading digit is not reduced modulo 10
fn split_digits(prefix: u64, count: usize) -> Vec<u64> {
    (0..count)
        .map(|i| {
            let divisor = 10u64.pow((count - 1 - i) as u32);
            if i == 0 {
                prefix / divisor
            } else {
                (prefix / divisor) % 10
            }
        })
        .collect()
}
