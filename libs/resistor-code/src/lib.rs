//! resistor-code - Resistor color-code engine
//!
//! Converts between resistance values and resistor color bands, formats values
//! for display, and totals series/parallel resistor networks.
//!
//! # Features
//!
//! - **Encoding**: value + tolerance → 4-band or 5-band color sequence
//! - **Decoding**: per-position color picks → resistance and tolerance
//! - **Formatting**: `1500.0` → `1.5kΩ`, and back
//! - **Circuits**: series/parallel totals, current and power via Ohm's law
//!
//! # Example
//!
//! ```rust
//! use resistor_code::{decode, encode, format_resistance, BandColor, BandCount};
//!
//! // 4.7kΩ ±5% on a 4-band resistor: yellow, violet, red, gold
//! let bands = encode(4700.0, 5.0, BandCount::Four).unwrap();
//! assert_eq!(
//!     bands.colors(),
//!     [BandColor::Yellow, BandColor::Violet, BandColor::Red, BandColor::Gold]
//! );
//!
//! // and back again
//! let reading = decode(&bands.to_selection(), BandCount::Four);
//! assert_eq!(reading.resistance_ohms, 4700.0);
//! assert_eq!(reading.tolerance_percent, 5.0);
//! assert_eq!(format_resistance(reading.resistance_ohms), "4.7kΩ");
//! ```
//!
//! # Band layout
//!
//! | Mode   | Bands                                          |
//! |--------|------------------------------------------------|
//! | 4-band | digit, digit, multiplier, tolerance            |
//! | 5-band | digit, digit, digit, multiplier, tolerance     |

pub mod circuit;
pub mod color_table;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod formatter;
pub mod presets;
pub mod types;

// Re-exports for convenience
pub use circuit::{
    ohms_law, parallel_total, series_total, Circuit, ElectricalSummary, PlacedResistor, Topology,
};
pub use color_table::{reference_table, BandColor, Multiplier, ReferenceRow, Tolerance};
pub use decoder::{decode, BandSelection};
pub use encoder::{encode, encode_with};
pub use error::{ResistorError, Result};
pub use formatter::{
    format_current, format_power, format_resistance, format_tolerance, parse_resistance,
    ResistanceUnit,
};
pub use presets::{common_presets, Preset, COMMON_VALUES};
pub use types::{BandCount, BandRole, BandSequence, ColorBand, ResistorReading};
