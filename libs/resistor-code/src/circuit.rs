//! Series/parallel totals and Ohm's law
//!
//! - Series: `R = R₁ + R₂ + … + Rₙ`
//! - Parallel: `1/R = 1/R₁ + 1/R₂ + … + 1/Rₙ`
//! - `I = V / R`, `P = V × I`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{ResistorError, Result};

/// Sum of resistances (0 for an empty list)
pub fn series_total(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Reciprocal of the summed conductances.
///
/// A zero resistor shorts the branch and gives `Some(0.0)`. `None` when there
/// is nothing to combine: an empty list, all-zero values, or a reciprocal sum
/// that is not a finite positive number.
pub fn parallel_total(values: &[f64]) -> Option<f64> {
    if values.is_empty() || values.iter().all(|v| *v == 0.0) {
        return None;
    }
    if values.iter().any(|v| *v == 0.0) {
        return Some(0.0);
    }
    let reciprocal_sum: f64 = values.iter().map(|v| 1.0 / v).sum();
    if reciprocal_sum.is_finite() && reciprocal_sum > 0.0 {
        Some(1.0 / reciprocal_sum)
    } else {
        None
    }
}

/// Current and power drawn from a voltage source
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ElectricalSummary {
    pub voltage: f64,
    pub resistance: f64,
    pub current: f64,
    pub power: f64,
}

/// Apply Ohm's law; current and power are 0 unless both inputs are positive
pub fn ohms_law(voltage: f64, resistance: f64) -> ElectricalSummary {
    if voltage > 0.0 && resistance > 0.0 {
        let current = voltage / resistance;
        ElectricalSummary {
            voltage,
            resistance,
            current,
            power: voltage * current,
        }
    } else {
        ElectricalSummary {
            voltage,
            resistance,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    #[default]
    Series,
    Parallel,
}

impl Topology {
    /// Combined resistance, `None` when the list cannot be combined
    pub fn total(self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        match self {
            Topology::Series => Some(series_total(values)),
            Topology::Parallel => parallel_total(values),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Series => f.write_str("series"),
            Topology::Parallel => f.write_str("parallel"),
        }
    }
}

impl FromStr for Topology {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "series" | "seri" => Ok(Topology::Series),
            "parallel" | "paralel" => Ok(Topology::Parallel),
            other => Err(ResistorError::invalid_value(format!(
                "unknown topology '{}' (expected series or parallel)",
                other
            ))),
        }
    }
}

/// A resistor placed in a [`Circuit`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedResistor {
    pub id: u32,
    pub ohms: f64,
}

/// Editable list of resistors sharing one topology
#[derive(Debug, Clone, Default, Serialize)]
pub struct Circuit {
    topology: Topology,
    resistors: Vec<PlacedResistor>,
    #[serde(skip)]
    next_id: u32,
}

impl Circuit {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            ..Default::default()
        }
    }

    /// Build from a list of values, rejecting the first invalid one
    pub fn with_values(topology: Topology, values: &[f64]) -> Result<Self> {
        let mut circuit = Self::new(topology);
        for &ohms in values {
            circuit.add(ohms)?;
        }
        Ok(circuit)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Switch topology, keeping the resistors
    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    pub fn resistors(&self) -> &[PlacedResistor] {
        &self.resistors
    }

    pub fn values(&self) -> Vec<f64> {
        self.resistors.iter().map(|r| r.ohms).collect()
    }

    /// Add a resistor; the value must be finite and greater than zero
    pub fn add(&mut self, ohms: f64) -> Result<u32> {
        if !ohms.is_finite() || ohms <= 0.0 {
            return Err(ResistorError::invalid_value(format!(
                "{} (resistors must be greater than zero)",
                ohms
            )));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.resistors.push(PlacedResistor { id, ohms });
        Ok(id)
    }

    /// Remove by id; returns the removed resistor if it existed
    pub fn remove(&mut self, id: u32) -> Option<PlacedResistor> {
        let idx = self.resistors.iter().position(|r| r.id == id)?;
        Some(self.resistors.remove(idx))
    }

    pub fn clear(&mut self) {
        self.resistors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.resistors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.resistors.len()
    }

    /// Combined resistance, `None` while the circuit is empty
    pub fn total(&self) -> Option<f64> {
        let total = self.topology.total(&self.values());
        debug!(
            topology = %self.topology,
            count = self.resistors.len(),
            total = total.unwrap_or(0.0),
            "circuit total"
        );
        total
    }

    /// Ohm's law at `voltage` against the combined resistance
    pub fn electrical(&self, voltage: f64) -> ElectricalSummary {
        ohms_law(voltage, self.total().unwrap_or(0.0))
    }
}
