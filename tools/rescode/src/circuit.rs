//! Circuit commands - combined resistance and Ohm's law

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use resistor_code::{
    format_current, format_power, format_resistance, parse_resistance, Circuit,
    ElectricalSummary, Topology,
};
use serde::Serialize;

use crate::render::{self, Output};

#[derive(Subcommand)]
pub enum CircuitCommands {
    /// Resistors in series: R = R1 + R2 + ... + Rn
    Series {
        /// Resistor values (e.g. 220 4.7k 1M)
        #[arg(required = true)]
        values: Vec<String>,

        /// Source voltage for current and power
        #[arg(long)]
        voltage: Option<f64>,
    },

    /// Resistors in parallel: 1/R = 1/R1 + 1/R2 + ... + 1/Rn
    Parallel {
        /// Resistor values (e.g. 220 4.7k 1M)
        #[arg(required = true)]
        values: Vec<String>,

        /// Source voltage for current and power
        #[arg(long)]
        voltage: Option<f64>,
    },
}

#[derive(Debug, Serialize)]
struct CircuitReport<'a> {
    circuit: &'a Circuit,
    total_ohms: Option<f64>,
    total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    electrical: Option<ElectricalSummary>,
}

pub fn handle_command(cmd: CircuitCommands, output: Output) -> Result<()> {
    let (topology, values, voltage) = match cmd {
        CircuitCommands::Series { values, voltage } => (Topology::Series, values, voltage),
        CircuitCommands::Parallel { values, voltage } => (Topology::Parallel, values, voltage),
    };

    let circuit = build_circuit(topology, &values)?;
    let total = circuit.total();
    let electrical = voltage.map(|v| circuit.electrical(v));

    if output.json {
        return output.print_json(&CircuitReport {
            circuit: &circuit,
            total_ohms: total,
            total: render::ohms_or_dash(total),
            electrical,
        });
    }

    println!(
        "{} {} resistors in {}",
        "Circuit:".bright_cyan(),
        circuit.len(),
        topology
    );
    for resistor in circuit.resistors() {
        println!("  R{:<3} {}", resistor.id + 1, format_resistance(resistor.ohms));
    }
    println!();
    println!(
        "{} {}",
        "Total:  ".bright_cyan(),
        render::ohms_or_dash(total).bold()
    );

    if let Some(summary) = electrical {
        println!("{} {} V", "Voltage:".bright_cyan(), summary.voltage);
        println!("{} {}", "Current:".bright_cyan(), format_current(summary.current));
        println!("{} {}", "Power:  ".bright_cyan(), format_power(summary.power));
    }
    Ok(())
}

fn build_circuit(topology: Topology, values: &[String]) -> Result<Circuit> {
    let ohms = values
        .iter()
        .map(|v| parse_resistance(v).with_context(|| format!("Cannot read '{}'", v)))
        .collect::<Result<Vec<_>>>()?;
    Circuit::with_values(topology, &ohms).context("Invalid resistor in circuit")
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_circuit() {
        let circuit = build_circuit(Topology::Parallel, &values(&["1k", "1k"])).unwrap();
        assert_eq!(circuit.total(), Some(500.0));

        let circuit = build_circuit(Topology::Series, &values(&["220", "4.7k"])).unwrap();
        assert_eq!(circuit.total(), Some(4920.0));
    }

    #[test]
    fn test_build_circuit_rejects_bad_values() {
        assert!(build_circuit(Topology::Series, &values(&["1k", "abc"])).is_err());
        assert!(build_circuit(Topology::Series, &values(&["0"])).is_err());
    }
}
