//! Fractions command implementation
//!
//! Prints the fraction sequence for a given roll joint count.

use anyhow::{Context, Result};
use armrig_core::{generate_fractions, RollError, RollSettings};
use colored::Colorize;
use std::process::ExitCode;

use super::json_output::{FractionsOutput, JsonError};

/// Run the fractions command
///
/// # Arguments
/// * `count` - Number of roll joints
/// * `max` - Upper fraction bound
/// * `min` - Lower fraction bound
/// * `reverse` - Print in pairing order (ascending) instead of generation order
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    count: usize,
    max: f64,
    min: f64,
    reverse: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let output = evaluate(count, max, min, reverse);

    if json_output {
        let json =
            serde_json::to_string(&output).context("Failed to serialize fractions output")?;
        println!("{}", json);
    } else if output.success {
        println!(
            "{} {} joint(s), max {} min {}{}",
            "Fractions:".cyan().bold(),
            count,
            max,
            min,
            if reverse { " (reversed)" } else { "" }
        );
        for (index, fraction) in output.fractions.iter().enumerate() {
            println!("  {:>2}. {:.4}", index, fraction);
        }
    } else {
        for error in &output.errors {
            println!("  {} [{}] {}", "x".red(), error.code, error.message);
        }
        println!("\n{} No fractions produced", "FAILED".red().bold());
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Compute the fractions output without printing.
pub fn evaluate(count: usize, max: f64, min: f64, reverse: bool) -> FractionsOutput {
    match checked_fractions(count, max, min) {
        Ok(mut fractions) => {
            if reverse {
                fractions.reverse();
            }
            FractionsOutput {
                success: true,
                count,
                fractions,
                errors: Vec::new(),
            }
        }
        Err(e) => FractionsOutput {
            success: false,
            count,
            fractions: Vec::new(),
            errors: vec![JsonError::from(&e)],
        },
    }
}

/// Same bound checks as a rig's settings, then the raw sequence.
fn checked_fractions(count: usize, max: f64, min: f64) -> Result<Vec<f64>, RollError> {
    RollSettings::default().with_bounds(min, max).validate()?;
    generate_fractions(count, max, min)
}
