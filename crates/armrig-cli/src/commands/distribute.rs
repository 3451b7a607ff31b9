//! Distribute command implementation
//!
//! Loads a rig file, distributes the driver's twist over its roll joints and
//! prints the resulting twist plan.

use anyhow::{Context, Result};
use armrig_core::TwistPlan;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{DistributeOutput, JsonError};
use crate::input::{load_rig, LoadResult};

/// Run the distribute command
///
/// # Arguments
/// * `rig_path` - Path to the rig file (JSON)
/// * `json_output` - Whether to output machine-readable JSON
/// * `pretty` - Pretty-print JSON output
///
/// # Returns
/// Exit code: 0 if a plan was produced, 1 otherwise
pub fn run(rig_path: &str, json_output: bool, pretty: bool) -> Result<ExitCode> {
    if json_output {
        run_json(rig_path, pretty)
    } else {
        run_human(rig_path)
    }
}

/// Evaluate a rig file into machine-readable output.
pub fn evaluate(rig_path: &Path) -> DistributeOutput {
    let LoadResult {
        rig_file,
        source_hash,
    } = match load_rig(rig_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            return DistributeOutput::failure(
                vec![JsonError::new(e.code(), e.to_string())],
                None,
            )
        }
    };

    match rig_file.rig.plan(&rig_file.scene) {
        Ok(plan) => DistributeOutput::success(plan, source_hash),
        Err(e) => DistributeOutput::failure(vec![JsonError::from(&e)], Some(source_hash)),
    }
}

fn run_json(rig_path: &str, pretty: bool) -> Result<ExitCode> {
    let output = evaluate(Path::new(rig_path));
    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("Failed to serialize distribute output")?;
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn run_human(rig_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Distributing:".cyan().bold(), rig_path);

    let LoadResult {
        rig_file,
        source_hash,
    } = load_rig(Path::new(rig_path))
        .with_context(|| format!("Failed to load rig file: {}", rig_path))?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    match rig_file.rig.plan(&rig_file.scene) {
        Ok(plan) => {
            print_plan(&plan);
            println!(
                "\n{} {} roll joint(s) driven by {}",
                "SUCCESS".green().bold(),
                plan.drivers.len(),
                plan.driver
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("  {} [{}] {}", "x".red(), e.code(), e);
            println!("\n{} No twist plan produced", "FAILED".red().bold());
            Ok(ExitCode::from(1))
        }
    }
}

fn print_plan(plan: &TwistPlan) {
    println!(
        "{} {} {} {}",
        "Reference:".dimmed(),
        plan.reference,
        "Driver:".dimmed(),
        plan.driver
    );
    for (index, driver) in plan.drivers.iter().enumerate() {
        println!(
            "  {:>2}. {:<28} {:>6.3}  {} -> {}",
            index + 1,
            driver.target.bold(),
            driver.influence,
            driver.source_attr().dimmed(),
            driver.name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_rig(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_evaluate_success() {
        let file = write_rig(
            r#"{
                "scene": {"joints": [
                    {"name": "forearm_l", "position": [0, 0, 0]},
                    {"name": "forearmRoll_2", "parent": "forearm_l", "position": [10, 0, 0]},
                    {"name": "forearmRoll_1", "parent": "forearm_l", "position": [5, 0, 0]},
                    {"name": "hand_l", "parent": "forearm_l", "position": [15, 0, 0]}
                ]},
                "rig": {"reference": "forearm_l", "driver": "hand_l"}
            }"#,
        );
        let output = evaluate(file.path());
        assert!(output.success);
        let plan = output.plan.unwrap();
        assert_eq!(plan.drivers[0].target, "forearmRoll_1");
        assert_eq!(plan.drivers[0].influence, 0.25);
        assert_eq!(plan.drivers[1].influence, 0.75);
    }

    #[test]
    fn test_evaluate_reports_roll_error() {
        let file = write_rig(
            r#"{
                "scene": {"joints": [{"name": "forearm_l", "position": [0, 0, 0]}]},
                "rig": {"reference": "forearm_l", "driver": "hand_l"}
            }"#,
        );
        let output = evaluate(file.path());
        assert!(!output.success);
        assert!(output.source_hash.is_some());
        assert_eq!(output.errors[0].code, "ROLL_010");
        assert_eq!(output.errors[0].kind.as_deref(), Some("host"));
    }

    #[test]
    fn test_evaluate_reports_parse_error() {
        let file = write_rig("{ not json");
        let output = evaluate(file.path());
        assert!(!output.success);
        assert!(output.source_hash.is_none());
        assert_eq!(output.errors[0].code, "CLI_003");
    }
}
