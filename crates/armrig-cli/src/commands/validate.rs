//! Validate command implementation
//!
//! Checks a rig file and resolves its roll joints without building a plan.

use anyhow::{Context, Result};
use armrig_core::RollError;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{JsonError, ValidateOutput};
use crate::input::{load_rig, RigFile};

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(rig_path: &str, json_output: bool) -> Result<ExitCode> {
    let output = evaluate(Path::new(rig_path));

    if json_output {
        let json =
            serde_json::to_string(&output).context("Failed to serialize validate output")?;
        println!("{}", json);
    } else {
        println!("{} {}", "Validating:".cyan().bold(), rig_path);
        if let Some(hash) = &output.source_hash {
            println!("{} {}", "Source:".dimmed(), &hash[..16]);
        }
        for joint in &output.roll_joints {
            println!("  {} {}", "roll".dimmed(), joint);
        }
        for error in &output.errors {
            println!("  {} [{}] {}", "x".red(), error.code, error.message);
        }
        if output.success {
            println!(
                "\n{} Rig is valid ({} roll joint(s))",
                "SUCCESS".green().bold(),
                output.roll_joints.len()
            );
        } else {
            println!(
                "\n{} Rig has {} error(s)",
                "FAILED".red().bold(),
                output.errors.len()
            );
        }
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Validate a rig file into machine-readable output.
pub fn evaluate(rig_path: &Path) -> ValidateOutput {
    let loaded = match load_rig(rig_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            return ValidateOutput {
                success: false,
                source_hash: None,
                roll_joints: Vec::new(),
                errors: vec![JsonError::new(e.code(), e.to_string())],
            }
        }
    };

    match check(&loaded.rig_file) {
        Ok(roll_joints) => ValidateOutput {
            success: true,
            source_hash: Some(loaded.source_hash),
            roll_joints,
            errors: Vec::new(),
        },
        Err(e) => ValidateOutput {
            success: false,
            source_hash: Some(loaded.source_hash),
            roll_joints: Vec::new(),
            errors: vec![JsonError::from(&e)],
        },
    }
}

fn check(rig_file: &RigFile) -> Result<Vec<String>, RollError> {
    let resolved = rig_file.rig.resolve(&rig_file.scene)?;
    Ok(resolved.roll_joints.into_iter().map(|j| j.name).collect())
}
