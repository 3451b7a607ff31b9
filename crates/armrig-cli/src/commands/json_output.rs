//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on every command.

use armrig_core::{RollError, TwistPlan};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Library errors pass their own `ROLL_xxx` codes through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "ROLL_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error kind for library errors ("invalid_argument" or "host")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind: None,
        }
    }
}

impl From<&RollError> for JsonError {
    fn from(err: &RollError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            kind: Some(err.kind().as_str().to_string()),
        }
    }
}

/// Output of `armrig distribute --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributeOutput {
    /// Whether a plan was produced.
    pub success: bool,
    /// BLAKE3 hash of the rig file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// The twist plan on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<TwistPlan>,
    /// Errors on failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

impl DistributeOutput {
    /// Successful output.
    pub fn success(plan: TwistPlan, source_hash: String) -> Self {
        Self {
            success: true,
            source_hash: Some(source_hash),
            plan: Some(plan),
            errors: Vec::new(),
        }
    }

    /// Failed output.
    pub fn failure(errors: Vec<JsonError>, source_hash: Option<String>) -> Self {
        Self {
            success: false,
            source_hash,
            plan: None,
            errors,
        }
    }
}

/// Output of `armrig fractions --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FractionsOutput {
    /// Whether fractions were produced.
    pub success: bool,
    /// Requested count.
    pub count: usize,
    /// Generated fractions (empty on failure).
    pub fractions: Vec<f64>,
    /// Errors on failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// Output of `armrig validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidateOutput {
    /// Whether the rig file is valid.
    pub success: bool,
    /// BLAKE3 hash of the rig file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// Resolved roll joints (discovered or explicit).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roll_joints: Vec<String>,
    /// Errors on failure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}
