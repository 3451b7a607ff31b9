//! Rig file loading.
//!
//! A rig file is a JSON document holding a joint snapshot and the roll setup
//! evaluated against it. `rig.arm` optionally names the upper arm the
//! reference and driver must hang below.
//!
//! ```json
//! {
//!   "scene": { "joints": [{ "name": "forearm_l", "position": [28, 140, 0] }] },
//!   "rig": { "reference": "forearm_l", "driver": "hand_l" }
//! }
//! ```

use armrig_core::{RollRigSetup, SceneSnapshot};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Recognized rig file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// A joint snapshot plus the roll setup to evaluate against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RigFile {
    /// Joint hierarchy with world-space positions.
    pub scene: SceneSnapshot,
    /// Roll joint setup.
    pub rig: RollRigSetup,
}

/// Result of loading a rig file.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed rig file.
    pub rig_file: RigFile,
    /// BLAKE3 hash of the file content (hex string).
    pub source_hash: String,
}

/// Errors that can occur during rig file loading.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl InputError {
    /// Stable CLI error code for JSON output.
    pub fn code(&self) -> &'static str {
        use crate::commands::json_output::error_codes;
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        }
    }
}

/// Parse a rig file from a JSON string.
pub fn parse_rig_file(content: &str) -> Result<RigFile, InputError> {
    serde_json::from_str(content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })
}

/// Load a rig file from disk.
///
/// # Arguments
/// * `path` - Path to the rig file (.json)
///
/// # Returns
/// * `Ok(LoadResult)` - Successfully loaded and parsed rig file
/// * `Err(InputError)` - File read or parse error
pub fn load_rig(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {}
        _ => return Err(InputError::UnknownExtension { extension }),
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();
    let rig_file = parse_rig_file(&content)?;

    Ok(LoadResult {
        rig_file,
        source_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RIG_JSON: &str = r#"{
        "scene": {
            "joints": [
                { "name": "forearm_l", "position": [28, 140, 0] },
                { "name": "forearmRoll_1", "parent": "forearm_l", "position": [35, 140, 0] },
                { "name": "hand_l", "parent": "forearm_l", "position": [56, 140, 0] }
            ]
        },
        "rig": { "reference": "forearm_l", "driver": "hand_l" }
    }"#;

    #[test]
    fn test_parse_rig_file() {
        let rig_file = parse_rig_file(RIG_JSON).unwrap();
        assert_eq!(rig_file.scene.joints.len(), 3);
        assert_eq!(rig_file.rig.reference, "forearm_l");
        assert_eq!(rig_file.rig.settings.min_fraction, 0.25);
    }

    #[test]
    fn test_parse_rejects_unknown_top_level_field() {
        let json = r#"{"scene":{"joints":[]},"rig":{"reference":"a","driver":"b"},"ui":{}}"#;
        assert!(matches!(
            parse_rig_file(json),
            Err(InputError::JsonParse { .. })
        ));
    }

    #[test]
    fn test_load_rig_hashes_content() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(RIG_JSON.as_bytes()).unwrap();

        let result = load_rig(file.path()).unwrap();
        assert_eq!(result.source_hash.len(), 64);
        assert_eq!(result.source_hash, blake3::hash(RIG_JSON.as_bytes()).to_hex().to_string());
    }

    #[test]
    fn test_load_rig_unknown_extension() {
        let err = load_rig(Path::new("rig.yaml")).unwrap_err();
        assert!(matches!(err, InputError::UnknownExtension { .. }));
        assert!(err.to_string().contains(".yaml"));
    }

    #[test]
    fn test_load_rig_missing_file() {
        let err = load_rig(Path::new("/nonexistent/armrig/rig.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
    }
}
