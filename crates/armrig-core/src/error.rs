//! Error types for roll distribution and twist planning.

use thiserror::Error;

/// Broad class of a [`RollError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollErrorKind {
    /// The caller passed arguments the computation cannot accept.
    InvalidArgument,
    /// The host could not answer a query about its scene.
    Host,
}

impl RollErrorKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RollErrorKind::InvalidArgument => "invalid_argument",
            RollErrorKind::Host => "host",
        }
    }
}

/// Errors raised while distributing twist across roll joints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RollError {
    #[error("fraction count must be at least 1")]
    ZeroJointCount,
    #[error("cannot pair {joints} joint(s) with {fractions} fraction(s)")]
    LengthMismatch { joints: usize, fractions: usize },
    #[error("{name} must be finite, got {value}")]
    NonFiniteBound { name: &'static str, value: f64 },
    #[error("roll joint marker cannot be empty")]
    EmptyMarker,
    #[error("{field} joint name cannot be empty")]
    EmptyJointName { field: &'static str },
    #[error("roll joint list cannot be empty")]
    NoRollJoints,
    #[error("roll joint '{0}' is listed more than once")]
    DuplicateRollJoint(String),
    #[error("arm joint '{0}' cannot also be a roll joint")]
    RollJointIsArmJoint(String),
    #[error("no roll joints found under '{parent}' matching '{marker}'")]
    NoRollJointsFound { parent: String, marker: String },
    #[error("joint '{0}' does not exist in the scene")]
    UnknownJoint(String),
    #[error("joint '{joint}' is not below '{ancestor}' in the arm chain")]
    BrokenChain { joint: String, ancestor: String },
}

impl RollError {
    /// Returns the stable error code (e.g., "ROLL_001").
    pub fn code(&self) -> &'static str {
        match self {
            RollError::ZeroJointCount => "ROLL_001",
            RollError::LengthMismatch { .. } => "ROLL_002",
            RollError::NonFiniteBound { .. } => "ROLL_003",
            RollError::EmptyMarker => "ROLL_004",
            RollError::EmptyJointName { .. } => "ROLL_005",
            RollError::NoRollJoints => "ROLL_006",
            RollError::DuplicateRollJoint(_) => "ROLL_007",
            RollError::RollJointIsArmJoint(_) => "ROLL_008",
            RollError::NoRollJointsFound { .. } => "ROLL_009",
            RollError::UnknownJoint(_) => "ROLL_010",
            RollError::BrokenChain { .. } => "ROLL_011",
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> RollErrorKind {
        match self {
            RollError::NoRollJointsFound { .. } | RollError::UnknownJoint(_) => {
                RollErrorKind::Host
            }
            _ => RollErrorKind::InvalidArgument,
        }
    }
}
