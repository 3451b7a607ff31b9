//! Roll distribution settings.

use serde::{Deserialize, Serialize};

use crate::distribution::{DEFAULT_MAX_FRACTION, WORKFLOW_MIN_FRACTION};
use crate::error::RollError;

/// Substring that marks a joint as a roll joint during discovery.
pub const DEFAULT_ROLL_MARKER: &str = "Roll";

// =============================================================================
// Axis and Pairing
// =============================================================================

/// Rotation channel read from the driver and written to each roll joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationAxis {
    /// X axis (the twist axis for X-down joint orients).
    #[default]
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl RotationAxis {
    /// Returns the rotate channel name (e.g., "rotateX").
    pub fn rotate_channel(&self) -> &'static str {
        match self {
            RotationAxis::X => "rotateX",
            RotationAxis::Y => "rotateY",
            RotationAxis::Z => "rotateZ",
        }
    }
}

/// Which end of the distance ordering receives the largest fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractionPairing {
    /// The joint nearest the reference gets `min_fraction`, the farthest gets
    /// `max_fraction`. With the forearm as reference and the hand as driver,
    /// joints near the wrist follow the hand more closely.
    #[default]
    NearestSmallest,
    /// The joint nearest the reference gets `max_fraction`.
    NearestLargest,
}

// =============================================================================
// Roll Settings
// =============================================================================

/// Settings for distributing a driver's twist over roll joints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RollSettings {
    /// Largest fraction handed to any roll joint.
    #[serde(default = "default_max_fraction")]
    pub max_fraction: f64,
    /// Smallest fraction handed to any roll joint.
    #[serde(default = "default_min_fraction")]
    pub min_fraction: f64,
    /// Pairing direction between distance order and fractions.
    #[serde(default)]
    pub pairing: FractionPairing,
    /// Rotation channel driven on every roll joint.
    #[serde(default)]
    pub axis: RotationAxis,
    /// Name substring used to discover roll joints (case-sensitive).
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_max_fraction() -> f64 {
    DEFAULT_MAX_FRACTION
}

fn default_min_fraction() -> f64 {
    WORKFLOW_MIN_FRACTION
}

fn default_marker() -> String {
    DEFAULT_ROLL_MARKER.to_string()
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            max_fraction: default_max_fraction(),
            min_fraction: default_min_fraction(),
            pairing: FractionPairing::default(),
            axis: RotationAxis::default(),
            marker: default_marker(),
        }
    }
}

impl RollSettings {
    /// Sets the fraction bounds.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_fraction = min;
        self.max_fraction = max;
        self
    }

    /// Sets the pairing direction.
    pub fn with_pairing(mut self, pairing: FractionPairing) -> Self {
        self.pairing = pairing;
        self
    }

    /// Sets the driven rotation axis.
    pub fn with_axis(mut self, axis: RotationAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets the roll joint discovery marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Validates the settings.
    pub fn validate(&self) -> Result<(), RollError> {
        if !self.max_fraction.is_finite() {
            return Err(RollError::NonFiniteBound {
                name: "max_fraction",
                value: self.max_fraction,
            });
        }
        if !self.min_fraction.is_finite() {
            return Err(RollError::NonFiniteBound {
                name: "min_fraction",
                value: self.min_fraction,
            });
        }
        if self.marker.is_empty() {
            return Err(RollError::EmptyMarker);
        }
        Ok(())
    }
}
