//! Roll joint ordering and twist fraction generation.
//!
//! Roll joints are sorted by their distance to a reference joint (usually the
//! forearm) and each one is paired with a fraction of the driver's rotation.
//! Everything here is pure: positions in, weights out.

use serde::{Deserialize, Serialize};

use crate::error::RollError;
use crate::point::Point3;
use crate::settings::{FractionPairing, RollSettings};

/// Default upper fraction bound.
pub const DEFAULT_MAX_FRACTION: f64 = 0.75;

/// Default lower fraction bound.
pub const DEFAULT_MIN_FRACTION: f64 = 0.15;

/// Lower fraction bound used by the arm rig workflow.
pub const WORKFLOW_MIN_FRACTION: f64 = 0.25;

/// Fraction handed to a lone roll joint, whatever the bounds.
pub const SINGLE_JOINT_FRACTION: f64 = 0.5;

/// A roll joint and its world-space position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollJoint {
    /// Host identifier of the joint.
    pub name: String,
    /// World-space position.
    pub position: Point3,
}

impl RollJoint {
    /// Creates a new roll joint.
    pub fn new(name: impl Into<String>, position: impl Into<Point3>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }
}

/// A roll joint paired with its share of the driver's rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollWeight {
    /// Host identifier of the joint.
    pub joint: String,
    /// Coefficient applied to the driving rotation.
    pub fraction: f64,
}

/// Euclidean distance between two points.
pub fn distance(a: Point3, b: Point3) -> f64 {
    a.distance_to(&b)
}

/// Sorts roll joints by ascending distance to `reference`.
///
/// The sort is stable: joints at equal distance keep their input order.
/// A NaN distance sorts after every finite one.
pub fn order_by_distance(joints: &[RollJoint], reference: Point3) -> Vec<RollJoint> {
    let mut keyed: Vec<(f64, &RollJoint)> = joints
        .iter()
        .map(|joint| {
            let d = distance(joint.position, reference);
            (if d.is_nan() { f64::INFINITY } else { d }, joint)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, joint)| joint.clone()).collect()
}

/// Generates `count` fractions descending linearly from `max_value` to `min_value`.
///
/// A single joint always receives [`SINGLE_JOINT_FRACTION`].
///
/// # Example
/// ```
/// use armrig_core::distribution::generate_fractions;
///
/// let fractions = generate_fractions(5, 0.75, 0.25).unwrap();
/// assert_eq!(fractions, vec![0.75, 0.625, 0.5, 0.375, 0.25]);
/// assert!(generate_fractions(0, 0.75, 0.25).is_err());
/// ```
pub fn generate_fractions(
    count: usize,
    max_value: f64,
    min_value: f64,
) -> Result<Vec<f64>, RollError> {
    match count {
        0 => Err(RollError::ZeroJointCount),
        1 => Ok(vec![SINGLE_JOINT_FRACTION]),
        _ => {
            let step = (max_value - min_value) / (count - 1) as f64;
            Ok((0..count).map(|i| max_value - i as f64 * step).collect())
        }
    }
}

/// Pairs an ordering with fractions by position.
pub fn pair_weights(
    ordering: &[RollJoint],
    fractions: &[f64],
) -> Result<Vec<RollWeight>, RollError> {
    if ordering.len() != fractions.len() {
        return Err(RollError::LengthMismatch {
            joints: ordering.len(),
            fractions: fractions.len(),
        });
    }
    Ok(ordering
        .iter()
        .zip(fractions)
        .map(|(joint, &fraction)| RollWeight {
            joint: joint.name.clone(),
            fraction,
        })
        .collect())
}

/// Orders `joints` by distance to `reference` and assigns each a fraction.
///
/// The generated sequence is reversed before pairing, so with the default
/// [`FractionPairing::NearestSmallest`] the closest joint receives
/// `min_fraction` and the farthest `max_fraction`.
pub fn distribute(
    joints: &[RollJoint],
    reference: Point3,
    settings: &RollSettings,
) -> Result<Vec<RollWeight>, RollError> {
    settings.validate()?;

    let ordering = order_by_distance(joints, reference);
    let mut fractions =
        generate_fractions(ordering.len(), settings.max_fraction, settings.min_fraction)?;
    fractions.reverse();
    if settings.pairing == FractionPairing::NearestLargest {
        fractions.reverse();
    }

    pair_weights(&ordering, &fractions)
}
