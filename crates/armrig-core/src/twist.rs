//! Twist driver planning for arm roll joints.
//!
//! A [`RollRigSetup`] names the reference joint (forearm), the driver joint
//! (hand) and the roll joints between them. [`RollRigSetup::plan`] turns it
//! into a [`TwistPlan`]: one multiplier per roll joint that scales the
//! driver's rotation by that joint's fraction.
//!
//! The driver must sit below the reference in the hierarchy, and both must
//! sit below `arm` when one is named.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::distribution::{distribute, RollJoint, RollWeight};
use crate::error::RollError;
use crate::host::{find_roll_joints, resolve_roll_joints, RigHost};
use crate::point::Point3;
use crate::settings::{RollSettings, RotationAxis};

/// Suffix appended to a roll joint name to form its multiplier name.
pub const MULTIPLIER_SUFFIX: &str = "_rotationMult";

// =============================================================================
// Rig Setup
// =============================================================================

/// Roll joint setup for one arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RollRigSetup {
    /// Root of the arm chain (e.g., "upperarm_l"). When set, the reference
    /// and driver must both be its descendants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm: Option<String>,
    /// Joint the roll joints are sorted against (e.g., "forearm_l").
    pub reference: String,
    /// Joint whose rotation drives the roll joints (e.g., "hand_l").
    pub driver: String,
    /// Explicit roll joints. When omitted, roll joints are discovered under
    /// `reference` by `settings.marker`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_joints: Option<Vec<String>>,
    /// Other arm joints that must not be used as roll joints.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arm_joints: Vec<String>,
    /// Distribution settings.
    #[serde(default)]
    pub settings: RollSettings,
}

impl RollRigSetup {
    /// Creates a setup that discovers its roll joints.
    pub fn new(reference: impl Into<String>, driver: impl Into<String>) -> Self {
        Self {
            arm: None,
            reference: reference.into(),
            driver: driver.into(),
            roll_joints: None,
            arm_joints: Vec::new(),
            settings: RollSettings::default(),
        }
    }

    /// Names the root of the arm chain.
    pub fn with_arm(mut self, arm: impl Into<String>) -> Self {
        self.arm = Some(arm.into());
        self
    }

    /// Uses an explicit roll joint list instead of discovery.
    pub fn with_roll_joints(mut self, joints: Vec<String>) -> Self {
        self.roll_joints = Some(joints);
        self
    }

    /// Sets the arm joints excluded from roll duty.
    pub fn with_arm_joints(mut self, joints: Vec<String>) -> Self {
        self.arm_joints = joints;
        self
    }

    /// Sets the distribution settings.
    pub fn with_settings(mut self, settings: RollSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Validates the setup without consulting a host.
    pub fn validate(&self) -> Result<(), RollError> {
        if self.reference.is_empty() {
            return Err(RollError::EmptyJointName { field: "reference" });
        }
        if self.driver.is_empty() {
            return Err(RollError::EmptyJointName { field: "driver" });
        }
        if self.arm.as_deref() == Some("") {
            return Err(RollError::EmptyJointName { field: "arm" });
        }
        self.settings.validate()?;

        if let Some(roll_joints) = &self.roll_joints {
            if roll_joints.is_empty() {
                return Err(RollError::NoRollJoints);
            }
            self.check_roll_joints(roll_joints)?;
        }
        Ok(())
    }

    fn check_roll_joints(&self, roll_joints: &[String]) -> Result<(), RollError> {
        let arm: HashSet<&str> = self
            .arm_joints
            .iter()
            .map(String::as_str)
            .chain(self.arm.as_deref())
            .chain([self.reference.as_str(), self.driver.as_str()])
            .collect();

        let mut seen = HashSet::new();
        for joint in roll_joints {
            if joint.is_empty() {
                return Err(RollError::EmptyJointName { field: "roll" });
            }
            if arm.contains(joint.as_str()) {
                return Err(RollError::RollJointIsArmJoint(joint.clone()));
            }
            if !seen.insert(joint.as_str()) {
                return Err(RollError::DuplicateRollJoint(joint.clone()));
            }
        }
        Ok(())
    }

    /// Roll joint names, either explicit or discovered under the reference.
    pub fn roll_joint_names<H: RigHost + ?Sized>(
        &self,
        host: &H,
    ) -> Result<Vec<String>, RollError> {
        match &self.roll_joints {
            Some(joints) => Ok(joints.clone()),
            None => {
                let found = find_roll_joints(host, &self.reference, &self.settings.marker);
                if found.is_empty() {
                    return Err(RollError::NoRollJointsFound {
                        parent: self.reference.clone(),
                        marker: self.settings.marker.clone(),
                    });
                }
                self.check_roll_joints(&found)?;
                Ok(found)
            }
        }
    }

    /// Checks that `arm` (if set), `reference` and `driver` exist and that each
    /// one hangs below the one before it.
    pub fn check_chain<H: RigHost + ?Sized>(&self, host: &H) -> Result<(), RollError> {
        let mut chain: Vec<&str> = self.arm.iter().map(String::as_str).collect();
        chain.extend([self.reference.as_str(), self.driver.as_str()]);

        for joint in &chain {
            if host.world_position(joint).is_none() {
                return Err(RollError::UnknownJoint(joint.to_string()));
            }
        }
        for pair in chain.windows(2) {
            let (ancestor, joint) = (pair[0], pair[1]);
            if !host.descendant_joints(ancestor).iter().any(|d| d == joint) {
                return Err(RollError::BrokenChain {
                    joint: joint.to_string(),
                    ancestor: ancestor.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validates the setup against a host and looks up every joint it uses.
    pub fn resolve<H: RigHost + ?Sized>(&self, host: &H) -> Result<ResolvedRig, RollError> {
        self.validate()?;
        self.check_chain(host)?;

        let reference_position = host
            .world_position(&self.reference)
            .ok_or_else(|| RollError::UnknownJoint(self.reference.clone()))?;
        let names = self.roll_joint_names(host)?;
        let roll_joints = resolve_roll_joints(host, &names)?;

        Ok(ResolvedRig {
            reference_position,
            roll_joints,
        })
    }

    /// Builds the twist plan against a host.
    pub fn plan<H: RigHost + ?Sized>(&self, host: &H) -> Result<TwistPlan, RollError> {
        let resolved = self.resolve(host)?;
        let weights = distribute(
            &resolved.roll_joints,
            resolved.reference_position,
            &self.settings,
        )?;

        Ok(TwistPlan::from_weights(
            &self.reference,
            &self.driver,
            self.settings.axis,
            weights,
        ))
    }
}

/// A setup checked against a host, with joint positions looked up.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRig {
    /// World position of the reference joint.
    pub reference_position: Point3,
    /// Roll joints in discovery (or listed) order.
    pub roll_joints: Vec<RollJoint>,
}

// =============================================================================
// Twist Plan
// =============================================================================

/// One multiplier that feeds a scaled driver rotation into a roll joint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwistDriver {
    /// Multiplier name (`<target>_rotationMult`).
    pub name: String,
    /// Driver joint read by the multiplier.
    pub source: String,
    /// Roll joint written by the multiplier.
    pub target: String,
    /// Rotation channel on both ends.
    pub axis: RotationAxis,
    /// Coefficient applied to the driver rotation.
    pub influence: f64,
}

impl TwistDriver {
    /// Source attribute path (e.g., "hand_l.rotateX").
    pub fn source_attr(&self) -> String {
        format!("{}.{}", self.source, self.axis.rotate_channel())
    }

    /// Target attribute path (e.g., "forearmRoll_1.rotateX").
    pub fn target_attr(&self) -> String {
        format!("{}.{}", self.target, self.axis.rotate_channel())
    }
}

/// Twist drivers for every roll joint, closest to the reference first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwistPlan {
    /// Reference joint the roll joints were sorted against.
    pub reference: String,
    /// Driver joint.
    pub driver: String,
    /// One driver per roll joint.
    pub drivers: Vec<TwistDriver>,
}

impl TwistPlan {
    /// Builds a plan from ordered weights.
    pub fn from_weights(
        reference: &str,
        driver: &str,
        axis: RotationAxis,
        weights: Vec<RollWeight>,
    ) -> Self {
        let drivers = weights
            .into_iter()
            .map(|w| TwistDriver {
                name: format!("{}{}", w.joint, MULTIPLIER_SUFFIX),
                source: driver.to_string(),
                target: w.joint,
                axis,
                influence: w.fraction,
            })
            .collect();
        Self {
            reference: reference.to_string(),
            driver: driver.to_string(),
            drivers,
        }
    }

    /// The plan as plain `(joint, fraction)` weights.
    pub fn weights(&self) -> Vec<RollWeight> {
        self.drivers
            .iter()
            .map(|d| RollWeight {
                joint: d.target.clone(),
                fraction: d.influence,
            })
            .collect()
    }
}
