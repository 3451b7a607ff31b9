//! armrig Core Library
//!
//! Distributes a driver joint's twist across the roll joints of an arm.
//!
//! # Overview
//!
//! Roll joints sit between a reference joint (the forearm) and a driver joint
//! (the hand). Each one receives a fraction of the driver's rotation so the
//! twist is spread along the limb instead of collapsing at the wrist.
//!
//! - Roll joints are sorted by distance to the reference joint.
//! - A linear fraction sequence is generated and paired with that order.
//! - The result can be turned into a [`TwistPlan`] that a host applies.
//!
//! # Example
//!
//! ```
//! use armrig_core::{distribute, Point3, RollJoint, RollSettings};
//!
//! let joints = vec![
//!     RollJoint::new("forearmRoll_2", [14.0, 0.0, 0.0]),
//!     RollJoint::new("forearmRoll_1", [7.0, 0.0, 0.0]),
//! ];
//! let weights = distribute(&joints, Point3::ORIGIN, &RollSettings::default()).unwrap();
//!
//! assert_eq!(weights[0].joint, "forearmRoll_1");
//! assert_eq!(weights[0].fraction, 0.25);
//! assert_eq!(weights[1].fraction, 0.75);
//! ```
//!
//! # Modules
//!
//! - [`distribution`]: Distance ordering, fraction generation and pairing
//! - [`error`]: Error types
//! - [`host`]: Host scene boundary and in-memory snapshot
//! - [`point`]: World-space points
//! - [`settings`]: Distribution settings
//! - [`twist`]: Rig setup validation and twist driver plans

pub mod distribution;
pub mod error;
pub mod host;
pub mod point;
pub mod settings;
pub mod twist;

pub use distribution::{
    distance, distribute, generate_fractions, order_by_distance, pair_weights, RollJoint,
    RollWeight, DEFAULT_MAX_FRACTION, DEFAULT_MIN_FRACTION, SINGLE_JOINT_FRACTION,
    WORKFLOW_MIN_FRACTION,
};
pub use error::{RollError, RollErrorKind};
pub use host::{find_roll_joints, resolve_roll_joints, RigHost, SceneJoint, SceneSnapshot};
pub use point::Point3;
pub use settings::{FractionPairing, RollSettings, RotationAxis, DEFAULT_ROLL_MARKER};
pub use twist::{ResolvedRig, RollRigSetup, TwistDriver, TwistPlan, MULTIPLIER_SUFFIX};
