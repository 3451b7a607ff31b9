//! Host scene boundary.
//!
//! A rigging host owns the joint hierarchy and its world-space transforms.
//! The distribution code only needs two questions answered, captured by
//! [`RigHost`]. [`SceneSnapshot`] answers them from an in-memory joint list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::distribution::RollJoint;
use crate::error::RollError;
use crate::point::Point3;

/// Queries a rigging host must answer.
pub trait RigHost {
    /// World-space position of a joint, or `None` if the joint does not exist.
    fn world_position(&self, joint: &str) -> Option<Point3>;

    /// All joints below `parent` in the hierarchy (not including `parent`).
    fn descendant_joints(&self, parent: &str) -> Vec<String>;
}

/// A joint in a [`SceneSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneJoint {
    /// Joint name.
    pub name: String,
    /// Parent joint name (None = root).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// World-space position.
    pub position: Point3,
}

/// A frozen joint hierarchy with world-space positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneSnapshot {
    /// Joints in declaration order.
    #[serde(default)]
    pub joints: Vec<SceneJoint>,
}

impl SceneSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a joint and returns the snapshot.
    pub fn with_joint(
        mut self,
        name: impl Into<String>,
        parent: Option<&str>,
        position: impl Into<Point3>,
    ) -> Self {
        self.joints.push(SceneJoint {
            name: name.into(),
            parent: parent.map(str::to_string),
            position: position.into(),
        });
        self
    }

    fn children<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a SceneJoint> + 'a {
        self.joints
            .iter()
            .filter(move |j| j.parent.as_deref() == Some(parent))
    }
}

impl RigHost for SceneSnapshot {
    fn world_position(&self, joint: &str) -> Option<Point3> {
        self.joints
            .iter()
            .find(|j| j.name == joint)
            .map(|j| j.position)
    }

    /// Depth-first pre-order, children in declaration order.
    fn descendant_joints(&self, parent: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(parent);

        let mut stack: Vec<&SceneJoint> = self.children(parent).collect();
        stack.reverse();
        while let Some(joint) = stack.pop() {
            if !visited.insert(joint.name.as_str()) {
                continue;
            }
            out.push(joint.name.clone());
            let mut children: Vec<&SceneJoint> = self.children(&joint.name).collect();
            children.reverse();
            stack.extend(children);
        }
        out
    }
}

/// Descendants of `parent` whose name contains `marker` (case-sensitive).
pub fn find_roll_joints<H: RigHost + ?Sized>(
    host: &H,
    parent: &str,
    marker: &str,
) -> Vec<String> {
    host.descendant_joints(parent)
        .into_iter()
        .filter(|name| name.contains(marker))
        .collect()
}

/// Looks up the world position of every named joint.
pub fn resolve_roll_joints<H: RigHost + ?Sized>(
    host: &H,
    names: &[String],
) -> Result<Vec<RollJoint>, RollError> {
    names
        .iter()
        .map(|name| {
            host.world_position(name)
                .map(|position| RollJoint::new(name.clone(), position))
                .ok_or_else(|| RollError::UnknownJoint(name.clone()))
        })
        .collect()
}
