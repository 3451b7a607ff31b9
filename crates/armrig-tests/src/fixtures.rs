//! Test fixture utilities for building arm scenes and rig files.

use std::fs;
use std::path::{Path, PathBuf};

use armrig_core::{RollRigSetup, SceneSnapshot};
use armrig_cli::input::RigFile;
use tempfile::TempDir;

/// A straight arm along +X with evenly spaced forearm roll joints.
///
/// Roll joints are declared farthest-first so ordering has work to do.
pub struct ArmFixture {
    pub scene: SceneSnapshot,
    /// Roll joint names, nearest to the forearm first.
    pub roll_joints: Vec<String>,
}

impl ArmFixture {
    /// Forearm at x = 30, hand at x = 60, `roll_count` roll joints between.
    pub fn straight(roll_count: usize) -> Self {
        let forearm_x = 30.0;
        let hand_x = 60.0;
        let spacing = (hand_x - forearm_x) / (roll_count + 1) as f64;

        let mut scene = SceneSnapshot::new()
            .with_joint("upperarm_l", None, [0.0, 140.0, 0.0])
            .with_joint("forearm_l", Some("upperarm_l"), [forearm_x, 140.0, 0.0]);

        let roll_joints: Vec<String> = (1..=roll_count)
            .map(|i| format!("forearmRoll_{}", i))
            .collect();
        for (i, name) in roll_joints.iter().enumerate().rev() {
            let x = forearm_x + spacing * (i + 1) as f64;
            scene = scene.with_joint(name.clone(), Some("forearm_l"), [x, 140.0, 0.0]);
        }

        scene = scene.with_joint("hand_l", Some("forearm_l"), [hand_x, 140.0, 0.0]);
        Self { scene, roll_joints }
    }

    /// Default setup for this arm.
    pub fn setup(&self) -> RollRigSetup {
        RollRigSetup::new("forearm_l", "hand_l").with_arm_joints(vec!["upperarm_l".into()])
    }
}

/// A temporary directory holding rig files.
pub struct RigFileFixture {
    pub root: TempDir,
}

impl RigFileFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a rig file built from a scene and setup.
    pub fn add_rig(&self, name: &str, scene: SceneSnapshot, rig: RollRigSetup) -> PathBuf {
        let rig_file = RigFile { scene, rig };
        let json = serde_json::to_string_pretty(&rig_file).expect("Failed to serialize rig file");
        self.add_raw(name, &json)
    }

    /// Write arbitrary content as `<name>.json`.
    pub fn add_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(format!("{}.json", name));
        fs::write(&path, content).expect("Failed to write rig file");
        path
    }
}

impl Default for RigFileFixture {
    fn default() -> Self {
        Self::new()
    }
}
