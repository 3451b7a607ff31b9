//! End-to-end tests: rig file on disk -> twist plan.

use armrig_cli::commands::{distribute, fractions, validate};
use armrig_cli::commands::json_output::DistributeOutput;
use armrig_core::{FractionPairing, RollRigSetup, RollSettings, SceneSnapshot, TwistPlan};
use armrig_tests::{ArmFixture, RigFileFixture};
use pretty_assertions::assert_eq;

fn targets_and_influences(plan: &TwistPlan) -> Vec<(String, f64)> {
    plan.drivers
        .iter()
        .map(|d| (d.target.clone(), d.influence))
        .collect()
}

#[test]
fn five_roll_joints_nearest_smallest() {
    let arm = ArmFixture::straight(5);
    let files = RigFileFixture::new();
    let path = files.add_rig("arm_l", arm.scene.clone(), arm.setup());

    let output = distribute::evaluate(&path);
    assert!(output.success, "errors: {:?}", output.errors);

    let plan = output.plan.unwrap();
    assert_eq!(plan.reference, "forearm_l");
    assert_eq!(plan.driver, "hand_l");
    assert_eq!(
        targets_and_influences(&plan),
        vec![
            ("forearmRoll_1".to_string(), 0.25),
            ("forearmRoll_2".to_string(), 0.375),
            ("forearmRoll_3".to_string(), 0.5),
            ("forearmRoll_4".to_string(), 0.625),
            ("forearmRoll_5".to_string(), 0.75),
        ]
    );
    assert!(plan
        .drivers
        .iter()
        .all(|d| d.source_attr() == "hand_l.rotateX"));
}

#[test]
fn nearest_largest_flips_the_pairing() {
    let arm = ArmFixture::straight(3);
    let files = RigFileFixture::new();
    let setup = arm
        .setup()
        .with_settings(RollSettings::default().with_pairing(FractionPairing::NearestLargest));
    let path = files.add_rig("arm_l", arm.scene.clone(), setup);

    let plan = distribute::evaluate(&path).plan.unwrap();
    assert_eq!(
        targets_and_influences(&plan),
        vec![
            ("forearmRoll_1".to_string(), 0.75),
            ("forearmRoll_2".to_string(), 0.5),
            ("forearmRoll_3".to_string(), 0.25),
        ]
    );
}

#[test]
fn single_roll_joint_gets_half() {
    let arm = ArmFixture::straight(1);
    let files = RigFileFixture::new();
    let path = files.add_rig("arm_l", arm.scene.clone(), arm.setup());

    let plan = distribute::evaluate(&path).plan.unwrap();
    assert_eq!(targets_and_influences(&plan), vec![("forearmRoll_1".to_string(), 0.5)]);
}

#[test]
fn explicit_roll_joints_ignore_marker() {
    let scene = SceneSnapshot::new()
        .with_joint("forearm_l", None, [0.0, 0.0, 0.0])
        .with_joint("twist_b", Some("forearm_l"), [0.0, 0.0, 8.0])
        .with_joint("twist_a", Some("forearm_l"), [0.0, 4.0, 0.0])
        .with_joint("hand_l", Some("forearm_l"), [12.0, 0.0, 0.0]);
    let arm = ArmFixture::straight(0);
    let setup = arm
        .setup()
        .with_roll_joints(vec!["twist_b".into(), "twist_a".into()]);

    let files = RigFileFixture::new();
    let path = files.add_rig("explicit", scene, setup);
    let plan = distribute::evaluate(&path).plan.unwrap();
    assert_eq!(
        targets_and_influences(&plan),
        vec![("twist_a".to_string(), 0.25), ("twist_b".to_string(), 0.75)]
    );
    assert_eq!(plan.drivers[0].name, "twist_a_rotationMult");
}

#[test]
fn arm_without_roll_joints_fails() {
    let arm = ArmFixture::straight(0);
    let files = RigFileFixture::new();
    let path = files.add_rig("bare", arm.scene.clone(), arm.setup());

    let output = distribute::evaluate(&path);
    assert!(!output.success);
    assert_eq!(output.errors[0].code, "ROLL_009");

    let validated = validate::evaluate(&path);
    assert!(!validated.success);
    assert_eq!(validated.errors[0].code, "ROLL_009");
}

#[test]
fn validate_and_distribute_agree_on_missing_hand() {
    let scene = SceneSnapshot::new()
        .with_joint("forearm_l", None, [0.0, 0.0, 0.0])
        .with_joint("forearmRoll_1", Some("forearm_l"), [5.0, 0.0, 0.0]);
    let files = RigFileFixture::new();
    let path = files.add_rig("no_hand", scene, RollRigSetup::new("forearm_l", "hand_l"));

    let validated = validate::evaluate(&path);
    let distributed = distribute::evaluate(&path);
    assert!(!validated.success);
    assert!(!distributed.success);
    assert_eq!(validated.errors, distributed.errors);
    assert_eq!(validated.errors[0].code, "ROLL_010");
    assert!(validated.errors[0].message.contains("hand_l"));
}

#[test]
fn validate_and_distribute_agree_on_missing_forearm() {
    let scene = SceneSnapshot::new()
        .with_joint("forearmRoll_1", None, [5.0, 0.0, 0.0])
        .with_joint("hand_l", None, [10.0, 0.0, 0.0]);
    let setup = RollRigSetup::new("forearm_l", "hand_l")
        .with_roll_joints(vec!["forearmRoll_1".into()]);
    let files = RigFileFixture::new();
    let path = files.add_rig("no_forearm", scene, setup);

    let validated = validate::evaluate(&path);
    let distributed = distribute::evaluate(&path);
    assert!(!validated.success);
    assert_eq!(validated.errors, distributed.errors);
    assert!(validated.errors[0].message.contains("forearm_l"));
}

#[test]
fn arm_chain_is_checked_in_both_directions() {
    let arm = ArmFixture::straight(2);
    let files = RigFileFixture::new();

    let chained = files.add_rig("chained", arm.scene.clone(), arm.setup().with_arm("upperarm_l"));
    assert!(validate::evaluate(&chained).success);
    assert!(distribute::evaluate(&chained).success);

    let swapped = RollRigSetup::new("hand_l", "forearm_l")
        .with_arm("upperarm_l")
        .with_roll_joints(arm.roll_joints.clone());
    let swapped = files.add_rig("swapped", arm.scene.clone(), swapped);
    let output = distribute::evaluate(&swapped);
    assert!(!output.success);
    assert_eq!(output.errors[0].code, "ROLL_011");
    assert_eq!(validate::evaluate(&swapped).errors, output.errors);

    let outside = RollRigSetup::new("upperarm_l", "hand_l")
        .with_arm("forearm_l")
        .with_roll_joints(arm.roll_joints.clone());
    let outside = files.add_rig("outside", arm.scene.clone(), outside);
    assert_eq!(validate::evaluate(&outside).errors[0].code, "ROLL_011");
}

#[test]
fn validate_reports_discovered_joints_in_hierarchy_order() {
    let arm = ArmFixture::straight(3);
    let files = RigFileFixture::new();
    let path = files.add_rig("arm_l", arm.scene.clone(), arm.setup());

    let output = validate::evaluate(&path);
    assert!(output.success);
    // Declaration order in the fixture is farthest-first.
    assert_eq!(output.roll_joints, vec!["forearmRoll_3", "forearmRoll_2", "forearmRoll_1"]);
}

#[test]
fn distribute_output_round_trips_through_json() {
    let arm = ArmFixture::straight(2);
    let files = RigFileFixture::new();
    let path = files.add_rig("arm_l", arm.scene.clone(), arm.setup());

    let output = distribute::evaluate(&path);
    let json = serde_json::to_string(&output).unwrap();
    let parsed: DistributeOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, output);
    assert!(json.contains("\"axis\":\"X\""));
}

#[test]
fn malformed_rig_file_reports_parse_error() {
    let files = RigFileFixture::new();
    let path = files.add_raw("broken", r#"{"scene": {"joints": []}}"#);

    let output = distribute::evaluate(&path);
    assert!(!output.success);
    assert_eq!(output.errors[0].code, "CLI_003");
}

#[test]
fn fractions_command_matches_library() {
    let output = fractions::evaluate(5, 0.75, 0.25, false);
    assert_eq!(output.fractions, vec![0.75, 0.625, 0.5, 0.375, 0.25]);

    let single = fractions::evaluate(1, 0.9, 0.1, true);
    assert_eq!(single.fractions, vec![0.5]);
}

#[test]
fn fractions_command_rejects_non_finite_bounds() {
    let output = fractions::evaluate(3, f64::NAN, 0.25, false);
    assert!(!output.success);
    assert!(output.fractions.is_empty());
    assert_eq!(output.errors[0].code, "ROLL_003");

    let json = serde_json::to_string(&output).unwrap();
    assert!(!json.contains("null"));
}
