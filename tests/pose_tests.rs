//! Pose Evaluator Tests
//!
//! Tests for:
//! - World transforms: identity policy, interpolation, parent propagation
//! - Seconds-to-ticks conversion and the default tick rate
//! - Skinning matrices (world * offset) and caller-provided buffers
//! - AnimationPlayer playback (Once, Loop, PingPong)

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::{Mat4, Quat, Vec3};

use marrow::animation::{
    AnimationImporter, AnimationPlayer, AnimationSet, LoopMode, QuatKey, SourceAnimation,
    SourceBone, SourceChannel, SourceMesh, SourceNode, VectorKey,
};

const EPSILON: f32 = 1e-4;

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn approx_mat4(a: Mat4, b: Mat4) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

fn translation_of(m: Mat4) -> Vec3 {
    m.w_axis.truncate()
}

/// Hip (moves +X from 0 to 10 over 10 ticks) -> Arm (fixed +Y offset of 1).
fn two_bone_set(ticks_per_second: f32) -> AnimationSet {
    let skeleton = SourceNode::new("Hip").with_child(SourceNode::new("Arm"));
    let mesh = SourceMesh {
        name: String::new(),
        bones: vec![
            SourceBone::new("Hip", Mat4::IDENTITY),
            SourceBone::new("Arm", Mat4::from_translation(Vec3::new(0.0, -1.0, 0.0))),
        ],
    };
    let animation = SourceAnimation {
        name: "Slide".to_string(),
        duration: 10.0,
        ticks_per_second,
        channels: vec![
            SourceChannel {
                position_keys: vec![
                    VectorKey::new(0.0, Vec3::ZERO),
                    VectorKey::new(10.0, Vec3::new(10.0, 0.0, 0.0)),
                ],
                ..SourceChannel::new("Hip")
            },
            SourceChannel {
                position_keys: vec![VectorKey::new(0.0, Vec3::Y)],
                ..SourceChannel::new("Arm")
            },
        ],
    };
    AnimationImporter::new().import_from(&skeleton, &mesh, &animation)
}

// ============================================================================
// World Transforms
// ============================================================================

#[test]
fn pose_length_matches_bone_count() {
    let set = two_bone_set(10.0);
    assert_eq!(set.evaluate(0.0).len(), 2);
    assert_eq!(set.evaluate_skinning(0.0).len(), 2);
}

#[test]
fn unkeyed_bone_is_identity() {
    let skeleton = SourceNode::new("Hip");
    let mesh = SourceMesh {
        name: String::new(),
        bones: vec![SourceBone::new("Hip", Mat4::IDENTITY)],
    };
    let animation = SourceAnimation {
        duration: 1.0,
        ..Default::default()
    };
    let set = AnimationImporter::new().import_from(&skeleton, &mesh, &animation);

    let pose = set.evaluate(0.3);
    assert!(approx_mat4(pose[0], Mat4::IDENTITY));
}

#[test]
fn translation_is_interpolated_over_time() {
    let set = two_bone_set(10.0);

    // 0.5 s at 10 ticks/s = tick 5
    let pose = set.evaluate(0.5);
    assert!(approx_vec3(translation_of(pose[0]), Vec3::new(5.0, 0.0, 0.0)));

    // Past the end clamps to the last key
    let pose = set.evaluate(3.0);
    assert!(approx_vec3(translation_of(pose[0]), Vec3::new(10.0, 0.0, 0.0)));
}

#[test]
fn child_inherits_parent_transform() {
    let set = two_bone_set(10.0);
    let pose = set.evaluate(0.5);
    let arm = set.bone_index("Arm").unwrap();
    assert!(approx_vec3(translation_of(pose[arm]), Vec3::new(5.0, 1.0, 0.0)));
}

#[test]
fn parent_rotation_carries_child_offset() {
    // Hip turns 90 degrees about Z; Arm sits one unit along +X in Hip space.
    let skeleton = SourceNode::new("Hip").with_child(SourceNode::new("Arm"));
    let mesh = SourceMesh {
        name: String::new(),
        bones: vec![
            SourceBone::new("Hip", Mat4::IDENTITY),
            SourceBone::new("Arm", Mat4::IDENTITY),
        ],
    };
    let animation = SourceAnimation {
        duration: 1.0,
        ticks_per_second: 1.0,
        channels: vec![
            SourceChannel {
                position_keys: vec![VectorKey::new(0.0, Vec3::new(0.0, 0.0, 2.0))],
                rotation_keys: vec![QuatKey::new(0.0, Quat::from_rotation_z(FRAC_PI_2))],
                ..SourceChannel::new("Hip")
            },
            SourceChannel {
                position_keys: vec![VectorKey::new(0.0, Vec3::X)],
                ..SourceChannel::new("Arm")
            },
        ],
        ..Default::default()
    };
    let set = AnimationImporter::new().import_from(&skeleton, &mesh, &animation);

    let pose = set.evaluate(0.0);
    let arm = set.bone_index("Arm").unwrap();
    // parent * local: the +X offset is rotated onto +Y, then lifted by the parent's Z
    assert!(
        approx_vec3(translation_of(pose[arm]), Vec3::new(0.0, 1.0, 2.0)),
        "got {}",
        translation_of(pose[arm])
    );
    // The child's basis inherits the parent's rotation
    assert!(approx_vec3(pose[arm].transform_vector3(Vec3::X), Vec3::Y));
}

#[test]
fn rotation_is_slerped_between_keys() {
    let skeleton = SourceNode::new("Hip");
    let mesh = SourceMesh {
        name: String::new(),
        bones: vec![SourceBone::new("Hip", Mat4::IDENTITY)],
    };
    let animation = SourceAnimation {
        duration: 10.0,
        ticks_per_second: 10.0,
        channels: vec![SourceChannel {
            rotation_keys: vec![
                QuatKey::new(0.0, Quat::IDENTITY),
                QuatKey::new(10.0, Quat::from_rotation_z(FRAC_PI_2)),
            ],
            ..SourceChannel::new("Hip")
        }],
        ..Default::default()
    };
    let set = AnimationImporter::new().import_from(&skeleton, &mesh, &animation);

    // 0.5 s at 10 ticks/s = tick 5, halfway: 45 degrees
    let pose = set.evaluate(0.5);
    let half = std::f32::consts::FRAC_1_SQRT_2;
    let x = pose[0].transform_vector3(Vec3::X);
    assert!(approx_vec3(x, Vec3::new(half, half, 0.0)), "got {x}");

    let pose = set.evaluate(1.0);
    assert!(approx_vec3(pose[0].transform_vector3(Vec3::X), Vec3::Y));
}

#[test]
fn zero_fps_uses_default_tick_rate() {
    let set = two_bone_set(0.0);
    assert!((set.ticks_per_second() - 25.0).abs() < 1e-6);
    assert!((set.duration_seconds() - 0.4).abs() < 1e-6);

    // 0.2 s at 25 ticks/s = tick 5
    let pose = set.evaluate(0.2);
    assert!(approx_vec3(translation_of(pose[0]), Vec3::new(5.0, 0.0, 0.0)));
}

#[test]
fn local_transform_scales_then_rotates_then_translates() {
    let skeleton = SourceNode::new("Hip");
    let mesh = SourceMesh {
        name: String::new(),
        bones: vec![SourceBone::new("Hip", Mat4::IDENTITY)],
    };
    let rotation = Quat::from_rotation_z(FRAC_PI_2);
    let animation = SourceAnimation {
        duration: 1.0,
        ticks_per_second: 1.0,
        channels: vec![SourceChannel {
            position_keys: vec![VectorKey::new(0.0, Vec3::new(0.0, 0.0, 5.0))],
            rotation_keys: vec![QuatKey::new(0.0, rotation)],
            scaling_keys: vec![VectorKey::new(0.0, Vec3::splat(2.0))],
            ..SourceChannel::new("Hip")
        }],
        ..Default::default()
    };
    let set = AnimationImporter::new().import_from(&skeleton, &mesh, &animation);

    let pose = set.evaluate(0.0);
    // X axis: scaled to 2, rotated onto +Y, then moved up by 5 in Z
    let p = pose[0].transform_point3(Vec3::X);
    assert!(approx_vec3(p, Vec3::new(0.0, 2.0, 5.0)), "got {p}");
}

// ============================================================================
// Skinning
// ============================================================================

#[test]
fn skinning_applies_offset() {
    let set = two_bone_set(10.0);
    let arm = set.bone_index("Arm").unwrap();

    let world = set.evaluate(0.0);
    let skin = set.evaluate_skinning(0.0);
    let offset = *set.find_bone("Arm").unwrap().offset();

    assert!(approx_mat4(skin[arm], world[arm] * offset));
    // In bind pose the arm's world transform cancels its offset
    assert!(approx_mat4(skin[arm], Mat4::IDENTITY));
}

#[test]
fn evaluate_into_ignores_short_buffer() {
    let set = two_bone_set(10.0);
    let mut out = [Mat4::ZERO; 1];
    set.evaluate_into(1.0, &mut out);
    assert!(approx_vec3(translation_of(out[0]), Vec3::new(10.0, 0.0, 0.0)));
}

#[test]
fn shared_set_is_queryable_from_threads() {
    let set = Arc::new(two_bone_set(10.0));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let set = Arc::clone(&set);
            std::thread::spawn(move || set.evaluate(i as f32 * 0.25))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().len(), 2);
    }
}

// ============================================================================
// AnimationPlayer
// ============================================================================

#[test]
fn player_loops_around_clip() {
    // Duration: 10 ticks at 10 ticks/s = 1 s
    let mut player = AnimationPlayer::new(Arc::new(two_bone_set(10.0)));
    player.update(0.75);
    player.update(0.5);
    assert!((player.time - 0.25).abs() < 1e-5);
}

#[test]
fn player_once_stops_at_end() {
    let mut player = AnimationPlayer::new(Arc::new(two_bone_set(10.0)));
    player.loop_mode = LoopMode::Once;
    player.update(2.0);

    assert!((player.time - 1.0).abs() < 1e-6);
    assert!(player.is_finished());

    let pose = player.current_world_pose();
    assert!(approx_vec3(translation_of(pose[0]), Vec3::new(10.0, 0.0, 0.0)));
}

#[test]
fn player_ping_pong_reverses() {
    let mut player = AnimationPlayer::new(Arc::new(two_bone_set(10.0)));
    player.loop_mode = LoopMode::PingPong;

    player.update(0.8);
    assert!((player.time - 0.8).abs() < 1e-5);
    player.update(0.4);
    assert!((player.time - 0.8).abs() < 1e-5);
    player.update(0.4);
    assert!((player.time - 0.4).abs() < 1e-5);
    player.update(0.6);
    assert!((player.time - 0.2).abs() < 1e-5);
}

#[test]
fn player_pause_and_seek() {
    let mut player = AnimationPlayer::new(Arc::new(two_bone_set(10.0)));
    player.pause();
    player.update(0.5);
    assert!(player.time.abs() < 1e-6);

    player.seek(5.0);
    assert!((player.time - 1.0).abs() < 1e-6);

    player.stop();
    assert!(player.time.abs() < 1e-6);
    assert!(player.paused);
}
