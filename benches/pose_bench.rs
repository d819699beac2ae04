//! Pose evaluation benchmarks
//!
//! Measures world-pose and skinning evaluation for a synthetic skeleton
//! (a spine chain with branching limbs), plus a frame of scheduler ticks.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::{Mat4, Quat, Vec3};
use parking_lot::Mutex;

use marrow::animation::{
    AnimationImporter, AnimationSet, QuatKey, SourceAnimation, SourceBone, SourceChannel,
    SourceMesh, SourceNode, VectorKey,
};
use marrow::tasks::Scheduler;
use marrow::utils::FrameClock;

const KEYS_PER_CHANNEL: usize = 30;

/// A chain of `spine` bones, each carrying two three-bone limbs.
fn build_skeleton(spine: usize) -> AnimationSet {
    let mut names = Vec::new();
    let mut node: Option<SourceNode> = None;

    for i in (0..spine).rev() {
        let name = format!("Spine{i}");
        let mut current = SourceNode::new(&name);
        names.push(name);
        for side in ["L", "R"] {
            let mut limb: Option<SourceNode> = None;
            for j in (0..3).rev() {
                let limb_name = format!("Limb{i}{side}{j}");
                let mut limb_node = SourceNode::new(&limb_name);
                names.push(limb_name);
                if let Some(child) = limb.take() {
                    limb_node.children.push(child);
                }
                limb = Some(limb_node);
            }
            current.children.extend(limb);
        }
        if let Some(child) = node.take() {
            current.children.push(child);
        }
        node = Some(current);
    }

    let skeleton = node.unwrap_or_else(|| SourceNode::new("Empty"));
    let mesh = SourceMesh {
        name: "Bench".to_string(),
        bones: names
            .iter()
            .map(|name| SourceBone::new(name.as_str(), Mat4::IDENTITY))
            .collect(),
    };
    let channels = names
        .iter()
        .map(|name| SourceChannel {
            position_keys: (0..KEYS_PER_CHANNEL)
                .map(|k| VectorKey::new(k as f32, Vec3::new(0.0, 0.1 * k as f32, 0.0)))
                .collect(),
            rotation_keys: (0..KEYS_PER_CHANNEL)
                .map(|k| QuatKey::new(k as f32, Quat::from_rotation_z(0.05 * k as f32)))
                .collect(),
            ..SourceChannel::new(name.as_str())
        })
        .collect();
    let animation = SourceAnimation {
        name: "Bench".to_string(),
        duration: (KEYS_PER_CHANNEL - 1) as f32,
        ticks_per_second: 30.0,
        channels,
    };

    AnimationImporter::new().import_from(&skeleton, &mesh, &animation)
}

fn bench_pose_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pose_evaluation");

    for spine in [4_usize, 16, 64] {
        let set = build_skeleton(spine);
        let bones = set.bone_count();

        group.bench_with_input(BenchmarkId::new("world", bones), &set, |b, set| {
            b.iter(|| black_box(set.evaluate(black_box(0.37))));
        });

        group.bench_with_input(BenchmarkId::new("skinning", bones), &set, |b, set| {
            b.iter(|| black_box(set.evaluate_skinning(black_box(0.37))));
        });

        let mut buffer = vec![Mat4::IDENTITY; bones];
        group.bench_with_input(BenchmarkId::new("into_buffer", bones), &set, |b, set| {
            b.iter(|| set.evaluate_into(black_box(0.37), &mut buffer));
        });
    }

    group.finish();
}

fn bench_scheduler_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler_tick");

    for count in [16_usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("interpolations", count), &count, |b, &count| {
            let clock = Arc::new(FrameClock::new());
            let scheduler = Scheduler::new(Arc::clone(&clock));
            let targets: Vec<_> = (0..count).map(|_| Arc::new(Mutex::new(Vec3::ZERO))).collect();
            for target in &targets {
                // Long enough that no task completes during the measurement
                scheduler.schedule_interpolate(Arc::clone(target), Vec3::ZERO, Vec3::ONE, 1.0e9);
            }
            b.iter(|| {
                clock.advance(1.0 / 60.0);
                scheduler.tick();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pose_evaluation, bench_scheduler_tick);
criterion_main!(benches);
