use glam::Mat4;

use crate::animation::bone::BoneNode;

/// Ticks per second assumed when the source did not record a rate.
pub const DEFAULT_TICKS_PER_SECOND: f32 = 25.0;

/// An imported skeletal clip: the bone tree plus its timing.
///
/// Immutable once imported. All evaluation methods take `&self`, so one set
/// can be shared (e.g. behind an `Arc`) and queried from several threads.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    name: String,
    /// Clip length in ticks.
    duration: f32,
    /// Ticks per second as reported by the source (zero if unknown).
    fps: f32,
    roots: Vec<BoneNode>,
    bone_count: usize,
}

impl AnimationSet {
    pub(crate) fn new(
        name: String,
        duration: f32,
        fps: f32,
        roots: Vec<BoneNode>,
        bone_count: usize,
    ) -> Self {
        Self {
            name,
            duration,
            fps,
            roots,
            bone_count,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Clip length in source ticks.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Ticks per second as reported by the source.
    #[inline]
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Ticks per second used for evaluation.
    #[must_use]
    pub fn ticks_per_second(&self) -> f32 {
        if self.fps > 0.0 {
            self.fps
        } else {
            DEFAULT_TICKS_PER_SECOND
        }
    }

    /// Clip length in seconds.
    #[must_use]
    pub fn duration_seconds(&self) -> f32 {
        self.duration / self.ticks_per_second()
    }

    /// Number of bones, i.e. the length of every pose array.
    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bone_count
    }

    /// The first real bone encountered during import.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&BoneNode> {
        self.roots.first()
    }

    /// All top-level bones in hierarchy order.
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[BoneNode] {
        &self.roots
    }

    #[must_use]
    pub fn find_bone(&self, name: &str) -> Option<&BoneNode> {
        self.roots.iter().find_map(|root| root.find(name))
    }

    #[must_use]
    pub fn bone_index(&self, name: &str) -> Option<usize> {
        self.find_bone(name).map(BoneNode::bone_index)
    }

    /// Iterates every bone in depth-first pre-order.
    pub fn bones(&self) -> impl Iterator<Item = &BoneNode> {
        self.roots.iter().flat_map(|root| root.iter())
    }

    /// World-space bone transforms at `time` seconds, indexed by bone index.
    #[must_use]
    pub fn evaluate(&self, time: f32) -> Vec<Mat4> {
        let mut pose = vec![Mat4::IDENTITY; self.bone_count];
        self.evaluate_into(time, &mut pose);
        pose
    }

    /// Skinning matrices at `time` seconds: each world transform multiplied by
    /// the bone's bind-pose offset.
    #[must_use]
    pub fn evaluate_skinning(&self, time: f32) -> Vec<Mat4> {
        let mut pose = vec![Mat4::IDENTITY; self.bone_count];
        let tick = self.time_to_tick(time);
        for root in &self.roots {
            walk(root, tick, Mat4::IDENTITY, &mut pose, true);
        }
        pose
    }

    /// Writes world-space bone transforms at `time` seconds into `out`.
    ///
    /// Bones whose index does not fit in `out` are still walked (their
    /// children may fit) but not written.
    pub fn evaluate_into(&self, time: f32, out: &mut [Mat4]) {
        let tick = self.time_to_tick(time);
        for root in &self.roots {
            walk(root, tick, Mat4::IDENTITY, out, false);
        }
    }

    /// Converts seconds to source ticks.
    #[inline]
    #[must_use]
    pub fn time_to_tick(&self, time: f32) -> f32 {
        time * self.ticks_per_second()
    }
}

fn walk(node: &BoneNode, tick: f32, parent: Mat4, out: &mut [Mat4], apply_offset: bool) {
    let world = parent * node.local_transform(tick);

    if let Some(slot) = out.get_mut(node.bone_index) {
        *slot = if apply_offset { world * node.offset } else { world };
    }

    for child in &node.children {
        walk(child, tick, world, out, apply_offset);
    }
}
