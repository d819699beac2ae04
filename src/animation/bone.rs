use glam::{Mat4, Quat, Vec3};

use crate::animation::tracks::KeyframeTrack;

/// One bone of an imported skeleton.
///
/// A `BoneNode` owns its children; the roots are owned by an
/// [`AnimationSet`](crate::animation::AnimationSet). Nodes are built once by
/// the [`AnimationImporter`](crate::animation::AnimationImporter) and are
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct BoneNode {
    pub(crate) name: String,
    pub(crate) bone_index: usize,
    /// Bind-pose offset matrix (mesh space -> bone space).
    pub(crate) offset: Mat4,
    pub(crate) position_keys: KeyframeTrack<Vec3>,
    pub(crate) rotation_keys: KeyframeTrack<Quat>,
    pub(crate) scale_keys: KeyframeTrack<Vec3>,
    pub(crate) children: Vec<BoneNode>,
}

impl BoneNode {
    pub(crate) fn new(name: impl Into<String>, bone_index: usize, offset: Mat4) -> Self {
        Self {
            name: name.into(),
            bone_index,
            offset,
            position_keys: KeyframeTrack::empty(),
            rotation_keys: KeyframeTrack::empty(),
            scale_keys: KeyframeTrack::empty(),
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slot of this bone in the pose output array.
    #[inline]
    #[must_use]
    pub fn bone_index(&self) -> usize {
        self.bone_index
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> &Mat4 {
        &self.offset
    }

    #[inline]
    #[must_use]
    pub fn position_keys(&self) -> &KeyframeTrack<Vec3> {
        &self.position_keys
    }

    #[inline]
    #[must_use]
    pub fn rotation_keys(&self) -> &KeyframeTrack<Quat> {
        &self.rotation_keys
    }

    #[inline]
    #[must_use]
    pub fn scale_keys(&self) -> &KeyframeTrack<Vec3> {
        &self.scale_keys
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[BoneNode] {
        &self.children
    }

    /// True when no channel contributed any keys to this bone.
    #[must_use]
    pub fn is_unkeyed(&self) -> bool {
        self.position_keys.is_empty() && self.rotation_keys.is_empty() && self.scale_keys.is_empty()
    }

    /// Local transform at `tick`: scale, then rotation, then translation.
    ///
    /// A channel without keys contributes identity.
    #[must_use]
    pub fn local_transform(&self, tick: f32) -> Mat4 {
        let translation = self.position_keys.sample(tick).unwrap_or(Vec3::ZERO);
        let rotation = self.rotation_keys.sample(tick).unwrap_or(Quat::IDENTITY);
        let scale = self.scale_keys.sample(tick).unwrap_or(Vec3::ONE);
        Mat4::from_scale_rotation_translation(scale, rotation, translation)
    }

    /// Number of nodes in the subtree rooted here, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(BoneNode::subtree_len).sum::<usize>()
    }

    /// Depth-first search for a bone by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&BoneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Iterates the subtree in depth-first pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &BoneNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
