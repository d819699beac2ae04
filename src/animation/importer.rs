//! Animation Importer
//!
//! Converts an external hierarchy + bone list + channel list into a
//! [`BoneNode`] tree stored in an [`AnimationSet`].
//!
//! # Classification
//!
//! Every visited hierarchy node is looked up by exact name in the mesh's bone
//! list:
//!
//! - **Real bone**: gets a [`BoneNode`] with the next sequential bone index
//!   (depth-first pre-order), the bind-pose offset, and the keyframes of every
//!   channel that targets it.
//! - **Pass-through node**: exporters insert these to decompose a bone's
//!   transform (`Hip_$AssimpFbx$_Translation`, `Hip_Rotation`, ...). They get
//!   no `BoneNode`; their children attach to the nearest real-bone ancestor in
//!   their original relative order.
//!
//! # Channel merge
//!
//! A channel named exactly like the bone contributes all three key kinds. A
//! channel named `bone + suffix` for a known decomposition suffix contributes
//! only the kind the suffix names, and takes precedence over the direct
//! channel for that kind. The bone name must match the channel name with the
//! suffix removed *exactly*: `XY_Rotation` never feeds bone `X`. When two
//! suffixed channels supply the same kind, the later one in the channel list
//! wins and a warning is logged.
//!
//! # Missing data policy
//!
//! A bone with no matching channel keeps empty tracks; pose evaluation treats
//! each empty track as identity. Such bones, and channels that feed no bone,
//! are reported through `log::warn!`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::animation::bone::BoneNode;
use crate::animation::set::AnimationSet;
use crate::animation::source::{
    SourceAnimation, SourceBone, SourceChannel, SourceMesh, SourceNode, SourceScene,
};
use crate::animation::tracks::{InterpolationMode, KeyframeTrack};
use crate::errors::{MarrowError, Result};

/// Which key kinds a channel contributes to a bone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelPart {
    /// The channel targets the bone directly and carries all key kinds.
    Whole,
    Translation,
    Rotation,
    Scaling,
}

/// Tuning knobs for [`AnimationImporter`].
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Decomposition suffixes recognised on channel names.
    pub suffixes: Vec<(String, ChannelPart)>,
    /// Index of the scene root's child that holds the skeleton.
    pub skeleton_child: usize,
    pub mesh_index: usize,
    pub animation_index: usize,
    pub interpolation: InterpolationMode,
}

impl Default for ImportOptions {
    fn default() -> Self {
        let suffixes = [
            ("_$AssimpFbx$_Translation", ChannelPart::Translation),
            ("_$AssimpFbx$_Rotation", ChannelPart::Rotation),
            ("_$AssimpFbx$_Scaling", ChannelPart::Scaling),
            ("_Translation", ChannelPart::Translation),
            ("_Rotation", ChannelPart::Rotation),
            ("_Scaling", ChannelPart::Scaling),
        ]
        .into_iter()
        .map(|(suffix, part)| (suffix.to_string(), part))
        .collect();

        Self {
            suffixes,
            // Exporter convention: child 0 is the mesh node, child 1 the armature.
            skeleton_child: 1,
            mesh_index: 0,
            animation_index: 0,
            interpolation: InterpolationMode::Linear,
        }
    }
}

/// Builds [`AnimationSet`]s from external scene descriptions.
#[derive(Debug, Clone, Default)]
pub struct AnimationImporter {
    options: ImportOptions,
}

impl AnimationImporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: ImportOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Imports using the configured mesh, animation and skeleton sub-tree.
    pub fn import(&self, scene: &SourceScene) -> Result<AnimationSet> {
        let opts = &self.options;
        let mesh = scene
            .meshes
            .get(opts.mesh_index)
            .ok_or(MarrowError::MeshNotFound(opts.mesh_index))?;
        let animation = scene
            .animations
            .get(opts.animation_index)
            .ok_or(MarrowError::AnimationNotFound(opts.animation_index))?;
        let skeleton = scene.root.children.get(opts.skeleton_child).ok_or(
            MarrowError::MissingSkeletonRoot {
                index: opts.skeleton_child,
                child_count: scene.root.children.len(),
            },
        )?;

        Ok(self.import_from(skeleton, mesh, animation))
    }

    /// Imports from an explicitly chosen skeleton sub-tree.
    #[must_use]
    pub fn import_from(
        &self,
        skeleton: &SourceNode,
        mesh: &SourceMesh,
        animation: &SourceAnimation,
    ) -> AnimationSet {
        let mut builder = TreeBuilder::new(&self.options, mesh, animation);

        let (root, adopted) = builder.visit(skeleton);
        let roots: Vec<BoneNode> = root.into_iter().chain(adopted).collect();

        for (channel, used) in animation.channels.iter().zip(&builder.channel_used) {
            if !used {
                log::warn!(
                    "Animation '{}': channel '{}' does not target any bone",
                    animation.name,
                    channel.node_name
                );
            }
        }

        log::info!(
            "Imported animation '{}': {} bones, {} channels, {} root(s)",
            animation.name,
            builder.next_index,
            animation.channels.len(),
            roots.len()
        );

        AnimationSet::new(
            animation.name.clone(),
            animation.duration,
            animation.ticks_per_second,
            roots,
            builder.next_index,
        )
    }

    /// Decides whether `channel_name` feeds `bone_name`, and with which keys.
    #[must_use]
    pub fn classify_channel(&self, channel_name: &str, bone_name: &str) -> Option<ChannelPart> {
        classify(&self.options.suffixes, channel_name, bone_name)
    }
}

fn classify(
    suffixes: &[(String, ChannelPart)],
    channel_name: &str,
    bone_name: &str,
) -> Option<ChannelPart> {
    if channel_name == bone_name {
        return Some(ChannelPart::Whole);
    }
    suffixes.iter().find_map(|(suffix, part)| {
        // strip_suffix leaves exactly the remaining length, so the comparison
        // below rejects partial-prefix matches such as "XY" vs "X".
        let stem = channel_name.strip_suffix(suffix.as_str())?;
        (stem == bone_name).then_some(*part)
    })
}

fn has_keys(channel: &SourceChannel, part: ChannelPart) -> bool {
    match part {
        ChannelPart::Translation => !channel.position_keys.is_empty(),
        ChannelPart::Rotation => !channel.rotation_keys.is_empty(),
        ChannelPart::Scaling => !channel.scaling_keys.is_empty(),
        ChannelPart::Whole => {
            !channel.position_keys.is_empty()
                || !channel.rotation_keys.is_empty()
                || !channel.scaling_keys.is_empty()
        }
    }
}

struct TreeBuilder<'a> {
    options: &'a ImportOptions,
    bones: FxHashMap<&'a str, &'a SourceBone>,
    animation: &'a SourceAnimation,
    channel_used: Vec<bool>,
    next_index: usize,
}

impl<'a> TreeBuilder<'a> {
    fn new(options: &'a ImportOptions, mesh: &'a SourceMesh, animation: &'a SourceAnimation) -> Self {
        let mut bones = FxHashMap::default();
        for bone in &mesh.bones {
            bones.entry(bone.name.as_str()).or_insert(bone);
        }
        Self {
            options,
            bones,
            animation,
            channel_used: vec![false; animation.channels.len()],
            next_index: 0,
        }
    }

    /// Visits one hierarchy node.
    ///
    /// Returns the bone created for `node` (if it is a real bone) and the
    /// bones its pass-through descendants hand up to the caller. Callers
    /// append both, in that order, to the current parent bone.
    fn visit(&mut self, node: &SourceNode) -> (Option<BoneNode>, Vec<BoneNode>) {
        let Some(source_bone) = self.bones.get(node.name.as_str()).copied() else {
            log::debug!("Pass-through node '{}'", node.name);
            let mut adopted = Vec::new();
            for child in &node.children {
                let (bone, grandchildren) = self.visit(child);
                adopted.extend(bone);
                adopted.extend(grandchildren);
            }
            return (None, adopted);
        };

        let mut bone = BoneNode::new(node.name.as_str(), self.next_index, source_bone.offset);
        self.next_index += 1;
        self.attach_channels(&mut bone);

        for child in &node.children {
            let (child_bone, adopted) = self.visit(child);
            bone.children.extend(child_bone);
            bone.children.extend(adopted);
        }

        (Some(bone), Vec::new())
    }

    fn attach_channels(&mut self, bone: &mut BoneNode) {
        let animation = self.animation;
        let mut matches: SmallVec<[(ChannelPart, &'a SourceChannel); 4]> = SmallVec::new();
        for (index, channel) in animation.channels.iter().enumerate() {
            if let Some(part) = classify(&self.options.suffixes, &channel.node_name, &bone.name) {
                self.channel_used[index] = true;
                matches.push((part, channel));
            }
        }

        // Direct channels first so that dedicated suffixed channels override them.
        matches.sort_by_key(|(part, _)| *part != ChannelPart::Whole);

        let mode = self.options.interpolation;
        // Which suffixed channel currently supplies each key kind
        let mut suffixed_sources: SmallVec<[(ChannelPart, &'a str); 3]> = SmallVec::new();
        for (part, channel) in matches {
            if part != ChannelPart::Whole && has_keys(channel, part) {
                let name = channel.node_name.as_str();
                if let Some((_, previous)) = suffixed_sources.iter_mut().find(|(p, _)| *p == part) {
                    log::warn!(
                        "Bone '{}': {part:?} keys from channel '{previous}' replaced by channel '{name}'",
                        bone.name
                    );
                    *previous = name;
                } else {
                    suffixed_sources.push((part, name));
                }
            }

            let wants = |kind: ChannelPart| part == ChannelPart::Whole || part == kind;

            if wants(ChannelPart::Translation) && !channel.position_keys.is_empty() {
                bone.position_keys = KeyframeTrack::from_keys(
                    channel.position_keys.iter().map(|k| (k.time, k.value)),
                    mode,
                );
            }
            if wants(ChannelPart::Rotation) && !channel.rotation_keys.is_empty() {
                bone.rotation_keys = KeyframeTrack::from_keys(
                    channel.rotation_keys.iter().map(|k| (k.time, k.value)),
                    mode,
                );
            }
            if wants(ChannelPart::Scaling) && !channel.scaling_keys.is_empty() {
                bone.scale_keys = KeyframeTrack::from_keys(
                    channel.scaling_keys.iter().map(|k| (k.time, k.value)),
                    mode,
                );
            }
        }

        if bone.is_unkeyed() {
            log::warn!(
                "Bone '{}' has no animation channel; it keeps its identity local transform",
                bone.name
            );
        }
    }
}
