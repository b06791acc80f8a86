use glam::{Quat, Vec3, Vec4};
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::action::{AnimationAction, TrackValue};
use crate::binding::TargetPath;
use crate::rig::Rig;

new_key_type! {
    pub struct ActionKey;
}

/// Something that happened to an action during [`AnimationMixer::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum MixerEvent {
    /// A one-shot action reached the end of its clip.
    Finished { action: ActionKey, clip: String },
}

/// Per-joint blend accumulator.
#[derive(Default, Clone, Copy)]
struct PoseAccum {
    translation: Vec3,
    translation_weight: f32,
    rotation: Vec4,
    rotation_weight: f32,
    scale: Vec3,
    scale_weight: f32,
}

/// Plays a set of actions over a single rig.
pub struct AnimationMixer {
    target: Uuid,
    actions: SlotMap<ActionKey, AnimationAction>,
    time: f32,
}

impl AnimationMixer {
    #[must_use]
    pub fn new(target: Uuid) -> Self {
        Self {
            target,
            actions: SlotMap::with_key(),
            time: 0.0,
        }
    }

    /// Id of the rig this mixer is bound to.
    #[must_use]
    pub fn target(&self) -> Uuid {
        self.target
    }

    /// Total time this mixer has been advanced.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn add_action(&mut self, action: AnimationAction) -> ActionKey {
        self.actions.insert(action)
    }

    #[must_use]
    pub fn action(&self, key: ActionKey) -> Option<&AnimationAction> {
        self.actions.get(key)
    }

    pub fn action_mut(&mut self, key: ActionKey) -> Option<&mut AnimationAction> {
        self.actions.get_mut(key)
    }

    pub fn actions(&self) -> impl Iterator<Item = (ActionKey, &AnimationAction)> {
        self.actions.iter()
    }

    /// Number of enabled actions that are still playing.
    #[must_use]
    pub fn active_actions(&self) -> usize {
        self.actions
            .values()
            .filter(|a| a.enabled && !a.paused)
            .count()
    }

    pub fn stop_all(&mut self) {
        self.actions.clear();
    }

    /// Steps every action's clock.
    pub fn update(&mut self, dt: f32) -> SmallVec<[MixerEvent; 2]> {
        self.time += dt;

        let mut events = SmallVec::new();
        for (key, action) in &mut self.actions {
            if action.update(dt) {
                events.push(MixerEvent::Finished {
                    action: key,
                    clip: action.clip().name.clone(),
                });
            }
        }
        events
    }

    /// Writes the blended pose of all playing actions into `rig`.
    ///
    /// Joints whose total weight is below one keep a share of their current
    /// pose, which is what makes a fade-in ease in from the previous pose.
    pub fn apply(&mut self, rig: &mut Rig) {
        if rig.id != self.target {
            log::warn!("AnimationMixer bound to rig {} asked to pose rig {}", self.target, rig.id);
            return;
        }

        let mut accum = vec![PoseAccum::default(); rig.joints.len()];

        for action in self.actions.values_mut() {
            let weight = action.effective_weight();
            if action.paused || !action.enabled || weight <= 0.0 {
                continue;
            }

            for i in 0..action.bindings.len() {
                let binding = action.bindings[i];
                let Some(slot) = accum.get_mut(binding.joint) else {
                    continue;
                };
                let Some(value) = action.sample_track(binding.track_index) else {
                    continue;
                };

                match (value, binding.target) {
                    (TrackValue::Vector3(v), TargetPath::Translation) => {
                        slot.translation += v * weight;
                        slot.translation_weight += weight;
                    }
                    (TrackValue::Vector3(v), TargetPath::Scale) => {
                        slot.scale += v * weight;
                        slot.scale_weight += weight;
                    }
                    (TrackValue::Quaternion(q), TargetPath::Rotation) => {
                        let mut v = Vec4::from(q);
                        // Keep all contributions in the same hemisphere.
                        if slot.rotation.dot(v) < 0.0 {
                            v = -v;
                        }
                        slot.rotation += v * weight;
                        slot.rotation_weight += weight;
                    }
                    _ => {}
                }
            }
        }

        for (joint, slot) in rig.joints.iter_mut().zip(accum) {
            let transform = &mut joint.transform;

            if slot.translation_weight > 0.0 {
                let rest = (1.0 - slot.translation_weight).max(0.0);
                transform.position = (slot.translation + transform.position * rest)
                    / (slot.translation_weight + rest);
            }
            if slot.scale_weight > 0.0 {
                let rest = (1.0 - slot.scale_weight).max(0.0);
                transform.scale = (slot.scale + transform.scale * rest) / (slot.scale_weight + rest);
            }
            if slot.rotation_weight > 0.0 {
                let rest = (1.0 - slot.rotation_weight).max(0.0);
                let mut current = Vec4::from(transform.rotation);
                if slot.rotation.dot(current) < 0.0 {
                    current = -current;
                }
                let blended = slot.rotation + current * rest;
                if let Some(n) = blended.try_normalize() {
                    transform.rotation = Quat::from_vec4(n);
                }
            }
        }
    }
}
