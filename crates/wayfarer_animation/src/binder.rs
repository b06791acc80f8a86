use crate::binding::PropertyBinding;
use crate::clip::AnimationClip;
use crate::rig::Rig;

pub struct Binder;

impl Binder {
    /// Resolves each track of `clip` to a joint of `rig` by name.
    ///
    /// Tracks addressing joints the rig does not have are left unbound.
    #[must_use]
    pub fn bind(rig: &Rig, clip: &AnimationClip) -> Vec<PropertyBinding> {
        let bindings: Vec<PropertyBinding> = clip
            .tracks
            .iter()
            .enumerate()
            .filter_map(|(track_index, track)| {
                rig.find_joint(&track.meta.joint_name)
                    .map(|joint| PropertyBinding {
                        track_index,
                        joint,
                        target: track.meta.target,
                    })
            })
            .collect();

        if bindings.len() < clip.tracks.len() {
            log::debug!(
                "Clip '{}': {} of {} tracks bound",
                clip.name,
                bindings.len(),
                clip.tracks.len()
            );
        }

        bindings
    }
}
