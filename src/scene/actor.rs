use glam::{Affine3A, Vec3};
use uuid::Uuid;
use wayfarer_animation::{AnimationClip, Rig};
use wayfarer_collision::Octree;
use wayfarer_core::{Result, Transform};

/// Indexed triangle list in the actor's local space.
#[derive(Debug, Clone, Default)]
pub struct CollisionMesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl CollisionMesh {
    #[must_use]
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Builds an octree of this mesh placed in the world by `transform`.
    pub fn build_octree(&self, transform: Affine3A) -> Result<Octree> {
        Octree::from_mesh_with_transform(&self.positions, &self.indices, transform)
    }
}

/// A loaded model.
///
/// The `transform` is the model root; the rig is what animation clips pose.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
    pub transform: Transform,
    pub rig: Rig,
    /// Clips that came bundled with the model file.
    pub clips: Vec<AnimationClip>,
    pub collision_mesh: Option<CollisionMesh>,
}

impl Actor {
    #[must_use]
    pub fn new(name: impl Into<String>, rig: Rig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transform: Transform::new(),
            rig,
            clips: Vec::new(),
            collision_mesh: None,
        }
    }

    #[must_use]
    pub fn with_clips(mut self, clips: Vec<AnimationClip>) -> Self {
        self.clips = clips;
        self
    }

    #[must_use]
    pub fn with_collision_mesh(mut self, mesh: CollisionMesh) -> Self {
        self.collision_mesh = Some(mesh);
        self
    }

    /// Uniform model scale.
    pub fn set_scale(&mut self, scale: f32) {
        self.transform.scale = Vec3::splat(scale);
    }
}
