//! wayfarer_collision: capsule-vs-static-triangle collision over an octree.
//!
//! The environment's triangles are indexed once ([`Octree`]); the character
//! controller asks one question per frame through [`SpatialIndex`]: does this
//! capsule overlap anything, and if so, which way and how far out?

mod aabb;
mod capsule;
mod octree;
mod triangle;

pub use aabb::Aabb;
pub use capsule::Capsule;
pub use octree::{Octree, OctreeSettings};
pub use triangle::Triangle;

use glam::Vec3;

/// Outcome of a capsule query: push the capsule by `normal * depth` to
/// separate it from the geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionResult {
    pub normal: Vec3,
    pub depth: f32,
}

/// Static geometry the character controller can collide with.
pub trait SpatialIndex {
    /// Deepest combined overlap of `capsule` with the indexed geometry, or
    /// `None` without contact. Resolves in a single pass; a capsule wedged
    /// between several surfaces may still overlap after applying the result.
    fn capsule_intersect(&self, capsule: &Capsule) -> Option<CollisionResult>;

    /// Whether the index holds no geometry at all. Nothing should be
    /// simulated against an empty index.
    fn is_empty(&self) -> bool {
        false
    }
}
