use glam::Vec3;

use crate::aabb::Aabb;

/// Segment-with-radius collision volume.
///
/// `start` is the lower (feet) end, `end` the upper (head) end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capsule {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

impl Capsule {
    #[must_use]
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "capsule radius must be positive");
        Self { start, end, radius }
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.start += offset;
        self.end += offset;
    }

    #[must_use]
    pub fn translated(mut self, offset: Vec3) -> Self {
        self.translate(offset);
        self
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        let r = Vec3::splat(self.radius);
        Aabb {
            min: self.start.min(self.end) - r,
            max: self.start.max(self.end) + r,
        }
    }
}
