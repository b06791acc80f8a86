use glam::Vec3;

use crate::CollisionResult;
use crate::aabb::Aabb;
use crate::capsule::Capsule;

const PARALLEL_EPS: f32 = 1e-10;

/// A capsule hovering closer than this still touches the surface.
pub(crate) const CONTACT_SLOP: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    #[must_use]
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Unit normal following counter-clockwise winding, `None` for a
    /// degenerate triangle.
    #[must_use]
    pub fn normal(&self) -> Option<Vec3> {
        (self.c - self.b).cross(self.a - self.b).try_normalize()
    }

    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            min: self.a.min(self.b).min(self.c),
            max: self.a.max(self.b).max(self.c),
        }
    }

    /// Whether `point`, assumed to lie in the triangle's plane, is inside it.
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        let v0 = self.c - self.a;
        let v1 = self.b - self.a;
        let v2 = point - self.a;

        let dot00 = v0.dot(v0);
        let dot01 = v0.dot(v1);
        let dot02 = v0.dot(v2);
        let dot11 = v1.dot(v1);
        let dot12 = v1.dot(v2);

        let denom = dot00 * dot11 - dot01 * dot01;
        if denom == 0.0 {
            return false;
        }

        let inv = 1.0 / denom;
        let u = (dot11 * dot02 - dot01 * dot12) * inv;
        let v = (dot00 * dot12 - dot01 * dot02) * inv;
        u >= 0.0 && v >= 0.0 && u + v <= 1.0
    }

    /// Overlap of `capsule` with this triangle.
    ///
    /// When the capsule axis crosses the face the response is along the face
    /// normal; otherwise the closest capsule-axis/edge pair decides.
    #[must_use]
    pub fn capsule_intersect(&self, capsule: &Capsule) -> Option<CollisionResult> {
        let normal = self.normal()?;
        let constant = -normal.dot(self.a);
        let r = capsule.radius;

        let d1 = normal.dot(capsule.start) + constant - r;
        let d2 = normal.dot(capsule.end) + constant - r;

        if (d1 > CONTACT_SLOP && d2 > CONTACT_SLOP) || (d1 < -r && d2 < -r) {
            return None;
        }

        let span = d1.abs() + d2.abs();
        let delta = if span > 0.0 { (d1 / span).abs() } else { 0.0 };
        let point = capsule.start.lerp(capsule.end, delta);

        if self.contains_point(point) {
            return Some(CollisionResult {
                normal,
                depth: (-d1.min(d2)).max(0.0),
            });
        }

        let r2 = r * r;
        for (e0, e1) in [(self.a, self.b), (self.b, self.c), (self.c, self.a)] {
            let (on_axis, on_edge) = segment_closest_points(capsule.start, capsule.end, e0, e1);
            let dist2 = on_axis.distance_squared(on_edge);
            if dist2 < r2 {
                let Some(n) = (on_axis - on_edge).try_normalize() else {
                    continue;
                };
                return Some(CollisionResult {
                    normal: n,
                    depth: r - dist2.sqrt(),
                });
            }
        }

        None
    }
}

/// Closest points between segments `p0..p1` and `q0..q1`.
#[must_use]
pub fn segment_closest_points(p0: Vec3, p1: Vec3, q0: Vec3, q1: Vec3) -> (Vec3, Vec3) {
    let r = p1 - p0;
    let s = q1 - q0;
    let w = q0 - p0;

    let a = r.dot(s);
    let b = r.dot(r);
    let c = s.dot(s);
    let d = s.dot(w);
    let e = r.dot(w);

    if c <= PARALLEL_EPS {
        // Degenerate edge: project its single point onto the first segment.
        let t1 = if b > PARALLEL_EPS { (e / b).clamp(0.0, 1.0) } else { 0.0 };
        return (p0 + r * t1, q0);
    }

    let divisor = b * c - a * a;
    let (t1, t2) = if divisor.abs() < PARALLEL_EPS {
        // Parallel: pick the end of the first segment that lands nearer the
        // middle of the second one.
        let d1 = -d / c;
        let d2 = (a - d) / c;
        if (d1 - 0.5).abs() < (d2 - 0.5).abs() {
            (0.0, d1)
        } else {
            (1.0, d2)
        }
    } else {
        let t1 = (d * a + e * c) / divisor;
        (t1, (t1 * a - d) / c)
    };

    let t1 = t1.clamp(0.0, 1.0);
    let t2 = t2.clamp(0.0, 1.0);
    (p0 + r * t1, q0 + s * t2)
}
