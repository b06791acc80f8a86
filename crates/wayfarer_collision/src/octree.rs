use glam::{Affine3A, Vec3};
use smallvec::SmallVec;
use wayfarer_core::{Error, Result};

use crate::aabb::Aabb;
use crate::capsule::Capsule;
use crate::triangle::{CONTACT_SLOP, Triangle};
use crate::{CollisionResult, SpatialIndex};

/// Margin added around the triangle bounds so faces on the boundary are
/// strictly inside the root box.
const ROOT_MARGIN: f32 = 0.01;

#[derive(Clone, Copy, Debug)]
pub struct OctreeSettings {
    /// A node holding more triangles than this is split.
    pub leaf_capacity: usize,
    /// Nodes at this depth are never split.
    pub max_depth: u32,
}

impl Default for OctreeSettings {
    fn default() -> Self {
        Self {
            leaf_capacity: 8,
            max_depth: 8,
        }
    }
}

#[derive(Debug)]
struct Node {
    bounds: Aabb,
    /// Indices into `Octree::triangles`; only leaves carry any.
    triangles: Vec<u32>,
    children: Vec<Node>,
}

impl Node {
    fn leaf(bounds: Aabb, triangles: Vec<u32>) -> Self {
        Self {
            bounds,
            triangles,
            children: Vec::new(),
        }
    }
}

/// Static triangle octree.
///
/// Built once; a triangle is stored in every leaf its bounds overlap.
#[derive(Debug)]
pub struct Octree {
    triangles: Vec<Triangle>,
    root: Node,
    settings: OctreeSettings,
}

impl Octree {
    #[must_use]
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self::with_settings(triangles, OctreeSettings::default())
    }

    #[must_use]
    pub fn with_settings(triangles: Vec<Triangle>, settings: OctreeSettings) -> Self {
        let bounds = triangles
            .iter()
            .fold(Aabb::EMPTY, |acc, t| acc.union(&t.aabb()));
        let bounds = if bounds.is_empty() {
            Aabb::new(Vec3::ZERO, Vec3::ZERO)
        } else {
            bounds.expanded(ROOT_MARGIN)
        };

        let all: Vec<u32> = (0..triangles.len() as u32).collect();
        let mut root = Node::leaf(bounds, all);
        split(&mut root, &triangles, &settings, 0);

        log::debug!("Octree built from {} triangles", triangles.len());

        Self {
            triangles,
            root,
            settings,
        }
    }

    /// Builds from an indexed triangle list.
    pub fn from_mesh(positions: &[Vec3], indices: &[u32]) -> Result<Self> {
        Self::from_mesh_with_transform(positions, indices, Affine3A::IDENTITY)
    }

    /// Builds from an indexed triangle list placed in the world by `transform`.
    pub fn from_mesh_with_transform(
        positions: &[Vec3],
        indices: &[u32],
        transform: Affine3A,
    ) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(Error::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }

        let fetch = |i: u32| -> Result<Vec3> {
            positions
                .get(i as usize)
                .map(|&p| transform.transform_point3(p))
                .ok_or_else(|| {
                    Error::InvalidMesh(format!(
                        "index {i} out of range ({} positions)",
                        positions.len()
                    ))
                })
        };

        let triangles = indices
            .chunks_exact(3)
            .map(|tri| Ok(Triangle::new(fetch(tri[0])?, fetch(tri[1])?, fetch(tri[2])?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_triangles(triangles))
    }

    #[must_use]
    pub fn bounds(&self) -> Aabb {
        self.root.bounds
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn settings(&self) -> OctreeSettings {
        self.settings
    }

    /// Indices of all triangles stored in leaves overlapping `query`, without
    /// duplicates.
    #[must_use]
    pub fn candidates(&self, query: &Aabb) -> SmallVec<[u32; 32]> {
        let mut out = SmallVec::new();
        collect(&self.root, query, &mut out);
        out.sort_unstable();
        out.dedup();
        out
    }

    #[must_use]
    pub fn triangle(&self, index: u32) -> Option<&Triangle> {
        self.triangles.get(index as usize)
    }
}

impl SpatialIndex for Octree {
    fn capsule_intersect(&self, capsule: &Capsule) -> Option<CollisionResult> {
        let mut working = *capsule;
        let mut last_normal = None;

        for index in self.candidates(&capsule.aabb().expanded(CONTACT_SLOP)) {
            let triangle = &self.triangles[index as usize];
            if let Some(result) = triangle.capsule_intersect(&working) {
                last_normal = Some(result.normal);
                working.translate(result.normal * result.depth);
            }
        }

        combine(capsule, &working, last_normal?)
    }

    fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

/// Net displacement from `original` to `resolved` as a single contact.
///
/// A touching contact moves nothing; it is reported with the normal of the
/// last surface touched and zero depth.
fn combine(original: &Capsule, resolved: &Capsule, last_normal: Vec3) -> Option<CollisionResult> {
    let push = resolved.center() - original.center();
    let depth = push.length();
    match push.try_normalize() {
        Some(normal) => Some(CollisionResult { normal, depth }),
        None => Some(CollisionResult {
            normal: last_normal,
            depth: 0.0,
        }),
    }
}

fn split(node: &mut Node, triangles: &[Triangle], settings: &OctreeSettings, depth: u32) {
    let count = node.triangles.len();
    if count <= settings.leaf_capacity || depth >= settings.max_depth {
        return;
    }

    let half = node.bounds.half_size();
    let mut children: Vec<Node> = Vec::with_capacity(8);
    for x in 0..2_u8 {
        for y in 0..2_u8 {
            for z in 0..2_u8 {
                let offset = Vec3::new(f32::from(x), f32::from(y), f32::from(z)) * half;
                let min = node.bounds.min + offset;
                let bounds = Aabb::new(min, min + half);
                let members: Vec<u32> = node
                    .triangles
                    .iter()
                    .copied()
                    .filter(|&i| triangles[i as usize].aabb().intersects(&bounds))
                    .collect();
                if !members.is_empty() {
                    children.push(Node::leaf(bounds, members));
                }
            }
        }
    }

    // Triangles spanning every octant would be copied forever; stop instead.
    if children.iter().all(|c| c.triangles.len() >= count) {
        return;
    }

    for child in &mut children {
        split(child, triangles, settings, depth + 1);
    }

    node.triangles.clear();
    node.children = children;
}

fn collect(node: &Node, query: &Aabb, out: &mut SmallVec<[u32; 32]>) {
    if !node.bounds.intersects(query) {
        return;
    }
    if node.children.is_empty() {
        out.extend_from_slice(&node.triangles);
    } else {
        for child in &node.children {
            collect(child, query, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat grid of `n * n` quads (two triangles each) at height `y`, normals up.
    fn grid(n: usize, cell: f32, y: f32) -> Vec<Triangle> {
        let mut out = Vec::new();
        for i in 0..n {
            for j in 0..n {
                let x0 = i as f32 * cell;
                let z0 = j as f32 * cell;
                let p00 = Vec3::new(x0, y, z0);
                let p10 = Vec3::new(x0 + cell, y, z0);
                let p01 = Vec3::new(x0, y, z0 + cell);
                let p11 = Vec3::new(x0 + cell, y, z0 + cell);
                out.push(Triangle::new(p00, p01, p10));
                out.push(Triangle::new(p10, p01, p11));
            }
        }
        out
    }

    fn brute_force(triangles: &[Triangle], capsule: &Capsule) -> Option<CollisionResult> {
        let mut working = *capsule;
        let mut last_normal = None;
        for t in triangles {
            if let Some(r) = t.capsule_intersect(&working) {
                last_normal = Some(r.normal);
                working.translate(r.normal * r.depth);
            }
        }
        combine(capsule, &working, last_normal?)
    }

    #[test]
    fn grid_triangles_face_up() {
        for t in grid(2, 1.0, 0.0) {
            assert!(t.normal().unwrap().y > 0.99);
        }
    }

    #[test]
    fn large_grid_is_subdivided() {
        let tree = Octree::from_triangles(grid(16, 1.0, 0.0));
        assert_eq!(tree.triangle_count(), 512);
        assert!(!tree.root.children.is_empty());

        let small = Aabb::new(Vec3::new(3.2, -1.0, 3.2), Vec3::new(3.8, 1.0, 3.8));
        let hits = tree.candidates(&small);
        assert!(!hits.is_empty());
        assert!(hits.len() < 64, "query returned {} candidates", hits.len());
    }

    #[test]
    fn overlapping_triangles_do_not_split_forever() {
        let big = Triangle::new(
            Vec3::new(-100.0, 0.0, -100.0),
            Vec3::new(-100.0, 0.0, 100.0),
            Vec3::new(100.0, 0.0, 0.0),
        );
        let tree = Octree::from_triangles(vec![big; 20]);
        assert_eq!(tree.candidates(&tree.bounds()).len(), 20);
    }

    #[test]
    fn query_matches_brute_force() {
        let triangles = grid(12, 0.5, 0.0);
        let tree = Octree::from_triangles(triangles.clone());

        for (x, z, y) in [(1.1, 2.3, 0.30), (3.0, 3.0, 0.1), (5.9, 0.2, 0.34), (2.0, 2.0, 1.0)] {
            let cap = Capsule::new(Vec3::new(x, y, z), Vec3::new(x, y + 1.0, z), 0.35);
            let a = tree.capsule_intersect(&cap);
            let b = brute_force(&triangles, &cap);
            assert_eq!(a.is_some(), b.is_some(), "capsule at ({x}, {y}, {z})");
            if let (Some(a), Some(b)) = (a, b) {
                assert!((a.normal - b.normal).length() < 1e-4);
                assert!((a.depth - b.depth).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn standing_capsule_is_pushed_out_of_floor() {
        let tree = Octree::from_triangles(grid(4, 1.0, 0.0));
        let cap = Capsule::new(Vec3::new(1.5, 0.25, 1.5), Vec3::new(1.5, 1.25, 1.5), 0.35);
        let hit = tree.capsule_intersect(&cap).expect("floor contact");
        assert!(hit.normal.y > 0.99);
        assert!((hit.depth - 0.1).abs() < 1e-4, "depth {}", hit.depth);
    }

    #[test]
    fn touching_capsule_reports_zero_depth_contact() {
        let tree = Octree::from_triangles(grid(4, 1.0, 0.0));
        let cap = Capsule::new(Vec3::new(1.5, 0.35, 1.5), Vec3::new(1.5, 1.35, 1.5), 0.35);
        let hit = tree.capsule_intersect(&cap).expect("resting contact");
        assert!(hit.normal.y > 0.99);
        assert!(hit.depth.abs() < 1e-6);
    }

    #[test]
    fn mesh_indices_are_validated() {
        let positions = [Vec3::ZERO, Vec3::X, Vec3::Z];
        assert!(Octree::from_mesh(&positions, &[0, 1]).is_err());
        assert!(Octree::from_mesh(&positions, &[0, 1, 7]).is_err());
        assert!(Octree::from_mesh(&positions, &[0, 2, 1]).is_ok());
    }

    #[test]
    fn empty_octree_never_collides() {
        let tree = Octree::from_triangles(Vec::new());
        let cap = Capsule::new(Vec3::ZERO, Vec3::Y, 0.5);
        assert!(tree.is_empty());
        assert!(tree.capsule_intersect(&cap).is_none());
        assert!(!Octree::from_triangles(grid(1, 1.0, 0.0)).is_empty());
    }
}
