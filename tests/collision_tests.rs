//! Collision Tests
//!
//! Tests for:
//! - Octree construction from indexed meshes (with and without transform)
//! - Capsule queries through the SpatialIndex trait
//! - Floor, wall and corner contacts

use glam::{Affine3A, Vec3};

use wayfarer::{Capsule, CollisionMesh, Octree, SpatialIndex, Triangle};
use wayfarer_collision::{Aabb, OctreeSettings};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn standing_capsule(x: f32, y: f32, z: f32) -> Capsule {
    Capsule::new(Vec3::new(x, y, z), Vec3::new(x, y + 1.0, z), 0.35)
}

/// Floor quad plus a wall at `x = 2` facing -X.
fn room() -> CollisionMesh {
    CollisionMesh::new(
        vec![
            // floor
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(-5.0, 0.0, 5.0),
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::new(5.0, 0.0, -5.0),
            // wall
            Vec3::new(2.0, 0.0, -5.0),
            Vec3::new(2.0, 4.0, -5.0),
            Vec3::new(2.0, 4.0, 5.0),
            Vec3::new(2.0, 0.0, 5.0),
        ],
        vec![0, 1, 2, 0, 2, 3, 4, 6, 5, 4, 7, 6],
    )
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn mesh_builds_octree() {
    let mesh = room();
    let tree = Octree::from_mesh(&mesh.positions, &mesh.indices).unwrap();
    assert_eq!(tree.triangle_count(), 4);
    assert_eq!(mesh.triangle_count(), 4);

    let bounds = tree.bounds();
    assert!(bounds.min.x < -5.0 && bounds.max.x > 5.0);
    assert!(bounds.max.y > 4.0);
}

#[test]
fn wall_triangles_face_into_room() {
    let mesh = room();
    let tree = Octree::from_mesh(&mesh.positions, &mesh.indices).unwrap();
    let wall = tree.triangle(2).unwrap();
    let normal = wall.normal().unwrap();
    assert!(approx(normal.x, -1.0), "normal {normal}");
}

#[test]
fn transform_places_mesh_in_world() {
    let mesh = room();
    let raised = mesh
        .build_octree(Affine3A::from_translation(Vec3::new(0.0, 2.0, 0.0)))
        .unwrap();

    assert!(raised.capsule_intersect(&standing_capsule(0.0, 0.35, 0.0)).is_none());
    let hit = raised
        .capsule_intersect(&standing_capsule(0.0, 2.3, 0.0))
        .expect("raised floor");
    assert!(approx(hit.depth, 0.05));
}

#[test]
fn invalid_mesh_is_rejected() {
    let mesh = CollisionMesh::new(vec![Vec3::ZERO, Vec3::X], vec![0, 1, 2]);
    assert!(matches!(
        Octree::from_mesh(&mesh.positions, &mesh.indices),
        Err(wayfarer::Error::InvalidMesh(_))
    ));
}

#[test]
fn settings_bound_the_tree() {
    let mut triangles = Vec::new();
    for i in 0..64 {
        let x = i as f32;
        triangles.push(Triangle::new(
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(x, 0.0, 1.0),
            Vec3::new(x + 1.0, 0.0, 0.0),
        ));
    }
    let tree = Octree::with_settings(
        triangles,
        OctreeSettings {
            leaf_capacity: 4,
            max_depth: 3,
        },
    );

    assert_eq!(tree.settings().max_depth, 3);
    let query = Aabb::new(Vec3::new(10.2, -1.0, 0.2), Vec3::new(10.4, 1.0, 0.4));
    let candidates = tree.candidates(&query);
    assert!(candidates.contains(&10));
    assert!(candidates.len() < 64);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn floor_contact_points_up() {
    let mesh = room();
    let tree = Octree::from_mesh(&mesh.positions, &mesh.indices).unwrap();
    let index: &dyn SpatialIndex = &tree;

    let hit = index
        .capsule_intersect(&standing_capsule(0.0, 0.2, 0.0))
        .expect("floor contact");
    assert!(approx(hit.normal.y, 1.0));
    assert!(approx(hit.depth, 0.15));
}

#[test]
fn wall_contact_points_away_from_wall() {
    let mesh = room();
    let tree = Octree::from_mesh(&mesh.positions, &mesh.indices).unwrap();

    let hit = tree
        .capsule_intersect(&standing_capsule(1.8, 1.0, 0.0))
        .expect("wall contact");
    assert!(approx(hit.normal.x, -1.0), "normal {}", hit.normal);
    assert!(approx(hit.depth, 0.15));
}

#[test]
fn corner_contact_combines_both_pushes() {
    let mesh = room();
    let tree = Octree::from_mesh(&mesh.positions, &mesh.indices).unwrap();

    let capsule = standing_capsule(1.8, 0.2, 0.0);
    let hit = tree.capsule_intersect(&capsule).expect("corner contact");

    assert!(hit.normal.x < 0.0 && hit.normal.y > 0.0, "normal {}", hit.normal);
    let resolved = capsule.translated(hit.normal * hit.depth);
    assert!(tree.capsule_intersect(&resolved).is_none_or(|h| h.depth < 1e-3));
}

#[test]
fn capsule_in_open_air_has_no_contact() {
    let mesh = room();
    let tree = Octree::from_mesh(&mesh.positions, &mesh.indices).unwrap();
    assert!(tree.capsule_intersect(&standing_capsule(0.0, 1.5, 0.0)).is_none());
    assert!(tree.capsule_intersect(&standing_capsule(40.0, 0.0, 40.0)).is_none());
}
