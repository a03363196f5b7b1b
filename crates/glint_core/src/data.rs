//! Embedded default scene.
//!
//! A small faceted test scene: a cube and an octahedron ahead of the
//! origin, a tetrahedron behind it. Vertices are listed in triangle order
//! (no index buffer); the hierarchy table nests the two front solids under
//! a shared box, with the tetrahedron as the root's other child. All
//! coordinates here are unscaled; [`MESH_SCALE`] brings mesh and boxes
//! into world space together.

use crate::bvh::NodeRecord;

/// Uniform scale applied to vertices and box corners alike.
pub const MESH_SCALE: f32 = 0.025;

/// Triangle vertices, three per triangle.
///
/// Triangles 0-11: cube, 12-19: octahedron, 20-23: tetrahedron.
pub const VERTICES: [[f32; 3]; 72] = [
    // Cube, x [-60,-20] y [-20,20] z [20,60]
    // z = 20 face
    [-60.0, -20.0, 20.0], [-20.0, -20.0, 20.0], [-20.0, 20.0, 20.0],
    [-60.0, -20.0, 20.0], [-20.0, 20.0, 20.0], [-60.0, 20.0, 20.0],
    // z = 60 face
    [-60.0, -20.0, 60.0], [-20.0, 20.0, 60.0], [-20.0, -20.0, 60.0],
    [-60.0, -20.0, 60.0], [-60.0, 20.0, 60.0], [-20.0, 20.0, 60.0],
    // x = -60 face
    [-60.0, -20.0, 20.0], [-60.0, 20.0, 20.0], [-60.0, 20.0, 60.0],
    [-60.0, -20.0, 20.0], [-60.0, 20.0, 60.0], [-60.0, -20.0, 60.0],
    // x = -20 face
    [-20.0, -20.0, 20.0], [-20.0, -20.0, 60.0], [-20.0, 20.0, 60.0],
    [-20.0, -20.0, 20.0], [-20.0, 20.0, 60.0], [-20.0, 20.0, 20.0],
    // y = -20 face
    [-60.0, -20.0, 20.0], [-60.0, -20.0, 60.0], [-20.0, -20.0, 60.0],
    [-60.0, -20.0, 20.0], [-20.0, -20.0, 60.0], [-20.0, -20.0, 20.0],
    // y = 20 face
    [-60.0, 20.0, 20.0], [-20.0, 20.0, 20.0], [-20.0, 20.0, 60.0],
    [-60.0, 20.0, 20.0], [-20.0, 20.0, 60.0], [-60.0, 20.0, 60.0],
    // Octahedron, center (40, 0, 40), radius 20
    [60.0, 0.0, 40.0], [40.0, 20.0, 40.0], [40.0, 0.0, 60.0],
    [40.0, 20.0, 40.0], [20.0, 0.0, 40.0], [40.0, 0.0, 60.0],
    [20.0, 0.0, 40.0], [40.0, -20.0, 40.0], [40.0, 0.0, 60.0],
    [40.0, -20.0, 40.0], [60.0, 0.0, 40.0], [40.0, 0.0, 60.0],
    [40.0, 20.0, 40.0], [60.0, 0.0, 40.0], [40.0, 0.0, 20.0],
    [20.0, 0.0, 40.0], [40.0, 20.0, 40.0], [40.0, 0.0, 20.0],
    [40.0, -20.0, 40.0], [20.0, 0.0, 40.0], [40.0, 0.0, 20.0],
    [60.0, 0.0, 40.0], [40.0, -20.0, 40.0], [40.0, 0.0, 20.0],
    // Tetrahedron, base at y = -20, apex (0, 20, -40)
    [-20.0, -20.0, -20.0], [20.0, -20.0, -20.0], [0.0, -20.0, -60.0],
    [-20.0, -20.0, -20.0], [20.0, -20.0, -20.0], [0.0, 20.0, -40.0],
    [20.0, -20.0, -20.0], [0.0, -20.0, -60.0], [0.0, 20.0, -40.0],
    [0.0, -20.0, -60.0], [-20.0, -20.0, -20.0], [0.0, 20.0, -40.0],
];

/// Hierarchy table over [`VERTICES`].
///
/// Root splits the scene front/back; the front box nests the cube and
/// octahedron leaves.
pub const NODES: [NodeRecord; 5] = [
    NodeRecord {
        min: [-60.0, -20.0, -60.0],
        max: [60.0, 20.0, 60.0],
        children: Some([1, 2]),
        triangles: None,
    },
    NodeRecord {
        min: [-60.0, -20.0, 20.0],
        max: [60.0, 20.0, 60.0],
        children: Some([3, 4]),
        triangles: None,
    },
    NodeRecord {
        min: [-20.0, -20.0, -60.0],
        max: [20.0, 20.0, -20.0],
        children: None,
        triangles: Some([20, 23]),
    },
    NodeRecord {
        min: [-60.0, -20.0, 20.0],
        max: [-20.0, 20.0, 60.0],
        children: None,
        triangles: Some([0, 11]),
    },
    NodeRecord {
        min: [20.0, -20.0, 20.0],
        max: [60.0, 20.0, 60.0],
        children: None,
        triangles: Some([12, 19]),
    },
];
