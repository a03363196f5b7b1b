//! Triangle mesh storage.
//!
//! The tracer consumes triangles as implicit triples of a flat vertex
//! list; there is no index buffer. Meshes are immutable once built.

use glint_math::{Aabb, Vec3};

use crate::scene::{SceneError, SceneResult};

/// A triangle soup: every three consecutive vertices form one triangle.
#[derive(Clone, Debug, PartialEq)]
pub struct TriMesh {
    positions: Vec<Vec3>,
}

impl TriMesh {
    /// Create a mesh from a flat vertex list.
    ///
    /// The vertex count must be a multiple of 3; anything else is a fatal
    /// configuration error.
    pub fn from_positions(positions: Vec<Vec3>) -> SceneResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(SceneError::VertexCount {
                count: positions.len(),
            });
        }
        Ok(Self { positions })
    }

    /// All vertex positions, in triangle order.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// The three vertices of triangle `index`.
    pub fn triangle(&self, index: usize) -> [Vec3; 3] {
        let base = index * 3;
        [
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        ]
    }

    /// Returns the mesh with every coordinate multiplied by a uniform
    /// factor.
    pub fn scaled_by(mut self, factor: f32) -> Self {
        for position in &mut self.positions {
            *position *= factor;
        }
        self
    }

    /// Axis-aligned bounds over all vertices.
    pub fn bounds(&self) -> Aabb {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);

        for position in &self.positions {
            min = min.min(*position);
            max = max.max(*position);
        }

        Aabb::new(min, max)
    }
}
