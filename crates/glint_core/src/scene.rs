//! Scene assembly.
//!
//! A [`Scene`] couples the triangle mesh with its bounding hierarchy. Both
//! live in the same coordinate space: one uniform scale factor is applied
//! to mesh vertices and box corners in a single code path, so the two can
//! never drift apart.

use glint_math::Vec3;
use thiserror::Error;

use crate::bvh::{Bvh, NodeRecord};
use crate::data;
use crate::mesh::TriMesh;

/// Errors raised while assembling scene data. All fatal at startup.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("vertex count {count} is not a multiple of 3")]
    VertexCount { count: usize },

    #[error("hierarchy table is empty")]
    EmptyHierarchy,

    #[error("node {index}: child link {child} is out of bounds or not forward")]
    BadChildLink { index: usize, child: usize },

    #[error("node {index}: triangle range [{first}, {last}] is invalid")]
    BadTriangleRange {
        index: usize,
        first: usize,
        last: usize,
    },

    #[error("node {index}: must have exactly one of children or triangles")]
    AmbiguousNode { index: usize },

    #[error("node {index} is not reachable from the root")]
    UnreachableNode { index: usize },

    #[error("triangle {triangle} is owned by {owners} leaf ranges, expected 1")]
    TriangleCoverage { triangle: usize, owners: usize },
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;

/// Immutable scene: mesh plus hierarchy, in one coordinate space.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub mesh: TriMesh,
    pub bvh: Bvh,
}

impl Scene {
    /// Assemble a scene from raw vertex positions and hierarchy records.
    ///
    /// `scale` is applied uniformly to every vertex coordinate and every
    /// box corner. Construction is deterministic: the same input always
    /// produces a bit-identical scene.
    pub fn assemble(
        positions: Vec<Vec3>,
        records: &[NodeRecord],
        scale: f32,
    ) -> SceneResult<Self> {
        let mesh = TriMesh::from_positions(positions)?.scaled_by(scale);
        let bvh = Bvh::from_records(records, scale, mesh.triangle_count())?;
        Ok(Self { mesh, bvh })
    }

    /// The embedded default scene.
    pub fn built_in() -> SceneResult<Self> {
        let positions = data::VERTICES
            .iter()
            .map(|v| Vec3::from_array(*v))
            .collect();
        Self::assemble(positions, &data::NODES, data::MESH_SCALE)
    }
}
