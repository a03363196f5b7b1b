//! Bounding volume hierarchy over a triangle mesh.
//!
//! The hierarchy arrives as a flat table of literal [`NodeRecord`]s - box
//! corners plus either two child indices or an inclusive triangle range -
//! and is reified here into an explicit tree the traversal engine can walk.
//! Nodes are stored in one `Vec`, children referenced by index; node 0 is
//! the root and children always come after their parent.

use glint_math::{Aabb, Vec3};
use serde::{Deserialize, Serialize};

use crate::scene::{SceneError, SceneResult};

/// Literal description of one hierarchy node, as found in the embedded
/// data tables and the JSON scene asset.
///
/// Exactly one of `children` / `triangles` must be present. `triangles`
/// is an inclusive [first, last] triangle-index range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub min: [f32; 3],
    pub max: [f32; 3],
    #[serde(default)]
    pub children: Option<[usize; 2]>,
    #[serde(default)]
    pub triangles: Option<[usize; 2]>,
}

/// What a hierarchy node links to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BvhNodeKind {
    /// Internal node with two children, visited left then right.
    Branch { left: u32, right: u32 },
    /// Node owning an inclusive triangle range.
    Leaf { first: u32, last: u32 },
}

/// One node of the built hierarchy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BvhNode {
    pub bounds: Aabb,
    pub kind: BvhNodeKind,
}

/// The built, read-only hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub struct Bvh {
    nodes: Vec<BvhNode>,
}

impl Bvh {
    /// Build the hierarchy from literal records, scaling every box corner
    /// by `scale` (the same factor applied to the mesh vertices).
    ///
    /// Validates the table shape up front: the tree must be non-empty,
    /// child links in bounds and strictly forward (no cycles), every node
    /// either a branch or a leaf, every node reachable from the root, and
    /// the leaf ranges together must cover each of `triangle_count`
    /// triangles exactly once.
    pub fn from_records(
        records: &[NodeRecord],
        scale: f32,
        triangle_count: usize,
    ) -> SceneResult<Self> {
        if records.is_empty() {
            return Err(SceneError::EmptyHierarchy);
        }

        let mut nodes = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let kind = match (record.children, record.triangles) {
                (Some([left, right]), None) => {
                    for child in [left, right] {
                        if child >= records.len() || child <= index {
                            return Err(SceneError::BadChildLink { index, child });
                        }
                    }
                    BvhNodeKind::Branch {
                        left: left as u32,
                        right: right as u32,
                    }
                }
                (None, Some([first, last])) => {
                    if first > last || last >= triangle_count {
                        return Err(SceneError::BadTriangleRange { index, first, last });
                    }
                    BvhNodeKind::Leaf {
                        first: first as u32,
                        last: last as u32,
                    }
                }
                _ => return Err(SceneError::AmbiguousNode { index }),
            };

            let bounds = Aabb::from_points(Vec3::from_array(record.min), Vec3::from_array(record.max))
                .scaled_by(scale);
            nodes.push(BvhNode { bounds, kind });
        }

        let bvh = Self { nodes };
        bvh.validate_coverage(triangle_count)?;
        Ok(bvh)
    }

    /// Walk the tree from the root, checking that every node is reachable
    /// and that the leaf ranges partition the triangle set.
    fn validate_coverage(&self, triangle_count: usize) -> SceneResult<()> {
        let mut visited = vec![false; self.nodes.len()];
        let mut owners = vec![0usize; triangle_count];
        let mut stack = vec![0usize];

        while let Some(index) = stack.pop() {
            visited[index] = true;
            match self.nodes[index].kind {
                BvhNodeKind::Branch { left, right } => {
                    stack.push(left as usize);
                    stack.push(right as usize);
                }
                BvhNodeKind::Leaf { first, last } => {
                    for triangle in first as usize..=last as usize {
                        owners[triangle] += 1;
                    }
                }
            }
        }

        if let Some(index) = visited.iter().position(|seen| !seen) {
            return Err(SceneError::UnreachableNode { index });
        }
        if let Some(triangle) = owners.iter().position(|count| *count != 1) {
            return Err(SceneError::TriangleCoverage {
                triangle,
                owners: owners[triangle],
            });
        }
        Ok(())
    }

    /// The root node.
    pub fn root(&self) -> &BvhNode {
        &self.nodes[0]
    }

    /// Node by index.
    pub fn node(&self, index: u32) -> &BvhNode {
        &self.nodes[index as usize]
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(min: [f32; 3], max: [f32; 3], first: usize, last: usize) -> NodeRecord {
        NodeRecord {
            min,
            max,
            children: None,
            triangles: Some([first, last]),
        }
    }

    fn branch(min: [f32; 3], max: [f32; 3], left: usize, right: usize) -> NodeRecord {
        NodeRecord {
            min,
            max,
            children: Some([left, right]),
            triangles: None,
        }
    }

    #[test]
    fn test_build_two_level_tree() {
        let records = [
            branch([-1.0; 3], [1.0; 3], 1, 2),
            leaf([-1.0; 3], [0.0; 3], 0, 1),
            leaf([0.0; 3], [1.0; 3], 2, 3),
        ];

        let bvh = Bvh::from_records(&records, 1.0, 4).unwrap();

        assert_eq!(bvh.len(), 3);
        assert!(matches!(bvh.root().kind, BvhNodeKind::Branch { left: 1, right: 2 }));
        assert!(matches!(bvh.node(2).kind, BvhNodeKind::Leaf { first: 2, last: 3 }));
    }

    #[test]
    fn test_build_applies_scale_to_corners() {
        let records = [leaf([-2.0; 3], [2.0; 3], 0, 0)];
        let bvh = Bvh::from_records(&records, 0.5, 1).unwrap();

        assert_eq!(bvh.root().bounds.min, glint_math::Vec3::splat(-1.0));
        assert_eq!(bvh.root().bounds.max, glint_math::Vec3::splat(1.0));
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = Bvh::from_records(&[], 1.0, 0).unwrap_err();
        assert!(matches!(err, SceneError::EmptyHierarchy));
    }

    #[test]
    fn test_backward_child_link_rejected() {
        // A child index pointing at the parent itself would loop forever
        let records = [
            branch([-1.0; 3], [1.0; 3], 0, 1),
            leaf([-1.0; 3], [1.0; 3], 0, 0),
        ];

        let err = Bvh::from_records(&records, 1.0, 1).unwrap_err();
        assert!(matches!(err, SceneError::BadChildLink { index: 0, child: 0 }));
    }

    #[test]
    fn test_range_out_of_bounds_rejected() {
        let records = [leaf([-1.0; 3], [1.0; 3], 0, 5)];

        let err = Bvh::from_records(&records, 1.0, 4).unwrap_err();
        assert!(matches!(
            err,
            SceneError::BadTriangleRange { index: 0, first: 0, last: 5 }
        ));
    }

    #[test]
    fn test_node_with_both_links_rejected() {
        let records = [NodeRecord {
            min: [-1.0; 3],
            max: [1.0; 3],
            children: Some([1, 2]),
            triangles: Some([0, 0]),
        }];

        let err = Bvh::from_records(&records, 1.0, 1).unwrap_err();
        assert!(matches!(err, SceneError::AmbiguousNode { index: 0 }));
    }

    #[test]
    fn test_overlapping_ranges_rejected() {
        let records = [
            branch([-1.0; 3], [1.0; 3], 1, 2),
            leaf([-1.0; 3], [0.0; 3], 0, 2),
            leaf([0.0; 3], [1.0; 3], 2, 3),
        ];

        let err = Bvh::from_records(&records, 1.0, 4).unwrap_err();
        assert!(matches!(err, SceneError::TriangleCoverage { triangle: 2, owners: 2 }));
    }

    #[test]
    fn test_uncovered_triangle_rejected() {
        let records = [leaf([-1.0; 3], [1.0; 3], 0, 1)];

        let err = Bvh::from_records(&records, 1.0, 3).unwrap_err();
        assert!(matches!(err, SceneError::TriangleCoverage { triangle: 2, owners: 0 }));
    }

    #[test]
    fn test_unreachable_node_rejected() {
        let records = [
            leaf([-1.0; 3], [1.0; 3], 0, 0),
            leaf([-1.0; 3], [1.0; 3], 0, 0),
        ];

        let err = Bvh::from_records(&records, 1.0, 1).unwrap_err();
        assert!(matches!(err, SceneError::UnreachableNode { index: 1 }));
    }
}
