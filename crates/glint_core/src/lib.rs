//! glint core - immutable scene data for the CPU ray tracer.
//!
//! This crate provides:
//!
//! - **Mesh**: [`TriMesh`], a flat list of vertices in implicit triples
//! - **Hierarchy**: [`Bvh`], an explicit bounding-box tree built from
//!   literal node records
//! - **Assembly**: [`Scene`], which couples mesh and hierarchy under one
//!   uniform scale factor
//! - **Assets**: the embedded default scene ([`data`]) and a JSON scene
//!   format ([`asset`])
//!
//! Everything here is built once at startup and read-only afterwards; the
//! tracer shares it freely across render threads.

pub mod asset;
pub mod bvh;
pub mod data;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use asset::{load_scene, AssetError};
pub use bvh::{Bvh, BvhNode, BvhNodeKind, NodeRecord};
pub use mesh::TriMesh;
pub use scene::{Scene, SceneError, SceneResult};
