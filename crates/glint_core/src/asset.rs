//! JSON scene assets.
//!
//! The embedded tables cover the default scene; this module accepts the
//! same data from disk. The format mirrors the construction contract
//! exactly: flat 3-float vertices, node records with 6-float boxes plus
//! children or triangle range, and one uniform scale factor.

use std::fs;
use std::path::Path;

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bvh::NodeRecord;
use crate::scene::{Scene, SceneError};

/// Errors raised while loading a scene asset.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

/// On-disk scene description.
#[derive(Debug, Serialize, Deserialize)]
pub struct SceneAsset {
    pub scale: f32,
    pub positions: Vec<[f32; 3]>,
    pub nodes: Vec<NodeRecord>,
}

impl SceneAsset {
    /// Assemble the asset into a [`Scene`].
    pub fn into_scene(self) -> Result<Scene, AssetError> {
        let positions = self
            .positions
            .iter()
            .map(|v| Vec3::from_array(*v))
            .collect();
        Ok(Scene::assemble(positions, &self.nodes, self.scale)?)
    }
}

/// Parse a scene from a JSON string.
pub fn parse_scene(json: &str) -> Result<Scene, AssetError> {
    let asset: SceneAsset = serde_json::from_str(json)?;
    asset.into_scene()
}

/// Load a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, AssetError> {
    let json = fs::read_to_string(path.as_ref())?;
    let scene = parse_scene(&json)?;
    log::info!(
        "loaded scene asset {:?}: {} triangles, {} nodes",
        path.as_ref(),
        scene.mesh.triangle_count(),
        scene.bvh.len()
    );
    Ok(scene)
}
