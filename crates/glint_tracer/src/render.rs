//! Frame rendering.
//!
//! Each frame derives a view plane from the camera pose, shoots one ray
//! per pixel, and maps hit distance to a greyscale intensity. Pixels only
//! read shared immutable state and write their own slot, so scanlines
//! render in parallel with rayon.

use glint_core::Scene;
use glint_math::{Ray, Vec3};
use rayon::prelude::*;

use crate::camera::FlyCamera;
use crate::frame::Frame;
use crate::intersect;

/// Output raster dimensions.
pub const FRAME_WIDTH: u32 = 320;
pub const FRAME_HEIGHT: u32 = 180;

/// Distance from the camera to the view plane.
const PLANE_DISTANCE: f32 = 1.0;

/// Brightness numerator: shade = SHADE_SCALE / hit distance.
const SHADE_SCALE: f32 = 160.0;

/// The camera's view plane as three world-space corner vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    pub top_left: Vec3,
    pub top_right: Vec3,
    pub bottom_left: Vec3,
}

impl ViewPlane {
    /// Derive the plane corners from the camera axes and an aspect ratio
    /// (width over height).
    pub fn from_camera(camera: &FlyCamera, aspect: f32) -> Self {
        let (right, up, forward) = camera.axes();
        let center = forward * PLANE_DISTANCE;

        Self {
            top_left: center - right * aspect + up,
            top_right: center + right * aspect + up,
            bottom_left: center - right * aspect - up,
        }
    }

    /// Ray direction through normalized viewport coordinates, u rightward
    /// and v downward in [0, 1).
    pub fn direction(&self, u: f32, v: f32) -> Vec3 {
        let point = self.top_left
            + (self.top_right - self.top_left) * u
            + (self.bottom_left - self.top_left) * v;
        point.normalize()
    }
}

/// Render one frame of the scene into `frame`.
///
/// The camera pose is read once up front; the parallel fill only touches
/// immutable data and disjoint pixel rows.
pub fn render(scene: &Scene, camera: &FlyCamera, frame: &mut Frame) {
    let start = std::time::Instant::now();

    let width = frame.width() as usize;
    let height = frame.height() as f32;
    let plane = ViewPlane::from_camera(camera, frame.width() as f32 / height);
    let origin = camera.position;

    frame
        .pixels_mut()
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let v = y as f32 / height;
            for x in 0..width {
                let u = x as f32 / width as f32;
                let ray = Ray::new(origin, plane.direction(u, v));

                let shade = match intersect::intersect(scene, &ray) {
                    Some(hit) => (SHADE_SCALE / hit.t) as u8,
                    None => 0,
                };

                let pixel = &mut row[x * 4..x * 4 + 4];
                pixel[0] = shade;
                pixel[1] = shade;
                pixel[2] = shade;
                pixel[3] = 255;
            }
        });

    log::trace!("frame rendered in {:.2?}", start.elapsed());
}
