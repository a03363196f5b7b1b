//! glint tracer - software BVH ray tracing.
//!
//! A CPU renderer over the immutable scene data in `glint_core`:
//! per-pixel camera rays, depth-first bounding-box traversal with
//! running-best pruning, Möller-Trumbore triangle intersection, and a
//! greyscale depth shading into an RGBA8 frame. Scanlines render in
//! parallel with rayon; the tracer itself holds no mutable shared state.

mod camera;
mod frame;
mod hit;
mod intersect;
mod render;

pub use camera::{FlyCamera, InputFrame, LOOK_SENSITIVITY, MOVE_SPEED};
pub use frame::Frame;
pub use hit::Hit;
pub use intersect::{intersect, intersect_linear};
pub use render::{render, ViewPlane, FRAME_HEIGHT, FRAME_WIDTH};

/// Re-export common math types from glint_math
pub use glint_math::{Quat, Ray, Vec2, Vec3};
