//! First-person fly camera.
//!
//! Pose is a position plus an orientation quaternion, integrated once per
//! frame from pointer deltas and movement keys. There are no discrete
//! states; every frame is one continuous pose update.

use glint_math::{rotor, Quat, Vec2, Vec3};

/// Radians of rotation per pixel of pointer travel.
pub const LOOK_SENSITIVITY: f32 = 0.005;

/// World units of travel per frame while a movement key is held.
pub const MOVE_SPEED: f32 = 0.05;

/// One frame of accumulated input: pointer delta since the previous frame
/// and the six movement key states.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    pub look_delta: Vec2,
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Camera pose, persisted across frames by the render loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Composed incrementally; never re-normalized after composition.
    pub orientation: Quat,
}

impl FlyCamera {
    /// Camera at `position`, looking down +Z with no roll.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Integrate one frame of input into the pose.
    ///
    /// Pitch is composed in the camera's local frame, yaw about the world
    /// up axis afterwards; the order is load-bearing for FPS-style look
    /// controls and must not be swapped.
    pub fn update(&mut self, input: &InputFrame) {
        let pitch = rotor::axis_angle(Vec3::X, input.look_delta.y * LOOK_SENSITIVITY);
        let yaw = rotor::axis_angle(Vec3::Y, input.look_delta.x * LOOK_SENSITIVITY);

        self.orientation = self.orientation * pitch;
        self.orientation = yaw * self.orientation;

        let (right, up, forward) = self.axes();
        let wish = right * key_axis(input.right, input.left)
            + up * key_axis(input.up, input.down)
            + forward * key_axis(input.forward, input.back);

        // normalize_or_zero: idle input stays put instead of dividing by zero
        self.position += wish.normalize_or_zero() * MOVE_SPEED;
    }

    /// The camera's local (right, up, forward) basis.
    pub fn axes(&self) -> (Vec3, Vec3, Vec3) {
        (
            rotor::rotate(self.orientation, Vec3::X),
            rotor::rotate(self.orientation, Vec3::Y),
            rotor::rotate(self.orientation, Vec3::Z),
        )
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

fn key_axis(positive: bool, negative: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}
