//! Quaternion rotation helpers.
//!
//! The fly camera composes its orientation from incremental axis-angle
//! quaternions and rotates the world basis through it every frame. Both
//! rotation forms are provided: the full quaternion sandwich and the
//! cross-product shortcut the per-frame path uses.

use crate::{Quat, Vec3};

/// Build a rotation quaternion from an axis and an angle in radians.
///
/// Half-angle encoding: xyz carries the axis scaled by sin(angle/2), w is
/// cos(angle/2). The axis is expected to be unit length.
pub fn axis_angle(axis: Vec3, angle: f32) -> Quat {
    let (s, c) = (angle * 0.5).sin_cos();
    Quat::from_xyzw(axis.x * s, axis.y * s, axis.z * s, c)
}

/// Rotate a vector by a unit quaternion using the cross-product form.
///
/// v' = v + 2 * qv x (qv x v + w * v), with qv the quaternion's vector
/// part. Two cross products and no quaternion multiplies; assumes q is
/// unit length.
pub fn rotate(q: Quat, v: Vec3) -> Vec3 {
    let qv = Vec3::new(q.x, q.y, q.z);
    v + 2.0 * qv.cross(qv.cross(v) + q.w * v)
}

/// Rotate a vector through the full sandwich q * (v, 0) * conj(q).
///
/// The reference form; agrees with [`rotate`] for unit quaternions.
pub fn rotate_sandwich(q: Quat, v: Vec3) -> Vec3 {
    let p = Quat::from_xyzw(v.x, v.y, v.z, 0.0);
    let r = q * p * q.conjugate();
    Vec3::new(r.x, r.y, r.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < 1e-5,
            "vectors differ: {:?} vs {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_axis_angle_matches_glam() {
        let q = axis_angle(Vec3::Y, 0.7);
        let expected = Quat::from_axis_angle(Vec3::Y, 0.7);

        assert!((q.x - expected.x).abs() < 1e-6);
        assert!((q.y - expected.y).abs() < 1e-6);
        assert!((q.z - expected.z).abs() < 1e-6);
        assert!((q.w - expected.w).abs() < 1e-6);
    }

    #[test]
    fn test_quarter_turn_about_y() {
        // +Z rotated a quarter turn about +Y lands on +X
        let q = axis_angle(Vec3::Y, FRAC_PI_2);
        assert_close(rotate(q, Vec3::Z), Vec3::X);
    }

    #[test]
    fn test_fast_form_matches_sandwich() {
        let q = axis_angle(Vec3::new(1.0, 2.0, -0.5).normalize(), 1.3);
        for v in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(0.3, -2.0, 5.0)] {
            assert_close(rotate(q, v), rotate_sandwich(q, v));
        }
    }

    #[test]
    fn test_fast_form_matches_glam_mul_vec3() {
        let q = axis_angle(Vec3::new(0.0, 1.0, 1.0).normalize(), -0.9);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_close(rotate(q, v), q.mul_vec3(v));
    }

    #[test]
    fn test_composition_is_order_dependent() {
        let yaw = axis_angle(Vec3::Y, 0.5);
        let pitch = axis_angle(Vec3::X, 0.25);

        let a = rotate(yaw * pitch, Vec3::Z);
        let b = rotate(pitch * yaw, Vec3::Z);
        assert!((a - b).length() > 1e-4);
    }
}
