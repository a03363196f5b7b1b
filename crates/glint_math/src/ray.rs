use crate::Vec3;

/// A ray in 3D space with origin and direction.
///
/// The direction is not required to be normalized; intersection distances
/// are reported in units of the direction's length. The componentwise
/// reciprocal of the direction is computed once here so the slab test does
/// not divide per node.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub recip: Vec3,
}

impl Ray {
    /// Create a new ray, caching the reciprocal direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            recip: direction.recip(),
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
