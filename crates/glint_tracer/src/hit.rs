/// Record of the nearest ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray, in units of the direction's length.
    pub t: f32,
    /// Barycentric coordinates of the intersection point.
    pub u: f32,
    pub v: f32,
    /// Index of the intersected triangle.
    pub triangle: usize,
}
