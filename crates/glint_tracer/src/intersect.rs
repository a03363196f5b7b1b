//! Ray-scene intersection.
//!
//! Depth-first traversal of the bounding hierarchy with slab-method box
//! rejection, Möller-Trumbore for the triangles owned by visited leaves.
//! The running best hit distance prunes boxes and triangles alike, so a
//! close hit found early cuts off farther subtrees visited later.

use glint_core::{BvhNodeKind, Scene};
use glint_math::{Interval, Ray, Vec3};

use crate::hit::Hit;

/// Parallel-ray rejection threshold for the triangle test. Tuned to the
/// scene scale; changing one means revisiting the other.
const EPSILON: f32 = 1e-6;

/// Minimum accepted hit distance, so rays never hit at their own origin.
pub const T_MIN: f32 = 1e-3;

/// Find the nearest intersection of `ray` with the scene, or `None`.
///
/// Never fails; a miss is an ordinary result. Children are visited left
/// then right in table order, with no front-to-back reordering.
pub fn intersect(scene: &Scene, ray: &Ray) -> Option<Hit> {
    let mut best = Hit {
        t: f32::INFINITY,
        u: 0.0,
        v: 0.0,
        triangle: 0,
    };
    visit(scene, ray, 0, &mut best);
    best.t.is_finite().then_some(best)
}

fn visit(scene: &Scene, ray: &Ray, index: u32, best: &mut Hit) {
    let node = scene.bvh.node(index);
    if !node.bounds.intersects(ray, best.t) {
        return;
    }

    match node.kind {
        BvhNodeKind::Branch { left, right } => {
            visit(scene, ray, left, best);
            visit(scene, ray, right, best);
        }
        BvhNodeKind::Leaf { first, last } => {
            for triangle in first as usize..=last as usize {
                let [v0, v1, v2] = scene.mesh.triangle(triangle);
                let ray_t = Interval::new(T_MIN, best.t);
                if let Some((t, u, v)) = hit_triangle(ray, v0, v1, v2, ray_t) {
                    *best = Hit { t, u, v, triangle };
                }
            }
        }
    }
}

/// Exhaustive scan over every triangle, ignoring the hierarchy.
///
/// The traversal's ground-truth oracle; also handy for tiny scenes.
pub fn intersect_linear(scene: &Scene, ray: &Ray) -> Option<Hit> {
    let mut best = Hit {
        t: f32::INFINITY,
        u: 0.0,
        v: 0.0,
        triangle: 0,
    };

    for triangle in 0..scene.mesh.triangle_count() {
        let [v0, v1, v2] = scene.mesh.triangle(triangle);
        let ray_t = Interval::new(T_MIN, best.t);
        if let Some((t, u, v)) = hit_triangle(ray, v0, v1, v2, ray_t) {
            best = Hit { t, u, v, triangle };
        }
    }

    best.t.is_finite().then_some(best)
}

/// Möller-Trumbore ray-triangle intersection, non-culling (both sides).
///
/// Returns (t, u, v) for a hit with t strictly inside `ray_t`.
fn hit_triangle(
    ray: &Ray,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    ray_t: Interval,
) -> Option<(f32, f32, f32)> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;

    let h = ray.direction.cross(e2);
    let a = e1.dot(h);

    // Ray parallel to the triangle plane
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(e1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * e2.dot(q);
    if !ray_t.surrounds(t) {
        return None;
    }

    Some((t, u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::NodeRecord;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn single_triangle_scene(v0: Vec3, v1: Vec3, v2: Vec3) -> Scene {
        let min = v0.min(v1).min(v2);
        let max = v0.max(v1).max(v2);
        let records = [NodeRecord {
            min: min.to_array(),
            max: max.to_array(),
            children: None,
            triangles: Some([0, 0]),
        }];
        Scene::assemble(vec![v0, v1, v2], &records, 1.0).unwrap()
    }

    #[test]
    fn test_triangle_ground_truth() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, -1.0), Vec3::new(0.0, 0.0, 1.0));
        let (t, u, v) = hit_triangle(
            &ray,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Interval::new(T_MIN, f32::INFINITY),
        )
        .unwrap();

        assert!((t - 1.0).abs() < 1e-6);
        assert!((u - 0.25).abs() < 1e-6);
        assert!((v - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_triangle_miss() {
        let ray = Ray::new(Vec3::new(10.0, 10.0, -1.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = hit_triangle(
            &ray,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Interval::new(T_MIN, f32::INFINITY),
        );

        assert!(hit.is_none());
    }

    #[test]
    fn test_triangle_hits_back_side() {
        // Non-culling: approaching from behind still intersects
        let ray = Ray::new(Vec3::new(0.25, 0.25, 1.0), Vec3::new(0.0, 0.0, -1.0));
        let (t, ..) = hit_triangle(
            &ray,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Interval::new(T_MIN, f32::INFINITY),
        )
        .unwrap();

        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_parallel_ray_rejected() {
        // Ray in the triangle's own plane
        let ray = Ray::new(Vec3::new(-1.0, 0.25, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let hit = hit_triangle(
            &ray,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Interval::new(T_MIN, f32::INFINITY),
        );

        assert!(hit.is_none());
    }

    #[test]
    fn test_triangle_beyond_best_rejected() {
        let ray = Ray::new(Vec3::new(0.25, 0.25, -1.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = hit_triangle(
            &ray,
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Interval::new(T_MIN, 0.5),
        );

        assert!(hit.is_none());
    }

    #[test]
    fn test_intersect_single_triangle_scene() {
        let scene = single_triangle_scene(
            Vec3::new(-1.0, -1.0, 2.0),
            Vec3::new(1.0, -1.0, 2.0),
            Vec3::new(0.0, 1.0, 2.0),
        );

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = intersect(&scene, &ray).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-6);
        assert_eq!(hit.triangle, 0);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(intersect(&scene, &ray).is_none());
    }

    #[test]
    fn test_traversal_matches_linear_oracle() {
        let scene = Scene::built_in().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let mut hits = 0;
        for _ in 0..512 {
            let origin = Vec3::new(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            );
            let direction = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if direction.length_squared() < 1e-4 {
                continue;
            }

            let ray = Ray::new(origin, direction);
            let traversed = intersect(&scene, &ray);
            let scanned = intersect_linear(&scene, &ray);

            match (traversed, scanned) {
                (Some(a), Some(b)) => {
                    assert_eq!(a.t, b.t, "distances diverge for ray {:?}", ray);
                    assert_eq!(a.triangle, b.triangle);
                    hits += 1;
                }
                (None, None) => {}
                (a, b) => panic!("hit/miss mismatch for ray {:?}: {:?} vs {:?}", ray, a, b),
            }
        }

        // The sample has to actually exercise the hierarchy
        assert!(hits > 25, "only {} of 512 rays hit the scene", hits);
    }

    #[test]
    fn test_nearest_hit_wins_across_subtrees() {
        let scene = Scene::built_in().unwrap();

        // From the origin towards the octahedron cluster: its near face
        // must win over everything behind it
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.05, 1.0).normalize());
        let hit = intersect(&scene, &ray).unwrap();
        let oracle = intersect_linear(&scene, &ray).unwrap();

        assert_eq!(hit.t, oracle.t);
        assert!(hit.t < 2.0);
    }
}
