//! Headless render example.
//!
//! Renders the embedded scene from a fixed pose and writes a PNG.

use glint_core::Scene;
use glint_math::Vec3;
use glint_tracer::{render, FlyCamera, Frame, FRAME_HEIGHT, FRAME_WIDTH};

fn main() {
    let scene = Scene::built_in().expect("embedded scene data");
    println!(
        "Scene: {} triangles, {} hierarchy nodes",
        scene.mesh.triangle_count(),
        scene.bvh.len()
    );

    let camera = FlyCamera::new(Vec3::new(0.0, 0.0, -1.0));
    let mut frame = Frame::new(FRAME_WIDTH, FRAME_HEIGHT);

    let start = std::time::Instant::now();
    render(&scene, &camera, &mut frame);
    println!(
        "Rendered {}x{} in {:?}",
        frame.width(),
        frame.height(),
        start.elapsed()
    );

    let filename = "still_frame.png";
    frame.save_png(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}
