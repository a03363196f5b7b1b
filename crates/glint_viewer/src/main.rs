use anyhow::Result;
use glint_core::Scene;
use glint_present::Presenter;
use glint_tracer::{render, FlyCamera, Frame, InputFrame, Vec2, Vec3, FRAME_HEIGHT, FRAME_WIDTH};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

/// Application state
struct App {
    window: Option<std::sync::Arc<Window>>,
    presenter: Option<Presenter>,

    // Tracer state
    scene: Scene,
    camera: FlyCamera,
    frame: Frame,

    // Input state
    keys_pressed: std::collections::HashSet<KeyCode>,
    cursor: Option<(f64, f64)>,
    consumed_cursor: Option<(f64, f64)>,
}

impl App {
    fn new(scene: Scene) -> Self {
        Self {
            window: None,
            presenter: None,
            scene,
            camera: FlyCamera::new(Vec3::ZERO),
            frame: Frame::new(FRAME_WIDTH, FRAME_HEIGHT),
            keys_pressed: std::collections::HashSet::new(),
            cursor: None,
            consumed_cursor: None,
        }
    }

    /// Gather one frame of input: the cursor delta since the last frame
    /// and the current movement key states.
    fn input_frame(&mut self) -> InputFrame {
        let look_delta = match (self.cursor, self.consumed_cursor) {
            (Some(current), Some(previous)) => Vec2::new(
                (current.0 - previous.0) as f32,
                (current.1 - previous.1) as f32,
            ),
            _ => Vec2::ZERO,
        };
        self.consumed_cursor = self.cursor;

        InputFrame {
            look_delta,
            forward: self.keys_pressed.contains(&KeyCode::KeyW),
            back: self.keys_pressed.contains(&KeyCode::KeyS),
            left: self.keys_pressed.contains(&KeyCode::KeyA),
            right: self.keys_pressed.contains(&KeyCode::KeyD),
            up: self.keys_pressed.contains(&KeyCode::KeyE),
            down: self.keys_pressed.contains(&KeyCode::KeyQ),
        }
    }

    fn save_screenshot(&self) {
        match self.frame.save_png("frame.png") {
            Ok(()) => log::info!("Saved frame.png"),
            Err(e) => log::error!("Screenshot failed: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("glint")
                .with_inner_size(winit::dpi::PhysicalSize::new(1280, 720));

            let window = std::sync::Arc::new(
                event_loop
                    .create_window(window_attrs)
                    .expect("Failed to create window"),
            );

            // Initialize presenter (async in pollster block)
            let presenter =
                pollster::block_on(Presenter::new(window.clone(), FRAME_WIDTH, FRAME_HEIGHT))
                    .expect("Failed to initialize presenter");

            self.window = Some(window);
            self.presenter = Some(presenter);

            log::info!("Window and presenter initialized");
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize((physical_size.width, physical_size.height));
                    log::info!("Resized to {}x{}", physical_size.width, physical_size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x, position.y));
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key, state, ..
                },
                ..
            } => {
                if let PhysicalKey::Code(keycode) = physical_key {
                    match state {
                        ElementState::Pressed => {
                            self.keys_pressed.insert(keycode);

                            // Handle single-press keys
                            if keycode == KeyCode::KeyP {
                                self.save_screenshot();
                            }
                        }
                        ElementState::Released => {
                            self.keys_pressed.remove(&keycode);
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                // Integrate input, then fill the frame before handing it
                // to the presenter
                let input = self.input_frame();
                self.camera.update(&input);
                render(&self.scene, &self.camera, &mut self.frame);

                if let Some(presenter) = &mut self.presenter {
                    if let Err(e) = presenter.present(self.frame.pixels()) {
                        // Check if it's a surface error we can handle
                        if let Some(surface_err) = e.downcast_ref::<wgpu::SurfaceError>() {
                            match surface_err {
                                wgpu::SurfaceError::Lost => {
                                    // Surface lost, reconfigure
                                    let size = presenter.size;
                                    presenter.resize(size);
                                }
                                wgpu::SurfaceError::OutOfMemory => {
                                    log::error!("Out of memory!");
                                    event_loop.exit();
                                }
                                _ => {
                                    log::error!("Surface error: {:?}", surface_err);
                                }
                            }
                        } else {
                            log::error!("Present error: {:?}", e);
                        }
                    }
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting glint viewer");

    // Optional scene asset path; the embedded scene otherwise
    let scene = match std::env::args().nth(1) {
        Some(path) => glint_core::load_scene(&path)?,
        None => Scene::built_in()?,
    };
    log::info!(
        "Scene ready: {} triangles, {} hierarchy nodes",
        scene.mesh.triangle_count(),
        scene.bvh.len()
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(scene);

    log::info!("Running event loop");
    event_loop.run_app(&mut app)?;

    Ok(())
}
