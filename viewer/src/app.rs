//! Application glue: window, event loop, and input routing.
//!
//! Wires the tessellated mesh into the GPU pipeline and dispatches window
//! events to the camera controller and the display state. Everything runs
//! on the main thread; redraws are requested only when state changes.

use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use brepview_core::geometry::RenderMesh;

use crate::camera::{CameraController, OrbitCamera};
use crate::display::{DisplayState, BACKGROUND_COLOR};
use crate::gpu::{Gpu, SurfaceErrorAction};
use crate::render::MeshRenderer;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "brepview".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Runs the viewer until the window is closed.
pub fn run(mesh: RenderMesh) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = ViewerApp::new(ViewerConfig::default(), mesh);
    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    Ok(())
}

/// Per-window GPU resources, created once the event loop is live.
struct WindowCtx {
    window: Arc<Window>,
    gpu: Gpu,
    renderer: MeshRenderer,
}

struct ViewerApp {
    config: ViewerConfig,
    mesh: RenderMesh,

    display: DisplayState,
    rng: StdRng,
    camera: OrbitCamera,
    controller: CameraController,

    ctx: Option<WindowCtx>,
}

impl ViewerApp {
    fn new(config: ViewerConfig, mesh: RenderMesh) -> Self {
        let mut camera = OrbitCamera::default();
        if let Some((min, max)) = mesh.bounding_box() {
            camera.fit(min, max);
        }

        Self {
            config,
            mesh,
            display: DisplayState::default(),
            rng: StdRng::from_entropy(),
            camera,
            controller: CameraController::default(),
            ctx: None,
        }
    }

    fn create_window_ctx(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = pollster::block_on(Gpu::new(window.clone()))?;
        let renderer = MeshRenderer::new(&gpu, &self.mesh);
        info!("window and GPU context created");

        self.ctx = Some(WindowCtx {
            window,
            gpu,
            renderer,
        });
        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(ctx) = &self.ctx {
            ctx.window.request_redraw();
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(ctx) = self.ctx.as_mut() else {
            return;
        };

        let mut frame = match ctx.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                match ctx.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Reconfigured => ctx.window.request_redraw(),
                    SurfaceErrorAction::SkipFrame => {}
                    SurfaceErrorAction::Fatal => {
                        error!("fatal surface error, exiting");
                        event_loop.exit();
                    }
                }
                return;
            }
        };

        let size = ctx.gpu.size();
        let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
        let view_proj = self.camera.view_proj(aspect);

        // Headlight: light comes from the eye.
        let light_dir = (self.camera.eye() - self.camera.target).normalize();
        ctx.renderer.update_uniforms(
            ctx.gpu.queue(),
            view_proj,
            self.display.color,
            [light_dir.x, light_dir.y, light_dir.z],
        );

        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("viewer mesh pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: BACKGROUND_COLOR[0],
                            g: BACKGROUND_COLOR[1],
                            b: BACKGROUND_COLOR[2],
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: ctx.gpu.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            ctx.renderer.draw(&mut rpass);
        }

        ctx.window.pre_present_notify();
        ctx.gpu.submit(frame);
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.ctx.is_some() {
            return;
        }

        if let Err(e) = self.create_window_ctx(event_loop) {
            error!("failed to initialize window: {e:#}");
            event_loop.exit();
            return;
        }
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(new_size) => {
                if let Some(ctx) = self.ctx.as_mut() {
                    ctx.gpu.resize(new_size);
                    ctx.window.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(ctx) = self.ctx.as_mut() {
                    let new_size = ctx.window.inner_size();
                    ctx.gpu.resize(new_size);
                    ctx.window.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && self.display.handle_key(&event.logical_key, &mut self.rng)
                {
                    info!("object color changed to {:?}", self.display.color);
                    self.request_redraw();
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.on_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                if self.controller.on_cursor_moved(position, &mut self.camera) {
                    self.request_redraw();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if self.controller.on_scroll(delta, &mut self.camera) {
                    self.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.render(event_loop),

            _ => {}
        }
    }
}
