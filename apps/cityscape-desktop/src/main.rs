use anyhow::{Context, Result};
use cityscape_assets::{DEFAULT_TEXTURE_PATH, TextureImage, city_block};
use cityscape_input::{InputState, KeyBindings};
use cityscape_kernel::FrameLoop;
use cityscape_render_wgpu::{GpuContext, WgpuRenderer};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "cityscape-desktop", about = "Fly around a small textured city block")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Wall texture image
    #[arg(long, default_value = DEFAULT_TEXTURE_PATH)]
    texture: PathBuf,

    /// JSON key bindings file replacing the defaults
    #[arg(long)]
    bindings: Option<PathBuf>,
}

/// GPU resources, released renderer first, then the context.
struct Gpu {
    renderer: WgpuRenderer,
    context: GpuContext,
}

struct App {
    frames: FrameLoop,
    input: InputState,
    bindings: KeyBindings,
    texture_path: PathBuf,
    started: Instant,
    // Declared before the window so the surface is dropped first
    gpu: Option<Gpu>,
    window: Option<Arc<Window>>,
    setup_error: Option<anyhow::Error>,
}

impl App {
    fn new(texture_path: PathBuf, bindings: KeyBindings) -> Self {
        Self {
            frames: FrameLoop::with_default_scene(),
            input: InputState::new(),
            bindings,
            texture_path,
            started: Instant::now(),
            gpu: None,
            window: None,
            setup_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("3D Surface with Buildings")
            .with_inner_size(PhysicalSize::new(800u32, 600));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let context = GpuContext::new(window.clone(), size.width, size.height)?;
        let texture = TextureImage::load_or_fallback(&self.texture_path);
        let renderer = WgpuRenderer::new(
            &context.device,
            &context.queue,
            context.surface_format(),
            size.width,
            size.height,
            &city_block(),
            &texture,
        )?;

        self.gpu = Some(Gpu { renderer, context });
        self.window = Some(window);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.started.elapsed().as_secs_f32();
        let actions = self.input.frame_actions(&self.bindings);
        let Some(frame) = self.frames.step(now, &actions) else {
            event_loop.exit();
            return;
        };

        let Some(gpu) = &self.gpu else {
            return;
        };

        let output = match gpu.context.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.context.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        gpu.renderer
            .render(&gpu.context.device, &gpu.context.queue, &view, &frame);
        output.present();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.setup_error.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            tracing::error!("setup failed: {e:#}");
            self.setup_error = Some(e);
            event_loop.exit();
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
                self.frames.request_close();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(new_size.width, new_size.height);
                    let (width, height) = gpu.context.size();
                    gpu.renderer.resize(&gpu.context.device, width, height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let key = format!("{code:?}");
                self.input
                    .handle_key(&key, key_state == ElementState::Pressed);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let bindings = match &cli.bindings {
        Some(path) => KeyBindings::load(path)
            .with_context(|| format!("failed to load key bindings from {}", path.display()))?,
        None => KeyBindings::default(),
    };

    tracing::info!("cityscape-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(cli.texture, bindings);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.setup_error.take() {
        return Err(e);
    }

    tracing::info!("clean shutdown");
    Ok(())
}
