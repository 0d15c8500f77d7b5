use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use viz_core::{command_for_key, GpuContext, InputEvent, Variant, VizApp};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::*;
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "viz-native", about = "Interactive shader visualizations", version)]
struct Args {
    /// Visualization to run: flow or geometric
    #[arg(long, env = "VIZ_VARIANT", default_value = "flow")]
    variant: Variant,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Seed for the randomize command (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u64>,
}

/// Cursor position to window-relative [0,1] coordinates (y down).
fn window_uv(pos: PhysicalPosition<f64>, size: PhysicalSize<u32>) -> Vec2 {
    if size.width == 0 || size.height == 0 {
        return Vec2::splat(0.5);
    }
    Vec2::new(
        (pos.x / size.width as f64) as f32,
        (pos.y / size.height as f64) as f32,
    )
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let mut app = VizApp::new(args.variant, args.seed.unwrap_or_else(clock_seed));

    let event_loop = EventLoop::new().context("event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(format!("shader-viz ({})", args.variant))
            .with_inner_size(winit::dpi::LogicalSize::new(args.width, args.height))
            .build(&event_loop)
            .context("window")?,
    );

    let size = window.inner_size();
    let instance = wgpu::Instance::default();
    let surface = instance
        .create_surface(window.clone())
        .context("surface")?;
    let mut gpu = pollster::block_on(GpuContext::new(
        &instance,
        surface,
        size.width,
        size.height,
        args.variant,
    ))
    .context("gpu init")?;
    app.set_resolution(size.width.max(1), size.height.max(1));

    let mut cursor = Vec2::splat(0.5);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gpu.resize_if_needed(size.width, size.height);
                if size.width > 0 && size.height > 0 {
                    app.set_resolution(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                cursor = window_uv(position, window.inner_size());
                app.handle_input(InputEvent::Move(cursor));
            }
            WindowEvent::CursorEntered { .. } => app.handle_input(InputEvent::Enter),
            WindowEvent::CursorLeft { .. } => app.handle_input(InputEvent::Leave),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => app.handle_input(InputEvent::Down(cursor)),
                ElementState::Released => app.handle_input(InputEvent::Up),
            },
            WindowEvent::Touch(touch) => {
                let uv = window_uv(touch.location, window.inner_size());
                let ev = match touch.phase {
                    TouchPhase::Started => InputEvent::TouchStart(uv),
                    TouchPhase::Moved => InputEvent::TouchMove(uv),
                    TouchPhase::Ended | TouchPhase::Cancelled => InputEvent::TouchEnd,
                };
                app.handle_input(ev);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => elwt.exit(),
                Key::Character(s) => {
                    if let Some(cmd) = command_for_key(s.as_str(), app.variant()) {
                        app.run(cmd);
                    }
                }
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            app.frame();
            match gpu.render(app.params()) {
                Ok(()) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("out of GPU memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
