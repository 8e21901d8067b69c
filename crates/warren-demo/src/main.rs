//! Desktop host for the warren shell.
//!
//! Owns the `winit` event loop and translates its events into the shell's
//! platform-agnostic lifecycle, pointer, and key calls. The engine here is a
//! logging stub: it proves the call contract without rendering anything.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use warren_shell::assets::{AssetSource, DirAssets};
use warren_shell::engine::{Engine, TextureSet};
use warren_shell::input::{Key, PointerEvent, PointerPhase};
use warren_shell::lifecycle::Shell;
use warren_shell::logging::{LoggingConfig, init_logging};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let assets: Arc<dyn AssetSource> = match DirAssets::new("assets") {
        Ok(dir) => Arc::new(dir),
        Err(err) => {
            log::warn!("{err:#}; running without textures");
            Arc::new(NoAssets)
        }
    };

    let shell = Shell::create(Arc::new(LogEngine::default()), assets);

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut host = Host { shell, window: None, cursor: (0.0, 0.0) };

    event_loop
        .run_app(&mut host)
        .context("winit event loop terminated with error")?;

    Ok(())
}

/// Asset source with nothing in it, used when no asset directory is found
/// next to the binary. Every texture slot stays unset.
struct NoAssets;

impl AssetSource for NoAssets {
    fn open(&self, name: &str) -> Result<Vec<u8>> {
        anyhow::bail!("no asset directory; {name} unavailable")
    }
}

struct Host {
    shell: Shell,
    window: Option<Window>,
    /// Last cursor position in physical pixels, for button events that
    /// arrive without coordinates.
    cursor: (f32, f32),
}

impl Host {
    fn surface_size(&self) -> (f32, f32) {
        match &self.window {
            Some(w) => {
                let size = w.inner_size();
                (size.width as f32, size.height as f32)
            }
            None => (0.0, 0.0),
        }
    }

    fn pointer(&self, phase: PointerPhase, x: f32, y: f32) -> PointerEvent {
        let (w, h) = self.surface_size();
        PointerEvent::new(phase, x, y, w, h)
    }
}

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title("warren")
                .with_inner_size(LogicalSize::new(800.0, 600.0));

            match event_loop.create_window(attrs) {
                Ok(window) => self.window = Some(window),
                Err(err) => {
                    log::error!("failed to create window: {err}");
                    event_loop.exit();
                    return;
                }
            }
        }

        self.shell.on_resume();
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.shell.on_pause();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.shell.on_destroy();
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = to_f32(position);
                let (x, y) = self.cursor;
                self.shell.on_pointer(&self.pointer(PointerPhase::Move, x, y));
            }

            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                let phase = match state {
                    ElementState::Pressed => PointerPhase::Down,
                    ElementState::Released => PointerPhase::Up,
                };
                let (x, y) = self.cursor;
                self.shell.on_pointer(&self.pointer(phase, x, y));
            }

            WindowEvent::Touch(touch) => {
                let phase = match touch.phase {
                    TouchPhase::Started => PointerPhase::Down,
                    TouchPhase::Moved => PointerPhase::Move,
                    TouchPhase::Ended => PointerPhase::Up,
                    TouchPhase::Cancelled => PointerPhase::Cancel,
                };
                let (x, y) = to_f32(touch.location);
                self.shell.on_pointer(&self.pointer(phase, x, y));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }

                if event.physical_key == PhysicalKey::Code(KeyCode::Escape) {
                    self.shell.on_destroy();
                    event_loop.exit();
                    return;
                }

                let key = map_key(event.physical_key);
                if !self.shell.on_key_down(key) {
                    log::debug!("unhandled key: {key:?}");
                }
            }

            _ => {}
        }
    }
}

fn to_f32(pos: PhysicalPosition<f64>) -> (f32, f32) {
    (pos.x as f32, pos.y as f32)
}

fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::ArrowUp => Key::ArrowUp,
            KeyCode::ArrowDown => Key::ArrowDown,
            KeyCode::ArrowLeft => Key::ArrowLeft,
            KeyCode::ArrowRight => Key::ArrowRight,
            KeyCode::KeyR => Key::R,
            other => Key::Unknown(other as u32),
        },
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

/// Stand-in engine that logs every call it receives.
#[derive(Default)]
struct LogEngine {
    ticks: AtomicU64,
}

impl Engine for LogEngine {
    fn init(&self, _assets: Arc<dyn AssetSource>) {
        log::info!("engine: init");
    }

    fn set_textures(&self, textures: TextureSet) {
        let present = textures.iter().filter(|t| t.is_some()).count();
        log::info!("engine: {present}/3 textures loaded");
    }

    fn resume(&self) {
        log::info!("engine: resume");
    }

    fn pause(&self) {
        log::info!("engine: pause");
    }

    fn touch(&self, x: f32, y: f32) {
        log::debug!("engine: touch ({x:.3}, {y:.3})");
    }

    fn tick(&self) {
        let n = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
        if n % 50 == 0 {
            log::debug!("engine: {n} ticks");
        }
    }

    fn move_forward(&self) {
        log::info!("engine: move forward");
    }

    fn move_backward(&self) {
        log::info!("engine: move backward");
    }

    fn turn_left(&self) {
        log::info!("engine: turn left");
    }

    fn turn_right(&self) {
        log::info!("engine: turn right");
    }

    fn reset(&self) {
        log::info!("engine: reset");
    }

    fn teardown(&self) {
        log::info!("engine: teardown after {} ticks", self.ticks.load(Ordering::Relaxed));
    }
}
