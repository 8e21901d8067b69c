use std::sync::Arc;
use std::time::Duration;

use crate::assets::{AssetSource, load_textures};
use crate::command;
use crate::engine::Engine;
use crate::input::{self, Key, PointerEvent, TouchState};
use crate::ticker::{TICK_INTERVAL, TickLoop};

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Tick worker pacing.
    pub tick_interval: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { tick_interval: TICK_INTERVAL }
    }
}

/// Lifecycle phase: `Created → Resumed ⇄ Paused → Destroyed`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Created,
    Resumed,
    Paused,
    Destroyed,
}

/// Root lifecycle controller.
///
/// The embedding host is expected to deliver transitions in strict
/// alternation (`create → resume ⇄ pause → destroy`); that contract is
/// assumed, not re-validated, except that [`Shell::on_resume`] guards
/// against double starts so a misbehaving host can never end up with two
/// live tick workers.
pub struct Shell {
    engine: Arc<dyn Engine>,
    touch: Arc<TouchState>,
    worker: Option<TickLoop>,
    phase: Phase,
    config: ShellConfig,
}

impl Shell {
    /// `onCreate`: hands the engine its asset source and the best-effort
    /// texture set.
    ///
    /// Texture open/decode failures are non-fatal; the affected slots stay
    /// unset and the engine is expected to cope.
    pub fn create(engine: Arc<dyn Engine>, assets: Arc<dyn AssetSource>) -> Self {
        Self::with_config(engine, assets, ShellConfig::default())
    }

    /// Like [`Shell::create`] with explicit configuration.
    pub fn with_config(
        engine: Arc<dyn Engine>,
        assets: Arc<dyn AssetSource>,
        config: ShellConfig,
    ) -> Self {
        engine.init(Arc::clone(&assets));
        engine.set_textures(load_textures(assets.as_ref()));

        Self {
            engine,
            touch: Arc::new(TouchState::new()),
            worker: None,
            phase: Phase::Created,
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `onResume`: notifies the engine, then starts the tick worker.
    ///
    /// A second resume without an intervening pause notifies the engine
    /// again but does not start another worker.
    pub fn on_resume(&mut self) {
        if self.phase == Phase::Destroyed {
            log::warn!("on_resume after destroy ignored");
            return;
        }

        self.engine.resume();

        if self.worker.is_some() {
            log::warn!("tick worker already live; not starting another");
        } else {
            self.worker = Some(TickLoop::start(
                Arc::clone(&self.engine),
                Arc::clone(&self.touch),
                self.config.tick_interval,
            ));
        }

        self.phase = Phase::Resumed;
    }

    /// `onPause`: notifies the engine, then stops and joins the worker.
    ///
    /// The engine may still see one in-flight `touch`/`tick` pair between
    /// the pause notification and the join; it sees nothing after this
    /// returns. The join blocks for at most one tick interval.
    pub fn on_pause(&mut self) {
        if self.phase == Phase::Destroyed {
            log::warn!("on_pause after destroy ignored");
            return;
        }

        self.engine.pause();
        if let Some(mut worker) = self.worker.take() {
            worker.stop();
        }
        self.phase = Phase::Paused;
    }

    /// `onDestroy`: releases the engine. No further lifecycle call is valid.
    ///
    /// Tolerates a host that skips the final pause: any live worker is
    /// stopped before teardown so no tick can land afterwards.
    pub fn on_destroy(&mut self) {
        if self.phase == Phase::Destroyed {
            log::warn!("on_destroy after destroy ignored");
            return;
        }

        if let Some(mut worker) = self.worker.take() {
            worker.stop();
        }
        self.engine.teardown();
        self.phase = Phase::Destroyed;
    }

    /// Routes a pointer event into the shared touch state. Returns whether
    /// the event was consumed.
    pub fn on_pointer(&self, ev: &PointerEvent) -> bool {
        input::apply_pointer(&self.touch, ev)
    }

    /// Routes a key press to the command dispatcher. Returns whether the
    /// key was handled; unhandled keys fall back to the host.
    pub fn on_key_down(&self, key: Key) -> bool {
        if self.phase == Phase::Destroyed {
            return false;
        }
        command::dispatch_key(self.engine.as_ref(), key)
    }
}
