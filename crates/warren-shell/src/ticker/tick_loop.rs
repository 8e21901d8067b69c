use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::engine::Engine;
use crate::input::TouchState;

/// Fixed tick pacing, ~50 Hz. Deliberately not load-adaptive: a slow engine
/// call stalls the next sleep, it is never compensated for.
pub const TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Handle to one foreground period's tick worker.
///
/// Each iteration sleeps the interval, forwards the touch position if one is
/// active, then ticks the engine. The worker re-reads its run flag at the
/// top of every iteration; clearing the flag is the only cancellation
/// mechanism. [`TickLoop::stop`] clears and joins, so the worker outlives it
/// by at most one interval and makes no engine call after `stop` returns.
pub struct TickLoop {
    run: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickLoop {
    /// Spawns the worker with its run flag already set.
    ///
    /// A spawn failure is logged and leaves the loop already stopped: the
    /// foreground period then runs without ticking instead of bringing the
    /// host down.
    pub fn start(engine: Arc<dyn Engine>, touch: Arc<TouchState>, interval: Duration) -> Self {
        let run = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&run);

        let handle = thread::Builder::new()
            .name("warren-tick".into())
            .spawn(move || run_loop(&flag, engine.as_ref(), &touch, interval));

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::error!("failed to spawn tick worker: {err}");
                run.store(false, Ordering::Relaxed);
                None
            }
        };

        Self { run, handle }
    }

    /// True until [`TickLoop::stop`] has been called.
    pub fn is_running(&self) -> bool {
        self.run.load(Ordering::Relaxed)
    }

    /// Clears the run flag and joins the worker.
    ///
    /// Blocks for at most one sleep interval plus whatever the engine's
    /// in-flight call takes.
    pub fn stop(&mut self) {
        self.run.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("tick worker panicked");
            }
        }
    }
}

impl Drop for TickLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(run: &AtomicBool, engine: &dyn Engine, touch: &TouchState, interval: Duration) {
    log::debug!("tick worker started ({interval:?} interval)");
    while run.load(Ordering::Relaxed) {
        thread::sleep(interval);
        if let Some((x, y)) = touch.sample() {
            engine.touch(x, y);
        }
        engine.tick();
    }
    log::debug!("tick worker stopped");
}
