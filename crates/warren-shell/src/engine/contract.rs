use std::sync::Arc;

use image::RgbaImage;

use crate::assets::AssetSource;

/// Ordered texture slots handed to the engine after creation.
///
/// A slot is `None` when the corresponding asset failed to open or decode;
/// the engine must tolerate missing entries.
pub type TextureSet = [Option<RgbaImage>; 3];

/// Contract between the shell and the external rendering/simulation engine.
///
/// All calls are one-way from the shell's perspective: nothing is returned
/// and nothing is retried. Implementations are shared between the UI thread
/// (lifecycle transitions, discrete commands) and the tick worker (touch and
/// tick), hence `Send + Sync` with `&self` methods.
pub trait Engine: Send + Sync {
    /// One-time setup. Never called twice without a `teardown` in between.
    ///
    /// The asset source handle lives exactly as long as the shell that
    /// created it.
    fn init(&self, assets: Arc<dyn AssetSource>);

    /// Hands over the decoded texture set, best-effort. Called once, after
    /// `init`.
    fn set_textures(&self, textures: TextureSet);

    /// Re-acquire foreground-only resources. Called on each foreground
    /// transition.
    fn resume(&self);

    /// Release foreground-only resources. A `touch`/`tick` pair may still
    /// arrive shortly after this while the tick worker drains its final
    /// iteration.
    fn pause(&self);

    /// Update simulation aim/focus from a normalized pointer position.
    /// Issued at most once per tick, only while a pointer is active.
    fn touch(&self, x: f32, y: f32);

    /// Advance the simulation/render one step. Issued once per tick-loop
    /// iteration.
    fn tick(&self);

    fn move_forward(&self);
    fn move_backward(&self);
    fn turn_left(&self);
    fn turn_right(&self);

    /// Return the simulation to its initial state. Dispatchable at any time
    /// between `init` and `teardown`, idempotently.
    fn reset(&self);

    /// Release all engine resources. No call follows this one.
    fn teardown(&self);
}
