use std::sync::{Arc, Mutex};

use super::{Engine, TextureSet};
use crate::assets::AssetSource;

/// Calls observed by [`RecordingEngine`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Init,
    /// Number of texture slots that were present.
    SetTextures(usize),
    Resume,
    Pause,
    Touch(f32, f32),
    Tick,
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Reset,
    Teardown,
}

/// Engine double that records every call it receives.
///
/// The mutex is test-only bookkeeping; the shell itself never locks.
#[derive(Default)]
pub(crate) struct RecordingEngine {
    calls: Mutex<Vec<Call>>,
}

impl RecordingEngine {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Engine for RecordingEngine {
    fn init(&self, _assets: Arc<dyn AssetSource>) {
        self.push(Call::Init);
    }

    fn set_textures(&self, textures: TextureSet) {
        let present = textures.iter().filter(|t| t.is_some()).count();
        self.push(Call::SetTextures(present));
    }

    fn resume(&self) {
        self.push(Call::Resume);
    }

    fn pause(&self) {
        self.push(Call::Pause);
    }

    fn touch(&self, x: f32, y: f32) {
        self.push(Call::Touch(x, y));
    }

    fn tick(&self) {
        self.push(Call::Tick);
    }

    fn move_forward(&self) {
        self.push(Call::MoveForward);
    }

    fn move_backward(&self) {
        self.push(Call::MoveBackward);
    }

    fn turn_left(&self) {
        self.push(Call::TurnLeft);
    }

    fn turn_right(&self) {
        self.push(Call::TurnRight);
    }

    fn reset(&self) {
        self.push(Call::Reset);
    }

    fn teardown(&self) {
        self.push(Call::Teardown);
    }
}
