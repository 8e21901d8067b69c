//! Discrete command dispatch.
//!
//! Maps keys to one-shot engine commands. Stateless: a command is dispatched
//! the moment its key arrives and is never queued or buffered.

use crate::engine::Engine;
use crate::input::Key;

/// One-shot commands accepted by the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Reset,
}

/// Returns the command bound to `key`, if any.
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::ArrowUp => Some(Command::MoveForward),
        Key::ArrowDown => Some(Command::MoveBackward),
        Key::ArrowLeft => Some(Command::TurnLeft),
        Key::ArrowRight => Some(Command::TurnRight),
        Key::R => Some(Command::Reset),
        Key::Unknown(_) => None,
    }
}

/// Issues exactly one engine call for `cmd`.
pub fn dispatch(engine: &dyn Engine, cmd: Command) {
    match cmd {
        Command::MoveForward => engine.move_forward(),
        Command::MoveBackward => engine.move_backward(),
        Command::TurnLeft => engine.turn_left(),
        Command::TurnRight => engine.turn_right(),
        Command::Reset => engine.reset(),
    }
}

/// Dispatches the command bound to `key`.
///
/// Returns whether the key was handled; an unmapped key produces no engine
/// call and is left to the host's default handling.
pub fn dispatch_key(engine: &dyn Engine, key: Key) -> bool {
    match command_for_key(key) {
        Some(cmd) => {
            dispatch(engine, cmd);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recording::{Call, RecordingEngine};

    #[test]
    fn arrows_map_to_movement() {
        assert_eq!(command_for_key(Key::ArrowUp), Some(Command::MoveForward));
        assert_eq!(command_for_key(Key::ArrowDown), Some(Command::MoveBackward));
        assert_eq!(command_for_key(Key::ArrowLeft), Some(Command::TurnLeft));
        assert_eq!(command_for_key(Key::ArrowRight), Some(Command::TurnRight));
        assert_eq!(command_for_key(Key::R), Some(Command::Reset));
    }

    #[test]
    fn mapped_key_makes_exactly_one_call() {
        let engine = RecordingEngine::default();
        assert!(dispatch_key(&engine, Key::ArrowRight));
        assert_eq!(engine.calls(), vec![Call::TurnRight]);
    }

    #[test]
    fn unmapped_key_is_unhandled_and_silent() {
        let engine = RecordingEngine::default();
        assert!(!dispatch_key(&engine, Key::Unknown(42)));
        assert!(engine.calls().is_empty());
    }

    #[test]
    fn reset_is_repeatable() {
        let engine = RecordingEngine::default();
        assert!(dispatch_key(&engine, Key::R));
        assert!(dispatch_key(&engine, Key::R));
        assert_eq!(engine.calls(), vec![Call::Reset, Call::Reset]);
    }
}
