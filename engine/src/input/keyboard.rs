//! Keyboard Input Module
//!
//! Generic key codes and the held-key state that turns WASD into a move
//! vector. Decoupled from winit; the host converts its own key codes.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use super::bindings::InputAction;
use super::relay::InputEvent;

/// Generic key codes, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    C,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Held keys per bound action.
///
/// Works on [`InputAction`]s rather than raw keys, so it follows whatever
/// [`KeyBindings`](super::KeyBindings) are active. Each action remembers
/// which of its keys are down: with both Shifts held, releasing one keeps
/// sprinting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementKeys {
    held: HashMap<InputAction, HashSet<KeyCode>>,
}

impl MovementKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one key bound to `action` is down.
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.get(&action).is_some_and(|keys| !keys.is_empty())
    }

    /// Forward axis: +1 forward, -1 backward, 0 both or neither.
    pub fn forward_axis(&self) -> f32 {
        self.axis_value(InputAction::MoveForward, InputAction::MoveBack)
    }

    /// Right axis: +1 right, -1 left, 0 both or neither.
    pub fn right_axis(&self) -> f32 {
        self.axis_value(InputAction::MoveRight, InputAction::MoveLeft)
    }

    fn axis_value(&self, positive: InputAction, negative: InputAction) -> f32 {
        (self.is_held(positive) as i8 - self.is_held(negative) as i8) as f32
    }

    /// Move vector (x = right, y = forward), normalized on diagonals.
    pub fn axis(&self) -> Vec2 {
        Vec2::new(self.right_axis(), self.forward_axis()).normalize_or_zero()
    }

    /// Whether any direction is held.
    pub fn any_pressed(&self) -> bool {
        [
            InputAction::MoveForward,
            InputAction::MoveBack,
            InputAction::MoveLeft,
            InputAction::MoveRight,
        ]
        .into_iter()
        .any(|action| self.is_held(action))
    }

    /// Record a press or release of `key`, bound to `action`, and produce
    /// the event to relay, if any.
    ///
    /// Direction actions re-emit the whole move vector. Sprint and crouch
    /// only emit when the action as a whole changes between held and
    /// released. Jump forwards every press and release.
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        action: InputAction,
        pressed: bool,
    ) -> Option<InputEvent> {
        let was_held = self.is_held(action);
        if pressed {
            self.held.entry(action).or_default().insert(key);
        } else if let Some(keys) = self.held.get_mut(&action) {
            keys.remove(&key);
        }
        let held = self.is_held(action);

        match action {
            InputAction::MoveForward
            | InputAction::MoveBack
            | InputAction::MoveLeft
            | InputAction::MoveRight => Some(InputEvent::Move(self.axis())),
            InputAction::Sprint => (held != was_held).then_some(InputEvent::Sprint(held)),
            InputAction::Crouch => (held != was_held).then_some(InputEvent::Crouch(held)),
            InputAction::Jump => Some(InputEvent::Jump(pressed)),
            InputAction::ReleaseCursor => None,
        }
    }

    /// Release every key.
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
