//! Input Relay
//!
//! Bridges host input events to a character's movement input. Each event
//! overwrites its field (last write wins); a jump press calls the jump
//! action right away, a jump release does nothing.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut relay = InputRelay::new();
//! relay.initialize(); // hide and lock the pointer
//!
//! relay.handle(InputEvent::Move(Vec2::new(0.0, 1.0)), &mut player);
//! relay.handle(InputEvent::Jump(true), &mut player);
//! ```

use glam::Vec2;
use log::debug;

use super::cursor_manager::{CursorAction, CursorManager};

/// Input state read by the movement controller every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementInput {
    /// x = strafe right, y = forward
    pub move_axis: Vec2,
    /// Look delta for this frame (x = yaw right, y = pitch up)
    pub look_delta: Vec2,
    pub sprint: bool,
    pub crouch: bool,
}

/// One discrete input event from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Move vector (x = right, y = forward)
    Move(Vec2),
    /// Look delta for this frame (x = right, y = up)
    Look(Vec2),
    Sprint(bool),
    Crouch(bool),
    /// `true` on press, `false` on release
    Jump(bool),
}

/// Something the relay can write input into.
pub trait InputTarget {
    /// Movement input to overwrite.
    fn input_mut(&mut self) -> &mut MovementInput;

    /// Jump now. Returns true if the jump happened.
    fn try_jump(&mut self) -> bool;
}

/// Pass-through from input events to an [`InputTarget`], plus the pointer
/// capture state.
#[derive(Debug, Clone, Default)]
pub struct InputRelay {
    cursor: CursorManager,
    initialized: bool,
}

impl InputRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide and lock the pointer. Call once when gameplay starts.
    pub fn initialize(&mut self) -> CursorAction {
        self.initialized = true;
        self.cursor.capture()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn cursor(&self) -> &CursorManager {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut CursorManager {
        &mut self.cursor
    }

    /// Write one event into `target`. Returns true if it triggered a jump.
    ///
    /// Vectors with non-finite components are dropped.
    pub fn handle<T: InputTarget + ?Sized>(&mut self, event: InputEvent, target: &mut T) -> bool {
        match event {
            InputEvent::Move(axis) => {
                if axis.is_finite() {
                    target.input_mut().move_axis = axis;
                } else {
                    debug!("dropped non-finite move input {axis}");
                }
            }
            InputEvent::Look(delta) => {
                if delta.is_finite() {
                    target.input_mut().look_delta = delta;
                } else {
                    debug!("dropped non-finite look input {delta}");
                }
            }
            InputEvent::Sprint(pressed) => target.input_mut().sprint = pressed,
            InputEvent::Crouch(pressed) => target.input_mut().crouch = pressed,
            InputEvent::Jump(true) => return target.try_jump(),
            InputEvent::Jump(false) => {}
        }
        false
    }
}
