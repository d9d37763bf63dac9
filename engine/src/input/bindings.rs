//! Input Bindings Module
//!
//! Maps physical keys to logical actions. An action may have several keys
//! (WASD and arrows both move), a key has at most one action.

use std::collections::HashMap;

use super::KeyCode;

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W, Up)
    MoveForward,
    /// Move backward (default: S, Down)
    MoveBack,
    /// Strafe left (default: A, Left)
    MoveLeft,
    /// Strafe right (default: D, Right)
    MoveRight,
    /// Sprint modifier (default: either Shift)
    Sprint,
    /// Jump (default: Space)
    Jump,
    /// Crouch (default: either Ctrl, C)
    Crouch,
    /// Release the captured cursor (default: Escape)
    ReleaseCursor,
}

/// Key to action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default layout.
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        for (key, action) in [
            (KeyCode::W, InputAction::MoveForward),
            (KeyCode::ArrowUp, InputAction::MoveForward),
            (KeyCode::S, InputAction::MoveBack),
            (KeyCode::ArrowDown, InputAction::MoveBack),
            (KeyCode::A, InputAction::MoveLeft),
            (KeyCode::ArrowLeft, InputAction::MoveLeft),
            (KeyCode::D, InputAction::MoveRight),
            (KeyCode::ArrowRight, InputAction::MoveRight),
            (KeyCode::ShiftLeft, InputAction::Sprint),
            (KeyCode::ShiftRight, InputAction::Sprint),
            (KeyCode::Space, InputAction::Jump),
            (KeyCode::ControlLeft, InputAction::Crouch),
            (KeyCode::ControlRight, InputAction::Crouch),
            (KeyCode::C, InputAction::Crouch),
            (KeyCode::Escape, InputAction::ReleaseCursor),
        ] {
            bindings.bind(key, action);
        }

        bindings
    }

    /// Create bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
        }
    }

    /// Bind a key to an action, replacing whatever the key did before.
    ///
    /// Other keys bound to the same action keep working.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if key == KeyCode::Unknown {
            return;
        }
        self.key_to_action.insert(key, action);
    }

    /// Make `key` the only key for `action`.
    pub fn rebind(&mut self, action: InputAction, key: KeyCode) {
        self.unbind_action(action);
        self.bind(key, action);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_to_action.remove(&key);
    }

    /// Remove every key bound to an action.
    pub fn unbind_action(&mut self, action: InputAction) {
        self.key_to_action.retain(|_, bound| *bound != action);
    }

    /// Get the action bound to a physical key, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get every key bound to an action (unordered).
    pub fn keys_for(&self, action: InputAction) -> impl Iterator<Item = KeyCode> + '_ {
        self.key_to_action
            .iter()
            .filter(move |(_, bound)| **bound == action)
            .map(|(&key, _)| key)
    }
}
