//! Input Module
//!
//! Platform-agnostic input for a first-person character. Decoupled from any
//! windowing system; the host converts its key codes and mouse motion.
//!
//! # Example
//!
//! ```rust,ignore
//! use fps_locomotion_engine::input::{InputRelay, KeyBindings, KeyCode, MovementKeys};
//!
//! let bindings = KeyBindings::new();
//! let mut keys = MovementKeys::new();
//! let mut relay = InputRelay::new();
//! relay.initialize();
//!
//! if let Some(action) = bindings.action_for(KeyCode::W) {
//!     if let Some(event) = keys.handle_key(KeyCode::W, action, true) {
//!         relay.handle(event, &mut player);
//!     }
//! }
//! ```

pub mod bindings;
pub mod cursor_manager;
pub mod keyboard;
pub mod mouse_state;
pub mod relay;

pub use bindings::{InputAction, KeyBindings};
pub use cursor_manager::{CursorAction, CursorManager};
pub use keyboard::{KeyCode, MovementKeys};
pub use mouse_state::LookAccumulator;
pub use relay::{InputEvent, InputRelay, InputTarget, MovementInput};
