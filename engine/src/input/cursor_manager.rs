//! Cursor Manager Module
//!
//! Tracks whether the pointer should be captured (hidden and locked) for
//! mouse-look. The manager only decides; the host applies the result to its
//! window whenever [`CursorAction::Apply`] comes back.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut cursor = CursorManager::new();
//!
//! cursor.capture();               // gameplay starts
//! cursor.handle_escape();         // Escape: show the pointer
//! cursor.handle_left_click();     // click: capture again
//!
//! if cursor.is_dirty() {
//!     window.set_cursor_visible(cursor.should_cursor_be_visible());
//!     cursor.clear_dirty();
//! }
//! ```

use log::debug;

/// What the host should do after the manager handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// Nothing changed
    None,
    /// Re-apply visibility and grab to the window
    Apply,
}

/// Pointer capture state.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether the player wants the pointer captured
    captured: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Set when the window needs updating
    dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Create a manager with a visible, free pointer.
    pub fn new() -> Self {
        Self {
            captured: false,
            has_focus: true,
            dirty: true,
        }
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Whether the window needs the current state applied.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Hide and lock the pointer.
    pub fn capture(&mut self) -> CursorAction {
        if self.captured {
            return CursorAction::None;
        }
        self.captured = true;
        self.dirty = true;
        debug!("cursor captured");
        CursorAction::Apply
    }

    /// Show and free the pointer.
    pub fn release(&mut self) -> CursorAction {
        if !self.captured {
            return CursorAction::None;
        }
        self.captured = false;
        self.dirty = true;
        debug!("cursor released");
        CursorAction::Apply
    }

    /// Escape releases the pointer.
    pub fn handle_escape(&mut self) -> CursorAction {
        self.release()
    }

    /// A left click while released captures again.
    pub fn handle_left_click(&mut self) -> CursorAction {
        self.capture()
    }

    /// Focus came back: re-apply whatever the player wanted.
    pub fn handle_focus_gained(&mut self) -> CursorAction {
        self.has_focus = true;
        self.dirty = true;
        CursorAction::Apply
    }

    /// Focus lost: the pointer shows, but the capture preference is kept.
    pub fn handle_focus_lost(&mut self) -> CursorAction {
        self.has_focus = false;
        self.dirty = true;
        CursorAction::Apply
    }

    /// Whether mouse-look should be active right now.
    pub fn is_looking(&self) -> bool {
        self.captured && self.has_focus
    }

    pub fn should_cursor_be_visible(&self) -> bool {
        !self.is_looking()
    }

    pub fn should_cursor_be_grabbed(&self) -> bool {
        self.is_looking()
    }

    /// Short hint for the window title or an overlay.
    pub fn status_message(&self) -> &'static str {
        if self.captured {
            "Mouse captured. ESC to release."
        } else {
            "Mouse released. Click to capture."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_released_and_dirty() {
        let cursor = CursorManager::new();
        assert!(!cursor.is_captured());
        assert!(cursor.should_cursor_be_visible());
        assert!(cursor.is_dirty());
    }

    #[test]
    fn test_capture_and_release() {
        let mut cursor = CursorManager::new();
        cursor.clear_dirty();

        assert_eq!(cursor.capture(), CursorAction::Apply);
        assert!(cursor.is_dirty());
        assert!(!cursor.should_cursor_be_visible());
        assert!(cursor.should_cursor_be_grabbed());

        // Capturing twice does nothing
        assert_eq!(cursor.capture(), CursorAction::None);

        assert_eq!(cursor.release(), CursorAction::Apply);
        assert!(cursor.should_cursor_be_visible());
    }

    #[test]
    fn test_escape_then_click() {
        let mut cursor = CursorManager::new();
        cursor.capture();

        assert_eq!(cursor.handle_escape(), CursorAction::Apply);
        assert!(!cursor.is_captured());
        assert_eq!(cursor.handle_escape(), CursorAction::None);

        assert_eq!(cursor.handle_left_click(), CursorAction::Apply);
        assert!(cursor.is_captured());
        assert_eq!(cursor.handle_left_click(), CursorAction::None);
    }

    #[test]
    fn test_focus_keeps_preference() {
        let mut cursor = CursorManager::new();
        cursor.capture();

        cursor.handle_focus_lost();
        assert!(cursor.is_captured());
        assert!(cursor.should_cursor_be_visible());
        assert!(!cursor.is_looking());

        assert_eq!(cursor.handle_focus_gained(), CursorAction::Apply);
        assert!(cursor.is_looking());
    }

    #[test]
    fn test_status_message() {
        let mut cursor = CursorManager::new();
        assert!(cursor.status_message().contains("Click"));

        cursor.capture();
        assert!(cursor.status_message().contains("ESC"));
    }
}
