//! Mouse-look accumulation
//!
//! Raw mouse motion arrives many times per frame. [`LookAccumulator`] sums
//! it so the host can emit exactly one look event per frame.
//!
//! Raw device deltas have +y pointing **down**; the accumulator flips it so
//! the emitted look vector has +y pointing up (mouse up looks up).
//!
//! # Example
//!
//! ```rust,ignore
//! let mut look = LookAccumulator::new();
//!
//! // In event loop: raw device motion
//! look.accumulate(10.0, -5.0);
//! look.accumulate(3.0, 2.0);
//!
//! // Once per frame
//! if let Some(event) = look.take_event() {
//!     relay.handle(event, &mut player);
//! }
//! ```

use glam::Vec2;

use super::relay::InputEvent;

/// Sums raw mouse motion between frames.
#[derive(Debug, Clone, Default)]
pub struct LookAccumulator {
    /// Accumulated raw delta (device units, +y down)
    delta: Vec2,
    /// Whether motion is currently accepted
    captured: bool,
}

impl LookAccumulator {
    /// Create an accumulator that ignores motion until captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add raw device motion. Ignored while not captured.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        if self.captured && dx.is_finite() && dy.is_finite() {
            self.delta += Vec2::new(dx, dy);
        }
    }

    /// Take the summed motion as a look vector (+y up) and reset to zero.
    #[inline]
    pub fn take(&mut self) -> Vec2 {
        let raw = std::mem::take(&mut self.delta);
        Vec2::new(raw.x, -raw.y)
    }

    /// Take the summed motion as a look event, or `None` if nothing moved.
    pub fn take_event(&mut self) -> Option<InputEvent> {
        let look = self.take();
        (look != Vec2::ZERO).then_some(InputEvent::Look(look))
    }

    /// Start or stop accepting motion. Stopping drops anything pending.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.delta = Vec2::ZERO;
        }
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Raw accumulated motion without consuming it.
    #[inline]
    pub fn peek(&self) -> Vec2 {
        self.delta
    }
}
