//! Player Movement Controller
//!
//! First-person locomotion driven once per frame. Movement direction is
//! relative to the body's facing direction.
//!
//! # Per-frame stages
//!
//! 1. **Move**: horizontal velocity moves toward the target velocity by at
//!    most `acceleration * dt`, vertical velocity sticks to the ground or
//!    falls, one displacement is submitted to the body.
//! 2. **Look**: pitch on the camera, yaw on the body.
//! 3. **Camera**: holder height eases toward stand/crouch eye height, using
//!    the crouch state from the previous frame.
//! 4. **Crouch**: capsule shape, blocked by ceilings when standing up.
//! 5. **FOV**: eases toward a speed-dependent sprint FOV.
//!
//! # Physics Model
//!
//! - Walk speed: 4.0 m/s
//! - Sprint speed: 6.0 m/s
//! - Crouch speed: 2.0 m/s
//! - Acceleration: 15.0 m/s^2 (also used to stop)
//! - Gravity: 9.81 m/s^2 scaled by 3.0
//!
//! # Usage
//!
//! ```rust,ignore
//! use fps_locomotion_engine::player::{MovementController, MovementState};
//!
//! let controller = MovementController::new(config, &body, &rig);
//! let mut state = MovementState::default();
//!
//! // Each frame:
//! state = controller.update(state, &input, &mut body, &world, &mut rig, delta_time);
//!
//! // On jump press:
//! controller.try_jump(&mut state, &body);
//! ```

use glam::{Vec2, Vec3};
use log::debug;

use crate::camera::CameraRig;
use crate::config::MovementConfig;
use crate::input::MovementInput;
use crate::physics::{CharacterBody, GRAVITY, OverlapQuery};

/// Vertical velocity applied while grounded to keep the body pressed to the floor (m/s)
pub const GROUND_STICK_VELOCITY: f32 = -3.0;

/// Vertical velocity at or below which a grounded body counts as resting (m/s)
pub const GROUNDED_EPSILON: f32 = 0.01;

/// Minimum speed for the sprint flag to count as sprinting (m/s)
pub const SPRINT_SPEED_THRESHOLD: f32 = 0.1;

/// Squared length below which the move direction counts as no input
pub const MOVE_INPUT_DEADZONE: f32 = 0.01;

/// Per-frame movement state.
///
/// Passed into [`MovementController::update`] and returned updated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementState {
    /// Horizontal velocity in world space (y is always 0)
    pub horizontal_velocity: Vec3,
    /// Vertical velocity (positive = up)
    pub vertical_velocity: f32,
    /// Magnitude of the horizontal velocity after the last move
    pub current_speed: f32,
    /// Camera pitch in degrees (positive = looking down)
    pub pitch: f32,
    /// Whether the capsule is currently in its crouched shape
    pub is_crouching: bool,
}

impl MovementState {
    /// Full velocity submitted to the body (horizontal + vertical).
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        Vec3::new(
            self.horizontal_velocity.x,
            self.vertical_velocity,
            self.horizontal_velocity.z,
        )
    }
}

/// First-person movement controller.
///
/// Holds the configuration plus the body height and holder eye height
/// captured when the controller was created. Everything that changes per
/// frame lives in [`MovementState`], the body and the camera rig.
#[derive(Debug, Clone)]
pub struct MovementController {
    config: MovementConfig,
    /// Capsule height when standing
    normal_height: f32,
    /// Holder local y when standing
    camera_rest_y: f32,
}

impl MovementController {
    /// Create a controller, capturing the standing height of `body` and the
    /// standing eye height of `rig`.
    pub fn new<B: CharacterBody>(config: MovementConfig, body: &B, rig: &CameraRig) -> Self {
        Self {
            config,
            normal_height: body.height(),
            camera_rest_y: rig.holder_offset.y,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Get the captured standing capsule height.
    pub fn normal_height(&self) -> f32 {
        self.normal_height
    }

    /// Get the captured standing holder height.
    pub fn camera_rest_y(&self) -> f32 {
        self.camera_rest_y
    }

    /// Height difference between standing and crouching.
    #[inline]
    pub fn crouch_drop(&self) -> f32 {
        self.normal_height - self.config.crouch_height
    }

    /// Effective gravity (negative = down).
    #[inline]
    pub fn gravity(&self) -> f32 {
        GRAVITY * self.config.gravity_scale
    }

    /// Initial vertical velocity of a jump that peaks at `jump_height`.
    ///
    /// `sqrt(h * -2 * g)`: about 10.85 m/s with the defaults.
    #[inline]
    pub fn jump_velocity(&self) -> f32 {
        (self.config.jump_height * -2.0 * self.gravity()).max(0.0).sqrt()
    }

    /// Attempt to jump. Returns true if the jump was applied.
    ///
    /// Only a grounded body can jump; in the air this does nothing.
    pub fn try_jump<B: CharacterBody>(&self, state: &mut MovementState, body: &B) -> bool {
        if !body.is_grounded() {
            return false;
        }

        state.vertical_velocity = self.jump_velocity();
        debug!("jump: vertical velocity {:.2} m/s", state.vertical_velocity);
        true
    }

    /// Speed the body accelerates toward this frame.
    ///
    /// Follows the crouch input, not the capsule shape: a body kept crouched
    /// by a ceiling after release moves at walk or sprint speed.
    pub fn target_speed(&self, input: &MovementInput) -> f32 {
        if self.config.crouch_enabled && input.crouch {
            self.config.crouch_speed
        } else if input.sprint {
            self.config.sprint_speed
        } else {
            self.config.walk_speed
        }
    }

    /// Whether the sprint FOV applies (sprint held and actually moving).
    #[inline]
    pub fn is_sprinting(&self, state: &MovementState, input: &MovementInput) -> bool {
        input.sprint && state.current_speed > SPRINT_SPEED_THRESHOLD
    }

    /// Run one frame of movement.
    ///
    /// Negative or non-finite `dt` counts as 0. `dt` is only capped when
    /// `max_delta_time` is set. Returns the new state.
    pub fn update<B, W>(
        &self,
        mut state: MovementState,
        input: &MovementInput,
        body: &mut B,
        world: &W,
        rig: &mut CameraRig,
        dt: f32,
    ) -> MovementState
    where
        B: CharacterBody,
        W: OverlapQuery + ?Sized,
    {
        let dt = clamp_delta(dt, self.config.max_delta_time);

        self.move_update(&mut state, input, body, dt);
        self.look_update(&mut state, input.look_delta, body, rig);
        self.camera_height_update(&state, rig, dt);
        self.crouch_update(&mut state, input, body, world);
        self.fov_update(&state, input, rig, dt);

        state
    }

    fn move_update<B: CharacterBody>(
        &self,
        state: &mut MovementState,
        input: &MovementInput,
        body: &mut B,
        dt: f32,
    ) {
        let mut direction =
            body.forward() * input.move_axis.y + body.right() * input.move_axis.x;
        direction.y = 0.0;
        let direction = direction.normalize_or_zero();

        let target = if direction.length_squared() >= MOVE_INPUT_DEADZONE {
            direction * self.target_speed(input)
        } else {
            Vec3::ZERO
        };
        state.horizontal_velocity =
            move_towards(state.horizontal_velocity, target, self.config.acceleration * dt);

        // Grounded state is from the previous move
        if body.is_grounded() && state.vertical_velocity <= GROUNDED_EPSILON {
            state.vertical_velocity = GROUND_STICK_VELOCITY;
        } else {
            state.vertical_velocity += self.gravity() * dt;
        }

        body.move_by(state.velocity() * dt, dt);
        state.current_speed = state.horizontal_velocity.length();
    }

    fn look_update<B: CharacterBody>(
        &self,
        state: &mut MovementState,
        look_delta: Vec2,
        body: &mut B,
        rig: &mut CameraRig,
    ) {
        let look = look_delta * self.config.look_sensitivity;
        let limit = self.config.pitch_limit.abs();

        state.pitch = (state.pitch - look.y).clamp(-limit, limit);
        rig.set_pitch(state.pitch);

        body.rotate_yaw(look.x.to_radians());
    }

    fn crouch_update<B, W>(
        &self,
        state: &mut MovementState,
        input: &MovementInput,
        body: &mut B,
        world: &W,
    ) where
        B: CharacterBody,
        W: OverlapQuery + ?Sized,
    {
        if !self.config.crouch_enabled {
            return;
        }

        if input.crouch {
            if !state.is_crouching {
                debug!("crouch: height {:.2}", self.config.crouch_height);
            }
            state.is_crouching = true;
            body.set_shape(
                self.config.crouch_height,
                Vec3::new(0.0, -self.crouch_drop() * 0.5, 0.0),
            );
        } else if state.is_crouching {
            if self.ceiling_above(body, world) {
                return;
            }
            debug!("stand: height {:.2}", self.normal_height);
            state.is_crouching = false;
            body.set_shape(self.normal_height, Vec3::ZERO);
        }
    }

    /// Whether something on the ceiling layers blocks standing up.
    pub fn ceiling_above<B, W>(&self, body: &B, world: &W) -> bool
    where
        B: CharacterBody,
        W: OverlapQuery + ?Sized,
    {
        let probe = body.position() + Vec3::new(0.0, self.config.ceiling_probe_offset, 0.0);
        world.check_sphere(probe, body.radius(), self.config.ceiling_layers)
    }

    fn camera_height_update(&self, state: &MovementState, rig: &mut CameraRig, dt: f32) {
        let target_y = if state.is_crouching {
            self.camera_rest_y - self.crouch_drop()
        } else {
            self.camera_rest_y
        };

        let t = (self.config.camera_height_rate * dt).clamp(0.0, 1.0);
        rig.holder_offset.y = lerp(rig.holder_offset.y, target_y, t);
    }

    fn fov_update(&self, state: &MovementState, input: &MovementInput, rig: &mut CameraRig, dt: f32) {
        let target_fov = if self.is_sprinting(state, input) && !state.is_crouching {
            let speed_ratio = if self.config.sprint_speed > 0.0 {
                (state.current_speed / self.config.sprint_speed).clamp(0.0, 1.0)
            } else {
                1.0
            };
            lerp(self.config.normal_fov, self.config.sprint_fov, speed_ratio)
        } else {
            self.config.normal_fov
        };

        let t = (self.config.fov_smoothing * dt).clamp(0.0, 1.0);
        rig.fov = lerp(rig.fov, target_fov, t);
    }
}

/// Sanitize a frame delta: negative or non-finite becomes 0, then the
/// optional cap applies.
#[inline]
pub fn clamp_delta(dt: f32, max: Option<f32>) -> f32 {
    if !dt.is_finite() {
        return 0.0;
    }
    let dt = dt.max(0.0);
    match max {
        Some(max) => dt.min(max.max(0.0)),
        None => dt,
    }
}

/// Move `current` toward `target` by at most `max_delta`, without overshoot.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let diff = target - current;
    let distance = diff.length();

    if distance <= max_delta || distance <= f32::EPSILON {
        target
    } else {
        current + diff / distance * max_delta
    }
}

/// Linear interpolation between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
