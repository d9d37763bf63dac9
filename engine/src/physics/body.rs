//! Character body (collision primitive)
//!
//! The controller drives a capsule-style character body through the
//! [`CharacterBody`] trait: one displacement per frame, plus shape changes for
//! crouching. The body resolves the move and reports back whether it is
//! grounded and the velocity it actually achieved.
//!
//! Orientation is a single yaw angle in radians. Yaw 0 looks toward -Z and
//! increasing yaw turns right (clockwise seen from above).
//!
//! [`FlatGroundBody`] is the reference implementation: a capsule standing on
//! an infinite horizontal plane.

use glam::{Quat, Vec3};

/// Which sides of the body touched something during the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveFlags {
    /// The bottom of the capsule hit the ground
    pub below: bool,
    /// The top of the capsule hit a ceiling
    pub above: bool,
    /// The capsule was blocked horizontally
    pub sides: bool,
}

impl MoveFlags {
    /// No contact at all.
    pub const NONE: MoveFlags = MoveFlags {
        below: false,
        above: false,
        sides: false,
    };

    /// Whether any contact happened.
    pub fn any(&self) -> bool {
        self.below || self.above || self.sides
    }
}

/// Rotation for a yaw angle (radians) around +Y.
#[inline]
pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_y(-yaw)
}

/// Horizontal forward vector for a yaw angle (radians).
#[inline]
pub fn yaw_forward(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Horizontal right vector for a yaw angle (radians).
#[inline]
pub fn yaw_right(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, yaw.sin())
}

/// Host collision primitive driven by the movement controller.
pub trait CharacterBody {
    /// World position of the body transform.
    fn position(&self) -> Vec3;

    /// Yaw angle in radians (unbounded).
    fn yaw(&self) -> f32;

    /// Rotates the body around +Y by `delta` radians.
    fn rotate_yaw(&mut self, delta: f32);

    /// Velocity the body actually moved with during the last move.
    fn velocity(&self) -> Vec3;

    /// Whether the last move ended touching the ground.
    fn is_grounded(&self) -> bool;

    /// Capsule radius.
    fn radius(&self) -> f32;

    /// Capsule height.
    fn height(&self) -> f32;

    /// Capsule center offset, relative to the body position.
    fn center(&self) -> Vec3;

    /// Changes the capsule height and center offset.
    fn set_shape(&mut self, height: f32, center: Vec3);

    /// Moves the body by `displacement`, resolving collisions.
    ///
    /// `dt` is the frame time the displacement covers; the body uses it to
    /// report [`velocity`](CharacterBody::velocity).
    fn move_by(&mut self, displacement: Vec3, dt: f32) -> MoveFlags;

    /// World rotation of the body.
    fn rotation(&self) -> Quat {
        yaw_rotation(self.yaw())
    }

    /// Horizontal forward direction.
    fn forward(&self) -> Vec3 {
        yaw_forward(self.yaw())
    }

    /// Horizontal right direction.
    fn right(&self) -> Vec3 {
        yaw_right(self.yaw())
    }
}

/// Default capsule height in meters
pub const DEFAULT_HEIGHT: f32 = 2.0;

/// Default capsule radius in meters
pub const DEFAULT_RADIUS: f32 = 0.5;

/// Capsule body standing on an infinite horizontal plane.
///
/// The capsule bottom is `position.y + center.y - height / 2`. Any move that
/// would push the bottom below the plane is clamped onto it and reports
/// [`MoveFlags::below`]. There are no walls.
#[derive(Debug, Clone)]
pub struct FlatGroundBody {
    position: Vec3,
    yaw: f32,
    height: f32,
    radius: f32,
    center: Vec3,
    ground_height: f32,
    velocity: Vec3,
    grounded: bool,
}

impl Default for FlatGroundBody {
    fn default() -> Self {
        Self::standing_at(Vec3::ZERO, 0.0)
    }
}

impl FlatGroundBody {
    /// Creates a default-sized body whose capsule bottom rests on a ground
    /// plane at `ground_height`, directly above `xz`.
    pub fn standing_at(xz: Vec3, ground_height: f32) -> Self {
        Self {
            position: Vec3::new(xz.x, ground_height + DEFAULT_HEIGHT * 0.5, xz.z),
            yaw: 0.0,
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
            center: Vec3::ZERO,
            ground_height,
            velocity: Vec3::ZERO,
            grounded: false,
        }
    }

    /// Creates a body at an arbitrary position (possibly in the air).
    pub fn with_position(position: Vec3, ground_height: f32) -> Self {
        Self {
            position,
            ..Self::standing_at(position, ground_height)
        }
    }

    /// Overrides capsule dimensions.
    pub fn with_dimensions(mut self, height: f32, radius: f32) -> Self {
        self.height = height;
        self.radius = radius;
        self
    }

    /// Y coordinate of the ground plane.
    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }

    /// Y coordinate of the capsule bottom.
    pub fn bottom(&self) -> f32 {
        self.position.y + self.center.y - self.height * 0.5
    }

    /// Teleports the body; clears velocity and contact state.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.grounded = false;
    }

    /// Sets the yaw angle directly (radians).
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }
}

impl CharacterBody for FlatGroundBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn rotate_yaw(&mut self, delta: f32) {
        self.yaw += delta;
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn set_shape(&mut self, height: f32, center: Vec3) {
        self.height = height;
        self.center = center;
    }

    fn move_by(&mut self, displacement: Vec3, dt: f32) -> MoveFlags {
        let start = self.position;
        let mut target = start + displacement;
        let mut flags = MoveFlags::NONE;

        let bottom = target.y + self.center.y - self.height * 0.5;
        if bottom <= self.ground_height {
            target.y += self.ground_height - bottom;
            flags.below = true;
        }

        self.position = target;
        self.grounded = flags.below;
        self.velocity = if dt > 0.0 {
            (target - start) / dt
        } else {
            Vec3::ZERO
        };

        flags
    }
}
