//! Physics seams for the character controller
//!
//! The controller does not implement collision resolution. It talks to the
//! host through two traits:
//!
//! - [`CharacterBody`] - the capsule-style collision primitive that receives
//!   one displacement per frame and reports grounded state and velocity
//! - [`OverlapQuery`] - sphere overlap tests against layered world geometry
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, body yaw in radians.
//!
//! # Submodules
//!
//! - [`body`] - the body trait plus [`FlatGroundBody`], a capsule on a ground plane
//! - [`collision`] - the overlap trait plus [`CollisionWorld`], layered boxes

pub mod body;
pub mod collision;

pub use body::{
    CharacterBody, FlatGroundBody, MoveFlags, yaw_forward, yaw_right, yaw_rotation,
};
pub use collision::{
    Aabb, Collider, CollisionWorld, EmptyWorld, LayerMask, OverlapQuery, sphere_aabb_overlap,
};

/// Standard gravity along +Y in m/s^2 (negative: pulls down)
pub const GRAVITY: f32 = -9.81;
