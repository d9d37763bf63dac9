//! Overlap queries
//!
//! The movement controller never resolves collisions itself. It only asks the
//! world one question: "does a sphere at this point touch anything on these
//! layers?". That question is the [`OverlapQuery`] trait.
//!
//! [`CollisionWorld`] is a small reference implementation backed by layered
//! axis-aligned boxes, good enough for tests and the sandbox host.
//!
//! # Example
//!
//! ```ignore
//! use fps_locomotion_engine::physics::{Aabb, CollisionWorld, LayerMask, OverlapQuery};
//! use glam::Vec3;
//!
//! let mut world = CollisionWorld::new();
//! world.add(Aabb::new(Vec3::new(-2.0, 1.6, -2.0), Vec3::new(2.0, 2.0, 2.0)), LayerMask::CEILING);
//!
//! if world.check_sphere(Vec3::new(0.0, 1.5, 0.0), 0.5, LayerMask::CEILING) {
//!     // Something is overhead
//! }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Bit set of collision layers, one bit per layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: LayerMask = LayerMask(0);
    /// Layer 0: regular static geometry.
    pub const DEFAULT: LayerMask = LayerMask(1);
    /// Layer 1: low ceilings and overhangs that block standing up.
    pub const CEILING: LayerMask = LayerMask(1 << 1);
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing only the given layer index (0..32).
    pub fn layer(index: u32) -> Self {
        LayerMask(1u32.checked_shl(index).unwrap_or(0))
    }

    /// Whether the two masks share at least one layer.
    #[inline]
    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Whether this mask has no layers set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = LayerMask;

    fn bitor(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 | rhs.0)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners (order does not matter).
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a box from its center and half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Point of the box closest to `point`.
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Whether `point` is inside the box (surface included).
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Sphere-vs-AABB overlap test.
///
/// Clamps the sphere center onto the box and compares the squared distance
/// to the squared radius. Touching counts as overlapping.
pub fn sphere_aabb_overlap(center: Vec3, radius: f32, aabb: &Aabb) -> bool {
    let closest = aabb.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// World overlap queries used by the movement controller.
pub trait OverlapQuery {
    /// Returns `true` if a sphere at `center` with `radius` overlaps any
    /// collider on one of the `layers`.
    fn check_sphere(&self, center: Vec3, radius: f32, layers: LayerMask) -> bool;
}

/// A world with nothing in it. Every query reports clear.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyWorld;

impl OverlapQuery for EmptyWorld {
    fn check_sphere(&self, _center: Vec3, _radius: f32, _layers: LayerMask) -> bool {
        false
    }
}

/// A single collider: a box living on some layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub bounds: Aabb,
    pub layers: LayerMask,
}

/// Flat list of layered box colliders.
///
/// Queries are linear in the number of colliders, which is fine for the
/// handful of boxes a test scene or the sandbox contains.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    colliders: Vec<Collider>,
}

impl CollisionWorld {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a box on the given layers and returns its index.
    pub fn add(&mut self, bounds: Aabb, layers: LayerMask) -> usize {
        self.colliders.push(Collider { bounds, layers });
        self.colliders.len() - 1
    }

    /// Removes the collider at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<Collider> {
        (index < self.colliders.len()).then(|| self.colliders.remove(index))
    }

    /// Number of colliders.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the world has no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Iterates over all colliders.
    pub fn colliders(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }
}

impl OverlapQuery for CollisionWorld {
    fn check_sphere(&self, center: Vec3, radius: f32, layers: LayerMask) -> bool {
        self.colliders
            .iter()
            .filter(|c| c.layers.intersects(layers))
            .any(|c| sphere_aabb_overlap(center, radius, &c.bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn test_aabb_new_orders_corners() {
        let aabb = Aabb::new(Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_sphere_inside_box_overlaps() {
        assert!(sphere_aabb_overlap(Vec3::ZERO, 0.1, &unit_box()));
    }

    #[test]
    fn test_sphere_touching_face_overlaps() {
        // Center 1.5 above the top face, radius exactly reaches it
        assert!(sphere_aabb_overlap(Vec3::new(0.0, 1.5, 0.0), 0.5, &unit_box()));
        assert!(!sphere_aabb_overlap(Vec3::new(0.0, 1.51, 0.0), 0.5, &unit_box()));
    }

    #[test]
    fn test_sphere_near_corner_uses_true_distance() {
        // Distance to the corner (1,1,1) from (1.4,1.4,1.4) is ~0.69
        let center = Vec3::splat(1.4);
        assert!(!sphere_aabb_overlap(center, 0.6, &unit_box()));
        assert!(sphere_aabb_overlap(center, 0.7, &unit_box()));
    }

    #[test]
    fn test_layer_mask_filtering() {
        let mut world = CollisionWorld::new();
        world.add(unit_box(), LayerMask::DEFAULT);

        assert!(world.check_sphere(Vec3::ZERO, 0.5, LayerMask::DEFAULT));
        assert!(!world.check_sphere(Vec3::ZERO, 0.5, LayerMask::CEILING));
        assert!(world.check_sphere(Vec3::ZERO, 0.5, LayerMask::ALL));
        assert!(!world.check_sphere(Vec3::ZERO, 0.5, LayerMask::NONE));
    }

    #[test]
    fn test_layer_helpers() {
        assert_eq!(LayerMask::layer(1), LayerMask::CEILING);
        assert_eq!(LayerMask::layer(40), LayerMask::NONE);
        assert!((LayerMask::DEFAULT | LayerMask::CEILING).intersects(LayerMask::CEILING));
        assert!(LayerMask::NONE.is_empty());
    }

    #[test]
    fn test_remove_collider() {
        let mut world = CollisionWorld::new();
        let id = world.add(unit_box(), LayerMask::CEILING);
        assert_eq!(world.len(), 1);

        assert!(world.remove(id).is_some());
        assert!(world.is_empty());
        assert!(world.remove(id).is_none());
        assert!(!world.check_sphere(Vec3::ZERO, 0.5, LayerMask::ALL));
    }

    #[test]
    fn test_empty_world_is_always_clear() {
        assert!(!EmptyWorld.check_sphere(Vec3::ZERO, 100.0, LayerMask::ALL));
    }
}
