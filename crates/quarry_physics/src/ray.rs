//! Rays and ray-hit records.

use std::sync::Arc;

use glam::Vec3;

use crate::collider::Collider;

/// Triangle index reported for hits on shapes that are not meshes.
pub const NON_MESH_TRIANGLE: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit-length direction.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Where and what a ray intersected.
///
/// For mesh colliders `triangle_index` names the hit triangle and
/// `barycentric` holds the weights of its three vertices, in index-buffer
/// order. Other shapes report [`NON_MESH_TRIANGLE`] and a zero coordinate.
#[derive(Clone, Debug)]
pub struct RayHit {
    pub collider: Arc<Collider>,
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
    pub triangle_index: i32,
    pub barycentric: Vec3,
}

impl RayHit {
    #[inline]
    #[must_use]
    pub fn is_mesh_hit(&self) -> bool {
        self.triangle_index >= 0
    }
}
