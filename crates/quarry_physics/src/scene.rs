//! Nearest-hit raycasts over a set of colliders.

use std::sync::Arc;

use quarry_core::Color;

use crate::collider::Collider;
use crate::ray::{NON_MESH_TRIANGLE, Ray, RayHit};
use crate::sampler::VertexColorSampler;

#[derive(Debug, Default)]
pub struct PhysicsScene {
    colliders: Vec<Arc<Collider>>,
}

impl PhysicsScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, collider: Collider) -> Arc<Collider> {
        let collider = Arc::new(collider);
        self.colliders.push(Arc::clone(&collider));
        collider
    }

    /// Removes `collider` (compared by identity). Returns `false` if it was not in the scene.
    pub fn remove(&mut self, collider: &Arc<Collider>) -> bool {
        let before = self.colliders.len();
        self.colliders.retain(|c| !Arc::ptr_eq(c, collider));
        self.colliders.len() != before
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Collider>> {
        self.colliders.iter()
    }

    /// Casts `ray`, returning the nearest hit within `max_distance`.
    #[must_use]
    pub fn raycast(&self, ray: &Ray, max_distance: f32) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;

        for collider in &self.colliders {
            let Some(hit) = collider.intersect(ray.origin, ray.direction) else {
                continue;
            };
            if hit.t > max_distance || best.as_ref().is_some_and(|b| b.distance <= hit.t) {
                continue;
            }

            let (triangle_index, barycentric) = match hit.triangle {
                Some((index, weights)) => (i32::try_from(index).unwrap_or(i32::MAX), weights),
                None => (NON_MESH_TRIANGLE, glam::Vec3::ZERO),
            };
            best = Some(RayHit {
                collider: Arc::clone(collider),
                point: ray.at(hit.t),
                normal: hit.normal,
                distance: hit.t,
                triangle_index,
                barycentric,
            });
        }
        best
    }

    /// Casts `ray` and samples the vertex color under the nearest hit.
    ///
    /// Returns the hit even when no color could be resolved for it.
    pub fn raycast_vertex_color(
        &self,
        ray: &Ray,
        max_distance: f32,
        sampler: &mut VertexColorSampler,
    ) -> Option<(RayHit, Option<Color>)> {
        let hit = self.raycast(ray, max_distance)?;
        let color = sampler.sample(&hit);
        Some((hit, color))
    }
}
