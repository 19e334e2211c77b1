//! Vertex-color sampling under a ray hit.
//!
//! Given a [`RayHit`] on a mesh collider, the sampler reads the mesh's
//! triangle and color buffers and blends the three vertex colors of the hit
//! triangle by the hit's barycentric weights.
//!
//! Buffers are copied into a [`MeshScratch`] that is reused between calls.
//! Every call clears and refills whatever it reads, so bounds checks never
//! see data left over from a previous mesh.

use quarry_core::color::{self, Color};
use quarry_core::{GameThread, QuarrySettings};

use crate::ray::RayHit;

/// Reusable triangle and color buffers for [`sample_vertex_color`].
#[derive(Debug, Default, Clone)]
pub struct MeshScratch {
    triangles: Vec<u32>,
    colors: Vec<Color>,
}

impl MeshScratch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn with_settings(settings: &QuarrySettings) -> Self {
        Self::with_capacity(settings.scratch_capacity)
    }

    /// Triangle indices copied by the most recent sample.
    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    /// Vertex colors copied by the most recent sample that got that far.
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Resolves the interpolated vertex color under `hit`.
///
/// Returns `None` when the collider has no mesh, the triangle index is out of
/// range, or a vertex of the triangle has no color. The color buffer is only
/// fetched once the triangle index has been validated.
///
/// # Panics
///
/// Panics when not called on the thread bound to `thread`.
pub fn sample_vertex_color(
    thread: &GameThread,
    hit: &RayHit,
    scratch: &mut MeshScratch,
) -> Option<Color> {
    thread.assert_current("sample_vertex_color");

    let Some(mesh) = hit.collider.shared_mesh() else {
        log::trace!("collider {:?} has no shared mesh", hit.collider.name);
        return None;
    };

    mesh.get_triangles(&mut scratch.triangles);

    let Ok(triangle) = usize::try_from(hit.triangle_index) else {
        return None;
    };
    let base = triangle.checked_mul(3)?;
    if base.checked_add(2)? >= scratch.triangles.len() {
        log::trace!(
            "triangle {} out of range for mesh {:?} ({} indices)",
            hit.triangle_index,
            mesh.name,
            scratch.triangles.len()
        );
        return None;
    }

    mesh.get_colors(&mut scratch.colors);

    let corner = |offset: usize| -> Option<Color> {
        let vertex = scratch.triangles[base + offset] as usize;
        scratch.colors.get(vertex).copied()
    };
    let (c1, c2, c3) = (corner(0)?, corner(1)?, corner(2)?);

    Some(color::blend_barycentric(c1, c2, c3, hit.barycentric))
}

/// Vertex-color sampler bound to the game thread, owning its scratch buffers.
#[derive(Debug)]
pub struct VertexColorSampler {
    thread: GameThread,
    scratch: MeshScratch,
}

impl VertexColorSampler {
    #[must_use]
    pub fn new(thread: GameThread) -> Self {
        Self {
            thread,
            scratch: MeshScratch::new(),
        }
    }

    #[must_use]
    pub fn with_settings(thread: GameThread, settings: &QuarrySettings) -> Self {
        Self {
            thread,
            scratch: MeshScratch::with_settings(settings),
        }
    }

    #[inline]
    #[must_use]
    pub fn thread(&self) -> &GameThread {
        &self.thread
    }

    #[inline]
    #[must_use]
    pub fn scratch(&self) -> &MeshScratch {
        &self.scratch
    }

    /// See [`sample_vertex_color`].
    pub fn sample(&mut self, hit: &RayHit) -> Option<Color> {
        sample_vertex_color(&self.thread, hit, &mut self.scratch)
    }

    /// Writes the color under `hit` to `out` and returns `true`, or writes
    /// [`Color::ZERO`] and returns `false` when no color can be resolved.
    pub fn try_sample(&mut self, hit: &RayHit, out: &mut Color) -> bool {
        match self.sample(hit) {
            Some(color) => {
                *out = color;
                true
            }
            None => {
                *out = Color::ZERO;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;
    use quarry_core::color::{BLUE, GREEN, RED};

    use super::*;
    use crate::collider::{Collider, ColliderShape, MeshCollider};
    use crate::mesh::Mesh;
    use crate::ray::NON_MESH_TRIANGLE;

    fn hit_on(collider: Collider, triangle_index: i32, barycentric: Vec3) -> RayHit {
        RayHit {
            collider: Arc::new(collider),
            point: Vec3::ZERO,
            normal: Vec3::Y,
            distance: 1.0,
            triangle_index,
            barycentric,
        }
    }

    fn mesh_collider(mesh: Mesh) -> Collider {
        Collider::new("mesh", ColliderShape::Mesh(MeshCollider::new(Arc::new(mesh))))
    }

    fn rgb_triangle() -> Mesh {
        Mesh::new("rgb")
            .with_triangles(vec![0, 1, 2])
            .with_colors(vec![RED, GREEN, BLUE])
    }

    #[test]
    fn test_corner_weights_pick_vertex_color() {
        let mut sampler = VertexColorSampler::new(GameThread::bind_current());
        let collider = mesh_collider(rgb_triangle());
        let hit = hit_on(collider, 0, Vec3::X);
        assert_eq!(sampler.sample(&hit), Some(RED));
    }

    #[test]
    fn test_try_sample_writes_zero_on_failure() {
        let mut sampler = VertexColorSampler::new(GameThread::bind_current());
        let hit = hit_on(
            Collider::new("ball", ColliderShape::Sphere { radius: 1.0 }),
            NON_MESH_TRIANGLE,
            Vec3::ZERO,
        );
        let mut out = RED;
        assert!(!sampler.try_sample(&hit, &mut out));
        assert_eq!(out, Color::ZERO);
    }

    #[test]
    fn test_colors_not_fetched_for_bad_triangle() {
        let mut scratch = MeshScratch::new();
        let thread = GameThread::bind_current();

        let good = hit_on(mesh_collider(rgb_triangle()), 0, Vec3::X);
        assert!(sample_vertex_color(&thread, &good, &mut scratch).is_some());

        let other = Mesh::new("other")
            .with_triangles(vec![0, 1, 2])
            .with_colors(vec![BLUE; 3]);
        let bad = hit_on(mesh_collider(other), 1, Vec3::X);
        assert!(sample_vertex_color(&thread, &bad, &mut scratch).is_none());

        // Triangles were refreshed, colors still hold the previous mesh.
        assert_eq!(scratch.triangles(), &[0, 1, 2]);
        assert_eq!(scratch.colors(), &[RED, GREEN, BLUE]);
    }

    #[test]
    fn test_wrong_thread_panics() {
        let mut sampler = VertexColorSampler::new(GameThread::bind_current());
        let hit = hit_on(mesh_collider(rgb_triangle()), 0, Vec3::X);
        let result = std::thread::spawn(move || sampler.sample(&hit)).join();
        assert!(result.is_err());
    }
}
