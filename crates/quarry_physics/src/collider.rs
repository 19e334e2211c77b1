//! Collision shapes placed in the world.

use std::sync::Arc;

use glam::{Affine3A, Vec3};

use crate::intersect::{self, LocalHit};
use crate::mesh::Mesh;

/// Physics approximation of a render mesh.
///
/// `shared_mesh` may be unset while a collider is being built or after its
/// mesh was unloaded; such a collider is never hit.
#[derive(Debug, Clone, Default)]
pub struct MeshCollider {
    pub shared_mesh: Option<Arc<Mesh>>,
}

impl MeshCollider {
    #[must_use]
    pub fn new(mesh: Arc<Mesh>) -> Self {
        Self {
            shared_mesh: Some(mesh),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ColliderShape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
    /// Y-aligned capsule; `height` includes both hemispherical caps.
    Capsule { radius: f32, height: f32 },
    Mesh(MeshCollider),
}

/// A shape in local space plus its local-to-world transform.
#[derive(Debug, Clone)]
pub struct Collider {
    pub name: String,
    pub transform: Affine3A,
    pub shape: ColliderShape,
}

impl Collider {
    #[must_use]
    pub fn new(name: impl Into<String>, shape: ColliderShape) -> Self {
        Self {
            name: name.into(),
            transform: Affine3A::IDENTITY,
            shape,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Affine3A) -> Self {
        self.transform = transform;
        self
    }

    #[inline]
    #[must_use]
    pub fn as_mesh_collider(&self) -> Option<&MeshCollider> {
        match &self.shape {
            ColliderShape::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// The mesh backing this collider, if it is a mesh collider with a mesh assigned.
    #[inline]
    #[must_use]
    pub fn shared_mesh(&self) -> Option<&Arc<Mesh>> {
        self.as_mesh_collider()?.shared_mesh.as_ref()
    }

    /// Intersects a world-space ray with this collider.
    ///
    /// The ray is moved into local space without renormalizing its
    /// direction, so the returned `t` is valid for the world-space ray. The
    /// normal is returned in world space.
    #[must_use]
    pub fn intersect(&self, origin: Vec3, dir: Vec3) -> Option<LocalHit> {
        let to_local = self.transform.inverse();
        let local_origin = to_local.transform_point3(origin);
        let local_dir = to_local.transform_vector3(dir);

        let mut hit = match &self.shape {
            ColliderShape::Sphere { radius } => {
                intersect::ray_sphere(local_origin, local_dir, Vec3::ZERO, *radius)
            }
            ColliderShape::Box { half_extents } => {
                intersect::ray_box(local_origin, local_dir, *half_extents)
            }
            ColliderShape::Capsule { radius, height } => {
                intersect::ray_capsule(local_origin, local_dir, *radius, *height)
            }
            ColliderShape::Mesh(mesh_collider) => {
                let mesh = mesh_collider.shared_mesh.as_deref()?;
                intersect::ray_mesh(local_origin, local_dir, mesh)
            }
        }?;

        // Normals transform by the inverse transpose.
        hit.normal = to_local
            .matrix3
            .transpose()
            .mul_vec3(hit.normal)
            .normalize_or_zero();
        Some(hit)
    }
}
