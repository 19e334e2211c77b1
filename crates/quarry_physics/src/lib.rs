//! Quarry Physics
//!
//! Collision shapes, raycasts and the vertex-color sampler.
//!
//! - [`Mesh`]: vertex positions, triangle indices and per-vertex colors
//! - [`Collider`]: a shape placed in the world by an affine transform
//! - [`PhysicsScene`]: nearest-hit raycasts over a set of colliders
//! - [`VertexColorSampler`]: blends the vertex colors under a mesh hit
//!
//! ```rust,ignore
//! let thread = GameThread::bind_current();
//! let mut sampler = VertexColorSampler::new(thread);
//!
//! if let Some(hit) = scene.raycast(&Ray::new(origin, Vec3::NEG_Y), 100.0) {
//!     if let Some(color) = sampler.sample(&hit) {
//!         log::info!("ground color {color}");
//!     }
//! }
//! ```

pub mod collider;
pub mod intersect;
pub mod mesh;
pub mod ray;
pub mod sampler;
pub mod scene;

pub use collider::{Collider, ColliderShape, MeshCollider};
pub use mesh::Mesh;
pub use ray::{NON_MESH_TRIANGLE, Ray, RayHit};
pub use sampler::{MeshScratch, VertexColorSampler, sample_vertex_color};
pub use scene::PhysicsScene;
