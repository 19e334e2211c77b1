//! # Quarry
//!
//! Game-thread query helpers for a game server:
//!
//! - **Vertex-color raycasts**: blend the vertex colors under a mesh hit
//!   ([`VertexColorSampler`], [`PhysicsScene::raycast_vertex_color`])
//! - **RPC lookup**: find a declared RPC handle by declaring type, handle
//!   type and name ([`RpcRegistry`])
//! - **Trunk lookup**: find the vehicle that owns a trunk container
//!   ([`VehicleManager::find_by_trunk`])
//!
//! The sampler and the vehicle registry capture a [`GameThread`] token when
//! built and panic if used from any other thread.
//!
//! ```rust,ignore
//! use quarry::prelude::*;
//!
//! let thread = GameThread::bind_current();
//! let mut vehicles = VehicleManager::new(thread.clone());
//! let truck = vehicles.spawn(VehicleSpawn {
//!     name: "Truck".into(),
//!     trunk_size: Some((6, 4)),
//!     ..Default::default()
//! });
//!
//! let trunk = truck.trunk().cloned();
//! assert!(vehicles.find_by_trunk(trunk.as_ref()).is_some());
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub use quarry_net as net;
pub use quarry_physics as physics;
pub use quarry_vehicles as vehicles;

pub use quarry_core::{Color, GameThread, QuarryError, QuarrySettings, Result, color};
pub use quarry_net::{
    ClientInstanceMethod, ClientStaticMethod, DeclaresRpcs, MethodId, MethodSignature, Reliability,
    RpcHandle, RpcRegistry, ServerInstanceMethod, ServerStaticMethod,
};
pub use quarry_physics::{
    Collider, ColliderShape, Mesh, MeshCollider, MeshScratch, PhysicsScene, Ray, RayHit,
    VertexColorSampler, sample_vertex_color,
};
pub use quarry_vehicles::{
    InteractableVehicle, Item, ItemContainer, VehicleManager, VehicleSpawn,
    find_vehicle_by_trunk,
};

pub mod prelude {
    pub use crate::{
        Collider, ColliderShape, Color, DeclaresRpcs, GameThread, InteractableVehicle,
        ItemContainer, Mesh, MeshCollider, PhysicsScene, QuarryError, QuarrySettings, Ray, RayHit,
        Reliability, RpcHandle, RpcRegistry, VehicleManager, VehicleSpawn, VertexColorSampler,
    };
    pub use glam::{Affine3A, Vec3, Vec4};
}
