//! Survey: builds a tiny world and runs each Quarry query against it.
//!
//! Run with `RUST_LOG=debug` to see registry and vehicle events.

use std::sync::Arc;

use quarry::color::{BLUE, GREEN, RED, WHITE};
use quarry::prelude::*;
use quarry::{ClientStaticMethod, Item, ServerInstanceMethod};

struct VehicleNet;

impl DeclaresRpcs for VehicleNet {
    fn declare_rpcs(registry: &RpcRegistry) -> quarry::Result<()> {
        registry.declare::<Self, ClientStaticMethod>("ReceiveVehicleLockState", Reliability::Reliable)?;
        registry.declare::<Self, ServerInstanceMethod>("ReceiveEnterVehicleRequest", Reliability::Reliable)?;
        Ok(())
    }
}

fn ground() -> Mesh {
    Mesh::new("ground")
        .with_positions(vec![
            Vec3::new(-10.0, 0.0, -10.0),
            Vec3::new(10.0, 0.0, -10.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(-10.0, 0.0, 10.0),
        ])
        .with_triangles(vec![0, 1, 2, 0, 2, 3])
        .with_colors(vec![RED, GREEN, BLUE, WHITE])
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = QuarrySettings::default();
    let thread = GameThread::bind_current();

    // === 1. Vertex colors under a few downward raycasts ===
    let mut scene = PhysicsScene::new();
    scene.add(Collider::new(
        "ground",
        ColliderShape::Mesh(MeshCollider::new(Arc::new(ground()))),
    ));
    scene.add(
        Collider::new("boulder", ColliderShape::Sphere { radius: 1.5 })
            .with_transform(Affine3A::from_translation(Vec3::new(5.0, 0.0, 5.0))),
    );

    let mut sampler = VertexColorSampler::with_settings(thread.clone(), &settings);
    for (x, z) in [(-9.0, -9.0), (0.0, 0.0), (5.0, 5.0), (30.0, 0.0)] {
        let ray = Ray::new(Vec3::new(x, 50.0, z), Vec3::NEG_Y);
        match scene.raycast_vertex_color(&ray, 100.0, &mut sampler) {
            Some((hit, Some(color))) => {
                log::info!("({x}, {z}) hit {:?}, color {color}", hit.collider.name);
            }
            Some((hit, None)) => log::info!("({x}, {z}) hit {:?}, no vertex color", hit.collider.name),
            None => log::info!("({x}, {z}) hit nothing"),
        }
    }

    // === 2. RPC lookup ===
    let registry = RpcRegistry::with_settings(&settings);
    registry.install::<VehicleNet>()?;

    let lock_state = registry.require::<VehicleNet, ClientStaticMethod>("ReceiveVehicleLockState")?;
    log::info!("Resolved {}", lock_state.signature());

    if registry
        .find::<VehicleNet, ClientStaticMethod>("ReceiveEnterVehicleRequest")?
        .is_none()
    {
        log::info!("ReceiveEnterVehicleRequest is not a client RPC");
    }

    // === 3. Trunk lookup ===
    let mut vehicles = VehicleManager::with_settings(thread, &settings);
    vehicles.spawn(VehicleSpawn {
        asset_id: 1,
        name: "Quad".into(),
        ..Default::default()
    });
    let truck = vehicles.spawn(VehicleSpawn {
        asset_id: 40,
        name: "Truck".into(),
        position: Vec3::new(3.0, 0.0, 0.0),
        trunk_size: Some((6, 4)),
        trunk: None,
    });

    if let Some(trunk) = truck.trunk() {
        trunk.add(Item::new(15, 1, 100))?;
    }
    let opened = truck.trunk().cloned();
    match vehicles.find_by_trunk(opened.as_ref()) {
        Some(owner) => log::info!(
            "Trunk belongs to {:?} (#{}) holding {} items",
            owner.name(),
            owner.instance_id(),
            opened.as_ref().map_or(0, |trunk| trunk.len())
        ),
        None => log::info!("Trunk has no owner"),
    }

    Ok(())
}
