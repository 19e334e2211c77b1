//! Spawned vehicles.

use std::sync::Arc;

use glam::Vec3;
use parking_lot::RwLock;

use crate::item::ItemContainer;

/// Inventory page used for vehicle trunk storage.
pub const TRUNK_PAGE: u8 = 7;

/// Parameters for spawning a vehicle.
#[derive(Clone, Debug, Default)]
pub struct VehicleSpawn {
    pub asset_id: u16,
    pub name: String,
    pub position: Vec3,
    /// Trunk grid size; `None` for vehicles without storage.
    pub trunk_size: Option<(u8, u8)>,
    /// Existing container to use as the trunk. Takes precedence over `trunk_size`.
    pub trunk: Option<Arc<ItemContainer>>,
}

/// A live vehicle.
#[derive(Debug)]
pub struct InteractableVehicle {
    instance_id: u32,
    asset_id: u16,
    name: String,
    position: RwLock<Vec3>,
    trunk: Option<Arc<ItemContainer>>,
}

impl InteractableVehicle {
    pub(crate) fn new(instance_id: u32, spawn: VehicleSpawn) -> Self {
        let trunk = spawn.trunk.or_else(|| {
            spawn
                .trunk_size
                .map(|(width, height)| Arc::new(ItemContainer::new(TRUNK_PAGE, width, height)))
        });
        Self {
            instance_id,
            asset_id: spawn.asset_id,
            name: spawn.name,
            position: RwLock::new(spawn.position),
            trunk,
        }
    }

    #[inline]
    #[must_use]
    pub fn instance_id(&self) -> u32 {
        self.instance_id
    }

    #[inline]
    #[must_use]
    pub fn asset_id(&self) -> u16 {
        self.asset_id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        *self.position.read()
    }

    pub fn set_position(&self, position: Vec3) {
        *self.position.write() = position;
    }

    /// Trunk storage, if this vehicle has any.
    #[inline]
    #[must_use]
    pub fn trunk(&self) -> Option<&Arc<ItemContainer>> {
        self.trunk.as_ref()
    }

    /// Returns `true` if `container` is this vehicle's trunk (same instance).
    #[must_use]
    pub fn owns_trunk(&self, container: &Arc<ItemContainer>) -> bool {
        self.trunk.as_ref().is_some_and(|trunk| Arc::ptr_eq(trunk, container))
    }
}
