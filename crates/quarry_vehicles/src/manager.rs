//! Live vehicle registry.
//!
//! Vehicles are kept in spawn order and only touched on the game thread.
//! Lookups are linear scans: the list is small and queried rarely compared
//! to the frame rate, so no index is maintained.

use std::sync::Arc;

use glam::Vec3;
use quarry_core::{GameThread, QuarrySettings};

use crate::item::ItemContainer;
use crate::vehicle::{InteractableVehicle, VehicleSpawn};

/// Finds the vehicle whose trunk is `trunk`, comparing containers by identity.
///
/// `None` input returns `None` without touching `vehicles`. Otherwise the
/// first match in iteration order is returned.
///
/// # Panics
///
/// Panics when not called on the thread bound to `thread`.
#[must_use]
pub fn find_vehicle_by_trunk<'a, I>(
    thread: &GameThread,
    vehicles: I,
    trunk: Option<&Arc<ItemContainer>>,
) -> Option<&'a Arc<InteractableVehicle>>
where
    I: IntoIterator<Item = &'a Arc<InteractableVehicle>>,
{
    thread.assert_current("find_vehicle_by_trunk");

    let trunk = trunk?;
    vehicles.into_iter().find(|vehicle| vehicle.owns_trunk(trunk))
}

#[derive(Debug)]
pub struct VehicleManager {
    thread: GameThread,
    vehicles: Vec<Arc<InteractableVehicle>>,
    next_instance_id: u32,
}

impl VehicleManager {
    #[must_use]
    pub fn new(thread: GameThread) -> Self {
        Self::with_settings(thread, &QuarrySettings::default())
    }

    #[must_use]
    pub fn with_settings(thread: GameThread, settings: &QuarrySettings) -> Self {
        Self {
            thread,
            vehicles: Vec::with_capacity(settings.vehicle_capacity),
            next_instance_id: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn thread(&self) -> &GameThread {
        &self.thread
    }

    /// Spawns a vehicle at the end of the registry.
    pub fn spawn(&mut self, spawn: VehicleSpawn) -> Arc<InteractableVehicle> {
        self.thread.assert_current("VehicleManager::spawn");

        let instance_id = self.next_instance_id;
        // Ids start at 1; 0 is never handed out, even after wrapping.
        self.next_instance_id = self.next_instance_id.wrapping_add(1).max(1);

        let vehicle = Arc::new(InteractableVehicle::new(instance_id, spawn));
        log::debug!(
            "Spawned vehicle {} ({:?}, asset {})",
            instance_id,
            vehicle.name(),
            vehicle.asset_id()
        );
        self.vehicles.push(Arc::clone(&vehicle));
        vehicle
    }

    /// Removes a vehicle, keeping the order of the others.
    pub fn despawn(&mut self, instance_id: u32) -> Option<Arc<InteractableVehicle>> {
        self.thread.assert_current("VehicleManager::despawn");

        let index = self
            .vehicles
            .iter()
            .position(|vehicle| vehicle.instance_id() == instance_id)?;
        let vehicle = self.vehicles.remove(index);
        log::debug!("Despawned vehicle {instance_id}");
        Some(vehicle)
    }

    #[must_use]
    pub fn get(&self, instance_id: u32) -> Option<&Arc<InteractableVehicle>> {
        self.vehicles
            .iter()
            .find(|vehicle| vehicle.instance_id() == instance_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<InteractableVehicle>> {
        self.vehicles.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Finds the vehicle owning `trunk`. See [`find_vehicle_by_trunk`].
    #[must_use]
    pub fn find_by_trunk(&self, trunk: Option<&Arc<ItemContainer>>) -> Option<&Arc<InteractableVehicle>> {
        find_vehicle_by_trunk(&self.thread, &self.vehicles, trunk)
    }

    /// Vehicles within `radius` of `center`, in registry order.
    #[must_use]
    pub fn vehicles_in_radius(&self, center: Vec3, radius: f32) -> Vec<Arc<InteractableVehicle>> {
        self.thread.assert_current("VehicleManager::vehicles_in_radius");

        let radius_sq = radius * radius;
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.position().distance_squared(center) <= radius_sq)
            .cloned()
            .collect()
    }
}
