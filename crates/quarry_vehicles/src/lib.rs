//! Quarry Vehicles
//!
//! The live vehicle registry and the item containers vehicles carry as
//! trunk storage.
//!
//! - [`ItemContainer`]: a paged grid of item jars
//! - [`InteractableVehicle`]: a spawned vehicle and its optional trunk
//! - [`VehicleManager`]: spawn order registry with trunk and radius queries

pub mod item;
pub mod manager;
pub mod vehicle;

pub use item::{Item, ItemContainer};
pub use manager::{VehicleManager, find_vehicle_by_trunk};
pub use vehicle::{InteractableVehicle, TRUNK_PAGE, VehicleSpawn};
