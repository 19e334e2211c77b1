//! Quarry Settings
//!
//! Tunables shared by the registries and samplers.
//!
//! ```rust,ignore
//! use quarry_core::QuarrySettings;
//!
//! let settings = QuarrySettings {
//!     report_rpc_misses: false,
//!     ..Default::default()
//! };
//! let registry = RpcRegistry::with_settings(&settings);
//! ```

/// Configuration consumed by `RpcRegistry`, `MeshScratch` and `VehicleManager`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarrySettings {
    /// Emit a warning when an RPC lookup misses.
    ///
    /// A miss usually means the RPC was declared under the wrong name or
    /// handle type, so this is on by default.
    pub report_rpc_misses: bool,

    /// Initial capacity reserved for each mesh scratch buffer.
    pub scratch_capacity: usize,

    /// Initial capacity reserved for the live vehicle list.
    pub vehicle_capacity: usize,
}

impl Default for QuarrySettings {
    fn default() -> Self {
        Self {
            report_rpc_misses: true,
            scratch_capacity: 64,
            vehicle_capacity: 32,
        }
    }
}
