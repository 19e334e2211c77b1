//! Quarry Net
//!
//! Declaration and lookup of remote-procedure-call handles.
//!
//! Each declaring type registers its RPC handles once at startup; callers
//! then locate a handle by declaring type, handle type and name:
//!
//! ```rust,ignore
//! struct VehicleManager;
//!
//! impl DeclaresRpcs for VehicleManager {
//!     fn declare_rpcs(registry: &RpcRegistry) -> Result<()> {
//!         registry.declare::<Self, ClientStaticMethod>("ReceiveVehicleLockState", Reliability::Reliable)?;
//!         Ok(())
//!     }
//! }
//!
//! registry.install::<VehicleManager>()?;
//! let rpc = registry.require::<VehicleManager, ClientStaticMethod>("ReceiveVehicleLockState")?;
//! ```

pub mod handle;
pub mod registry;

pub use handle::{
    ClientInstanceMethod, ClientStaticMethod, MethodId, MethodSignature, Reliability, RpcDirection,
    RpcHandle, RpcScope, ServerInstanceMethod, ServerStaticMethod,
};
pub use registry::{DeclaresRpcs, RpcRegistry};
