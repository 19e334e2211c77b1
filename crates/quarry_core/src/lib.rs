//! Quarry Core
//!
//! Foundational types shared by every Quarry crate:
//!
//! - [`errors`]: the [`QuarryError`] enum and [`Result`] alias
//! - [`thread`]: the [`GameThread`] affinity token
//! - [`settings`]: [`QuarrySettings`] configuration
//! - [`color`]: the linear RGBA [`Color`] type

pub mod color;
pub mod errors;
pub mod settings;
pub mod thread;

pub use color::Color;
pub use errors::{QuarryError, Result};
pub use settings::QuarrySettings;
pub use thread::GameThread;
