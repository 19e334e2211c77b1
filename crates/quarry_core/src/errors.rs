//! Error Types
//!
//! This module defines the error types used throughout Quarry.
//!
//! # Overview
//!
//! [`QuarryError`] covers recoverable failures only:
//! - Caller usage errors (an empty RPC name)
//! - RPC declaration and lookup failures
//! - A full item container
//!
//! Lookup misses that callers are expected to handle (no vertex color, no
//! vehicle for a trunk) are `Option`s, not errors. Calling a game-thread
//! query from the wrong thread is a panic, see [`GameThread`](crate::GameThread).
//!
//! # Usage
//!
//! ```rust,ignore
//! use quarry_core::errors::{QuarryError, Result};
//!
//! fn lookup() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for Quarry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuarryError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    /// An RPC name was empty or contained only whitespace.
    #[error("RPC name must not be empty or whitespace")]
    InvalidRpcName,

    // ========================================================================
    // RPC Errors
    // ========================================================================
    /// A required RPC handle was not declared, or was declared with another handle type.
    #[error("RPC not found: {declaring_type}.{name} ({handle_type})")]
    RpcNotFound {
        /// Name of the declaring type searched
        declaring_type: &'static str,
        /// Name of the handle type expected
        handle_type: &'static str,
        /// The member name looked up
        name: String,
    },

    /// An RPC with this name was already declared on the declaring type.
    #[error("RPC already declared: {declaring_type}.{name}")]
    DuplicateRpc {
        /// Name of the declaring type
        declaring_type: &'static str,
        /// The member name declared twice
        name: String,
    },

    // ========================================================================
    // Item Container Errors
    // ========================================================================
    /// Every slot on the page is already taken.
    #[error("Item container on page {page} has no room for the item")]
    ContainerFull {
        /// Inventory page of the container
        page: u8,
    },
}

/// Alias for `Result<T, QuarryError>`.
pub type Result<T> = std::result::Result<T, QuarryError>;
