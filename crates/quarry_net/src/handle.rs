//! RPC handle types.
//!
//! A handle is the caller-side reference to a declared remote procedure.
//! Handle types differ by direction (which side receives the call) and by
//! scope (static, or bound to a networked object instance). All of them
//! wrap a [`MethodSignature`].

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Numeric id assigned to an RPC when it is declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodId(pub u32);

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Reliability {
    #[default]
    Reliable,
    Unreliable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RpcDirection {
    /// Invoked by the server, executed on clients.
    ToClient,
    /// Invoked by a client, executed on the server.
    ToServer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RpcScope {
    Static,
    Instance,
}

/// Identity and delivery settings of a declared RPC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodSignature {
    pub declaring_type: &'static str,
    pub name: Arc<str>,
    pub id: MethodId,
    pub reliability: Reliability,
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} {}", self.declaring_type, self.name, self.id)
    }
}

/// A typed RPC handle.
pub trait RpcHandle: Any + Clone + Send + Sync {
    const DIRECTION: RpcDirection;
    const SCOPE: RpcScope;

    fn from_signature(signature: MethodSignature) -> Self;

    fn signature(&self) -> &MethodSignature;

    #[inline]
    fn name(&self) -> &str {
        &self.signature().name
    }

    #[inline]
    fn id(&self) -> MethodId {
        self.signature().id
    }
}

macro_rules! rpc_handle {
    ($(#[$meta:meta])* $name:ident, $direction:expr, $scope:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            signature: MethodSignature,
        }

        impl RpcHandle for $name {
            const DIRECTION: RpcDirection = $direction;
            const SCOPE: RpcScope = $scope;

            #[inline]
            fn from_signature(signature: MethodSignature) -> Self {
                Self { signature }
            }

            #[inline]
            fn signature(&self) -> &MethodSignature {
                &self.signature
            }
        }
    };
}

rpc_handle!(
    /// Server-to-client call not tied to an object.
    ClientStaticMethod,
    RpcDirection::ToClient,
    RpcScope::Static
);
rpc_handle!(
    /// Server-to-client call on a networked object.
    ClientInstanceMethod,
    RpcDirection::ToClient,
    RpcScope::Instance
);
rpc_handle!(
    /// Client-to-server call not tied to an object.
    ServerStaticMethod,
    RpcDirection::ToServer,
    RpcScope::Static
);
rpc_handle!(
    /// Client-to-server call on a networked object.
    ServerInstanceMethod,
    RpcDirection::ToServer,
    RpcScope::Instance
);
