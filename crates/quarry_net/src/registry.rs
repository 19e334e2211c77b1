//! RPC registry.
//!
//! Maps `(declaring type, name)` to a declared handle. Declaring types
//! populate the registry once at startup through [`DeclaresRpcs`]; lookups
//! afterwards are two hash-map lookups under a read lock.

use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

use parking_lot::RwLock;
use quarry_core::{QuarryError, QuarrySettings, Result};
use rustc_hash::FxHashMap;

use crate::handle::{MethodId, MethodSignature, Reliability, RpcHandle};

/// Implemented by types that declare RPCs.
pub trait DeclaresRpcs: 'static {
    fn declare_rpcs(registry: &RpcRegistry) -> Result<()>;
}

struct DeclaredRpc {
    handle: Arc<dyn Any + Send + Sync>,
    handle_type: &'static str,
}

struct DeclaringTable {
    type_name: &'static str,
    entries: FxHashMap<Box<str>, DeclaredRpc>,
}

#[derive(Default)]
struct RegistryInner {
    tables: FxHashMap<TypeId, DeclaringTable>,
    /// Declarations in the order they were made, for rolling back an install.
    journal: Vec<(TypeId, Box<str>)>,
    next_id: u32,
}

/// Registry state before an install, see [`RpcRegistry::install`].
#[derive(Clone, Copy)]
struct Checkpoint {
    journal_len: usize,
    next_id: u32,
}

impl RegistryInner {
    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            journal_len: self.journal.len(),
            next_id: self.next_id,
        }
    }

    fn rollback(&mut self, checkpoint: Checkpoint) -> usize {
        let undone = self.journal.split_off(checkpoint.journal_len);
        for (type_id, name) in &undone {
            if let Some(table) = self.tables.get_mut(type_id) {
                table.entries.remove(name);
                if table.entries.is_empty() {
                    self.tables.remove(type_id);
                }
            }
        }
        self.next_id = checkpoint.next_id;
        undone.len()
    }
}

pub struct RpcRegistry {
    inner: RwLock<RegistryInner>,
    report_misses: bool,
}

impl Default for RpcRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(QuarryError::InvalidRpcName);
    }
    Ok(())
}

impl RpcRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(&QuarrySettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: &QuarrySettings) -> Self {
        Self {
            inner: RwLock::default(),
            report_misses: settings.report_rpc_misses,
        }
    }

    /// Runs `D`'s declarations against this registry.
    ///
    /// All or nothing: if any declaration fails, every RPC declared since the
    /// install started is removed again and method ids are reset, so the
    /// registry is left as it was before the call.
    pub fn install<D: DeclaresRpcs>(&self) -> Result<()> {
        let checkpoint = self.inner.read().checkpoint();
        if let Err(err) = D::declare_rpcs(self) {
            let undone = self.inner.write().rollback(checkpoint);
            log::warn!(
                "Installing RPCs from {} failed ({err}), rolled back {undone} declarations",
                type_name::<D>()
            );
            return Err(err);
        }
        log::debug!(
            "Installed {} RPCs from {}",
            self.declared_names::<D>().len(),
            type_name::<D>()
        );
        Ok(())
    }

    /// Declares an RPC named `name` on `D` and returns its handle.
    ///
    /// Method ids are assigned in declaration order across the registry.
    pub fn declare<D: 'static, H: RpcHandle>(&self, name: &str, reliability: Reliability) -> Result<H> {
        validate_name(name)?;

        let mut inner = self.inner.write();
        let id = MethodId(inner.next_id);
        let table = inner
            .tables
            .entry(TypeId::of::<D>())
            .or_insert_with(|| DeclaringTable {
                type_name: type_name::<D>(),
                entries: FxHashMap::default(),
            });

        if table.entries.contains_key(name) {
            return Err(QuarryError::DuplicateRpc {
                declaring_type: table.type_name,
                name: name.to_owned(),
            });
        }

        let handle = H::from_signature(MethodSignature {
            declaring_type: table.type_name,
            name: Arc::from(name),
            id,
            reliability,
        });
        table.entries.insert(
            Box::from(name),
            DeclaredRpc {
                handle: Arc::new(handle.clone()),
                handle_type: type_name::<H>(),
            },
        );
        inner.journal.push((TypeId::of::<D>(), Box::from(name)));
        inner.next_id = inner.next_id.wrapping_add(1);

        log::trace!("Declared RPC {}.{} {} ({})", type_name::<D>(), name, id, type_name::<H>());
        Ok(handle)
    }

    /// Looks up the handle of type `H` named `name` on `D`.
    ///
    /// A blank name is a usage error. A missing handle, or one declared with
    /// another handle type, is `Ok(None)` and is reported as a warning.
    pub fn find<D: 'static, H: RpcHandle>(&self, name: &str) -> Result<Option<H>> {
        validate_name(name)?;

        let found = {
            let inner = self.inner.read();
            inner
                .tables
                .get(&TypeId::of::<D>())
                .and_then(|table| table.entries.get(name))
                .and_then(|declared| declared.handle.downcast_ref::<H>().cloned())
        };

        if found.is_none() && self.report_misses {
            log::warn!(
                "Unable to find RPC {}.{} of type {}",
                type_name::<D>(),
                name,
                type_name::<H>()
            );
        }
        Ok(found)
    }

    /// Like [`find`](Self::find), but a miss is [`QuarryError::RpcNotFound`].
    pub fn require<D: 'static, H: RpcHandle>(&self, name: &str) -> Result<H> {
        self.find::<D, H>(name)?.ok_or_else(|| QuarryError::RpcNotFound {
            declaring_type: type_name::<D>(),
            handle_type: type_name::<H>(),
            name: name.to_owned(),
        })
    }

    /// Returns `true` if `D` declares an RPC named `name`, of any handle type.
    #[must_use]
    pub fn contains<D: 'static>(&self, name: &str) -> bool {
        self.inner
            .read()
            .tables
            .get(&TypeId::of::<D>())
            .is_some_and(|table| table.entries.contains_key(name))
    }

    /// Handle type name of the RPC `name` on `D`, if declared.
    #[must_use]
    pub fn handle_type_of<D: 'static>(&self, name: &str) -> Option<&'static str> {
        let inner = self.inner.read();
        let table = inner.tables.get(&TypeId::of::<D>())?;
        table.entries.get(name).map(|declared| declared.handle_type)
    }

    /// Names of the RPCs declared on `D`, sorted.
    #[must_use]
    pub fn declared_names<D: 'static>(&self) -> Vec<String> {
        let inner = self.inner.read();
        let mut names: Vec<String> = inner
            .tables
            .get(&TypeId::of::<D>())
            .map(|table| table.entries.keys().map(ToString::to_string).collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Total number of declared RPCs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().tables.values().map(|t| t.entries.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::{ClientInstanceMethod, ClientStaticMethod, ServerInstanceMethod};

    struct Player;
    struct Barricade;

    impl DeclaresRpcs for Player {
        fn declare_rpcs(registry: &RpcRegistry) -> Result<()> {
            registry.declare::<Self, ClientStaticMethod>("ReceiveChat", Reliability::Reliable)?;
            registry.declare::<Self, ClientInstanceMethod>("ReceivePosition", Reliability::Unreliable)?;
            registry.declare::<Self, ServerInstanceMethod>("ReceiveInput", Reliability::Unreliable)?;
            Ok(())
        }
    }

    fn registry() -> RpcRegistry {
        let _ = env_logger::builder().is_test(true).try_init();
        let registry = RpcRegistry::new();
        registry.install::<Player>().unwrap();
        registry
    }

    #[test]
    fn test_find_declared() {
        let registry = registry();
        let handle = registry
            .find::<Player, ClientStaticMethod>("ReceiveChat")
            .unwrap()
            .unwrap();
        assert_eq!(handle.name(), "ReceiveChat");
        assert_eq!(handle.id(), MethodId(0));
        assert!(handle.signature().declaring_type.ends_with("Player"));
    }

    #[test]
    fn test_ids_follow_declaration_order() {
        let registry = registry();
        let input = registry.require::<Player, ServerInstanceMethod>("ReceiveInput").unwrap();
        assert_eq!(input.id(), MethodId(2));
        assert_eq!(input.signature().reliability, Reliability::Unreliable);
    }

    #[test]
    fn test_blank_name_is_usage_error() {
        let registry = registry();
        assert_eq!(
            registry.find::<Player, ClientStaticMethod>(""),
            Err(QuarryError::InvalidRpcName)
        );
        assert_eq!(
            registry.require::<Player, ClientStaticMethod>("  \t"),
            Err(QuarryError::InvalidRpcName)
        );
        assert_eq!(
            registry.declare::<Player, ClientStaticMethod>(" ", Reliability::Reliable),
            Err(QuarryError::InvalidRpcName)
        );
    }

    #[test]
    fn test_wrong_handle_type_is_a_miss() {
        let registry = registry();
        assert_eq!(registry.find::<Player, ClientInstanceMethod>("ReceiveChat"), Ok(None));
        assert_eq!(
            registry.handle_type_of::<Player>("ReceiveChat"),
            Some(type_name::<ClientStaticMethod>())
        );
    }

    #[test]
    fn test_wrong_declaring_type_is_a_miss() {
        let registry = registry();
        assert_eq!(registry.find::<Barricade, ClientStaticMethod>("ReceiveChat"), Ok(None));
        assert!(!registry.contains::<Barricade>("ReceiveChat"));
    }

    #[test]
    fn test_require_reports_all_identifiers() {
        let registry = registry();
        let err = registry
            .require::<Barricade, ClientStaticMethod>("ReceiveHealth")
            .unwrap_err();
        assert_eq!(
            err,
            QuarryError::RpcNotFound {
                declaring_type: type_name::<Barricade>(),
                handle_type: type_name::<ClientStaticMethod>(),
                name: "ReceiveHealth".to_owned(),
            }
        );
    }

    #[test]
    fn test_duplicate_declaration_fails() {
        let registry = registry();
        let err = registry
            .declare::<Player, ClientInstanceMethod>("ReceiveChat", Reliability::Reliable)
            .unwrap_err();
        assert!(matches!(err, QuarryError::DuplicateRpc { ref name, .. } if name == "ReceiveChat"));
        assert_eq!(registry.len(), 3);
    }

    struct Door;

    impl DeclaresRpcs for Door {
        fn declare_rpcs(registry: &RpcRegistry) -> Result<()> {
            registry.declare::<Self, ClientInstanceMethod>("ReceiveOpen", Reliability::Reliable)?;
            registry.declare::<Self, ClientInstanceMethod>("ReceiveLock", Reliability::Reliable)?;
            registry.declare::<Self, ClientInstanceMethod>("ReceiveHinge", Reliability::Reliable)?;
            Ok(())
        }
    }

    #[test]
    fn test_failed_install_leaves_registry_unchanged() {
        let registry = registry();
        registry
            .declare::<Door, ClientStaticMethod>("ReceiveLock", Reliability::Reliable)
            .unwrap();
        let before = registry.len();

        let err = registry.install::<Door>().unwrap_err();
        assert!(matches!(err, QuarryError::DuplicateRpc { ref name, .. } if name == "ReceiveLock"));
        assert!(!registry.contains::<Door>("ReceiveOpen"));
        assert_eq!(registry.len(), before);
        assert_eq!(registry.declared_names::<Door>(), vec!["ReceiveLock"]);

        // Retrying fails on the same declaration, not on leftovers.
        let err = registry.install::<Door>().unwrap_err();
        assert!(matches!(err, QuarryError::DuplicateRpc { ref name, .. } if name == "ReceiveLock"));
    }

    #[test]
    fn test_ids_reused_after_rollback() {
        let registry = registry();
        registry
            .declare::<Door, ClientStaticMethod>("ReceiveHinge", Reliability::Reliable)
            .unwrap();
        let next = registry
            .declare::<Barricade, ClientStaticMethod>("ReceiveSalvage", Reliability::Reliable)
            .unwrap()
            .id();

        assert!(registry.install::<Door>().is_err());
        let after = registry
            .declare::<Barricade, ClientStaticMethod>("ReceiveRepair", Reliability::Reliable)
            .unwrap();
        assert_eq!(after.id(), MethodId(next.0 + 1));
    }

    #[test]
    fn test_install_after_clearing_conflict() {
        let registry = registry();
        registry.install::<Door>().unwrap();
        assert_eq!(
            registry.declared_names::<Door>(),
            vec!["ReceiveHinge", "ReceiveLock", "ReceiveOpen"]
        );
        assert!(registry.contains::<Door>("ReceiveOpen"));
    }

    #[test]
    fn test_same_name_on_two_types() {
        let registry = registry();
        registry
            .declare::<Barricade, ClientStaticMethod>("ReceiveChat", Reliability::Reliable)
            .unwrap();
        let player = registry.require::<Player, ClientStaticMethod>("ReceiveChat").unwrap();
        let barricade = registry.require::<Barricade, ClientStaticMethod>("ReceiveChat").unwrap();
        assert_ne!(player.id(), barricade.id());
    }

    #[test]
    fn test_declared_names_sorted() {
        let registry = registry();
        assert_eq!(
            registry.declared_names::<Player>(),
            vec!["ReceiveChat", "ReceiveInput", "ReceivePosition"]
        );
        assert!(registry.declared_names::<Barricade>().is_empty());
    }
}
