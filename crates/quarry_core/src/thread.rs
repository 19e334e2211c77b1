//! Game-thread affinity.
//!
//! The host engine only mutates meshes and the live vehicle list on its
//! game thread, so queries over them must run there too. Instead of a
//! process-wide "am I on the main thread" check, a [`GameThread`] token
//! is bound once on the game thread and captured by the types that need
//! it. Every guarded call asserts against the captured token.

use std::thread::{self, ThreadId};

/// Token identifying the thread allowed to run game-thread queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameThread {
    id: ThreadId,
    name: Option<String>,
}

impl GameThread {
    /// Binds the token to the calling thread.
    #[must_use]
    pub fn bind_current() -> Self {
        let current = thread::current();
        Self {
            id: current.id(),
            name: current.name().map(str::to_owned),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> ThreadId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if the calling thread is the bound game thread.
    #[inline]
    #[must_use]
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.id
    }

    /// Panics unless called from the bound game thread.
    ///
    /// A violation is a caller bug, not a recoverable condition.
    #[track_caller]
    pub fn assert_current(&self, operation: &str) {
        if !self.is_current() {
            let current = thread::current();
            panic!(
                "{operation} must run on the game thread ({:?} {:?}), called from {:?} {:?}",
                self.name,
                self.id,
                current.name(),
                current.id(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_thread_is_current() {
        let token = GameThread::bind_current();
        assert!(token.is_current());
        token.assert_current("test");
    }

    #[test]
    fn test_other_thread_is_not_current() {
        let token = GameThread::bind_current();
        let remote = token.clone();
        let is_current = thread::spawn(move || remote.is_current()).join().unwrap();
        assert!(!is_current);
    }

    #[test]
    fn test_assert_on_other_thread_panics() {
        let token = GameThread::bind_current();
        let result = thread::spawn(move || token.assert_current("remote query")).join();
        assert!(result.is_err());
    }

    #[test]
    fn test_name_is_captured() {
        let token = thread::Builder::new()
            .name("game".into())
            .spawn(GameThread::bind_current)
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(token.name(), Some("game"));
    }
}
