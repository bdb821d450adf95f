use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::Blackboard;

/// A blackboard handed out by name and shared by every agent that asks for it.
///
/// The mutex is the external synchronization needed when agents sharing a board tick on
/// different threads. Keep the guard for the shortest possible span.
pub type SharedBlackboard = Arc<Mutex<Blackboard>>;

/// Lock a shared blackboard, recovering a poisoned lock.
pub fn lock_blackboard(shared: &SharedBlackboard) -> MutexGuard<'_, Blackboard> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Named blackboards, created lazily on first access and never evicted.
///
/// Use [`BlackboardRegistry::global`] for the process-wide instance, or construct one per test
/// scope for isolation.
#[derive(Debug, Default)]
pub struct BlackboardRegistry {
    boards: Mutex<BTreeMap<String, SharedBlackboard>>,
}

impl BlackboardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry; starts empty and lives until exit.
    pub fn global() -> &'static BlackboardRegistry {
        static GLOBAL: OnceLock<BlackboardRegistry> = OnceLock::new();
        GLOBAL.get_or_init(BlackboardRegistry::new)
    }

    pub fn get_or_create(&self, name: &str) -> SharedBlackboard {
        let mut boards = self.boards.lock().unwrap_or_else(PoisonError::into_inner);
        boards
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(name, "creating shared blackboard");
                Arc::new(Mutex::new(Blackboard::new()))
            })
            .clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.boards
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.boards
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shortcut for `BlackboardRegistry::global().get_or_create(name)`.
pub fn shared_blackboard(name: &str) -> SharedBlackboard {
    BlackboardRegistry::global().get_or_create(name)
}
