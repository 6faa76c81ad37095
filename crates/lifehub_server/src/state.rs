//! Shared server state.

use lifehub_core::Repository;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle to the single in-process repository, cloned into every
/// handler via `Router::with_state`.
///
/// The mutex serializes all store operations, so each request's
/// validate-mutate-respond sequence is atomic with respect to every
/// other request. No lock is ever held across an await point.
#[derive(Clone, Default)]
pub struct AppState {
    repo: Arc<Mutex<Repository>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the repository for one operation.
    ///
    /// A poisoned lock only means a handler panicked mid-request; the
    /// store itself is still a consistent map, so the guard is
    /// recovered rather than propagating the poison.
    pub fn repo(&self) -> MutexGuard<'_, Repository> {
        self.repo.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
