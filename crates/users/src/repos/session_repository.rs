//! The current-user session marker.

use docdesk_store::{Latency, Store, StoreResult};

use crate::entities::User;

/// Storage key holding the current session's user.
pub const SESSION_KEY: &str = "docdesk_current_user";

/// Repository for the at-most-one current session.
///
/// The marker holds a full [`User`] record; an absent marker means
/// unauthenticated. Reads are synchronous — session lookup is consulted on
/// every guarded operation and never pays the simulated round-trip.
#[derive(Clone)]
pub struct SessionRepository {
    store: Store,
}

impl SessionRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The latency switch shared with the underlying store.
    pub fn store_latency(&self) -> Latency {
        self.store.latency()
    }

    /// The currently authenticated user, if any.
    pub fn current(&self) -> StoreResult<Option<User>> {
        self.store.get_record(SESSION_KEY)
    }

    /// Persist `user` as the current session.
    pub fn set(&self, user: &User) -> StoreResult<()> {
        self.store.put_record(SESSION_KEY, user)
    }

    /// Clear the session marker. Clearing an absent marker is not an error.
    pub fn clear(&self) -> StoreResult<()> {
        self.store.delete_record(SESSION_KEY)
    }
}
