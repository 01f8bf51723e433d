//! In-memory session store implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use dialogue_state::Session;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

struct UserEntry {
    /// Gate serializing the whole read-modify-write for one user.
    gate: Arc<Mutex<()>>,
    session: Option<Session>,
}

impl UserEntry {
    fn empty() -> Self {
        Self {
            gate: Arc::new(Mutex::new(())),
            session: None,
        }
    }
}

/// In-memory mapping from user identifier to session state.
///
/// Expired entries linger until the same user sends another message; no
/// background sweep runs. The map lock is only held for map operations,
/// never across remote I/O.
pub struct SessionStore {
    timeout: Duration,
    inner: RwLock<HashMap<String, UserEntry>>,
}

impl SessionStore {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Serialize processing for one user.
    ///
    /// The returned guard must be held across the full read-modify-write
    /// of a message. Different users proceed fully in parallel.
    pub async fn lock_user(&self, user_id: &str) -> OwnedMutexGuard<()> {
        let gate = {
            let mut inner = self.inner.write().await;
            inner
                .entry(user_id.to_string())
                .or_insert_with(UserEntry::empty)
                .gate
                .clone()
        };
        gate.lock_owned().await
    }

    /// Return the user's session, refreshing `last_seen`.
    ///
    /// An expired or absent session yields a freshly initialized one; the
    /// expired state is discarded.
    pub async fn get_or_create(&self, user_id: &str) -> Session {
        let mut inner = self.inner.write().await;
        let entry = inner
            .entry(user_id.to_string())
            .or_insert_with(UserEntry::empty);

        match entry.session.take() {
            Some(mut session) if !session.is_expired(self.timeout) => {
                session.touch();
                entry.session = Some(session.clone());
                session
            }
            existing => {
                if existing.is_some() {
                    tracing::info!(user_id, "session expired, resetting");
                }
                let session = Session::default();
                entry.session = Some(session.clone());
                session
            }
        }
    }

    /// Persist an in-place update.
    pub async fn save(&self, user_id: &str, session: Session) {
        let mut inner = self.inner.write().await;
        let entry = inner
            .entry(user_id.to_string())
            .or_insert_with(UserEntry::empty);
        entry.session = Some(session);
    }

    /// Delete a session unconditionally (exit path).
    ///
    /// The per-user gate survives the removal: a guard held across this
    /// call keeps excluding concurrent messages for the same user, and a
    /// later `lock_user` queues on the same gate instead of minting a
    /// fresh one. The emptied entry lingers like any other awaiting lazy
    /// cleanup.
    pub async fn remove(&self, user_id: &str) {
        let mut inner = self.inner.write().await;
        if let Some(entry) = inner.get_mut(user_id) {
            entry.session = None;
        }
    }

    /// Number of stored sessions, including those awaiting lazy expiry.
    /// Entries that only carry a gate are not counted.
    pub async fn len(&self) -> usize {
        self.inner
            .read()
            .await
            .values()
            .filter(|entry| entry.session.is_some())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
