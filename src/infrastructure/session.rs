//! Server-side session store
//!
//! Every browser session owns a full copy of the library dataset. Entries are
//! only stored once a request writes to them (a login, a flash or a catalog
//! change); until then reads see the seeded sample dataset.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use sha2::{Digest, Sha512};
use tower_cookies::Key;

use crate::domain::Library;
use crate::infrastructure::seed::demo_library;
use crate::models::CurrentUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot message shown on the next rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SessionData {
    pub user: Option<CurrentUser>,
    pub flashes: Vec<Flash>,
    pub library: Library,
    last_seen: DateTime<Utc>,
}

impl SessionData {
    fn fresh() -> Self {
        Self {
            user: None,
            flashes: Vec::new(),
            library: demo_library(),
            last_seen: Utc::now(),
        }
    }
}

/// Cookie signing key for a secret of any length. `Key` wants 64 bytes of
/// material, which SHA-512 of the secret provides.
pub fn cookie_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

pub struct SessionStore {
    ttl: Duration,
    sessions: DashMap<String, SessionData>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: DashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Id for a session that has not been stored yet
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    /// Mark a session as seen. Returns false when it is unknown or has
    /// expired; expired sessions are dropped.
    pub fn resume(&self, id: &str) -> bool {
        let now = Utc::now();
        let expired = match self.sessions.get_mut(id) {
            Some(mut data) => {
                if now - data.last_seen > self.ttl {
                    true
                } else {
                    data.last_seen = now;
                    return true;
                }
            }
            None => return false,
        };

        if expired {
            self.sessions.remove(id);
            tracing::debug!("Session {} expired", id);
        }
        false
    }

    /// Run `f` against a session's data, storing a seeded session first if
    /// the id is not known yet.
    pub fn write<R>(&self, id: &str, f: impl FnOnce(&mut SessionData) -> R) -> R {
        let mut entry = self.sessions.entry(id.to_string()).or_insert_with(|| {
            tracing::debug!("Created session {}", id);
            SessionData::fresh()
        });
        f(entry.value_mut())
    }

    /// Read a session's data. Unknown ids read the seed without storing it.
    pub fn read<R>(&self, id: &str, f: impl FnOnce(&SessionData) -> R) -> R {
        match self.sessions.get(id) {
            Some(data) => f(data.value()),
            None => f(&SessionData::fresh()),
        }
    }

    /// Drain pending flashes of a stored session
    pub fn take_flashes(&self, id: &str) -> Vec<Flash> {
        self.sessions
            .get_mut(id)
            .map(|mut data| std::mem::take(&mut data.flashes))
            .unwrap_or_default()
    }

    /// Drop every session idle for longer than the TTL
    pub fn purge_expired(&self) -> usize {
        let Some(cutoff) = Utc::now().checked_sub_signed(self.ttl) else {
            return 0;
        };
        let before = self.sessions.len();
        self.sessions.retain(|_, data| data.last_seen >= cutoff);
        before.saturating_sub(self.sessions.len())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    #[cfg(test)]
    fn backdate(&self, id: &str, by: Duration) {
        if let Some(mut data) = self.sessions.get_mut(id) {
            data.last_seen = data.last_seen - by;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::hours(1))
    }

    // Store a session the way a login would
    fn stored(store: &SessionStore) -> String {
        let id = SessionStore::new_id();
        store.write(&id, |_| ());
        id
    }

    #[test]
    fn test_reads_do_not_store_sessions() {
        let store = store();
        let id = SessionStore::new_id();

        let (books, user) = store.read(&id, |data| (data.library.books.len(), data.user.clone()));
        assert_eq!(books, 15);
        assert!(user.is_none());
        assert!(store.take_flashes(&id).is_empty());
        assert!(store.is_empty());
        assert!(!store.resume(&id));
    }

    #[test]
    fn test_first_write_stores_seeded_session() {
        let store = store();
        let id = SessionStore::new_id();

        store.write(&id, |data| {
            data.flashes.push(Flash {
                kind: FlashKind::Success,
                message: "hi".into(),
            })
        });

        assert!(store.contains(&id));
        assert_eq!(store.read(&id, |d| d.library.books.len()), 15);
        assert_eq!(store.take_flashes(&id).len(), 1);
        assert!(store.take_flashes(&id).is_empty());
    }

    #[test]
    fn test_sessions_do_not_share_data() {
        let store = store();
        let a = stored(&store);
        let b = stored(&store);

        store.write(&a, |data| data.library.books.clear());

        assert_eq!(store.read(&a, |d| d.library.books.len()), 0);
        assert_eq!(store.read(&b, |d| d.library.books.len()), 15);
    }

    #[test]
    fn test_expired_session_is_not_resumed() {
        let store = store();
        let id = stored(&store);
        assert!(store.resume(&id));

        store.backdate(&id, Duration::hours(2));

        assert!(!store.resume(&id));
        assert!(store.is_empty());
        assert!(!store.resume("unknown"));
    }

    #[test]
    fn test_purge_expired() {
        let store = store();
        let stale = stored(&store);
        let live = stored(&store);
        store.backdate(&stale, Duration::hours(3));

        assert_eq!(store.purge_expired(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.resume(&live));
    }

    #[test]
    fn test_purge_with_ttl_beyond_calendar_keeps_sessions() {
        let store = SessionStore::new(Duration::MAX);
        stored(&store);

        assert_eq!(store.purge_expired(), 0);
        assert_eq!(store.len(), 1);
    }
}
