use std::{
    collections::HashMap,
    sync::atomic::{AtomicU64, Ordering},
};

use parking_lot::Mutex;

use crate::{
    error::ApiError,
    models::session::{Session, SessionDefaults, SessionId},
};

/// In-memory sessions, one per user. Lost on restart.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, Session>>,
    next_id: AtomicU64,
    defaults: SessionDefaults,
}

impl SessionStore {
    pub fn new(defaults: SessionDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Creates a session and returns a snapshot of it.
    pub fn create(&self) -> Session {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let session = Session::new(id, self.defaults);
        self.sessions.lock().insert(id, session.clone());
        session
    }

    pub fn remove(&self, id: SessionId) -> Result<(), ApiError> {
        self.sessions
            .lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(ApiError::SessionNotFound(id))
    }

    /// Runs `f` against the session while holding the store lock.
    pub fn with_session<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Session) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let mut sessions = self.sessions.lock();
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
        f(session)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plant::PlantId;

    #[test]
    fn test_create_assigns_distinct_ids() {
        let store = SessionStore::default();
        let a = store.create();
        let b = store.create();
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::default();
        let a = store.create().id;
        let b = store.create().id;
        store
            .with_session(a, |s| {
                s.select(PlantId::Basil);
                s.edit_cell(0, 0)
            })
            .unwrap();
        let b_grid = store.with_session(b, |s| Ok(s.grid.clone())).unwrap();
        assert!(b_grid.planted().is_empty());
        let b_selection = store.with_session(b, |s| Ok(s.selection)).unwrap();
        assert_eq!(b_selection, PlantId::Tomato);
    }

    #[test]
    fn test_unknown_session_is_reported() {
        let store = SessionStore::default();
        assert!(matches!(
            store.with_session(42, |_| Ok(())),
            Err(ApiError::SessionNotFound(42))
        ));
        assert!(store.remove(42).is_err());
    }

    #[test]
    fn test_remove_drops_session() {
        let store = SessionStore::default();
        let id = store.create().id;
        store.remove(id).unwrap();
        assert!(store.is_empty());
    }
}
