use crate::error::GameError;
use crate::session::Session;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::RwLock;

pub type SessionId = String;

/// Manages live sessions and their lifecycles.
///
/// The outer map lock is held only for lookup, insertion, and removal;
/// every mutation of a session happens under that session's own lock.
/// Rounds on one session therefore serialize while unrelated sessions
/// proceed in parallel.
///
/// Expiry is a two-step handshake: the `expired` flag is set under the
/// session lock before the map entry goes away, so a caller that cloned
/// the Arc just before removal still observes the terminal state and
/// fails with SessionNotFound instead of mutating a ghost.
#[derive(Default)]
pub struct Lobby {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
}

impl Lobby {
    /// Opens a fresh session with default difficulty and returns its id.
    pub async fn open(&self) -> SessionId {
        let id = uuid::Uuid::new_v4().to_string();
        let session = Arc::new(Mutex::new(Session::new(id.clone())));
        self.sessions.write().await.insert(id.clone(), session);
        log::info!("opened session {}", id);
        id
    }

    /// Sole mutation entry point. Locks the session named by `id`, runs
    /// `f` with exclusive access, and returns its result. Fails with
    /// SessionNotFound when the id is absent or the session reached its
    /// terminal state while we waited on the lock.
    pub async fn with<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, GameError> {
        let session = self
            .sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(GameError::SessionNotFound)?;
        let mut session = session.lock().await;
        match session.expired() {
            true => Err(GameError::SessionNotFound),
            false => Ok(f(&mut session)),
        }
    }

    /// Explicitly deletes a session.
    pub async fn close(&self, id: &str) -> Result<(), GameError> {
        let session = self
            .sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(GameError::SessionNotFound)?;
        session.lock().await.expire();
        self.sessions.write().await.remove(id);
        log::info!("closed session {}", id);
        Ok(())
    }

    /// Expires sessions idle past `ttl` and frees their entries.
    /// Each candidate is examined under its own lock, so a session
    /// mid-mutation is only measured after that mutation's touch.
    pub async fn sweep(&self, ttl: Duration) {
        let sessions = self.sessions.read().await.clone();
        let mut stale = Vec::new();
        for (id, session) in sessions {
            let mut session = session.lock().await;
            if !session.expired() && session.idle() > ttl {
                session.expire();
                stale.push(id);
            }
        }
        if !stale.is_empty() {
            let mut map = self.sessions.write().await;
            for id in &stale {
                map.remove(id);
            }
            log::info!("swept {} idle sessions", stale.len());
        }
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
