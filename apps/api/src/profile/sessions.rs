//! Session-keyed profile repository.
//!
//! Each registration creates a fresh session id; re-registering replaces the
//! whole profile (last write wins). Idle sessions expire after a configurable
//! timeout. Handlers only see the `ProfileRepository` trait, carried in
//! `AppState` as a trait object so the in-memory store can be swapped for an
//! external one.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::profile::UserProfile;
use crate::riasec;

/// A registered profile with its derived code and access bookkeeping.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveSession {
    pub user_id: Uuid,
    pub profile: UserProfile,
    pub riasec_code: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Stores the profile under a fresh session id, deriving and caching the
    /// user's RIASEC code.
    async fn create(&self, profile: UserProfile) -> ActiveSession;

    /// Loads a session and touches its `last_accessed`. Expired sessions are
    /// dropped and reported as absent.
    async fn get(&self, user_id: Uuid) -> Option<ActiveSession>;

    /// Removes a session. Returns false when it was already gone.
    async fn remove(&self, user_id: Uuid) -> bool;

    /// Drops every session idle past the timeout. Returns how many went.
    async fn purge_expired(&self) -> usize;

    async fn active_count(&self) -> usize;

    async fn session_ids(&self) -> Vec<Uuid>;
}

pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, ActiveSession>>,
    timeout: Duration,
}

impl InMemorySessionStore {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            timeout: Duration::seconds(timeout_secs as i64),
        }
    }

    fn is_expired(&self, session: &ActiveSession, now: DateTime<Utc>) -> bool {
        now - session.last_accessed > self.timeout
    }
}

#[async_trait]
impl ProfileRepository for InMemorySessionStore {
    async fn create(&self, profile: UserProfile) -> ActiveSession {
        let now = Utc::now();
        let session = ActiveSession {
            user_id: Uuid::new_v4(),
            riasec_code: riasec::derive_code(&profile.riasec_scores),
            profile,
            created_at: now,
            last_accessed: now,
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.user_id, session.clone());
        info!(
            "New user session created: {}, RIASEC: {}",
            session.user_id, session.riasec_code
        );
        session
    }

    async fn get(&self, user_id: Uuid) -> Option<ActiveSession> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&user_id) {
            Some(session) if !self.is_expired(session, now) => {
                session.last_accessed = now;
                Some(session.clone())
            }
            Some(_) => {
                sessions.remove(&user_id);
                debug!("Session {user_id} expired on access");
                None
            }
            None => None,
        }
    }

    async fn remove(&self, user_id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&user_id).is_some();
        if removed {
            info!("User session deleted: {user_id}");
        }
        removed
    }

    async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_accessed <= self.timeout);
        let purged = before - sessions.len();
        if purged > 0 {
            info!("Cleaned up {purged} expired sessions");
        }
        purged
    }

    async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn session_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self.sessions.read().await.keys().copied().collect();
        ids.sort();
        ids
    }
}
