use serde::{Deserialize, Serialize};

use super::wizard::JobPostingWizard;

/// Identifier wrapper for open posting sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: SessionId,
    pub wizard: JobPostingWizard,
}

/// Storage abstraction for live wizard sessions so the service can be exercised in isolation.
pub trait SessionStore: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, SessionStoreError>;
    fn update(&self, record: SessionRecord) -> Result<(), SessionStoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError>;
    fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError>;

    /// Load, change and persist one session as a single step.
    ///
    /// The record is written back only when `change` succeeds. The provided
    /// body is a plain fetch then update; stores that can hold a lock across
    /// both should override it so concurrent commands cannot drop each other.
    fn modify<F, E>(&self, id: &SessionId, change: F) -> Result<SessionRecord, E>
    where
        Self: Sized,
        F: FnOnce(&mut SessionRecord) -> Result<(), E>,
        E: From<SessionStoreError>,
    {
        let mut record = self.fetch(id)?.ok_or(SessionStoreError::NotFound)?;
        change(&mut record)?;
        self.update(record.clone())?;
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
