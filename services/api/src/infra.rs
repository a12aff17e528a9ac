use chrono::NaiveDate;
use hiring_desk::workflows::jobs::JobsTab;
use hiring_desk::workflows::posting::{SessionId, SessionRecord, SessionStore, SessionStoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

const DEFAULT_IDLE_LIMIT: Duration = Duration::from_secs(30 * 60);

#[derive(Clone)]
struct StoredSession {
    record: SessionRecord,
    touched: Instant,
}

/// Session map for a single process. Sessions untouched for `idle_limit` are dropped.
#[derive(Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, StoredSession>>>,
    idle_limit: Duration,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_idle_limit(DEFAULT_IDLE_LIMIT)
    }
}

impl InMemorySessionStore {
    pub(crate) fn with_idle_limit(idle_limit: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_limit,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, StoredSession>> {
        self.sessions.lock().expect("session mutex poisoned")
    }

    fn is_idle(&self, stored: &StoredSession) -> bool {
        stored.touched.elapsed() >= self.idle_limit
    }

    /// Live entry for `id`, dropping it first when it has gone idle.
    fn live<'a>(
        &self,
        guard: &'a mut HashMap<SessionId, StoredSession>,
        id: &SessionId,
    ) -> Option<&'a mut StoredSession> {
        if guard.get(id).is_some_and(|stored| self.is_idle(stored)) {
            guard.remove(id);
            debug!(session_id = %id.0, "idle posting session evicted");
        }
        guard.get_mut(id)
    }

    pub(crate) fn evict_idle(&self) -> usize {
        let mut guard = self.lock();
        let before = guard.len();
        guard.retain(|_, stored| !self.is_idle(stored));
        let evicted = before - guard.len();
        if evicted > 0 {
            debug!(evicted, "idle posting sessions evicted");
        }
        evicted
    }

    pub(crate) fn open_sessions(&self) -> usize {
        self.lock().len()
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, SessionStoreError> {
        self.evict_idle();
        let mut guard = self.lock();
        if guard.contains_key(&record.id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(
            record.id.clone(),
            StoredSession {
                record: record.clone(),
                touched: Instant::now(),
            },
        );
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), SessionStoreError> {
        let mut guard = self.lock();
        let stored = self
            .live(&mut guard, &record.id)
            .ok_or(SessionStoreError::NotFound)?;
        stored.record = record;
        stored.touched = Instant::now();
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        let mut guard = self.lock();
        Ok(self.live(&mut guard, id).map(|stored| {
            stored.touched = Instant::now();
            stored.record.clone()
        }))
    }

    fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.lock()
            .remove(id)
            .map(|_| ())
            .ok_or(SessionStoreError::NotFound)
    }

    fn modify<F, E>(&self, id: &SessionId, change: F) -> Result<SessionRecord, E>
    where
        F: FnOnce(&mut SessionRecord) -> Result<(), E>,
        E: From<SessionStoreError>,
    {
        let mut guard = self.lock();
        let stored = self
            .live(&mut guard, id)
            .ok_or(SessionStoreError::NotFound)?;
        let mut record = stored.record.clone();
        change(&mut record)?;
        stored.record = record.clone();
        stored.touched = Instant::now();
        Ok(record)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_tab(raw: &str) -> Result<JobsTab, String> {
    JobsTab::ordered()
        .into_iter()
        .find(|tab| tab.label().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| format!("unknown jobs tab '{raw}' (expected active, drafts, or closed)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hiring_desk::workflows::posting::{
        FieldUpdate, JobPostingWizard, WizardSettings, WorkLocation,
    };

    fn record(id: &str) -> SessionRecord {
        let opened_on = NaiveDate::from_ymd_opt(2025, 12, 21).expect("valid date");
        SessionRecord {
            id: SessionId(id.to_string()),
            wizard: JobPostingWizard::new(WizardSettings::new(opened_on)),
        }
    }

    #[test]
    fn idle_sessions_are_dropped_on_the_next_insert() {
        let store = InMemorySessionStore::with_idle_limit(Duration::ZERO);
        store.insert(record("posting-a")).expect("first insert");
        store.insert(record("posting-b")).expect("second insert");

        assert_eq!(store.open_sessions(), 1);
        assert!(matches!(
            store.fetch(&SessionId("posting-b".to_string())),
            Ok(None)
        ));
        assert_eq!(store.open_sessions(), 0);
    }

    #[test]
    fn active_sessions_survive_and_modify_persists_changes() {
        let store = InMemorySessionStore::default();
        store.insert(record("posting-a")).expect("first insert");
        store.insert(record("posting-b")).expect("second insert");
        let id = SessionId("posting-a".to_string());

        let changed: Result<SessionRecord, SessionStoreError> = store.modify(&id, |record| {
            record
                .wizard
                .update_field(FieldUpdate::ToggleWorkLocation(WorkLocation::Onsite));
            Ok(())
        });
        changed.expect("modify applies");

        assert_eq!(store.evict_idle(), 0);
        assert_eq!(store.open_sessions(), 2);
        let stored = store.fetch(&id).expect("store up").expect("session kept");
        assert!(stored
            .wizard
            .draft()
            .work_location
            .contains(&WorkLocation::Onsite));
    }

    #[test]
    fn parse_helpers_accept_cli_spellings() {
        assert_eq!(
            parse_date(" 2026-03-21 "),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 21).expect("valid date"))
        );
        assert!(parse_date("03/21/2026").is_err());
        assert_eq!(parse_tab("Closed"), Ok(JobsTab::Closed));
        assert!(parse_tab("archived").is_err());
    }
}
