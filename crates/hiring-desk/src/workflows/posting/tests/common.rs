use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::posting::repository::{
    SessionId, SessionRecord, SessionStore, SessionStoreError,
};
use crate::workflows::posting::{
    posting_router, Department, ExperienceLevel, FieldUpdate, JobPostingWizard, JobType,
    PostingSessionService, WizardSettings, WorkLocation,
};

pub(super) fn opened_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 21).expect("valid date")
}

pub(super) fn settings() -> WizardSettings {
    WizardSettings::new(opened_on())
}

pub(super) fn wizard() -> JobPostingWizard {
    JobPostingWizard::new(settings())
}

pub(super) fn details_updates() -> Vec<FieldUpdate> {
    vec![
        FieldUpdate::JobTitle("Software Engineer".to_string()),
        FieldUpdate::Department(Some(Department::Engineering)),
        FieldUpdate::ExperienceLevel(Some(ExperienceLevel::MidLevel)),
        FieldUpdate::JobType(Some(JobType::FullTime)),
        FieldUpdate::ToggleWorkLocation(WorkLocation::Remote),
        FieldUpdate::Description("Build things.".to_string()),
    ]
}

pub(super) fn fill_details(wizard: &mut JobPostingWizard) {
    for update in details_updates() {
        wizard.update_field(update);
    }
}

/// Walks a fresh wizard through the first three steps onto the review step.
pub(super) fn wizard_on_review() -> JobPostingWizard {
    let mut wizard = wizard();
    fill_details(&mut wizard);
    wizard.advance();
    wizard.update_field(FieldUpdate::CompensationType(Some(
        crate::workflows::posting::CompensationType::Cash,
    )));
    wizard.advance();
    wizard.update_field(FieldUpdate::ConfirmationEmailPreview(
        "Thanks for applying!".to_string(),
    ));
    wizard.advance();
    wizard
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionStore for MemoryStore {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, SessionStoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), SessionStoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        match guard.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(SessionStoreError::NotFound),
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard
            .remove(id)
            .map(|_| ())
            .ok_or(SessionStoreError::NotFound)
    }

    fn modify<F, E>(&self, id: &SessionId, change: F) -> Result<SessionRecord, E>
    where
        F: FnOnce(&mut SessionRecord) -> Result<(), E>,
        E: From<SessionStoreError>,
    {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let stored = guard.get_mut(id).ok_or(SessionStoreError::NotFound)?;
        let mut record = stored.clone();
        change(&mut record)?;
        *stored = record.clone();
        Ok(record)
    }
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, SessionStoreError> {
        Err(SessionStoreError::Unavailable("offline".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("offline".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<PostingSessionService<MemoryStore>>, MemoryStore) {
    let store = MemoryStore::default();
    let service = Arc::new(PostingSessionService::new(
        Arc::new(store.clone()),
        settings(),
    ));
    (service, store)
}

pub(super) fn router_with_service(
    service: Arc<PostingSessionService<MemoryStore>>,
) -> axum::Router {
    posting_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json")
}

pub(super) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status code");
}
