use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::action::FieldUpdate;
use super::repository::{SessionId, SessionRecord, SessionStore, SessionStoreError};
use super::settings::WizardSettings;
use super::views::{ConfirmationView, ReviewView, StepIndicatorEntry};
use super::wizard::{JobPostingWizard, WizardError, WizardSnapshot};

/// One user-originated trigger from a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WizardCommand {
    Update { update: FieldUpdate },
    Advance,
    Retreat,
    JumpTo { step: u8 },
    Submit,
    Reset,
}

impl WizardCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Update { .. } => "update",
            Self::Advance => "advance",
            Self::Retreat => "retreat",
            Self::JumpTo { .. } => "jump_to",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    pub fn apply(self, wizard: &mut JobPostingWizard) -> Result<(), WizardError> {
        match self {
            Self::Update { update } => wizard.update_field(update),
            Self::Advance => wizard.advance(),
            Self::Retreat => wizard.retreat(),
            Self::JumpTo { step } => wizard.jump_to_step(step)?,
            Self::Submit => wizard.submit()?,
            Self::Reset => wizard.reset(),
        }
        Ok(())
    }
}

/// Everything a client needs to redraw a session after a command.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub headline: &'static str,
    pub step_indicator: Vec<StepIndicatorEntry>,
    pub state: WizardSnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<ConfirmationView>,
}

impl SessionRecord {
    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id.clone(),
            headline: self.wizard.current_step().headline(),
            step_indicator: self.wizard.step_indicator(),
            state: self.wizard.snapshot(),
            confirmation: self.wizard.confirmation(),
        }
    }
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("posting-{id:06}"))
}

/// Service keeping one wizard per open posting flow.
pub struct PostingSessionService<S> {
    store: Arc<S>,
    defaults: WizardSettings,
}

impl<S> PostingSessionService<S>
where
    S: SessionStore + 'static,
{
    /// `defaults` supplies company and expiration policy; `opened_on` is stamped per session.
    pub fn new(store: Arc<S>, defaults: WizardSettings) -> Self {
        Self { store, defaults }
    }

    pub fn defaults(&self) -> &WizardSettings {
        &self.defaults
    }

    pub fn open(&self, opened_on: NaiveDate) -> Result<SessionRecord, PostingServiceError> {
        let settings = WizardSettings {
            opened_on,
            ..self.defaults.clone()
        };
        let record = SessionRecord {
            id: next_session_id(),
            wizard: JobPostingWizard::new(settings),
        };

        let stored = self.store.insert(record)?;
        info!(session_id = %stored.id.0, %opened_on, "posting session opened");
        Ok(stored)
    }

    pub fn get(&self, id: &SessionId) -> Result<SessionRecord, PostingServiceError> {
        let record = self
            .store
            .fetch(id)?
            .ok_or(SessionStoreError::NotFound)?;
        Ok(record)
    }

    /// Run a command against the session's wizard and persist the new state.
    ///
    /// Rejected commands leave the stored session untouched.
    pub fn apply(
        &self,
        id: &SessionId,
        command: WizardCommand,
    ) -> Result<SessionRecord, PostingServiceError> {
        let name = command.name();
        let submitting = matches!(command, WizardCommand::Submit);

        let record = self.store.modify(id, |record| {
            command
                .apply(&mut record.wizard)
                .map_err(PostingServiceError::from)
        })?;

        let errors = record.wizard.field_errors().len();
        debug!(
            session_id = %id.0,
            command = name,
            step = record.wizard.current_step().number(),
            errors,
            "posting command applied"
        );
        if submitting {
            info!(
                session_id = %id.0,
                job_title = %record.wizard.draft().job_title,
                "job posted"
            );
        }

        Ok(record)
    }

    pub fn review(&self, id: &SessionId) -> Result<ReviewView, PostingServiceError> {
        Ok(self.get(id)?.wizard.review())
    }

    /// Discard an abandoned or completed flow.
    pub fn abandon(&self, id: &SessionId) -> Result<(), PostingServiceError> {
        self.store.remove(id)?;
        info!(session_id = %id.0, "posting session discarded");
        Ok(())
    }
}

/// Error raised by the posting session service.
#[derive(Debug, thiserror::Error)]
pub enum PostingServiceError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}
