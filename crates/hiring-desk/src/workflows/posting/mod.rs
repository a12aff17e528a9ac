//! The "post a job" wizard: draft model, per-step validation, navigation
//! state machine, review projection, and the session service that lets a
//! presentation layer drive many wizards at once.

pub mod action;
pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
mod settings;
pub mod templates;
mod validation;
pub mod views;
mod wizard;

#[cfg(test)]
mod tests;

pub use action::{prefill_on_focus, FieldUpdate};
pub use domain::{
    CompensationType, Department, ExperienceLevel, FieldName, Fmv, FmvFrequency, FmvType,
    JobPosting, JobType, WizardStep, WorkLocation,
};
pub use repository::{SessionId, SessionRecord, SessionStore, SessionStoreError};
pub use router::posting_router;
pub use service::{PostingServiceError, PostingSessionService, SessionView, WizardCommand};
pub use settings::{WizardSettings, DEFAULT_COMPANY_NAME, DEFAULT_POSTING_WINDOW_MONTHS};
pub use validation::{validate_step, FieldErrors};
pub use views::{ConfirmationView, ReviewEntry, ReviewSection, ReviewView, StepIndicatorEntry, StepState};
pub use wizard::{JobPostingWizard, WizardError, WizardSnapshot};
