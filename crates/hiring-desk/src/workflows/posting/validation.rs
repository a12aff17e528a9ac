use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{FieldName, JobPosting, WizardStep};
use super::settings::WizardSettings;

/// Per-field messages blocking forward navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Presence checks for the given step. The review step has no validator.
pub fn validate_step(step: WizardStep, draft: &JobPosting, settings: &WizardSettings) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match step {
        WizardStep::Details => {
            if is_blank(&draft.job_title) {
                errors.insert(FieldName::JobTitle, "Job title is required.");
            }
            if draft.department.is_none() {
                errors.insert(FieldName::Department, "Department is required.");
            }
            if draft.experience_level.is_none() {
                errors.insert(FieldName::ExperienceLevel, "Experience level is required.");
            }
            if draft.job_type.is_none() {
                errors.insert(FieldName::JobType, "Job type is required.");
            }
            if draft.work_location.is_empty() {
                errors.insert(FieldName::WorkLocation, "Work location is required.");
            }
            if is_blank(&draft.description) {
                errors.insert(FieldName::Description, "Description is required.");
            }
        }
        WizardStep::Compensation => {
            // FMV sub-fields are free-form and never block the step.
            if draft.compensation_type.is_none() {
                errors.insert(FieldName::CompensationType, "Compensation type is required.");
            }
        }
        WizardStep::Settings => {
            match draft.expiration_date {
                None => errors.insert(FieldName::ExpirationDate, "Expiration date is required."),
                Some(date) if settings.enforce_posting_window => {
                    if let Some(message) = posting_window_violation(date, settings) {
                        errors.insert(FieldName::ExpirationDate, message);
                    }
                }
                Some(_) => {}
            }
            if is_blank(&draft.confirmation_email_preview) {
                errors.insert(
                    FieldName::ConfirmationEmailPreview,
                    "Confirmation email is required.",
                );
            }
        }
        WizardStep::Review => {}
    }

    errors
}

fn posting_window_violation(date: chrono::NaiveDate, settings: &WizardSettings) -> Option<String> {
    if date < settings.opened_on {
        return Some("Expiration date cannot be in the past.".to_string());
    }
    match settings.latest_expiration() {
        Some(latest) if date > latest => Some(format!(
            "Maximum expiration period is limited to {} months.",
            settings.posting_window_months
        )),
        _ => None,
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
