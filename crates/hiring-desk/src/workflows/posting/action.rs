use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{
    CompensationType, Department, ExperienceLevel, FieldName, FmvFrequency, FmvType, JobPosting,
    JobType, WorkLocation,
};
use super::templates::{CONFIRMATION_EMAIL_TEMPLATE, DESCRIPTION_TEMPLATE};

/// A single edit to the draft, one variant per field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldUpdate {
    JobTitle(String),
    Department(Option<Department>),
    ExperienceLevel(Option<ExperienceLevel>),
    JobType(Option<JobType>),
    WorkLocations(BTreeSet<WorkLocation>),
    /// Adds the location when absent, removes it when present.
    ToggleWorkLocation(WorkLocation),
    Description(String),
    CompensationType(Option<CompensationType>),
    CommitmentExpectation(String),
    CommitmentDuration(String),
    FmvType(FmvType),
    MinFmv(String),
    MaxFmv(String),
    FmvFrequency(Option<FmvFrequency>),
    ExactFmv(String),
    ExpirationDate(Option<NaiveDate>),
    SendConfirmation(bool),
    ConfirmationEmailPreview(String),
    SendRejection(bool),
    RejectionEmailPreview(String),
}

impl FieldUpdate {
    pub const fn field(&self) -> FieldName {
        match self {
            Self::JobTitle(_) => FieldName::JobTitle,
            Self::Department(_) => FieldName::Department,
            Self::ExperienceLevel(_) => FieldName::ExperienceLevel,
            Self::JobType(_) => FieldName::JobType,
            Self::WorkLocations(_) | Self::ToggleWorkLocation(_) => FieldName::WorkLocation,
            Self::Description(_) => FieldName::Description,
            Self::CompensationType(_) => FieldName::CompensationType,
            Self::CommitmentExpectation(_) => FieldName::CommitmentExpectation,
            Self::CommitmentDuration(_) => FieldName::CommitmentDuration,
            Self::FmvType(_) => FieldName::FmvType,
            Self::MinFmv(_) => FieldName::MinFmv,
            Self::MaxFmv(_) => FieldName::MaxFmv,
            Self::FmvFrequency(_) => FieldName::FmvFrequency,
            Self::ExactFmv(_) => FieldName::ExactFmv,
            Self::ExpirationDate(_) => FieldName::ExpirationDate,
            Self::SendConfirmation(_) => FieldName::SendConfirmation,
            Self::ConfirmationEmailPreview(_) => FieldName::ConfirmationEmailPreview,
            Self::SendRejection(_) => FieldName::SendRejection,
            Self::RejectionEmailPreview(_) => FieldName::RejectionEmailPreview,
        }
    }

    /// Write the value into the draft, returning the field that changed.
    pub(crate) fn apply(self, draft: &mut JobPosting) -> FieldName {
        let field = self.field();
        match self {
            Self::JobTitle(value) => draft.job_title = value,
            Self::Department(value) => draft.department = value,
            Self::ExperienceLevel(value) => draft.experience_level = value,
            Self::JobType(value) => draft.job_type = value,
            Self::WorkLocations(value) => draft.work_location = value,
            Self::ToggleWorkLocation(location) => {
                if !draft.work_location.remove(&location) {
                    draft.work_location.insert(location);
                }
            }
            Self::Description(value) => draft.description = value,
            Self::CompensationType(value) => draft.compensation_type = value,
            Self::CommitmentExpectation(value) => draft.commitment_expectation = value,
            Self::CommitmentDuration(value) => draft.commitment_duration = value,
            Self::FmvType(value) => draft.fmv_type = value,
            Self::MinFmv(value) => draft.min_fmv = value,
            Self::MaxFmv(value) => draft.max_fmv = value,
            Self::FmvFrequency(value) => draft.fmv_frequency = value,
            Self::ExactFmv(value) => draft.exact_fmv = value,
            Self::ExpirationDate(value) => draft.expiration_date = value,
            Self::SendConfirmation(value) => draft.send_confirmation = value,
            Self::ConfirmationEmailPreview(value) => draft.confirmation_email_preview = value,
            Self::SendRejection(value) => draft.send_rejection = value,
            Self::RejectionEmailPreview(value) => draft.rejection_email_preview = value,
        }
        field
    }
}

/// Template text a form offers when a long-form field gains focus while empty.
///
/// Only the description and confirmation email have templates; every other
/// field returns `None`, as does a field that already holds text.
pub fn prefill_on_focus(field: FieldName, draft: &JobPosting) -> Option<FieldUpdate> {
    match field {
        FieldName::Description if draft.description.is_empty() => {
            Some(FieldUpdate::Description(DESCRIPTION_TEMPLATE.to_string()))
        }
        FieldName::ConfirmationEmailPreview if draft.confirmation_email_preview.is_empty() => {
            Some(FieldUpdate::ConfirmationEmailPreview(
                CONFIRMATION_EMAIL_TEMPLATE.to_string(),
            ))
        }
        _ => None,
    }
}
