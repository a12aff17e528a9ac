use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::FieldUpdate;
use super::domain::{JobPosting, WizardStep};
use super::settings::WizardSettings;
use super::validation::{validate_step, FieldErrors};
use super::views::{ConfirmationView, ReviewView, StepIndicatorEntry};

/// Multi-step job posting form: Details, Compensation, Settings, Review.
///
/// Forward moves are gated by the current step's validator, backward moves
/// are free, and `submit` is terminal until `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPostingWizard {
    settings: WizardSettings,
    step: WizardStep,
    draft: JobPosting,
    errors: FieldErrors,
    submitted: bool,
}

/// Read-only view handed to whatever renders the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub current_step: WizardStep,
    pub step_number: u8,
    pub draft: JobPosting,
    pub field_errors: FieldErrors,
    pub submitted: bool,
}

impl JobPostingWizard {
    pub fn new(settings: WizardSettings) -> Self {
        let draft = Self::initial_draft(&settings);
        Self {
            settings,
            step: WizardStep::FIRST,
            draft,
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    pub fn initial_draft(settings: &WizardSettings) -> JobPosting {
        JobPosting::blank(settings.default_expiration())
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &JobPosting {
        &self.draft
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    /// Validate the current step and move forward when it is clean.
    ///
    /// Failure is reported through `field_errors`, never as an error value.
    /// Does nothing on the review step or after submission.
    pub fn advance(&mut self) {
        if self.submitted || self.step == WizardStep::LAST {
            return;
        }

        let errors = validate_step(self.step, &self.draft, &self.settings);
        if errors.is_empty() {
            self.errors.clear();
            self.step = self.step.next();
            debug!(step = self.step.number(), "posting wizard advanced");
        } else {
            debug!(
                step = self.step.number(),
                errors = errors.len(),
                "posting wizard blocked by validation"
            );
            self.errors = errors;
        }
    }

    /// Step back one stage, clearing every error. Floors at the first step.
    pub fn retreat(&mut self) {
        if self.submitted {
            return;
        }
        self.step = self.step.previous();
        self.errors.clear();
    }

    /// Jump straight to `number` (1-4) without validating. Existing errors are kept.
    pub fn jump_to_step(&mut self, number: u8) -> Result<(), WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        let step = WizardStep::from_number(number).ok_or(WizardError::StepOutOfRange(number))?;
        self.step = step;
        Ok(())
    }

    /// Apply an edit and drop the edited field's error, leaving the others alone.
    pub fn update_field(&mut self, update: FieldUpdate) {
        if self.submitted {
            debug!(field = %update.field(), "ignoring edit to a submitted posting");
            return;
        }
        let field = update.apply(&mut self.draft);
        self.errors.remove(field);
    }

    /// Post the job. Only allowed from the review step, and only once.
    pub fn submit(&mut self) -> Result<(), WizardError> {
        if self.submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.step != WizardStep::Review {
            return Err(WizardError::NotOnReviewStep { current: self.step });
        }
        self.submitted = true;
        debug!(job_title = %self.draft.job_title, "posting wizard submitted");
        Ok(())
    }

    /// Start over with a fresh draft ("Create another job").
    pub fn reset(&mut self) {
        self.draft = Self::initial_draft(&self.settings);
        self.step = WizardStep::FIRST;
        self.errors.clear();
        self.submitted = false;
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            current_step: self.step,
            step_number: self.step.number(),
            draft: self.draft.clone(),
            field_errors: self.errors.clone(),
            submitted: self.submitted,
        }
    }

    pub fn review(&self) -> ReviewView {
        ReviewView::from_draft(&self.draft, &self.settings)
    }

    pub fn step_indicator(&self) -> Vec<StepIndicatorEntry> {
        StepIndicatorEntry::for_step(self.step)
    }

    /// Success banner, available once the posting has been submitted.
    pub fn confirmation(&self) -> Option<ConfirmationView> {
        self.submitted
            .then(|| ConfirmationView::new(&self.draft, &self.settings))
    }
}

impl Default for JobPostingWizard {
    fn default() -> Self {
        Self::new(WizardSettings::default())
    }
}

/// Precondition violations of the wizard's navigation and submit operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("step {0} does not exist; steps run from 1 to 4")]
    StepOutOfRange(u8),
    #[error("a posting can only be submitted from the review step (currently on {current})")]
    NotOnReviewStep { current: WizardStep },
    #[error("posting has already been submitted; reset to start another")]
    AlreadySubmitted,
}
