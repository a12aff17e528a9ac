use serde::Serialize;

use super::domain::{Fmv, JobPosting, WizardStep};
use super::settings::WizardSettings;
use super::templates::{CONFIRMATION_EMAIL_TEMPLATE, DESCRIPTION_TEMPLATE};

const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize)]
pub struct ReviewEntry {
    pub label: &'static str,
    pub value: String,
    /// True when `value` is sample copy standing in for an empty field.
    pub is_placeholder: bool,
}

impl ReviewEntry {
    fn filled(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            is_placeholder: false,
        }
    }

    fn or_placeholder(label: &'static str, value: Option<String>, placeholder: &str) -> Self {
        match value {
            Some(value) => Self::filled(label, value),
            None => Self {
                label,
                value: placeholder.to_string(),
                is_placeholder: true,
            },
        }
    }

    fn text(label: &'static str, value: &str, placeholder: &str) -> Self {
        let value = (!value.is_empty()).then(|| value.to_string());
        Self::or_placeholder(label, value, placeholder)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewSection {
    pub title: &'static str,
    /// Step the section's "Edit" action jumps to.
    pub edit_step: WizardStep,
    pub entries: Vec<ReviewEntry>,
}

/// Display projection of the draft for the review step. Never written back.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub job_details: ReviewSection,
    pub compensation: ReviewSection,
    pub settings: ReviewSection,
}

impl ReviewView {
    pub fn from_draft(draft: &JobPosting, settings: &WizardSettings) -> Self {
        Self {
            job_details: job_details_section(draft, settings),
            compensation: compensation_section(draft),
            settings: settings_section(draft),
        }
    }

    pub fn sections(&self) -> [&ReviewSection; 3] {
        [&self.job_details, &self.compensation, &self.settings]
    }

    pub fn entry(&self, label: &str) -> Option<&ReviewEntry> {
        self.sections()
            .into_iter()
            .flat_map(|section| section.entries.iter())
            .find(|entry| entry.label == label)
    }
}

fn job_details_section(draft: &JobPosting, settings: &WizardSettings) -> ReviewSection {
    let work_location = (!draft.work_location.is_empty()).then(|| {
        draft
            .work_location
            .iter()
            .map(|location| location.label())
            .collect::<Vec<_>>()
            .join(", ")
    });

    ReviewSection {
        title: "Job Details",
        edit_step: WizardStep::Details,
        entries: vec![
            ReviewEntry::text("Job Title", &draft.job_title, "Graphic Designer"),
            ReviewEntry::filled("Company", settings.company_name.clone()),
            ReviewEntry::or_placeholder(
                "Department",
                draft.department.map(|value| value.label().to_string()),
                "Design",
            ),
            ReviewEntry::or_placeholder("Work Location", work_location, "Remote"),
            ReviewEntry::or_placeholder(
                "Job Type",
                draft.job_type.map(|value| value.label().to_string()),
                "Part-Time",
            ),
            ReviewEntry::or_placeholder(
                "Experience Level",
                draft.experience_level.map(|value| value.label().to_string()),
                "Entry-Level",
            ),
            ReviewEntry::text("Description", &draft.description, DESCRIPTION_TEMPLATE),
        ],
    }
}

fn compensation_section(draft: &JobPosting) -> ReviewSection {
    let (fmv, untouched) = match draft.fmv() {
        Fmv::Range {
            min,
            max,
            frequency,
        } => (
            format!(
                "${} - ${} {}",
                non_empty_or(min, "30"),
                non_empty_or(max, "50"),
                frequency.map(|value| value.label()).unwrap_or("per hour")
            ),
            min.is_empty() && max.is_empty() && frequency.is_none(),
        ),
        Fmv::Exact { amount, frequency } => (
            format!(
                "${} {}",
                non_empty_or(amount, "80,000"),
                frequency.map(|value| value.label()).unwrap_or("per year")
            ),
            amount.is_empty() && frequency.is_none(),
        ),
    };
    // Partly filled blocks mix sample and real values; only a fully blank block is sample copy.
    let fmv = ReviewEntry {
        label: "Fair market value (FMV)",
        value: fmv,
        is_placeholder: untouched,
    };

    ReviewSection {
        title: "Compensation",
        edit_step: WizardStep::Compensation,
        entries: vec![
            ReviewEntry::or_placeholder(
                "Compensation Type",
                draft.compensation_type.map(|value| value.label().to_string()),
                "Equity",
            ),
            ReviewEntry::text(
                "Commitment Expectation",
                &draft.commitment_expectation,
                "20 hours per week",
            ),
            ReviewEntry::text(
                "Commitment Duration",
                &draft.commitment_duration,
                "3 Months Potential Extension",
            ),
            fmv,
        ],
    }
}

fn settings_section(draft: &JobPosting) -> ReviewSection {
    ReviewSection {
        title: "Settings",
        edit_step: WizardStep::Settings,
        entries: vec![
            ReviewEntry::or_placeholder(
                "Expiration Date",
                draft
                    .expiration_date
                    .map(|date| date.format(EXPIRATION_DATE_FORMAT).to_string()),
                "03/21/2026",
            ),
            ReviewEntry::text(
                "Confirmation Email",
                &draft.confirmation_email_preview,
                CONFIRMATION_EMAIL_TEMPLATE,
            ),
        ],
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepIndicatorEntry {
    pub step: WizardStep,
    pub number: u8,
    pub label: &'static str,
    pub state: StepState,
}

impl StepIndicatorEntry {
    pub fn for_step(current: WizardStep) -> Vec<Self> {
        WizardStep::ordered()
            .into_iter()
            .map(|step| Self {
                step,
                number: step.number(),
                label: step.label(),
                state: match step.cmp(&current) {
                    std::cmp::Ordering::Less => StepState::Completed,
                    std::cmp::Ordering::Equal => StepState::Active,
                    std::cmp::Ordering::Greater => StepState::Upcoming,
                },
            })
            .collect()
    }
}

/// Banner shown after a posting is submitted.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationView {
    pub headline: &'static str,
    pub message: String,
    pub actions: [&'static str; 2],
}

impl ConfirmationView {
    pub fn new(draft: &JobPosting, settings: &WizardSettings) -> Self {
        Self {
            headline: "Job posted!",
            message: format!(
                "Your {} role at {} was successfully created.",
                draft.job_title, settings.company_name
            ),
            actions: ["Go to dashboard", "Create another job"],
        }
    }
}
