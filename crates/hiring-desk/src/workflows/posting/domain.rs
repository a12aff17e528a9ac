use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Design,
    Engineering,
    Product,
    Marketing,
}

impl Department {
    pub const fn ordered() -> [Self; 4] {
        [Self::Design, Self::Engineering, Self::Product, Self::Marketing]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Engineering => "Engineering",
            Self::Product => "Product",
            Self::Marketing => "Marketing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    EntryLevel,
    MidLevel,
    Senior,
}

impl ExperienceLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::EntryLevel, Self::MidLevel, Self::Senior]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EntryLevel => "Entry-Level",
            Self::MidLevel => "Mid-Level",
            Self::Senior => "Senior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
}

impl JobType {
    pub const fn ordered() -> [Self; 3] {
        [Self::FullTime, Self::PartTime, Self::Contract]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
        }
    }
}

/// Ordering follows the checkbox order so sets render deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLocation {
    Remote,
    Onsite,
    Hybrid,
}

impl WorkLocation {
    pub const fn ordered() -> [Self; 3] {
        [Self::Remote, Self::Onsite, Self::Hybrid]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "Remote",
            Self::Onsite => "Onsite",
            Self::Hybrid => "Hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationType {
    Cash,
    Equity,
    Hybrid,
    Unpaid,
}

impl CompensationType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Cash, Self::Equity, Self::Hybrid, Self::Unpaid]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Equity => "Equity",
            Self::Hybrid => "Hybrid (cash + equity)",
            Self::Unpaid => "Unpaid (This is a volunteering position)",
        }
    }

    /// Equity-bearing offers collect commitment terms and a fair market value.
    pub const fn includes_equity(self) -> bool {
        matches!(self, Self::Equity | Self::Hybrid)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FmvType {
    #[default]
    PayRange,
    ExactAmount,
}

impl FmvType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PayRange => "Pay range",
            Self::ExactAmount => "Exact amount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FmvFrequency {
    PerYear,
    PerMonth,
    PerHour,
}

impl FmvFrequency {
    pub const fn ordered() -> [Self; 3] {
        [Self::PerYear, Self::PerMonth, Self::PerHour]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PerYear => "Per year",
            Self::PerMonth => "Per month",
            Self::PerHour => "Per hour",
        }
    }
}

/// The four sequential stages of the posting wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Details,
    Compensation,
    Settings,
    Review,
}

impl WizardStep {
    pub const FIRST: Self = Self::Details;
    pub const LAST: Self = Self::Review;

    pub const fn ordered() -> [Self; 4] {
        [Self::Details, Self::Compensation, Self::Settings, Self::Review]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Details => 1,
            Self::Compensation => 2,
            Self::Settings => 3,
            Self::Review => 4,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Details),
            2 => Some(Self::Compensation),
            3 => Some(Self::Settings),
            4 => Some(Self::Review),
            _ => None,
        }
    }

    /// Next step, saturating at the review step.
    pub const fn next(self) -> Self {
        match self {
            Self::Details => Self::Compensation,
            Self::Compensation => Self::Settings,
            Self::Settings | Self::Review => Self::Review,
        }
    }

    /// Previous step, saturating at the details step.
    pub const fn previous(self) -> Self {
        match self {
            Self::Details | Self::Compensation => Self::Details,
            Self::Settings => Self::Compensation,
            Self::Review => Self::Settings,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Details => "Job Details",
            Self::Compensation => "Compensation",
            Self::Settings => "Settings",
            Self::Review => "Review",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Details => "Step 1: Provide basic details about the position",
            Self::Compensation => "Tell us about the compensation offered for this role.",
            Self::Settings => "Save time by automating your communications",
            Self::Review => "Let's review the details of your listing.",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.label())
    }
}

/// Keys of the draft record, used to address field errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    JobTitle,
    Department,
    ExperienceLevel,
    JobType,
    WorkLocation,
    Description,
    CompensationType,
    CommitmentExpectation,
    CommitmentDuration,
    FmvType,
    MinFmv,
    MaxFmv,
    FmvFrequency,
    ExactFmv,
    ExpirationDate,
    SendConfirmation,
    ConfirmationEmailPreview,
    SendRejection,
    RejectionEmailPreview,
}

impl FieldName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JobTitle => "job_title",
            Self::Department => "department",
            Self::ExperienceLevel => "experience_level",
            Self::JobType => "job_type",
            Self::WorkLocation => "work_location",
            Self::Description => "description",
            Self::CompensationType => "compensation_type",
            Self::CommitmentExpectation => "commitment_expectation",
            Self::CommitmentDuration => "commitment_duration",
            Self::FmvType => "fmv_type",
            Self::MinFmv => "min_fmv",
            Self::MaxFmv => "max_fmv",
            Self::FmvFrequency => "fmv_frequency",
            Self::ExactFmv => "exact_fmv",
            Self::ExpirationDate => "expiration_date",
            Self::SendConfirmation => "send_confirmation",
            Self::ConfirmationEmailPreview => "confirmation_email_preview",
            Self::SendRejection => "send_rejection",
            Self::RejectionEmailPreview => "rejection_email_preview",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress job posting edited by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    // Details
    pub job_title: String,
    pub department: Option<Department>,
    pub experience_level: Option<ExperienceLevel>,
    pub job_type: Option<JobType>,
    pub work_location: BTreeSet<WorkLocation>,
    pub description: String,

    // Compensation
    pub compensation_type: Option<CompensationType>,
    pub commitment_expectation: String,
    pub commitment_duration: String,
    pub fmv_type: FmvType,
    pub min_fmv: String,
    pub max_fmv: String,
    pub fmv_frequency: Option<FmvFrequency>,
    pub exact_fmv: String,

    // Settings
    pub expiration_date: Option<NaiveDate>,
    pub send_confirmation: bool,
    pub confirmation_email_preview: String,
    pub send_rejection: bool,
    pub rejection_email_preview: String,
}

impl JobPosting {
    /// Blank draft with the documented defaults.
    pub fn blank(expiration_date: Option<NaiveDate>) -> Self {
        Self {
            job_title: String::new(),
            department: None,
            experience_level: None,
            job_type: None,
            work_location: BTreeSet::new(),
            description: String::new(),
            compensation_type: None,
            commitment_expectation: String::new(),
            commitment_duration: String::new(),
            fmv_type: FmvType::PayRange,
            min_fmv: String::new(),
            max_fmv: String::new(),
            fmv_frequency: None,
            exact_fmv: String::new(),
            expiration_date,
            send_confirmation: true,
            confirmation_email_preview: String::new(),
            send_rejection: false,
            rejection_email_preview: String::new(),
        }
    }

    pub fn requires_commitment(&self) -> bool {
        self.compensation_type
            .map(CompensationType::includes_equity)
            .unwrap_or(false)
    }

    /// The FMV block selected by `fmv_type`; inactive sub-fields are ignored.
    pub fn fmv(&self) -> Fmv<'_> {
        match self.fmv_type {
            FmvType::PayRange => Fmv::Range {
                min: &self.min_fmv,
                max: &self.max_fmv,
                frequency: self.fmv_frequency,
            },
            FmvType::ExactAmount => Fmv::Exact {
                amount: &self.exact_fmv,
                frequency: self.fmv_frequency,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fmv<'a> {
    Range {
        min: &'a str,
        max: &'a str,
        frequency: Option<FmvFrequency>,
    },
    Exact {
        amount: &'a str,
        frequency: Option<FmvFrequency>,
    },
}
