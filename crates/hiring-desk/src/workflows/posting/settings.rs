use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPANY_NAME: &str = "Consigo";
pub const DEFAULT_POSTING_WINDOW_MONTHS: u32 = 3;

/// Per-session inputs that shape the draft defaults and step-3 checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSettings {
    /// Day the posting flow was opened; anchors the default expiration date.
    pub opened_on: NaiveDate,
    pub company_name: String,
    pub posting_window_months: u32,
    /// Reject expiration dates outside `opened_on ..= opened_on + window`.
    pub enforce_posting_window: bool,
}

impl WizardSettings {
    pub fn new(opened_on: NaiveDate) -> Self {
        Self {
            opened_on,
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            posting_window_months: DEFAULT_POSTING_WINDOW_MONTHS,
            enforce_posting_window: false,
        }
    }

    /// Last day a posting opened on `opened_on` may stay live.
    pub fn latest_expiration(&self) -> Option<NaiveDate> {
        self.opened_on
            .checked_add_months(Months::new(self.posting_window_months))
    }

    pub fn default_expiration(&self) -> Option<NaiveDate> {
        self.latest_expiration()
    }
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self::new(NaiveDate::from_ymd_opt(2025, 12, 21).unwrap_or(NaiveDate::MIN))
    }
}
