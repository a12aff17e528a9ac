//! Read model behind the jobs list screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobsTab {
    #[default]
    Active,
    Drafts,
    Closed,
}

impl JobsTab {
    pub const fn ordered() -> [Self; 3] {
        [Self::Active, Self::Drafts, Self::Closed]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Drafts => "Drafts",
            Self::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub job_type: &'static str,
    pub posted: &'static str,
    pub views: u32,
    pub applicants: u32,
    pub tab: JobsTab,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobsStat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobsOverview {
    pub tab: JobsTab,
    pub stats: Vec<JobsStat>,
    pub listings: Vec<JobListing>,
}

pub fn catalog() -> Vec<JobListing> {
    vec![
        JobListing {
            title: "Software Engineer",
            company: "TechFlow",
            location: "Remote",
            job_type: "Contract",
            posted: "2 weeks ago",
            views: 72,
            applicants: 12,
            tab: JobsTab::Active,
        },
        JobListing {
            title: "Data Scientist",
            company: "TechFlow",
            location: "Remote",
            job_type: "Contract",
            posted: "2 weeks ago",
            views: 98,
            applicants: 3,
            tab: JobsTab::Active,
        },
    ]
}

fn stats() -> Vec<JobsStat> {
    [
        ("Active Jobs", "8"),
        ("Total Applications", "127"),
        ("Hire Rate", "23%"),
        ("Avg. Days to Hire", "21"),
    ]
    .into_iter()
    .map(|(label, value)| JobsStat {
        label,
        value: value.to_string(),
    })
    .collect()
}

/// Listings for the selected tab together with the board-wide stats.
pub fn overview(tab: JobsTab) -> JobsOverview {
    let listings = catalog()
        .into_iter()
        .filter(|listing| listing.tab == tab)
        .collect();

    JobsOverview {
        tab,
        stats: stats(),
        listings,
    }
}
