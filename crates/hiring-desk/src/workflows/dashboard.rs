//! Read model behind the analytics dashboard: headline stats, the hiring
//! trend, workforce distribution, and the labels the charts print.

use serde::Serialize;

use super::navigation::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Engineering,
    Product,
    Design,
    Sales,
    Hr,
}

impl Team {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Engineering,
            Self::Product,
            Self::Design,
            Self::Sales,
            Self::Hr,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Product => "Product",
            Self::Design => "Design",
            Self::Sales => "Sales",
            Self::Hr => "HR",
        }
    }

    /// Chart colour for the team's series and slice.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Engineering => "#2563eb",
            Self::Product => "#10b981",
            Self::Design => "#8b5cf6",
            Self::Sales => "#f59e0b",
            Self::Hr => "#ef4444",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u32,
    pub change: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyHiring {
    pub month: &'static str,
    /// Hires per team, in `Team::ordered()` order.
    pub hires: [u32; 5],
}

impl MonthlyHiring {
    pub fn hires_for(&self, team: Team) -> u32 {
        let index = Team::ordered()
            .iter()
            .position(|candidate| *candidate == team)
            .unwrap_or(0);
        self.hires[index]
    }

    pub fn total(&self) -> u32 {
        self.hires.iter().sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkforceShare {
    pub team: Team,
    pub label: &'static str,
    pub headcount: u32,
    pub percent_of_total: u32,
    pub percent_label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opens: Option<Screen>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub stats: Vec<StatCard>,
    pub hiring_trend: Vec<MonthlyHiring>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_insight: Option<String>,
    pub workforce: Vec<WorkforceShare>,
    pub workforce_total: u32,
    pub quick_actions: Vec<QuickAction>,
}

/// Share of `total` as a whole-number percentage, rounded half up.
pub fn share_percent(value: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(value) / f64::from(total)) * 100.0).round() as u32
}

/// Percentage change from `from` to `to`; `None` when there is no baseline.
pub fn growth_percent(from: u32, to: u32) -> Option<i64> {
    if from == 0 {
        return None;
    }
    let change = (f64::from(to) - f64::from(from)) / f64::from(from) * 100.0;
    Some(change.round() as i64)
}

pub fn hiring_trend() -> Vec<MonthlyHiring> {
    vec![
        MonthlyHiring {
            month: "Nov 2025",
            hires: [20, 15, 10, 8, 5],
        },
        MonthlyHiring {
            month: "Dec 2025",
            hires: [25, 18, 12, 10, 6],
        },
        MonthlyHiring {
            month: "Jan 2026",
            hires: [45, 22, 15, 12, 8],
        },
    ]
}

fn headcount() -> [(Team, u32); 5] {
    [
        (Team::Engineering, 5),
        (Team::Product, 2),
        (Team::Design, 2),
        (Team::Sales, 1),
        (Team::Hr, 1),
    ]
}

pub fn workforce_distribution() -> (Vec<WorkforceShare>, u32) {
    let counts = headcount();
    let total: u32 = counts.iter().map(|(_, count)| count).sum();
    let shares = counts
        .into_iter()
        .map(|(team, headcount)| {
            let percent = share_percent(headcount, total);
            WorkforceShare {
                team,
                label: team.label(),
                headcount,
                percent_of_total: percent,
                percent_label: format!("{percent}%"),
                color: team.color(),
            }
        })
        .collect();
    (shares, total)
}

/// Sentence describing a team's growth between the first and last month.
pub fn trend_insight(trend: &[MonthlyHiring], team: Team) -> Option<String> {
    let first = trend.first()?;
    let last = trend.last()?;
    let growth = growth_percent(first.hires_for(team), last.hires_for(team))?;
    let direction = if growth >= 0 { "increased" } else { "decreased" };
    Some(format!(
        "{} hiring {} by {}% in {} compared to {}.",
        team.label(),
        direction,
        growth.abs(),
        month_name(last.month),
        month_name(first.month)
    ))
}

/// Names the teams whose hires rose in every month of the trend, or `None` when none did.
pub fn steady_growth_note(trend: &[MonthlyHiring], teams: &[Team]) -> Option<String> {
    let growing: Vec<&str> = teams
        .iter()
        .filter(|team| {
            trend.len() > 1
                && trend
                    .windows(2)
                    .all(|pair| pair[1].hires_for(**team) > pair[0].hires_for(**team))
        })
        .map(|team| team.label())
        .collect();
    let subject = match growing.as_slice() {
        [] => return None,
        [only] => format!("{only} roles show"),
        [rest @ .., last] => format!("{} and {last} roles show", rest.join(", ")),
    };
    Some(format!("{subject} steady month-over-month growth."))
}

fn month_name(label: &str) -> &str {
    match label.split_whitespace().next() {
        Some("Jan") => "January",
        Some("Feb") => "February",
        Some("Mar") => "March",
        Some("Apr") => "April",
        Some("May") => "May",
        Some("Jun") => "June",
        Some("Jul") => "July",
        Some("Aug") => "August",
        Some("Sep") => "September",
        Some("Oct") => "October",
        Some("Nov") => "November",
        Some("Dec") => "December",
        _ => label,
    }
}

pub fn snapshot() -> DashboardSnapshot {
    let hiring_trend = hiring_trend();
    let steady = steady_growth_note(&hiring_trend, &[Team::Product, Team::Design]);
    let trend_insight = trend_insight(&hiring_trend, Team::Engineering).map(|lead| match steady {
        Some(note) => format!("{lead} {note}"),
        None => lead,
    });
    let (workforce, workforce_total) = workforce_distribution();

    DashboardSnapshot {
        stats: vec![
            StatCard {
                label: "Total Contributors",
                value: workforce_total,
                change: "+12%",
            },
            StatCard {
                label: "Open Roles",
                value: 19,
                change: "+8%",
            },
            StatCard {
                label: "New Hires",
                value: 2,
                change: "+10%",
            },
        ],
        hiring_trend,
        trend_insight,
        workforce,
        workforce_total,
        quick_actions: vec![
            QuickAction {
                label: "Create Job",
                opens: Some(Screen::PostJob),
            },
            QuickAction {
                label: "Find Talent",
                opens: None,
            },
            QuickAction {
                label: "Find Investors",
                opens: None,
            },
            QuickAction {
                label: "Share Feedback",
                opens: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workforce_labels_round_to_whole_percentages() {
        let (shares, total) = workforce_distribution();

        assert_eq!(total, 11);
        let labels: Vec<&str> = shares
            .iter()
            .map(|share| share.percent_label.as_str())
            .collect();
        assert_eq!(labels, vec!["45%", "18%", "18%", "9%", "9%"]);
    }

    #[test]
    fn share_percent_handles_empty_totals() {
        assert_eq!(share_percent(3, 0), 0);
        assert_eq!(share_percent(1, 2), 50);
    }

    #[test]
    fn growth_is_measured_against_the_first_month() {
        assert_eq!(growth_percent(20, 45), Some(125));
        assert_eq!(growth_percent(10, 5), Some(-50));
        assert_eq!(growth_percent(0, 5), None);
    }

    #[test]
    fn engineering_insight_compares_january_to_november() {
        let insight = trend_insight(&hiring_trend(), Team::Engineering).expect("insight");
        assert_eq!(
            insight,
            "Engineering hiring increased by 125% in January compared to November."
        );
    }

    #[test]
    fn steady_growth_requires_a_rise_every_month() {
        let trend = hiring_trend();
        assert_eq!(
            steady_growth_note(&trend, &[Team::Product, Team::Design]).as_deref(),
            Some("Product and Design roles show steady month-over-month growth.")
        );
        assert_eq!(steady_growth_note(&trend[..1], &[Team::Product]), None);

        let mut flat = trend.clone();
        // Design stays at November's count in December.
        flat[1].hires[2] = flat[0].hires[2];
        assert_eq!(
            steady_growth_note(&flat, &[Team::Product, Team::Design]).as_deref(),
            Some("Product roles show steady month-over-month growth.")
        );
    }

    #[test]
    fn snapshot_insight_adds_the_steady_growth_sentence() {
        assert_eq!(
            snapshot().trend_insight.as_deref(),
            Some(
                "Engineering hiring increased by 125% in January compared to November. \
                 Product and Design roles show steady month-over-month growth."
            )
        );
    }

    #[test]
    fn snapshot_exposes_the_create_job_shortcut() {
        let snapshot = snapshot();

        assert_eq!(snapshot.stats[0].value, 11);
        assert_eq!(snapshot.hiring_trend[2].total(), 102);
        let create = snapshot
            .quick_actions
            .iter()
            .find(|action| action.label == "Create Job")
            .expect("create job action");
        assert_eq!(create.opens, Some(Screen::PostJob));
    }
}
