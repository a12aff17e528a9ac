use crate::infra::{parse_date, parse_tab, InMemorySessionStore};
use chrono::{Local, NaiveDate};
use clap::Args;
use hiring_desk::config::AppConfig;
use hiring_desk::error::AppError;
use hiring_desk::workflows::dashboard;
use hiring_desk::workflows::jobs::{self, JobsTab};
use hiring_desk::workflows::posting::{
    prefill_on_focus, CompensationType, Department, ExperienceLevel, FieldName, FieldUpdate,
    FmvFrequency, JobType, PostingSessionService, ReviewView, SessionId, SessionView,
    WizardCommand, WorkLocation,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Date the wizard is opened on (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) opened_on: Option<NaiveDate>,
    /// Job title entered on the details step.
    #[arg(long, default_value = "Software Engineer")]
    pub(crate) title: String,
    /// Print the full review projection before submitting.
    #[arg(long)]
    pub(crate) show_review: bool,
}

#[derive(Args, Debug)]
pub(crate) struct JobsArgs {
    /// Tab to list: active, drafts, or closed
    #[arg(long, value_parser = parse_tab, default_value = "active")]
    pub(crate) tab: JobsTab,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        opened_on,
        title,
        show_review,
    } = args;

    let config = AppConfig::load()?;
    let opened_on = opened_on.unwrap_or_else(|| Local::now().date_naive());
    let store = Arc::new(InMemorySessionStore::default());
    let service = PostingSessionService::new(
        store.clone(),
        config.posting.wizard_settings(opened_on),
    );

    println!("Job posting wizard demo ({})", config.posting.company_name);
    let record = service.open(opened_on)?;
    let id = record.id.clone();
    render_session(&record.view());

    println!("\nContinuing with an empty details step");
    let view = apply(&service, &id, WizardCommand::Advance)?;
    render_session(&view);

    println!("\nFilling in the job details");
    let draft = service.get(&id)?.wizard.draft().clone();
    let mut updates = vec![
        FieldUpdate::JobTitle(title),
        FieldUpdate::Department(Some(Department::Engineering)),
        FieldUpdate::ExperienceLevel(Some(ExperienceLevel::MidLevel)),
        FieldUpdate::JobType(Some(JobType::FullTime)),
        FieldUpdate::ToggleWorkLocation(WorkLocation::Remote),
        FieldUpdate::ToggleWorkLocation(WorkLocation::Hybrid),
    ];
    updates.extend(prefill_on_focus(FieldName::Description, &draft));
    for update in updates {
        apply(&service, &id, WizardCommand::Update { update })?;
    }
    let view = apply(&service, &id, WizardCommand::Advance)?;
    render_session(&view);

    println!("\nChoosing hybrid compensation with a pay range");
    for update in [
        FieldUpdate::CompensationType(Some(CompensationType::Hybrid)),
        FieldUpdate::CommitmentExpectation("20 hours per week".to_string()),
        FieldUpdate::CommitmentDuration("6 months".to_string()),
        FieldUpdate::MinFmv("60".to_string()),
        FieldUpdate::MaxFmv("90".to_string()),
        FieldUpdate::FmvFrequency(Some(FmvFrequency::PerHour)),
    ] {
        apply(&service, &id, WizardCommand::Update { update })?;
    }
    let view = apply(&service, &id, WizardCommand::Advance)?;
    render_session(&view);

    println!("\nAccepting the default expiration and confirmation email");
    let draft = service.get(&id)?.wizard.draft().clone();
    if let Some(update) = prefill_on_focus(FieldName::ConfirmationEmailPreview, &draft) {
        apply(&service, &id, WizardCommand::Update { update })?;
    }
    let view = apply(&service, &id, WizardCommand::Advance)?;
    render_session(&view);

    let review = service.review(&id)?;
    if show_review {
        render_review(&review);
    }

    let view = apply(&service, &id, WizardCommand::Submit)?;
    if let Some(confirmation) = &view.confirmation {
        println!("\n{}", confirmation.headline);
        println!("{}", confirmation.message);
        println!("Next: {}", confirmation.actions.join(" | "));
    }

    service.abandon(&id)?;
    println!("Open sessions after cleanup: {}", store.open_sessions());
    Ok(())
}

pub(crate) fn run_dashboard() -> Result<(), AppError> {
    let snapshot = dashboard::snapshot();

    println!("Dashboard");
    for stat in &snapshot.stats {
        println!("- {}: {} ({})", stat.label, stat.value, stat.change);
    }

    println!("\nHiring trend");
    for month in &snapshot.hiring_trend {
        println!("- {}: {} hires", month.month, month.total());
    }
    if let Some(insight) = &snapshot.trend_insight {
        println!("  {insight}");
    }

    println!(
        "\nWorkforce distribution ({} contributors)",
        snapshot.workforce_total
    );
    for share in &snapshot.workforce {
        println!(
            "- {}: {} ({})",
            share.label, share.headcount, share.percent_label
        );
    }

    println!("\nQuick actions");
    for action in &snapshot.quick_actions {
        match action.opens {
            Some(screen) => println!("- {} -> {}", action.label, screen.label()),
            None => println!("- {}", action.label),
        }
    }
    Ok(())
}

pub(crate) fn run_jobs(args: JobsArgs) -> Result<(), AppError> {
    let overview = jobs::overview(args.tab);

    println!("Jobs ({})", overview.tab.label());
    for stat in &overview.stats {
        println!("- {}: {}", stat.label, stat.value);
    }
    if overview.listings.is_empty() {
        println!("\nNo {} jobs", overview.tab.label().to_lowercase());
    }
    for listing in &overview.listings {
        println!(
            "\n{} at {}\n  {} | {} | posted {}\n  {} views, {} applicants",
            listing.title,
            listing.company,
            listing.location,
            listing.job_type,
            listing.posted,
            listing.views,
            listing.applicants
        );
    }
    Ok(())
}

fn apply(
    service: &PostingSessionService<InMemorySessionStore>,
    id: &SessionId,
    command: WizardCommand,
) -> Result<SessionView, AppError> {
    Ok(service.apply(id, command)?.view())
}

fn render_session(view: &SessionView) {
    let progress: Vec<String> = view
        .step_indicator
        .iter()
        .map(|entry| format!("{}:{:?}", entry.number, entry.state))
        .collect();
    println!(
        "- {} [{}] {}",
        view.headline,
        progress.join(" "),
        view.state.current_step
    );
    for (field, message) in view.state.field_errors.iter() {
        println!("  ! {field}: {message}");
    }
}

fn render_review(review: &ReviewView) {
    for section in review.sections() {
        println!("\n{} (edit: {})", section.title, section.edit_step);
        for entry in &section.entries {
            let marker = if entry.is_placeholder { " (sample)" } else { "" };
            println!("  {}: {}{}", entry.label, entry.value, marker);
        }
    }
}
