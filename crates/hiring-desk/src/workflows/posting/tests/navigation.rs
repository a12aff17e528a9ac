use super::common::*;
use crate::workflows::posting::{
    CompensationType, FieldName, FieldUpdate, JobPostingWizard, WizardError, WizardStep,
    WorkLocation,
};

#[test]
fn new_wizard_starts_on_details_with_documented_defaults() {
    let wizard = wizard();

    assert_eq!(wizard.current_step(), WizardStep::Details);
    assert!(wizard.field_errors().is_empty());
    assert!(!wizard.is_submitted());

    let draft = wizard.draft();
    assert_eq!(draft.fmv_type, crate::workflows::posting::FmvType::PayRange);
    assert!(draft.send_confirmation);
    assert!(!draft.send_rejection);
    assert_eq!(
        draft.expiration_date,
        chrono::NaiveDate::from_ymd_opt(2026, 3, 21)
    );
}

#[test]
fn advance_with_complete_details_moves_to_compensation() {
    let mut wizard = wizard();
    fill_details(&mut wizard);

    wizard.advance();

    assert_eq!(wizard.current_step(), WizardStep::Compensation);
    assert!(wizard.field_errors().is_empty());
}

#[test]
fn advance_from_blank_details_reports_every_required_field() {
    let mut wizard = wizard();
    wizard.update_field(FieldUpdate::JobTitle(String::new()));

    wizard.advance();

    assert_eq!(wizard.current_step(), WizardStep::Details);
    let fields: Vec<FieldName> = wizard.field_errors().fields().collect();
    assert_eq!(
        fields,
        vec![
            FieldName::JobTitle,
            FieldName::Department,
            FieldName::ExperienceLevel,
            FieldName::JobType,
            FieldName::WorkLocation,
            FieldName::Description,
        ]
    );
    assert_eq!(
        wizard.field_errors().get(FieldName::JobTitle),
        Some("Job title is required.")
    );
}

#[test]
fn advance_reports_only_the_missing_field() {
    let mut wizard = wizard();
    fill_details(&mut wizard);
    wizard.update_field(FieldUpdate::ToggleWorkLocation(WorkLocation::Remote));

    wizard.advance();

    assert_eq!(wizard.current_step(), WizardStep::Details);
    assert_eq!(wizard.field_errors().len(), 1);
    assert_eq!(
        wizard.field_errors().get(FieldName::WorkLocation),
        Some("Work location is required.")
    );
}

#[test]
fn whitespace_title_counts_as_missing() {
    let mut wizard = wizard();
    fill_details(&mut wizard);
    wizard.update_field(FieldUpdate::JobTitle("   ".to_string()));

    wizard.advance();

    assert!(wizard.field_errors().contains(FieldName::JobTitle));
    assert_eq!(wizard.current_step(), WizardStep::Details);
}

#[test]
fn compensation_step_requires_only_compensation_type() {
    let mut wizard = wizard();
    fill_details(&mut wizard);
    wizard.advance();

    wizard.advance();
    assert_eq!(wizard.current_step(), WizardStep::Compensation);
    assert_eq!(
        wizard.field_errors().fields().collect::<Vec<_>>(),
        vec![FieldName::CompensationType]
    );

    wizard.update_field(FieldUpdate::CompensationType(Some(CompensationType::Equity)));
    wizard.advance();
    assert_eq!(wizard.current_step(), WizardStep::Settings);
    assert!(wizard.field_errors().is_empty());
}

#[test]
fn settings_step_requires_expiration_and_confirmation_email() {
    let mut wizard = wizard();
    fill_details(&mut wizard);
    wizard.advance();
    wizard.update_field(FieldUpdate::CompensationType(Some(CompensationType::Cash)));
    wizard.advance();
    wizard.update_field(FieldUpdate::ExpirationDate(None));

    wizard.advance();

    assert_eq!(wizard.current_step(), WizardStep::Settings);
    assert_eq!(
        wizard.field_errors().get(FieldName::ExpirationDate),
        Some("Expiration date is required.")
    );
    assert_eq!(
        wizard.field_errors().get(FieldName::ConfirmationEmailPreview),
        Some("Confirmation email is required.")
    );
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut wizard = wizard();
    wizard.advance();
    assert_eq!(wizard.field_errors().len(), 6);

    wizard.update_field(FieldUpdate::JobTitle("Designer".to_string()));

    assert!(!wizard.field_errors().contains(FieldName::JobTitle));
    assert_eq!(wizard.field_errors().len(), 5);
    assert!(wizard.field_errors().contains(FieldName::Department));
}

#[test]
fn editing_a_field_with_an_empty_value_still_clears_its_error() {
    let mut wizard = wizard();
    wizard.advance();

    wizard.update_field(FieldUpdate::Description(String::new()));

    assert!(!wizard.field_errors().contains(FieldName::Description));
}

#[test]
fn toggling_a_work_location_twice_restores_the_set() {
    let mut wizard = wizard();
    wizard.update_field(FieldUpdate::ToggleWorkLocation(WorkLocation::Onsite));
    let before = wizard.draft().work_location.clone();

    wizard.update_field(FieldUpdate::ToggleWorkLocation(WorkLocation::Remote));
    assert!(wizard.draft().work_location.contains(&WorkLocation::Remote));
    wizard.update_field(FieldUpdate::ToggleWorkLocation(WorkLocation::Remote));

    assert_eq!(wizard.draft().work_location, before);
}

#[test]
fn retreat_floors_at_first_step_and_clears_errors() {
    let mut wizard = wizard();
    wizard.advance();
    assert!(!wizard.field_errors().is_empty());

    wizard.retreat();

    assert_eq!(wizard.current_step(), WizardStep::Details);
    assert!(wizard.field_errors().is_empty());
}

#[test]
fn retreat_steps_back_one_stage() {
    let mut wizard = wizard_on_review();
    assert_eq!(wizard.current_step(), WizardStep::Review);

    wizard.retreat();
    assert_eq!(wizard.current_step(), WizardStep::Settings);
    wizard.retreat();
    assert_eq!(wizard.current_step(), WizardStep::Compensation);
}

#[test]
fn jump_to_step_sets_any_step_without_validation() {
    for number in 1..=4u8 {
        let mut wizard = wizard();
        wizard
            .jump_to_step(number)
            .expect("steps one through four are valid");
        assert_eq!(wizard.current_step().number(), number);
    }
}

#[test]
fn jump_to_step_keeps_existing_errors() {
    let mut wizard = wizard();
    wizard.advance();
    let errors = wizard.field_errors().clone();

    wizard.jump_to_step(3).expect("valid step");

    assert_eq!(wizard.current_step(), WizardStep::Settings);
    assert_eq!(wizard.field_errors(), &errors);
}

#[test]
fn jump_to_step_rejects_out_of_range_steps() {
    let mut wizard = wizard();

    assert_eq!(wizard.jump_to_step(0), Err(WizardError::StepOutOfRange(0)));
    assert_eq!(wizard.jump_to_step(5), Err(WizardError::StepOutOfRange(5)));
    assert_eq!(wizard.current_step(), WizardStep::Details);
}

#[test]
fn advance_on_review_step_stays_put() {
    let mut wizard = wizard_on_review();

    wizard.advance();

    assert_eq!(wizard.current_step(), WizardStep::Review);
    assert!(!wizard.is_submitted());
}

#[test]
fn submit_from_review_marks_posting_submitted() {
    let mut wizard = wizard_on_review();

    wizard.submit().expect("review step can submit");

    assert!(wizard.is_submitted());
    let confirmation = wizard.confirmation().expect("confirmation available");
    assert_eq!(
        confirmation.message,
        "Your Software Engineer role at Consigo was successfully created."
    );
}

#[test]
fn submit_off_the_review_step_is_rejected() {
    let mut wizard = wizard();
    fill_details(&mut wizard);
    wizard.advance();

    let err = wizard.submit().expect_err("compensation step cannot submit");

    assert_eq!(
        err,
        WizardError::NotOnReviewStep {
            current: WizardStep::Compensation
        }
    );
    assert!(!wizard.is_submitted());
    assert!(wizard.confirmation().is_none());
}

#[test]
fn submitted_wizard_is_frozen_until_reset() {
    let mut wizard = wizard_on_review();
    wizard.submit().expect("submit succeeds");
    let frozen = wizard.clone();

    wizard.retreat();
    wizard.advance();
    wizard.update_field(FieldUpdate::JobTitle("Changed".to_string()));

    assert_eq!(wizard, frozen);
    assert_eq!(wizard.jump_to_step(1), Err(WizardError::AlreadySubmitted));
    assert_eq!(wizard.submit(), Err(WizardError::AlreadySubmitted));
}

#[test]
fn reset_after_submit_restores_initial_state() {
    let pristine = wizard();
    let mut wizard = wizard_on_review();
    wizard.submit().expect("submit succeeds");

    wizard.reset();

    assert_eq!(wizard.current_step(), WizardStep::Details);
    assert!(!wizard.is_submitted());
    assert!(wizard.field_errors().is_empty());
    assert_eq!(wizard.draft(), pristine.draft());
    assert_eq!(
        wizard.draft(),
        &JobPostingWizard::initial_draft(wizard.settings())
    );
}

#[test]
fn step_indicator_tracks_progress() {
    use crate::workflows::posting::StepState;

    let mut wizard = wizard();
    fill_details(&mut wizard);
    wizard.advance();

    let states: Vec<StepState> = wizard
        .step_indicator()
        .into_iter()
        .map(|entry| entry.state)
        .collect();
    assert_eq!(
        states,
        vec![
            StepState::Completed,
            StepState::Active,
            StepState::Upcoming,
            StepState::Upcoming,
        ]
    );
}
