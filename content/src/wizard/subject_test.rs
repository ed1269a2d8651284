use super::*;
use crate::error::field_message;

fn filled() -> SubjectWizard {
    let mut wizard = SubjectWizard::new();
    wizard.name = " Civics ".to_owned();
    wizard.grade = "7".to_owned();
    wizard
}

fn add_topic(wizard: &mut SubjectWizard, name: &str) -> Result<(), FieldError> {
    wizard.open_topic_form();
    wizard.update_topic_form(name, "");
    wizard.save_topic()
}

// =============================================================
// Steps
// =============================================================

#[test]
fn details_step_requires_name_and_grade() {
    let mut wizard = SubjectWizard::new();
    let errors = wizard.next().unwrap_err();
    assert_eq!(field_message(&errors, "name"), Some("Subject name is required."));
    assert_eq!(field_message(&errors, "grade"), Some("Grade is required."));
    assert_eq!(wizard.step(), SubjectStep::Details);
}

#[test]
fn topics_step_requires_one_topic() {
    let mut wizard = filled();
    assert_eq!(wizard.next(), Ok(SubjectStep::Topics));
    assert!(wizard.next().is_err());

    add_topic(&mut wizard, "Government").unwrap();
    assert_eq!(wizard.next(), Ok(SubjectStep::Publish));
    assert_eq!(wizard.back(), SubjectStep::Topics);
    assert_eq!(wizard.back(), SubjectStep::Details);
    assert_eq!(wizard.back(), SubjectStep::Details);
}

// =============================================================
// Topics
// =============================================================

#[test]
fn duplicate_topic_rejected_case_insensitively() {
    let mut wizard = filled();
    add_topic(&mut wizard, "Rights").unwrap();
    let err = add_topic(&mut wizard, "  rights ").unwrap_err();
    assert_eq!(err.message, "A topic with this name already exists.");
    assert_eq!(wizard.topic_form().and_then(|f| f.error), Some(err.message));
    assert_eq!(wizard.topics().len(), 1);
}

#[test]
fn blank_topic_keeps_modal_open() {
    let mut wizard = filled();
    assert!(add_topic(&mut wizard, "   ").is_err());
    assert!(wizard.topic_form().is_some());
    assert!(wizard.topics().is_empty());
}

#[test]
fn remove_topic_out_of_range_is_none() {
    let mut wizard = filled();
    add_topic(&mut wizard, "Rights").unwrap();
    assert!(wizard.remove_topic(3).is_none());
    assert_eq!(wizard.remove_topic(0).map(|t| t.name), Some("Rights".to_owned()));
}

// =============================================================
// Submit
// =============================================================

#[test]
fn active_toggle_maps_to_status_and_thumbnail_stays_null() {
    let mut wizard = filled();
    wizard.cover_image = Some("blob:cover".to_owned());
    add_topic(&mut wizard, "Rights").unwrap();

    let req = wizard.build_request().unwrap();
    assert_eq!(req.status, DraftStatus::Pending);
    assert_eq!(req.name, "Civics");
    assert_eq!(req.thumbnail, None);

    wizard.active = false;
    assert_eq!(wizard.build_request().unwrap().status, DraftStatus::Draft);
}
