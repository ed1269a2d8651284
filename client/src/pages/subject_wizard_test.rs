use super::*;

#[test]
fn steps_before_current_are_done() {
    assert_eq!(step_class(SubjectStep::Details, SubjectStep::Publish), "wizard__step wizard__step--done");
    assert_eq!(step_class(SubjectStep::Topics, SubjectStep::Topics), "wizard__step wizard__step--current");
    assert_eq!(step_class(SubjectStep::Publish, SubjectStep::Details), "wizard__step");
}
