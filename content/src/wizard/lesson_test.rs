use super::*;
use crate::error::field_message;

fn details() -> LessonDetails {
    LessonDetails {
        title: "Water & Life".to_owned(),
        subject: "Science".to_owned(),
        topic: "The water cycle".to_owned(),
        grade: "5".to_owned(),
        description: String::new(),
    }
}

// =============================================================
// Query parameters
// =============================================================

#[test]
fn query_encodes_reserved_characters_and_skips_empty() {
    assert_eq!(details().to_query(), "title=Water%20%26%20Life&subject=Science&topic=The%20water%20cycle&grade=5");
}

#[test]
fn query_survives_the_route_hop() {
    let href = details().href(LessonKind::Quiz);
    let (path, query) = href.split_once('?').unwrap();
    assert_eq!(path, QUIZ_ROUTE);
    assert_eq!(LessonDetails::from_query(query), details());
}

#[test]
fn from_query_reads_plus_as_space_and_ignores_unknown_keys() {
    let parsed = LessonDetails::from_query("?title=Rain+fall&foo=bar&grade=4&description");
    assert_eq!(parsed.title, "Rain fall");
    assert_eq!(parsed.grade, "4");
    assert_eq!(parsed.description, "");
}

#[test]
fn empty_details_link_has_no_query() {
    assert_eq!(LessonDetails::default().href(LessonKind::Material), MATERIAL_ROUTE);
}

// =============================================================
// Material upload
// =============================================================

#[test]
fn material_requires_file() {
    let upload = MaterialUpload::new(details());
    let errors = upload.build_request().unwrap_err();
    assert_eq!(field_message(&errors, "file"), Some("Please choose a file to upload."));
}

#[test]
fn material_reports_detail_errors_with_file_error() {
    let upload = MaterialUpload::new(LessonDetails::default());
    let errors = upload.build_request().unwrap_err();
    assert!(field_message(&errors, "title").is_some());
    assert!(field_message(&errors, "file").is_some());
}

#[test]
fn material_builds_multipart_request() {
    let mut upload = MaterialUpload::new(details());
    let file = FileUpload { file_name: "Cycle.MP4".to_owned(), content_type: "video/mp4".to_owned(), bytes: vec![1] };
    assert!(upload.set_file(Some(file)).is_none());
    upload.publish = false;

    let req = upload.build_request().unwrap();
    assert_eq!(req.resource_type, "video");
    assert_eq!(req.status, DraftStatus::Draft);
    assert!(req.file.is_some());
}

#[test]
fn resource_type_falls_back_to_document() {
    assert_eq!(resource_type_for("notes.pdf"), "pdf");
    assert_eq!(resource_type_for("notes"), "document");
    assert_eq!(resource_type_for("slides.pptx"), "document");
}
