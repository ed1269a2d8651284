use super::*;

use content::types::Game;

fn games(n: usize) -> Vec<Game> {
    (0..n)
        .map(|i| {
            let status = if i % 2 == 0 { "pending" } else { "approved" };
            serde_json::from_value(serde_json::json!({
                "id": i + 1,
                "name": format!("Game {}", i + 1),
                "type": if i < 3 { "puzzle" } else { "quiz" },
                "grade": "4",
                "status": status,
            }))
            .unwrap()
        })
        .collect()
}

// =============================================================================
// parse_topic
// =============================================================================

#[test]
fn topic_without_description() {
    assert_eq!(parse_topic(" Fractions "), ("Fractions", ""));
}

#[test]
fn topic_with_description() {
    assert_eq!(parse_topic("Fractions: halves and quarters"), ("Fractions", "halves and quarters"));
}

// =============================================================================
// list rendering
// =============================================================================

#[test]
fn page_render_lists_rows_and_summary() {
    let mut state = ListState::new();
    state.set_items(games(12));
    apply_list_args(&mut state, &ListArgs { page: 2, ..ListArgs::default() });

    let out = render_page(&state);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "11\tPending Review\tGame 11");
    assert_eq!(lines[2], "Showing 11-12 of 12 (page 2 of 2)");
}

#[test]
fn filters_apply_before_paging() {
    let mut state = ListState::new();
    state.set_items(games(12));
    let args = ListArgs { kind: Some("puzzle".to_owned()), status: Some(CanonicalStatus::Pending), page: 1, ..ListArgs::default() };
    apply_list_args(&mut state, &args);

    let out = render_page(&state);
    assert!(out.ends_with("Showing 1-2 of 2 (page 1 of 1)"));
    assert!(out.contains("Game 1\n"));
    assert!(out.contains("Game 3\n"));
}

#[test]
fn empty_result_reports_zero_range() {
    let mut state = ListState::<Game>::new();
    apply_list_args(&mut state, &ListArgs { search: Some("nothing".to_owned()), page: 4, ..ListArgs::default() });
    assert_eq!(render_page(&state), "Showing 0-0 of 0 (page 1 of 1)");
}

// =============================================================================
// create helpers
// =============================================================================

#[test]
fn subject_wizard_collects_topics() {
    let args = SubjectArgs {
        name: "Mathematics".to_owned(),
        grade: "5".to_owned(),
        description: String::new(),
        topics: vec!["Fractions:Parts of a whole".to_owned(), "Decimals".to_owned()],
        draft: true,
    };
    let request = subject_wizard(&args).unwrap().build_request().unwrap();
    assert_eq!(request.topics.len(), 2);
    assert_eq!(request.topics[0].description, "Parts of a whole");
    assert_eq!(request.status, content::types::DraftStatus::Draft);
    assert_eq!(request.thumbnail, None);
}

#[test]
fn subject_wizard_rejects_duplicate_topics() {
    let args = SubjectArgs {
        name: "Science".to_owned(),
        grade: "6".to_owned(),
        description: String::new(),
        topics: vec!["Plants".to_owned(), "plants".to_owned()],
        draft: false,
    };
    let err = subject_wizard(&args).err().unwrap();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn subject_wizard_requires_a_topic() {
    let args =
        SubjectArgs { name: "Art".to_owned(), grade: "3".to_owned(), description: String::new(), topics: vec![], draft: false };
    assert!(matches!(subject_wizard(&args), Err(CliError::Validation(_))));
}

#[test]
fn content_types_follow_extension() {
    assert_eq!(content_type_for("notes.PDF"), "application/pdf");
    assert_eq!(content_type_for("clip.mp4"), "video/mp4");
    assert_eq!(content_type_for("README"), "application/octet-stream");
}
