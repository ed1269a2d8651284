use super::*;

// =============================================================
// normalize_status
// =============================================================

#[test]
fn every_table_entry_maps_to_its_canonical_value() {
    for table in [ASSESSMENT_SYNONYMS, GAME_SYNONYMS, TEACHER_SYNONYMS, CURRICULUM_SYNONYMS] {
        for (raw, expected) in table {
            assert_eq!(normalize_status(Some(raw), table), *expected, "raw {raw}");
        }
    }
}

#[test]
fn lookup_ignores_case_and_surrounding_whitespace() {
    assert_eq!(
        normalize_status(Some("  review_requested "), ASSESSMENT_SYNONYMS),
        CanonicalStatus::RequestChanges
    );
    assert_eq!(normalize_status(Some("Verified"), TEACHER_SYNONYMS), CanonicalStatus::Validated);
}

#[test]
fn missing_status_is_pending() {
    assert_eq!(normalize_status(None, GAME_SYNONYMS), CanonicalStatus::Pending);
}

#[test]
fn unknown_status_is_pending() {
    assert_eq!(normalize_status(Some("ARCHIVED"), ASSESSMENT_SYNONYMS), CanonicalStatus::Pending);
    assert_eq!(normalize_status(Some(""), TEACHER_SYNONYMS), CanonicalStatus::Pending);
}

#[test]
fn strict_lookup_rejects_unknown_values() {
    assert_eq!(lookup_status(" active ", GAME_SYNONYMS), Some(CanonicalStatus::Validated));
    assert_eq!(lookup_status("approved", &[]), Some(CanonicalStatus::Validated));
    assert_eq!(lookup_status("success", GAME_SYNONYMS), None);
    assert_eq!(lookup_status("", ASSESSMENT_SYNONYMS), None);
}

#[test]
fn canonical_names_pass_through_tables_that_omit_them() {
    const EMPTY: SynonymTable = &[];
    assert_eq!(normalize_status(Some("rejected"), EMPTY), CanonicalStatus::Rejected);
    assert_eq!(normalize_status(Some("REQUEST_CHANGES"), EMPTY), CanonicalStatus::RequestChanges);
    assert_eq!(normalize_status(Some("approved"), EMPTY), CanonicalStatus::Validated);
}

#[test]
fn resource_specific_synonyms_do_not_leak_across_tables() {
    assert_eq!(normalize_status(Some("SUSPENDED"), TEACHER_SYNONYMS), CanonicalStatus::Rejected);
    assert_eq!(normalize_status(Some("SUSPENDED"), GAME_SYNONYMS), CanonicalStatus::Pending);
}

// =============================================================
// Display mapping
// =============================================================

#[test]
fn review_requested_assessment_renders_indigo_revision_badge() {
    let status = normalize_status(Some("REVIEW_REQUESTED"), ASSESSMENT_SYNONYMS);
    assert_eq!(status, CanonicalStatus::RequestChanges);
    assert_eq!(status.label(), "Revision Requested");
    assert_eq!(status.tone(), BadgeTone::Indigo);
    assert_eq!(status.badge_class(), "status-badge status-badge--indigo");
}

#[test]
fn only_pending_is_pending() {
    let pending: Vec<_> = CanonicalStatus::ALL.into_iter().filter(|s| s.is_pending()).collect();
    assert_eq!(pending, vec![CanonicalStatus::Pending]);
}

#[test]
fn serde_uses_wire_spelling() {
    let json = serde_json::to_string(&CanonicalStatus::RequestChanges).unwrap();
    assert_eq!(json, "\"REQUEST_CHANGES\"");
    assert_eq!(CanonicalStatus::Validated.to_string(), "VALIDATED");
}

// =============================================================
// FromStr
// =============================================================

#[test]
fn parse_accepts_cli_spellings() {
    assert_eq!("request-changes".parse::<CanonicalStatus>(), Ok(CanonicalStatus::RequestChanges));
    assert_eq!("approved".parse::<CanonicalStatus>(), Ok(CanonicalStatus::Validated));
    assert_eq!("Pending".parse::<CanonicalStatus>(), Ok(CanonicalStatus::Pending));
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!("draft".parse::<CanonicalStatus>(), Err(UnknownStatus("draft".to_owned())));
}
