use super::*;

fn summary() -> DashboardSummary {
    DashboardSummary {
        total_subjects: 4,
        total_lessons: 12,
        total_assessments: 7,
        total_games: 3,
        total_teachers: 9,
        pending_reviews: 5,
        approved: 20,
        rejected: 2,
        changes_requested: 1,
        ..DashboardSummary::default()
    }
}

#[test]
fn cards_follow_display_order() {
    let labels: Vec<_> = kpi_cards(&summary()).iter().map(|k| k.label).collect();
    assert_eq!(labels.first(), Some(&"Subjects"));
    assert_eq!(labels.last(), Some(&"Rejected"));
    assert_eq!(labels.len(), 9);
}

#[test]
fn status_cards_carry_badge_tones() {
    let cards = kpi_cards(&summary());
    let pending = cards.iter().find(|k| k.label == "Pending Review").expect("pending card");
    assert_eq!(pending.value, 5);
    assert_eq!(pending.tone, Some("amber"));

    let approved = cards.iter().find(|k| k.label == "Approved").expect("approved card");
    assert_eq!(approved.tone, Some("green"));
}

#[test]
fn totals_have_no_tone() {
    let cards = kpi_cards(&summary());
    let lessons = cards.iter().find(|k| k.label == "Lessons").expect("lessons card");
    assert_eq!(lessons.value, 12);
    assert_eq!(lessons.tone, None);
}

#[test]
fn empty_summary_yields_zeroes() {
    assert!(kpi_cards(&DashboardSummary::default()).iter().all(|k| k.value == 0));
}
