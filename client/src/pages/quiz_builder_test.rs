use super::*;

use content::wizard::AnswerOption;

#[test]
fn points_label_pluralizes() {
    assert_eq!(points_label(1), "1 point");
    assert_eq!(points_label(0), "0 points");
    assert_eq!(points_label(5), "5 points");
}

#[test]
fn summary_names_the_correct_answer() {
    let question = Question {
        text: "2 + 2?".to_owned(),
        options: vec![
            AnswerOption { text: "3".to_owned(), correct: false },
            AnswerOption { text: "4".to_owned(), correct: true },
        ],
        points: 2,
    };
    assert_eq!(question_summary(&question), "2 options, answer: 4, 2 points");
}

#[test]
fn summary_marks_missing_answer() {
    assert_eq!(question_summary(&Question::default()), "2 options, answer: ?, 1 point");
}
