mod common;

use actionnote_core::{
    display::BundleView, ArtifactGenerator, GenerateArtifacts, InputSource, Locale, Session,
};
use common::params_with_deadline;
use jiff::{civil::date, ToSpan, Zoned};

#[test]
fn test_end_to_end_blank_and_agenda() {
    let generator = ArtifactGenerator::new();
    let params = params_with_deadline(7);
    let today = date(2024, 1, 1);

    let empty = generator.generate_on("", &params, today);
    assert!(empty.summary.contains("no input provided"));
    assert!(empty.decisions.contains("no input provided"));
    assert!(empty.email_draft.contains("no input provided"));
    assert!(empty.actions.is_empty());

    let bundle = generator.generate_on("agenda notes", &params, today);
    let due: Vec<String> = bundle
        .actions
        .iter()
        .map(|item| item.due_date.to_string())
        .collect();
    assert_eq!(due, vec!["2024-01-08", "2024-01-05", "2024-01-08"]);
}

#[test]
fn test_generate_uses_current_local_date() {
    let params = params_with_deadline(5);
    let before = Zoned::now().date();
    let bundle = ArtifactGenerator::new().generate("notes", &params);
    let after = Zoned::now().date();

    let primary = bundle.actions[0].due_date;
    assert!(primary == before.saturating_add(5.days()) || primary == after.saturating_add(5.days()));
}

#[test]
fn test_sample_input_through_session() {
    let text = InputSource::Sample.read().expect("Failed to read sample");
    let mut session = Session::new(Locale::Ko);

    let bundle = session
        .generate(&GenerateArtifacts {
            text,
            duration_minutes: 90,
            deadline_days: 14,
        })
        .expect("Failed to generate");

    assert_eq!(bundle.actions.len(), 3);
    assert!(bundle.email_draft.starts_with("# [회의 요약] 신규 기능 A / 주간 정기"));
}

#[test]
fn test_report_lists_every_row() {
    let bundle = ArtifactGenerator::new().generate_on("notes", &params_with_deadline(3), date(2024, 6, 10));
    let report = BundleView::new(&bundle, Locale::En).to_string();

    assert!(report.contains("| Wireframe production | Designer Kim | 2024-06-13 | High |"));
    assert!(report.contains("| Competitor research | PM Lee | 2024-06-11 | Medium |"));
    assert!(report.contains("| Technical review prep | Dev team | 2024-06-13 | Medium |"));
}
