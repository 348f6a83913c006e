//! End-to-end tests driving the application through messages.

use std::path::Path;

use creg_app::{
    App, AppError, CatalogStatus, JsonSink, Message, Notice, RegistrationPayload,
    RegistrationSettings, Result, SelectionMode, Settings, SubmissionSink,
};
use creg_model::{Catalog, Course, CreditBand, OverflowPolicy, StudentProfile, ValidationOptions};
use creg_validate::CreditState;

#[derive(Default)]
struct RecordingSink {
    payloads: Vec<RegistrationPayload>,
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, payload: &RegistrationPayload) -> Result<()> {
        self.payloads.push(payload.clone());
        Ok(())
    }
}

struct FailingSink;

impl SubmissionSink for FailingSink {
    fn submit(&mut self, _payload: &RegistrationPayload) -> Result<()> {
        Err(AppError::submission("service unavailable"))
    }
}

fn catalog() -> Catalog {
    Catalog::new(
        Some(StudentProfile::new("Nur Aisyah", "Student")),
        vec![
            Course::new("A", "Algorithms", 3).with_lecturer("Dr. Tan"),
            Course::new("B", "Biology", 4).with_lecturer("Dr. Wong"),
            Course::new("C", "Capstone", 15).with_lecturer("Prof. Ali"),
            Course::new("D", "Discrete Mathematics", 2).with_lecturer("Dr. Tan"),
        ],
    )
}

fn settings(mode: SelectionMode, overflow: OverflowPolicy) -> Settings {
    Settings {
        registration: RegistrationSettings {
            mode,
            validation: ValidationOptions::new().with_overflow(overflow),
        },
        band: None,
    }
}

fn loaded_app(settings: Settings) -> App<RecordingSink> {
    let mut app = App::new(settings, RecordingSink::default());
    app.update(Message::CatalogLoaded(Ok(catalog()))).unwrap();
    app
}

#[test]
fn load_failure_disables_selection() {
    let mut app = App::new(Settings::default(), RecordingSink::default());
    app.update(Message::CatalogLoaded(Err("Failed to load course data".to_string())))
        .unwrap();
    app.update(Message::toggle("A")).unwrap();

    let state = app.state();
    assert_eq!(
        state.status,
        CatalogStatus::Failed("Failed to load course data".to_string())
    );
    assert!(state.catalog.is_empty());
    assert!(state.selection.is_empty());
    assert_eq!(
        state.notices,
        vec![Notice::LoadFailed {
            reason: "Failed to load course data".to_string()
        }]
    );
}

#[test]
fn load_from_ingest_error_message() {
    let err = creg_ingest::parse_catalog("{ broken", Path::new("model/data.json")).unwrap_err();
    let mut app = App::new(Settings::default(), RecordingSink::default());
    app.update(Message::CatalogLoaded(Err(err.to_string()))).unwrap();
    assert!(matches!(app.state().status, CatalogStatus::Failed(_)));
}

#[test]
fn block_policy_rejects_with_notice() {
    let mut app = loaded_app(settings(SelectionMode::Toggle, OverflowPolicy::Block));
    for code in ["A", "B", "C"] {
        app.update(Message::toggle(code)).unwrap();
    }

    let state = app.state();
    assert!(!state.selection.contains("C"));
    assert_eq!(state.validation().total_credits, 7);
    assert_eq!(state.validation().state, CreditState::Warning);
    assert_eq!(
        state.notices,
        vec![Notice::MaximumExceeded {
            code: "C".to_string(),
            max: 21
        }]
    );
    assert_eq!(state.notices[0].text(), "Maximum 21 credit hours only.");
}

#[test]
fn flag_policy_reports_error_state() {
    let mut app = loaded_app(settings(SelectionMode::Toggle, OverflowPolicy::Flag));
    for code in ["A", "B", "C"] {
        app.update(Message::toggle(code)).unwrap();
    }

    let state = app.state();
    assert_eq!(state.validation().total_credits, 22);
    assert_eq!(state.validation().state, CreditState::Error);
    assert!(!state.validation().can_register);
    assert!(state.notices.is_empty());
}

#[test]
fn toggle_twice_restores_selection() {
    let mut app = loaded_app(Settings::default());
    app.update(Message::toggle("A")).unwrap();
    app.update(Message::toggle("A")).unwrap();

    assert!(app.state().selection.is_empty());
    assert_eq!(app.state().validation().state, CreditState::None);
}

#[test]
fn unknown_code_raises_notice() {
    let mut app = loaded_app(Settings::default());
    app.update(Message::toggle("ZZZ")).unwrap();

    assert!(app.state().selection.is_empty());
    assert_eq!(
        app.state().notices,
        vec![Notice::UnknownCourse {
            code: "ZZZ".to_string()
        }]
    );
}

#[test]
fn toggle_mode_add_of_selected_course_is_noop() {
    let mut app = loaded_app(Settings::default());
    app.update(Message::toggle("A")).unwrap();
    app.update(Message::add("A")).unwrap();

    let state = app.state();
    assert!(state.selection.contains("A"));
    assert_eq!(state.validation().total_credits, 3);
    assert_eq!(
        state.notices,
        vec![Notice::AlreadyAdded {
            code: "A".to_string()
        }]
    );
}

#[test]
fn list_mode_duplicate_add_is_noop() {
    let mut app = loaded_app(settings(SelectionMode::List, OverflowPolicy::Flag));
    app.update(Message::add("A")).unwrap();
    app.update(Message::add("B")).unwrap();
    app.update(Message::add("A")).unwrap();

    let state = app.state();
    assert_eq!(state.registered.len(), 2);
    assert_eq!(state.validation().total_credits, 7);
    assert_eq!(
        state.notices,
        vec![Notice::AlreadyAdded {
            code: "A".to_string()
        }]
    );
    assert_eq!(state.notices[0].text(), "Course already added!");
}

#[test]
fn list_mode_remove_by_index_recomputes() {
    let mut app = loaded_app(settings(SelectionMode::List, OverflowPolicy::Flag));
    for code in ["A", "B", "C"] {
        app.update(Message::add(code)).unwrap();
    }
    assert_eq!(app.state().validation().state, CreditState::Error);

    app.update(Message::remove(0)).unwrap();

    let state = app.state();
    assert_eq!(state.validation().total_credits, 19);
    assert_eq!(state.validation().selected_count, 2);
    assert_eq!(state.validation().state, CreditState::Success);
    assert_eq!(state.registered[0].code, "B");
}

#[test]
fn list_mode_block_policy_refuses_overflow() {
    let mut app = loaded_app(settings(SelectionMode::List, OverflowPolicy::Block));
    for code in ["A", "B", "C"] {
        app.update(Message::add(code)).unwrap();
    }

    let state = app.state();
    assert_eq!(state.registered.len(), 2);
    assert_eq!(state.validation().total_credits, 7);
    assert!(matches!(state.notices[..], [Notice::MaximumExceeded { max: 21, .. }]));
}

#[test]
fn toggle_mode_remove_uses_pending_order() {
    let mut app = loaded_app(Settings::default());
    app.update(Message::toggle("D")).unwrap();
    app.update(Message::toggle("A")).unwrap();

    // Pending list is in catalog order: A, D.
    app.update(Message::remove(1)).unwrap();

    assert!(app.state().selection.contains("A"));
    assert!(!app.state().selection.contains("D"));
}

#[test]
fn register_submits_payload_when_in_band() {
    let mut app = loaded_app(Settings::default());
    for code in ["A", "B", "D"] {
        app.update(Message::toggle(code)).unwrap();
    }
    app.update(Message::RegisterClicked).unwrap();

    let (state, sink) = app.into_parts();
    assert_eq!(sink.payloads.len(), 1);
    let payload = &sink.payloads[0];
    assert_eq!(payload.student_name.as_deref(), Some("Nur Aisyah"));
    assert_eq!(payload.total_credits, 9);
    assert_eq!(payload.selected_courses.len(), 3);
    assert_eq!(state.notices, vec![Notice::Submitted { total_credits: 9 }]);
}

#[test]
fn register_is_noop_out_of_band() {
    let mut app = loaded_app(Settings::default());
    app.update(Message::RegisterClicked).unwrap();
    app.update(Message::toggle("A")).unwrap();
    app.update(Message::RegisterClicked).unwrap();

    assert!(app.sink().payloads.is_empty());
    assert_eq!(
        app.state().notices,
        vec![Notice::NotRegistrable, Notice::NotRegistrable]
    );

    app.update(Message::DismissNotices).unwrap();
    assert!(app.state().notices.is_empty());
}

#[test]
fn failing_sink_surfaces_error_and_notice() {
    let mut app = App::new(Settings::default(), FailingSink);
    app.update(Message::CatalogLoaded(Ok(catalog()))).unwrap();
    app.update(Message::toggle("C")).unwrap();

    let err = app.update(Message::RegisterClicked).unwrap_err();

    assert_eq!(err.to_string(), "submission failed: service unavailable");
    assert!(matches!(
        app.state().notices[..],
        [Notice::SubmissionFailed { .. }]
    ));
}

#[test]
fn band_override_replaces_catalog_band() {
    let settings = Settings {
        band: Some(CreditBand::new(1, 5).unwrap()),
        ..Settings::default()
    };
    let mut app = loaded_app(settings);
    app.update(Message::toggle("A")).unwrap();

    assert_eq!(app.state().validation().state, CreditState::Success);
    assert!(app.state().validation().can_register);
}

#[test]
fn search_filters_visible_courses() {
    let mut app = loaded_app(Settings::default());
    app.update(Message::SearchChanged("tan".to_string())).unwrap();

    let codes: Vec<_> = app
        .state()
        .visible_courses()
        .iter()
        .map(|c| c.code.clone())
        .collect();
    assert_eq!(codes, vec!["A", "D"]);
}

#[test]
fn json_sink_payload_snapshot() {
    let mut app = App::new(Settings::default(), JsonSink::new(Vec::new()));
    app.update(Message::CatalogLoaded(Ok(catalog()))).unwrap();
    app.update(Message::toggle("C")).unwrap();
    app.update(Message::RegisterClicked).unwrap();

    let (_, sink) = app.into_parts();
    let written = String::from_utf8(sink.into_inner()).unwrap();
    insta::assert_snapshot!(written.trim_end(), @r#"
    {
      "studentName": "Nur Aisyah",
      "selectedCourses": [
        {
          "code": "C",
          "name": "Capstone",
          "credits": 15,
          "lecturer": "Prof. Ali",
          "schedule": "",
          "type": "",
          "section": ""
        }
      ],
      "totalCredits": 15
    }
    "#);
}
