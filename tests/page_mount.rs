use std::fs;
use std::path::{Path, PathBuf};

use qbox_modals::modal::Modal;
use qbox_modals::parser;
use qbox_modals::report_answer::{ANSWER_ID_FIELD, TRIGGER_ATTR};
use qbox_modals::report_detail::{DETAIL_ATTR, LOAD_FAILED};
use qbox_modals::state::{AppState, Dialog, ItemKind};

fn sample_state() -> AppState {
    let page = parser::load_page(Path::new("fixtures/sample_page.yaml")).unwrap();
    AppState::new(&page, PathBuf::from("/nonexistent/outbox.yaml"))
}

#[test]
fn test_parse_sample_page() {
    let content = fs::read_to_string("fixtures/sample_page.yaml").expect("Cannot read fixture");
    let page = parser::parse_page(&content).unwrap();

    assert_eq!(page.title.as_deref(), Some("Reported answers"));
    assert_eq!(page.modals.len(), 2);
    assert_eq!(page.elements.len(), 8);
    assert_eq!(page.triggers(TRIGGER_ATTR).len(), 3);
    assert_eq!(page.triggers(DETAIL_ATTR).len(), 4);

    let form = page.modal("report-modal").unwrap().form.as_ref().unwrap();
    assert_eq!(form.action, "/report");
    assert!(form.fields.contains_key(ANSWER_ID_FIELD));
}

#[test]
fn test_load_missing_page_fails() {
    let err = parser::load_page(Path::new("fixtures/does_not_exist.yaml")).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.yaml"));
}

#[test]
fn test_parse_malformed_page_fails() {
    assert!(parser::parse_page("elements: [label: {").is_err());
}

#[test]
fn test_mount_binds_both_controllers() {
    let state = sample_state();
    assert!(state.answer_modal.is_some());
    assert!(state.detail_modal.is_some());
    assert!(!state.has_dialog());

    let kinds: Vec<ItemKind> = state.items.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ItemKind::ReportAnswer(0),
            ItemKind::ReportAnswer(1),
            ItemKind::ReportAnswer(2),
            ItemKind::ReportDetail(0),
            ItemKind::ReportDetail(1),
            ItemKind::ReportDetail(2),
            ItemKind::ReportDetail(3),
            ItemKind::Plain,
        ]
    );
}

#[test]
fn test_page_without_modals_is_inert() {
    let page = parser::load_page(Path::new("fixtures/no_modals.yaml")).unwrap();
    let mut state = AppState::new(&page, PathBuf::from("/nonexistent/outbox.yaml"));

    assert!(state.answer_modal.is_none());
    assert!(state.detail_modal.is_none());
    assert!(state.items.iter().all(|i| i.kind == ItemKind::Plain));

    state.activate_current();
    state.select(1);
    state.activate_current();
    assert!(!state.has_dialog());
}

#[test]
fn test_activate_report_trigger() {
    let mut state = sample_state();
    state.activate_current();
    assert_eq!(state.top_dialog(), Some(Dialog::ReportAnswer));

    let modal = state.answer_modal.as_ref().unwrap();
    assert_eq!(modal.form().value(ANSWER_ID_FIELD), Some("42"));
    assert_eq!(modal.form().action(), "/reports/submit");

    state.close_top_dialog();
    assert!(!state.has_dialog());
    assert_eq!(
        state.answer_modal.as_ref().unwrap().form().value(ANSWER_ID_FIELD),
        Some("")
    );
}

#[test]
fn test_empty_identifier_opens_nothing() {
    let mut state = sample_state();
    state.select(2);
    state.activate_current();
    assert!(!state.has_dialog());
}

#[test]
fn test_activate_detail_triggers() {
    let mut state = sample_state();

    state.select(3);
    state.activate_current();
    assert_eq!(state.top_dialog(), Some(Dialog::ReportDetail));
    assert_eq!(
        state.detail_modal.as_ref().unwrap().lines(),
        [
            "spam (2024-01-01)".to_string(),
            "No reason provided. (2024-02-03)".to_string()
        ]
    );
    state.close_top_dialog();

    state.select(4);
    state.activate_current();
    assert_eq!(
        state.detail_modal.as_ref().unwrap().lines(),
        [LOAD_FAILED.to_string()]
    );
    state.close_top_dialog();

    state.select(5);
    state.activate_current();
    assert_eq!(state.top_dialog(), Some(Dialog::ReportDetail));
    assert!(state.detail_modal.as_ref().unwrap().lines().is_empty());
    state.close_top_dialog();

    // Empty payload attribute is a no-op.
    state.select(6);
    state.activate_current();
    assert!(!state.has_dialog());
}

#[test]
fn test_help_sits_above_modals() {
    let mut state = sample_state();
    state.activate_current();
    state.show_help = true;
    assert_eq!(state.top_dialog(), Some(Dialog::Help));

    state.close_top_dialog();
    assert_eq!(state.top_dialog(), Some(Dialog::ReportAnswer));
    assert!(state.answer_modal.as_ref().unwrap().is_open());
}

#[test]
fn test_cursor_bounds() {
    let mut state = sample_state();
    state.select_prev();
    assert_eq!(state.cursor, 0);
    for _ in 0..20 {
        state.select_next();
    }
    assert_eq!(state.cursor, state.items.len() - 1);
    state.select(100);
    assert_eq!(state.cursor, state.items.len() - 1);
}

#[test]
fn test_listing() {
    let page = parser::load_page(Path::new("fixtures/sample_page.yaml")).unwrap();
    let listing = page.listing();

    assert!(listing[0].starts_with("[report]"));
    assert!(listing[0].contains("answer 42 -> /reports/submit"));
    assert!(listing[1].contains("answer 43 -> /report"));
    assert!(listing.contains(&"    spam (2024-01-01)".to_string()));
    assert!(listing.contains(&format!("    {}", LOAD_FAILED)));
}
