use qbox_modals::modal::{ClickTarget, Modal, ModalRoot};
use qbox_modals::model::Element;
use qbox_modals::report_detail::{
    parse_payload, render_lines, ReportDetailModal, ReportEntry, DETAIL_ATTR, LOAD_FAILED,
};

fn detail_trigger(payload: Option<&str>) -> Element {
    let mut el = Element {
        label: "flagged".to_string(),
        attrs: Default::default(),
    };
    if let Some(p) = payload {
        el.attrs.insert(DETAIL_ATTR.to_string(), p.to_string());
    }
    el
}

fn modal_with(triggers: Vec<Element>) -> ReportDetailModal {
    ReportDetailModal::setup(Some(ModalRoot::new("report-detail-modal", true)), triggers)
        .expect("modal should bind")
}

#[test]
fn test_entry_with_both_fields() {
    let entry = ReportEntry {
        reason: Some("spam".to_string()),
        created_at: Some("2024-01-01".to_string()),
    };
    assert_eq!(entry.render(), "spam (2024-01-01)");
}

#[test]
fn test_entry_fallbacks() {
    let no_reason = ReportEntry {
        reason: None,
        created_at: Some("2024-01-01".to_string()),
    };
    assert!(no_reason.render().starts_with("No reason provided. ("));

    let no_time = ReportEntry {
        reason: Some("rude".to_string()),
        created_at: None,
    };
    assert!(no_time.render().ends_with("(unknown)"));

    let empty = ReportEntry {
        reason: Some(String::new()),
        created_at: Some(String::new()),
    };
    assert_eq!(empty.render(), "No reason provided. (unknown)");
}

#[test]
fn test_render_lines_keeps_input_order() {
    let entries = parse_payload(
        r#"[{"reason":"b","created_at":"2"},{"reason":"a","created_at":"1"},{"extra":true}]"#,
    )
    .unwrap();
    let lines: Vec<String> = render_lines(&entries).collect();
    assert_eq!(lines, vec!["b (2)", "a (1)", "No reason provided. (unknown)"]);
}

#[test]
fn test_parse_rejects_other_shapes() {
    for payload in [
        "not json",
        "{\"reason\":\"spam\"}",
        "[1, 2]",
        "[{\"reason\": 5}]",
        "[{\"reason\":\"spam\"",
        "",
        "[[\"spam\",\"x\"]]",
        "[[]]",
    ] {
        assert!(parse_payload(payload).is_err(), "accepted {:?}", payload);
    }
}

#[test]
fn test_open_renders_single_entry() {
    let mut modal = modal_with(Vec::new());
    modal.open(r#"[{"reason":"spam","created_at":"2024-01-01"}]"#);
    assert!(modal.is_open());
    assert_eq!(modal.lines(), ["spam (2024-01-01)".to_string()]);
}

#[test]
fn test_open_malformed_payload_shows_placeholder() {
    let mut modal = modal_with(Vec::new());
    for payload in ["{oops", "42", "[null]"] {
        modal.open(payload);
        assert!(modal.is_open());
        assert_eq!(modal.lines(), [LOAD_FAILED.to_string()]);
    }
}

#[test]
fn test_open_empty_array_still_opens() {
    let mut modal = modal_with(Vec::new());
    modal.open("[]");
    assert!(modal.is_open());
    assert!(modal.lines().is_empty());
}

#[test]
fn test_reopen_clears_previous_list() {
    let mut modal = modal_with(Vec::new());
    modal.open(r#"[{"reason":"a"},{"reason":"b"}]"#);
    assert_eq!(modal.lines().len(), 2);
    modal.open(r#"[{"reason":"c"}]"#);
    assert_eq!(modal.lines(), ["c (unknown)".to_string()]);
}

#[test]
fn test_close_clears_list() {
    let mut modal = modal_with(Vec::new());
    modal.open(r#"[{"reason":"spam"}]"#);
    modal.close();
    assert!(!modal.is_open());
    assert!(modal.lines().is_empty());

    // Closing again is harmless.
    modal.close();
    assert!(!modal.is_open());
    assert!(modal.lines().is_empty());
}

#[test]
fn test_backdrop_and_content_clicks() {
    let mut modal = modal_with(Vec::new());
    modal.open(r#"[{"reason":"spam"}]"#);

    let outcome = modal.click(ClickTarget::Content);
    assert!(!outcome.default_prevented);
    assert!(modal.is_open());
    assert_eq!(modal.lines().len(), 1);

    modal.click(ClickTarget::Backdrop);
    assert!(!modal.is_open());
    assert!(modal.lines().is_empty());
}

#[test]
fn test_close_control() {
    let mut modal = modal_with(Vec::new());
    modal.open("[]");
    let outcome = modal.click(ClickTarget::CloseControl);
    assert!(outcome.default_prevented);
    assert!(!modal.is_open());
}

#[test]
fn test_missing_close_control_is_ignored() {
    let mut modal =
        ReportDetailModal::setup(Some(ModalRoot::new("report-detail-modal", false)), Vec::new())
            .unwrap();
    modal.open("[]");
    modal.click(ClickTarget::CloseControl);
    assert!(modal.is_open());
}

#[test]
fn test_trigger_activation() {
    let mut modal = modal_with(vec![
        detail_trigger(Some(r#"[{"reason":"spam","created_at":"2024-01-01"}]"#)),
        detail_trigger(None),
        detail_trigger(Some("")),
    ]);

    let outcome = modal.activate(1);
    assert!(outcome.default_prevented);
    assert!(!modal.is_open());

    modal.activate(2);
    assert!(!modal.is_open());

    let outcome = modal.activate(0);
    assert!(outcome.default_prevented);
    assert!(modal.is_open());
    assert_eq!(modal.lines(), ["spam (2024-01-01)".to_string()]);

    // Unbound index does nothing.
    assert!(!modal.activate(9).default_prevented);
}

#[test]
fn test_setup_without_root_disables_controller() {
    assert!(ReportDetailModal::setup(None, vec![detail_trigger(Some("[]"))]).is_none());
}

#[test]
fn test_open_positional_entries_shows_placeholder() {
    let mut modal = modal_with(Vec::new());
    modal.open(r#"[["spam","2024-01-01"]]"#);
    assert!(modal.is_open());
    assert_eq!(modal.lines(), [LOAD_FAILED.to_string()]);
}
