use std::path::PathBuf;

use tracing::warn;

use crate::modal::{ClickTarget, Modal};
use crate::model::{Element, OutboxEntry, Page};
use crate::persist;
use crate::report_answer::{ReportAnswerModal, TRIGGER_ATTR};
use crate::report_detail::{ReportDetailModal, DETAIL_ATTR};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dialog {
    ReportAnswer,
    ReportDetail,
    Help,
}

/// What the element under the cursor is wired to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemKind {
    /// Index into the report modal's trigger set.
    ReportAnswer(usize),
    /// Index into the detail modal's trigger set.
    ReportDetail(usize),
    Plain,
}

#[derive(Debug, Clone)]
pub struct Item {
    pub label: String,
    pub kind: ItemKind,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub title: String,
    pub items: Vec<Item>,
    pub cursor: usize,
    pub answer_modal: Option<ReportAnswerModal>,
    pub detail_modal: Option<ReportDetailModal>,
    /// First report line shown by the detail dialog.
    pub detail_scroll: usize,
    pub show_help: bool,
    pub status: Option<String>,
    pub outbox_path: PathBuf,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(page: &Page, outbox_path: PathBuf) -> Self {
        let mounted = page.mount();
        let items = build_items(&page.elements, &mounted.answer, &mounted.detail);
        Self {
            title: page
                .title
                .clone()
                .unwrap_or_else(|| "Reports".to_string()),
            items,
            cursor: 0,
            answer_modal: mounted.answer,
            detail_modal: mounted.detail,
            detail_scroll: 0,
            show_help: false,
            status: None,
            outbox_path,
            should_quit: false,
        }
    }

    /// Topmost visible dialog. Help sits above the report modals.
    pub fn top_dialog(&self) -> Option<Dialog> {
        if self.show_help {
            Some(Dialog::Help)
        } else if self.answer_modal.as_ref().is_some_and(|m| m.is_open()) {
            Some(Dialog::ReportAnswer)
        } else if self.detail_modal.as_ref().is_some_and(|m| m.is_open()) {
            Some(Dialog::ReportDetail)
        } else {
            None
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.top_dialog().is_some()
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn select(&mut self, idx: usize) {
        if idx < self.items.len() {
            self.cursor = idx;
        }
    }

    /// Activates the element under the cursor, as a click on it would.
    pub fn activate_current(&mut self) {
        let Some(item) = self.items.get(self.cursor) else {
            return;
        };
        match item.kind {
            ItemKind::ReportAnswer(i) => {
                if let Some(m) = self.answer_modal.as_mut() {
                    m.activate(i);
                }
            }
            ItemKind::ReportDetail(i) => {
                if let Some(m) = self.detail_modal.as_mut() {
                    m.activate(i);
                    self.detail_scroll = 0;
                }
            }
            ItemKind::Plain => {}
        }
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_detail_down(&mut self) {
        let total = self.detail_modal.as_ref().map_or(0, |m| m.lines().len());
        if self.detail_scroll + 1 < total {
            self.detail_scroll += 1;
        }
    }

    /// Routes a click to the topmost dialog.
    pub fn click_dialog(&mut self, target: ClickTarget) {
        match self.top_dialog() {
            Some(Dialog::Help) => {
                if target != ClickTarget::Content {
                    self.show_help = false;
                }
            }
            Some(Dialog::ReportAnswer) => {
                if let Some(m) = self.answer_modal.as_mut() {
                    m.click(target);
                }
            }
            Some(Dialog::ReportDetail) => {
                if let Some(m) = self.detail_modal.as_mut() {
                    m.click(target);
                }
            }
            None => {}
        }
    }

    pub fn close_top_dialog(&mut self) {
        match self.top_dialog() {
            Some(Dialog::Help) => self.show_help = false,
            Some(Dialog::ReportAnswer) => {
                if let Some(m) = self.answer_modal.as_mut() {
                    m.close();
                }
            }
            Some(Dialog::ReportDetail) => {
                if let Some(m) = self.detail_modal.as_mut() {
                    m.close();
                }
            }
            None => {}
        }
    }

    /// Delivers the open report form to the outbox and closes the modal.
    /// The modal stays open when delivery fails so the reason is not lost.
    pub fn submit_report(&mut self) -> Option<OutboxEntry> {
        let modal = self.answer_modal.as_mut()?;
        let submission = modal.submit()?;
        match persist::append_submission(&self.outbox_path, submission) {
            Ok(entry) => {
                modal.close();
                self.status = Some(format!("Report sent to {}", entry.submission.action));
                Some(entry)
            }
            Err(e) => {
                warn!(error = %e, "report submission failed");
                self.status = Some(e.to_string());
                None
            }
        }
    }
}

fn build_items(
    elements: &[Element],
    answer: &Option<ReportAnswerModal>,
    detail: &Option<ReportDetailModal>,
) -> Vec<Item> {
    let mut answer_idx = 0;
    let mut detail_idx = 0;
    elements
        .iter()
        .map(|e| {
            // Trigger sets are bound per attribute, so both counters advance
            // even when an element carries both.
            let as_answer = e.has_attr(TRIGGER_ATTR).then(|| {
                answer_idx += 1;
                answer_idx - 1
            });
            let as_detail = e.has_attr(DETAIL_ATTR).then(|| {
                detail_idx += 1;
                detail_idx - 1
            });
            let kind = match (as_answer, as_detail) {
                (Some(i), _) if answer.is_some() => ItemKind::ReportAnswer(i),
                (_, Some(i)) if detail.is_some() => ItemKind::ReportDetail(i),
                _ => ItemKind::Plain,
            };
            Item {
                label: e.label.clone(),
                kind,
            }
        })
        .collect()
}
