use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Element, ModalSpec, Page};
use crate::modal::ModalRoot;
use crate::report_answer::{
    ReportAnswerModal, ReportForm, ACTION_ATTR, ANSWER_MODAL_ID, TRIGGER_ATTR,
};
use crate::report_detail::{
    parse_payload, render_lines, ReportDetailModal, DETAIL_ATTR, DETAIL_MODAL_ID, LOAD_FAILED,
};

pub fn load_page(path: &Path) -> Result<Page> {
    let content = fs::read_to_string(path).map_err(|source| Error::PageRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_page(&content)
}

pub fn parse_page(content: &str) -> Result<Page> {
    let page: Page = serde_yaml::from_str(content).map_err(Error::PageParse)?;
    debug!(
        modals = page.modals.len(),
        elements = page.elements.len(),
        "parsed page"
    );
    Ok(page)
}

/// Both controllers of a page. Either is `None` when the page does not carry
/// the elements it needs.
#[derive(Debug, Clone)]
pub struct Mounted {
    pub answer: Option<ReportAnswerModal>,
    pub detail: Option<ReportDetailModal>,
}

impl Page {
    pub fn modal(&self, id: &str) -> Option<&ModalSpec> {
        self.modals.iter().find(|m| m.id == id)
    }

    /// Elements carrying `attr`, in declaration order.
    pub fn triggers(&self, attr: &str) -> Vec<Element> {
        self.elements
            .iter()
            .filter(|e| e.has_attr(attr))
            .cloned()
            .collect()
    }

    pub fn mount(&self) -> Mounted {
        let answer_spec = self.modal(ANSWER_MODAL_ID);
        let answer = ReportAnswerModal::setup(
            answer_spec.map(ModalRoot::from_spec),
            answer_spec
                .and_then(|m| m.form.as_ref())
                .map(ReportForm::from_spec),
            self.triggers(TRIGGER_ATTR),
        );

        let detail = ReportDetailModal::setup(
            self.modal(DETAIL_MODAL_ID).map(ModalRoot::from_spec),
            self.triggers(DETAIL_ATTR),
        );

        Mounted { answer, detail }
    }

    /// Plain-text rendering of every element and what it opens, for `--list`.
    pub fn listing(&self) -> Vec<String> {
        let mut out = Vec::new();
        for element in &self.elements {
            if let Some(answer_id) = element.attr(TRIGGER_ATTR) {
                let action = element
                    .attr(ACTION_ATTR)
                    .or_else(|| self.default_report_action())
                    .unwrap_or("-");
                out.push(format!(
                    "[report] {} (answer {} -> {})",
                    element.label, answer_id, action
                ));
            } else if let Some(payload) = element.attr(DETAIL_ATTR) {
                out.push(format!("[flagged] {}", element.label));
                match parse_payload(payload) {
                    Ok(entries) => out.extend(render_lines(&entries).map(|l| format!("    {}", l))),
                    Err(_) => out.push(format!("    {}", LOAD_FAILED)),
                }
            } else {
                out.push(format!("         {}", element.label));
            }
        }
        out
    }

    fn default_report_action(&self) -> Option<&str> {
        self.modal(ANSWER_MODAL_ID)
            .and_then(|m| m.form.as_ref())
            .map(|f| f.action.as_str())
    }
}
