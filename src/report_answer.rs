use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::modal::{Activation, Modal, ModalRoot};
use crate::model::{Element, FormSpec, FormSubmission};

pub const ANSWER_MODAL_ID: &str = "report-modal";
pub const TRIGGER_ATTR: &str = "data-report-answer";
pub const ACTION_ATTR: &str = "data-action";
pub const ANSWER_ID_FIELD: &str = "answer_id";
pub const REASON_FIELD: &str = "reason";
/// Longest reason the report store accepts.
pub const MAX_REASON_LEN: usize = 500;

/// The report form: its action plus named fields, each with a default it
/// returns to on reset.
#[derive(Debug, Clone)]
pub struct ReportForm {
    default_action: String,
    action: String,
    defaults: BTreeMap<String, String>,
    values: BTreeMap<String, String>,
}

impl ReportForm {
    pub fn new(action: impl Into<String>, defaults: BTreeMap<String, String>) -> Self {
        let action = action.into();
        Self {
            default_action: action.clone(),
            action,
            values: defaults.clone(),
            defaults,
        }
    }

    pub fn from_spec(spec: &FormSpec) -> Self {
        Self::new(spec.action.clone(), spec.fields.clone())
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn set_action(&mut self, action: impl Into<String>) {
        self.action = action.into();
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    /// Writes to undeclared fields are dropped.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value.into();
        }
    }

    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.action = self.default_action.clone();
    }

    pub fn snapshot(&self) -> FormSubmission {
        FormSubmission {
            action: self.action.clone(),
            fields: self.values.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportAnswerModal {
    root: ModalRoot,
    form: ReportForm,
    triggers: Vec<Element>,
}

impl ReportAnswerModal {
    /// Binds the controller to its subtree. Returns `None` when the page has
    /// no report modal, or its form lacks the hidden answer field.
    pub fn setup(
        root: Option<ModalRoot>,
        form: Option<ReportForm>,
        triggers: Vec<Element>,
    ) -> Option<Self> {
        let Some(root) = root else {
            debug!("no report modal on page, report triggers disabled");
            return None;
        };
        let Some(form) = form.filter(|f| f.has_field(ANSWER_ID_FIELD)) else {
            debug!(modal = %root.id, "report modal has no usable form");
            return None;
        };
        debug!(modal = %root.id, triggers = triggers.len(), "report modal bound");
        Some(Self {
            root,
            form,
            triggers,
        })
    }

    pub fn open(&mut self, target_id: &str, submit_endpoint: Option<&str>) -> Result<()> {
        if target_id.is_empty() {
            return Err(Error::EmptyTarget);
        }
        self.show_for(target_id, submit_endpoint);
        Ok(())
    }

    /// `target_id` must be non-empty.
    fn show_for(&mut self, target_id: &str, submit_endpoint: Option<&str>) {
        self.form.set_value(ANSWER_ID_FIELD, target_id);
        if let Some(endpoint) = submit_endpoint.filter(|e| !e.is_empty()) {
            self.form.set_action(endpoint);
        }
        self.root.show();
        info!(answer_id = target_id, action = %self.form.action(), "report modal opened");
    }

    /// Runs the handler bound to trigger `index`.
    pub fn activate(&mut self, index: usize) -> Activation {
        let Some(trigger) = self.triggers.get(index) else {
            return Activation::default();
        };
        let answer_id = trigger.attr(TRIGGER_ATTR).unwrap_or("").to_string();
        let action = trigger.attr(ACTION_ATTR).map(str::to_string);
        if !answer_id.is_empty() {
            self.show_for(&answer_id, action.as_deref());
        }
        Activation::prevented()
    }

    pub fn triggers(&self) -> &[Element] {
        &self.triggers
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn reason(&self) -> &str {
        self.form.value(REASON_FIELD).unwrap_or("")
    }

    pub fn push_reason_char(&mut self, c: char) {
        if !self.is_open() || !self.form.has_field(REASON_FIELD) {
            return;
        }
        let mut reason = self.reason().to_string();
        if reason.chars().count() < MAX_REASON_LEN {
            reason.push(c);
            self.form.set_value(REASON_FIELD, reason);
        }
    }

    pub fn pop_reason_char(&mut self) {
        if !self.is_open() {
            return;
        }
        let mut reason = self.reason().to_string();
        reason.pop();
        self.form.set_value(REASON_FIELD, reason);
    }

    /// Hands the open form to its action. The caller delivers it.
    pub fn submit(&self) -> Option<FormSubmission> {
        if !self.is_open() {
            return None;
        }
        Some(self.form.snapshot())
    }
}

impl Modal for ReportAnswerModal {
    fn root(&self) -> &ModalRoot {
        &self.root
    }

    fn close(&mut self) {
        self.root.hide();
        self.form.reset();
    }
}
