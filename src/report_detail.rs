use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::modal::{Activation, Modal, ModalRoot};
use crate::model::Element;

pub const DETAIL_MODAL_ID: &str = "report-detail-modal";
pub const DETAIL_ATTR: &str = "data-report-detail";
pub const NO_REASON: &str = "No reason provided.";
pub const UNKNOWN_TIME: &str = "unknown";
pub const LOAD_FAILED: &str = "Unable to load report reasons.";

/// One flagged-content reason, as found in a trigger's payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportEntry {
    pub reason: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Deserialize)]
struct EntryFields {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

/// Entries must be JSON objects; positional arrays are rejected.
impl<'de> Deserialize<'de> for ReportEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let fields = EntryFields::deserialize(Value::Object(object)).map_err(D::Error::custom)?;
        Ok(Self {
            reason: fields.reason,
            created_at: fields.created_at,
        })
    }
}

impl ReportEntry {
    pub fn render(&self) -> String {
        let reason = non_empty(&self.reason).unwrap_or(NO_REASON);
        let created_at = non_empty(&self.created_at).unwrap_or(UNKNOWN_TIME);
        format!("{} ({})", reason, created_at)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub fn parse_payload(payload: &str) -> Result<Vec<ReportEntry>> {
    Ok(serde_json::from_str(payload)?)
}

pub fn render_lines(entries: &[ReportEntry]) -> impl Iterator<Item = String> + '_ {
    entries.iter().map(ReportEntry::render)
}

#[derive(Debug, Clone)]
pub struct ReportDetailModal {
    root: ModalRoot,
    list: Vec<String>,
    triggers: Vec<Element>,
}

impl ReportDetailModal {
    pub fn setup(root: Option<ModalRoot>, triggers: Vec<Element>) -> Option<Self> {
        let Some(root) = root else {
            debug!("no report detail modal on page, detail triggers disabled");
            return None;
        };
        debug!(modal = %root.id, triggers = triggers.len(), "report detail modal bound");
        Some(Self {
            root,
            list: Vec::new(),
            triggers,
        })
    }

    pub fn open(&mut self, payload: &str) {
        self.list.clear();
        match parse_payload(payload) {
            Ok(entries) => self.list.extend(render_lines(&entries)),
            Err(e) => {
                warn!(error = %e, "report payload rejected");
                self.list.push(LOAD_FAILED.to_string());
            }
        }
        self.root.show();
        info!(lines = self.list.len(), "report detail modal opened");
    }

    pub fn activate(&mut self, index: usize) -> Activation {
        let Some(trigger) = self.triggers.get(index) else {
            return Activation::default();
        };
        if let Some(payload) = trigger.attr(DETAIL_ATTR).filter(|p| !p.is_empty()) {
            let payload = payload.to_string();
            self.open(&payload);
        }
        Activation::prevented()
    }

    pub fn triggers(&self) -> &[Element] {
        &self.triggers
    }

    pub fn lines(&self) -> &[String] {
        &self.list
    }
}

impl Modal for ReportDetailModal {
    fn root(&self) -> &ModalRoot {
        &self.root
    }

    fn close(&mut self) {
        self.root.hide();
        self.list.clear();
    }
}
