use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A moderation page as declared in its YAML description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub modals: Vec<ModalSpec>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalSpec {
    pub id: String,
    #[serde(default)]
    pub close_control: bool,
    #[serde(default)]
    pub form: Option<FormSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSpec {
    #[serde(default)]
    pub action: String,
    /// Field names mapped to their default values.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

/// A clickable element of the page. Anything it needs to open a modal
/// travels in `attrs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub label: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(|s| s.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }
}

/// A form submission handed to the form's action, as a browser would post it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub action: String,
    pub fields: BTreeMap<String, String>,
}

/// An outbox record: a submission stamped with the moment it was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboxEntry {
    pub submitted_at: String,
    #[serde(flatten)]
    pub submission: FormSubmission,
}
