use std::collections::BTreeSet;

use crate::model::ModalSpec;

/// Class carried by a modal root while it is visible.
pub const OPEN_CLASS: &str = "modal-open";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// Where a click on an open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the content, and nothing else.
    Backdrop,
    Content,
    CloseControl,
}

/// What happened to the originating event once a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Activation {
    pub default_prevented: bool,
}

impl Activation {
    pub fn prevented() -> Self {
        Self {
            default_prevented: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalRoot {
    pub id: String,
    classes: BTreeSet<String>,
    has_close_control: bool,
}

impl ModalRoot {
    pub fn new(id: impl Into<String>, has_close_control: bool) -> Self {
        Self {
            id: id.into(),
            classes: BTreeSet::new(),
            has_close_control,
        }
    }

    pub fn from_spec(spec: &ModalSpec) -> Self {
        Self::new(spec.id.clone(), spec.close_control)
    }

    pub fn state(&self) -> ModalState {
        if self.classes.contains(OPEN_CLASS) {
            ModalState::Open
        } else {
            ModalState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == ModalState::Open
    }

    pub fn has_close_control(&self) -> bool {
        self.has_close_control
    }

    pub fn show(&mut self) {
        self.classes.insert(OPEN_CLASS.to_string());
    }

    pub fn hide(&mut self) {
        self.classes.remove(OPEN_CLASS);
    }
}

/// Shared dismissal behaviour of the two report modals.
pub trait Modal {
    fn root(&self) -> &ModalRoot;

    fn close(&mut self);

    fn is_open(&self) -> bool {
        self.root().is_open()
    }

    /// Backdrop clicks close without touching the event. The close control
    /// swallows its default action and closes. Content clicks pass through.
    fn click(&mut self, target: ClickTarget) -> Activation {
        match target {
            ClickTarget::Backdrop => {
                self.close();
                Activation::default()
            }
            ClickTarget::CloseControl if self.root().has_close_control() => {
                self.close();
                Activation::prevented()
            }
            ClickTarget::CloseControl | ClickTarget::Content => Activation::default(),
        }
    }
}
