pub mod error;
pub mod modal;
pub mod model;
pub mod parser;
pub mod persist;
pub mod report_answer;
pub mod report_detail;
pub mod state;
pub mod tui;
pub mod ui;

pub use error::{Error, Result};
