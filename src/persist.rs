use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use directories::ProjectDirs;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::{FormSubmission, OutboxEntry};

pub fn data_dir() -> PathBuf {
    ProjectDirs::from("", "", "qbox-modals")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_outbox_path() -> PathBuf {
    data_dir().join("outbox.yaml")
}

pub fn load_outbox(path: &Path) -> Result<Vec<OutboxEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| Error::outbox(path, format!("cannot read: {}", e)))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(&content)
        .map_err(|e| Error::outbox(path, format!("corrupt ({}), use --clear-outbox to reset", e)))
}

/// Stamps `submission` with the current time and appends it to the outbox.
pub fn append_submission(path: &Path, submission: FormSubmission) -> Result<OutboxEntry> {
    let mut entries = load_outbox(path)?;
    let entry = OutboxEntry {
        submitted_at: Local::now().to_rfc3339(),
        submission,
    };
    entries.push(entry.clone());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| Error::outbox(path, format!("cannot create directory: {}", e)))?;
    }
    let yaml = serde_yaml::to_string(&entries)
        .map_err(|e| Error::outbox(path, format!("cannot serialize: {}", e)))?;
    atomic_write(path, &yaml)?;

    info!(
        action = %entry.submission.action,
        queued = entries.len(),
        "report submission queued"
    );
    Ok(entry)
}

pub fn clear_outbox(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| Error::outbox(path, format!("cannot clear: {}", e)))?;
    }
    Ok(())
}

fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)
        .map_err(|e| Error::outbox(path, format!("cannot write {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, path).map_err(|e| Error::outbox(path, format!("cannot rename: {}", e)))?;
    Ok(())
}
