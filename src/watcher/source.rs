use crate::attention::WorkflowSummary;
use crate::watcher::{WatcherError, WorkflowSource};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Workflow source backed by a JSON state file that the external
/// orchestrator rewrites as workflows progress. A missing file means the
/// orchestrator has published nothing yet and is not an error.
#[derive(Debug, Clone)]
pub struct FileWorkflowSource {
    path: PathBuf,
}

impl FileWorkflowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WorkflowSource for FileWorkflowSource {
    fn fetch_active(&self) -> Result<Option<Vec<WorkflowSummary>>, WatcherError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(WatcherError::ReadState {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        };
        let summaries =
            serde_json::from_str(&raw).map_err(|source| WatcherError::ParseState {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(Some(summaries))
    }
}
