use serde::{Deserialize, Serialize};

/// Lifecycle states reported by the external workflow orchestrator. The set
/// is owned by that system; this crate only inspects a handful of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Created,
    Running,
    Paused,
    AwaitingInput,
    Completed,
    Failed,
    Cancelled,
    Editing,
}

impl WorkflowStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::AwaitingInput => "awaiting_input",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Editing => "editing",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a workflow halts on its own after each completed step. Any value
/// other than `auto_pause` carries no meaning for attention tracking, so
/// unrecognized strings collapse to `Manual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseBehavior {
    AutoPause,
    #[serde(other)]
    Manual,
}

impl Default for PauseBehavior {
    fn default() -> Self {
        Self::Manual
    }
}

/// One workflow's externally observed state, as delivered by the polled
/// active-workflow list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSummary {
    pub id: u64,
    pub status: WorkflowStatus,
    #[serde(default)]
    pub current_step_number: Option<u32>,
    #[serde(default)]
    pub pause_behavior: PauseBehavior,
    pub feature_name: String,
}

impl WorkflowSummary {
    /// Step number with the absent case collapsed to zero, the form used for
    /// all step comparisons.
    pub fn step_number(&self) -> u32 {
        self.current_step_number.unwrap_or(0)
    }

    pub fn detail_path(&self) -> String {
        format!("/workflows/{}", self.id)
    }
}

/// Last-seen state for one workflow id, the only memory the tracker keeps
/// between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowSnapshot {
    pub status: WorkflowStatus,
    pub current_step_number: u32,
}

impl WorkflowSnapshot {
    pub fn observed(summary: &WorkflowSummary) -> Self {
        Self {
            status: summary.status,
            current_step_number: summary.step_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_parses_orchestrator_json() {
        let summary: WorkflowSummary = serde_json::from_str(
            r#"{
                "id": 7,
                "status": "awaiting_input",
                "currentStepNumber": 3,
                "pauseBehavior": "auto_pause",
                "featureName": "Billing revamp"
            }"#,
        )
        .expect("summary");
        assert_eq!(summary.status, WorkflowStatus::AwaitingInput);
        assert_eq!(summary.step_number(), 3);
        assert_eq!(summary.pause_behavior, PauseBehavior::AutoPause);
        assert_eq!(summary.detail_path(), "/workflows/7");
    }

    #[test]
    fn missing_step_and_unknown_pause_behavior_use_defaults() {
        let summary: WorkflowSummary = serde_json::from_str(
            r#"{"id": 1, "status": "running", "pauseBehavior": "until_review", "featureName": "X"}"#,
        )
        .expect("summary");
        assert_eq!(summary.step_number(), 0);
        assert_eq!(summary.pause_behavior, PauseBehavior::Manual);
    }

    #[test]
    fn terminal_statuses() {
        assert!(WorkflowStatus::Completed.is_terminal());
        assert!(WorkflowStatus::Cancelled.is_terminal());
        assert!(!WorkflowStatus::AwaitingInput.is_terminal());
    }
}
