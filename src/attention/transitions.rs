use crate::attention::summary::{PauseBehavior, WorkflowSnapshot, WorkflowStatus, WorkflowSummary};

/// A transition that warrants pulling the user back to a workflow. Classified
/// purely from the previous snapshot and the current summary; emitting a
/// notification for it is the tracker's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttentionReason {
    /// The workflow just started blocking on a clarification answer.
    AwaitingInput,
    /// The workflow completed a step and halted under `auto_pause`.
    AutoPaused { step: u32 },
}

impl AttentionReason {
    /// Key guarding one-shot delivery. Pause keys embed the step number so a
    /// later auto-pause at a further step notifies again; the leading id
    /// segment is what garbage collection parses back out.
    pub fn dedupe_key(self, workflow_id: u64) -> String {
        match self {
            Self::AwaitingInput => format!("{workflow_id}:awaiting_input"),
            Self::AutoPaused { step } => format!("{workflow_id}:paused:{step}"),
        }
    }
}

/// Classify the attention transition for one workflow, if any.
///
/// A workflow seen for the first time never classifies: only a change into an
/// attention state counts, not presence on first sight. The auto-pause rule
/// additionally requires strict step advancement, which separates "completed
/// a step, then halted" from a user pausing mid-step.
pub fn classify_transition(
    previous: Option<&WorkflowSnapshot>,
    current: &WorkflowSummary,
) -> Option<AttentionReason> {
    let previous = previous?;
    match current.status {
        WorkflowStatus::AwaitingInput if previous.status != WorkflowStatus::AwaitingInput => {
            Some(AttentionReason::AwaitingInput)
        }
        WorkflowStatus::Paused
            if current.pause_behavior == PauseBehavior::AutoPause
                && previous.status != WorkflowStatus::Paused
                && current.step_number() > previous.current_step_number =>
        {
            Some(AttentionReason::AutoPaused {
                step: current.step_number(),
            })
        }
        _ => None,
    }
}
