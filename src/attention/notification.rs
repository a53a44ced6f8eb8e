use crate::attention::summary::WorkflowSummary;
use crate::attention::transitions::AttentionReason;

pub const GO_TO_WORKFLOW_LABEL: &str = "Go to Workflow";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The "Go to Workflow" affordance attached to every attention notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationAction {
    pub label: String,
    pub path: String,
}

/// One attention notification, ready for an external sink. `persistent`
/// means the sink must not auto-dismiss it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub workflow_id: u64,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub action: NavigationAction,
    pub persistent: bool,
}

impl Notification {
    pub fn for_transition(summary: &WorkflowSummary, reason: AttentionReason) -> Self {
        let (severity, title, description) = match reason {
            AttentionReason::AwaitingInput => (
                Severity::Warning,
                "Awaiting Your Input".to_string(),
                format!(
                    "\"{}\" needs your input before it can continue.",
                    summary.feature_name
                ),
            ),
            AttentionReason::AutoPaused { step } => (
                Severity::Info,
                "Workflow Paused".to_string(),
                format!(
                    "\"{}\" paused after completing step {step}.",
                    summary.feature_name
                ),
            ),
        };
        Self {
            workflow_id: summary.id,
            severity,
            title,
            description,
            action: NavigationAction {
                label: GO_TO_WORKFLOW_LABEL.to_string(),
                path: summary.detail_path(),
            },
            persistent: true,
        }
    }
}

/// Effectful boundary toward whatever surfaces notifications to the user.
/// The tracker itself never calls a sink; dispatch is a separate step so the
/// transition rules stay testable against recorded output.
pub trait NotificationSink {
    fn warning(&mut self, notification: &Notification);
    fn info(&mut self, notification: &Notification);
}

/// Route notifications to the sink channel matching their severity.
pub fn dispatch_notifications(sink: &mut dyn NotificationSink, notifications: &[Notification]) {
    for notification in notifications {
        match notification.severity {
            Severity::Warning => sink.warning(notification),
            Severity::Info => sink.info(notification),
        }
    }
}

/// Sink that drops everything, used when notifications are disabled but the
/// tracker should keep its snapshots current.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn warning(&mut self, _notification: &Notification) {}

    fn info(&mut self, _notification: &Notification) {}
}
