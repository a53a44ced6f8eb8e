use attendant::attention::{
    dispatch_notifications, AttentionReason, Notification, NotificationSink, PauseBehavior,
    Severity, WorkflowStatus, WorkflowSummary,
};

fn summary() -> WorkflowSummary {
    WorkflowSummary {
        id: 11,
        status: WorkflowStatus::AwaitingInput,
        current_step_number: Some(4),
        pause_behavior: PauseBehavior::AutoPause,
        feature_name: "Payment reconciliation".to_string(),
    }
}

#[derive(Default)]
struct RecordingSink {
    warnings: Vec<Notification>,
    infos: Vec<Notification>,
}

impl NotificationSink for RecordingSink {
    fn warning(&mut self, notification: &Notification) {
        self.warnings.push(notification.clone());
    }

    fn info(&mut self, notification: &Notification) {
        self.infos.push(notification.clone());
    }
}

#[test]
fn awaiting_input_notification_payload() {
    let notification = Notification::for_transition(&summary(), AttentionReason::AwaitingInput);
    assert_eq!(notification.workflow_id, 11);
    assert_eq!(notification.severity, Severity::Warning);
    assert_eq!(notification.title, "Awaiting Your Input");
    assert!(notification.description.contains("Payment reconciliation"));
    assert_eq!(notification.action.label, "Go to Workflow");
    assert_eq!(notification.action.path, "/workflows/11");
    assert!(notification.persistent);
}

#[test]
fn auto_pause_notification_payload() {
    let notification =
        Notification::for_transition(&summary(), AttentionReason::AutoPaused { step: 4 });
    assert_eq!(notification.severity, Severity::Info);
    assert_eq!(notification.title, "Workflow Paused");
    assert!(notification.description.contains("step 4"));
    assert!(notification.description.contains("Payment reconciliation"));
    assert!(notification.persistent);
}

#[test]
fn dispatch_routes_by_severity() {
    let warning = Notification::for_transition(&summary(), AttentionReason::AwaitingInput);
    let info = Notification::for_transition(&summary(), AttentionReason::AutoPaused { step: 4 });
    let mut sink = RecordingSink::default();

    dispatch_notifications(&mut sink, &[warning.clone(), info.clone()]);

    assert_eq!(sink.warnings, vec![warning]);
    assert_eq!(sink.infos, vec![info]);
}
