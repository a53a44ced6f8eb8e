pub mod navigation;
pub mod notification;
pub mod summary;
pub mod tracker;
pub mod transitions;

pub use navigation::viewed_workflow_id;
pub use notification::{
    dispatch_notifications, NavigationAction, Notification, NotificationSink, NullSink, Severity,
};
pub use summary::{PauseBehavior, WorkflowSnapshot, WorkflowStatus, WorkflowSummary};
pub use tracker::AttentionTracker;
pub use transitions::{classify_transition, AttentionReason};
