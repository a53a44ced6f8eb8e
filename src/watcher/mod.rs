use crate::attention::{
    dispatch_notifications, viewed_workflow_id, AttentionTracker, NotificationSink, NullSink,
    WorkflowSummary,
};
use crate::config::Settings;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub mod logging;
pub mod source;

pub use logging::{append_watcher_log_line, watcher_log_path};
pub use source::FileWorkflowSource;

#[derive(Debug, thiserror::Error)]
pub enum WatcherError {
    #[error("failed to read workflow state {path}: {source}")]
    ReadState {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid workflow state in {path}: {source}")]
    ParseState {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the current active-workflow list comes from. `Ok(None)` means the
/// source had nothing to report this tick, which the watcher treats the same
/// as an empty list.
pub trait WorkflowSource {
    fn fetch_active(&self) -> Result<Option<Vec<WorkflowSummary>>, WatcherError>;
}

/// Where the user currently is, as a navigation path string.
pub trait LocationSource {
    fn current_path(&self) -> Option<String>;
}

/// Location that never changes, used when the viewed path is supplied up
/// front (CLI flags, tests).
#[derive(Debug, Clone, Default)]
pub struct StaticLocation {
    path: Option<String>,
}

impl StaticLocation {
    pub fn new(path: Option<String>) -> Self {
        Self { path }
    }
}

impl LocationSource for StaticLocation {
    fn current_path(&self) -> Option<String> {
        self.path.clone()
    }
}

/// Run one poll tick end to end: fetch the active list, work out which
/// workflow is being viewed, evaluate the tracker, and dispatch whatever it
/// produced. Returns the number of notifications dispatched. When a state
/// root is given, each dispatched notification is also logged there.
pub fn watch_once(
    tracker: &mut AttentionTracker,
    source: &dyn WorkflowSource,
    location: &dyn LocationSource,
    sink: &mut dyn NotificationSink,
    state_root: Option<&Path>,
) -> Result<usize, WatcherError> {
    let summaries = source.fetch_active()?.unwrap_or_default();
    let viewed = location
        .current_path()
        .as_deref()
        .and_then(viewed_workflow_id);
    let notifications = tracker.tick(&summaries, viewed);
    dispatch_notifications(sink, &notifications);
    if let Some(root) = state_root {
        for notification in &notifications {
            let _ = append_watcher_log_line(
                root,
                &format!(
                    "notified workflow {} severity={} title={}",
                    notification.workflow_id, notification.severity, notification.title
                ),
            );
        }
    }
    Ok(notifications.len())
}

fn sleep_with_stop(stop: &AtomicBool, total: Duration) -> bool {
    let mut remaining = total;
    while remaining > Duration::from_millis(0) {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        let step = remaining.min(Duration::from_millis(50));
        thread::sleep(step);
        remaining = remaining.saturating_sub(step);
    }
    !stop.load(Ordering::Relaxed)
}

/// Handle for a background watcher thread.
pub struct WatcherWorker {
    stop: Arc<AtomicBool>,
    handle: thread::JoinHandle<()>,
}

impl WatcherWorker {
    /// Signal the worker to stop and wait for its thread to finish.
    pub fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.handle.join();
    }
}

/// Spawn a thread that ticks the tracker on the configured interval until
/// stopped. Tick failures are logged under the state root and do not stop
/// the worker. When notifications are disabled in settings the tracker still
/// runs so its snapshots stay current, but nothing reaches the sink.
pub fn spawn_watcher_worker(
    settings: Settings,
    source: impl WorkflowSource + Send + 'static,
    location: impl LocationSource + Send + 'static,
    sink: impl NotificationSink + Send + 'static,
) -> WatcherWorker {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_thread = Arc::clone(&stop);
    let handle = thread::spawn(move || {
        let mut tracker = AttentionTracker::new();
        let mut sink: Box<dyn NotificationSink + Send> = if settings.notifications_enabled {
            Box::new(sink)
        } else {
            Box::new(NullSink)
        };
        let interval = settings.poll_interval();
        loop {
            if stop_thread.load(Ordering::Relaxed) {
                break;
            }
            if let Err(err) = watch_once(
                &mut tracker,
                &source,
                &location,
                sink.as_mut(),
                Some(&settings.state_root),
            ) {
                let _ = append_watcher_log_line(
                    &settings.state_root,
                    &format!("watch tick failed: {err}"),
                );
            }
            if !sleep_with_stop(&stop_thread, interval) {
                break;
            }
        }
    });
    WatcherWorker { stop, handle }
}
