use crate::attention::{
    AttentionTracker, Notification, NotificationSink, NullSink, PauseBehavior, WorkflowStatus,
    WorkflowSummary,
};
use crate::config::Settings;
use crate::watcher::{
    watch_once, FileWorkflowSource, StaticLocation, WatcherError, WorkflowSource,
};
use std::path::{Path, PathBuf};
use std::thread;

const USAGE: &str = "Usage:\n  attendant watch --config <path> [--once] [--viewing <path>]\n  attendant check <state-file> [--viewing <path>]\n  attendant status <state-file>\n  attendant help";

/// Sink for interactive runs: warnings to stderr, informational
/// notifications to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    fn render(notification: &Notification) -> String {
        format!(
            "[{}] {}: {} ({} -> {})",
            notification.severity,
            notification.title,
            notification.description,
            notification.action.label,
            notification.action.path
        )
    }
}

impl NotificationSink for ConsoleSink {
    fn warning(&mut self, notification: &Notification) {
        eprintln!("{}", Self::render(notification));
    }

    fn info(&mut self, notification: &Notification) {
        println!("{}", Self::render(notification));
    }
}

/// Sink that keeps rendered notification lines for command output.
#[derive(Debug, Default)]
struct CollectingSink {
    lines: Vec<String>,
}

impl NotificationSink for CollectingSink {
    fn warning(&mut self, notification: &Notification) {
        self.lines.push(ConsoleSink::render(notification));
    }

    fn info(&mut self, notification: &Notification) {
        self.lines.push(ConsoleSink::render(notification));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOptions {
    pub config_path: PathBuf,
    pub once: bool,
    pub viewing: Option<String>,
}

pub fn parse_watch_args(args: &[String]) -> Result<WatchOptions, String> {
    let mut config_path = None;
    let mut once = false;
    let mut viewing = None;
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--config" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| "--config requires a path".to_string())?;
                config_path = Some(PathBuf::from(value));
            }
            "--once" => once = true,
            "--viewing" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| "--viewing requires a path".to_string())?;
                viewing = Some(value.clone());
            }
            other => return Err(format!("unknown watch argument `{other}`")),
        }
        index += 1;
    }
    Ok(WatchOptions {
        config_path: config_path.ok_or_else(|| "watch requires --config <path>".to_string())?,
        once,
        viewing,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub state_file: PathBuf,
    pub viewing: Option<String>,
}

pub fn parse_check_args(args: &[String]) -> Result<CheckOptions, String> {
    let mut state_file = None;
    let mut viewing = None;
    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--viewing" => {
                index += 1;
                let value = args
                    .get(index)
                    .ok_or_else(|| "--viewing requires a path".to_string())?;
                viewing = Some(value.clone());
            }
            other if state_file.is_none() && !other.starts_with("--") => {
                state_file = Some(PathBuf::from(other));
            }
            other => return Err(format!("unknown check argument `{other}`")),
        }
        index += 1;
    }
    Ok(CheckOptions {
        state_file: state_file
            .ok_or_else(|| "check requires a state file path".to_string())?,
        viewing,
    })
}

/// Run a single tracker tick against an explicit state file, without any
/// settings file. A fresh tracker never classifies on first observation, so
/// this is a plumbing check for the state file and viewing path wiring.
fn run_check(options: &CheckOptions) -> Result<String, String> {
    let source = FileWorkflowSource::new(&options.state_file);
    let location = StaticLocation::new(options.viewing.clone());
    let mut tracker = AttentionTracker::new();
    let mut sink = CollectingSink::default();
    watch_once(&mut tracker, &source, &location, &mut sink, None)
        .map_err(|err| err.to_string())?;
    if sink.lines.is_empty() {
        return Ok(format!(
            "no attention required ({} workflow(s) tracked)",
            tracker.tracked_count()
        ));
    }
    Ok(sink.lines.join("\n"))
}

fn status_line(summary: &WorkflowSummary) -> String {
    let mut line = format!(
        "{} {} step {} \"{}\"",
        summary.id,
        summary.status,
        summary.step_number(),
        summary.feature_name
    );
    if summary.pause_behavior == PauseBehavior::AutoPause {
        line.push_str(" [auto_pause]");
    }
    if summary.status == WorkflowStatus::AwaitingInput {
        line.push_str(" <- needs your input");
    }
    line
}

fn run_status(state_file: &Path) -> Result<String, String> {
    let source = FileWorkflowSource::new(state_file);
    let summaries = source
        .fetch_active()
        .map_err(|err| err.to_string())?
        .unwrap_or_default();
    if summaries.is_empty() {
        return Ok("no active workflows".to_string());
    }
    Ok(summaries
        .iter()
        .map(status_line)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn run_watch(options: &WatchOptions) -> Result<String, String> {
    let settings = Settings::from_path(&options.config_path).map_err(|err| err.to_string())?;
    let source = FileWorkflowSource::new(settings.state_file_path());
    let location = StaticLocation::new(options.viewing.clone());
    let mut sink: Box<dyn NotificationSink> = if settings.notifications_enabled {
        Box::new(ConsoleSink)
    } else {
        Box::new(NullSink)
    };
    let mut tracker = AttentionTracker::new();

    let tick = |tracker: &mut AttentionTracker,
                sink: &mut dyn NotificationSink|
     -> Result<usize, WatcherError> {
        watch_once(tracker, &source, &location, sink, Some(&settings.state_root))
    };

    if options.once {
        let dispatched = tick(&mut tracker, sink.as_mut()).map_err(|err| err.to_string())?;
        let muted = if settings.notifications_enabled {
            ""
        } else {
            " (notifications disabled)"
        };
        return Ok(format!(
            "watched once: {dispatched} notification(s){muted}, {} workflow(s) tracked",
            tracker.tracked_count()
        ));
    }

    // Foreground loop; runs until the process is terminated.
    loop {
        if let Err(err) = tick(&mut tracker, sink.as_mut()) {
            eprintln!("watch tick failed: {err}");
        }
        thread::sleep(settings.poll_interval());
    }
}

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    match args.first().map(String::as_str) {
        None | Some("help") | Some("--help") => Ok(USAGE.to_string()),
        Some("status") => {
            let state_file = args
                .get(1)
                .ok_or_else(|| "status requires a state file path".to_string())?;
            run_status(Path::new(state_file))
        }
        Some("watch") => {
            let options = parse_watch_args(&args[1..])?;
            run_watch(&options)
        }
        Some("check") => {
            let options = parse_check_args(&args[1..])?;
            run_check(&options)
        }
        Some(other) => Err(format!("unknown command `{other}`\n{USAGE}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg_vec(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn watch_args_require_config() {
        assert!(parse_watch_args(&arg_vec(&["--once"])).is_err());
    }

    #[test]
    fn watch_args_parse_all_flags() {
        let options = parse_watch_args(&arg_vec(&[
            "--config",
            "settings.yaml",
            "--once",
            "--viewing",
            "/workflows/3",
        ]))
        .expect("options");
        assert_eq!(options.config_path, PathBuf::from("settings.yaml"));
        assert!(options.once);
        assert_eq!(options.viewing.as_deref(), Some("/workflows/3"));
    }

    #[test]
    fn unknown_watch_flag_is_rejected() {
        let err = parse_watch_args(&arg_vec(&["--config", "a", "--loud"])).unwrap_err();
        assert!(err.contains("--loud"));
    }

    #[test]
    fn check_args_require_a_state_file() {
        assert!(parse_check_args(&[]).is_err());
        assert!(parse_check_args(&arg_vec(&["--viewing", "/workflows/1"])).is_err());
    }

    #[test]
    fn check_args_parse_state_file_and_viewing() {
        let options = parse_check_args(&arg_vec(&[
            "workflows.json",
            "--viewing",
            "/workflows/9",
        ]))
        .expect("options");
        assert_eq!(options.state_file, PathBuf::from("workflows.json"));
        assert_eq!(options.viewing.as_deref(), Some("/workflows/9"));
    }

    #[test]
    fn unknown_check_flag_is_rejected() {
        let err = parse_check_args(&arg_vec(&["workflows.json", "--tab"])).unwrap_err();
        assert!(err.contains("--tab"));
    }
}
