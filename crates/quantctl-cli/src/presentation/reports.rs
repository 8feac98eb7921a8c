use chrono::{DateTime, Local};

use quantctl_core::{ProcessInfo, StartReport, StatusReport, StopReport, Termination, TrackedState};

/// Local wall-clock rendering of a Unix start timestamp.
pub fn format_started_at(secs: u64) -> Option<String> {
    let secs = i64::try_from(secs).ok()?;
    DateTime::from_timestamp(secs, 0)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
}

fn describe_process(process: &ProcessInfo) -> String {
    let command = if process.command.is_empty() {
        process.name.as_str()
    } else {
        process.command.as_str()
    };
    match process.started_at.and_then(format_started_at) {
        Some(started) => format!("PID {} ({command}), started {started}", process.pid),
        None => format!("PID {} ({command})", process.pid),
    }
}

fn termination_line(pid: u32, termination: Termination) -> String {
    match termination {
        Termination::Graceful => format!("Process {pid} stopped"),
        Termination::Forced => {
            format!("Process {pid} ignored SIGTERM and was killed with SIGKILL")
        }
        Termination::AlreadyExited => format!("Process {pid} had already exited"),
    }
}

pub fn start_lines(report: &StartReport) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(stale) = report.replaced_stale {
        lines.push(format!("Removed stale PID file (process {stale} was not running)"));
    }
    lines.push(format!("Started process with PID {}", report.pid));
    lines.push(format!("PID file: {}", report.pid_file.display()));
    lines.push(format!("Logging to {}", report.log_path.display()));
    lines
}

/// Lines describing a stop. `pattern` is only shown for name-based outcomes.
pub fn stop_lines(report: &StopReport, pattern: &str) -> Vec<String> {
    match report {
        StopReport::Stopped { pid, termination } => {
            vec![termination_line(*pid, *termination), "PID file removed".to_string()]
        }
        StopReport::StalePidFile { pid } => vec![format!(
            "Process {pid} not found, removed stale PID file"
        )],
        StopReport::EmptyPidFile => vec![
            "PID file was empty and has been removed".to_string(),
            "Check manually whether the program is still running".to_string(),
        ],
        StopReport::InvalidPidFile { contents } => vec![
            format!("PID file did not contain a process id ({contents:?}) and has been removed"),
            "Check manually whether the program is still running".to_string(),
        ],
        StopReport::StoppedByName { stopped, failed } => {
            let mut lines = vec![format!(
                "No PID file, stopping processes matching \"{pattern}\""
            )];
            lines.extend(stopped.iter().map(|(pid, t)| termination_line(*pid, *t)));
            lines.extend(
                failed
                    .iter()
                    .map(|(pid, reason)| format!("Failed to stop process {pid}: {reason}")),
            );
            lines
        }
        StopReport::NothingRunning => vec![format!(
            "No PID file and no process matching \"{pattern}\" is running"
        )],
    }
}

pub fn status_lines(report: &StatusReport) -> Vec<String> {
    match &report.state {
        TrackedState::Running { process } => {
            vec![format!("Running: {}", describe_process(process))]
        }
        TrackedState::Stale { pid } => vec![
            "Not running".to_string(),
            format!(
                "Stale PID file {} names process {pid}, which is gone or unrelated",
                report.pid_file.display()
            ),
        ],
        TrackedState::Empty => vec![format!("PID file {} is empty", report.pid_file.display())],
        TrackedState::Invalid { contents } => vec![format!(
            "PID file {} does not contain a process id: {contents:?}",
            report.pid_file.display()
        )],
        TrackedState::NotRunning { untracked } if untracked.is_empty() => {
            vec!["Not running".to_string()]
        }
        TrackedState::NotRunning { untracked } => {
            let mut lines = vec![format!(
                "Not tracked, but {} process(es) match \"{}\":",
                untracked.len(),
                report.pattern
            )];
            lines.extend(untracked.iter().map(|p| format!("  {}", describe_process(p))));
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn start_mentions_replaced_stale_file_first() {
        let report = StartReport {
            pid: 321,
            log_path: PathBuf::from("/w/logs/trade.20250101_000000.log"),
            pid_file: PathBuf::from("/w/quant.pid"),
            replaced_stale: Some(99),
        };
        let lines = start_lines(&report);
        assert!(lines[0].contains("99"));
        assert!(lines.iter().any(|l| l == "Started process with PID 321"));
        assert!(lines.last().unwrap().ends_with("trade.20250101_000000.log"));
    }

    #[test]
    fn forced_stop_is_called_out() {
        let lines = stop_lines(
            &StopReport::Stopped {
                pid: 5,
                termination: Termination::Forced,
            },
            "main.py",
        );
        assert!(lines[0].contains("SIGKILL"));
    }

    #[test]
    fn empty_pid_file_asks_for_manual_check() {
        let lines = stop_lines(&StopReport::EmptyPidFile, "main.py");
        assert!(lines.iter().any(|l| l.contains("Check manually")));
    }

    #[test]
    fn name_based_stop_lists_each_pid() {
        let lines = stop_lines(
            &StopReport::StoppedByName {
                stopped: vec![(10, Termination::Graceful)],
                failed: vec![(11, "Failed to stop: timed out".into())],
            },
            "main.py",
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("\"main.py\""));
        assert!(lines[2].starts_with("Failed to stop process 11"));
    }

    #[test]
    fn status_lists_untracked_matches() {
        let report = StatusReport {
            pid_file: PathBuf::from("/w/quant.pid"),
            pattern: "main.py".into(),
            state: TrackedState::NotRunning {
                untracked: vec![ProcessInfo::new(42, "python", "python main.py")],
            },
        };
        let lines = status_lines(&report);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "  PID 42 (python main.py)");
    }

    #[test]
    fn started_at_handles_out_of_range_values() {
        assert!(format_started_at(0).is_some());
        assert!(format_started_at(u64::MAX).is_none());
    }
}
