//! Process table queries backed by `sysinfo`.

use sysinfo::{Pid, Process, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System};

use quantctl_core::{Identity, ProcessInfo};

/// Load a fresh view of `which` processes including command lines.
fn snapshot(which: ProcessesToUpdate<'_>) -> System {
    let mut system = System::new();
    system.refresh_processes_specifics(which, true, ProcessRefreshKind::everything());
    system
}

fn is_defunct(process: &Process) -> bool {
    matches!(process.status(), ProcessStatus::Zombie | ProcessStatus::Dead)
}

fn describe(pid: Pid, process: &Process) -> ProcessInfo {
    let command = process
        .cmd()
        .iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");

    ProcessInfo::new(pid.as_u32(), process.name().to_string_lossy(), command)
        .with_started_at(process.start_time())
}

/// Look up a single live process. Zombies are reported as gone.
pub fn lookup(pid: u32) -> Option<ProcessInfo> {
    let pid = Pid::from_u32(pid);
    let system = snapshot(ProcessesToUpdate::Some(&[pid]));
    let process = system.process(pid)?;

    if is_defunct(process) {
        return None;
    }

    Some(describe(pid, process))
}

/// Whether the OS still lists `pid` as something other than a zombie.
pub fn is_listed_and_running(pid: u32) -> bool {
    let pid = Pid::from_u32(pid);
    let system = snapshot(ProcessesToUpdate::Some(&[pid]));
    system.process(pid).is_some_and(|p| !is_defunct(p))
}

/// Find live processes whose command line contains `pattern`.
///
/// Skips threads, zombies, the calling process and its parent (the shell or
/// wrapper that invoked us usually carries the pattern in its own arguments).
pub fn find_matching(pattern: &str) -> Vec<ProcessInfo> {
    let system = snapshot(ProcessesToUpdate::All);

    let own_pid = Pid::from_u32(std::process::id());
    let parent_pid = system.process(own_pid).and_then(Process::parent);

    let mut matches: Vec<ProcessInfo> = system
        .processes()
        .iter()
        .filter(|(pid, _)| **pid != own_pid && Some(**pid) != parent_pid)
        .filter(|(_, process)| process.thread_kind().is_none() && !is_defunct(process))
        .map(|(pid, process)| describe(*pid, process))
        .filter(|info| info.identity(pattern) == Identity::Matches)
        .collect();

    matches.sort_by_key(|info| info.pid);
    matches
}
