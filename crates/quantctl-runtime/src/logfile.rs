//! Log files for the supervised program's stdout and stderr.
//!
//! Each launch writes to a new `<base>.<YYYYMMDD_HHMMSS>.log` under the logs
//! directory. The timestamp format sorts lexicographically, so the newest
//! log is the greatest file name.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name for a log started at `at`.
pub fn log_file_name(base: &str, at: DateTime<Local>) -> String {
    format!("{base}.{}.log", at.format(TIMESTAMP_FORMAT))
}

/// Create (or append to) the log file for a launch happening now.
pub fn open_log_file(dir: &Path, base: &str) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(log_file_name(base, Local::now()));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

fn is_log_for(name: &str, base: &str) -> bool {
    name.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('.'))
        .and_then(|rest| rest.strip_suffix(".log"))
        .is_some_and(|stamp| !stamp.is_empty())
}

/// Newest log file for `base` in `dir`, if any.
pub fn latest_log(dir: &Path, base: &str) -> io::Result<Option<PathBuf>> {
    if !dir.exists() {
        return Ok(None);
    }

    let mut newest: Option<(String, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !is_log_for(&name, base) || !entry.path().is_file() {
            continue;
        }
        if newest.as_ref().is_none_or(|(best, _)| name > *best) {
            newest = Some((name, entry.path()));
        }
    }

    Ok(newest.map(|(_, path)| path))
}

/// Last `lines` lines of the file at `path`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn tail(path: &Path, lines: usize) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut ring: VecDeque<String> = VecDeque::with_capacity(lines.min(1024));

    if lines == 0 {
        return Ok(Vec::new());
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        if ring.len() == lines {
            ring.pop_front();
        }
        ring.push_back(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(ring.into_iter().collect())
}
