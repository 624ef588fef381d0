use crate::{LogLayout, Result};
use chrono::{DateTime, Local};
use mhist_types::{Record, RecordKind};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Append one record per item to this host's monthly log.
///
/// Items naming an existing path are recorded as `local`, keeping only the
/// last two segments of the canonical path; everything else is recorded as
/// `remote`, verbatim. All items of one call share the same timestamp.
///
/// The host directory is created on first write. Appends take no lock:
/// single-line writes are assumed atomic enough for one user's history.
///
/// Returns the records as written.
pub fn append_records(
    layout: &LogLayout,
    hostname: &str,
    items: &[String],
    now: DateTime<Local>,
) -> Result<Vec<Record>> {
    let host_dir = layout.host_dir(hostname);
    fs::create_dir_all(&host_dir)?;

    let month_file = layout.month_file(hostname, &now.format("%Y-%m").to_string());
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&month_file)?;

    let timestamp = now.timestamp_micros() as f64 / 1_000_000.0;

    let mut written = Vec::with_capacity(items.len());
    for item in items {
        let record = classify(item, timestamp)?;
        writeln!(file, "{}", record.to_line())?;
        written.push(record);
    }

    Ok(written)
}

/// An existing path is a local file; anything else is assumed to be a
/// remote link.
fn classify(item: &str, timestamp: f64) -> Result<Record> {
    let path = Path::new(item);
    if path.exists() {
        let resolved = path.canonicalize()?;
        Ok(Record {
            timestamp,
            kind: RecordKind::Local,
            item: path_tail(&resolved),
        })
    } else {
        Ok(Record {
            timestamp,
            kind: RecordKind::Remote,
            item: item.to_string(),
        })
    }
}

/// The last two `/`-separated segments of an absolute path, joined back
/// with `/`. Enough to tell entries apart without leaking the whole tree
/// into the log.
fn path_tail(resolved: &Path) -> String {
    let full = resolved.to_string_lossy();
    let segments: Vec<&str> = full.split('/').collect();
    let start = segments.len().saturating_sub(2);
    segments[start..].join("/")
}
