use crate::{LogLayout, Result};
use mhist_types::Record;
use std::fs;
use walkdir::WalkDir;

/// Load the complete history under `layout`.
///
/// The optional pre-merged initial records come first, order preserved as
/// stored. Every per-host monthly file is then read, and that combined
/// sequence is sorted by timestamp: each monthly file is already
/// time-ordered on its own, so one stable sort after concatenation restores
/// global order across hosts.
///
/// The initial records are trusted to be pre-sorted and strictly older than
/// the per-host data; they are not merged timestamp-wise with it.
///
/// A missing initial-records file or per-host tree contributes zero
/// records. An unreadable file or a malformed line is fatal.
pub fn load_all(layout: &LogLayout) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    let initial = layout.initial_records_path();
    if initial.exists() {
        parse_into(&fs::read_to_string(&initial)?, &mut records)?;
    }

    let per_host_root = layout.per_host_root();
    let mut per_host = Vec::new();
    if per_host_root.is_dir() {
        // Exactly <host>/<month>; nothing else lives under per-host.
        for entry in WalkDir::new(&per_host_root).min_depth(2).max_depth(2) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            parse_into(&fs::read_to_string(entry.path())?, &mut per_host)?;
        }
    }

    per_host.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    records.extend(per_host);
    Ok(records)
}

fn parse_into(content: &str, out: &mut Vec<Record>) -> Result<()> {
    for line in content.lines() {
        out.push(Record::parse(line)?);
    }
    Ok(())
}
