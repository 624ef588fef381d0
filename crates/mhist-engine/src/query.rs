use crate::fuzzy::partial_ratio;
use mhist_types::Record;

/// Selection mode, decided once at the CLI boundary.
#[derive(Debug, Clone)]
pub enum Query {
    /// Most recent records, no filtering.
    Last,
    /// Accept items whose partial ratio against `pattern` reaches
    /// `threshold`, case-insensitive.
    Fuzzy { pattern: String, threshold: u32 },
    /// Accept items containing every space-separated word of `words`, in
    /// any order, case-insensitive.
    WithWords { words: String },
}

/// Run `query` over `records`, returning matches newest first.
///
/// `records` is expected in ascending time order, as produced by the
/// loader. `limit == 0` means unbounded. Fuzzy and word matches are emitted
/// in scan order (newest to oldest), never re-sorted by score.
pub fn run<'a>(records: &'a [Record], query: &Query, limit: usize) -> Vec<&'a Record> {
    match query {
        Query::Last => {
            let tail = if limit == 0 || limit >= records.len() {
                records
            } else {
                &records[records.len() - limit..]
            };
            tail.iter().rev().collect()
        }

        Query::Fuzzy { pattern, threshold } => {
            let pattern = pattern.to_lowercase();
            scan(records, limit, |item| {
                partial_ratio(&pattern, &item.to_lowercase()) >= *threshold
            })
        }

        Query::WithWords { words } => {
            let words = words.to_lowercase();
            let words: Vec<&str> = words.split(' ').collect();
            scan(records, limit, |item| {
                let item = item.to_lowercase();
                words.iter().all(|word| item.contains(word))
            })
        }
    }
}

/// Newest-to-oldest scan, stopping as soon as `limit` records are accepted.
fn scan<'a>(
    records: &'a [Record],
    limit: usize,
    mut accept: impl FnMut(&str) -> bool,
) -> Vec<&'a Record> {
    let mut matched = Vec::new();
    for record in records.iter().rev() {
        if limit > 0 && matched.len() == limit {
            break;
        }
        if accept(&record.item) {
            matched.push(record);
        }
    }
    matched
}
