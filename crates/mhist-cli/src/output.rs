use chrono::{DateTime, Local};
use mhist_types::{Record, RecordKind};
use owo_colors::OwoColorize;

/// Render one record for terminal display.
///
/// The distinguishing suffix is highlighted: the basename for local files,
/// the whole item for remote links and for legacy entries that carry no
/// parent directory.
pub fn format_record(record: &Record, color: bool) -> String {
    let prefix = format!("[{}] ", local_date(record.timestamp));

    match (record.kind, record.item.rsplit_once('/')) {
        (RecordKind::Local, Some((parent, basename))) => {
            format!("{}{}/{}", prefix, parent, highlight(basename, color))
        }
        _ => format!("{}{}", prefix, highlight(&record.item, color)),
    }
}

fn highlight(text: &str, color: bool) -> String {
    if color {
        text.yellow().bold().to_string()
    } else {
        text.to_string()
    }
}

fn local_date(timestamp: f64) -> String {
    let secs = timestamp.trunc() as i64;
    let nanos = (timestamp.fract() * 1_000_000_000.0) as u32;

    DateTime::from_timestamp(secs, nanos)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
