// NOTE: mhist architecture
//
// Why plain text (not a database)?
// - One line per record, appended at playback time, is trivially durable
//   and diffable; the whole history fits in memory at query time
// - Per-host monthly files mean concurrent hosts never write to the same
//   file, so a synchronized root needs no locking
// - Trade-off: every query re-reads everything; fine at personal-history
//   scale
//
// Why merge at read time (not maintain a global index)?
// - Appends stay a single O(1) write on the playback path, where mpv is
//   waiting on us
// - Each monthly file is already time-ordered, so one sort after
//   concatenation restores global order
// - The pre-merged initial_records file is a trusted prefix from a one-time
//   import and skips that sort

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod output;

pub use args::{Cli, Commands, DeployAction, QuerySelector, RecordSource};
pub use commands::run;
