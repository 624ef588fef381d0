use crate::args::RecordSource;
use anyhow::{Context, Result};
use chrono::Local;
use mhist_store::LogLayout;
use std::io::Read;

/// Append the given items to this host's monthly log.
///
/// mpv invokes this on every file load, so the happy path prints nothing.
pub fn handle(layout: &LogLayout, source: RecordSource) -> Result<()> {
    let items: Vec<String> = if source.from_stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read items from stdin")?;
        buffer.lines().map(str::to_string).collect()
    } else if let Some(item) = source.from_string {
        vec![item]
    } else {
        anyhow::bail!("either --from-string or --from-stdin is required");
    };

    let hostname =
        sysinfo::System::host_name().context("could not determine the local hostname")?;

    mhist_store::append_records(layout, &hostname, &items, Local::now())
        .context("failed to record history")?;

    Ok(())
}
