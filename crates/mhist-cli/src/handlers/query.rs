use crate::args::QuerySelector;
use crate::output;
use anyhow::Result;
use is_terminal::IsTerminal;
use mhist_engine::Query;
use mhist_store::LogLayout;

pub fn handle(
    layout: &LogLayout,
    selector: QuerySelector,
    limit: usize,
    fuzzy_ratio: u32,
) -> Result<()> {
    let records = mhist_store::load_all(layout)?;

    let query = if selector.last {
        Query::Last
    } else if let Some(pattern) = selector.fuzzy {
        Query::Fuzzy {
            pattern,
            threshold: fuzzy_ratio,
        }
    } else if let Some(words) = selector.with_words {
        Query::WithWords { words }
    } else {
        anyhow::bail!("one of --last, --fuzzy or --with-words is required");
    };

    let color = std::io::stdout().is_terminal();
    for record in mhist_engine::run(&records, &query, limit) {
        println!("{}", output::format_record(record, color));
    }

    Ok(())
}
