use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::highlight::HighlightIndex;
use crate::errors::AppResult;
use crate::ui::calendar::render_month;
use crate::utils::date::parse_month;
use chrono::Datelike;
use std::io::IsTerminal;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Highlights { month } = &cli.command {
        let mut store = super::open_store(cli, cfg)?;
        let today = store.today();

        let (year, month) = match month {
            Some(m) => parse_month(m)?,
            None => (today.year(), today.month()),
        };

        let index = HighlightIndex::attach(&mut store)?;
        let index = index.borrow();

        let color = std::io::stdout().is_terminal();
        print!("{}", render_month(&index, year, month, today, color));

        let dates = index.highlighted_in_month(year, month);
        if dates.is_empty() {
            println!("\nNo events this month.");
        } else {
            println!("\nDates with events:");
            for d in dates {
                let n = index.count(d);
                println!("  {}  ({} event{})", d, n, if n == 1 { "" } else { "s" });
            }
        }
    }

    Ok(())
}
