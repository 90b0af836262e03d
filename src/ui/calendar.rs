//! Plain-text month grid with marked dates.

use crate::core::highlight::HighlightIndex;
use crate::utils::date::all_days_of_month;
use ansi_term::Colour::{Green, Yellow};
use chrono::{Datelike, NaiveDate};

/// Render one month, Monday first. Dates with events are shown as `12*`,
/// `today` is bracketed. Colours are applied only when `color` is set.
pub fn render_month(index: &HighlightIndex, year: i32, month: u32, today: NaiveDate, color: bool) -> String {
    let days = all_days_of_month(year, month);
    let Some(first) = days.first() else {
        return String::new();
    };

    let mut out = String::new();
    out.push_str(&format!("{:^28}\n", first.format("%B %Y").to_string()));
    out.push_str(" Mo  Tu  We  Th  Fr  Sa  Su \n");

    let lead = first.weekday().num_days_from_monday() as usize;
    out.push_str(&"    ".repeat(lead));

    for d in &days {
        let marked = index.is_highlighted(*d);
        let cell = match (*d == today, marked) {
            (true, true) => format!("[{:>2}*", d.day()),
            (true, false) => format!("[{:>2}]", d.day()),
            (false, true) => format!(" {:>2}*", d.day()),
            (false, false) => format!(" {:>2} ", d.day()),
        };

        let cell = if !color {
            cell
        } else if marked {
            Yellow.bold().paint(cell).to_string()
        } else if *d == today {
            Green.paint(cell).to_string()
        } else {
            cell
        };
        out.push_str(&cell);

        if d.weekday().num_days_from_monday() == 6 {
            out.push('\n');
        }
    }

    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
