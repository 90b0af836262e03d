use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Event;
use crate::ui::messages::header;
use crate::utils::date::parse_date_arg;
use ansi_term::Colour::Fixed;
use chrono::NaiveDate;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { day } = &cli.command {
        let store = super::open_store(cli, cfg)?;

        match day {
            Some(d) => {
                let date = parse_date_arg(d)?;
                let events = store.list_on_day(date)?;
                print_day(date, &events);
            }
            None => {
                let events = store.list_from_now()?;
                if events.is_empty() {
                    println!("No upcoming events from {}.", store.today());
                    return Ok(());
                }
                for (date, group) in group_by_day(&events) {
                    print_day(date, group);
                }
            }
        }
    }
    Ok(())
}

/// Split an ordered list into runs of events sharing a day.
fn group_by_day(events: &[Event]) -> Vec<(NaiveDate, &[Event])> {
    let mut out = Vec::new();
    let mut start = 0;
    for i in 1..=events.len() {
        if i == events.len() || events[i].day() != events[start].day() {
            out.push((events[start].day(), &events[start..i]));
            start = i;
        }
    }
    out
}

/// Long US-style label, e.g. "Thursday, February 20, 2020".
fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn print_day(date: NaiveDate, events: &[Event]) {
    header(long_date(date));
    if events.is_empty() {
        println!("No events for {}", date);
        return;
    }
    for ev in events {
        println!("{} {}", Fixed(244).paint(format!("#{:<4}", ev.id)), ev);
    }
    println!();
}
