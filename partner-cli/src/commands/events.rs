use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use partner_core::agenda::Agenda;
use partner_core::config::PartnerConfig;

use crate::commands::{load_agenda, today};
use crate::render::render_event_details;

pub fn run(config: &PartnerConfig, date: NaiveDate) -> Result<()> {
    let agenda = load_agenda(config)?;
    print_day(&agenda, date);
    Ok(())
}

/// Print a day heading followed by each event on that day.
pub fn print_day(agenda: &Agenda, date: NaiveDate) {
    println!("{}", format_date_label(date).bold());

    let events = agenda.on(date);
    if events.is_empty() {
        println!("  {}", "No events scheduled for this day".dimmed());
        return;
    }

    for event in events {
        for line in render_event_details(event) {
            println!("  {}", line);
        }
    }
}

/// Format a date as a heading (e.g. "Sunday, June 15, 2025 · Today")
fn format_date_label(date: NaiveDate) -> String {
    let label = date.format("%A, %B %-d, %Y").to_string();
    match (date - today()).num_days() {
        0 => format!("{} · Today", label),
        1 => format!("{} · Tomorrow", label),
        -1 => format!("{} · Yesterday", label),
        _ => label,
    }
}
