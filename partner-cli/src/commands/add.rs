use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use partner_core::config::PartnerConfig;
use partner_core::event::{CalendarEvent, EventCategory};

use crate::commands::events::print_day;
use crate::commands::load_agenda;

pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub category: String,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

pub fn run(config: &PartnerConfig, new: NewEvent) -> Result<()> {
    let category: EventCategory = new.category.parse()?;

    let mut event = CalendarEvent::new(&new.title, new.date, category);
    event.time = new.time.filter(|t| !t.trim().is_empty());
    event.location = new.location.filter(|l| !l.trim().is_empty());
    event.description = new.description.filter(|d| !d.trim().is_empty());

    let mut agenda = load_agenda(config)?;
    agenda.add(event)?;

    println!("{}", format!("  Added: {}", new.title).green());
    println!("{}", "  (events are kept in memory and not saved)".dimmed());
    println!();
    print_day(&agenda, new.date);

    Ok(())
}
