pub mod add;
pub mod calendar;
pub mod chat;
pub mod config;
pub mod events;
pub mod memories;
pub mod onboard;
pub mod quiz;
pub mod remove;
pub mod theme;

use anyhow::{Context, Result};
use partner_core::agenda::Agenda;
use partner_core::config::PartnerConfig;
use partner_core::event::load_events;
use partner_core::seed::sample_events;

/// Events from the configured file, or the built-in samples.
pub fn load_agenda(config: &PartnerConfig) -> Result<Agenda> {
    let events = match config.events_path() {
        Some(path) => load_events(&path)
            .with_context(|| format!("Could not load events from {}", path.display()))?,
        None => sample_events(),
    };
    tracing::info!(count = events.len(), "agenda loaded");
    Ok(Agenda::new(events)?)
}

/// Today's date in local time.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
