use anyhow::Result;
use owo_colors::OwoColorize;
use partner_core::config::PartnerConfig;

use crate::commands::{load_agenda, today};
use crate::render::Render;

pub fn run(config: &PartnerConfig, id: &str) -> Result<()> {
    let mut agenda = load_agenda(config)?;
    let removed = agenda.remove(id)?;

    println!("{}", format!("  Removed: {}", removed.title).red());
    println!("{}", "  (events are kept in memory and not saved)".dimmed());
    println!();

    let view = agenda.month_view(removed.date, today(), Some(removed.date));
    println!("{}", view.render());

    Ok(())
}
