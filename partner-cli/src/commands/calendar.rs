use anyhow::Result;
use chrono::NaiveDate;
use partner_core::config::PartnerConfig;

use crate::commands::events::print_day;
use crate::commands::{load_agenda, today};
use crate::render::{Render, render_legend};

pub fn run(config: &PartnerConfig, month: Option<NaiveDate>, select: Option<NaiveDate>) -> Result<()> {
    let agenda = load_agenda(config)?;
    let today = today();

    // Selecting a day without a month shows that day's month.
    let selected = select.unwrap_or(today);
    let reference = month.or(select).unwrap_or(today);

    let view = agenda.month_view(reference, today, Some(selected));
    tracing::debug!(month = %view.label(), cells = view.cells.len(), "rendering month");

    println!("{}", view.render());
    println!();
    println!("{}", render_legend());
    println!();
    print_day(&agenda, selected);

    Ok(())
}
