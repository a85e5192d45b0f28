use anyhow::Result;
use owo_colors::OwoColorize;
use partner_core::memories::{MemoryFilter, select};
use partner_core::seed::sample_memories;

use crate::commands::today;
use crate::render::Render;

pub fn run(search: &str, filter: &str) -> Result<()> {
    let filter: MemoryFilter = filter.parse()?;
    let memories = sample_memories();
    let found = select(search, filter, today(), &memories);

    let filters: Vec<String> = MemoryFilter::ALL
        .iter()
        .map(|f| {
            if *f == filter {
                f.label().bold().underline().to_string()
            } else {
                f.label().dimmed().to_string()
            }
        })
        .collect();
    println!("{}", filters.join("  "));
    println!();

    if found.is_empty() {
        println!("{}", "No memories found".dimmed());
        println!(
            "{}",
            "Try adjusting your search or filter to find what you're looking for".dimmed()
        );
        return Ok(());
    }

    for memory in found {
        println!("{}", memory.render());
        println!();
    }

    Ok(())
}
