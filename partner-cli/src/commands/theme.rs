use anyhow::Result;
use owo_colors::OwoColorize;
use partner_core::config::PartnerConfig;

pub fn run(config: &PartnerConfig) -> Result<()> {
    let mode = config.theme;

    println!("{} {}", "Theme:".bold(), mode);
    if mode.resolved() != mode {
        println!("  {} {}", "resolves to".dimmed(), mode.resolved());
    }
    println!("  {} {}", "toggle gives".dimmed(), mode.toggled());

    Ok(())
}
