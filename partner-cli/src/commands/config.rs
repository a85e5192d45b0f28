use anyhow::Result;
use owo_colors::OwoColorize;
use partner_core::config::PartnerConfig;

pub fn run(config: &PartnerConfig, init: bool) -> Result<()> {
    let config_path = PartnerConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("{}", format!("Config already exists at {}", config_path.display()).dimmed());
        } else {
            PartnerConfig::create_default_config(&config_path)?;
            println!("{}", format!("Created {}", config_path.display()).green());
        }
        return Ok(());
    }

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    match config.events_path() {
        Some(path) => println!("  Events:  {}", path.display()),
        None => println!("  Events:  {}", "built-in samples".dimmed()),
    }

    println!();
    println!("{}", "Settings".bold());
    println!("  Theme:        {}", config.theme);
    println!("  Reply delay:  {} ms", config.chat.reply_delay_ms);
    println!("  Replies:      {} canned responses", config.chat.responses.len());

    Ok(())
}
