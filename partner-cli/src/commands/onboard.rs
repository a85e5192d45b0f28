use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, MultiSelect, Select};
use owo_colors::OwoColorize;
use partner_core::onboarding::{
    AddressStyle, CommunicationStyle, INTERESTS, OnboardingStep, OnboardingWizard,
};

pub fn run() -> Result<()> {
    let mut wizard = OnboardingWizard::new();

    loop {
        let step = wizard.step();
        print_step_header(&wizard);

        match step {
            OnboardingStep::Welcome => {
                println!(
                    "  I'm excited to get to know you! In the next few steps, I'll ask you some questions to help personalize your experience."
                );
            }
            OnboardingStep::Basics => {
                let name: String = Input::new()
                    .with_prompt("  What's your name?")
                    .allow_empty(true)
                    .interact_text()?;
                let birthday = prompt_birthday()?;
                wizard.set_basics(Some(&name), birthday);
            }
            OnboardingStep::Interests => {
                let picked = MultiSelect::new()
                    .with_prompt("  Select your interests (space to toggle, enter to confirm)")
                    .items(&INTERESTS)
                    .interact()?;
                let chosen: Vec<&str> = picked.into_iter().map(|i| INTERESTS[i]).collect();
                wizard.set_interests(&chosen)?;
            }
            OnboardingStep::Preferences => {
                let address = Select::new()
                    .with_prompt("  How would you like me to address you?")
                    .items(&["Formally", "Casually"])
                    .default(1)
                    .interact()?;
                let address = if address == 0 {
                    AddressStyle::Formal
                } else {
                    AddressStyle::Casual
                };

                let styles: Vec<String> =
                    CommunicationStyle::ALL.iter().map(|s| s.to_string()).collect();
                let style = Select::new()
                    .with_prompt("  Communication style preference")
                    .items(&styles)
                    .default(0)
                    .interact()?;

                wizard.set_preferences(address, CommunicationStyle::ALL[style]);
            }
            OnboardingStep::Complete => break,
        }

        wizard.next();
    }

    let profile = wizard.finish()?;

    println!();
    println!("{}", "Your profile".bold());
    println!("  Name:       {}", profile.name.as_deref().unwrap_or("(not given)"));
    match profile.birthday {
        Some(birthday) => println!("  Birthday:   {}", birthday.format("%B %-d")),
        None => println!("  Birthday:   {}", "(not given)".dimmed()),
    }
    println!("  Interests:  {}", profile.interests.join(", "));
    println!("  Address me: {}", profile.address_style);
    println!("  Style:      {}", profile.communication_style);

    Ok(())
}

fn print_step_header(wizard: &OnboardingWizard) {
    let step = wizard.step();
    let filled = (wizard.progress() * 20.0).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));

    println!();
    println!("{}", bar.magenta());
    println!("{}", step.title().bold());
    println!("{}", step.description().dimmed());
}

/// Ask for a birthday until it parses or is left blank.
fn prompt_birthday() -> Result<Option<NaiveDate>> {
    loop {
        let input: String = Input::new()
            .with_prompt("  When's your birthday? (YYYY-MM-DD, skip)")
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match crate::utils::dates::parse_day(&input) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => eprintln!("  {}", e.red()),
        }
    }
}
