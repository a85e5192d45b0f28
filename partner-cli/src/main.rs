mod commands;
mod render;
mod utils;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use partner_core::config::PartnerConfig;

use crate::utils::dates::{parse_day, parse_month};

#[derive(Parser)]
#[command(name = "partner")]
#[command(about = "Your companion's calendar, chat, memories and quizzes in the terminal")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid and the selected day's events
    Calendar {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = parse_month)]
        month: Option<NaiveDate>,

        /// Day to list events for (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_day)]
        select: Option<NaiveDate>,
    },
    /// List the events on one day
    Events {
        #[arg(value_parser = parse_day)]
        date: NaiveDate,
    },
    /// Add an event for this session and show its day
    Add {
        title: String,

        #[arg(short, long, value_parser = parse_day)]
        date: NaiveDate,

        /// reminder, activity, milestone or task
        #[arg(short, long, default_value = "reminder")]
        category: String,

        /// Time label, e.g. "7:00 PM"
        #[arg(short, long)]
        time: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Remove an event by id for this session and show its month
    Remove { id: String },
    /// Talk to your companion
    Chat,
    /// Browse saved memories
    Memories {
        /// Case-insensitive text to look for in titles, content and tags
        #[arg(short, long, default_value = "")]
        search: String,

        /// all, this-week, this-month, last-3-months, last-year or favorites
        #[arg(short, long, default_value = "all")]
        filter: String,
    },
    /// List quizzes, or take one by id
    Quiz {
        id: Option<String>,

        /// Only list quizzes in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Walk through onboarding and print the resulting profile
    Onboard,
    /// Show the configured theme
    Theme,
    /// Show configuration paths and values
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::logging::init_tracing(cli.verbose)?;

    let config = PartnerConfig::load()?;

    match cli.command {
        Commands::Calendar { month, select } => commands::calendar::run(&config, month, select),
        Commands::Events { date } => commands::events::run(&config, date),
        Commands::Add {
            title,
            date,
            category,
            time,
            location,
            description,
        } => commands::add::run(
            &config,
            commands::add::NewEvent {
                title,
                date,
                category,
                time,
                location,
                description,
            },
        ),
        Commands::Remove { id } => commands::remove::run(&config, &id),
        Commands::Chat => commands::chat::run(&config).await,
        Commands::Memories { search, filter } => commands::memories::run(&search, &filter),
        Commands::Quiz { id, category } => commands::quiz::run(id.as_deref(), category.as_deref()),
        Commands::Onboard => commands::onboard::run(),
        Commands::Theme => commands::theme::run(&config),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
