//! TUI rendering traits for partner types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to partner-core types using owo_colors.

use chrono::Datelike;
use owo_colors::OwoColorize;
use partner_core::chat::{Message, Role};
use partner_core::day_cell::{DayCell, MAX_VISIBLE_EVENTS, MonthView};
use partner_core::event::{CalendarEvent, EventCategory};
use partner_core::memories::Memory;
use partner_core::month_grid::WEEKDAY_LABELS;
use partner_core::presentation::ColorToken;
use partner_core::quiz::Quiz;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Visible width of one grid cell: two digits, event dots, overflow mark.
const CELL_WIDTH: usize = 2 + MAX_VISIBLE_EVENTS + 1;

/// Colorize text with a category colour
pub fn paint(token: ColorToken, text: &str) -> String {
    match token {
        ColorToken::Blue => text.blue().to_string(),
        ColorToken::Purple => text.magenta().to_string(),
        ColorToken::Amber => text.yellow().to_string(),
        ColorToken::Green => text.green().to_string(),
        ColorToken::Gray => text.bright_black().to_string(),
    }
}

impl Render for EventCategory {
    fn render(&self) -> String {
        paint(self.color(), self.as_str())
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        format!("{} {}", paint(self.category.color(), "●"), self.chip_label())
    }
}

impl Render for DayCell<'_> {
    fn render(&self) -> String {
        let number = format!("{:>2}", self.date.day());
        let mut day = if self.is_today {
            number.bold().reversed().to_string()
        } else if self.in_displayed_month {
            number
        } else {
            number.dimmed().to_string()
        };
        if self.is_selected {
            day = day.underline().to_string();
        }

        let visible = self.visible_events();
        let dots: String = visible
            .iter()
            .map(|e| paint(e.category.color(), "•"))
            .collect();
        let padding = " ".repeat(MAX_VISIBLE_EVENTS - visible.len());
        let overflow = if self.overflow() > 0 {
            "+".dimmed().to_string()
        } else {
            " ".to_string()
        };

        format!("{}{}{}{}", day, dots, padding, overflow)
    }
}

impl Render for MonthView<'_> {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let width = CELL_WIDTH * WEEKDAY_LABELS.len() + WEEKDAY_LABELS.len() - 1;
        lines.push(format!("{:^width$}", self.label()).bold().to_string());

        let header: Vec<String> = WEEKDAY_LABELS
            .iter()
            .map(|d| format!("{:<CELL_WIDTH$}", d))
            .collect();
        lines.push(header.join(" ").dimmed().to_string());

        for week in self.weeks() {
            let row: Vec<String> = week.iter().map(|cell| cell.render()).collect();
            lines.push(row.join(" "));
        }

        lines.join("\n")
    }
}

/// Full detail lines for an event in the selected-day list
pub fn render_event_details(event: &CalendarEvent) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} {}",
        paint(event.category.color(), "▌"),
        event.title.bold(),
        format!("[{}]", event.id).dimmed()
    )];

    if let Some(time) = &event.time {
        lines.push(format!("  {} {}", "time".dimmed(), time));
    }
    if let Some(location) = &event.location {
        lines.push(format!("  {} {}", "where".dimmed(), location));
    }
    if let Some(description) = &event.description {
        lines.push(format!("  {}", description));
    }
    if !event.participants.is_empty() {
        lines.push(format!("  {} {}", "with".dimmed(), event.participants.join(", ")));
    }
    if !event.tags.is_empty() {
        let tags: Vec<String> = event.tags.iter().map(|t| format!("#{}", t)).collect();
        lines.push(format!("  {}", tags.join(" ").dimmed()));
    }

    lines
}

/// Legend mapping marker colours to categories, naming the colour for
/// terminals that show none.
pub fn render_legend() -> String {
    EventCategory::ALL
        .iter()
        .map(|c| {
            let color = c.color();
            format!(
                "{} {} {}",
                paint(color, "•"),
                c.as_str(),
                format!("({})", color.name()).dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

impl Render for Message {
    fn render(&self) -> String {
        let time = self.timestamp.format("%H:%M").to_string();
        let who = match self.role {
            Role::User => self.role.to_string().cyan().to_string(),
            Role::Assistant => self.role.to_string().magenta().bold().to_string(),
        };
        format!("{} {} {}", time.dimmed(), who, self.content)
    }
}

impl Render for Memory {
    fn render(&self) -> String {
        let star = if self.favorite { "★ " } else { "" };
        let tags: Vec<String> = self.tags.iter().map(|t| format!("#{}", t)).collect();
        format!(
            "{}{} {}\n  {}\n  {} {}",
            star.yellow(),
            self.title.bold(),
            self.date.format("%b %-d, %Y").to_string().dimmed(),
            self.content,
            tags.join(" ").dimmed(),
            format!("♥ {}  💬 {}", self.likes, self.comments).dimmed()
        )
    }
}

impl Render for Quiz {
    fn render(&self) -> String {
        let mut badges = Vec::new();
        if self.featured {
            badges.push("featured".yellow().to_string());
        }
        if self.completed {
            badges.push("completed".green().to_string());
        }

        format!(
            "{} {} {}\n  {}\n  {}",
            self.title.bold(),
            format!("({})", self.id).dimmed(),
            badges.join(" "),
            self.description,
            format!(
                "{} · {} questions · {}",
                self.category, self.question_count, self.time_estimate
            )
            .dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_names_each_category_colour() {
        let legend = render_legend();
        for (category, colour) in [
            ("reminder", "(blue)"),
            ("activity", "(purple)"),
            ("milestone", "(amber)"),
            ("task", "(green)"),
        ] {
            assert!(legend.contains(category), "missing {category}");
            assert!(legend.contains(colour), "missing {colour}");
        }
    }
}
