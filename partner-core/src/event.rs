//! Calendar event types.
//!
//! Events are plain values: they are created (from seed data, an events file,
//! or the `add` command), never edited in place, and removed by id.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PartnerError, PartnerResult};

/// A dated entry on the companion calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    /// Local calendar day; no time zone semantics.
    pub date: NaiveDate,
    /// Free-form time label shown next to the title, e.g. "10:00 AM".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CalendarEvent {
    /// Create an event with a fresh id and no optional fields set.
    pub fn new(title: &str, date: NaiveDate, category: EventCategory) -> Self {
        CalendarEvent {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            date,
            time: None,
            location: None,
            description: None,
            category,
            participants: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_time(mut self, time: &str) -> Self {
        self.time = Some(time.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Short label used in grid cells: "10:00 AM · Weekly Check-in".
    pub fn chip_label(&self) -> String {
        match &self.time {
            Some(time) => format!("{} · {}", time, self.title),
            None => self.title.clone(),
        }
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// The closed set of event kinds the calendar knows how to colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Reminder,
    Activity,
    Milestone,
    Task,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Reminder,
        EventCategory::Activity,
        EventCategory::Milestone,
        EventCategory::Task,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Reminder => "reminder",
            EventCategory::Activity => "activity",
            EventCategory::Milestone => "milestone",
            EventCategory::Task => "task",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = PartnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reminder" => Ok(EventCategory::Reminder),
            "activity" => Ok(EventCategory::Activity),
            "milestone" => Ok(EventCategory::Milestone),
            "task" => Ok(EventCategory::Task),
            other => Err(PartnerError::Parse(format!(
                "Unknown event category '{}'. Expected one of: reminder, activity, milestone, task",
                other
            ))),
        }
    }
}

/// On-disk shape of an events file: a list of `[[event]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
struct EventsFile {
    #[serde(default, rename = "event")]
    events: Vec<CalendarEvent>,
}

/// Parse events from TOML text.
pub fn parse_events(content: &str) -> PartnerResult<Vec<CalendarEvent>> {
    let file: EventsFile =
        toml::from_str(content).map_err(|e| PartnerError::Parse(e.to_string()))?;
    Ok(file.events)
}

/// Load events from a TOML file. The file is only ever read.
pub fn load_events(path: &Path) -> PartnerResult<Vec<CalendarEvent>> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_events(&content)?;
    tracing::debug!(path = %path.display(), count = events.len(), "loaded events file");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Activity".parse::<EventCategory>().unwrap(), EventCategory::Activity);
        assert_eq!(" task ".parse::<EventCategory>().unwrap(), EventCategory::Task);
        assert!("birthday".parse::<EventCategory>().is_err());
    }

    #[test]
    fn chip_label_includes_time_when_present() {
        let timed = CalendarEvent::new("Coffee", date(2025, 6, 16), EventCategory::Activity)
            .with_time("3:30 PM");
        let untimed = CalendarEvent::new("Journal", date(2025, 6, 12), EventCategory::Task);

        assert_eq!(timed.chip_label(), "3:30 PM · Coffee");
        assert_eq!(untimed.chip_label(), "Journal");
    }

    #[test]
    fn new_events_get_distinct_ids() {
        let a = CalendarEvent::new("A", date(2025, 6, 1), EventCategory::Task);
        let b = CalendarEvent::new("A", date(2025, 6, 1), EventCategory::Task);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn parse_events_file_with_optional_fields() {
        let toml = r#"
[[event]]
id = "1"
title = "Weekly Check-in"
date = "2025-06-15"
time = "10:00 AM"
category = "reminder"
tags = ["weekly"]

[[event]]
id = "3"
title = "3 Month Anniversary"
date = "2025-06-20"
category = "milestone"
"#;

        let events = parse_events(toml).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].time.as_deref(), Some("10:00 AM"));
        assert_eq!(events[0].tags, vec!["weekly".to_string()]);
        assert_eq!(events[1].category, EventCategory::Milestone);
        assert!(events[1].location.is_none());
        assert!(events[1].participants.is_empty());
    }

    #[test]
    fn parse_events_rejects_unknown_category() {
        let toml = r#"
[[event]]
id = "x"
title = "Mystery"
date = "2025-06-20"
category = "party"
"#;
        assert!(matches!(parse_events(toml), Err(PartnerError::Parse(_))));
    }

    #[test]
    fn load_events_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.toml");
        std::fs::write(
            &path,
            "[[event]]\nid = \"a\"\ntitle = \"Walk\"\ndate = \"2025-07-01\"\ncategory = \"activity\"\n",
        )
        .unwrap();

        let events = load_events(&path).unwrap();
        assert_eq!(events[0].date, date(2025, 7, 1));
    }

    #[test]
    fn load_events_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_events(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(PartnerError::Io(_))));
    }
}
