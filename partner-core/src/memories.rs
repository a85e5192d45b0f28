//! Saved memories and their search/filter rules.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::PartnerError;

#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub favorite: bool,
}

/// Memories whose title, content or any tag contains `query`, ignoring case.
/// A blank query matches everything.
pub fn search<'a>(query: &str, memories: &'a [Memory]) -> Vec<&'a Memory> {
    let needle = query.trim().to_lowercase();
    memories
        .iter()
        .filter(|m| {
            needle.is_empty()
                || m.title.to_lowercase().contains(&needle)
                || m.content.to_lowercase().contains(&needle)
                || m.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoryFilter {
    #[default]
    All,
    /// The Sunday-to-Saturday week containing today.
    ThisWeek,
    ThisMonth,
    Last3Months,
    LastYear,
    Favorites,
}

impl MemoryFilter {
    pub const ALL: [MemoryFilter; 6] = [
        MemoryFilter::All,
        MemoryFilter::ThisWeek,
        MemoryFilter::ThisMonth,
        MemoryFilter::Last3Months,
        MemoryFilter::LastYear,
        MemoryFilter::Favorites,
    ];

    pub fn matches(&self, memory: &Memory, today: NaiveDate) -> bool {
        match self {
            MemoryFilter::All => true,
            MemoryFilter::ThisWeek => {
                let start = today - Days::new(u64::from(today.weekday().num_days_from_sunday()));
                let end = start + Days::new(6);
                memory.date >= start && memory.date <= end
            }
            MemoryFilter::ThisMonth => {
                memory.date.year() == today.year() && memory.date.month() == today.month()
            }
            MemoryFilter::Last3Months => {
                memory.date >= today - Months::new(3) && memory.date <= today
            }
            MemoryFilter::LastYear => memory.date >= today - Months::new(12) && memory.date <= today,
            MemoryFilter::Favorites => memory.favorite,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemoryFilter::All => "All Memories",
            MemoryFilter::ThisWeek => "This Week",
            MemoryFilter::ThisMonth => "This Month",
            MemoryFilter::Last3Months => "Last 3 Months",
            MemoryFilter::LastYear => "Last Year",
            MemoryFilter::Favorites => "Favorites",
        }
    }
}

impl fmt::Display for MemoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MemoryFilter {
    type Err = PartnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "all" | "all-memories" => Ok(MemoryFilter::All),
            "this-week" | "week" => Ok(MemoryFilter::ThisWeek),
            "this-month" | "month" => Ok(MemoryFilter::ThisMonth),
            "last-3-months" | "quarter" => Ok(MemoryFilter::Last3Months),
            "last-year" | "year" => Ok(MemoryFilter::LastYear),
            "favorites" | "favourites" => Ok(MemoryFilter::Favorites),
            other => Err(PartnerError::Parse(format!("Unknown memory filter '{}'", other))),
        }
    }
}

/// Apply a filter and a search query together. Input order is kept.
pub fn select<'a>(
    query: &str,
    filter: MemoryFilter,
    today: NaiveDate,
    memories: &'a [Memory],
) -> Vec<&'a Memory> {
    search(query, memories)
        .into_iter()
        .filter(|m| filter.matches(m, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_memories;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(found: &[&Memory]) -> Vec<String> {
        found.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let memories = sample_memories();

        assert_eq!(ids(&search("JOURNALING", &memories)), vec!["2"]);
        assert_eq!(ids(&search("surprise", &memories)), vec!["3"]);
        assert_eq!(ids(&search("book", &memories)), vec!["4"]);
    }

    #[test]
    fn blank_search_returns_everything_in_order() {
        let memories = sample_memories();
        assert_eq!(ids(&search("  ", &memories)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(search("skydiving", &sample_memories()).is_empty());
    }

    #[test]
    fn this_week_uses_sunday_start() {
        let memories = sample_memories();
        // Sat 2025-06-14: week is Jun 8 ..= Jun 14.
        let found = select("", MemoryFilter::ThisWeek, date(2025, 6, 14), &memories);
        assert_eq!(ids(&found), vec!["1", "2", "3", "4"]);

        // Sun 2025-06-15 starts a new week.
        assert!(select("", MemoryFilter::ThisWeek, date(2025, 6, 15), &memories).is_empty());
    }

    #[test]
    fn month_and_range_filters() {
        let memories = sample_memories();
        let today = date(2025, 8, 1);

        assert!(select("", MemoryFilter::ThisMonth, today, &memories).is_empty());
        assert_eq!(select("", MemoryFilter::Last3Months, today, &memories).len(), 4);
        assert_eq!(select("", MemoryFilter::LastYear, date(2026, 6, 11), &memories).len(), 3);
    }

    #[test]
    fn select_keeps_input_order() {
        let mut memories = sample_memories();
        memories.swap(0, 3);

        let found = select("", MemoryFilter::All, date(2025, 6, 15), &memories);
        assert_eq!(ids(&found), vec!["4", "2", "3", "1"]);

        let favorites = select("", MemoryFilter::Favorites, date(2025, 6, 15), &memories);
        assert_eq!(ids(&favorites), vec!["3", "1"]);
    }

    #[test]
    fn favorites_and_search_combine() {
        let memories = sample_memories();
        let found = select("trip", MemoryFilter::Favorites, date(2025, 6, 15), &memories);
        assert_eq!(ids(&found), vec!["3"]);
    }

    #[test]
    fn filter_names_parse() {
        assert_eq!("this-week".parse::<MemoryFilter>().unwrap(), MemoryFilter::ThisWeek);
        assert_eq!("Last 3 Months".parse::<MemoryFilter>().unwrap(), MemoryFilter::Last3Months);
        assert!("someday".parse::<MemoryFilter>().is_err());
    }
}
