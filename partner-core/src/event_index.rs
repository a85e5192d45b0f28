//! Per-day event lookup.
//!
//! Matching is calendar-day equality: year, month and day-of-month. Any
//! `Datelike` value works as the query, so a zoned or naive timestamp finds
//! the events on its local day with the time portion ignored.

use chrono::Datelike;

use crate::event::CalendarEvent;

/// True when `a` and `b` fall on the same calendar day.
pub fn same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Events dated on `day`, in the order they appear in `events`.
pub fn events_on<'a, D: Datelike>(day: &D, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|e| same_day(&e.date, day)).collect()
}

/// Whether any event is dated on `day`.
pub fn has_events<D: Datelike>(day: &D, events: &[CalendarEvent]) -> bool {
    events.iter().any(|e| same_day(&e.date, day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;
    use crate::seed::sample_events;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn untimed_event_only_on_its_day() {
        let events = vec![CalendarEvent::new("Check-in", date(2025, 6, 15), EventCategory::Reminder)];

        assert_eq!(events_on(&date(2025, 6, 15), &events).len(), 1);
        assert!(events_on(&date(2025, 6, 14), &events).is_empty());
        assert!(events_on(&date(2025, 6, 16), &events).is_empty());
    }

    #[test]
    fn same_day_different_month_or_year_does_not_match() {
        let events = vec![CalendarEvent::new("Check-in", date(2025, 6, 15), EventCategory::Reminder)];

        assert!(!has_events(&date(2025, 7, 15), &events));
        assert!(!has_events(&date(2024, 6, 15), &events));
        assert!(has_events(&date(2025, 6, 15), &events));
    }

    #[test]
    fn timestamps_match_on_their_calendar_day() {
        let events = sample_events();
        let late_evening = Utc.with_ymd_and_hms(2025, 6, 18, 23, 59, 0).unwrap();
        let naive = date(2025, 6, 18).and_hms_opt(0, 0, 1).unwrap();

        assert_eq!(events_on(&late_evening, &events)[0].id, "2");
        assert_eq!(events_on(&naive, &events)[0].id, "2");
    }

    #[test]
    fn preserves_input_order() {
        let day = date(2025, 6, 20);
        let events = vec![
            CalendarEvent::new("Second", day, EventCategory::Task).with_id("b"),
            CalendarEvent::new("Elsewhere", date(2025, 6, 21), EventCategory::Task).with_id("x"),
            CalendarEvent::new("First", day, EventCategory::Milestone).with_id("a"),
        ];

        let ids: Vec<_> = events_on(&day, &events).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn membership_matches_date_equality_for_every_day() {
        let events = sample_events();
        for day in crate::month_grid::build(date(2025, 6, 1)) {
            let found = events_on(&day, &events);
            for event in &events {
                let listed = found.iter().any(|e| e.id == event.id);
                assert_eq!(listed, event.date == day, "{} on {}", event.id, day);
            }
            assert_eq!(has_events(&day, &events), !found.is_empty());
        }
    }

    #[test]
    fn repeated_lookups_are_identical() {
        let events = sample_events();
        let day = date(2025, 6, 16);
        assert_eq!(events_on(&day, &events), events_on(&day, &events));
    }

    #[test]
    fn empty_list_has_nothing() {
        assert!(events_on(&date(2025, 6, 15), &[]).is_empty());
        assert!(!has_events(&date(2025, 6, 15), &[]));
    }
}
