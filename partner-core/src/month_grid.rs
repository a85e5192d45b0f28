//! Month grid construction for a Sunday-first, seven-column calendar.
//!
//! The window for a month starts on the Sunday on or before the 1st and ends
//! on the Saturday on or after the last day, so it always covers whole weeks.

use chrono::{Datelike, Days, Months, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

/// Column headers matching the grid's Sunday-first layout.
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The closed date range rendered for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    month_start: NaiveDate,
    first_cell: NaiveDate,
    last_cell: NaiveDate,
}

impl MonthWindow {
    /// Window for the month containing `reference`. Only its year and month matter.
    ///
    /// # Panics
    ///
    /// When the window would run past the range of `NaiveDate`, which only
    /// happens for the first and last representable months. Use
    /// [`MonthWindow::checked_for_date`] for dates that are not known to be
    /// in range.
    pub fn for_date(reference: NaiveDate) -> Self {
        match Self::checked_for_date(reference) {
            Some(window) => window,
            None => panic!("no month window for {reference}: outside the supported date range"),
        }
    }

    /// Like `for_date`, but `None` when the window would leave the range of `NaiveDate`.
    pub fn checked_for_date(reference: NaiveDate) -> Option<Self> {
        let month_start = first_of_month(reference);
        let month_end = month_start
            .checked_add_months(Months::new(1))?
            .checked_sub_days(Days::new(1))?;

        let lead = month_start.weekday().num_days_from_sunday();
        let trail = 6 - month_end.weekday().num_days_from_sunday();

        Some(MonthWindow {
            month_start,
            first_cell: month_start.checked_sub_days(Days::new(u64::from(lead)))?,
            last_cell: month_end.checked_add_days(Days::new(u64::from(trail)))?,
        })
    }

    /// First day of the displayed month.
    pub fn month_start(&self) -> NaiveDate {
        self.month_start
    }

    pub fn first_cell(&self) -> NaiveDate {
        self.first_cell
    }

    pub fn last_cell(&self) -> NaiveDate {
        self.last_cell
    }

    /// Number of cells, always a multiple of seven.
    pub fn len(&self) -> usize {
        (self.last_cell - self.first_cell).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn week_count(&self) -> usize {
        self.len() / DAYS_PER_WEEK
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_cell && date <= self.last_cell
    }

    /// Whether `date` belongs to the displayed month rather than a neighbour.
    pub fn in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.month_start.year() && date.month() == self.month_start.month()
    }

    /// Every date in the window, ascending, no gaps.
    pub fn days(&self) -> Vec<NaiveDate> {
        let last = self.last_cell;
        self.first_cell
            .iter_days()
            .take_while(|d| *d <= last)
            .collect()
    }

    /// The window split into Sunday-to-Saturday rows.
    pub fn weeks(&self) -> Vec<Vec<NaiveDate>> {
        self.days()
            .chunks(DAYS_PER_WEEK)
            .map(|week| week.to_vec())
            .collect()
    }

    /// First day of the following month.
    pub fn next_month(&self) -> NaiveDate {
        self.month_start + Months::new(1)
    }

    /// First day of the preceding month.
    pub fn prev_month(&self) -> NaiveDate {
        self.month_start - Months::new(1)
    }

    /// Heading such as "June 2025".
    pub fn label(&self) -> String {
        self.month_start.format("%B %Y").to_string()
    }
}

/// Ordered dates needed to render the month containing `reference`.
///
/// Panics under the same conditions as [`MonthWindow::for_date`].
pub fn build(reference: NaiveDate) -> Vec<NaiveDate> {
    MonthWindow::for_date(reference).days()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn june_2025_window() {
        // June 1 2025 is a Sunday, June 30 a Monday.
        let days = build(date(2025, 6, 15));

        assert_eq!(days.first(), Some(&date(2025, 6, 1)));
        assert_eq!(days.last(), Some(&date(2025, 7, 5)));
        assert_eq!(days.len(), 35);
    }

    #[test]
    fn leading_days_come_from_previous_month() {
        // May 1 2025 is a Thursday.
        let window = MonthWindow::for_date(date(2025, 5, 20));

        assert_eq!(window.first_cell(), date(2025, 4, 27));
        assert_eq!(window.last_cell(), date(2025, 5, 31));
        assert!(!window.in_month(date(2025, 4, 30)));
        assert!(window.in_month(date(2025, 5, 1)));
    }

    #[test]
    fn february_that_fits_in_four_weeks() {
        // Feb 2015 starts on a Sunday and has 28 days.
        let window = MonthWindow::for_date(date(2015, 2, 10));
        assert_eq!(window.len(), 28);
        assert_eq!(window.week_count(), 4);
    }

    #[test]
    fn month_needing_six_weeks() {
        // Aug 2025 starts on a Friday and has 31 days.
        let window = MonthWindow::for_date(date(2025, 8, 1));
        assert_eq!(window.week_count(), 6);
        assert_eq!(window.first_cell(), date(2025, 7, 27));
        assert_eq!(window.last_cell(), date(2025, 9, 6));
    }

    #[test]
    fn every_month_is_whole_weeks_without_gaps() {
        for year in [2024, 2025, 2100] {
            for month in 1..=12 {
                let reference = date(year, month, 1);
                let days = build(reference);

                assert_eq!(days.len() % DAYS_PER_WEEK, 0, "{year}-{month}");
                assert_eq!(days[0].weekday(), Weekday::Sun);
                assert_eq!(days[days.len() - 1].weekday(), Weekday::Sat);

                for pair in days.windows(2) {
                    assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
                }

                let unique: HashSet<_> = days.iter().collect();
                assert_eq!(unique.len(), days.len());

                let in_month = days.iter().filter(|d| d.month() == month).count();
                let month_len = (reference + Months::new(1) - reference).num_days() as usize;
                assert_eq!(in_month, month_len);
            }
        }
    }

    #[test]
    fn only_year_and_month_matter() {
        assert_eq!(build(date(2024, 2, 1)), build(date(2024, 2, 29)));
        assert_eq!(build(date(2025, 6, 15)), build(date(2025, 6, 15)));
    }

    #[test]
    fn weeks_are_sunday_to_saturday_rows() {
        let weeks = MonthWindow::for_date(date(2025, 6, 15)).weeks();
        assert_eq!(weeks.len(), 5);
        for week in &weeks {
            assert_eq!(week.len(), DAYS_PER_WEEK);
            assert_eq!(week[0].weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let december = MonthWindow::for_date(date(2025, 12, 31));
        assert_eq!(december.next_month(), date(2026, 1, 1));

        let january = MonthWindow::for_date(date(2025, 1, 31));
        assert_eq!(january.prev_month(), date(2024, 12, 1));
    }

    #[test]
    fn label_and_contains() {
        let window = MonthWindow::for_date(date(2025, 6, 15));
        assert_eq!(window.label(), "June 2025");
        assert!(window.contains(date(2025, 7, 5)));
        assert!(!window.contains(date(2025, 7, 6)));
    }

    #[test]
    fn windows_at_the_edges_of_the_date_range() {
        assert_eq!(MonthWindow::checked_for_date(NaiveDate::MAX), None);
        assert_eq!(MonthWindow::checked_for_date(NaiveDate::MIN), None);

        let june = date(2025, 6, 15);
        assert_eq!(MonthWindow::checked_for_date(june), Some(MonthWindow::for_date(june)));
    }

    #[test]
    #[should_panic(expected = "outside the supported date range")]
    fn build_past_the_last_month_panics() {
        build(NaiveDate::MAX);
    }
}
