//! Day cells: grid dates paired with their events and display flags.
//!
//! Cells borrow from the event list and are rebuilt on every render.

use chrono::NaiveDate;

use crate::event::CalendarEvent;
use crate::event_index::events_on;
use crate::month_grid::MonthWindow;

/// Event chips drawn inside a cell before collapsing into "+N more".
pub const MAX_VISIBLE_EVENTS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub in_displayed_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub events: Vec<&'a CalendarEvent>,
}

impl<'a> DayCell<'a> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Events that get a chip in the cell.
    pub fn visible_events(&self) -> &[&'a CalendarEvent] {
        let end = self.events.len().min(MAX_VISIBLE_EVENTS);
        &self.events[..end]
    }

    /// How many events are hidden behind the "+N more" marker.
    pub fn overflow(&self) -> usize {
        self.events.len().saturating_sub(MAX_VISIBLE_EVENTS)
    }
}

/// A rendered month: the window plus one cell per date.
#[derive(Debug, Clone)]
pub struct MonthView<'a> {
    pub window: MonthWindow,
    pub cells: Vec<DayCell<'a>>,
}

impl<'a> MonthView<'a> {
    pub fn label(&self) -> String {
        self.window.label()
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<'a>]> {
        self.cells.chunks(crate::month_grid::DAYS_PER_WEEK)
    }

    pub fn selected(&self) -> Option<&DayCell<'a>> {
        self.cells.iter().find(|c| c.is_selected)
    }
}

/// Build the cells for the month containing `reference`.
pub fn compose<'a>(
    reference: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    events: &'a [CalendarEvent],
) -> MonthView<'a> {
    let window = MonthWindow::for_date(reference);

    let cells = window
        .days()
        .into_iter()
        .map(|date| DayCell {
            date,
            in_displayed_month: window.in_month(date),
            is_today: date == today,
            is_selected: selected == Some(date),
            events: events_on(&date, events),
        })
        .collect();

    MonthView { window, cells }
}
