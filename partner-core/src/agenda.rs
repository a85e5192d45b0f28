//! In-memory event list backing the calendar.

use chrono::NaiveDate;

use crate::day_cell::{MonthView, compose};
use crate::error::{PartnerError, PartnerResult};
use crate::event::CalendarEvent;
use crate::event_index::events_on;

/// The calendar's working set of events. Nothing here is written to disk.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    events: Vec<CalendarEvent>,
}

impl Agenda {
    /// Build an agenda from a loaded or seeded list. Ids must be unique.
    pub fn new(events: Vec<CalendarEvent>) -> PartnerResult<Self> {
        let mut agenda = Agenda::default();
        for event in events {
            agenda.add(event)?;
        }
        Ok(agenda)
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Append an event. Ids must be unique.
    pub fn add(&mut self, event: CalendarEvent) -> PartnerResult<()> {
        if self.get(&event.id).is_some() {
            return Err(PartnerError::DuplicateEvent(event.id));
        }
        tracing::debug!(id = %event.id, date = %event.date, "adding event");
        self.events.push(event);
        Ok(())
    }

    /// Remove an event by id, returning it.
    pub fn remove(&mut self, id: &str) -> PartnerResult<CalendarEvent> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| PartnerError::EventNotFound(id.to_string()))?;
        tracing::debug!(id, "removing event");
        Ok(self.events.remove(index))
    }

    pub fn on(&self, day: NaiveDate) -> Vec<&CalendarEvent> {
        events_on(&day, &self.events)
    }

    pub fn month_view(
        &self,
        reference: NaiveDate,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> MonthView<'_> {
        compose(reference, today, selected, &self.events)
    }
}
