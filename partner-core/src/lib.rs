//! Core types for the partner companion.
//!
//! This crate provides everything front-ends share:
//! - `month_grid`, `event_index` and `day_cell` for the Sunday-first month calendar
//! - `event` and `agenda` for the calendar's in-memory event list
//! - `chat`, `memories`, `quiz` and `onboarding` for the companion's other screens
//! - `config` for the user's settings file

pub mod agenda;
pub mod chat;
pub mod config;
pub mod day_cell;
pub mod error;
pub mod event;
pub mod event_index;
pub mod memories;
pub mod month_grid;
pub mod onboarding;
pub mod presentation;
pub mod quiz;
pub mod seed;
pub mod theme;

pub use error::{PartnerError, PartnerResult};
pub use event::{CalendarEvent, EventCategory};
