//! Calendar-interchange (.ics) export.

pub mod generate;

pub use generate::{export_event, generate_ics, CalendarFile, ICS_MIME};
