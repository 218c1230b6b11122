//! The event catalog.
//!
//! Events are immutable records supplied by the page content, held in an
//! ordered sequence and addressed by position. The three club events from
//! the events page ship as the built-in catalog; a shell can also supply
//! its own catalog as JSON.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// A single club event as published on the events page.
///
/// Date/times are civil times with no zone attached; the calendar export
/// interprets them as UTC (see [`crate::ics::generate`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub description: String,
    pub location: String,
}

impl EventRecord {
    /// Build a record from the page's string form: `YYYY-MM-DD` dates and
    /// `HH:MM` times. Malformed input is a content error and fails loudly.
    #[allow(clippy::too_many_arguments)]
    pub fn parse(
        title: &str,
        date: &str,
        time: &str,
        end_date: &str,
        end_time: &str,
        description: &str,
        location: &str,
    ) -> SiteResult<Self> {
        Ok(EventRecord {
            title: title.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d")?,
            time: NaiveTime::parse_from_str(time, "%H:%M")?,
            end_date: NaiveDate::parse_from_str(end_date, "%Y-%m-%d")?,
            end_time: NaiveTime::parse_from_str(end_time, "%H:%M")?,
            description: description.to_string(),
            location: location.to_string(),
        })
    }

    /// Start of the event as a single timestamp.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// End of the event as a single timestamp.
    pub fn ends_at(&self) -> NaiveDateTime {
        self.end_date.and_time(self.end_time)
    }
}

/// Ordered list of events, indexed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    events: Vec<EventRecord>,
}

impl Catalog {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Catalog { events }
    }

    /// Deserialize a catalog from the JSON form a shell embeds in the page.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The catalog baked into the events page.
    pub fn builtin() -> Self {
        let events = [
            (
                "Monthly Campout",
                "2025-11-15",
                "18:00",
                "2025-11-17",
                "14:00",
                "Join us for a weekend of outdoor adventure, worship, and fellowship. \
                 Bring your tent, sleeping bag, and sense of adventure!",
                "Pine Ridge Campground",
            ),
            (
                "Community Service Day",
                "2025-11-22",
                "09:00",
                "2025-11-22",
                "14:00",
                "Help us serve our community by volunteering at the food bank. \
                 We will sort donations, pack boxes, and make a real difference.",
                "Local Food Bank",
            ),
            (
                "Investiture Ceremony",
                "2025-12-06",
                "10:00",
                "2025-12-06",
                "12:00",
                "Celebrate achievements as Pathfinders receive their honors and badges. \
                 Families and friends welcome!",
                "Church Auditorium",
            ),
        ]
        .into_iter()
        .map(|(title, date, time, end_date, end_time, description, location)| {
            // Static content, checked by tests below.
            EventRecord::parse(title, date, time, end_date, end_time, description, location)
                .expect("built-in catalog is well-formed")
        })
        .collect();

        Catalog { events }
    }

    /// Look up an event by its position on the page.
    pub fn get(&self, index: usize) -> SiteResult<&EventRecord> {
        self.events.get(index).ok_or(SiteError::UnknownEvent(index))
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
