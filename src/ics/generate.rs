//! ICS document generation for calendar downloads.
//!
//! The calendar import tools the site supports expect the exact document
//! the page has always produced: fixed field order, unfolded lines, and
//! `YYYYMMDDTHHMMSSZ` timestamps. The document is therefore rendered from
//! a fixed template rather than a generic serializer.

use chrono::NaiveDateTime;
use indoc::formatdoc;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SiteResult;
use crate::event::{Catalog, EventRecord};

/// MIME type the download is served with.
pub const ICS_MIME: &str = "text/calendar";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A calendar file offered to the user as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFile {
    /// Event title with whitespace runs collapsed to underscores, `.ics`.
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

/// Render the .ics document for a single event.
///
/// Event date/times are civil times interpreted as UTC; the catalog
/// carries no zone. Embedded newlines in the description are escaped to
/// the literal two-character sequence `\n` per RFC 5545 TEXT rules.
pub fn generate_ics(event: &EventRecord) -> String {
    formatdoc! {r"
        BEGIN:VCALENDAR
        VERSION:2.0
        PRODID:-//Pathfinders Club//Event//EN
        CALSCALE:GREGORIAN
        BEGIN:VEVENT
        DTSTART:{start}
        DTEND:{end}
        SUMMARY:{summary}
        DESCRIPTION:{description}
        LOCATION:{location}
        STATUS:CONFIRMED
        END:VEVENT
        END:VCALENDAR",
        start = utc_stamp(event.starts_at()),
        end = utc_stamp(event.ends_at()),
        summary = event.title,
        description = event.description.replace('\n', "\\n"),
        location = event.location,
    }
}

/// Build the download for the catalog entry a calendar button points at.
pub fn export_event(catalog: &Catalog, index: usize) -> SiteResult<CalendarFile> {
    let event = catalog.get(index)?;
    Ok(CalendarFile {
        filename: format!("{}.ics", WHITESPACE_RUN.replace_all(&event.title, "_")),
        mime: ICS_MIME,
        contents: generate_ics(event),
    })
}

fn utc_stamp(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ics_timestamps() {
        // Investiture Ceremony: 2025-12-06 10:00-12:00.
        let catalog = Catalog::builtin();
        let ics = generate_ics(catalog.get(2).unwrap());

        assert!(
            ics.lines().any(|l| l == "DTSTART:20251206T100000Z"),
            "missing exact DTSTART line. ICS:\n{}",
            ics
        );
        assert!(
            ics.lines().any(|l| l == "DTEND:20251206T120000Z"),
            "missing exact DTEND line. ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_generate_ics_exact_document() {
        let event = EventRecord::parse(
            "Investiture Ceremony",
            "2025-12-06",
            "10:00",
            "2025-12-06",
            "12:00",
            "Celebrate achievements as Pathfinders receive their honors and badges. \
             Families and friends welcome!",
            "Church Auditorium",
        )
        .unwrap();

        let expected = "BEGIN:VCALENDAR\n\
                        VERSION:2.0\n\
                        PRODID:-//Pathfinders Club//Event//EN\n\
                        CALSCALE:GREGORIAN\n\
                        BEGIN:VEVENT\n\
                        DTSTART:20251206T100000Z\n\
                        DTEND:20251206T120000Z\n\
                        SUMMARY:Investiture Ceremony\n\
                        DESCRIPTION:Celebrate achievements as Pathfinders receive their honors \
                        and badges. Families and friends welcome!\n\
                        LOCATION:Church Auditorium\n\
                        STATUS:CONFIRMED\n\
                        END:VEVENT\n\
                        END:VCALENDAR";

        assert_eq!(generate_ics(&event), expected);
    }

    #[test]
    fn test_generate_ics_escapes_description_newlines() {
        let mut event = Catalog::builtin().get(0).unwrap().clone();
        event.description = "Line one\nLine two".to_string();

        let ics = generate_ics(&event);
        assert!(
            ics.contains("DESCRIPTION:Line one\\nLine two"),
            "newline not escaped. ICS:\n{}",
            ics
        );
        // One content line, not two.
        assert!(!ics.contains("DESCRIPTION:Line one\nLine two"));
    }

    #[test]
    fn test_export_event_filename_and_mime() {
        let catalog = Catalog::builtin();

        let file = export_event(&catalog, 0).unwrap();
        assert_eq!(file.filename, "Monthly_Campout.ics");
        assert_eq!(file.mime, "text/calendar");
        assert!(file.contents.starts_with("BEGIN:VCALENDAR"));

        let file = export_event(&catalog, 1).unwrap();
        assert_eq!(file.filename, "Community_Service_Day.ics");
    }

    #[test]
    fn test_export_event_collapses_whitespace_runs() {
        let mut catalog_event = Catalog::builtin().get(0).unwrap().clone();
        catalog_event.title = "Spring  Fair\tand Picnic".to_string();
        let catalog = Catalog::new(vec![catalog_event]);

        let file = export_event(&catalog, 0).unwrap();
        assert_eq!(file.filename, "Spring_Fair_and_Picnic.ics");
    }

    #[test]
    fn test_export_event_unknown_index() {
        let catalog = Catalog::builtin();
        assert!(export_event(&catalog, 9).is_err());
    }
}
