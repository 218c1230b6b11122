//! Upcoming/past partitioning of the events page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::Catalog;

/// Which subset of the catalog is currently shown.
///
/// Serializes as the lowercase tag the filter buttons carry in the markup
/// (`"upcoming"` / `"past"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    Upcoming,
    Past,
}

impl FilterMode {
    /// Classify one event date against today. The boundary is inclusive on
    /// the upcoming side: same-day events are always upcoming.
    pub fn matches(self, event_date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            FilterMode::Upcoming => event_date >= today,
            FilterMode::Past => event_date < today,
        }
    }
}

/// View effects for one filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEffect {
    /// Show or hide the event card at this catalog index.
    SetCardVisible { index: usize, visible: bool },
    /// Highlight or clear one of the two filter buttons.
    SetButtonActive { mode: FilterMode, active: bool },
}

/// Active filter state for the events page. Exactly one mode is active at
/// a time; the page starts on "upcoming".
#[derive(Debug)]
pub struct EventFilter {
    mode: FilterMode,
}

impl Default for EventFilter {
    fn default() -> Self {
        EventFilter {
            mode: FilterMode::Upcoming,
        }
    }
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// A filter button was clicked. `today` is computed once by the caller
    /// (already truncated to a date) so the whole pass classifies against a
    /// single instant.
    ///
    /// An empty result is valid and silent; it is only logged.
    pub fn select(
        &mut self,
        mode: FilterMode,
        catalog: &Catalog,
        today: NaiveDate,
    ) -> Vec<FilterEffect> {
        self.mode = mode;

        let mut effects = vec![
            FilterEffect::SetButtonActive {
                mode: FilterMode::Upcoming,
                active: mode == FilterMode::Upcoming,
            },
            FilterEffect::SetButtonActive {
                mode: FilterMode::Past,
                active: mode == FilterMode::Past,
            },
        ];

        let mut visible = 0usize;
        for (index, event) in catalog.events().iter().enumerate() {
            let shown = mode.matches(event.date, today);
            if shown {
                visible += 1;
            }
            effects.push(FilterEffect::SetCardVisible {
                index,
                visible: shown,
            });
        }

        if visible == 0 {
            debug!(?mode, "no events match the selected filter");
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_indices(effects: &[FilterEffect]) -> Vec<usize> {
        effects
            .iter()
            .filter_map(|e| match e {
                FilterEffect::SetCardVisible {
                    index,
                    visible: true,
                } => Some(*index),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_filter_partitions_builtin_catalog() {
        // Catalog dates: 2025-11-15, 2025-11-22, 2025-12-06.
        let catalog = Catalog::builtin();
        let today = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let mut filter = EventFilter::new();

        let effects = filter.select(FilterMode::Upcoming, &catalog, today);
        assert_eq!(visible_indices(&effects), vec![1, 2]);

        let effects = filter.select(FilterMode::Past, &catalog, today);
        assert_eq!(visible_indices(&effects), vec![0]);
        assert_eq!(filter.mode(), FilterMode::Past);
    }

    #[test]
    fn test_same_day_event_is_upcoming() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 22).unwrap();
        assert!(FilterMode::Upcoming.matches(today, today));
        assert!(!FilterMode::Past.matches(today, today));
    }

    #[test]
    fn test_exactly_one_button_active() {
        let catalog = Catalog::builtin();
        let today = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        let effects = EventFilter::new().select(FilterMode::Past, &catalog, today);

        assert!(effects.contains(&FilterEffect::SetButtonActive {
            mode: FilterMode::Past,
            active: true,
        }));
        assert!(effects.contains(&FilterEffect::SetButtonActive {
            mode: FilterMode::Upcoming,
            active: false,
        }));
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        // All catalog events are in the future relative to this date.
        let catalog = Catalog::builtin();
        let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let effects = EventFilter::new().select(FilterMode::Past, &catalog, today);
        assert!(visible_indices(&effects).is_empty());
    }

    #[test]
    fn test_mode_tags_round_trip() {
        assert_eq!(
            serde_json::to_string(&FilterMode::Upcoming).unwrap(),
            "\"upcoming\""
        );
        let mode: FilterMode = serde_json::from_str("\"past\"").unwrap();
        assert_eq!(mode, FilterMode::Past);
    }
}
