use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Category value meaning "no category constraint".
pub const CATEGORY_ALL: &str = "all";

/// Filter specification over the event catalog.
///
/// All fields are optional; an absent field imposes no constraint and the
/// provided criteria combine with logical AND. The predicate has no side
/// effects and an empty match set is not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Case-insensitive substring match against title, description or
    /// location; a hit on any of the three satisfies the criterion.
    pub search: Option<String>,
    /// Exact category match; `"all"` is a sentinel for "unconstrained".
    pub category: Option<String>,
    /// Inclusive lower bound on `Event.date`.
    pub from_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `Event.date`.
    pub to_date: Option<DateTime<Utc>>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
                || event.location.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if category != CATEGORY_ALL && event.category != *category {
                return false;
            }
        }

        if let Some(from) = self.from_date {
            if event.date < from {
                return false;
            }
        }

        if let Some(to) = self.to_date {
            if event.date > to {
                return false;
            }
        }

        true
    }
}
